//! Markup assembly: run accumulation, tag emission, output utilities.

mod accumulator;
mod options;
mod result;

pub use accumulator::RunAccumulator;
pub use options::{MarkupOptions, TagPolicy};
pub use result::{MarkupResult, MarkupStats};

use regex::Regex;

/// Remove the bold/italic tag vocabulary from rendered markup.
///
/// The tag set is closed (`<b>`, `</b>`, `<i>`, `</i>`), so this is plain
/// pattern removal, not HTML processing; page markers and line breaks are
/// left intact.
pub fn strip_tags(markup: &str) -> String {
    let re = Regex::new(r"</?[bi]>").unwrap();
    re.replace_all(markup, "").into_owned()
}
