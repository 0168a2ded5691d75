//! # markpdf
//!
//! Styled-markup text reconstruction from PDF text fragments.
//!
//! A PDF text layer reports page content as positioned fragments: a raw
//! string, an end-of-line flag, and a font reference. This library turns
//! that stream back into readable rich text — fragments concatenated in
//! reading order, consecutive same-style fragments merged into runs, each
//! run wrapped in `<b>`/`<i>` tags derived from its font name, with line
//! breaks and `--- Page n ---` markers preserved.
//!
//! PDF byte-stream parsing is not done here: any PDF library can feed the
//! extraction by implementing [`PdfSource`]. The bundled [`JsonSource`]
//! replays a recorded fragment dump.
//!
//! ## Quick Start
//!
//! ```
//! use markpdf::{extract_markup, JsonSource, MarkupOptions};
//!
//! fn main() -> markpdf::Result<()> {
//!     let source = JsonSource::from_json(
//!         r#"{"pages": [{
//!              "fragments": [{"text": "Hello ", "font": "f1"},
//!                            {"text": "World", "font": "f2"}],
//!              "fonts": {"f1": {"name": "Helvetica"},
//!                        "f2": {"name": "Helvetica-Bold"}}}]}"#,
//!     )?;
//!
//!     let markup = extract_markup(&source, &MarkupOptions::default())?;
//!     assert_eq!(markup, "--- Page 1 ---\nHello <b>World</b>");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two tag policies**: self-contained run wrapping or stream tag
//!   toggling ([`TagPolicy`])
//! - **Balanced tags**: opening and closing tag counts always match in the
//!   final output
//! - **Fail-fast errors**: a failing page aborts the document with the page
//!   number attached
//! - **`async`** (feature): await sources whose page extraction suspends
//! - **`quiz`** (feature): send the markup to a hosted language model and
//!   parse extracted multiple-choice questions

pub mod error;
pub mod extract;
pub mod markup;
pub mod model;
pub mod source;

#[cfg(feature = "quiz")]
pub mod quiz;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{extract_markup, extract_markup_with_stats};
pub use markup::{strip_tags, MarkupOptions, MarkupResult, MarkupStats, RunAccumulator, TagPolicy};
pub use model::{FontInfo, FontRef, Fragment, Style};
pub use source::{FragmentDump, JsonSource, PageDump, PdfSource};

#[cfg(feature = "async")]
pub use extract::{extract_markup_async, extract_markup_with_stats_async};
#[cfg(feature = "async")]
pub use source::AsyncPdfSource;

#[cfg(feature = "quiz")]
pub use quiz::{Question, QuestionSet, QuizClient};

use std::io::Read;
use std::path::Path;

/// Extract markup from a fragment dump in JSON form.
///
/// # Example
///
/// ```
/// use markpdf::{markup_from_json, MarkupOptions};
///
/// let markup = markup_from_json(
///     r#"{"pages": [{"fragments": [{"text": "Hi", "font": "f1"}]}]}"#,
///     &MarkupOptions::default(),
/// ).unwrap();
/// assert_eq!(markup, "--- Page 1 ---\nHi");
/// ```
pub fn markup_from_json(json: &str, options: &MarkupOptions) -> Result<String> {
    let source = JsonSource::from_json(json)?;
    extract_markup(&source, options)
}

/// Extract markup from a fragment dump read from a reader.
pub fn markup_from_reader<R: Read>(reader: R, options: &MarkupOptions) -> Result<String> {
    let source = JsonSource::from_reader(reader)?;
    extract_markup(&source, options)
}

/// Extract markup from a fragment dump file.
///
/// # Example
///
/// ```no_run
/// use markpdf::{markup_from_path, MarkupOptions};
///
/// let markup = markup_from_path("document.json", &MarkupOptions::default()).unwrap();
/// println!("{}", markup);
/// ```
pub fn markup_from_path<P: AsRef<Path>>(path: P, options: &MarkupOptions) -> Result<String> {
    let source = JsonSource::from_path(path)?;
    extract_markup(&source, options)
}
