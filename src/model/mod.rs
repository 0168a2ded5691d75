//! Data model for fragment streams and derived styles.

mod fragment;
mod style;

pub use fragment::{FontInfo, FontRef, Fragment};
pub use style::Style;
