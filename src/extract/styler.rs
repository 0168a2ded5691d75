//! Fragment style classification.

use crate::model::{FontInfo, Style};

/// Classify a fragment's style from its resolved font record.
///
/// An unresolved reference or a record without a name classifies as plain;
/// otherwise the style is derived from the font name heuristic
/// ([`Style::from_font_name`]). Pure: the same input always yields the same
/// style.
pub fn classify(font: Option<&FontInfo>) -> Style {
    match font.and_then(|f| f.name.as_deref()) {
        Some(name) => Style::from_font_name(name),
        None => Style::PLAIN,
    }
}
