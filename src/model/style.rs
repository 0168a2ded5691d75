//! Text style derived from font names.

use serde::{Deserialize, Serialize};

/// The (bold, italic) pair attached to a run of text.
///
/// A value type: two styles are equal iff both fields match. Merge
/// decisions in the accumulator compare styles structurally, never by
/// fragment position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl Style {
    /// The unstyled default.
    pub const PLAIN: Style = Style {
        bold: false,
        italic: false,
    };

    /// Create a style from explicit flags.
    pub fn new(bold: bool, italic: bool) -> Self {
        Self { bold, italic }
    }

    /// Bold-only style.
    pub fn bold() -> Self {
        Self::new(true, false)
    }

    /// Italic-only style.
    pub fn italic() -> Self {
        Self::new(false, true)
    }

    /// Derive a style from a font name.
    ///
    /// Substring heuristic over the lower-cased name: `"bold"` sets bold,
    /// `"italic"` sets italic. Names that encode weight differently
    /// (e.g. `"Heavy"`, `"Oblique"`) classify as plain.
    pub fn from_font_name(name: &str) -> Self {
        let name = name.to_lowercase();
        Self {
            bold: name.contains("bold"),
            italic: name.contains("italic"),
        }
    }

    /// Check if neither component is set.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_font_name_bold_italic() {
        let style = Style::from_font_name("Arial-BoldItalic");
        assert!(style.bold);
        assert!(style.italic);
    }

    #[test]
    fn test_from_font_name_plain() {
        let style = Style::from_font_name("Arial");
        assert_eq!(style, Style::PLAIN);
    }

    #[test]
    fn test_from_font_name_case_insensitive() {
        assert!(Style::from_font_name("HELVETICA-BOLD").bold);
        assert!(Style::from_font_name("Times-ItalicMT").italic);
    }

    #[test]
    fn test_heuristic_ignores_other_weight_names() {
        // Semantic weights without the literal substrings stay plain.
        assert!(Style::from_font_name("Roboto-Heavy").is_plain());
        assert!(Style::from_font_name("Courier-Oblique").is_plain());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Style::new(true, false), Style::bold());
        assert_ne!(Style::bold(), Style::italic());
    }
}
