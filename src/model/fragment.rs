//! Fragment-level types produced by the external PDF layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque font reference key.
///
/// The PDF layer identifies fonts by resource keys (e.g. `"g_d0_f1"`);
/// the key is only meaningful to the source that issued it and is never
/// interpreted here beyond equality and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontRef(String);

impl FontRef {
    /// Create a font reference from a source-issued key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key as issued by the source.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FontRef {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for FontRef {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One positioned text fragment reported by the PDF text-extraction layer.
///
/// Fragments arrive in reading order, are immutable, and are consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// The raw text content.
    pub text: String,

    /// Whether the source signaled an end of line after this fragment.
    #[serde(default)]
    pub has_eol: bool,

    /// Reference to the font the fragment was set in.
    pub font: FontRef,
}

impl Fragment {
    /// Create a fragment without an end-of-line flag.
    pub fn new(text: impl Into<String>, font: impl Into<FontRef>) -> Self {
        Self {
            text: text.into(),
            has_eol: false,
            font: font.into(),
        }
    }

    /// Mark the fragment as ending its line.
    pub fn with_eol(mut self) -> Self {
        self.has_eol = true;
        self
    }

    /// Check if the fragment carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A resolved font record.
///
/// Malformed records may lack a name; classification treats those as plain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontInfo {
    /// Base font name (e.g. `"Helvetica-Bold"`), if present.
    pub name: Option<String>,
}

impl FontInfo {
    /// Create a font record with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
