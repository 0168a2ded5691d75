//! Fragment-dump source: replay a serialized fragment stream.
//!
//! A dump is the JSON record of what a PDF layer reported for a document:
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "fragments": [
//!         {"text": "Hello ", "font": "f1"},
//!         {"text": "World", "has_eol": true, "font": "f2"}
//!       ],
//!       "fonts": {
//!         "f1": {"name": "Helvetica"},
//!         "f2": {"name": "Helvetica-Bold"}
//!       }
//!     }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{FontInfo, FontRef, Fragment};
use crate::source::PdfSource;

/// A complete recorded fragment stream for a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FragmentDump {
    /// Pages in document order.
    pub pages: Vec<PageDump>,
}

impl FragmentDump {
    /// Create an empty dump.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page.
    pub fn add_page(&mut self, page: PageDump) {
        self.pages.push(page);
    }
}

/// One page's fragments and its font table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDump {
    /// Fragments in reading order.
    #[serde(default)]
    pub fragments: Vec<Fragment>,

    /// Font records keyed by the reference keys the fragments carry.
    #[serde(default)]
    pub fonts: HashMap<String, FontInfo>,
}

impl PageDump {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment.
    pub fn add_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Register a font record under a reference key.
    pub fn add_font(&mut self, key: impl Into<String>, info: FontInfo) {
        self.fonts.insert(key.into(), info);
    }
}

/// A [`PdfSource`] backed by a [`FragmentDump`].
#[derive(Debug, Clone)]
pub struct JsonSource {
    dump: FragmentDump,
}

impl JsonSource {
    /// Wrap an in-memory dump.
    pub fn new(dump: FragmentDump) -> Self {
        Self { dump }
    }

    /// Parse a dump from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let dump = serde_json::from_str(json).map_err(|e| Error::InvalidDump(e.to_string()))?;
        Ok(Self { dump })
    }

    /// Parse a dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dump = serde_json::from_reader(reader).map_err(|e| Error::InvalidDump(e.to_string()))?;
        Ok(Self { dump })
    }

    /// Parse a dump from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// The underlying dump.
    pub fn dump(&self) -> &FragmentDump {
        &self.dump
    }

    fn page(&self, page: u32) -> Result<&PageDump> {
        page.checked_sub(1)
            .and_then(|i| self.dump.pages.get(i as usize))
            .ok_or_else(|| Error::PageExtraction {
                page,
                message: format!("page out of range (dump has {} pages)", self.dump.pages.len()),
            })
    }
}

impl PdfSource for JsonSource {
    fn page_count(&self) -> u32 {
        self.dump.pages.len() as u32
    }

    fn page_fragments(&self, page: u32) -> Result<Vec<Fragment>> {
        Ok(self.page(page)?.fragments.clone())
    }

    fn resolve_font(&self, page: u32, font: &FontRef) -> Result<Option<FontInfo>> {
        Ok(self.page(page)?.fonts.get(font.as_str()).cloned())
    }
}
