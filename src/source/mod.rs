//! PDF source abstraction layer.
//!
//! Provides a trait-based interface to the external PDF text-extraction
//! collaborator, isolating the concrete PDF library from the markup logic.
//! Concrete adapters over a PDF library implement [`PdfSource`] out of this
//! crate; the bundled [`JsonSource`] replays a serialized fragment dump for
//! tooling and tests.

use crate::error::Result;
use crate::model::{FontInfo, FontRef, Fragment};

mod json;

pub use json::{FragmentDump, JsonSource, PageDump};

/// Abstract interface for per-page fragment access.
///
/// Pages are 1-indexed and visited in ascending order. Font resolution is
/// stable within a page: the same reference resolves to the same record for
/// the lifetime of the source.
pub trait PdfSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Fragments for the given page, in reading order.
    ///
    /// An `Err` here aborts the whole document operation.
    fn page_fragments(&self, page: u32) -> Result<Vec<Fragment>>;

    /// Resolve a font reference on the given page.
    ///
    /// `Ok(None)` is the recovered missing-font case (the fragment is
    /// classified as plain); `Err` is fatal for the document.
    fn resolve_font(&self, page: u32, font: &FontRef) -> Result<Option<FontInfo>>;
}

/// [`PdfSource`] with asynchronous per-page extraction.
///
/// Some PDF layers produce page text asynchronously; this variant lets the
/// extraction driver await them. Font resolution stays synchronous since
/// resolved records are cached page-locally by every known layer.
#[cfg(feature = "async")]
pub trait AsyncPdfSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Fragments for the given page, in reading order.
    fn page_fragments(
        &self,
        page: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Fragment>>> + Send;

    /// Resolve a font reference on the given page.
    fn resolve_font(&self, page: u32, font: &FontRef) -> Result<Option<FontInfo>>;
}

/// Every synchronous source is trivially usable where an async one is expected.
#[cfg(feature = "async")]
impl<T: PdfSource + Sync> AsyncPdfSource for T {
    fn page_count(&self) -> u32 {
        PdfSource::page_count(self)
    }

    async fn page_fragments(&self, page: u32) -> Result<Vec<Fragment>> {
        PdfSource::page_fragments(self, page)
    }

    fn resolve_font(&self, page: u32, font: &FontRef) -> Result<Option<FontInfo>> {
        PdfSource::resolve_font(self, page, font)
    }
}
