//! Document-level markup extraction.
//!
//! Drives the per-page loop over a [`PdfSource`]: fetch fragments, resolve
//! and classify fonts, and feed the [`RunAccumulator`]. Pages are processed
//! strictly in ascending order and fragments in their given order; every
//! call allocates fresh accumulation state, so repeated extraction of the
//! same document yields byte-identical output.
//!
//! Failures are fail-fast: the first page whose fragments or fonts cannot
//! be produced aborts the whole operation with
//! [`Error::PageExtraction`](crate::Error::PageExtraction) and no partial
//! output.

pub mod styler;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::markup::{MarkupOptions, MarkupResult, RunAccumulator};
use crate::model::{FontInfo, FontRef, Fragment};
use crate::source::PdfSource;

#[cfg(feature = "async")]
use crate::source::AsyncPdfSource;

/// Extract the markup string for a whole document.
pub fn extract_markup<S: PdfSource + ?Sized>(
    source: &S,
    options: &MarkupOptions,
) -> Result<String> {
    Ok(extract_markup_with_stats(source, options)?.content)
}

/// Extract the markup string together with extraction statistics.
pub fn extract_markup_with_stats<S: PdfSource + ?Sized>(
    source: &S,
    options: &MarkupOptions,
) -> Result<MarkupResult> {
    let page_count = source.page_count();
    if page_count == 0 {
        return Err(Error::EmptyDocument);
    }

    let mut acc = RunAccumulator::new(options);
    for page in 1..=page_count {
        let fragments = source
            .page_fragments(page)
            .map_err(|e| Error::for_page(page, e))?;
        feed_page(&mut acc, options, page, &fragments, |font| {
            source.resolve_font(page, font)
        })?;
    }
    Ok(acc.finish())
}

/// Async variant of [`extract_markup`] for sources whose per-page
/// extraction suspends. Semantics are identical to the sync path.
#[cfg(feature = "async")]
pub async fn extract_markup_async<S: AsyncPdfSource + ?Sized>(
    source: &S,
    options: &MarkupOptions,
) -> Result<String> {
    Ok(extract_markup_with_stats_async(source, options).await?.content)
}

/// Async variant of [`extract_markup_with_stats`].
#[cfg(feature = "async")]
pub async fn extract_markup_with_stats_async<S: AsyncPdfSource + ?Sized>(
    source: &S,
    options: &MarkupOptions,
) -> Result<MarkupResult> {
    let page_count = source.page_count();
    if page_count == 0 {
        return Err(Error::EmptyDocument);
    }

    let mut acc = RunAccumulator::new(options);
    for page in 1..=page_count {
        let fragments = source
            .page_fragments(page)
            .await
            .map_err(|e| Error::for_page(page, e))?;
        feed_page(&mut acc, options, page, &fragments, |font| {
            source.resolve_font(page, font)
        })?;
    }
    Ok(acc.finish())
}

/// Style and accumulate one page's fragments.
fn feed_page<R>(
    acc: &mut RunAccumulator,
    options: &MarkupOptions,
    page: u32,
    fragments: &[Fragment],
    resolve: R,
) -> Result<()>
where
    R: Fn(&FontRef) -> Result<Option<FontInfo>>,
{
    log::debug!("page {}: {} fragments", page, fragments.len());
    acc.start_page(page);

    for fragment in fragments {
        let font = resolve(&fragment.font).map_err(|e| Error::for_page(page, e))?;
        if font.is_none() {
            log::debug!("page {}: unresolved font {}", page, fragment.font);
        }
        let style = styler::classify(font.as_ref());

        if options.normalize_unicode {
            let text: String = fragment.text.nfc().collect();
            acc.push(&text, style, fragment.has_eol);
        } else {
            acc.push(&fragment.text, style, fragment.has_eol);
        }
    }
    Ok(())
}
