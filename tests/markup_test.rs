//! Integration tests for document markup extraction.

use markpdf::error::Result;
use markpdf::{
    extract_markup, extract_markup_with_stats, Error, FontInfo, FontRef, Fragment, FragmentDump,
    JsonSource, MarkupOptions, PageDump, PdfSource, TagPolicy,
};

/// Build a page with the given fragments and font table.
fn page(fragments: Vec<Fragment>, fonts: &[(&str, &str)]) -> PageDump {
    let mut page = PageDump::new();
    for fragment in fragments {
        page.add_fragment(fragment);
    }
    for (key, name) in fonts {
        page.add_font(*key, FontInfo::named(*name));
    }
    page
}

fn source(pages: Vec<PageDump>) -> JsonSource {
    let mut dump = FragmentDump::new();
    for page in pages {
        dump.add_page(page);
    }
    JsonSource::new(dump)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_scenario_plain_then_bold() {
    let source = source(vec![page(
        vec![
            Fragment::new("Hello ", "plain"),
            Fragment::new("World", "bold"),
        ],
        &[("plain", "Helvetica"), ("bold", "Helvetica-Bold")],
    )]);

    let markup = extract_markup(&source, &MarkupOptions::default()).unwrap();
    assert_eq!(markup, "--- Page 1 ---\nHello <b>World</b>");
}

#[test]
fn test_adjacent_same_style_fragments_merge() {
    let source = source(vec![page(
        vec![
            Fragment::new("A", "bold"),
            Fragment::new("B", "bold"),
            Fragment::new("C", "plain"),
        ],
        &[("plain", "Arial"), ("bold", "Arial-Bold")],
    )]);

    for policy in [TagPolicy::Wrapped, TagPolicy::Toggled] {
        let options = MarkupOptions::new().with_policy(policy);
        let markup = extract_markup(&source, &options).unwrap();
        assert!(
            markup.contains("<b>AB</b>C"),
            "policy {:?} split the run: {}",
            policy,
            markup
        );
        assert!(!markup.contains("<b>A</b><b>B</b>"));
    }
}

#[test]
fn test_eol_breaks_line_without_style_change() {
    let source = source(vec![page(
        vec![
            Fragment::new("first line", "f").with_eol(),
            Fragment::new("second line", "f"),
        ],
        &[("f", "Times-Roman")],
    )]);

    let markup = extract_markup(&source, &MarkupOptions::default()).unwrap();
    assert_eq!(markup, "--- Page 1 ---\nfirst line\nsecond line");
}

#[test]
fn test_empty_fragment_with_eol_breaks_but_adds_no_tags() {
    let source = source(vec![page(
        vec![
            Fragment::new("above", "bold"),
            Fragment::new("", "bold").with_eol(),
            Fragment::new("below", "bold"),
        ],
        &[("bold", "Courier-Bold")],
    )]);

    let markup = extract_markup(&source, &MarkupOptions::default()).unwrap();
    assert_eq!(markup, "--- Page 1 ---\n<b>above</b>\n<b>below</b>");
    assert!(!markup.contains("<b></b>"));
}

#[test]
fn test_font_name_classification_through_pipeline() {
    let source = source(vec![page(
        vec![
            Fragment::new("bi", "f1"),
            Fragment::new("plain", "f2"),
            Fragment::new("lost", "missing"),
        ],
        &[("f1", "Arial-BoldItalic"), ("f2", "Arial")],
    )]);

    let markup = extract_markup(&source, &MarkupOptions::default()).unwrap();
    // Bold-italic wraps italic outside, bold inside; the unresolved font
    // joins the plain run that precedes it.
    assert_eq!(markup, "--- Page 1 ---\n<i><b>bi</b></i>plainlost");
}

#[test]
fn test_tag_balance_both_policies() {
    let fragments = vec![
        Fragment::new("a", "bold"),
        Fragment::new("b", "bolditalic").with_eol(),
        Fragment::new("c", "italic"),
        Fragment::new("", "bold").with_eol(),
        Fragment::new("d", "plain"),
        Fragment::new("e", "bold"),
    ];
    let fonts: &[(&str, &str)] = &[
        ("bold", "Helvetica-Bold"),
        ("italic", "Helvetica-Italic"),
        ("bolditalic", "Helvetica-BoldItalic"),
        ("plain", "Helvetica"),
    ];
    let source = source(vec![
        page(fragments.clone(), fonts),
        page(fragments, fonts),
    ]);

    for policy in [TagPolicy::Wrapped, TagPolicy::Toggled] {
        let options = MarkupOptions::new().with_policy(policy);
        let markup = extract_markup(&source, &options).unwrap();
        assert_eq!(
            count(&markup, "<b>"),
            count(&markup, "</b>"),
            "bold tags unbalanced under {:?}: {}",
            policy,
            markup
        );
        assert_eq!(
            count(&markup, "<i>"),
            count(&markup, "</i>"),
            "italic tags unbalanced under {:?}: {}",
            policy,
            markup
        );
    }
}

#[test]
fn test_page_markers_precede_every_page() {
    let fonts: &[(&str, &str)] = &[("f", "Georgia")];
    let source = source(vec![
        page(vec![Fragment::new("one", "f")], fonts),
        page(vec![Fragment::new("two", "f")], fonts),
        page(vec![Fragment::new("three", "f")], fonts),
    ]);

    let markup = extract_markup(&source, &MarkupOptions::default()).unwrap();
    assert_eq!(
        markup,
        "--- Page 1 ---\none\n--- Page 2 ---\ntwo\n--- Page 3 ---\nthree"
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let fonts: &[(&str, &str)] = &[("b", "Verdana-Bold"), ("p", "Verdana")];
    let source = source(vec![page(
        vec![
            Fragment::new("x", "b").with_eol(),
            Fragment::new("y", "p"),
            Fragment::new("z", "b"),
        ],
        fonts,
    )]);

    let options = MarkupOptions::default();
    let first = extract_markup(&source, &options).unwrap();
    let second = extract_markup(&source, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_document_is_distinct_error() {
    let source = JsonSource::new(FragmentDump::new());
    let result = extract_markup(&source, &MarkupOptions::default());
    assert!(matches!(result, Err(Error::EmptyDocument)));
}

#[test]
fn test_stats_across_pages() {
    let fonts: &[(&str, &str)] = &[("f", "Arial"), ("b", "Arial-Bold")];
    let source = source(vec![
        page(
            vec![
                Fragment::new("a", "f").with_eol(),
                Fragment::new("b", "b"),
            ],
            fonts,
        ),
        page(vec![Fragment::new("c", "f")], fonts),
    ]);

    let result = extract_markup_with_stats(&source, &MarkupOptions::default()).unwrap();
    assert_eq!(result.stats.page_count, 2);
    assert_eq!(result.stats.fragment_count, 3);
    assert_eq!(result.stats.run_count, 3);
    assert_eq!(result.stats.line_break_count, 1);
}

/// Source whose second page fails, for fail-fast behavior.
struct FailingSource;

impl PdfSource for FailingSource {
    fn page_count(&self) -> u32 {
        2
    }

    fn page_fragments(&self, page: u32) -> Result<Vec<Fragment>> {
        if page == 1 {
            Ok(vec![Fragment::new("fine", "f")])
        } else {
            Err(Error::InvalidDump("backend gave up".to_string()))
        }
    }

    fn resolve_font(&self, _page: u32, _font: &FontRef) -> Result<Option<FontInfo>> {
        Ok(None)
    }
}

#[test]
fn test_failing_page_aborts_with_page_number() {
    let result = extract_markup(&FailingSource, &MarkupOptions::default());
    match result {
        Err(Error::PageExtraction { page, .. }) => assert_eq!(page, 2),
        other => panic!("expected PageExtraction, got {:?}", other.map(|_| ())),
    }
}

/// Source whose font resolver fails outright (as opposed to a missing
/// record, which is recovered to plain style).
struct BrokenResolverSource;

impl PdfSource for BrokenResolverSource {
    fn page_count(&self) -> u32 {
        1
    }

    fn page_fragments(&self, _page: u32) -> Result<Vec<Fragment>> {
        Ok(vec![Fragment::new("text", "f")])
    }

    fn resolve_font(&self, _page: u32, _font: &FontRef) -> Result<Option<FontInfo>> {
        Err(Error::InvalidDump("font table corrupt".to_string()))
    }
}

#[test]
fn test_failing_resolver_aborts_document() {
    let result = extract_markup(&BrokenResolverSource, &MarkupOptions::default());
    assert!(matches!(
        result,
        Err(Error::PageExtraction { page: 1, .. })
    ));
}
