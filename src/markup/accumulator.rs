//! Run accumulation and style-tag emission.

use crate::model::Style;

use super::{MarkupOptions, MarkupResult, MarkupStats, TagPolicy};

/// Merges consecutive same-style fragments into runs and emits markup.
///
/// The accumulator owns all extraction state for one document pass: the
/// output buffer, the text and style of the currently open run, and (under
/// [`TagPolicy::Toggled`]) the style whose tags are open in the output.
/// Callers drive it with [`start_page`](Self::start_page) and
/// [`push`](Self::push), then take the result with
/// [`finish`](Self::finish). Each document pass allocates a fresh
/// accumulator; nothing is shared between passes.
///
/// A fragment joins the open run iff its style equals the run's style.
/// Anything else flushes: the run's text is emitted with the tags its
/// policy calls for, and the run resets. Empty runs flush to nothing —
/// tags are only ever emitted around non-empty text.
#[derive(Debug)]
pub struct RunAccumulator {
    policy: TagPolicy,
    page_markers: bool,
    out: String,
    run_text: String,
    run_style: Style,
    /// Style whose tags are currently open in the output (Toggled only).
    open_style: Style,
    stats: MarkupStats,
}

impl RunAccumulator {
    /// Create an accumulator for one document pass.
    pub fn new(options: &MarkupOptions) -> Self {
        Self {
            policy: options.policy,
            page_markers: options.page_markers,
            out: String::new(),
            run_text: String::new(),
            run_style: Style::PLAIN,
            open_style: Style::PLAIN,
            stats: MarkupStats::new(),
        }
    }

    /// Begin a page, flushing any run left open by the previous one.
    ///
    /// The page marker itself carries no style tags: under the toggling
    /// policy, tags still open from the previous page are closed first.
    /// A marker precedes every page; pages after the first are separated
    /// from the preceding text by a line break.
    pub fn start_page(&mut self, number: u32) {
        self.flush();
        self.close_open_tags();
        self.stats.add_page();

        if self.page_markers {
            if number > 1 {
                self.out.push('\n');
            }
            self.out.push_str(&format!("--- Page {} ---\n", number));
        }
    }

    /// Feed one styled fragment.
    ///
    /// A style change flushes the open run before the new text starts
    /// accumulating. An end-of-line flag flushes the run (with this
    /// fragment's text inside it) and emits a line break, even when the
    /// style did not change.
    pub fn push(&mut self, text: &str, style: Style, has_eol: bool) {
        self.stats.add_fragment();

        if style != self.run_style {
            self.flush();
            self.run_style = style;
        }
        self.run_text.push_str(text);

        if has_eol {
            self.flush();
            self.out.push('\n');
            self.stats.add_line_break();
        }
    }

    /// Finalize: flush the open run, close any open tags, and return the
    /// trimmed markup with statistics.
    pub fn finish(mut self) -> MarkupResult {
        self.flush();
        self.close_open_tags();
        let content = self.out.trim().to_string();
        MarkupResult::new(content, self.stats)
    }

    /// Emit the open run according to the tag policy and reset it.
    fn flush(&mut self) {
        if self.run_text.is_empty() {
            return;
        }
        self.stats.add_run();

        match self.policy {
            TagPolicy::Wrapped => {
                let style = self.run_style;
                if style.italic {
                    self.out.push_str("<i>");
                }
                if style.bold {
                    self.out.push_str("<b>");
                }
                self.out.push_str(&self.run_text);
                if style.bold {
                    self.out.push_str("</b>");
                }
                if style.italic {
                    self.out.push_str("</i>");
                }
            }
            TagPolicy::Toggled => {
                self.transition_tags(self.run_style);
                self.out.push_str(&self.run_text);
            }
        }

        self.run_text.clear();
    }

    /// Emit the tag delta from the open style to `next`: closes for
    /// components switching off, opens for components switching on.
    fn transition_tags(&mut self, next: Style) {
        let prev = self.open_style;
        if prev.bold && !next.bold {
            self.out.push_str("</b>");
        }
        if prev.italic && !next.italic {
            self.out.push_str("</i>");
        }
        if !prev.italic && next.italic {
            self.out.push_str("<i>");
        }
        if !prev.bold && next.bold {
            self.out.push_str("<b>");
        }
        self.open_style = next;
    }

    fn close_open_tags(&mut self) {
        if self.policy == TagPolicy::Toggled {
            self.transition_tags(Style::PLAIN);
        }
    }
}
