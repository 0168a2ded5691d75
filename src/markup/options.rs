//! Markup extraction options.

/// How style tags are emitted around flushed runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagPolicy {
    /// Line-scoped tag wrapping: every flushed run is self-contained,
    /// wrapped in the minimal tag pair for its style. Tags never span a
    /// flush boundary.
    #[default]
    Wrapped,

    /// Stream tag toggling: a flush closes the style components that
    /// switched off and opens the ones that switched on, so tags stay open
    /// across runs with shared components. Document end closes whatever is
    /// still open.
    Toggled,
}

/// Options for markup extraction.
///
/// All behavior flows through a value passed per call; there is no hidden
/// process-wide configuration. `MarkupOptions::default()` is the default
/// every caller starts from.
#[derive(Debug, Clone)]
pub struct MarkupOptions {
    /// Tag emission policy.
    pub policy: TagPolicy,

    /// Emit `--- Page n ---` markers. A marker precedes every page,
    /// including the first.
    pub page_markers: bool,

    /// Apply NFC normalization to fragment text before accumulation.
    pub normalize_unicode: bool,
}

impl MarkupOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag emission policy.
    pub fn with_policy(mut self, policy: TagPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable page markers.
    pub fn with_page_markers(mut self, markers: bool) -> Self {
        self.page_markers = markers;
        self
    }

    /// Enable or disable NFC normalization of fragment text.
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            policy: TagPolicy::Wrapped,
            page_markers: true,
            normalize_unicode: false,
        }
    }
}
