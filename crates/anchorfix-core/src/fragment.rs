#![forbid(unsafe_code)]

//! URL fragment model.
//!
//! A [`Fragment`] is the portion of a URL after `#`. It is derived from the
//! host's navigation state on demand and never cached by the corrector; an
//! empty fragment means the page has no anchor target and no correction
//! should run.

/// The portion of a URL after `#`, identifying an in-page anchor target.
///
/// Constructed from either a raw `location.hash` string (which carries a
/// leading `#` when non-empty) or a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// The empty fragment (no anchor target).
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Build a fragment from a `location.hash`-style string.
    ///
    /// A leading `#` is stripped; `""` and `"#"` both yield the empty
    /// fragment.
    #[must_use]
    pub fn from_hash(hash: &str) -> Self {
        Self(hash.strip_prefix('#').unwrap_or(hash).to_owned())
    }

    /// Build a fragment from a full URL, taking everything after the first
    /// `#`. A URL without `#` yields the empty fragment.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        match url.split_once('#') {
            Some((_, frag)) => Self(frag.to_owned()),
            None => Self::empty(),
        }
    }

    /// Whether this fragment names no anchor target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The fragment text without the leading `#`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl core::fmt::Display for Fragment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a clicked link's `href` targets an in-page anchor.
///
/// Mirrors delegated click handling on `a[href^="#"]`: only hrefs that start
/// with `#` are tracked, everything else is a real navigation and ignored.
#[must_use]
pub fn href_targets_fragment(href: &str) -> bool {
    href.starts_with('#')
}
