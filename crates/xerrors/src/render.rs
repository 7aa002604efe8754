//! Text rendering configuration.
//!
//! The default configuration produces the compatibility format:
//!
//! ```text
//! <file>:<line> <message>
//! <param>
//! ...
//! ```
//!
//! with aggregates rendered as the plain concatenation of their members.

/// How the capture site's file is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// Base name only (`disk.rs`).
    #[default]
    Basename,
    /// The full path recorded at compile time (`src/storage/disk.rs`).
    Full,
}

/// Configuration for rendering annotated errors and aggregates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// How to print the file of each capture site.
    pub path_style: PathStyle,
    /// Maximum number of aggregate members to render (0 = unlimited).
    ///
    /// Members past the limit are summarized on one trailing line.
    pub member_limit: usize,
}

impl RenderConfig {
    /// Set the path style.
    #[must_use]
    pub fn with_path_style(mut self, path_style: PathStyle) -> Self {
        self.path_style = path_style;
        self
    }

    /// Set the member limit (0 = unlimited).
    #[must_use]
    pub fn with_member_limit(mut self, member_limit: usize) -> Self {
        self.member_limit = member_limit;
        self
    }

    /// How many of `total` members get rendered.
    pub(crate) fn visible_members(&self, total: usize) -> usize {
        if self.member_limit == 0 {
            total
        } else {
            total.min(self.member_limit)
        }
    }
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
pub(crate) fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
