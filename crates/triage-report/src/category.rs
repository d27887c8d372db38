//! Closed set of health categories
//!
//! Categories are an enum, not string keys: adding or removing an axis is a
//! compile-time-checked change, and a mistyped key cannot become a silent
//! no-op in the rule book.

use serde::{Deserialize, Serialize};

/// One named axis of codebase health being scored.
///
/// Scores are real values in `[0, 1]`; lower is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Automated test and documentation completeness
    Coverage,
    /// Structural stability of module boundaries
    Architecture,
    /// Capacity to grow under load and scope
    Scalability,
    /// Runtime efficiency of hot paths
    Performance,
    /// Uniformity of conventions across the tree
    Consistency,
}

impl Category {
    /// All categories in canonical declaration order.
    pub const ALL: [Category; 5] = [
        Category::Coverage,
        Category::Architecture,
        Category::Scalability,
        Category::Performance,
        Category::Consistency,
    ];

    /// Stable wire key used in score documents.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Category::Coverage => "coverage",
            Category::Architecture => "architecture",
            Category::Scalability => "scalability",
            Category::Performance => "performance",
            Category::Consistency => "consistency",
        }
    }

    /// Parse a wire key back into a category.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
