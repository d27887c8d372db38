//! Metrics report parsing
//!
//! The analysis collaborator emits a JSON document whose
//! `overall_analysis.average_scores` object maps category wire keys to
//! scores. [`MetricsReport`] is the immutable in-memory form of that
//! mapping, preserving the document's key order because later tie-breaks
//! depend on it.

use crate::category::Category;
use crate::error::ReportError;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Immutable per-category score mapping, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    scores: IndexMap<Category, f64>,
}

impl MetricsReport {
    /// Build a report from explicit scores (declaration order preserved).
    #[must_use]
    pub fn from_scores(scores: impl IntoIterator<Item = (Category, f64)>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    /// Parse an analysis document.
    ///
    /// Only `overall_analysis.average_scores` is consumed. Keys outside the
    /// closed category set (the collaborator also emits aggregate keys) and
    /// non-numeric values are skipped with a warning, never an error.
    pub fn from_value(doc: &Value) -> Result<Self, ReportError> {
        let scores_obj = doc
            .get("overall_analysis")
            .and_then(|v| v.get("average_scores"))
            .and_then(Value::as_object)
            .ok_or(ReportError::MissingScores)?;

        let mut scores = IndexMap::new();
        for (key, value) in scores_obj {
            let Some(category) = Category::from_key(key) else {
                warn!(key = %key, "skipping unrecognized score key");
                continue;
            };
            let Some(score) = value.as_f64() else {
                warn!(key = %key, "skipping non-numeric score");
                continue;
            };
            scores.insert(category, score);
        }

        Ok(Self { scores })
    }

    /// Parse an analysis document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ReportError> {
        let doc: Value = serde_json::from_str(text)?;
        Self::from_value(&doc)
    }

    /// Load and parse an analysis document from disk.
    ///
    /// The file handle is released on every exit path; a parse failure
    /// never yields a partial report.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Score for a category, if the report contains one.
    #[inline]
    #[must_use]
    pub fn score(&self, category: Category) -> Option<f64> {
        self.scores.get(&category).copied()
    }

    /// Iterate `(category, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.scores.iter().map(|(c, s)| (*c, *s))
    }

    /// Number of scored categories.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no category carries a score.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
