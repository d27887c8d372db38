//! Category analysis
//!
//! Identifies the weakest and strongest scoring categories. Ties break by
//! report declaration order (first occurrence wins) so the result is
//! deterministic for a given document.

use crate::error::PlanError;
use triage_report::{Category, MetricsReport};

/// Weakest and strongest categories of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAnalysis {
    /// Category with the minimum score
    pub weakest: Category,
    /// Category with the maximum score
    pub strongest: Category,
}

impl CategoryAnalysis {
    /// Analyze a report.
    ///
    /// # Errors
    /// [`PlanError::EmptyReport`] when the report carries no scores.
    pub fn of(report: &MetricsReport) -> Result<Self, PlanError> {
        let mut iter = report.iter();
        let (first, first_score) = iter.next().ok_or(PlanError::EmptyReport)?;

        let mut weakest = (first, first_score);
        let mut strongest = (first, first_score);
        for (category, score) in iter {
            // Strict comparisons keep the first occurrence on ties.
            if score < weakest.1 {
                weakest = (category, score);
            }
            if score > strongest.1 {
                strongest = (category, score);
            }
        }

        Ok(Self {
            weakest: weakest.0,
            strongest: strongest.0,
        })
    }
}
