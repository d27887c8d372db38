//! Geometric priority ladder and tier classification
//!
//! Every priority weight in the planner is drawn from the progression
//! `{w, w², w³}` for a configured base `w > 1`. The ladder also owns the
//! tier classifier: a tier is never stored, only derived, so it cannot
//! drift out of sync with its weight.

use serde::{Deserialize, Serialize};

/// Default ladder base (the golden ratio).
pub const DEFAULT_BASE: f64 = 1.618_033_988_749_895;

/// One rung of the geometric progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rung {
    /// `w`
    Base,
    /// `w²`
    Squared,
    /// `w³`
    Cubed,
}

/// Discrete priority classification derived from a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityTier {
    /// `weight >= w³`
    Critical,
    /// `w² <= weight < w³`
    High,
    /// `w <= weight < w²`
    Medium,
    /// `weight < w`
    Low,
}

impl PriorityTier {
    /// Human-readable tier name.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::Critical => "Critical",
            PriorityTier::High => "High",
            PriorityTier::Medium => "Medium",
            PriorityTier::Low => "Low",
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The weight ladder `{w, w², w³}`.
///
/// Passed explicitly into the generator, classifier and builder; there is
/// no ambient global ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightLadder {
    base: f64,
}

impl WeightLadder {
    /// Create a ladder with the given base.
    ///
    /// # Panics
    /// Panics if `base <= 1` (the progression must be increasing).
    #[must_use]
    pub fn new(base: f64) -> Self {
        assert!(base > 1.0, "ladder base must exceed 1, got {base}");
        Self { base }
    }

    /// `w`
    #[inline]
    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// `w²`
    #[inline]
    #[must_use]
    pub fn squared(&self) -> f64 {
        self.base * self.base
    }

    /// `w³`
    #[inline]
    #[must_use]
    pub fn cubed(&self) -> f64 {
        self.base * self.base * self.base
    }

    /// Weight at a rung.
    #[inline]
    #[must_use]
    pub fn rung(&self, rung: Rung) -> f64 {
        match rung {
            Rung::Base => self.base(),
            Rung::Squared => self.squared(),
            Rung::Cubed => self.cubed(),
        }
    }

    /// Classify a weight into its tier.
    ///
    /// Total over the real line: anything that fails every `>=` comparison
    /// (including NaN) is `Low`.
    #[must_use]
    pub fn classify(&self, weight: f64) -> PriorityTier {
        if weight >= self.cubed() {
            PriorityTier::Critical
        } else if weight >= self.squared() {
            PriorityTier::High
        } else if weight >= self.base() {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }
}

impl Default for WeightLadder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}
