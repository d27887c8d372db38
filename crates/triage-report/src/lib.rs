//! Triage Report - the metrics-report boundary
//!
//! Everything the planner knows about the outside world lives here:
//! - The closed set of health [`Category`] axes
//! - [`MetricsReport`]: the per-category score mapping parsed from the
//!   analysis collaborator's document
//! - [`ReportProvider`]: an injected source of the latest report, with a
//!   filesystem implementation that discovers reports by naming pattern
//!   and modification time
//!
//! The core planner (`triage-plan`) consumes these types and never touches
//! a filesystem itself.

#![warn(unreachable_pub)]

pub mod category;
pub mod error;
pub mod provider;
pub mod report;

pub use category::Category;
pub use error::ReportError;
pub use provider::{LatestFileProvider, ReportProvider, SingleFileProvider, REPORT_PREFIX, REPORT_SUFFIX};
pub use report::MetricsReport;
