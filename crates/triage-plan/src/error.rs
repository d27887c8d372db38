//! Error types for the planning core

/// Errors raised while planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The report contains zero scored categories, so weakest/strongest
    /// cannot be determined and no tasks can be generated. Fatal.
    #[error("metrics report contains no scored categories")]
    EmptyReport,
}
