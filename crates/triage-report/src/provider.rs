//! Report discovery
//!
//! The planner never scans the filesystem itself; it asks a
//! [`ReportProvider`] for the latest report. The production implementation
//! ([`LatestFileProvider`]) picks the most recently modified file matching
//! the analysis collaborator's naming pattern; tests supply their own
//! provider and never touch a disk.

use crate::error::ReportError;
use crate::report::MetricsReport;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Filename prefix of analysis reports.
pub const REPORT_PREFIX: &str = "health_analysis_";

/// Filename suffix of analysis reports.
pub const REPORT_SUFFIX: &str = ".json";

/// Source of the most recent metrics report.
pub trait ReportProvider {
    /// Produce the latest report, or fail naming the missing resource.
    fn latest(&self) -> Result<MetricsReport, ReportError>;
}

/// Discovers the most recently modified `health_analysis_*.json` in a
/// directory.
#[derive(Debug, Clone)]
pub struct LatestFileProvider {
    dir: PathBuf,
}

impl LatestFileProvider {
    /// Create a provider scanning `dir`.
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the newest matching report file.
    pub fn find_latest(&self) -> Result<PathBuf, ReportError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|source| ReportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries.flatten() {
            let path = entry.path();
            if !matches_pattern(&path) {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            if newest.as_ref().map_or(true, |(best, _)| modified > *best) {
                newest = Some((modified, path));
            }
        }

        newest
            .map(|(_, path)| path)
            .ok_or_else(|| ReportError::NoReportFound {
                dir: self.dir.clone(),
                pattern: format!("{REPORT_PREFIX}*{REPORT_SUFFIX}"),
            })
    }
}

impl ReportProvider for LatestFileProvider {
    fn latest(&self) -> Result<MetricsReport, ReportError> {
        let path = self.find_latest()?;
        debug!(path = %path.display(), "loading latest analysis report");
        MetricsReport::load(&path)
    }
}

/// Loads one explicitly named report file, bypassing discovery.
#[derive(Debug, Clone)]
pub struct SingleFileProvider {
    path: PathBuf,
}

impl SingleFileProvider {
    /// Create a provider for `path`.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportProvider for SingleFileProvider {
    fn latest(&self) -> Result<MetricsReport, ReportError> {
        MetricsReport::load(&self.path)
    }
}

fn matches_pattern(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.starts_with(REPORT_PREFIX) && name.ends_with(REPORT_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_matches_report_names() {
        assert!(matches_pattern(Path::new("health_analysis_1700000000.json")));
        assert!(!matches_pattern(Path::new("health_analysis_latest.txt")));
        assert!(!matches_pattern(Path::new("roadmap_1700000000.json")));
    }
}
