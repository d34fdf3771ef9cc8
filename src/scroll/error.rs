// src/scroll/error.rs
use std::fmt;

use super::range::VisibleRange;

/// Error a row render function may return; the row is skipped.
pub type RowError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ScrollError {
    #[error("Item height must be a positive number of pixels, got {0}")]
    InvalidItemHeight(u32),

    #[error("No row render function was supplied")]
    MissingRenderer,

    #[error("{}", describe_failures(.range, .failures))]
    RowsFailed {
        range: VisibleRange,
        failures: Vec<RowFailure>,
    },
}

fn describe_failures(range: &VisibleRange, failures: &[RowFailure]) -> String {
    match failures.first() {
        Some(first) => format!(
            "{} of {} rows in {}..{} failed to render (first: {})",
            failures.len(),
            range.len(),
            range.start,
            range.end,
            first
        ),
        None => format!("rows in {}..{} failed to render", range.start, range.end),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub index: usize,
    pub message: String,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.index, self.message)
    }
}

/// What a full render pass did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderReport {
    pub range: VisibleRange,
    pub rendered: usize,
    pub failures: Vec<RowFailure>,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_result(self) -> Result<VisibleRange, ScrollError> {
        if self.failures.is_empty() {
            Ok(self.range)
        } else {
            Err(ScrollError::RowsFailed {
                range: self.range,
                failures: self.failures,
            })
        }
    }
}

/// Result of a scroll-driven render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Window unchanged; no surface work was done.
    Unchanged(VisibleRange),
    Rendered(RenderReport),
}

impl RenderOutcome {
    pub fn range(&self) -> VisibleRange {
        match self {
            RenderOutcome::Unchanged(range) => *range,
            RenderOutcome::Rendered(report) => report.range,
        }
    }

    pub fn did_render(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report_into_result() {
        let report = RenderReport {
            range: VisibleRange::new(2, 4),
            rendered: 2,
            failures: Vec::new(),
        };
        assert!(report.is_clean());
        assert_eq!(report.into_result().ok(), Some(VisibleRange::new(2, 4)));
    }

    #[test]
    fn test_failed_report_message() {
        let report = RenderReport {
            range: VisibleRange::new(0, 3),
            rendered: 2,
            failures: vec![RowFailure {
                index: 1,
                message: "bad row".to_string(),
            }],
        };

        let err = report.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 of 3 rows in 0..3 failed to render (first: row 1: bad row)"
        );
    }
}
