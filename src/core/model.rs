//! Report model
//!
//! Every job maps its per-file result to a `ReportBlock` before anything is
//! written, so console and results file always receive identical lines.

use std::time::Duration;

use crate::core::util::format_seconds;

/// Width of the line closing each block
pub const SEPARATOR_WIDTH: usize = 40;

/// One file's section of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlock {
    pub file: String,
    pub items: Vec<String>,
    pub elapsed: Duration,
}

impl ReportBlock {
    pub fn new(file: impl Into<String>, items: Vec<String>, elapsed: Duration) -> Self {
        Self {
            file: file.into(),
            items,
            elapsed,
        }
    }

    /// Header, items, elapsed time and separator, in output order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.items.len() + 3);
        lines.push(format!("File: {}", self.file));
        lines.extend(self.items.iter().cloned());
        lines.push(format!(
            "Execution Time (seconds): {}",
            format_seconds(self.elapsed)
        ));
        lines.push(separator());
        lines
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// What happened to a single discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// A block was written
    Reported {
        tokens: usize,
        rejected: usize,
        lossy: bool,
    },
    /// Read fine but yielded no usable tokens
    NoData { rejected: usize, lossy: bool },
    /// Could not be read at all
    Unreadable,
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub discovered: usize,
    pub reported: usize,
    pub no_data: usize,
    pub unreadable: usize,
    pub tokens: usize,
    pub rejected_records: usize,
    /// Files whose invalid UTF-8 was replaced while decoding
    pub lossy_decoded: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Reported {
                tokens,
                rejected,
                lossy,
            } => {
                self.reported += 1;
                self.tokens += tokens;
                self.rejected_records += rejected;
                self.lossy_decoded += usize::from(lossy);
            }
            FileOutcome::NoData { rejected, lossy } => {
                self.no_data += 1;
                self.rejected_records += rejected;
                self.lossy_decoded += usize::from(lossy);
            }
            FileOutcome::Unreadable => self.unreadable += 1,
        }
    }
}
