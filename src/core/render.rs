//! Report writer
//!
//! Tees every report line to the console and to the results file. Notices and
//! diagnostics only go to the console.

use colored::Colorize;
use std::io::{self, Write};

use crate::core::error::ReadError;
use crate::core::model::ReportBlock;
use crate::core::tokenizer::InvalidRecord;

/// Severity of a console-only message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Informational, uncolored
    Plain,
    /// A dropped record
    Warning,
    /// A file that could not be read
    Error,
}

/// Writes blocks to a results sink while mirroring them to a console sink
pub struct ReportWriter<R: Write, C: Write> {
    results: R,
    console: C,
    blocks: usize,
}

impl<R: Write, C: Write> ReportWriter<R, C> {
    pub fn new(results: R, console: C) -> Self {
        Self {
            results,
            console,
            blocks: 0,
        }
    }

    /// Write one block, line by line, console first.
    /// The results sink is flushed so the block is on disk before the next
    /// file is processed.
    pub fn write_block(&mut self, block: &ReportBlock) -> io::Result<()> {
        for line in block.lines() {
            writeln!(self.console, "{}", line)?;
            writeln!(self.results, "{}", line)?;
        }
        self.results.flush()?;
        self.blocks += 1;
        Ok(())
    }

    /// Print a console-only message
    pub fn notice(&mut self, kind: Notice, message: &str) -> io::Result<()> {
        match kind {
            Notice::Plain => writeln!(self.console, "{}", message),
            Notice::Warning => writeln!(self.console, "{}", message.yellow()),
            Notice::Error => writeln!(self.console, "{}", message.red()),
        }
    }

    /// `Invalid data ignored: <raw> in <file>`
    pub fn invalid_record(&mut self, file: &str, record: &InvalidRecord) -> io::Result<()> {
        let message = format!("Invalid data ignored: {} in {}", record.raw, file);
        self.notice(Notice::Warning, &message)
    }

    pub fn read_error(&mut self, error: &ReadError) -> io::Result<()> {
        self.notice(Notice::Error, &error.to_string())
    }

    /// Final confirmation naming the results file
    pub fn finish(mut self, results_name: &str) -> io::Result<usize> {
        self.results.flush()?;
        writeln!(self.console)?;
        writeln!(self.console, "All results saved in '{}'.", results_name)?;
        self.console.flush()?;
        Ok(self.blocks)
    }
}
