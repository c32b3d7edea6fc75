//! Batch driver
//!
//! Runs one job over every discovered input:
//! discovery → read → tokenize → compute → report.
//!
//! Jobs only describe what differs between utilities (tokenizer, results file,
//! item lines, empty-dataset notice); the driver owns ordering, diagnostics
//! and the elapsed-time bookkeeping.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::backends::scan::discover_inputs;
use crate::core::error::BatchError;
use crate::core::file_reader::read_source;
use crate::core::model::{BatchSummary, FileOutcome, ReportBlock};
use crate::core::render::{Notice, ReportWriter};
use crate::core::tokenizer::{tokenize, Tokenizer};

/// A per-file computation pluggable into the batch driver
pub trait BatchJob {
    type Tokenizer: Tokenizer;

    /// Results file name, created in the root directory
    const RESULTS_FILE: &'static str;

    fn tokenizer(&self) -> Self::Tokenizer;

    /// Console notice for a file without usable tokens
    fn empty_notice(&self, file: &str) -> String;

    /// Item lines for a non-empty token list
    fn report_items(&self, tokens: &[<Self::Tokenizer as Tokenizer>::Token]) -> Vec<String>;
}

/// Process every `.txt` file under `root` with `job`.
///
/// `started` is the batch start; each block reports the time elapsed since
/// then. The results file is only created once discovery found something.
pub fn run_batch<J, C>(
    root: &Path,
    job: &J,
    started: Instant,
    console: C,
) -> Result<BatchSummary, BatchError>
where
    J: BatchJob,
    C: Write,
{
    let inputs = discover_inputs(root, &[J::RESULTS_FILE])?;
    if inputs.is_empty() {
        return Err(BatchError::NoInputFiles);
    }

    let results_path = root.join(J::RESULTS_FILE);
    log::debug!("writing results to {}", results_path.display());
    let results_file =
        File::create(&results_path).map_err(|e| BatchError::results_file(&results_path, e))?;

    let mut writer = ReportWriter::new(BufWriter::new(results_file), console);
    let mut summary = BatchSummary {
        discovered: inputs.len(),
        ..Default::default()
    };

    for name in &inputs {
        let outcome =
            process_file(root, name, job, started, &mut writer).map_err(BatchError::Output)?;
        log::debug!("{}: {:?}", name, outcome);
        summary.record(outcome);
    }

    let blocks = writer.finish(J::RESULTS_FILE).map_err(BatchError::Output)?;
    log::debug!("{} block(s) written to {}", blocks, results_path.display());

    log::info!(
        "{} file(s) discovered, {} reported with {} token(s), {} without data, {} unreadable, {} record(s) ignored, {} decoded lossily",
        summary.discovered,
        summary.reported,
        summary.tokens,
        summary.no_data,
        summary.unreadable,
        summary.rejected_records,
        summary.lossy_decoded
    );

    Ok(summary)
}

/// Read, tokenize and report one file
fn process_file<J, R, C>(
    root: &Path,
    name: &str,
    job: &J,
    started: Instant,
    writer: &mut ReportWriter<R, C>,
) -> std::io::Result<FileOutcome>
where
    J: BatchJob,
    R: Write,
    C: Write,
{
    let source = match read_source(root, name) {
        Ok(source) => source,
        Err(err) => {
            log::debug!("{}: {:?}", name, err);
            writer.read_error(&err)?;
            writer.notice(Notice::Plain, &job.empty_notice(name))?;
            return Ok(FileOutcome::Unreadable);
        }
    };
    log::debug!("{}: {} line(s)", source.name, source.lines.len());

    let stream = tokenize(&job.tokenizer(), &source.lines);
    for record in &stream.rejected {
        writer.invalid_record(name, record)?;
    }

    if stream.is_empty() {
        writer.notice(Notice::Plain, &job.empty_notice(name))?;
        return Ok(FileOutcome::NoData {
            rejected: stream.rejected.len(),
            lossy: source.lossy_conversion,
        });
    }

    let items = job.report_items(&stream.tokens);
    let block = ReportBlock::new(name, items, started.elapsed());
    writer.write_block(&block)?;

    Ok(FileOutcome::Reported {
        tokens: stream.tokens.len(),
        rejected: stream.rejected.len(),
        lossy: source.lossy_conversion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::convert::ConvertJob;
    use crate::flows::stats::StatsJob;
    use crate::flows::wordcount::WordCountJob;
    use std::fs;
    use tempfile::tempdir;

    fn run<J: BatchJob>(root: &Path, job: &J) -> (Result<BatchSummary, BatchError>, String) {
        colored::control::set_override(false);
        let mut console = Vec::new();
        let result = run_batch(root, job, Instant::now(), &mut console);
        (result, String::from_utf8(console).unwrap())
    }

    fn block_lines(text: &str) -> Vec<String> {
        text.lines()
            .filter(|l| !l.starts_with("Execution Time"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_no_inputs_creates_no_results_file() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("notes.md"), "1").unwrap();

        let (result, console) = run(temp.path(), &ConvertJob);
        assert!(matches!(result, Err(BatchError::NoInputFiles)));
        assert!(console.is_empty());
        assert!(!temp.path().join(ConvertJob::RESULTS_FILE).exists());
    }

    #[test]
    fn test_previous_results_file_alone_is_not_input() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(StatsJob::RESULTS_FILE), "old report").unwrap();

        let (result, _) = run(temp.path(), &StatsJob);
        assert!(matches!(result, Err(BatchError::NoInputFiles)));
        let kept = fs::read_to_string(temp.path().join(StatsJob::RESULTS_FILE)).unwrap();
        assert_eq!(kept, "old report");
    }

    #[test]
    fn test_convert_batch_skips_malformed_line() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("n.txt"), "10\nabc\n0\n").unwrap();

        let (result, console) = run(temp.path(), &ConvertJob);
        let summary = result.unwrap();
        assert_eq!(summary.reported, 1);
        assert_eq!(summary.rejected_records, 1);
        assert_eq!(summary.tokens, 2);

        assert_eq!(console.matches("Invalid data ignored").count(), 1);
        assert!(console.contains("Invalid data ignored: abc in n.txt"));

        let report = fs::read_to_string(temp.path().join(ConvertJob::RESULTS_FILE)).unwrap();
        assert_eq!(
            block_lines(&report),
            vec![
                "File: n.txt".to_string(),
                "Number: 10 -> Binary: 1010, Hexadecimal: A".to_string(),
                "Number: 0 -> Binary: 0, Hexadecimal: 0".to_string(),
                "-".repeat(40),
            ]
        );
    }

    #[test]
    fn test_file_without_tokens_gets_no_block() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("empty.txt"), "").unwrap();

        let (result, console) = run(temp.path(), &WordCountJob);
        let summary = result.unwrap();
        assert_eq!(summary.no_data, 1);
        assert!(console.contains("No valid words in empty.txt."));

        let report = fs::read_to_string(temp.path().join(WordCountJob::RESULTS_FILE)).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_directory_input_is_reported_and_skipped() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("box.txt")).unwrap();
        fs::write(temp.path().join("data.txt"), "1.5\n2.5\n").unwrap();

        let (result, console) = run(temp.path(), &StatsJob);
        let summary = result.unwrap();
        assert_eq!(summary.unreadable, 1);
        assert_eq!(summary.reported, 1);
        assert!(console.contains("Error: Expected a file but got a directory -> box.txt"));
        assert!(console.contains("No valid numeric data in box.txt."));
        assert!(console.contains("Mean: 2.0"));
    }

    #[test]
    fn test_blocks_follow_discovery_order_and_mirror_console() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "beta").unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();

        let (result, console) = run(temp.path(), &WordCountJob);
        assert_eq!(result.unwrap().reported, 2);

        let report = fs::read_to_string(temp.path().join(WordCountJob::RESULTS_FILE)).unwrap();
        let a = report.find("File: a.txt").unwrap();
        let b = report.find("File: b.txt").unwrap();
        assert!(a < b);

        // Console carries the same lines plus the final confirmation
        assert!(console.starts_with(&report));
        assert!(console.ends_with("\nAll results saved in 'WordCountResults.txt'.\n"));
    }

    #[test]
    fn test_lossy_files_are_counted() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("bytes.txt"), [b'7', b'\n', 0xFF, b'\n']).unwrap();
        fs::write(temp.path().join("clean.txt"), "8\n").unwrap();

        let (result, console) = run(temp.path(), &ConvertJob);
        let summary = result.unwrap();
        assert_eq!(summary.lossy_decoded, 1);
        assert_eq!(summary.reported, 2);
        assert!(console.contains("Invalid data ignored: \u{FFFD} in bytes.txt"));
    }

    #[test]
    fn test_wide_integers_are_converted() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("wide.txt"),
            "1361129467683753853853498429727072845824\n",
        )
        .unwrap();

        let (result, console) = run(temp.path(), &ConvertJob);
        let summary = result.unwrap();
        assert_eq!(summary.rejected_records, 0);
        assert!(!console.contains("Invalid data ignored"));
        assert!(console.contains(&format!(
            "Number: 1361129467683753853853498429727072845824 -> Binary: 1{}, Hexadecimal: 4{}",
            "0".repeat(130),
            "0".repeat(32)
        )));
    }

    #[test]
    fn test_bare_carriage_returns_split_records() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("cr.txt"), "1\r2\r3\n").unwrap();

        let (result, console) = run(temp.path(), &StatsJob);
        let summary = result.unwrap();
        assert_eq!(summary.tokens, 3);
        assert_eq!(summary.rejected_records, 0);
        assert!(!console.contains('\r'));
        assert!(console.contains("Mean: 2.0"));
    }

    #[test]
    fn test_results_file_is_truncated_between_runs() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("w.txt"), "x").unwrap();

        run(temp.path(), &WordCountJob).0.unwrap();
        run(temp.path(), &WordCountJob).0.unwrap();

        let report = fs::read_to_string(temp.path().join(WordCountJob::RESULTS_FILE)).unwrap();
        assert_eq!(report.matches("File: w.txt").count(), 1);
    }
}
