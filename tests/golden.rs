//! Golden tests for txtbatch
//!
//! Each utility runs over a copy of its fixture folder and the results file is
//! compared with `tests/fixtures/golden/<utility>.out`.
//! The elapsed-time line is removed before comparing since it changes on
//! every run.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy one fixture folder into a fresh temp dir so results files never land
/// in the source tree
fn stage(fixture: &str) -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    for entry in fs::read_dir(fixtures_dir().join(fixture)).expect("fixture folder") {
        let entry = entry.unwrap();
        fs::copy(entry.path(), temp.path().join(entry.file_name())).unwrap();
    }
    temp
}

fn txtbatch_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("txtbatch").expect("Failed to find txtbatch binary");
    cmd.current_dir(root)
        .env_remove("TXTBATCH_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

/// Remove the elapsed-time line, which is the only unstable part of a block
fn normalize(report: &str) -> String {
    report
        .lines()
        .filter(|l| !l.starts_with("Execution Time (seconds): "))
        .map(|l| format!("{}\n", l))
        .collect()
}

fn golden(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join("golden").join(format!("{}.out", name)))
        .expect("golden file")
}

/// Run `command` over `fixture` and return (normalized report, stdout)
fn run_fixture(command: &str, fixture: &str, results_file: &str) -> (String, String) {
    let temp = stage(fixture);
    let output = txtbatch_cmd(temp.path())
        .arg(command)
        .output()
        .expect("failed to execute");
    assert!(output.status.success(), "{} exited with {:?}", command, output.status);

    let report = fs::read_to_string(temp.path().join(results_file)).expect("results file");
    (
        normalize(&report),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Convert ====================

    #[test]
    fn golden_convert_report() {
        let (report, _) = run_fixture("convert", "convert", "ConvertionResults.txt");
        assert_eq!(report, golden("convert"));
    }

    #[test]
    fn golden_convert_console() {
        let (report, stdout) = run_fixture("convert", "convert", "ConvertionResults.txt");

        // The diagnostic for b.txt comes before its block
        let diag = stdout.find("Invalid data ignored: 3.14 in b.txt").unwrap();
        let block = stdout.find("File: b.txt").unwrap();
        assert!(diag < block);

        assert!(!stdout.contains("notes.md"));
        assert_eq!(normalize(&stdout).matches("File: ").count(), report.matches("File: ").count());
    }

    // ==================== Stats ====================

    #[test]
    fn golden_stats_report() {
        let (report, _) = run_fixture("stats", "stats", "StatisticsResults.txt");
        assert_eq!(report, golden("stats"));
    }

    #[test]
    fn golden_stats_console() {
        let (_, stdout) = run_fixture("stats", "stats", "StatisticsResults.txt");
        assert!(stdout.contains("No valid numeric data in empty.txt."));
        assert!(stdout.contains("Invalid data ignored: n/a in grades.txt"));
        assert!(stdout.ends_with("\nAll results saved in 'StatisticsResults.txt'.\n"));
    }

    // ==================== Word count ====================

    #[test]
    fn golden_wordcount_report() {
        let (report, _) = run_fixture("wordcount", "wordcount", "WordCountResults.txt");
        assert_eq!(report, golden("wordcount"));
    }

    #[test]
    fn golden_wordcount_console() {
        let (_, stdout) = run_fixture("wordcount", "wordcount", "WordCountResults.txt");
        assert!(stdout.contains("No valid words in blank.txt."));
        assert!(stdout.contains("Execution Time (seconds): "));
    }
}
