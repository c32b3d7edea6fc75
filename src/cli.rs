//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use crate::core::util::stdout_is_terminal;
use crate::flows::batch::{run_batch, BatchJob};
use crate::flows::convert::ConvertJob;
use crate::flows::stats::StatsJob;
use crate::flows::wordcount::WordCountJob;

/// txtbatch - batch reports over the .txt files of a folder.
#[derive(Parser, Debug)]
#[command(name = "txtbatch")]
#[command(
    author,
    version,
    about,
    long_about = r#"txtbatch processes every .txt file of a folder with one of three utilities
and writes one report block per file.

Each block is printed to stdout and saved in a results file inside the folder.
The results file is recreated on every run.

Utilities:
- convert: decimal integers to binary and hexadecimal (ConvertionResults.txt)
- stats: mean, median, mode, variance, standard deviation (StatisticsResults.txt)
- wordcount: distinct words and their frequencies (WordCountResults.txt)

Examples:
    txtbatch convert
    txtbatch stats
    txtbatch --root data wordcount
"#
)]
pub struct Cli {
    /// Folder containing the .txt files.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        env = "TXTBATCH_ROOT",
        long_help = "Folder containing the .txt files (defaults to the current directory).\n\n\
Only files directly inside ROOT are processed, and the results file is written there."
    )]
    pub root: PathBuf,

    /// Disable colored diagnostics.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored diagnostics. Colors are only used when stdout is a terminal."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only in the log).
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        long_help = "Only log errors to stderr. Report lines and diagnostics on stdout are\n\
not affected."
    )]
    pub quiet: bool,

    /// Verbose mode (debug log on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Log discovery, per-file token counts and the run summary to stderr.\n\
RUST_LOG overrides this setting."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Convert decimal integers to binary and hexadecimal.
    #[command(
        long_about = "Read one decimal integer per line from every .txt file and report its\n\
binary and uppercase hexadecimal form, in input order.\n\n\
Lines that are not integers are ignored with a diagnostic. Negative numbers keep\n\
their sign in front of the converted magnitude.\n\n\
Results: ConvertionResults.txt\n"
    )]
    Convert,

    /// Compute mean, median, mode, variance and standard deviation.
    #[command(
        long_about = "Read one number per line from every .txt file and report descriptive\n\
statistics. Variance is the population variance. When several values share the\n\
highest frequency, the mode is the one that appears first in the file.\n\n\
Results: StatisticsResults.txt\n"
    )]
    Stats,

    /// Count distinct words and their frequencies.
    #[command(
        visible_alias = "words",
        long_about = "Split every line of every .txt file on whitespace and report how often each\n\
distinct word occurs, sorted alphabetically. Words are case-sensitive.\n\n\
Results: WordCountResults.txt\n"
    )]
    Wordcount,
}

impl Cli {
    /// Log filter implied by -q / -v
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Batch clock starts before discovery
    let started = Instant::now();

    if cli.no_color || !stdout_is_terminal() {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Convert => run_job(&cli, &ConvertJob, started),
        Commands::Stats => run_job(&cli, &StatsJob, started),
        Commands::Wordcount => run_job(&cli, &WordCountJob, started),
    }
}

fn run_job<J: BatchJob>(cli: &Cli, job: &J, started: Instant) -> Result<()> {
    log::debug!("{:?} in {}", cli.command, cli.root.display());
    let stdout = std::io::stdout();
    run_batch(&cli.root, job, started, stdout.lock())?;
    Ok(())
}
