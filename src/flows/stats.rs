//! Statistics flow - descriptive statistics per file
//!
//! Provides mean, median, mode, population variance and standard deviation.

use std::collections::HashMap;

use crate::core::tokenizer::FloatTokenizer;
use crate::core::util::format_float;
use crate::flows::batch::BatchJob;

/// Descriptive statistics for one file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Compute all statistics; `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let median = median(values)?;
        let mode = mode(values)?;
        let variance = variance(values, mean)?;

        Some(Self {
            mean,
            median,
            mode,
            variance,
            std_dev: standard_deviation(variance),
        })
    }

    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Mean: {}", format_float(self.mean)),
            format!("Median: {}", format_float(self.median)),
            format!("Mode: {}", format_float(self.mode)),
            format!("Variance: {}", format_float(self.variance)),
            format!("Standard Deviation: {}", format_float(self.std_dev)),
        ]
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value, or the average of the two middle values for even counts
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let middle = count / 2;
    if count % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

/// Most frequent value. Among equally frequent values the one that appears
/// first in `values` wins.
pub fn mode(values: &[f64]) -> Option<f64> {
    // key -> (count, first index)
    let mut frequency: HashMap<FrequencyKey, (usize, usize)> = HashMap::new();
    for (index, value) in values.iter().enumerate() {
        let entry = frequency
            .entry(FrequencyKey::of(*value, index))
            .or_insert((0, index));
        entry.0 += 1;
    }

    frequency
        .into_values()
        .max_by(|(count_a, first_a), (count_b, first_b)| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(_, first)| values[first])
}

/// Grouping key for `mode`. Values that compare equal share a key, so `0.0`
/// and `-0.0` are counted together. NaN equals nothing, so every NaN is its
/// own group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FrequencyKey {
    Bits(u64),
    Nan(usize),
}

impl FrequencyKey {
    fn of(value: f64, index: usize) -> Self {
        if value.is_nan() {
            FrequencyKey::Nan(index)
        } else if value == 0.0 {
            FrequencyKey::Bits(0.0f64.to_bits())
        } else {
            FrequencyKey::Bits(value.to_bits())
        }
    }
}

/// Population variance (divides by the count)
pub fn variance(values: &[f64], mean: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64)
}

pub fn standard_deviation(variance: f64) -> f64 {
    variance.sqrt()
}

/// `stats` subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsJob;

impl BatchJob for StatsJob {
    type Tokenizer = FloatTokenizer;

    const RESULTS_FILE: &'static str = "StatisticsResults.txt";

    fn tokenizer(&self) -> FloatTokenizer {
        FloatTokenizer
    }

    fn empty_notice(&self, file: &str) -> String {
        format!("No valid numeric data in {}.", file)
    }

    fn report_items(&self, tokens: &[f64]) -> Vec<String> {
        Summary::compute(tokens)
            .map(|summary| summary.report_lines())
            .unwrap_or_default()
    }
}
