//! Word count flow - distinct words and their frequencies

use std::collections::BTreeMap;

use crate::core::tokenizer::WordTokenizer;
use crate::flows::batch::BatchJob;

/// Count case-sensitive word occurrences. Iteration order is alphabetical
/// (code point order).
pub fn count_word_frequencies<S: AsRef<str>>(words: &[S]) -> BTreeMap<String, usize> {
    let mut frequencies = BTreeMap::new();
    for word in words {
        *frequencies.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    frequencies
}

/// `wordcount` subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountJob;

impl BatchJob for WordCountJob {
    type Tokenizer = WordTokenizer;

    const RESULTS_FILE: &'static str = "WordCountResults.txt";

    fn tokenizer(&self) -> WordTokenizer {
        WordTokenizer
    }

    fn empty_notice(&self, file: &str) -> String {
        format!("No valid words in {}.", file)
    }

    fn report_items(&self, tokens: &[String]) -> Vec<String> {
        count_word_frequencies(tokens)
            .into_iter()
            .map(|(word, count)| format!("Word: '{}' -> Frequency: {}", word, count))
            .collect()
    }
}
