//! Line tokenizers
//!
//! Each job reads its input through one of three tokenizers:
//! - `IntegerTokenizer`: one base-10 integer per line
//! - `FloatTokenizer`: one decimal number per line
//! - `WordTokenizer`: any number of whitespace-separated words per line
//!
//! A line that does not parse is rejected as a whole and never reaches the
//! computation.

use std::borrow::Cow;

use num_bigint::BigInt;

/// A line rejected by a numeric tokenizer. Holds the trimmed raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRecord {
    pub raw: String,
}

/// Converts single lines into typed tokens
pub trait Tokenizer {
    type Token;

    /// Append the tokens found in `line` to `out`, or reject the line.
    fn tokenize_line(&self, line: &str, out: &mut Vec<Self::Token>) -> Result<(), InvalidRecord>;
}

/// Tokens of one source plus the records that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream<T> {
    pub tokens: Vec<T>,
    pub rejected: Vec<InvalidRecord>,
}

impl<T> TokenStream<T> {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Run a tokenizer over a sequence of lines, preserving input order.
pub fn tokenize<Tok, I, S>(tokenizer: &Tok, lines: I) -> TokenStream<Tok::Token>
where
    Tok: Tokenizer,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stream = TokenStream {
        tokens: Vec::new(),
        rejected: Vec::new(),
    };

    for line in lines {
        if let Err(record) = tokenizer.tokenize_line(line.as_ref(), &mut stream.tokens) {
            stream.rejected.push(record);
        }
    }

    stream
}

/// Integer mode. Accepts an optional sign and `_` between digits.
/// Values are unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerTokenizer;

impl Tokenizer for IntegerTokenizer {
    type Token = BigInt;

    fn tokenize_line(&self, line: &str, out: &mut Vec<BigInt>) -> Result<(), InvalidRecord> {
        let value = line.trim();
        let parsed = strip_digit_separators(value).and_then(|digits| digits.parse::<BigInt>().ok());

        match parsed {
            Some(number) => {
                out.push(number);
                Ok(())
            }
            None => Err(InvalidRecord {
                raw: value.to_string(),
            }),
        }
    }
}

/// Float mode. Accepts decimals, exponents, `inf` and `nan`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatTokenizer;

impl Tokenizer for FloatTokenizer {
    type Token = f64;

    fn tokenize_line(&self, line: &str, out: &mut Vec<f64>) -> Result<(), InvalidRecord> {
        let value = line.trim();
        let parsed = strip_digit_separators(value).and_then(|digits| digits.parse::<f64>().ok());

        match parsed {
            Some(number) => {
                out.push(number);
                Ok(())
            }
            None => Err(InvalidRecord {
                raw: value.to_string(),
            }),
        }
    }
}

/// Word mode. Never rejects a line; blank lines contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    type Token = String;

    fn tokenize_line(&self, line: &str, out: &mut Vec<String>) -> Result<(), InvalidRecord> {
        out.extend(line.split_whitespace().map(str::to_string));
        Ok(())
    }
}

/// Remove `_` digit separators. Returns `None` when an underscore is not
/// surrounded by ASCII digits (`1__0`, `_1`, `1_`).
fn strip_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }

    let bytes = value.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            let between_digits = matches!(before, Some(c) if c.is_ascii_digit())
                && matches!(after, Some(c) if c.is_ascii_digit());
            if !between_digits {
                return None;
            }
        }
    }

    Some(Cow::Owned(value.replace('_', "")))
}
