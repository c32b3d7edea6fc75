//! Base conversion flow - decimal integers to binary and hexadecimal

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

use crate::core::tokenizer::IntegerTokenizer;
use crate::flows::batch::BatchJob;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Render `number` in `radix` (2..=16) by repeated division, most significant
/// digit first. Negative numbers keep a leading `-` in front of the magnitude.
pub fn to_radix(number: &BigInt, radix: u32) -> String {
    debug_assert!((2..=16).contains(&radix));

    if number.is_zero() {
        return "0".to_string();
    }

    let radix = BigUint::from(radix);
    let mut n = number.magnitude().clone();
    let mut digits = Vec::new();
    while !n.is_zero() {
        let (quotient, remainder) = n.div_rem(&radix);
        // A zero remainder has no digits
        let digit = remainder.iter_u32_digits().next().unwrap_or(0);
        digits.push(DIGITS[digit as usize]);
        n = quotient;
    }
    if number.sign() == Sign::Minus {
        digits.push(b'-');
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

pub fn to_binary(number: &BigInt) -> String {
    to_radix(number, 2)
}

/// Uppercase hexadecimal
pub fn to_hex(number: &BigInt) -> String {
    to_radix(number, 16)
}

/// One converted number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub number: BigInt,
    pub binary: String,
    pub hex: String,
}

impl Conversion {
    pub fn of(number: &BigInt) -> Self {
        Self {
            number: number.clone(),
            binary: to_binary(number),
            hex: to_hex(number),
        }
    }

    pub fn report_line(&self) -> String {
        format!(
            "Number: {} -> Binary: {}, Hexadecimal: {}",
            self.number, self.binary, self.hex
        )
    }
}

/// `convert` subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertJob;

impl BatchJob for ConvertJob {
    type Tokenizer = IntegerTokenizer;

    const RESULTS_FILE: &'static str = "ConvertionResults.txt";

    fn tokenizer(&self) -> IntegerTokenizer {
        IntegerTokenizer
    }

    fn empty_notice(&self, file: &str) -> String {
        format!("No valid numeric data in {}.", file)
    }

    fn report_items(&self, tokens: &[BigInt]) -> Vec<String> {
        tokens
            .iter()
            .map(|n| Conversion::of(n).report_line())
            .collect()
    }
}
