//! Conversion of integer literals written in radix 2 to 16.
//!
//! The converter produces the decimal value a fixed-width integer type would
//! hold for the given digits. The rule for the leading character depends on
//! the radix:
//!
//! - radix 3 to 16: a leading `-` negates the magnitude; any other leading
//!   digit is weighted positively like the rest;
//! - radix 2: when the string is exactly as long as the requested type and
//!   starts with `1`, that bit is the two's-complement sign bit and carries a
//!   negative weight. Shorter strings are plain positive numbers, so `"1111"`
//!   is 15 even for `char`.
//!
//! This is deliberately not a general signed-number parser.

use logos::Logos;

use crate::literal::{ParsedLiteral, canonical_integer, parse_integer};
use crate::scalar::{ScalarKind, ScalarType};

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 16;

/// Errors raised while converting digits to decimal.
///
/// Any of these aborts the conversion; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("radix {0} is not supported (expected 2 to 16)")]
    UnsupportedRadix(u32),
    #[error("invalid radix '{0}'")]
    InvalidRadix(String),
    #[error("'{0}' is not an integer type")]
    NotAnInteger(ScalarType),
    #[error("no digits to convert")]
    MissingDigits,
    #[error("radix point at offset {offset} is not allowed in an integer")]
    RadixPoint { offset: usize },
    #[error("'{digit}' at offset {offset} is not a digit in radix {radix}")]
    InvalidDigit {
        digit: char,
        offset: usize,
        radix: u32,
    },
    #[error("'{0}' does not fit in 64 bits")]
    Overflow(String),
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum DigitToken {
    #[token("-")]
    Minus,
    #[token(".")]
    Point,
    #[regex("[0-9a-fA-F]", hex_value)]
    Digit(u32),
}

fn hex_value(lex: &mut logos::Lexer<DigitToken>) -> Option<u32> {
    lex.slice().chars().next()?.to_digit(16)
}

/// First character of a validated digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leading {
    Minus,
    Digit(u32),
}

/// Split `digits` into its leading symbol and the values of the rest.
fn lex_digits(digits: &str, radix: u32) -> Result<(Leading, Vec<u32>), ConversionError> {
    let mut lexer = DigitToken::lexer(digits);
    let mut leading = None;
    let mut interior = Vec::with_capacity(digits.len());
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let invalid = || ConversionError::InvalidDigit {
            digit: lexer
                .slice()
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            offset: span.start,
            radix,
        };
        let symbol = match result {
            Ok(DigitToken::Digit(value)) if value < radix => Leading::Digit(value),
            Ok(DigitToken::Minus) if span.start == 0 => Leading::Minus,
            Ok(DigitToken::Point) => {
                return Err(ConversionError::RadixPoint { offset: span.start });
            }
            Ok(DigitToken::Digit(_) | DigitToken::Minus) | Err(()) => return Err(invalid()),
        };
        match (leading, symbol) {
            (None, first) => leading = Some(first),
            (Some(_), Leading::Digit(value)) => interior.push(value),
            (Some(_), Leading::Minus) => return Err(invalid()),
        }
    }
    match leading {
        Some(Leading::Minus) if interior.is_empty() => Err(ConversionError::MissingDigits),
        Some(first) => Ok((first, interior)),
        None => Err(ConversionError::MissingDigits),
    }
}

/// Sum of `digit * radix^position`, positions counted from the least
/// significant digit.
fn positional_sum(interior: &[u32], radix: i128) -> Option<i128> {
    let mut sum: i128 = 0;
    let mut weight: i128 = 1;
    for (position, digit) in interior.iter().rev().enumerate() {
        if position > 0 {
            weight = weight.checked_mul(radix)?;
        }
        sum = sum.checked_add(i128::from(*digit).checked_mul(weight)?)?;
    }
    Some(sum)
}

fn signed_value(
    leading: Leading,
    interior: &[u32],
    radix: u32,
    width: u32,
) -> Option<i128> {
    let base = i128::from(radix);
    let magnitude = positional_sum(interior, base)?;
    let leading_position = u32::try_from(interior.len()).ok()?;
    let leading_weight = base.checked_pow(leading_position)?;
    match leading {
        Leading::Minus => magnitude.checked_neg(),
        Leading::Digit(1) if radix == 2 && leading_position + 1 == width => {
            magnitude.checked_sub(leading_weight)
        }
        Leading::Digit(value) => {
            magnitude.checked_add(i128::from(value).checked_mul(leading_weight)?)
        }
    }
}

/// Convert `digits` in `radix` to the decimal value `scalar` would hold.
///
/// # Errors
/// Returns a [`ConversionError`] when the radix is outside 2 to 16, the type
/// is not an integer type, a character is not a digit of the radix (a radix
/// point included), or the value does not fit in 64 bits.
///
/// # Examples
///
/// ```rust
/// use bitvis::{ScalarType, radix::to_decimal};
///
/// assert_eq!(to_decimal(ScalarType::Long, "DEADBEEF", 16).as_deref(), Ok("3735928559"));
/// assert_eq!(to_decimal(ScalarType::Char, "11111111", 2).as_deref(), Ok("-1"));
/// ```
pub fn to_decimal(scalar: ScalarType, digits: &str, radix: u32) -> Result<String, ConversionError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(ConversionError::UnsupportedRadix(radix));
    }
    let width = match (scalar.kind(), scalar.bits()) {
        (Some(ScalarKind::Integer), Some(width)) => width,
        _ => return Err(ConversionError::NotAnInteger(scalar)),
    };
    let (leading, interior) = lex_digits(digits, radix).inspect_err(|err| {
        log::debug!("cannot convert {digits:?} from radix {radix}: {err}");
    })?;
    let value = signed_value(leading, &interior, radix, width)
        .and_then(|value| i64::try_from(value).ok())
        .ok_or_else(|| ConversionError::Overflow(digits.to_string()))?;
    log::trace!("{digits} in radix {radix} as {scalar} is {value}");
    Ok(canonical_integer(value))
}

/// Parse the textual radix accepted by [`to_decimal`].
///
/// The text follows the strict integer literal rules, so `"016"` and `" 8"`
/// are rejected.
///
/// # Errors
/// Returns [`ConversionError::InvalidRadix`] for text that is not a strict
/// decimal integer and [`ConversionError::UnsupportedRadix`] for values
/// outside 2 to 16.
pub fn parse_radix(text: &str) -> Result<u32, ConversionError> {
    let ParsedLiteral::Integer(value) = parse_integer(text) else {
        return Err(ConversionError::InvalidRadix(text.to_string()));
    };
    let radix = u32::try_from(value).map_err(|_| ConversionError::InvalidRadix(text.to_string()))?;
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(radix)
    } else {
        Err(ConversionError::UnsupportedRadix(radix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-12", Leading::Minus, vec![1, 2])]
    #[case("fF", Leading::Digit(15), vec![15])]
    #[case("7", Leading::Digit(7), vec![])]
    fn lexes_leading_symbol_separately(
        #[case] digits: &str,
        #[case] leading: Leading,
        #[case] interior: Vec<u32>,
    ) {
        assert_eq!(lex_digits(digits, 16), Ok((leading, interior)));
    }

    #[rstest]
    #[case("", ConversionError::MissingDigits)]
    #[case("-", ConversionError::MissingDigits)]
    #[case("1.5", ConversionError::RadixPoint { offset: 1 })]
    #[case("12-3", ConversionError::InvalidDigit { digit: '-', offset: 2, radix: 10 })]
    #[case("--1", ConversionError::InvalidDigit { digit: '-', offset: 1, radix: 10 })]
    #[case("A0", ConversionError::InvalidDigit { digit: 'A', offset: 0, radix: 10 })]
    #[case("1g", ConversionError::InvalidDigit { digit: 'g', offset: 1, radix: 10 })]
    #[case(" 1", ConversionError::InvalidDigit { digit: ' ', offset: 0, radix: 10 })]
    fn rejects_malformed_digits(#[case] digits: &str, #[case] expected: ConversionError) {
        assert_eq!(lex_digits(digits, 10), Err(expected));
    }

    #[test]
    fn positional_sum_weights_from_the_right() {
        assert_eq!(positional_sum(&[1, 0, 1], 2), Some(5));
        assert_eq!(positional_sum(&[], 16), Some(0));
    }

    #[rstest]
    #[case("16", Ok(16))]
    #[case("2", Ok(2))]
    #[case("1", Err(ConversionError::UnsupportedRadix(1)))]
    #[case("17", Err(ConversionError::UnsupportedRadix(17)))]
    #[case("016", Err(ConversionError::InvalidRadix("016".to_string())))]
    #[case("-2", Err(ConversionError::InvalidRadix("-2".to_string())))]
    #[case("hex", Err(ConversionError::InvalidRadix("hex".to_string())))]
    fn parses_radix_text(#[case] text: &str, #[case] expected: Result<u32, ConversionError>) {
        assert_eq!(parse_radix(text), expected);
    }
}
