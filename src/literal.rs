//! Strict decimal literal parsing.
//!
//! A literal is accepted only when rendering the parsed value back through the
//! canonical decimal renderer reproduces the input. Integers must match the
//! rendering exactly. Floating literals must be a prefix of the six-digit
//! fixed-notation rendering, so `"3.14"` is accepted (it prefixes
//! `"3.140000"`) while `"04"`, `" 3"` or `"1e5"` are not.

use std::fmt;

/// Outcome of parsing one literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedLiteral {
    Integer(i64),
    Float(f64),
    Invalid,
}

impl ParsedLiteral {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => f.write_str(&canonical_integer(*value)),
            Self::Float(value) => f.write_str(&canonical_float(*value)),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

/// Number of fractional digits in the canonical float rendering.
pub const FLOAT_FRACTION_DIGITS: usize = 6;

/// Render an integer in plain decimal: optional `-`, no leading zeros.
#[must_use]
pub fn canonical_integer(value: i64) -> String {
    value.to_string()
}

/// Render a float in fixed notation with six fractional digits.
///
/// The expansion is exact, so `f64::MAX` renders all of its integer digits.
/// Negative zero keeps its sign.
///
/// # Examples
///
/// ```rust
/// use bitvis::literal::canonical_float;
///
/// assert_eq!(canonical_float(-3.1415), "-3.141500");
/// assert_eq!(canonical_float(0.0), "0.000000");
/// ```
#[must_use]
pub fn canonical_float(value: f64) -> String {
    format!("{value:.FLOAT_FRACTION_DIGITS$}")
}

/// Parse a decimal integer literal into an `i64`.
///
/// Anything that does not render back to the identical text is
/// [`ParsedLiteral::Invalid`], including leading zeros, an explicit `+`,
/// whitespace and values beyond the `i64` range.
#[must_use]
pub fn parse_integer(text: &str) -> ParsedLiteral {
    let Ok(value) = text.parse::<i64>() else {
        log::debug!("rejecting integer literal {text:?}: not a 64-bit decimal integer");
        return ParsedLiteral::Invalid;
    };
    if canonical_integer(value) != text {
        log::debug!("rejecting integer literal {text:?}: does not round-trip");
        return ParsedLiteral::Invalid;
    }
    ParsedLiteral::Integer(value)
}

/// Parse a decimal floating literal into an `f64`.
///
/// The literal must be a non-empty prefix of its own canonical rendering.
/// Literals that need more precision than a double carries, such as
/// `"1234567891234567.125"`, fail this check.
#[must_use]
pub fn parse_float(text: &str) -> ParsedLiteral {
    if text.is_empty() {
        log::debug!("rejecting empty floating literal");
        return ParsedLiteral::Invalid;
    }
    let Ok(value) = text.parse::<f64>() else {
        log::debug!("rejecting floating literal {text:?}: not a decimal number");
        return ParsedLiteral::Invalid;
    };
    if !canonical_float(value).starts_with(text) {
        log::debug!("rejecting floating literal {text:?}: does not round-trip");
        return ParsedLiteral::Invalid;
    }
    ParsedLiteral::Float(value)
}
