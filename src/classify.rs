//! Range classification of parsed literals.
//!
//! The classifier answers one question: does this value fit the exact type
//! that was requested? It never promotes a value to a wider type. Any failure,
//! whether the literal was unparseable, out of range or carried the wrong
//! kind of value, collapses to [`ScalarType::Impossible`].

use crate::literal::ParsedLiteral;
use crate::scalar::{ScalarKind, ScalarType};

/// A scalar type verdict paired with the value it was reached for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub scalar: ScalarType,
    pub literal: ParsedLiteral,
}

impl Classification {
    #[must_use]
    pub fn is_impossible(&self) -> bool {
        self.scalar == ScalarType::Impossible
    }
}

/// Check an integer against the inclusive two's-complement range of `scalar`.
///
/// `None` stands for a value the parser rejected.
#[must_use]
pub fn classify_integer(scalar: ScalarType, value: Option<i64>) -> ScalarType {
    let (Some(value), Some((min, max))) = (value, scalar.integer_bounds()) else {
        return ScalarType::Impossible;
    };
    if (min..=max).contains(&value) {
        scalar
    } else {
        log::debug!("{value} is outside the {scalar} range [{min}, {max}]");
        ScalarType::Impossible
    }
}

/// Check a float's magnitude against the largest finite value of `scalar`.
///
/// The boundary itself is accepted. NaN and infinities never fit.
#[must_use]
pub fn classify_float(scalar: ScalarType, value: Option<f64>) -> ScalarType {
    let (Some(value), Some(max)) = (value, scalar.float_max()) else {
        return ScalarType::Impossible;
    };
    if value.abs() <= max {
        scalar
    } else {
        log::debug!("{value} exceeds the {scalar} magnitude limit {max:e}");
        ScalarType::Impossible
    }
}

/// Classify a parsed literal under the requested type.
///
/// The literal's tag must agree with the type's kind: an integer literal
/// requested as `float` is impossible, and so is the reverse.
#[must_use]
pub fn classify(scalar: ScalarType, literal: ParsedLiteral) -> Classification {
    let verdict = match (scalar.kind(), literal) {
        (Some(ScalarKind::Integer), ParsedLiteral::Integer(value)) => {
            classify_integer(scalar, Some(value))
        }
        (Some(ScalarKind::FloatingPoint), ParsedLiteral::Float(value)) => {
            classify_float(scalar, Some(value))
        }
        _ => ScalarType::Impossible,
    };
    Classification {
        scalar: verdict,
        literal,
    }
}
