//! Bit pattern rendering.
//!
//! Integers render as one sign bit followed by the remaining two's-complement
//! bits. Floats render as sign, biased exponent and mantissa fields of the
//! IEEE-754 layout for their width. A `float` value is rounded to single
//! precision first, so the printed pattern is exactly what an `f32` stores.

mod bits;
mod float;

pub use bits::{BitGroup, BitSegment, Rendering, SegmentKind};

use crate::classify::Classification;
use crate::literal::ParsedLiteral;
use crate::scalar::{ScalarKind, ScalarType};

/// Contract violations when calling a renderer with the wrong kind of type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("cannot render {scalar} as {expected:?}")]
    KindMismatch {
        scalar: ScalarType,
        expected: ScalarKind,
    },
}

fn integer_bits(value: i64, width: u32) -> Vec<bool> {
    (0..width).rev().map(|idx| (value >> idx) & 1 == 1).collect()
}

fn exponent_bits(exponent: u64, width: u32) -> Vec<bool> {
    (0..width).rev().map(|idx| (exponent >> idx) & 1 == 1).collect()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "single precision rounds to the nearest f32"
)]
fn narrow_to_single(value: f64) -> f64 {
    f64::from(value as f32)
}

/// Render `value` as an integer of type `scalar`.
///
/// # Errors
/// Returns [`RenderError::KindMismatch`] when `scalar` is a floating-point type.
pub fn render_integer(scalar: ScalarType, value: i64) -> Result<Rendering, RenderError> {
    if scalar == ScalarType::Impossible {
        return Ok(Rendering::Impossible);
    }
    let width = match (scalar.kind(), scalar.bits()) {
        (Some(ScalarKind::Integer), Some(width)) => width,
        _ => {
            return Err(RenderError::KindMismatch {
                scalar,
                expected: ScalarKind::Integer,
            });
        }
    };
    let sign = vec![(value >> (width - 1)) & 1 == 1];
    let group = BitGroup::new(
        scalar,
        vec![
            BitSegment::new(SegmentKind::Sign, sign),
            BitSegment::new(SegmentKind::Magnitude, integer_bits(value, width - 1)),
        ],
    );
    log::trace!("rendered {value} as {scalar}: {:#x}", group.to_bits());
    Ok(Rendering::Bits(group))
}

/// Render `value` in the IEEE-754 layout of `scalar`.
///
/// # Errors
/// Returns [`RenderError::KindMismatch`] when `scalar` is an integer type.
///
/// # Examples
///
/// ```rust
/// use bitvis::{ScalarType, render::render_float};
///
/// let rendering = render_float(ScalarType::Float, 1.0).unwrap_or_else(|err| panic!("{err}"));
/// let bits = rendering.bits().map(|group| group.to_bits());
/// assert_eq!(bits, Some(u64::from(1.0_f32.to_bits())));
/// ```
pub fn render_float(scalar: ScalarType, value: f64) -> Result<Rendering, RenderError> {
    if scalar == ScalarType::Impossible {
        return Ok(Rendering::Impossible);
    }
    let Some(layout) = scalar.float_layout() else {
        return Err(RenderError::KindMismatch {
            scalar,
            expected: ScalarKind::FloatingPoint,
        });
    };
    let stored = if scalar == ScalarType::Float {
        narrow_to_single(value)
    } else {
        value
    };
    let fields = float::decompose(stored, layout);
    let group = BitGroup::new(
        scalar,
        vec![
            BitSegment::new(SegmentKind::Sign, vec![fields.negative]),
            BitSegment::new(
                SegmentKind::Exponent,
                exponent_bits(fields.exponent, layout.exponent_bits),
            ),
            BitSegment::new(SegmentKind::Mantissa, fields.mantissa),
        ],
    );
    log::trace!("rendered {value} as {scalar}: {:#x}", group.to_bits());
    Ok(Rendering::Bits(group))
}

/// Render a classification, or the impossible verdict.
///
/// # Errors
/// Returns [`RenderError::KindMismatch`] only when the classification pairs a
/// type with a value of the other kind, which [`crate::classify::classify`]
/// never produces.
pub fn render(classification: &Classification) -> Result<Rendering, RenderError> {
    if classification.is_impossible() {
        return Ok(Rendering::Impossible);
    }
    match classification.literal {
        ParsedLiteral::Integer(value) => render_integer(classification.scalar, value),
        ParsedLiteral::Float(value) => render_float(classification.scalar, value),
        ParsedLiteral::Invalid => Ok(Rendering::Impossible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn group(rendering: Result<Rendering, RenderError>) -> BitGroup {
        match rendering {
            Ok(Rendering::Bits(group)) => group,
            other => panic!("expected bits, got {other:?}"),
        }
    }

    #[rstest]
    #[case(ScalarType::Char, -1, 0xff)]
    #[case(ScalarType::Char, -128, 0x80)]
    #[case(ScalarType::Short, 32_767, 0x7fff)]
    #[case(ScalarType::Int, -2, 0xffff_fffe)]
    #[case(ScalarType::Long, i64::MIN, 0x8000_0000_0000_0000)]
    fn integer_pattern_is_twos_complement(
        #[case] scalar: ScalarType,
        #[case] value: i64,
        #[case] expected: u64,
    ) {
        let group = group(render_integer(scalar, value));
        assert_eq!(group.to_bits(), expected);
        assert_eq!(Some(group.width()), scalar.bits().and_then(|b| usize::try_from(b).ok()));
        assert_eq!(group.is_negative(), value < 0);
    }

    #[rstest]
    #[case(0.1)]
    #[case(-3.1415)]
    #[case(1.0)]
    #[case(123_456.789)]
    #[case(f64::from(f32::MAX))]
    #[case(f64::from(f32::MIN_POSITIVE))]
    fn single_pattern_matches_native_storage(#[case] value: f64) {
        let group = group(render_float(ScalarType::Float, value));
        #[expect(clippy::cast_possible_truncation, reason = "test narrows deliberately")]
        let native = value as f32;
        assert_eq!(group.to_bits(), u64::from(native.to_bits()));
    }

    #[rstest]
    #[case(0.1)]
    #[case(-2.5)]
    #[case(f64::MAX)]
    #[case(f64::MIN_POSITIVE)]
    #[case(1e-310)]
    #[case(-0.0)]
    fn double_pattern_matches_native_storage(#[case] value: f64) {
        let group = group(render_float(ScalarType::Double, value));
        assert_eq!(group.to_bits(), value.to_bits());
    }

    #[test]
    fn single_subnormal_gets_zero_exponent() {
        let value = f64::from(f32::from_bits(0x0000_0003));
        let group = group(render_float(ScalarType::Float, value));
        assert_eq!(group.to_bits(), 3);
        assert_eq!(group.segment(SegmentKind::Exponent).map(BitSegment::value), Some(0));
    }

    #[test]
    fn kind_mismatch_is_reported() {
        assert_eq!(
            render_integer(ScalarType::Double, 1),
            Err(RenderError::KindMismatch {
                scalar: ScalarType::Double,
                expected: ScalarKind::Integer,
            })
        );
        assert_eq!(
            render_float(ScalarType::Char, 1.0),
            Err(RenderError::KindMismatch {
                scalar: ScalarType::Char,
                expected: ScalarKind::FloatingPoint,
            })
        );
    }

    #[test]
    fn impossible_renders_the_verdict() {
        assert_eq!(render_integer(ScalarType::Impossible, 1), Ok(Rendering::Impossible));
        assert_eq!(render_float(ScalarType::Impossible, 1.0), Ok(Rendering::Impossible));
    }
}
