//! IEEE-754 field extraction.
//!
//! Values arrive as `f64`. Single-precision values have already been narrowed
//! to `f32` and widened back, which is exact, so a single decomposition over
//! `f64` serves both layouts: the single-precision mantissa is the top 23 bits
//! of the double's fraction.

use std::num::FpCategory;

use num_traits::Float;

use crate::scalar::FloatLayout;

const F64_FRACTION_BITS: u32 = 52;
const F64_FRACTION_MASK: u64 = (1 << F64_FRACTION_BITS) - 1;
/// Storage exponent of a double in `[0.5, 1)`.
const F64_HALF_EXPONENT: u64 = 1022;

/// Sign, biased exponent and mantissa bits of one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FloatFields {
    pub negative: bool,
    pub exponent: u64,
    pub mantissa: Vec<bool>,
}

/// Split a positive normal double into a significand in `[0.5, 1)` and the
/// power of two that scales it back.
fn frexp(magnitude: f64) -> (f64, i32) {
    let (_, exponent, _) = Float::integer_decode(magnitude);
    let fraction = magnitude.to_bits() & F64_FRACTION_MASK;
    let significand = f64::from_bits((F64_HALF_EXPONENT << F64_FRACTION_BITS) | fraction);
    (significand, i32::from(exponent) + 53)
}

/// `2^(bias - 1)`, the factor that lifts a subnormal of `layout` into `[0, 1)`.
fn subnormal_scale(layout: FloatLayout) -> f64 {
    let exponent = u64::from(layout.bias.unsigned_abs()) + F64_HALF_EXPONENT;
    f64::from_bits(exponent << F64_FRACTION_BITS)
}

#[expect(clippy::float_arithmetic, reason = "drops the implicit leading one")]
fn strip_leading_bit(significand: f64) -> f64 {
    let doubled = significand * 2.0;
    doubled - doubled.floor()
}

#[expect(clippy::float_arithmetic, reason = "power-of-two scaling is exact")]
fn subnormal_fraction(magnitude: f64, layout: FloatLayout) -> f64 {
    magnitude * subnormal_scale(layout)
}

/// Emit `count` bits of a binary fraction in `[0, 1)`, most significant first.
#[expect(clippy::float_arithmetic, reason = "binary fraction extraction")]
fn fraction_bits(mut fraction: f64, count: u32) -> Vec<bool> {
    (0..count)
        .map(|_| {
            fraction *= 2.0;
            let bit = fraction >= 1.0;
            if bit {
                fraction -= fraction.floor();
            }
            bit
        })
        .collect()
}

fn payload_bits(value: f64, count: u32) -> Vec<bool> {
    let payload = (value.to_bits() & F64_FRACTION_MASK) >> (F64_FRACTION_BITS - count);
    (0..count).rev().map(|idx| (payload >> idx) & 1 == 1).collect()
}

/// Decompose `value` into the fields of `layout`.
///
/// Zero renders as the all-zero pattern and subnormals of the layout get a
/// zero exponent. Infinity and NaN render their special patterns.
pub(super) fn decompose(value: f64, layout: FloatLayout) -> FloatFields {
    let negative = value.is_sign_negative();
    let magnitude = value.abs();
    let (exponent, fraction) = match magnitude.classify() {
        FpCategory::Zero => (0, 0.0),
        FpCategory::Subnormal => (0, subnormal_fraction(magnitude, layout)),
        FpCategory::Normal => {
            let (significand, power) = frexp(magnitude);
            let biased = layout.bias + power - 1;
            if biased >= 1 {
                (
                    u64::from(biased.unsigned_abs()),
                    strip_leading_bit(significand),
                )
            } else {
                (0, subnormal_fraction(magnitude, layout))
            }
        }
        FpCategory::Infinite | FpCategory::Nan => {
            return FloatFields {
                negative,
                exponent: layout.exponent_mask(),
                mantissa: payload_bits(value, layout.mantissa_bits),
            };
        }
    };
    FloatFields {
        negative,
        exponent,
        mantissa: fraction_bits(fraction, layout.mantissa_bits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 0.5, 1)]
    #[case(0.75, 0.75, 0)]
    #[case(8.0, 0.5, 4)]
    #[case(0.1, 0.8, -3)]
    fn frexp_normalises_into_half_open_unit(
        #[case] value: f64,
        #[case] significand: f64,
        #[case] power: i32,
    ) {
        assert_eq!(frexp(value), (significand, power));
    }

    #[test]
    fn fraction_bits_follow_binary_expansion() {
        assert_eq!(fraction_bits(0.625, 4), vec![true, false, true, false]);
    }

    #[test]
    fn subnormal_scale_matches_layout() {
        assert_eq!(subnormal_scale(FloatLayout::SINGLE), 2.0_f64.powi(126));
        assert_eq!(subnormal_scale(FloatLayout::DOUBLE), 2.0_f64.powi(1022));
    }

    #[test]
    fn zero_has_all_zero_fields() {
        let fields = decompose(0.0, FloatLayout::DOUBLE);
        assert!(!fields.negative);
        assert_eq!(fields.exponent, 0);
        assert!(fields.mantissa.iter().all(|bit| !bit));
    }

    #[test]
    fn infinity_has_all_ones_exponent() {
        let fields = decompose(f64::NEG_INFINITY, FloatLayout::SINGLE);
        assert!(fields.negative);
        assert_eq!(fields.exponent, 0xff);
        assert!(fields.mantissa.iter().all(|bit| !bit));
    }
}
