//! Shared helpers for integration tests.

use bitvis::{BitGroup, Rendering, SegmentKind, VisualiseError};

/// Unwrap a rendering that is expected to produce bits.
pub fn bits(rendering: Result<Rendering, VisualiseError>) -> BitGroup {
    match rendering {
        Ok(Rendering::Bits(group)) => group,
        other => panic!("expected bits, got {other:?}"),
    }
}

/// Parse a string of `0`/`1` characters, ignoring spaces.
pub fn bit_string(text: &str) -> Vec<bool> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c == '1')
        .collect()
}

/// Bits of `group`'s segment of `kind`, or an empty list.
pub fn segment_bits(group: &BitGroup, kind: SegmentKind) -> Vec<bool> {
    group
        .segment(kind)
        .map(|segment| segment.bits().to_vec())
        .unwrap_or_default()
}

/// Read an integer group back as a two's-complement value.
pub fn reconstruct_integer(group: &BitGroup) -> i128 {
    let magnitude = segment_bits(group, SegmentKind::Magnitude);
    let positive = magnitude
        .iter()
        .fold(0_i128, |acc, bit| (acc << 1) | i128::from(*bit));
    if group.is_negative() {
        positive - (1_i128 << magnitude.len())
    } else {
        positive
    }
}

/// Write `value` in `radix` with upper-case digits and a leading `-` when
/// negative.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "digit extraction"
)]
pub fn to_radix(value: i64, radix: u32) -> String {
    let mut magnitude = value.unsigned_abs();
    let radix_wide = u64::from(radix);
    let mut digits = Vec::new();
    loop {
        let digit = u32::try_from(magnitude % radix_wide).unwrap_or_else(|_| unreachable!());
        digits.push(
            char::from_digit(digit, radix)
                .unwrap_or_else(|| unreachable!())
                .to_ascii_uppercase(),
        );
        magnitude /= radix_wide;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}
