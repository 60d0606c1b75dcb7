//! Grouped bit sequences and their text form.

use std::fmt;

use crate::scalar::ScalarType;

/// Role of a run of bits within a scalar's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Sign,
    /// Two's-complement value bits below the sign bit.
    Magnitude,
    Exponent,
    Mantissa,
}

impl SegmentKind {
    fn label(self) -> &'static str {
        match self {
            Self::Sign => "sign bit",
            Self::Magnitude => "binary digits",
            Self::Exponent => "exponent bits",
            Self::Mantissa => "mantissa bits",
        }
    }
}

/// A named run of bits, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSegment {
    kind: SegmentKind,
    bits: Vec<bool>,
}

impl BitSegment {
    #[must_use]
    pub fn new(kind: SegmentKind, bits: Vec<bool>) -> Self {
        Self { kind, bits }
    }

    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The segment read as an unsigned binary number.
    #[must_use]
    pub fn value(&self) -> u64 {
        fold_bits(0, &self.bits)
    }
}

impl fmt::Display for BitSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.len(), self.kind.label())?;
        let digits = self
            .bits
            .iter()
            .map(|bit| if *bit { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&digits)?;
        if self.kind == SegmentKind::Sign {
            let polarity = if self.bits.contains(&true) {
                "negative"
            } else {
                "positive"
            };
            write!(f, " ({polarity})")?;
        }
        Ok(())
    }
}

fn fold_bits(acc: u64, bits: &[bool]) -> u64 {
    bits.iter()
        .fold(acc, |acc, bit| (acc << 1) | u64::from(*bit))
}

/// The full storage of one scalar, split into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGroup {
    scalar: ScalarType,
    segments: Vec<BitSegment>,
}

impl BitGroup {
    #[must_use]
    pub fn new(scalar: ScalarType, segments: Vec<BitSegment>) -> Self {
        Self { scalar, segments }
    }

    #[must_use]
    pub fn scalar(&self) -> ScalarType {
        self.scalar
    }

    #[must_use]
    pub fn segments(&self) -> &[BitSegment] {
        &self.segments
    }

    /// First segment of the given kind.
    #[must_use]
    pub fn segment(&self, kind: SegmentKind) -> Option<&BitSegment> {
        self.segments.iter().find(|segment| segment.kind == kind)
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.segment(SegmentKind::Sign)
            .is_some_and(|sign| sign.bits.contains(&true))
    }

    /// Total number of bits across all segments.
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments.iter().map(BitSegment::len).sum()
    }

    /// Reassemble the raw storage pattern, sign bit first.
    ///
    /// For a `float` this equals `f32::to_bits` widened to `u64`.
    #[must_use]
    pub fn to_bits(&self) -> u64 {
        self.segments
            .iter()
            .fold(0, |acc, segment| fold_bits(acc, &segment.bits))
    }
}

impl fmt::Display for BitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Result of rendering a classified value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    Bits(BitGroup),
    /// The value could not be parsed or does not fit the requested type.
    Impossible,
}

impl Rendering {
    #[must_use]
    pub fn bits(&self) -> Option<&BitGroup> {
        match self {
            Self::Bits(group) => Some(group),
            Self::Impossible => None,
        }
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bits(group) => group.fmt(f),
            Self::Impossible => f.write_str("Impossible! Data is too large or invalid."),
        }
    }
}
