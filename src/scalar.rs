//! Scalar type catalogue.
//!
//! This module defines the closed set of fixed-width scalar types whose bit
//! layout can be visualised, together with the per-type facts the rest of the
//! crate needs: the dictionary name, the kind tag, the bit width, the integer
//! bounds and the IEEE-754 field layout. Every fact lives in an explicit table
//! keyed by variant so that reordering the enum never changes a width.

use std::fmt;
use std::str::FromStr;

use num_traits::{Bounded, Float};
use phf::phf_map;

/// A fixed-width scalar type, or the `Impossible` verdict when none fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarType {
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    /// No type fits the value, or the value could not be parsed.
    Impossible,
}

/// Whether a scalar type stores two's-complement integers or IEEE-754 floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    FloatingPoint,
}

/// Field widths of an IEEE-754 binary format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatLayout {
    pub exponent_bits: u32,
    pub mantissa_bits: u32,
    pub bias: i32,
}

impl FloatLayout {
    pub const SINGLE: Self = Self {
        exponent_bits: 8,
        mantissa_bits: 23,
        bias: 127,
    };
    pub const DOUBLE: Self = Self {
        exponent_bits: 11,
        mantissa_bits: 52,
        bias: 1023,
    };

    /// Largest value the exponent field can hold (all ones).
    #[must_use]
    pub fn exponent_mask(self) -> u64 {
        (1_u64 << self.exponent_bits) - 1
    }
}

/// Maps dictionary names to their scalar type.
///
/// Lookup is case-sensitive: `"Char"` and `"INT"` are not type names.
static TYPE_NAMES: phf::Map<&'static str, ScalarType> = phf_map! {
    "char" => ScalarType::Char,
    "short" => ScalarType::Short,
    "int" => ScalarType::Int,
    "long" => ScalarType::Long,
    "float" => ScalarType::Float,
    "double" => ScalarType::Double,
};

fn bounds_of<T: Bounded + Into<i64>>() -> (i64, i64) {
    (T::min_value().into(), T::max_value().into())
}

fn max_of<T: Float + Into<f64>>() -> f64 {
    T::max_value().into()
}

impl ScalarType {
    /// Every type that can be requested by name, in dictionary order.
    pub const ALL: [Self; 6] = [
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// Resolve a dictionary name such as `"short"`.
    ///
    /// Returns `None` for unknown names, including `"impossible"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TYPE_NAMES.get(name).copied()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Impossible => "impossible",
        }
    }

    #[must_use]
    pub fn kind(self) -> Option<ScalarKind> {
        match self {
            Self::Char | Self::Short | Self::Int | Self::Long => Some(ScalarKind::Integer),
            Self::Float | Self::Double => Some(ScalarKind::FloatingPoint),
            Self::Impossible => None,
        }
    }

    /// Storage width in bits.
    #[must_use]
    pub fn bits(self) -> Option<u32> {
        match self {
            Self::Char => Some(8),
            Self::Short => Some(16),
            Self::Int | Self::Float => Some(32),
            Self::Long | Self::Double => Some(64),
            Self::Impossible => None,
        }
    }

    /// Inclusive two's-complement range of an integer type.
    #[must_use]
    pub fn integer_bounds(self) -> Option<(i64, i64)> {
        match self {
            Self::Char => Some(bounds_of::<i8>()),
            Self::Short => Some(bounds_of::<i16>()),
            Self::Int => Some(bounds_of::<i32>()),
            Self::Long => Some(bounds_of::<i64>()),
            Self::Float | Self::Double | Self::Impossible => None,
        }
    }

    /// Largest finite magnitude of a floating-point type.
    #[must_use]
    pub fn float_max(self) -> Option<f64> {
        match self {
            Self::Float => Some(max_of::<f32>()),
            Self::Double => Some(max_of::<f64>()),
            _ => None,
        }
    }

    #[must_use]
    pub fn float_layout(self) -> Option<FloatLayout> {
        match self {
            Self::Float => Some(FloatLayout::SINGLE),
            Self::Double => Some(FloatLayout::DOUBLE),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a type name is not in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type name '{0}'")]
pub struct UnknownTypeName(pub String);

impl FromStr for ScalarType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTypeName(s.to_string()))
    }
}
