//! Library crate for bitvis.
//!
//! Converts numeric literals into the exact bit patterns that fixed-width
//! integer and IEEE-754 types store, and converts integer literals written in
//! radix 2 to 16 into the decimal value a given width would hold.

#![forbid(unsafe_code)]

pub mod classify;
pub mod literal;
pub mod radix;
pub mod render;
pub mod scalar;
pub mod visualise;

pub use classify::{Classification, classify};
pub use literal::{ParsedLiteral, parse_float, parse_integer};
pub use radix::{ConversionError, to_decimal};
pub use render::{BitGroup, BitSegment, RenderError, Rendering, SegmentKind};
pub use scalar::{ScalarKind, ScalarType};
pub use visualise::{VisualiseError, visualise, visualise_from_radix};
