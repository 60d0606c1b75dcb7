//! Entry points that combine parsing, classification and rendering.
//!
//! [`visualise`] handles a decimal literal for any type.
//! [`visualise_from_radix`] first converts digits in another radix to decimal
//! and then feeds the result through the same pipeline.

use crate::classify::classify;
use crate::literal::{parse_float, parse_integer};
use crate::radix::{ConversionError, parse_radix, to_decimal};
use crate::render::{RenderError, Rendering, render};
use crate::scalar::{ScalarKind, ScalarType};

/// Routing failures and aborted radix conversions.
///
/// Unparseable or out-of-range literals are not errors: they render as
/// [`Rendering::Impossible`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisualiseError {
    #[error("unknown type name '{0}'")]
    UnknownType(String),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

fn resolve(type_name: &str) -> Result<(ScalarType, ScalarKind), VisualiseError> {
    ScalarType::from_name(type_name)
        .and_then(|scalar| scalar.kind().map(|kind| (scalar, kind)))
        .ok_or_else(|| VisualiseError::UnknownType(type_name.to_string()))
}

/// Show the bit pattern of `literal` stored as `type_name`.
///
/// # Errors
/// Returns [`VisualiseError::UnknownType`] when `type_name` is not one of
/// `char`, `short`, `int`, `long`, `float` or `double`.
///
/// # Examples
///
/// ```rust
/// use bitvis::visualise;
///
/// let rendering = visualise("char", "-1").unwrap_or_else(|err| panic!("{err}"));
/// assert_eq!(
///     rendering.to_string(),
///     "1 sign bit: 1 (negative)\n7 binary digits: 1 1 1 1 1 1 1"
/// );
/// ```
pub fn visualise(type_name: &str, literal: &str) -> Result<Rendering, VisualiseError> {
    let (scalar, kind) = resolve(type_name)?;
    let parsed = match kind {
        ScalarKind::Integer => parse_integer(literal),
        ScalarKind::FloatingPoint => parse_float(literal),
    };
    let classification = classify(scalar, parsed);
    if classification.is_impossible() {
        log::debug!("{literal:?} is impossible as {scalar}");
    }
    render(&classification).map_err(VisualiseError::from)
}

/// Convert `digits` written in `radix` and show the bit pattern of the result
/// stored as `type_name`.
///
/// # Errors
/// Returns [`VisualiseError::UnknownType`] for unknown names,
/// [`ConversionError::NotAnInteger`] for `float` and `double`, and any other
/// [`ConversionError`] raised while converting the digits. A failed
/// conversion never renders.
pub fn visualise_from_radix(
    type_name: &str,
    digits: &str,
    radix: &str,
) -> Result<Rendering, VisualiseError> {
    let (scalar, _) = resolve(type_name)?;
    let radix = parse_radix(radix)?;
    let decimal = to_decimal(scalar, digits, radix)?;
    visualise(type_name, &decimal)
}
