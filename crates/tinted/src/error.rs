//! Utility module with tinted's errors.

#[cfg(feature = "pyffi")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
};

/// An erroneous color.
///
/// The 24-bit escape template accepts whatever numbers it is given. Hence, the
/// only errors are about the shape of the color, not its values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// A color that is neither an RGB triple nor a hexadecimal string. For
    /// example, the slice `[1, 2]` has too few components to be a triple.
    UnsupportedColorType,

    /// A hexadecimal color string with the wrong number of digits or with
    /// characters that are not hexadecimal digits. For example, `#12345` is
    /// missing a digit, whereas `#12345g` has the right length but contains a
    /// `g`.
    MalformedColorString,
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorError::*;

        match self {
            UnsupportedColorType => {
                f.write_str("color should be an RGB triple or a hexadecimal string but is neither")
            }
            MalformedColorString => f.write_str(
                "color string should have exactly 6 hexadecimal digits, optionally after `#`",
            ),
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        match value {
            ColorError::UnsupportedColorType => PyTypeError::new_err(value.to_string()),
            ColorError::MalformedColorString => PyValueError::new_err(value.to_string()),
        }
    }
}

// ====================================================================================================================

/// An erroneous badge glyph.
///
/// A badge displays exactly one character between brackets. Longer glyphs are
/// truncated to their first character, but there is nothing sensible to do
/// with an empty glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeError {
    /// The badge glyph is the empty string.
    EmptyGlyph,
}

impl std::fmt::Display for BadgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeError::EmptyGlyph => {
                f.write_str("badge glyph should have one character but is empty")
            }
        }
    }
}

impl std::error::Error for BadgeError {}

#[cfg(feature = "pyffi")]
impl From<BadgeError> for PyErr {
    fn from(value: BadgeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// Any error raised by this crate.
///
/// Constructors that may fail for more than one reason, such as
/// [`Alias::with_badge`](crate::Alias::with_badge) after a color conversion,
/// return this error so that `?` composes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Color(ColorError),
    Badge(BadgeError),
}

impl From<ColorError> for Error {
    fn from(value: ColorError) -> Self {
        Self::Color(value)
    }
}

impl From<BadgeError> for Error {
    fn from(value: BadgeError) -> Self {
        Self::Badge(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color(e) => e.fmt(f),
            Self::Badge(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(e) => Some(e),
            Self::Badge(e) => Some(e),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<Error> for PyErr {
    fn from(value: Error) -> Self {
        match value {
            Error::Color(e) => e.into(),
            Error::Badge(e) => e.into(),
        }
    }
}
