//! Generation and composition of ANSI escape sequences.
//!
//! This module converts [`Color`]s into 24-bit SGR escape sequences for either
//! the foreground or background [`Layer`] and provides the fixed escape
//! sequences for text [`Attribute`]s as well as [`RESET`].
//!
//! ```
//! # use tinted::{background, foreground, BOLD, RESET};
//! # use tinted::error::ColorError;
//! # fn main() -> Result<(), ColorError> {
//! let fg = foreground((215, 40, 39))?;
//! let bg = background("#ffffff")?;
//! assert_eq!(fg.as_str(), "\x1b[38;2;215;40;39m");
//! assert_eq!(bg.as_str(), "\x1b[48;2;255;255;255m");
//!
//! let styled = format!("{}{}{}Wow!{}", fg, bg, BOLD, RESET);
//! assert_eq!(styled, "\x1b[38;2;215;40;39m\x1b[48;2;255;255;255m\x1b[1mWow!\x1b[0;0m");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorError;
use crate::{Color, Rgb};

/// The escape character starting every escape sequence.
pub const ESC: char = '\x1b';

/// The targeted display layer: Foreground or background.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tinted")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Layer {
    /// Determine whether this layer is the foreground.
    pub fn is_foreground(&self) -> bool {
        matches!(self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

// ====================================================================================================================

/// An ANSI escape sequence.
///
/// Escape sequences are opaque. They are produced by [`foreground`],
/// [`background`], [`Attribute::escape`], or the constants in this module,
/// and they compose by concatenation with `+`. The empty sequence is the
/// identity for composition and the default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EscapeSequence(Cow<'static, str>);

impl EscapeSequence {
    const fn constant(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    /// Create the empty escape sequence.
    pub const fn empty() -> Self {
        Self::constant("")
    }

    /// Determine whether this escape sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get this escape sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adopt a string received from Python as escape sequence.
    #[cfg(feature = "pyffi")]
    pub(crate) fn adopt(s: String) -> Self {
        Self(Cow::Owned(s))
    }

    /// Create the escape sequence for the color on the given layer.
    fn rgb(layer: Layer, rgb: Rgb) -> Self {
        let [r, g, b] = *rgb.as_ref();
        Self::truecolor(layer, r, g, b)
    }

    /// Create the escape sequence for arbitrary integer coordinates.
    ///
    /// Python callers may pass triples with components outside the byte range.
    /// They are written into the template without interpretation.
    #[cfg(feature = "pyffi")]
    pub(crate) fn coordinates(layer: Layer, coordinates: [i64; 3]) -> Self {
        let [r, g, b] = coordinates;
        Self::truecolor(layer, r, g, b)
    }

    fn truecolor<T: std::fmt::Display>(layer: Layer, r: T, g: T, b: T) -> Self {
        Self(Cow::Owned(format!(
            "{}[{};2;{};{};{}m",
            ESC,
            38 + layer.offset(),
            r,
            g,
            b
        )))
    }
}

impl AsRef<str> for EscapeSequence {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for EscapeSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::ops::Add for EscapeSequence {
    type Output = EscapeSequence;

    fn add(self, rhs: Self) -> Self::Output {
        self + &rhs
    }
}

impl std::ops::Add<&EscapeSequence> for EscapeSequence {
    type Output = EscapeSequence;

    fn add(self, rhs: &EscapeSequence) -> Self::Output {
        if rhs.is_empty() {
            return self;
        } else if self.is_empty() {
            return rhs.clone();
        }

        let mut s = self.0.into_owned();
        s.push_str(&rhs.0);
        Self(Cow::Owned(s))
    }
}

impl From<Attribute> for EscapeSequence {
    fn from(value: Attribute) -> Self {
        value.escape()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The escape sequence for bold text.
pub const BOLD: EscapeSequence = EscapeSequence::constant("\x1b[1m");
/// The escape sequence for italic text.
pub const ITALICS: EscapeSequence = EscapeSequence::constant("\x1b[3m");
/// The escape sequence for underlined text.
pub const UNDERLINED: EscapeSequence = EscapeSequence::constant("\x1b[4m");
/// The escape sequence for blinking text.
pub const BLINK: EscapeSequence = EscapeSequence::constant("\x1b[5m");
/// The escape sequence for swapping foreground and background.
pub const INVERSE: EscapeSequence = EscapeSequence::constant("\x1b[7m");
/// The escape sequence for hidden text.
pub const HIDDEN: EscapeSequence = EscapeSequence::constant("\x1b[8m");
/// The escape sequence restoring the terminal's default appearance.
pub const RESET: EscapeSequence = EscapeSequence::constant("\x1b[0;0m");

// ====================================================================================================================

/// A text attribute other than regular.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tinted")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Italic,
    Underlined,
    Blinking,
    Reversed,
    Hidden,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Attribute {
    /// Get the SGR parameter for enabling this attribute.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold => 1,
            Italic => 3,
            Underlined => 4,
            Blinking => 5,
            Reversed => 7,
            Hidden => 8,
        }
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Attribute {
    /// Get the escape sequence enabling this attribute.
    pub const fn escape(&self) -> EscapeSequence {
        use self::Attribute::*;

        match self {
            Bold => BOLD,
            Italic => ITALICS,
            Underlined => UNDERLINED,
            Blinking => BLINK,
            Reversed => INVERSE,
            Hidden => HIDDEN,
        }
    }
}

impl std::ops::Add for Attribute {
    type Output = EscapeSequence;

    fn add(self, rhs: Self) -> Self::Output {
        self.escape() + rhs.escape()
    }
}

// ====================================================================================================================

/// Convert the color into a foreground escape sequence.
///
/// RGB triples are substituted into the 24-bit template as is. Hexadecimal
/// strings are parsed first, which fails for malformed strings.
pub fn foreground(color: impl Into<Color>) -> Result<EscapeSequence, ColorError> {
    escape(Layer::Foreground, &color.into())
}

/// Convert the color into a background escape sequence.
///
/// RGB triples are substituted into the 24-bit template as is. Hexadecimal
/// strings are parsed first, which fails for malformed strings.
pub fn background(color: impl Into<Color>) -> Result<EscapeSequence, ColorError> {
    escape(Layer::Background, &color.into())
}

/// Convert the color into an escape sequence for the given layer.
pub fn escape(layer: Layer, color: &Color) -> Result<EscapeSequence, ColorError> {
    let rgb = color.to_rgb()?;
    tracing::trace!(?layer, %rgb, "converting color to escape sequence");
    Ok(EscapeSequence::rgb(layer, rgb))
}

// ====================================================================================================================

/// Paint for styled text: Either a color or a ready-made escape sequence.
///
/// Formatters such as [`StyledText`](crate::StyledText) and
/// [`Alias`](crate::Alias) accept either. They use escape sequences verbatim
/// and convert colors with [`foreground`] or [`background`], depending on
/// where the paint goes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Paint {
    Color(Color),
    Escape(EscapeSequence),
}

impl Paint {
    /// Resolve this paint to an escape sequence for the given layer.
    pub fn resolve(self, layer: Layer) -> Result<EscapeSequence, ColorError> {
        match self {
            Self::Color(color) => escape(layer, &color),
            Self::Escape(sequence) => Ok(sequence),
        }
    }
}

impl From<EscapeSequence> for Paint {
    fn from(value: EscapeSequence) -> Self {
        Self::Escape(value)
    }
}

impl From<&EscapeSequence> for Paint {
    fn from(value: &EscapeSequence) -> Self {
        Self::Escape(value.clone())
    }
}

impl From<Color> for Paint {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

macro_rules! paint_from_color {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Paint {
                fn from(value: $t) -> Self {
                    Self::Color(value.into())
                }
            }
        )*
    };
}

paint_from_color!(Rgb, [u8; 3], (u8, u8, u8), &str, String, &String);

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escape() -> Result<(), ColorError> {
        assert_eq!(
            foreground((175, 215, 135))?.as_str(),
            "\x1b[38;2;175;215;135m"
        );
        assert_eq!(
            background((175, 215, 135))?.as_str(),
            "\x1b[48;2;175;215;135m"
        );
        assert_eq!(foreground("#afd787")?, foreground((175, 215, 135))?);
        assert_eq!(background("afd787")?, background([175, 215, 135])?);
        assert_eq!(foreground("#afd78"), Err(ColorError::MalformedColorString));
        assert_eq!(background("#afd7zz"), Err(ColorError::MalformedColorString));
        Ok(())
    }

    #[test]
    fn test_constants() {
        assert_eq!(BOLD.to_string(), "\x1b[1m");
        assert_eq!(ITALICS.to_string(), "\x1b[3m");
        assert_eq!(UNDERLINED.to_string(), "\x1b[4m");
        assert_eq!(BLINK.to_string(), "\x1b[5m");
        assert_eq!(INVERSE.to_string(), "\x1b[7m");
        assert_eq!(HIDDEN.to_string(), "\x1b[8m");
        assert_eq!(RESET.to_string(), "\x1b[0;0m");

        for attr in [
            Attribute::Bold,
            Attribute::Italic,
            Attribute::Underlined,
            Attribute::Blinking,
            Attribute::Reversed,
            Attribute::Hidden,
        ] {
            assert_eq!(
                attr.escape().to_string(),
                format!("\x1b[{}m", attr.enable_sgr())
            );
        }
    }

    #[test]
    fn test_composition() {
        assert_eq!((BOLD + UNDERLINED).as_str(), "\x1b[1m\x1b[4m");
        assert_eq!(Attribute::Bold + Attribute::Hidden, BOLD + HIDDEN);
        assert_eq!(EscapeSequence::empty() + BOLD, BOLD);
        assert_eq!(BOLD + EscapeSequence::empty(), BOLD);
        assert!(EscapeSequence::default().is_empty());
    }

    #[test]
    fn test_paint() -> Result<(), ColorError> {
        let sequence = foreground((1, 2, 3))?;
        assert_eq!(Paint::from(&sequence).resolve(Layer::Background)?, sequence);
        assert_eq!(
            Paint::from((1, 2, 3)).resolve(Layer::Background)?,
            background((1, 2, 3))?
        );
        assert_eq!(
            Paint::from("#0g0000").resolve(Layer::Foreground),
            Err(ColorError::MalformedColorString)
        );
        Ok(())
    }

    #[cfg(feature = "pyffi")]
    #[test]
    fn test_coordinates() -> Result<(), ColorError> {
        assert_eq!(
            EscapeSequence::coordinates(Layer::Foreground, [300, 0, 0]).as_str(),
            "\x1b[38;2;300;0;0m"
        );
        assert_eq!(
            EscapeSequence::coordinates(Layer::Background, [-1, 0, 256]).as_str(),
            "\x1b[48;2;-1;0;256m"
        );
        assert_eq!(
            EscapeSequence::coordinates(Layer::Foreground, [1, 2, 3]),
            foreground((1, 2, 3))?
        );
        Ok(())
    }
}
