#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{BadgeError, ColorError};
use crate::escape::{EscapeSequence, Layer, Paint, RESET};

/// A labelled banner and badge.
///
/// An alias binds some text to a foreground color, a background color, an
/// optional style, an optional banner width, and a one-character badge glyph.
/// It renders three views:
///
///   * [`Alias::banner`] is the bracketed text, centered within the banner
///     width, in full color and style, followed by [`RESET`].
///   * [`Alias::bare`] is the same bracketed text with style only. It has no
///     colors and does not reset the style.
///   * [`Alias::badge`] is the bracketed badge glyph in full color and style,
///     followed by [`RESET`].
///
/// The banner width includes the two brackets. Without a banner width, the
/// text is not padded at all.
///
/// ```
/// # use tinted::{Alias, Attribute};
/// # use tinted::error::Error;
/// # fn main() -> Result<(), Error> {
/// let warning = Alias::new("WARN", (0, 0, 0), "#ffd700")?
///     .with_banner_width(10)
///     .with_style(Attribute::Bold)
///     .with_badge("!")?;
///
/// assert_eq!(warning.bare(), "\x1b[1m[  WARN  ]");
/// assert_eq!(
///     warning.badge(),
///     "\x1b[38;2;0;0;0m\x1b[48;2;255;215;0m\x1b[1m[!]\x1b[0;0m"
/// );
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "tinted")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alias {
    text: String,
    foreground: EscapeSequence,
    background: EscapeSequence,
    style: EscapeSequence,
    width: usize,
    glyph: char,
}

impl Alias {
    /// Create a new alias with the given text, foreground, and background.
    ///
    /// The new alias has no style, no banner width, and a space as badge glyph.
    pub fn new(
        text: impl Into<String>,
        foreground: impl Into<Paint>,
        background: impl Into<Paint>,
    ) -> Result<Self, ColorError> {
        Ok(Self {
            text: text.into(),
            foreground: foreground.into().resolve(Layer::Foreground)?,
            background: background.into().resolve(Layer::Background)?,
            style: EscapeSequence::empty(),
            width: 0,
            glyph: ' ',
        })
    }

    /// Create a new alias with the given banner width.
    ///
    /// The width includes the two brackets, so the text is centered within two
    /// columns less. Widths smaller than the text leave it unpadded.
    pub fn with_banner_width(&self, width: usize) -> Self {
        Self {
            width: width.saturating_sub(2),
            ..self.clone()
        }
    }

    /// Create a new alias with the given style.
    pub fn with_style(&self, style: impl Into<EscapeSequence>) -> Self {
        Self {
            style: style.into(),
            ..self.clone()
        }
    }

    /// Create a new alias with the given badge glyph.
    ///
    /// Only the first character of the glyph is retained. An empty glyph is an
    /// error.
    pub fn with_badge(&self, glyph: &str) -> Result<Self, BadgeError> {
        let mut chars = glyph.chars();
        let first = chars.next().ok_or(BadgeError::EmptyGlyph)?;
        if chars.next().is_some() {
            tracing::debug!(glyph, retained = %first, "badge glyph truncated to first character");
        }
        Ok(self.with_badge_char(first))
    }

    /// Create a new alias with the given badge character.
    pub fn with_badge_char(&self, glyph: char) -> Self {
        Self {
            glyph,
            ..self.clone()
        }
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the width for centering the text, i.e., without brackets.
    pub fn banner_width(&self) -> usize {
        self.width
    }

    /// Get the badge glyph.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Render the banner.
    pub fn banner(&self) -> String {
        format!(
            "{}{}{}[{}]{}",
            self.foreground,
            self.background,
            self.style,
            center(&self.text, self.width),
            RESET
        )
    }

    /// Render the bare banner without colors or reset.
    pub fn bare(&self) -> String {
        format!("{}[{}]", self.style, center(&self.text, self.width))
    }

    /// Render the badge.
    pub fn badge(&self) -> String {
        format!(
            "{}{}{}[{}]{}",
            self.foreground, self.background, self.style, self.glyph, RESET
        )
    }
}

/// Center the text within the given number of columns.
///
/// Columns are counted as characters. If the width does not exceed the text's
/// length, the text is returned as is. Otherwise, padding is split evenly, with
/// an odd space always going after the text.
///
/// This differs from Python's `str.center`, which puts the odd space before
/// the text when the text's length is even. For example, `"AB".center(5)` is
/// `"  AB "`, whereas this function returns `" AB  "`.
fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Alias {
    /// Create a new alias. <i class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (text, foreground, background, banner_width=None, style=None, badge_sign=" "))]
    pub fn py_new(
        text: String,
        #[pyo3(from_py_with = "crate::into_foreground")] foreground: EscapeSequence,
        #[pyo3(from_py_with = "crate::into_background")] background: EscapeSequence,
        banner_width: Option<usize>,
        style: Option<String>,
        badge_sign: &str,
    ) -> PyResult<Self> {
        let mut alias = Self::new(text, foreground, background)?.with_badge(badge_sign)?;
        if let Some(width) = banner_width {
            alias = alias.with_banner_width(width);
        }
        if let Some(s) = style {
            alias = alias.with_style(crate::into_escape(s));
        }
        Ok(alias)
    }

    /// Render the banner. <i class=python-only>Python only!</i>
    #[getter(Banner)]
    pub fn py_banner(&self) -> String {
        self.banner()
    }

    /// Render the bare banner. <i class=python-only>Python only!</i>
    #[getter(Bare)]
    pub fn py_bare(&self) -> String {
        self.bare()
    }

    /// Render the badge. <i class=python-only>Python only!</i>
    #[getter(Badge)]
    pub fn py_badge(&self) -> String {
        self.badge()
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{center, Alias};
    use crate::error::{BadgeError, Error};
    use crate::escape::{background, foreground, BOLD, ESC, RESET};
    use tracing_test::traced_test;

    #[test]
    fn test_center() {
        assert_eq!(center("AB", 4), " AB ");
        assert_eq!(center("AB", 5), " AB  ");
        assert_eq!(center("AB", 7), "  AB   ");
        assert_eq!(center("AB", 2), "AB");
        assert_eq!(center("AB", 1), "AB");
        assert_eq!(center("AB", 0), "AB");
        assert_eq!(center("", 3), "   ");
        assert_eq!(center("äö", 4), " äö ");
    }

    #[test]
    fn test_banner() -> Result<(), Error> {
        let fg = foreground((255, 0, 0))?;
        let bg = background((0, 255, 0))?;
        let alias = Alias::new("AB", (255, 0, 0), (0, 255, 0))?.with_banner_width(6);

        assert_eq!(alias.banner_width(), 4);
        assert_eq!(alias.banner(), format!("{}{}[ AB ]{}", fg, bg, RESET));
        assert_eq!(alias.bare(), "[ AB ]");
        assert_eq!(alias.badge(), format!("{}{}[ ]{}", fg, bg, RESET));

        let alias = alias.with_style(BOLD);
        assert_eq!(
            alias.banner(),
            format!("{}{}{}[ AB ]{}", fg, bg, BOLD, RESET)
        );
        assert_eq!(alias.bare(), format!("{}[ AB ]", BOLD));
        Ok(())
    }

    #[test]
    fn test_default_width() -> Result<(), Error> {
        let alias = Alias::new("INFO", "#000000", "#ffffff")?;
        assert_eq!(alias.banner_width(), 0);
        assert_eq!(alias.bare(), "[INFO]");

        let narrow = alias.with_banner_width(1);
        assert_eq!(narrow.banner_width(), 0);
        assert_eq!(narrow.bare(), "[INFO]");
        Ok(())
    }

    #[test]
    #[traced_test]
    fn test_badge() -> Result<(), Error> {
        let alias = Alias::new("X", (1, 1, 1), (2, 2, 2))?;
        assert_eq!(alias.with_badge("XY")?, alias.with_badge("X")?);
        assert!(logs_contain("badge glyph truncated"));
        assert_eq!(alias.with_badge("XY")?.glyph(), 'X');
        assert_eq!(alias.with_badge("✓")?.glyph(), '✓');
        assert_eq!(alias.with_badge(""), Err(BadgeError::EmptyGlyph));
        assert!(alias.with_badge_char('*').badge().contains("[*]"));
        Ok(())
    }

    #[test]
    fn test_bare_has_no_color() -> Result<(), Error> {
        let alias = Alias::new("plain", (9, 9, 9), (8, 8, 8))?.with_banner_width(11);
        let bare = alias.bare();
        assert!(!bare.contains(ESC));
        assert!(!bare.contains(RESET.as_str()));
        assert_eq!(bare, "[  plain  ]");
        Ok(())
    }
}
