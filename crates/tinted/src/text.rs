#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorError;
use crate::escape::{EscapeSequence, Layer, Paint, RESET};

/// A reusable formatter for styled text.
///
/// Styled text binds one foreground color and one optional style. Rendering
/// joins its parts, prefixes the result with the foreground and style, and
/// terminates it with [`RESET`]. Since instances are immutable, they can be
/// arbitrarily reused.
///
/// ```
/// # use tinted::{StyledText, BOLD};
/// # use tinted::error::ColorError;
/// # fn main() -> Result<(), ColorError> {
/// let highlighter = StyledText::new((255, 165, 0))?.with_style(BOLD);
/// assert_eq!(
///     highlighter.render(&["Hello", "World!"]),
///     "\x1b[38;2;255;165;0m\x1b[1mHello World!\x1b[0;0m"
/// );
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "tinted")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyledText {
    foreground: EscapeSequence,
    style: EscapeSequence,
}

impl StyledText {
    /// Create new styled text with the given foreground and no style.
    ///
    /// An escape sequence is used verbatim, whereas a color is converted into
    /// a foreground escape sequence.
    pub fn new(foreground: impl Into<Paint>) -> Result<Self, ColorError> {
        Ok(Self {
            foreground: foreground.into().resolve(Layer::Foreground)?,
            style: EscapeSequence::empty(),
        })
    }

    /// Create new styled text with the given style.
    pub fn with_style(&self, style: impl Into<EscapeSequence>) -> Self {
        Self {
            foreground: self.foreground.clone(),
            style: style.into(),
        }
    }

    /// Get the foreground escape sequence.
    pub fn foreground(&self) -> &EscapeSequence {
        &self.foreground
    }

    /// Get the style escape sequence, which may be empty.
    pub fn style(&self) -> &EscapeSequence {
        &self.style
    }

    /// Render the parts separated by a single space.
    pub fn render<S: AsRef<str>>(&self, parts: &[S]) -> String {
        self.render_with(parts, " ")
    }

    /// Render the parts separated by the given separator.
    ///
    /// Zero parts still produce the foreground, style, and reset sequences.
    pub fn render_with<S: AsRef<str>>(&self, parts: &[S], separator: &str) -> String {
        let mut s = String::new();
        s.push_str(self.foreground.as_str());
        s.push_str(self.style.as_str());
        for (index, part) in parts.iter().enumerate() {
            if 0 < index {
                s.push_str(separator);
            }
            s.push_str(part.as_ref());
        }
        s.push_str(RESET.as_str());
        s
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl StyledText {
    /// Create new styled text. <i class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (foreground, style=None))]
    pub fn py_new(
        #[pyo3(from_py_with = "crate::into_foreground")] foreground: EscapeSequence,
        style: Option<String>,
    ) -> PyResult<Self> {
        let text = Self::new(foreground)?;
        Ok(match style {
            Some(s) => text.with_style(crate::into_escape(s)),
            None => text,
        })
    }

    /// Render the parts. <i class=python-only>Python only!</i>
    #[pyo3(signature = (*parts, sep=" "))]
    pub fn __call__(&self, parts: Vec<String>, sep: &str) -> String {
        self.render_with(&parts, sep)
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::StyledText;
    use crate::error::ColorError;
    use crate::escape::{foreground, ITALICS, RESET};

    #[test]
    fn test_render() -> Result<(), ColorError> {
        let fg = foreground((10, 20, 30))?;
        let text = StyledText::new((10, 20, 30))?;
        assert_eq!(text.foreground(), &fg);
        assert!(text.style().is_empty());
        assert_eq!(text.render(&["a", "b"]), format!("{}a b{}", fg, RESET));
        assert_eq!(
            text.render_with(&["a", "b", "c"], ", "),
            format!("{}a, b, c{}", fg, RESET)
        );

        let none: [&str; 0] = [];
        let styled = text.with_style(ITALICS);
        assert_eq!(styled.render(&none), format!("{}{}{}", fg, ITALICS, RESET));
        assert_eq!(
            styled.render(&[String::from("x")]),
            format!("{}{}x{}", fg, ITALICS, RESET)
        );
        Ok(())
    }

    #[test]
    fn test_escape_is_verbatim() -> Result<(), ColorError> {
        let fg = foreground("#102030")?;
        let text = StyledText::new(&fg)?;
        assert_eq!(text.foreground(), &fg);
        assert_eq!(text, StyledText::new("102030")?);
        Ok(())
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            StyledText::new("#10203"),
            Err(ColorError::MalformedColorString)
        );
    }
}
