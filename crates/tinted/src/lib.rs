//! # Tinted
//!
//! Tinted wraps text in 24-bit ANSI escape sequences. It assumes a terminal
//! with truecolor support and does not negotiate capabilities or fall back to
//! fewer colors.
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Tinted's main abstractions are:
//!
//!   * [`Rgb`] and [`Color`] represent colors as RGB triples or hexadecimal
//!     strings. The [`named`] module has a table of several hundred named
//!     colors.
//!   * [`foreground`] and [`background`] convert colors into
//!     [`EscapeSequence`]s for the respective [`Layer`]. [`Attribute`] and the
//!     constants [`BOLD`], [`ITALICS`], [`UNDERLINED`], [`INVERSE`], [`BLINK`],
//!     [`HIDDEN`], and [`RESET`] cover text styles.
//!   * [`StyledText`] renders text in one foreground color and style.
//!   * [`Alias`] renders a bracketed label as a colored **banner**, a **bare**
//!     style-only banner, or a single-character colored **badge**.
#![cfg_attr(
    feature = "date",
    doc = "  * [`date::DateFormat`] renders timestamps through styled text."
)]
#![cfg_attr(
    not(feature = "date"),
    doc = "  * The optional `date` module renders timestamps through styled text."
)]
//!
//!
//! ## 2. Example
//!
//! ```
//! # use tinted::{Alias, StyledText, BOLD};
//! # use tinted::error::Error;
//! # use tinted::named::lookup;
//! # fn main() -> Result<(), Error> {
//! let orange = lookup("ORANGE").unwrap();
//! let highlight = StyledText::new(orange)?.with_style(BOLD);
//! let ok = Alias::new("OK", (0, 0, 0), "#00c000")?.with_banner_width(6);
//!
//! println!("{} {}", ok.banner(), highlight.render(&["all", "good"]));
//! assert_eq!(ok.bare(), "[ OK ]");
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Tinted supports two feature flags:
//!
//!   - **`date`** controls the `date` module and its dependency on
//!     [chrono](https://crates.io/crates/chrono). This feature is enabled by
//!     default.
//!   - **`pyffi`** controls tinted's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Diagnostic events are emitted through [tracing](https://docs.rs/tracing);
//! tinted never installs a subscriber itself.

mod alias;
mod color;
pub mod error;
mod escape;
pub mod named;
mod text;

#[cfg(feature = "date")]
pub mod date;

pub use alias::Alias;
pub use color::{Color, Rgb};
pub use escape::{
    background, escape, foreground, Attribute, EscapeSequence, Layer, Paint, BLINK, BOLD, ESC,
    HIDDEN, INVERSE, ITALICS, RESET, UNDERLINED,
};
pub use text::StyledText;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::{PyDict, PyString, PyTuple};

/// Convert a Python object into an escape sequence for the given layer.
///
/// Strings starting with the escape character are used verbatim, other
/// strings are hexadecimal colors. Tuples of three integers are RGB triples,
/// even if their components do not fit into a byte, and so are [`Rgb`]
/// objects. Anything else is an unsupported color type.
#[cfg(feature = "pyffi")]
fn into_sequence(obj: &Bound<'_, PyAny>, layer: Layer) -> PyResult<EscapeSequence> {
    if let Ok(s) = obj.downcast::<PyString>() {
        let s = s.to_str()?;
        if s.starts_with(ESC) {
            return Ok(EscapeSequence::adopt(s.to_owned()));
        }
        return Ok(escape(layer, &Color::from(s))?);
    } else if obj.is_instance_of::<PyTuple>() {
        let (r, g, b) = obj
            .extract::<(i64, i64, i64)>()
            .map_err(|_| error::ColorError::UnsupportedColorType)?;
        return Ok(match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
            (Ok(r), Ok(g), Ok(b)) => escape(layer, &Color::from((r, g, b)))?,
            _ => {
                tracing::debug!(r, g, b, "passing through out-of-range coordinates");
                EscapeSequence::coordinates(layer, [r, g, b])
            }
        });
    }

    let rgb = obj
        .extract::<Rgb>()
        .map_err(|_| error::ColorError::UnsupportedColorType)?;
    Ok(escape(layer, &Color::from(rgb))?)
}

/// Convert a Python object into a foreground escape sequence.
#[cfg(feature = "pyffi")]
pub(crate) fn into_foreground(obj: &Bound<'_, PyAny>) -> PyResult<EscapeSequence> {
    into_sequence(obj, Layer::Foreground)
}

/// Convert a Python object into a background escape sequence.
#[cfg(feature = "pyffi")]
pub(crate) fn into_background(obj: &Bound<'_, PyAny>) -> PyResult<EscapeSequence> {
    into_sequence(obj, Layer::Background)
}

/// Convert a Python string into an escape sequence.
#[cfg(feature = "pyffi")]
pub(crate) fn into_escape(s: String) -> EscapeSequence {
    EscapeSequence::adopt(s)
}

/// Convert the color into a foreground escape sequence. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "foreground")]
fn py_foreground(#[pyo3(from_py_with = "into_foreground")] sequence: EscapeSequence) -> String {
    sequence.to_string()
}

/// Convert the color into a background escape sequence. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "background")]
fn py_background(#[pyo3(from_py_with = "into_background")] sequence: EscapeSequence) -> String {
    sequence.to_string()
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn tinted(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_foreground, m)?)?;
    m.add_function(wrap_pyfunction!(py_background, m)?)?;

    m.add_class::<Alias>()?;
    m.add_class::<Attribute>()?;
    m.add_class::<Layer>()?;
    m.add_class::<Rgb>()?;
    m.add_class::<StyledText>()?;

    // ---------------------------------------------------------------------- constants
    for (name, sequence) in [
        ("BOLD", BOLD),
        ("ITALICS", ITALICS),
        ("UNDERLINED", UNDERLINED),
        ("INVERSE", INVERSE),
        ("BLINK", BLINK),
        ("HIDDEN", HIDDEN),
        ("RESET", RESET),
    ] {
        m.add(name, sequence.as_str())?;
    }

    // -------------------------------------------------------------------------- named
    let colors = PyDict::new(m.py());
    for (name, rgb) in named::NAMED_COLORS.iter() {
        // Later bindings overwrite earlier ones, just like named::lookup().
        colors.set_item(*name, *rgb)?;
    }
    m.add("NAMED_COLORS", colors)?;

    Ok(())
}
