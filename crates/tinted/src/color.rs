//! RGB triples, hexadecimal color strings, and their parsing.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorError;

/// A 24-bit RGB color.
///
/// Each coordinate is an unsigned byte, so the invariant that channels fall
/// into `0..=255` holds by construction. A triple can be created from its
/// coordinates, an array, a tuple, or a hexadecimal string:
/// ```
/// # use tinted::Rgb;
/// # use tinted::error::ColorError;
/// # fn main() -> Result<(), ColorError> {
/// let sienna = Rgb::new(0xa0, 0x52, 0x2d);
/// assert_eq!(Rgb::from((160, 82, 45)), sienna);
/// assert_eq!("#a0522d".parse::<Rgb>()?, sienna);
/// assert_eq!("A0522D".parse::<Rgb>()?, sienna);
/// assert_eq!(sienna.to_string(), "#a0522d");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "tinted")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new RGB color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub const fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Access this RGB color's coordinates. <i class=python-only>Python
    /// only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Get this RGB color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the coordinate at the given index. <i class=python-only>Python
    /// only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a hexadecimal color string.
    ///
    /// The string must contain exactly six hexadecimal digits, with one
    /// optional leading `#`. Letter case does not matter.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorError::MalformedColorString);
        }

        fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorError> {
            let t = s
                .get(2 * index..2 * (index + 1))
                .ok_or(ColorError::MalformedColorString)?;

            // from_str_radix tolerates a leading sign, we don't.
            if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorError::MalformedColorString);
            }
            u8::from_str_radix(t, 16).map_err(|_| ColorError::MalformedColorString)
        }

        let r = parse_coordinate(digits, 0)?;
        let g = parse_coordinate(digits, 1)?;
        let b = parse_coordinate(digits, 2)?;
        Ok(Self([r, g, b]))
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self([value.0, value.1, value.2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for Rgb {
    type Error = ColorError;

    /// Try to convert a slice to an RGB color.
    ///
    /// Only slices with exactly three elements are triples. Any other slice is
    /// an unsupported color type.
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 3]>::try_from(value)
            .map(Self)
            .map_err(|_| ColorError::UnsupportedColorType)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ====================================================================================================================

/// A color as accepted by the escape codec.
///
/// A color is either an RGB triple or a hexadecimal string. Strings are kept
/// as is and only parsed when converted into an escape sequence, which is also
/// where a malformed string is reported.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(Rgb),
    Hex(String),
}

impl Color {
    /// Resolve this color to an RGB triple.
    pub fn to_rgb(&self) -> Result<Rgb, ColorError> {
        match self {
            Self::Rgb(rgb) => Ok(*rgb),
            Self::Hex(s) => Rgb::from_hex(s),
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(value.into())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::Rgb(value.into())
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_owned())
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::Hex(value)
    }
}

impl From<&String> for Color {
    fn from(value: &String) -> Self {
        Self::Hex(value.clone())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, ColorError, Rgb};

    #[test]
    fn test_from_hex() -> Result<(), ColorError> {
        assert_eq!(Rgb::from_hex("#112233")?, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(Rgb::from_hex("112233")?, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(Rgb::from_hex("#FfEe00")?, Rgb::new(0xff, 0xee, 0));
        assert_eq!(Rgb::from_hex("#123"), Err(ColorError::MalformedColorString));
        assert_eq!(Rgb::from_hex(""), Err(ColorError::MalformedColorString));
        assert_eq!(
            Rgb::from_hex("##112233"),
            Err(ColorError::MalformedColorString)
        );
        assert_eq!(
            Rgb::from_hex("#1122334"),
            Err(ColorError::MalformedColorString)
        );
        assert_eq!(
            Rgb::from_hex("#11223g"),
            Err(ColorError::MalformedColorString)
        );
        assert_eq!(
            Rgb::from_hex("+1+2+3"),
            Err(ColorError::MalformedColorString)
        );
        assert_eq!(
            Rgb::from_hex("#💩00"),
            Err(ColorError::MalformedColorString)
        );
        assert_eq!(
            Rgb::from_hex("é11223"),
            Err(ColorError::MalformedColorString)
        );
        Ok(())
    }

    #[test]
    fn test_conversion() -> Result<(), ColorError> {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb.as_ref(), &[1, 2, 3]);
        assert_eq!(rgb[2], 3);
        assert_eq!(<[u8; 3]>::from(rgb), [1, 2, 3]);
        assert_eq!(Rgb::try_from(&[1_u8, 2, 3][..])?, rgb);
        assert_eq!(
            Rgb::try_from(&[1_u8, 2][..]),
            Err(ColorError::UnsupportedColorType)
        );
        assert_eq!(
            Rgb::try_from(&[1_u8, 2, 3, 4][..]),
            Err(ColorError::UnsupportedColorType)
        );

        assert_eq!(Color::from((1, 2, 3)).to_rgb()?, rgb);
        assert_eq!(Color::from("#010203").to_rgb()?, rgb);
        assert_eq!(
            Color::from("nope").to_rgb(),
            Err(ColorError::MalformedColorString)
        );
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(0, 0x0a, 0xff).to_string(), "#000aff");
    }
}
