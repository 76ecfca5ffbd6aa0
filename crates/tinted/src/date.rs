//! Optional module for styling timestamps.
//!
//! Timestamps are formatted as `YYYY-MM-DD HH:MM:SS`, followed by the
//! microseconds only when they are non-zero and by the UTC offset only when
//! the timestamp has a time zone.
//!
//! ```
//! # use chrono::NaiveDate;
//! # use tinted::date::date;
//! # use tinted::error::ColorError;
//! # fn main() -> Result<(), ColorError> {
//! let noon = NaiveDate::from_ymd_opt(2024, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! assert_eq!(
//!     date(&noon, (0, 128, 0))?,
//!     "\x1b[38;2;0;128;0m2024-03-01 12:00:00\x1b[0;0m"
//! );
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};

use crate::error::ColorError;
use crate::escape::Paint;
use crate::StyledText;

const SECONDS: &str = "%Y-%m-%d %H:%M:%S";
const MICROSECONDS: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A timestamp that can be formatted as text.
pub trait Timestamp {
    /// Format this timestamp.
    fn to_text(&self) -> String;
}

impl Timestamp for NaiveDateTime {
    fn to_text(&self) -> String {
        let pattern = if self.nanosecond() / 1_000 == 0 {
            SECONDS
        } else {
            MICROSECONDS
        };
        self.format(pattern).to_string()
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn to_text(&self) -> String {
        let mut s = self.naive_local().to_text();
        s.push_str(&self.format("%:z").to_string());
        s
    }
}

/// A formatter for timestamps in one color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateFormat {
    text: StyledText,
}

impl DateFormat {
    /// Create a new date format with the given foreground.
    pub fn new(foreground: impl Into<Paint>) -> Result<Self, ColorError> {
        Ok(Self {
            text: StyledText::new(foreground)?,
        })
    }

    /// Create a new date format that renders through the given styled text.
    pub fn with_text(text: StyledText) -> Self {
        Self { text }
    }

    /// Format the timestamp.
    pub fn format<T: Timestamp + ?Sized>(&self, timestamp: &T) -> String {
        self.text.render(&[timestamp.to_text()])
    }
}

/// Format the timestamp in the given color.
pub fn date<T: Timestamp + ?Sized>(
    timestamp: &T,
    foreground: impl Into<Paint>,
) -> Result<String, ColorError> {
    Ok(DateFormat::new(foreground)?.format(timestamp))
}

#[cfg(test)]
mod test {
    use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

    use super::{date, DateFormat, Timestamp};
    use crate::error::ColorError;
    use crate::escape::{foreground, RESET, UNDERLINED};
    use crate::StyledText;

    fn timestamp(micro: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2023, 11, 5)?.and_hms_micro_opt(7, 8, 9, micro)
    }

    #[test]
    fn test_to_text() {
        let whole = timestamp(0).unwrap();
        let fraction = timestamp(42).unwrap();
        assert_eq!(whole.to_text(), "2023-11-05 07:08:09");
        assert_eq!(fraction.to_text(), "2023-11-05 07:08:09.000042");

        assert_eq!(
            Utc.from_utc_datetime(&whole).to_text(),
            "2023-11-05 07:08:09+00:00"
        );
        let east = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            east.from_utc_datetime(&fraction).to_text(),
            "2023-11-05 12:38:09.000042+05:30"
        );
    }

    #[test]
    fn test_format() -> Result<(), ColorError> {
        let whole = timestamp(0).unwrap();
        let fg = foreground("#336699")?;
        assert_eq!(
            date(&whole, "#336699")?,
            format!("{}2023-11-05 07:08:09{}", fg, RESET)
        );

        let underlined = DateFormat::with_text(StyledText::new(&fg)?.with_style(UNDERLINED));
        assert_eq!(
            underlined.format(&whole),
            format!("{}{}2023-11-05 07:08:09{}", fg, UNDERLINED, RESET)
        );
        assert_eq!(
            date(&whole, "#33669"),
            Err(ColorError::MalformedColorString)
        );
        Ok(())
    }
}
