use crate::calendar::CalendarMode;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors when reading date keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Not a `YYYY-M` key for the given calendar.
    InvalidYearMonth(CalendarMode, String),
    /// Not a `YYYY-M-D` key for the given calendar.
    InvalidDate(CalendarMode, String),
    /// Valid key, but chrono can't represent the date.
    OutOfRange(CalendarMode, String),
    /// Unknown calendar mode name.
    InvalidMode(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarError::InvalidYearMonth(mode, v) => {
                write!(
                    f,
                    "invalid year-month {:?}, expected {}",
                    v,
                    mode.year_month_pattern()
                )
            }
            CalendarError::InvalidDate(mode, v) => {
                write!(
                    f,
                    "invalid date {:?}, expected {}",
                    v,
                    mode.full_date_pattern()
                )
            }
            CalendarError::OutOfRange(mode, v) => {
                write!(f, "{} date out of range: {:?}", mode, v)
            }
            CalendarError::InvalidMode(v) => {
                write!(f, "invalid calendar mode {:?}", v)
            }
        }
    }
}

impl Error for CalendarError {}
