//!
//! Month calendar with two date systems.
//!
//! [DualCalendar] renders one month in either the gregorian or
//! the hijri calendar. [DualCalendarState] keeps the displayed month,
//! the selected day and the active [CalendarMode] and does all the
//! event-handling.
//!
//! The building blocks are usable on their own:
//! * [fields] maps calendar-aware month arithmetic onto chrono dates.
//! * [build_grid] creates the 6x7 day grid for one month.
//! * [weekday_labels] gives localized weekday names starting with sunday.
//!

use crate::error::CalendarError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod config;
mod dual_calendar;
pub(crate) mod event;
pub mod fields;
mod grid;
mod header;
mod state;
mod style;
mod today;
mod weekdays;

pub use config::*;
pub use dual_calendar::*;
pub use grid::*;
pub use header::*;
pub use state::*;
pub use style::*;
pub use today::*;
pub use weekdays::*;

/// The date system used for display, navigation and date keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarMode {
    /// Solar calendar.
    #[default]
    Gregorian,
    /// Islamic lunar calendar.
    Hijri,
}

impl CalendarMode {
    /// The other one.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            CalendarMode::Gregorian => CalendarMode::Hijri,
            CalendarMode::Hijri => CalendarMode::Gregorian,
        }
    }

    #[inline]
    pub fn is_hijri(self) -> bool {
        self == CalendarMode::Hijri
    }

    /// Pattern of a full-date key. Only used for messages,
    /// parsing is done by [fields::parse_date].
    pub fn full_date_pattern(self) -> &'static str {
        match self {
            CalendarMode::Gregorian => "YYYY-M-D",
            CalendarMode::Hijri => "iYYYY-iM-iD",
        }
    }

    /// Pattern of a year-month key.
    pub fn year_month_pattern(self) -> &'static str {
        match self {
            CalendarMode::Gregorian => "YYYY-M",
            CalendarMode::Hijri => "iYYYY-iM",
        }
    }

    /// Pattern of the month title.
    pub fn title_pattern(self) -> &'static str {
        match self {
            CalendarMode::Gregorian => "MMMM YYYY",
            CalendarMode::Hijri => "iMMMM iYYYY",
        }
    }
}

impl Display for CalendarMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarMode::Gregorian => write!(f, "gregorian"),
            CalendarMode::Hijri => write!(f, "hijri"),
        }
    }
}

impl FromStr for CalendarMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarMode::Gregorian),
            "hijri" => Ok(CalendarMode::Hijri),
            _ => Err(CalendarError::InvalidMode(s.to_string())),
        }
    }
}
