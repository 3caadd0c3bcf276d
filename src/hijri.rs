//!
//! Hijri calendar.
//!
//! Uses the Umm al-Qura calendar of Saudi Arabia as published by
//! icu_calendar. Month lengths come from its tables, outside of the
//! tabulated years it falls back to the arithmetical calendar.
//!
//! Conversion goes through chrono's day count, which is the same
//! as icu's rata die. So a [HijriDate] converts losslessly to and
//! from [NaiveDate].
//!

use chrono::{Datelike, NaiveDate};
use icu_calendar::cal::hijri::UmmAlQura;
use icu_calendar::cal::Hijri;
use icu_calendar::types::RataDie;
use icu_calendar::Date;
use std::fmt::{Display, Formatter};

const CALENDAR: Hijri<UmmAlQura> = Hijri::new_umm_al_qura();

/// Transliterated month names. Index 0 is Muharram.
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// A date in the hijri calendar.
///
/// Fields are always valid, there is no way to construct a
/// HijriDate with a month outside 1..=12 or a day past the
/// end of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// New date. Returns None for an invalid month or day.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        let month = u8::try_from(month).ok()?;
        let day = u8::try_from(day).ok()?;
        let date = Date::try_new_hijri_with_calendar(year, month, day, CALENDAR).ok()?;
        Some(Self::from_icu(&date))
    }

    /// Converts a gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let rd = RataDie::new(date.num_days_from_ce() as i64);
        Self::from_icu(&Date::from_rata_die(rd, CALENDAR))
    }

    /// Converts to a gregorian date.
    ///
    /// Returns None if the result is outside the range chrono supports.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let date = Date::try_new_hijri_with_calendar(
            self.year,
            u8::try_from(self.month).ok()?,
            u8::try_from(self.day).ok()?,
            CALENDAR,
        )
        .ok()?;
        i32::try_from(date.to_rata_die().to_i64_date())
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    fn from_icu(date: &Date<Hijri<UmmAlQura>>) -> Self {
        Self {
            year: date.year().extended_year(),
            month: date.month().ordinal as u32,
            day: date.day_of_month().0 as u32,
        }
    }

    /// Year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month starting with 1.
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month starting with 0.
    #[inline]
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    /// Day of month starting with 1.
    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Length of this dates month.
    #[inline]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Transliterated name of this dates month.
    #[inline]
    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTH_NAMES[self.month0() as usize]
    }

    /// Same date with another day of month.
    /// The day is clamped to the length of the month.
    pub fn with_day_clamped(&self, day: u32) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: day.clamp(1, self.days_in_month().max(1)),
        }
    }

    /// Same day one month earlier. Rolls back the year after Muharram.
    /// The day is clamped to the length of the new month.
    pub fn prev_month(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self {
            year,
            month,
            day: self.day.clamp(1, days_in_month(year, month).max(1)),
        }
    }

    /// Same day one month later. Rolls over the year after Dhu al-Hijjah.
    /// The day is clamped to the length of the new month.
    pub fn next_month(&self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self {
            year,
            month,
            day: self.day.clamp(1, days_in_month(year, month).max(1)),
        }
    }

    /// Move by whole years. Used for the default date bounds.
    /// A 30th day becomes the 29th if the month is short that year.
    pub fn add_years(&self, n: i32) -> Self {
        let year = self.year + n;
        Self {
            year,
            month: self.month,
            day: self.day.clamp(1, days_in_month(year, self.month).max(1)),
        }
    }
}

impl Display for HijriDate {
    /// Zero padded `iYYYY-iMM-iDD`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Month length, either 29 or 30 days.
///
/// Month starts with 1. Invalid months and years that
/// can't be represented return 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    u8::try_from(month)
        .ok()
        .and_then(|month| Date::try_new_hijri_with_calendar(year, month, 1, CALENDAR).ok())
        .map(|date| date.days_in_month() as u32)
        .unwrap_or(0)
}
