//!
//! Calendar-aware date fields.
//!
//! All dates are plain [NaiveDate]s. The [CalendarMode] decides how
//! the year/month/day fields of such a date are read and how month
//! arithmetic works. Nothing here has state.
//!

use crate::calendar::CalendarMode;
use crate::error::CalendarError;
use crate::hijri::{self, HijriDate};
use chrono::{Datelike, Months, NaiveDate};

/// Same day one month earlier. The day is clamped to the end of
/// the month. Rolls back the year at the start of the year.
///
/// At the very start of the supported range the date is returned
/// unchanged.
pub fn prev_month(mode: CalendarMode, date: NaiveDate) -> NaiveDate {
    match mode {
        CalendarMode::Gregorian => date.checked_sub_months(Months::new(1)).unwrap_or(date),
        CalendarMode::Hijri => HijriDate::from_gregorian(date)
            .prev_month()
            .to_gregorian()
            .unwrap_or(date),
    }
}

/// Same day one month later. The day is clamped to the end of the month.
pub fn next_month(mode: CalendarMode, date: NaiveDate) -> NaiveDate {
    match mode {
        CalendarMode::Gregorian => date.checked_add_months(Months::new(1)).unwrap_or(date),
        CalendarMode::Hijri => HijriDate::from_gregorian(date)
            .next_month()
            .to_gregorian()
            .unwrap_or(date),
    }
}

/// Year in the given calendar.
pub fn year(mode: CalendarMode, date: NaiveDate) -> i32 {
    match mode {
        CalendarMode::Gregorian => date.year(),
        CalendarMode::Hijri => HijriDate::from_gregorian(date).year(),
    }
}

/// Month starting with 0.
pub fn month0(mode: CalendarMode, date: NaiveDate) -> u32 {
    match mode {
        CalendarMode::Gregorian => date.month0(),
        CalendarMode::Hijri => HijriDate::from_gregorian(date).month0(),
    }
}

/// Day of month starting with 1.
pub fn day(mode: CalendarMode, date: NaiveDate) -> u32 {
    match mode {
        CalendarMode::Gregorian => date.day(),
        CalendarMode::Hijri => HijriDate::from_gregorian(date).day(),
    }
}

/// (year, month0) in the given calendar. Compares at month granularity.
#[inline]
pub fn month_key(mode: CalendarMode, date: NaiveDate) -> (i32, u32) {
    (year(mode, date), month0(mode, date))
}

/// Number of days in the month of the date.
pub fn days_in_month(mode: CalendarMode, date: NaiveDate) -> u32 {
    match mode {
        CalendarMode::Gregorian => gregorian_days_in_month(date.year(), date.month()),
        CalendarMode::Hijri => HijriDate::from_gregorian(date).days_in_month(),
    }
}

/// Gregorian month length. Month starts with 1, invalid months return 0.
pub fn gregorian_days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 0,
    }
}

/// Same month with another day-of-month.
/// The day is clamped to 1..=days_in_month.
pub fn set_day(mode: CalendarMode, date: NaiveDate, day: u32) -> NaiveDate {
    match mode {
        CalendarMode::Gregorian => {
            let day = day.clamp(1, gregorian_days_in_month(date.year(), date.month()));
            date.with_day(day).unwrap_or(date)
        }
        CalendarMode::Hijri => HijriDate::from_gregorian(date)
            .with_day_clamped(day)
            .to_gregorian()
            .unwrap_or(date),
    }
}

/// First day of the month.
#[inline]
pub fn first_of_month(mode: CalendarMode, date: NaiveDate) -> NaiveDate {
    set_day(mode, date, 1)
}

/// First day of the given month.
///
/// Returns None for an invalid month or if chrono can't
/// represent the date.
pub fn from_year_month0(mode: CalendarMode, year: i32, month0: u32) -> Option<NaiveDate> {
    match mode {
        CalendarMode::Gregorian => NaiveDate::from_ymd_opt(year, month0 + 1, 1),
        CalendarMode::Hijri => HijriDate::from_ymd_opt(year, month0 + 1, 1)?.to_gregorian(),
    }
}

/// Weekday with sunday == 0.
#[inline]
pub fn weekday0(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Full-date key `YYYY-M-D` or `iYYYY-iM-iD`. Month and day are not padded.
pub fn format_date_key(mode: CalendarMode, date: NaiveDate) -> String {
    match mode {
        CalendarMode::Gregorian => {
            format!("{:04}-{}-{}", date.year(), date.month(), date.day())
        }
        CalendarMode::Hijri => {
            let h = HijriDate::from_gregorian(date);
            format!("{:04}-{}-{}", h.year(), h.month(), h.day())
        }
    }
}

/// Year-month key `YYYY-M` or `iYYYY-iM`.
pub fn format_year_month_key(mode: CalendarMode, date: NaiveDate) -> String {
    format!("{:04}-{}", year(mode, date), month0(mode, date) + 1)
}

/// Gregorian date as `YYYY-MM-DD`.
pub fn format_gregorian(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Hijri date as `iYYYY-iMM-iDD`.
pub fn format_hijri(date: NaiveDate) -> String {
    HijriDate::from_gregorian(date).to_string()
}

/// Month title, e.g. `April 2024` or `Shawwal 1445`.
///
/// Gregorian month names are localized, the hijri names are always
/// the transliterated ones.
pub fn format_title(mode: CalendarMode, date: NaiveDate, loc: chrono::Locale) -> String {
    match mode {
        CalendarMode::Gregorian => date.format_localized("%B %Y", loc).to_string(),
        CalendarMode::Hijri => {
            let h = HijriDate::from_gregorian(date);
            format!("{} {}", h.month_name(), h.year())
        }
    }
}

/// Reads a year-month key. Returns the first day of that month.
pub fn parse_year_month(mode: CalendarMode, s: &str) -> Result<NaiveDate, CalendarError> {
    let Some([y, m]) = split_key::<2>(s) else {
        return Err(CalendarError::InvalidYearMonth(mode, s.to_string()));
    };
    if !(1..=12).contains(&m) {
        return Err(CalendarError::InvalidYearMonth(mode, s.to_string()));
    }
    from_year_month0(mode, y, (m - 1) as u32)
        .ok_or_else(|| CalendarError::OutOfRange(mode, s.to_string()))
}

/// Reads a full-date key.
pub fn parse_date(mode: CalendarMode, s: &str) -> Result<NaiveDate, CalendarError> {
    let Some([y, m, d]) = split_key::<3>(s) else {
        return Err(CalendarError::InvalidDate(mode, s.to_string()));
    };
    if !(1..=12).contains(&m) {
        return Err(CalendarError::InvalidDate(mode, s.to_string()));
    }
    let (m, d) = (m as u32, d as u32);
    let max_day = match mode {
        CalendarMode::Gregorian => gregorian_days_in_month(y, m),
        CalendarMode::Hijri => hijri::days_in_month(y, m),
    };
    if d < 1 || d > max_day {
        return Err(CalendarError::InvalidDate(mode, s.to_string()));
    }
    let date = match mode {
        CalendarMode::Gregorian => NaiveDate::from_ymd_opt(y, m, d),
        CalendarMode::Hijri => HijriDate::from_ymd_opt(y, m, d).and_then(|v| v.to_gregorian()),
    };
    date.ok_or_else(|| CalendarError::OutOfRange(mode, s.to_string()))
}

/// Splits `N` dash separated integers. Month and day must not be negative.
fn split_key<const N: usize>(s: &str) -> Option<[i32; N]> {
    let mut res = [0; N];
    let mut parts = s.trim().split('-');
    for (i, v) in res.iter_mut().enumerate() {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
        *v = part.parse().ok()?;
        if i > 0 && *v < 1 {
            return None;
        }
    }
    if parts.next().is_some() {
        return None;
    }
    Some(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_key() {
        assert_eq!(split_key::<2>("2024-4"), Some([2024, 4]));
        assert_eq!(split_key::<2>(" 2024-04 "), Some([2024, 4]));
        assert_eq!(split_key::<2>("2024-4-1"), None);
        assert_eq!(split_key::<3>("2024-4"), None);
        assert_eq!(split_key::<2>("2024-x"), None);
        assert_eq!(split_key::<2>("2024--4"), None);
        assert_eq!(split_key::<2>("2024-0"), None);
    }
}
