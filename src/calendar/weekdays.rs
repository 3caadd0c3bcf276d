use chrono::{Days, NaiveDate};

/// Short localized weekday names, sunday first.
///
/// The names depend only on the locale, not on the calendar mode.
pub fn weekday_labels(loc: chrono::Locale) -> [String; 7] {
    // 2023-10-01 is a sunday.
    let sunday = NaiveDate::from_ymd_opt(2023, 10, 1).expect("date");
    std::array::from_fn(|i| {
        (sunday + Days::new(i as u64))
            .format_localized("%a", loc)
            .to_string()
    })
}

/// Remembers the weekday names for the last locale.
#[derive(Debug, Clone, Default)]
pub struct WeekdayCache {
    cached: Option<(chrono::Locale, [String; 7])>,
}

impl WeekdayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weekday names for the locale. Recalculated only if the
    /// locale changes.
    pub fn labels(&mut self, loc: chrono::Locale) -> &[String; 7] {
        if matches!(&self.cached, Some((cached_loc, _)) if *cached_loc != loc) {
            self.cached = None;
        }
        &self
            .cached
            .get_or_insert_with(|| (loc, weekday_labels(loc)))
            .1
    }
}
