use crate::calendar::{fields, CalendarMode};
use crate::error::CalendarError;

/// Construction time options for [DualCalendarState](crate::calendar::DualCalendarState).
///
/// All date keys are read in the numbering of `calendar_mode`.
///
/// ```rust
/// use rat_dual_calendar::calendar::{CalendarConfig, CalendarMode};
///
/// let config = CalendarConfig::new()
///     .calendar_mode(CalendarMode::Hijri)
///     .min_date("1440-1")
///     .current_year_month("1445-9");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Initial date system.
    pub calendar_mode: CalendarMode,
    /// Show the padding days of the previous and next month.
    pub show_adjacent_months: bool,
    /// Allow navigation to and selection of days after today.
    pub allow_future_dates: bool,
    /// Lower bound as `YYYY-M`. Defaults to 1900-1 or 1400-1.
    pub min_date: Option<String>,
    /// Upper bound as `YYYY-M`. Defaults to ten years from today.
    pub max_date: Option<String>,
    /// Selected day as `YYYY-M-D`.
    pub initial_selected_date: Option<String>,
    /// Displayed month as `YYYY-M`. Wins over initial_selected_date.
    pub current_year_month: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_mode: Default::default(),
            show_adjacent_months: true,
            allow_future_dates: true,
            min_date: None,
            max_date: None,
            initial_selected_date: None,
            current_year_month: None,
        }
    }
}

impl CalendarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn calendar_mode(mut self, mode: CalendarMode) -> Self {
        self.calendar_mode = mode;
        self
    }

    #[inline]
    pub fn show_adjacent_months(mut self, show: bool) -> Self {
        self.show_adjacent_months = show;
        self
    }

    #[inline]
    pub fn allow_future_dates(mut self, allow: bool) -> Self {
        self.allow_future_dates = allow;
        self
    }

    #[inline]
    pub fn min_date(mut self, year_month: impl Into<String>) -> Self {
        self.min_date = Some(year_month.into());
        self
    }

    #[inline]
    pub fn max_date(mut self, year_month: impl Into<String>) -> Self {
        self.max_date = Some(year_month.into());
        self
    }

    #[inline]
    pub fn initial_selected_date(mut self, date: impl Into<String>) -> Self {
        self.initial_selected_date = Some(date.into());
        self
    }

    #[inline]
    pub fn current_year_month(mut self, year_month: impl Into<String>) -> Self {
        self.current_year_month = Some(year_month.into());
        self
    }

    /// Checks all the date keys.
    ///
    /// The calendar itself never fails on a bad key, it logs a warning
    /// and uses the default instead. Use this if you want to reject
    /// such a configuration up front.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let mode = self.calendar_mode;
        for year_month in [&self.min_date, &self.max_date, &self.current_year_month]
            .into_iter()
            .flatten()
        {
            fields::parse_year_month(mode, year_month)?;
        }
        if let Some(date) = &self.initial_selected_date {
            fields::parse_date(mode, date)?;
        }
        Ok(())
    }
}
