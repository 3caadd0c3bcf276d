use chrono::{Local, NaiveDate};
use std::fmt::Debug;

/// Source for the current date.
///
/// The calendar asks this whenever it needs today: for the default
/// bounds, the future-date restriction and the today highlight.
pub trait Today: Debug {
    fn today(&self) -> NaiveDate;
}

/// Today from the local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalToday;

impl Today for LocalToday {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedToday(pub NaiveDate);

impl Today for FixedToday {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
