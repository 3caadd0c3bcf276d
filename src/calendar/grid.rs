use crate::calendar::{fields, CalendarMode};
use chrono::NaiveDate;
use std::slice;

/// Number of slots in a month grid. 6 weeks of 7 days.
pub const GRID_LEN: usize = 42;

/// One visible day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayCell {
    /// Day of month in the calendar the grid was built for.
    pub label: String,
    /// The day.
    pub date: NaiveDate,
    /// Belongs to the displayed month. False for the padding
    /// days of the previous/next month.
    pub current_month: bool,
}

impl DayCell {
    fn new(mode: CalendarMode, date: NaiveDate, current_month: bool) -> Self {
        Self {
            label: fields::day(mode, date).to_string(),
            date,
            current_month,
        }
    }
}

/// The day grid for one month.
///
/// Always [GRID_LEN] slots, sunday first, row by row.
/// Slots are None where no day is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: Vec<Option<DayCell>>,
}

impl Default for MonthGrid {
    fn default() -> Self {
        Self {
            cells: vec![None; GRID_LEN],
        }
    }
}

impl MonthGrid {
    /// All slots.
    #[inline]
    pub fn cells(&self) -> &[Option<DayCell>] {
        &self.cells
    }

    /// Always [GRID_LEN].
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|v| v.is_none())
    }

    /// Slot at the index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&DayCell> {
        self.cells.get(idx).and_then(|v| v.as_ref())
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Option<DayCell>> {
        self.cells.iter()
    }

    /// Rows of 7 slots.
    #[inline]
    pub fn weeks(&self) -> slice::Chunks<'_, Option<DayCell>> {
        self.cells.chunks(7)
    }

    /// Index of the slot showing the date.
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.cells
            .iter()
            .position(|v| v.as_ref().map(|v| v.date) == Some(date))
    }

    /// Slots before the first day of the displayed month.
    pub fn leading(&self) -> usize {
        self.cells
            .iter()
            .take_while(|v| !matches!(v, Some(c) if c.current_month))
            .count()
    }

    /// Days of the displayed month.
    pub fn current_len(&self) -> usize {
        self.cells
            .iter()
            .filter(|v| matches!(v, Some(c) if c.current_month))
            .count()
    }

    /// Slots after the last day of the displayed month.
    pub fn trailing(&self) -> usize {
        self.cells
            .iter()
            .rev()
            .take_while(|v| !matches!(v, Some(c) if c.current_month))
            .count()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a Option<DayCell>;
    type IntoIter = slice::Iter<'a, Option<DayCell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Creates the day grid for a month.
///
/// * year, month0: the month in the numbering of `mode`.
/// * days_in_month: length of that month in `mode`. Larger values
///   are cut to the real length of the month.
/// * show_adjacent: fill the leading and trailing slots with days of
///   the previous and next month. Otherwise they stay None.
///
/// An unrepresentable month gives an empty grid.
pub fn build_grid(
    mode: CalendarMode,
    year: i32,
    month0: u32,
    days_in_month: u32,
    show_adjacent: bool,
) -> MonthGrid {
    let Some(start) = fields::from_year_month0(mode, year, month0) else {
        return MonthGrid::default();
    };

    let days_in_month = days_in_month.min(fields::days_in_month(mode, start));
    let first_weekday = fields::weekday0(start) as usize;

    let mut cells = Vec::with_capacity(GRID_LEN);

    if show_adjacent {
        let prev = fields::prev_month(mode, start);
        let prev_days = fields::days_in_month(mode, prev);
        for i in 0..first_weekday as u32 {
            let day = (prev_days + i + 1).saturating_sub(first_weekday as u32);
            cells.push(Some(DayCell::new(
                mode,
                fields::set_day(mode, prev, day),
                false,
            )));
        }
    } else {
        cells.resize(first_weekday, None);
    }

    for day in 1..=days_in_month {
        cells.push(Some(DayCell::new(
            mode,
            fields::set_day(mode, start, day),
            true,
        )));
    }

    let trailing = GRID_LEN.saturating_sub(cells.len());
    if show_adjacent {
        let next = fields::next_month(mode, start);
        for day in 1..=trailing as u32 {
            cells.push(Some(DayCell::new(
                mode,
                fields::set_day(mode, next, day),
                false,
            )));
        }
    } else {
        cells.resize(cells.len() + trailing, None);
    }

    cells.truncate(GRID_LEN);

    MonthGrid { cells }
}

/// Grid for the month containing `date`.
pub fn build_grid_for(mode: CalendarMode, date: NaiveDate, show_adjacent: bool) -> MonthGrid {
    build_grid(
        mode,
        fields::year(mode, date),
        fields::month0(mode, date),
        fields::days_in_month(mode, date),
        show_adjacent,
    )
}
