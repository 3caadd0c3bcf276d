use crate::_private::NonExhaustive;
use crate::calendar::event::CalOutcome;
use crate::calendar::{
    build_grid_for, fields, CalendarConfig, CalendarMode, DayCell, HeaderAreas, HeaderData,
    LocalToday, MonthGrid, Today, WeekdayCache, GRID_LEN,
};
use crate::error::CalendarError;
use crate::hijri::HijriDate;
use chrono::{Days, Months, NaiveDate};
use log::{debug, warn};
use rat_event::util::item_at;
use rat_event::{ct_event, flow, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::layout::Rect;
use ratatui::style::Style;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Payload of a selection change.
///
/// All fields are empty when the selection has been cleared.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DateChange {
    /// Full-date key in the active calendar. `YYYY-M-D` or `iYYYY-iM-iD`.
    pub calendar_date: String,
    /// `YYYY-MM-DD`
    pub gregorian_date: String,
    /// `iYYYY-iMM-iDD`
    pub hijri_date: String,
    /// The selected day.
    pub date: Option<NaiveDate>,
}

impl DateChange {
    /// Selection cleared.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Selection of the day in the given calendar.
    pub fn selected(mode: CalendarMode, date: NaiveDate) -> Self {
        Self {
            calendar_date: fields::format_date_key(mode, date),
            gregorian_date: fields::format_gregorian(date),
            hijri_date: fields::format_hijri(date),
            date: Some(date),
        }
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.date.is_none()
    }
}

/// State & event-handling.
///
/// Holds the displayed month, the selected day and the active
/// calendar mode. The min/max bounds are derived from the configured
/// keys and the mode and are recomputed whenever one of them changes.
///
/// Every selection change, including the implicit clear when the
/// mode is toggled, is reported via [on_date_change](Self::on_date_change)
/// and is available as [last_change](Self::last_change).
pub struct DualCalendarState {
    /// Total area.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Area inside the border.
    /// __readonly__. renewed for each render.
    pub inner: Rect,
    /// Header row.
    /// __readonly__. renewed for each render.
    pub area_header: Rect,
    /// Click targets of the header.
    /// __readonly__. renewed for each render.
    pub header_areas: HeaderAreas,
    /// Weekday names.
    /// __readonly__. renewed for each render.
    pub area_weekdays: Rect,
    /// Area of all day cells.
    /// __readonly__. renewed for each render.
    pub area_grid: Rect,
    /// Area for each grid slot.
    /// __readonly__. renewed for each render.
    pub area_days: [Rect; GRID_LEN],

    /// Weekday names for the render locale.
    /// __read+write__
    pub weekdays: WeekdayCache,

    mode: CalendarMode,
    /// Some day of the displayed month.
    displayed: NaiveDate,
    selected: Option<NaiveDate>,

    min_key: Option<String>,
    max_key: Option<String>,
    min: NaiveDate,
    max: NaiveDate,

    show_adjacent: bool,
    allow_future: bool,

    grid: MonthGrid,

    today: Rc<dyn Today>,
    last_change: Option<DateChange>,
    on_change: Option<Box<dyn FnMut(&DateChange)>>,

    /// Focus
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl Debug for DualCalendarState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DualCalendarState")
            .field("area", &self.area)
            .field("inner", &self.inner)
            .field("area_header", &self.area_header)
            .field("header_areas", &self.header_areas)
            .field("area_weekdays", &self.area_weekdays)
            .field("area_grid", &self.area_grid)
            .field("mode", &self.mode)
            .field("displayed", &self.displayed)
            .field("selected", &self.selected)
            .field("min_key", &self.min_key)
            .field("max_key", &self.max_key)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("show_adjacent", &self.show_adjacent)
            .field("allow_future", &self.allow_future)
            .field("today", &self.today)
            .field("last_change", &self.last_change)
            .field("on_change", &self.on_change.is_some())
            .field("focus", &self.focus)
            .finish()
    }
}

impl Default for DualCalendarState {
    fn default() -> Self {
        Self::new(&CalendarConfig::default())
    }
}

impl DualCalendarState {
    /// New state using the local clock for today.
    pub fn new(config: &CalendarConfig) -> Self {
        Self::with_today(config, LocalToday)
    }

    /// New state with a focus name.
    pub fn named(name: &str, config: &CalendarConfig) -> Self {
        let mut z = Self::new(config);
        z.focus = FocusFlag::new().with_name(name);
        z
    }

    /// New state with an explicit source for today.
    ///
    /// Date keys in the config that can't be read are logged and
    /// replaced with the defaults.
    pub fn with_today(config: &CalendarConfig, today: impl Today + 'static) -> Self {
        let today: Rc<dyn Today> = Rc::new(today);
        let mode = config.calendar_mode;
        let now = today.today();

        let mut z = Self {
            area: Default::default(),
            inner: Default::default(),
            area_header: Default::default(),
            header_areas: Default::default(),
            area_weekdays: Default::default(),
            area_grid: Default::default(),
            area_days: [Rect::default(); GRID_LEN],
            weekdays: Default::default(),
            mode,
            displayed: now,
            selected: None,
            min_key: config.min_date.clone(),
            max_key: config.max_date.clone(),
            min: now,
            max: now,
            show_adjacent: config.show_adjacent_months,
            allow_future: config.allow_future_dates,
            grid: Default::default(),
            today,
            last_change: None,
            on_change: None,
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        };
        z.update_bounds();

        z.selected = config
            .initial_selected_date
            .as_deref()
            .and_then(|v| match fields::parse_date(mode, v) {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("initial_selected_date ignored: {}", e);
                    None
                }
            });

        let displayed = config
            .current_year_month
            .as_deref()
            .and_then(|v| match fields::parse_year_month(mode, v) {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("current_year_month ignored: {}", e);
                    None
                }
            })
            .or(z.selected)
            .unwrap_or(now);
        z.displayed = z.clamp_month(displayed);

        z.rebuild();
        z
    }

    /// Replace the source for today.
    pub fn set_today(&mut self, today: impl Today + 'static) {
        self.today = Rc::new(today);
        self.update_bounds();
        self.displayed = self.clamp_month(self.displayed);
        self.rebuild();
    }

    /// Today.
    pub fn today(&self) -> NaiveDate {
        self.today.today()
    }

    /// Called for every selection change.
    /// Clearing the selection calls it with [DateChange::cleared].
    pub fn on_date_change(&mut self, f: impl FnMut(&DateChange) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    /// The last selection change.
    pub fn last_change(&self) -> Option<&DateChange> {
        self.last_change.as_ref()
    }

    /// Take the last selection change.
    pub fn take_change(&mut self) -> Option<DateChange> {
        self.last_change.take()
    }

    /// Active calendar mode.
    #[inline]
    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    /// Show the padding days of the adjacent months.
    pub fn set_show_adjacent_months(&mut self, show: bool) {
        self.show_adjacent = show;
        self.rebuild();
    }

    #[inline]
    pub fn show_adjacent_months(&self) -> bool {
        self.show_adjacent
    }

    /// Allow navigation to and selection of days after today.
    pub fn set_allow_future_dates(&mut self, allow: bool) {
        self.allow_future = allow;
    }

    #[inline]
    pub fn allow_future_dates(&self) -> bool {
        self.allow_future
    }

    /// Set the lower bound as `YYYY-M` in the numbering of the
    /// active calendar. None resets to the default.
    ///
    /// The key is kept and re-read when the mode changes.
    pub fn set_min_date(&mut self, year_month: Option<&str>) -> CalOutcome {
        self.min_key = year_month.map(|v| v.to_string());
        self.update_bounds();
        self.reclamp()
    }

    /// Set the upper bound. See [set_min_date](Self::set_min_date).
    pub fn set_max_date(&mut self, year_month: Option<&str>) -> CalOutcome {
        self.max_key = year_month.map(|v| v.to_string());
        self.update_bounds();
        self.reclamp()
    }

    /// Effective lower bound. First day of the month in the active calendar.
    #[inline]
    pub fn min_date(&self) -> NaiveDate {
        self.min
    }

    /// Effective upper bound. First day of the month in the active calendar.
    #[inline]
    pub fn max_date(&self) -> NaiveDate {
        self.max
    }

    /// A day in the displayed month.
    #[inline]
    pub fn displayed_date(&self) -> NaiveDate {
        self.displayed
    }

    /// Year of the displayed month in the active calendar.
    pub fn displayed_year(&self) -> i32 {
        fields::year(self.mode, self.displayed)
    }

    /// Displayed month starting with 0 in the active calendar.
    pub fn displayed_month0(&self) -> u32 {
        fields::month0(self.mode, self.displayed)
    }

    /// Length of the displayed month.
    pub fn days_in_month(&self) -> u32 {
        fields::days_in_month(self.mode, self.displayed)
    }

    /// Displayed month as `YYYY-M`.
    pub fn year_month_key(&self) -> String {
        fields::format_year_month_key(self.mode, self.displayed)
    }

    /// The visible day grid.
    #[inline]
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Month title.
    pub fn title(&self, loc: chrono::Locale) -> String {
        fields::format_title(self.mode, self.displayed, loc)
    }

    /// Data for rendering the header. Styles are left at default.
    pub fn header_data(&self, loc: chrono::Locale) -> HeaderData {
        HeaderData {
            title: self.title(loc),
            can_go_prev: self.can_go_prev_month(),
            can_go_next: self.can_go_next_month(),
            mode: self.mode,
            date: self.displayed,
            style: Style::default(),
            text_style: Style::default(),
        }
    }

    /// Selected day.
    #[inline]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Selected day as full-date key in the active calendar.
    pub fn selected_key(&self) -> Option<String> {
        self.selected
            .map(|v| fields::format_date_key(self.mode, v))
    }

    #[inline]
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    #[inline]
    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.today.today() == date
    }

    /// Days after today can't be selected if future dates are
    /// not allowed.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.allow_future || date <= self.today.today()
    }
}

impl DualCalendarState {
    fn key(&self, date: NaiveDate) -> (i32, u32) {
        fields::month_key(self.mode, date)
    }

    fn in_bounds(&self, date: NaiveDate) -> bool {
        let key = self.key(date);
        key >= self.key(self.min) && key <= self.key(self.max)
    }

    fn clamp_month(&self, date: NaiveDate) -> NaiveDate {
        let key = self.key(date);
        if key < self.key(self.min) {
            self.min
        } else if key > self.key(self.max) {
            self.max
        } else {
            date
        }
    }

    fn reclamp(&mut self) -> CalOutcome {
        let old = self.key(self.displayed);
        self.displayed = self.clamp_month(self.displayed);
        self.rebuild();
        if old != self.key(self.displayed) {
            CalOutcome::Changed
        } else {
            CalOutcome::Unchanged
        }
    }

    /// Default bounds are 1900-1 / 1400-1 and ten years from today.
    fn default_bounds(&self) -> (NaiveDate, NaiveDate) {
        let today = self.today.today();
        match self.mode {
            CalendarMode::Gregorian => {
                let min = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
                let max = today
                    .checked_add_months(Months::new(120))
                    .unwrap_or(NaiveDate::MAX);
                (min, fields::first_of_month(self.mode, max))
            }
            CalendarMode::Hijri => {
                let min = fields::from_year_month0(self.mode, 1400, 0).unwrap_or(NaiveDate::MIN);
                let max = HijriDate::from_gregorian(today)
                    .add_years(10)
                    .to_gregorian()
                    .unwrap_or(NaiveDate::MAX);
                (min, fields::first_of_month(self.mode, max))
            }
        }
    }

    fn parse_bound(&self, key: &Option<String>, name: &str) -> Option<NaiveDate> {
        key.as_deref()
            .and_then(|v| match fields::parse_year_month(self.mode, v) {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("{} ignored: {}", name, e);
                    None
                }
            })
    }

    fn update_bounds(&mut self) {
        let (default_min, default_max) = self.default_bounds();
        let mut min = self
            .parse_bound(&self.min_key, "min_date")
            .unwrap_or(default_min);
        let mut max = self
            .parse_bound(&self.max_key, "max_date")
            .unwrap_or(default_max);
        if self.key(min) > self.key(max) {
            warn!("min_date after max_date, swapped: {} {}", min, max);
            (min, max) = (max, min);
        }
        self.min = min;
        self.max = max;
    }

    fn rebuild(&mut self) {
        self.grid = build_grid_for(self.mode, self.displayed, self.show_adjacent);
    }

    fn emit(&mut self, change: DateChange) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&change);
        }
        self.last_change = Some(change);
    }
}

impl DualCalendarState {
    /// Previous month is not before the lower bound.
    pub fn can_go_prev_month(&self) -> bool {
        let prev = fields::prev_month(self.mode, self.displayed);
        prev != self.displayed && self.key(prev) >= self.key(self.min)
    }

    /// Next month is not after the upper bound, and not after
    /// the current month if future dates are not allowed.
    pub fn can_go_next_month(&self) -> bool {
        let next = fields::next_month(self.mode, self.displayed);
        if next == self.displayed || self.key(next) > self.key(self.max) {
            return false;
        }
        self.allow_future || self.key(next) <= self.key(self.today.today())
    }

    /// Show the previous month.
    pub fn prev_month(&mut self) -> CalOutcome {
        if !self.can_go_prev_month() {
            debug!("prev_month blocked at {}", self.year_month_key());
            return CalOutcome::Unchanged;
        }
        self.displayed = fields::prev_month(self.mode, self.displayed);
        self.rebuild();
        CalOutcome::Changed
    }

    /// Show the next month.
    pub fn next_month(&mut self) -> CalOutcome {
        if !self.can_go_next_month() {
            debug!("next_month blocked at {}", self.year_month_key());
            return CalOutcome::Unchanged;
        }
        self.displayed = fields::next_month(self.mode, self.displayed);
        self.rebuild();
        CalOutcome::Changed
    }

    /// Show the month of the date, clamped to the bounds.
    ///
    /// The future-date restriction doesn't apply here.
    pub fn move_to(&mut self, date: NaiveDate) -> CalOutcome {
        let old = self.key(self.displayed);
        self.displayed = self.clamp_month(date);
        self.rebuild();
        if old != self.key(self.displayed) {
            CalOutcome::Changed
        } else {
            CalOutcome::Unchanged
        }
    }

    /// Show the current month.
    pub fn move_to_today(&mut self) -> CalOutcome {
        self.move_to(self.today.today())
    }

    /// Show the month given as `YYYY-M` in the active calendar,
    /// clamped to the bounds.
    pub fn set_year_month(&mut self, year_month: &str) -> Result<CalOutcome, CalendarError> {
        let date = fields::parse_year_month(self.mode, year_month)?;
        Ok(self.move_to(date))
    }

    /// Switch between gregorian and hijri.
    ///
    /// Always clears the selection and reports the cleared selection.
    /// The displayed day stays the same, it's just read in the other
    /// calendar. If that falls outside the bounds of the new mode it's
    /// clamped.
    pub fn toggle_mode(&mut self) -> CalOutcome {
        self.mode = self.mode.toggle();
        debug!("calendar mode {}", self.mode);

        self.update_bounds();
        self.displayed = self.clamp_month(self.displayed);
        self.rebuild();

        self.selected = None;
        self.emit(DateChange::cleared());
        CalOutcome::Selected
    }

    /// Set the mode. Toggles if it differs from the current mode.
    pub fn set_mode(&mut self, mode: CalendarMode) -> CalOutcome {
        if self.mode != mode {
            self.toggle_mode()
        } else {
            CalOutcome::Unchanged
        }
    }

    /// Select the day. If it's already selected the selection is cleared.
    ///
    /// Selecting a day of an adjacent month shows that month.
    pub fn select_day(&mut self, cell: &DayCell) -> CalOutcome {
        if self.selected == Some(cell.date) {
            self.selected = None;
            self.emit(DateChange::cleared());
        } else {
            self.selected = Some(cell.date);
            self.emit(DateChange::selected(self.mode, cell.date));
        }

        if !cell.current_month {
            self.displayed = self.clamp_month(cell.date);
            self.rebuild();
        }

        CalOutcome::Selected
    }

    /// Select the day at the grid index. See [select_day](Self::select_day).
    ///
    /// Empty slots and days that can't be selected are ignored.
    pub fn select_cell(&mut self, idx: usize) -> CalOutcome {
        let Some(cell) = self.grid.get(idx).cloned() else {
            return CalOutcome::Unchanged;
        };
        if !self.is_selectable(cell.date) {
            return CalOutcome::Unchanged;
        }
        self.select_day(&cell)
    }

    /// Select a day and show its month. Doesn't toggle.
    ///
    /// Days outside the bounds and days that can't be selected
    /// are ignored.
    pub fn select_date(&mut self, date: NaiveDate) -> CalOutcome {
        if self.selected == Some(date) {
            return CalOutcome::Unchanged;
        }
        if !self.is_selectable(date) || !self.in_bounds(date) {
            debug!("select_date blocked {}", date);
            return CalOutcome::Unchanged;
        }

        let cell = DayCell {
            label: fields::day(self.mode, date).to_string(),
            date,
            current_month: self.key(date) == self.key(self.displayed),
        };
        self.select_day(&cell)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) -> CalOutcome {
        if self.selected.take().is_some() {
            self.emit(DateChange::cleared());
            CalOutcome::Selected
        } else {
            CalOutcome::Unchanged
        }
    }

    /// Select n days before the selection.
    /// Without selection start at the end of the displayed month.
    pub fn prev_day(&mut self, n: usize) -> CalOutcome {
        let date = if let Some(date) = self.selected {
            date.checked_sub_days(Days::new(n as u64))
        } else {
            let last = self.days_in_month();
            Some(fields::set_day(self.mode, self.displayed, last))
        };
        match date {
            Some(date) => self.select_date(date),
            None => CalOutcome::Unchanged,
        }
    }

    /// Select n days after the selection.
    /// Without selection start at the first of the displayed month.
    pub fn next_day(&mut self, n: usize) -> CalOutcome {
        let date = if let Some(date) = self.selected {
            date.checked_add_days(Days::new(n as u64))
        } else {
            Some(fields::first_of_month(self.mode, self.displayed))
        };
        match date {
            Some(date) => self.select_date(date),
            None => CalOutcome::Unchanged,
        }
    }
}

impl HasFocus for DualCalendarState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for DualCalendarState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        self.area_header = relocate_area(self.area_header, shift, clip);
        self.header_areas.prev = relocate_area(self.header_areas.prev, shift, clip);
        self.header_areas.title = relocate_area(self.header_areas.title, shift, clip);
        self.header_areas.next = relocate_area(self.header_areas.next, shift, clip);
        self.header_areas.mode = relocate_area(self.header_areas.mode, shift, clip);
        self.area_weekdays = relocate_area(self.area_weekdays, shift, clip);
        self.area_grid = relocate_area(self.area_grid, shift, clip);
        relocate_areas(&mut self.area_days, shift, clip);
    }
}

impl HandleEvent<crossterm::event::Event, Regular, CalOutcome> for DualCalendarState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> CalOutcome {
        if self.is_focused() {
            flow!(match event {
                ct_event!(keycode press PageUp) => self.prev_month(),
                ct_event!(keycode press PageDown) => self.next_month(),
                ct_event!(keycode press CONTROL-Home) => self.move_to_today(),
                ct_event!(keycode press Left) => self.prev_day(1),
                ct_event!(keycode press Right) => self.next_day(1),
                ct_event!(keycode press Up) => self.prev_day(7),
                ct_event!(keycode press Down) => self.next_day(7),
                ct_event!(keycode press Delete) => self.clear_selection(),
                ct_event!(key press 'm') => self.toggle_mode(),
                _ => CalOutcome::Continue,
            });
        }

        self.handle(event, MouseOnly)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, CalOutcome> for DualCalendarState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> CalOutcome {
        match event {
            ct_event!(mouse down Left for x, y)
                if self.header_areas.prev.contains((*x, *y).into()) =>
            {
                self.prev_month()
            }
            ct_event!(mouse down Left for x, y)
                if self.header_areas.next.contains((*x, *y).into()) =>
            {
                self.next_month()
            }
            ct_event!(mouse down Left for x, y)
                if self.header_areas.mode.contains((*x, *y).into()) =>
            {
                self.toggle_mode()
            }
            ct_event!(mouse down Left for x, y) => {
                if let Some(idx) = item_at(&self.area_days, *x, *y) {
                    self.select_cell(idx)
                } else {
                    CalOutcome::Continue
                }
            }
            ct_event!(scroll up for x, y) if self.area.contains((*x, *y).into()) => {
                self.prev_month()
            }
            ct_event!(scroll down for x, y) if self.area.contains((*x, *y).into()) => {
                self.next_month()
            }
            _ => CalOutcome::Continue,
        }
    }
}
