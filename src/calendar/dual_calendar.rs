use crate::calendar::style::DualCalendarStyle;
use crate::calendar::{DayCell, DefaultHeader, DualCalendarState, RenderHeader, GRID_LEN};
use crate::util::{block_size, revert_style};
use rat_focus::HasFocus;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::cmp::max;

/// Renders one month of a [DualCalendarState].
///
/// Header row, weekday names and a fixed grid of 6 weeks.
///
/// ```rust ignore
/// DualCalendar::new()
///     .styles(THEME.dual_calendar_style())
///     .locale(Locale::en_US)
///     .render(area, frame.buffer_mut(), &mut state.calendar);
/// ```
#[derive(Debug, Clone)]
pub struct DualCalendar<'a> {
    /// Base style.
    style: Style,
    header_style: Option<Style>,
    header_text_style: Option<Style>,
    grid_style: Option<Style>,
    day_name_style: Option<Style>,
    day_style: Option<Style>,
    day_text_style: Option<Style>,
    today_style: Option<Style>,
    today_text_style: Option<Style>,
    select_style: Option<Style>,
    select_text_style: Option<Style>,
    non_current_style: Option<Style>,
    focus_style: Option<Style>,

    /// Show weekday names above the days.
    show_weekdays: bool,
    /// Replaces the default header.
    header: Option<&'a dyn RenderHeader>,

    block: Option<Block<'a>>,

    /// Locale for the gregorian month-names and the day-names.
    loc: chrono::Locale,
}

impl Default for DualCalendar<'_> {
    fn default() -> Self {
        Self {
            style: Default::default(),
            header_style: Default::default(),
            header_text_style: Default::default(),
            grid_style: Default::default(),
            day_name_style: Default::default(),
            day_style: Default::default(),
            day_text_style: Default::default(),
            today_style: Default::default(),
            today_text_style: Default::default(),
            select_style: Default::default(),
            select_text_style: Default::default(),
            non_current_style: Default::default(),
            focus_style: Default::default(),
            show_weekdays: true,
            header: None,
            block: None,
            loc: Default::default(),
        }
    }
}

impl<'a> DualCalendar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale for month-names, day-names.
    #[inline]
    pub fn locale(mut self, loc: chrono::Locale) -> Self {
        self.loc = loc;
        self
    }

    /// Show weekday titles.
    #[inline]
    pub fn show_weekdays(mut self, show: bool) -> Self {
        self.show_weekdays = show;
        self
    }

    /// Replace the default header.
    #[inline]
    pub fn header(mut self, header: &'a dyn RenderHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Set the composite style.
    #[inline]
    pub fn styles(mut self, s: DualCalendarStyle) -> Self {
        self.style = s.style;
        if s.header.is_some() {
            self.header_style = s.header;
        }
        if s.header_text.is_some() {
            self.header_text_style = s.header_text;
        }
        if s.grid.is_some() {
            self.grid_style = s.grid;
        }
        if s.day_name.is_some() {
            self.day_name_style = s.day_name;
        }
        if s.day.is_some() {
            self.day_style = s.day;
        }
        if s.day_text.is_some() {
            self.day_text_style = s.day_text;
        }
        if s.today.is_some() {
            self.today_style = s.today;
        }
        if s.today_text.is_some() {
            self.today_text_style = s.today_text;
        }
        if s.select.is_some() {
            self.select_style = s.select;
        }
        if s.select_text.is_some() {
            self.select_text_style = s.select_text;
        }
        if s.non_current.is_some() {
            self.non_current_style = s.non_current;
        }
        if s.focus.is_some() {
            self.focus_style = s.focus;
        }
        if s.block.is_some() {
            self.block = s.block;
        }
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Header row.
    #[inline]
    pub fn header_style(mut self, style: impl Into<Style>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    /// Title and arrows.
    #[inline]
    pub fn header_text_style(mut self, style: impl Into<Style>) -> Self {
        self.header_text_style = Some(style.into());
        self
    }

    /// Weekday names and days.
    #[inline]
    pub fn grid_style(mut self, style: impl Into<Style>) -> Self {
        self.grid_style = Some(style.into());
        self
    }

    /// Weekday names.
    #[inline]
    pub fn day_name_style(mut self, style: impl Into<Style>) -> Self {
        self.day_name_style = Some(style.into());
        self
    }

    /// Day cell.
    #[inline]
    pub fn day_style(mut self, style: impl Into<Style>) -> Self {
        self.day_style = Some(style.into());
        self
    }

    /// Day label.
    #[inline]
    pub fn day_text_style(mut self, style: impl Into<Style>) -> Self {
        self.day_text_style = Some(style.into());
        self
    }

    /// Today's cell.
    #[inline]
    pub fn today_style(mut self, style: impl Into<Style>) -> Self {
        self.today_style = Some(style.into());
        self
    }

    /// Today's label.
    #[inline]
    pub fn today_text_style(mut self, style: impl Into<Style>) -> Self {
        self.today_text_style = Some(style.into());
        self
    }

    /// Selected cell.
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.select_style = Some(style.into());
        self
    }

    /// Selected label.
    #[inline]
    pub fn select_text_style(mut self, style: impl Into<Style>) -> Self {
        self.select_text_style = Some(style.into());
        self
    }

    /// Padding days and days that can't be selected.
    #[inline]
    pub fn non_current_style(mut self, style: impl Into<Style>) -> Self {
        self.non_current_style = Some(style.into());
        self
    }

    /// Selected day when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Block
    #[inline]
    pub fn block(mut self, b: Block<'a>) -> Self {
        self.block = Some(b);
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Inherent width of the widget.
    #[inline]
    pub fn width(&self) -> u16 {
        7 * 4 + block_size(&self.block).width
    }

    /// Inherent height of the widget.
    #[inline]
    pub fn height(&self) -> u16 {
        let h = self.header.map(|v| v.height()).unwrap_or(1);
        let w = if self.show_weekdays { 1 } else { 0 };
        h + w + 6 + block_size(&self.block).height
    }
}

impl StatefulWidget for DualCalendar<'_> {
    type State = DualCalendarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(
    widget: &DualCalendar<'_>,
    area: Rect,
    buf: &mut Buffer,
    state: &mut DualCalendarState,
) {
    state.area = area;

    let block = widget
        .block
        .clone()
        .unwrap_or_else(|| Block::new().style(widget.style));
    state.inner = block.inner(area);
    block.render(area, buf);

    let inner = state.inner;
    let mut y = inner.y;

    // header
    let header: &dyn RenderHeader = widget.header.unwrap_or(&DefaultHeader);
    state.area_header = Rect::new(inner.x, y, inner.width, header.height()).intersection(inner);
    let mut data = state.header_data(widget.loc);
    data.style = widget.header_style.unwrap_or(widget.style);
    data.text_style = widget.header_text_style.unwrap_or(data.style);
    state.header_areas = header.render(&data, state.area_header, buf);
    y = y.saturating_add(state.area_header.height);

    let cell_width = max(3, inner.width / 7);
    let grid_style = widget.grid_style.unwrap_or(widget.style);

    // week days
    if widget.show_weekdays {
        state.area_weekdays = Rect::new(inner.x, y, cell_width * 7, 1).intersection(inner);
        let day_name_style = grid_style.patch(widget.day_name_style.unwrap_or_default());
        buf.set_style(state.area_weekdays, day_name_style);

        let labels = state.weekdays.labels(widget.loc).clone();
        for (i, label) in labels.iter().enumerate() {
            let cell_area =
                Rect::new(inner.x + i as u16 * cell_width, y, cell_width, 1).intersection(inner);
            Line::from(label.as_str())
                .alignment(Alignment::Center)
                .style(day_name_style)
                .render(cell_area, buf);
        }
        y = y.saturating_add(1);
    } else {
        state.area_weekdays = Rect::new(inner.x, y, inner.width, 0);
    }

    // days
    state.area_grid = Rect::new(inner.x, y, cell_width * 7, 6).intersection(inner);
    buf.set_style(state.area_grid, grid_style);

    let grid = state.grid().clone();
    for idx in 0..GRID_LEN {
        let row = (idx / 7) as u16;
        let col = (idx % 7) as u16;
        let cell_area = Rect::new(
            inner.x + col * cell_width,
            y.saturating_add(row),
            cell_width,
            1,
        )
        .intersection(inner);
        state.area_days[idx] = cell_area;

        let base = grid_style.patch(widget.day_style.unwrap_or_default());
        if let Some(cell) = grid.get(idx) {
            let (cell_style, text_style) = calc_day_style(widget, state, cell, base);
            buf.set_style(cell_area, cell_style);
            Line::from(cell.label.as_str())
                .alignment(Alignment::Center)
                .style(text_style)
                .render(cell_area, buf);
        } else {
            buf.set_style(cell_area, base);
        }
    }
}

/// Style for the cell and the label.
fn calc_day_style(
    widget: &DualCalendar<'_>,
    state: &DualCalendarState,
    cell: &DayCell,
    base: Style,
) -> (Style, Style) {
    let mut cell_style = base;
    let mut text_style = base.patch(widget.day_text_style.unwrap_or_default());

    let selectable = state.is_selectable(cell.date);
    let non_current = widget.non_current_style.unwrap_or(Style::new().dark_gray());
    if !selectable {
        return (cell_style, text_style.patch(non_current));
    }

    if state.is_today(cell.date) {
        let today_style = widget.today_style.unwrap_or(Style::new().underlined());
        cell_style = cell_style.patch(today_style);
        text_style = text_style
            .patch(today_style)
            .patch(widget.today_text_style.unwrap_or_default());
    }
    if state.is_selected(cell.date) {
        let select_style = widget.select_style.unwrap_or(revert_style(widget.style));
        cell_style = cell_style.patch(select_style);
        text_style = text_style
            .patch(select_style)
            .patch(widget.select_text_style.unwrap_or_default());
        if state.is_focused() {
            let focus_style = widget.focus_style.unwrap_or(revert_style(widget.style));
            cell_style = cell_style.patch(focus_style);
            text_style = text_style.patch(focus_style);
        }
    }
    if !cell.current_month {
        text_style = text_style.patch(non_current);
    }

    (cell_style, text_style)
}
