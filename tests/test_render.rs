use chrono::{Locale, NaiveDate};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_dual_calendar::calendar::{
    CalendarConfig, CalendarMode, DualCalendar, DualCalendarState, FixedToday, HeaderAreas,
    HeaderData, RenderHeader,
};
use rat_dual_calendar::event::{CalOutcome, HandleEvent, MouseOnly, Regular};
use rat_dual_calendar::reloc::RelocatableState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, StatefulWidget};
use std::cell::RefCell;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn state(config: CalendarConfig) -> DualCalendarState {
    DualCalendarState::with_today(&config, FixedToday(date(2024, 4, 10)))
}

fn row(buf: &Buffer, y: u16) -> String {
    (buf.area.x..buf.area.right())
        .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
        .collect()
}

fn render(widget: DualCalendar<'_>, state: &mut DualCalendarState) -> Buffer {
    let area = Rect::new(0, 0, 28, 8);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf, state);
    buf
}

fn click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_layout() {
    let mut s = state(CalendarConfig::new().current_year_month("2024-4"));
    let buf = render(DualCalendar::new().locale(Locale::en_US), &mut s);

    assert_eq!(s.area, Rect::new(0, 0, 28, 8));
    assert_eq!(s.area_header, Rect::new(0, 0, 28, 1));
    assert_eq!(s.area_weekdays, Rect::new(0, 1, 28, 1));
    assert_eq!(s.area_grid, Rect::new(0, 2, 28, 6));
    assert_eq!(s.area_days[0], Rect::new(0, 2, 4, 1));
    assert_eq!(s.area_days[8], Rect::new(4, 3, 4, 1));
    assert_eq!(s.area_days[41], Rect::new(24, 7, 4, 1));

    assert_eq!(s.header_areas.prev, Rect::new(0, 0, 2, 1));
    assert_eq!(s.header_areas.next, Rect::new(26, 0, 2, 1));
    assert_eq!(s.header_areas.mode, Rect::new(23, 0, 3, 1));

    assert!(row(&buf, 0).contains("April 2024"));
    assert!(row(&buf, 0).contains("[G]"));
    assert!(row(&buf, 1).contains("Sun"));
    assert!(row(&buf, 1).contains("Sat"));
    assert!(row(&buf, 2).contains("31"));
    assert!(row(&buf, 2).contains("6"));
}

#[test]
fn test_block() {
    let widget = DualCalendar::new().block(Block::bordered());
    assert_eq!(widget.width(), 30);
    assert_eq!(widget.height(), 10);

    let area = Rect::new(0, 0, 30, 10);
    let mut buf = Buffer::empty(area);
    let mut s = state(CalendarConfig::new().current_year_month("2024-4"));
    widget.render(area, &mut buf, &mut s);
    assert_eq!(s.inner, Rect::new(1, 1, 28, 8));
    assert_eq!(s.area_days[0], Rect::new(1, 3, 4, 1));
}

#[test]
fn test_hijri_header() {
    let mut s = state(
        CalendarConfig::new()
            .calendar_mode(CalendarMode::Hijri)
            .show_adjacent_months(false)
            .current_year_month("1445-10"),
    );
    let buf = render(DualCalendar::new().show_weekdays(false), &mut s);
    assert!(row(&buf, 0).contains("Shawwal 1445"));
    assert!(row(&buf, 0).contains("[H]"));
    assert_eq!(s.area_grid, Rect::new(0, 1, 28, 6));
    // first slots are empty.
    assert_eq!(row(&buf, 1).trim_start().chars().next(), Some('1'));
}

#[test]
fn test_inert_future() {
    let mut s = state(
        CalendarConfig::new()
            .allow_future_dates(false)
            .current_year_month("2024-4"),
    );
    let buf = render(DualCalendar::new(), &mut s);

    // no next arrow
    assert_eq!(s.header_areas.next, Rect::default());
    assert!(!row(&buf, 0).contains('›'));

    let idx = s.grid().position(date(2024, 4, 11)).expect("visible");
    let area = s.area_days[idx];
    let cell = buf.cell((area.x + 1, area.y)).expect("cell");
    assert_eq!(cell.fg, Color::DarkGray);

    let idx = s.grid().position(date(2024, 4, 9)).expect("visible");
    let area = s.area_days[idx];
    let cell = buf.cell((area.x + 1, area.y)).expect("cell");
    assert_ne!(cell.fg, Color::DarkGray);
}

#[test]
fn test_select_style() {
    let mut s = state(
        CalendarConfig::new()
            .current_year_month("2024-4")
            .initial_selected_date("2024-4-15"),
    );
    let buf = render(
        DualCalendar::new().select_style(ratatui::style::Style::new().fg(Color::Red)),
        &mut s,
    );
    let idx = s.grid().position(date(2024, 4, 15)).expect("visible");
    let area = s.area_days[idx];
    assert_eq!(buf.cell((area.x, area.y)).expect("cell").fg, Color::Red);
}

#[test]
fn test_select_adjacent_style() {
    let mut s = state(
        CalendarConfig::new()
            .current_year_month("2024-4")
            .initial_selected_date("2024-3-31"),
    );
    let select = ratatui::style::Style::new().fg(Color::Red).bg(Color::Blue);
    let buf = render(DualCalendar::new().select_style(select), &mut s);
    assert_eq!(s.selected(), Some(date(2024, 3, 31)));
    let idx = s.grid().position(date(2024, 3, 31)).expect("visible");
    assert_eq!(idx, 0);

    // padding day label stays dimmed, the cell is still marked.
    let area = s.area_days[idx];
    let label = buf.cell((area.x + 1, area.y)).expect("cell");
    assert_eq!(label.symbol(), "3");
    assert_eq!(label.fg, Color::DarkGray);
    assert_eq!(label.bg, Color::Blue);

    // with a custom style.
    let buf = render(
        DualCalendar::new()
            .select_style(ratatui::style::Style::new().fg(Color::Red))
            .non_current_style(ratatui::style::Style::new().fg(Color::Gray)),
        &mut s,
    );
    let label = buf.cell((area.x + 1, area.y)).expect("cell");
    assert_eq!(label.fg, Color::Gray);
}

#[test]
fn test_mouse_select() {
    let mut s = state(CalendarConfig::new().current_year_month("2024-4"));
    render(DualCalendar::new(), &mut s);

    let idx = s.grid().position(date(2024, 4, 15)).expect("visible");
    let area = s.area_days[idx];
    let r = s.handle(&click(area.x + 1, area.y), MouseOnly);
    assert_eq!(r, CalOutcome::Selected);
    assert_eq!(s.selected(), Some(date(2024, 4, 15)));
    assert_eq!(
        s.last_change().expect("change").hijri_date,
        "1445-10-06".to_string()
    );

    // outside everything
    let r = s.handle(&click(100, 100), MouseOnly);
    assert_eq!(r, CalOutcome::Continue);
}

#[test]
fn test_mouse_header() {
    let mut s = state(CalendarConfig::new().current_year_month("2024-4"));
    render(DualCalendar::new(), &mut s);

    let r = s.handle(&click(27, 0), MouseOnly);
    assert_eq!(r, CalOutcome::Changed);
    assert_eq!(s.year_month_key(), "2024-5");

    render(DualCalendar::new(), &mut s);
    let r = s.handle(&click(0, 0), MouseOnly);
    assert_eq!(r, CalOutcome::Changed);
    assert_eq!(s.year_month_key(), "2024-4");

    render(DualCalendar::new(), &mut s);
    let r = s.handle(&click(24, 0), MouseOnly);
    assert_eq!(r, CalOutcome::Selected);
    assert_eq!(s.mode(), CalendarMode::Hijri);
}

#[test]
fn test_keys() {
    let mut s = state(CalendarConfig::new().current_year_month("2024-4"));
    render(DualCalendar::new(), &mut s);

    // not focused
    assert_eq!(s.handle(&key(KeyCode::PageDown), Regular), CalOutcome::Continue);

    s.focus.set(true);
    assert_eq!(s.handle(&key(KeyCode::PageDown), Regular), CalOutcome::Changed);
    assert_eq!(s.year_month_key(), "2024-5");
    assert_eq!(s.handle(&key(KeyCode::PageUp), Regular), CalOutcome::Changed);
    assert_eq!(s.year_month_key(), "2024-4");

    assert_eq!(s.handle(&key(KeyCode::Right), Regular), CalOutcome::Selected);
    assert_eq!(s.selected(), Some(date(2024, 4, 1)));
    assert_eq!(s.handle(&key(KeyCode::Down), Regular), CalOutcome::Selected);
    assert_eq!(s.selected(), Some(date(2024, 4, 8)));
    assert_eq!(s.handle(&key(KeyCode::Delete), Regular), CalOutcome::Selected);
    assert_eq!(s.selected(), None);

    assert_eq!(s.handle(&key(KeyCode::Char('m')), Regular), CalOutcome::Selected);
    assert_eq!(s.mode(), CalendarMode::Hijri);
}

#[test]
fn test_relocate() {
    let mut s = state(CalendarConfig::new().current_year_month("2024-4"));
    render(DualCalendar::new(), &mut s);

    s.relocate((2, 3), Rect::new(0, 0, 100, 100));
    assert_eq!(s.area, Rect::new(2, 3, 28, 8));
    assert_eq!(s.area_days[0], Rect::new(2, 5, 4, 1));
    assert_eq!(s.header_areas.mode, Rect::new(25, 3, 3, 1));
}

#[derive(Debug, Default)]
struct TwoRowHeader {
    seen: RefCell<Option<HeaderData>>,
}

impl RenderHeader for TwoRowHeader {
    fn height(&self) -> u16 {
        2
    }

    fn render(&self, data: &HeaderData, area: Rect, buf: &mut Buffer) -> HeaderAreas {
        buf.set_string(area.x, area.y, &data.title, data.text_style);
        *self.seen.borrow_mut() = Some(data.clone());
        HeaderAreas {
            mode: Rect::new(area.x, area.y + 1, area.width, 1),
            ..Default::default()
        }
    }
}

#[test]
fn test_custom_header() {
    let header = TwoRowHeader::default();
    let widget = DualCalendar::new().header(&header);
    assert_eq!(widget.height(), 9);

    let area = Rect::new(0, 0, 28, 9);
    let mut buf = Buffer::empty(area);
    let mut s = state(
        CalendarConfig::new()
            .min_date("2024-4")
            .current_year_month("2024-4"),
    );
    widget.render(area, &mut buf, &mut s);

    let seen = header.seen.borrow().clone().expect("rendered");
    assert_eq!(seen.title, "April 2024");
    assert!(!seen.can_go_prev);
    assert!(seen.can_go_next);
    assert_eq!(s.area_header, Rect::new(0, 0, 28, 2));
    assert_eq!(s.area_weekdays, Rect::new(0, 2, 28, 1));

    let r = s.handle(&click(5, 1), MouseOnly);
    assert_eq!(r, CalOutcome::Selected);
    assert_eq!(s.mode(), CalendarMode::Hijri);
}
