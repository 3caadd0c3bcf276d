use crate::calendar::CalendarMode;
use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use std::fmt::Debug;

/// Everything a header needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderData {
    /// Month title in the active calendar.
    pub title: String,
    /// Navigation to the previous month is possible.
    pub can_go_prev: bool,
    /// Navigation to the next month is possible.
    pub can_go_next: bool,
    /// Active calendar.
    pub mode: CalendarMode,
    /// A day of the displayed month.
    pub date: NaiveDate,
    /// Header style.
    pub style: Style,
    /// Title and arrow style.
    pub text_style: Style,
}

/// Click targets reported by a header.
///
/// Clicks into these areas navigate or toggle the calendar mode.
/// Leave an area empty if the header doesn't offer that action.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAreas {
    pub prev: Rect,
    pub title: Rect,
    pub next: Rect,
    pub mode: Rect,
}

/// Renders the header row of the calendar.
///
/// Set one with [DualCalendar::header](crate::calendar::DualCalendar::header)
/// to replace [DefaultHeader].
pub trait RenderHeader: Debug {
    /// Rows needed.
    fn height(&self) -> u16 {
        1
    }

    /// Render and return the click targets.
    fn render(&self, data: &HeaderData, area: Rect, buf: &mut Buffer) -> HeaderAreas;
}

/// `‹  April 2024  [G] ›`
///
/// The arrows are only shown when navigation is possible.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHeader;

impl RenderHeader for DefaultHeader {
    fn render(&self, data: &HeaderData, area: Rect, buf: &mut Buffer) -> HeaderAreas {
        buf.set_style(area, data.style);

        let mut areas = HeaderAreas::default();
        if area.is_empty() {
            return areas;
        }

        let y = area.y;
        if data.can_go_prev {
            areas.prev = Rect::new(area.x, y, 2, 1).intersection(area);
            Span::from("‹").style(data.text_style).render(areas.prev, buf);
        }
        if data.can_go_next {
            areas.next = Rect::new(area.right().saturating_sub(2), y, 2, 1).intersection(area);
            Span::from(" ›").style(data.text_style).render(areas.next, buf);
        }
        areas.mode = Rect::new(area.right().saturating_sub(5), y, 3, 1).intersection(area);
        let tag = match data.mode {
            CalendarMode::Gregorian => "[G]",
            CalendarMode::Hijri => "[H]",
        };
        Span::from(tag).style(data.text_style).render(areas.mode, buf);

        areas.title =
            Rect::new(area.x + 2, y, area.width.saturating_sub(2 + 5), 1).intersection(area);
        Line::from(data.title.as_str())
            .alignment(Alignment::Center)
            .style(data.text_style)
            .render(areas.title, buf);

        areas
    }
}
