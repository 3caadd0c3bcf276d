//!
//! Dual calendar with a status line.
//!
//! PageUp/PageDown change the month, the arrow keys move the
//! selection, `m` switches between gregorian and hijri.
//! Esc quits.
//!

use anyhow::anyhow;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rat_dual_calendar::calendar::{
    CalendarConfig, DateChange, DualCalendar, DualCalendarState, DualCalendarStyle,
};
use rat_dual_calendar::event::{ct_event, CalOutcome, HandleEvent, Regular};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use ratatui::Terminal;
use std::cell::RefCell;
use std::fs;
use std::io::stdout;
use std::path::PathBuf;
use std::rc::Rc;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let config = CalendarConfig::new()
        .min_date("2000-1")
        .allow_future_dates(false);
    config.validate()?;

    let mut state = State {
        calendar: DualCalendarState::named("calendar", &config),
        changes: Default::default(),
    };
    state.calendar.focus.set(true);

    let changes = state.changes.clone();
    state.calendar.on_date_change(move |change| {
        log::debug!("date change {:?}", change);
        changes.borrow_mut().push(change.clone());
    });

    run_ui(&mut state)
}

struct State {
    calendar: DualCalendarState,
    changes: Rc<RefCell<Vec<DateChange>>>,
}

fn run_ui(state: &mut State) -> Result<(), anyhow::Error> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let r = 'l: loop {
        if let Err(e) = terminal.draw(|frame| {
            let area = frame.area();
            repaint(frame.buffer_mut(), area, state);
        }) {
            break 'l Err(anyhow!(e));
        }

        let event = match crossterm::event::read() {
            Ok(v) => v,
            Err(e) => break 'l Err(anyhow!(e)),
        };
        match &event {
            ct_event!(keycode press Esc) | ct_event!(key press CONTROL-'q') => {
                break 'l Ok(());
            }
            _ => {}
        }
        match state.calendar.handle(&event, Regular) {
            CalOutcome::Continue | CalOutcome::Unchanged => {}
            r => log::debug!("outcome {:?} {}", r, state.calendar.year_month_key()),
        }
        if let Event::Resize(_, _) = event {
            terminal.clear()?;
        }
    };

    disable_raw_mode()?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;

    r
}

fn repaint(buf: &mut Buffer, area: Rect, state: &mut State) {
    let calendar = DualCalendar::new()
        .locale(chrono::Locale::en_US)
        .styles(calendar_style())
        .block(Block::bordered().title("Dual Calendar"));

    let l0 = Layout::vertical([
        Constraint::Length(calendar.height()),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);
    let l1 = Layout::horizontal([Constraint::Length(calendar.width()), Constraint::Fill(1)])
        .spacing(2)
        .split(l0[0]);

    calendar.render(l1[0], buf, &mut state.calendar);

    let changes = state.changes.borrow();
    let info = match changes.last() {
        Some(change) if !change.is_cleared() => vec![
            Line::from(format!("selected   {}", change.calendar_date)),
            Line::from(format!("gregorian  {}", change.gregorian_date)),
            Line::from(format!("hijri      {}", change.hijri_date)),
        ],
        _ => vec![Line::from("no selection")],
    };
    for (i, line) in info.into_iter().enumerate() {
        let row = Rect::new(l1[1].x, l1[1].y + 1 + i as u16, l1[1].width, 1).intersection(l1[1]);
        line.render(row, buf);
    }

    Line::from(format!(
        "{} | {} changes | Esc to quit",
        state.calendar.mode(),
        changes.len()
    ))
    .style(Style::new().black().on_gray())
    .render(l0[2], buf);
}

fn calendar_style() -> DualCalendarStyle {
    DualCalendarStyle {
        style: Style::new().white().on_black(),
        header_text: Some(Style::new().bold()),
        day_name: Some(Style::new().cyan()),
        today: Some(Style::new().yellow().underlined()),
        select: Some(Style::new().black().on_light_green()),
        focus: Some(Style::new().black().on_green()),
        ..Default::default()
    }
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("dual_calendar.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
