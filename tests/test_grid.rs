use chrono::{Days, NaiveDate};
use rat_dual_calendar::calendar::fields;
use rat_dual_calendar::calendar::{build_grid, build_grid_for, CalendarMode, GRID_LEN};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn test_april_2024() {
    let grid = build_grid(CalendarMode::Gregorian, 2024, 3, 30, true);

    assert_eq!(grid.len(), GRID_LEN);
    assert_eq!(grid.leading(), 1);
    assert_eq!(grid.current_len(), 30);
    assert_eq!(grid.trailing(), 11);

    let first = grid.get(0).expect("cell");
    assert_eq!(first.label, "31");
    assert_eq!(first.date, date(2024, 3, 31));
    assert!(!first.current_month);

    let day1 = grid.get(1).expect("cell");
    assert_eq!(day1.label, "1");
    assert_eq!(day1.date, date(2024, 4, 1));
    assert!(day1.current_month);

    let last = grid.get(41).expect("cell");
    assert_eq!(last.label, "11");
    assert_eq!(last.date, date(2024, 5, 11));
    assert!(!last.current_month);
}

#[test]
fn test_hijri_no_adjacent() {
    // Shawwal 1445: 29 days, starts on a wednesday.
    let grid = build_grid(CalendarMode::Hijri, 1445, 9, 29, false);

    assert_eq!(grid.len(), GRID_LEN);
    assert!(grid.cells()[0..3].iter().all(|v| v.is_none()));
    assert_eq!(grid.leading(), 3);
    assert_eq!(grid.current_len(), 29);
    assert_eq!(grid.trailing(), 10);
    assert!(grid.cells()[32..].iter().all(|v| v.is_none()));

    let day1 = grid.get(3).expect("cell");
    assert_eq!(day1.label, "1");
    assert_eq!(day1.date, date(2024, 4, 10));

    let day29 = grid.get(31).expect("cell");
    assert_eq!(day29.label, "29");
    assert_eq!(day29.date, date(2024, 5, 8));
}

#[test]
fn test_hijri_adjacent_labels() {
    let grid = build_grid(CalendarMode::Hijri, 1445, 9, 29, true);

    // Ramadan 1445 has 30 days.
    let labels = grid.cells()[0..3]
        .iter()
        .map(|v| v.as_ref().expect("cell").label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["28", "29", "30"]);

    // Dhu al-Qi'dah starts right after.
    let next = grid.get(32).expect("cell");
    assert_eq!(next.label, "1");
    assert_eq!(next.date, date(2024, 5, 9));
    assert!(!next.current_month);
}

#[test]
fn test_oversized_month() {
    // Shawwal 1445 has 29 days, 31 is cut down.
    let grid = build_grid(CalendarMode::Hijri, 1445, 9, 31, false);
    assert_eq!(grid, build_grid(CalendarMode::Hijri, 1445, 9, 29, false));
    assert_eq!(grid.current_len(), 29);
    let labels = grid
        .iter()
        .flatten()
        .map(|v| v.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels.iter().filter(|v| **v == "29").count(), 1);

    let grid = build_grid(CalendarMode::Hijri, 1445, 9, 31, true);
    assert_eq!(grid.current_len(), 29);
    assert_eq!(grid.get(32).expect("cell").date, date(2024, 5, 9));

    let grid = build_grid(CalendarMode::Gregorian, 2023, 1, 31, true);
    assert_eq!(grid.current_len(), 28);
    assert_eq!(grid.get(31).expect("cell").date, date(2023, 3, 1));
}

#[test]
fn test_six_rows() {
    // March 2024 starts on a friday, 31 days.
    let grid = build_grid(CalendarMode::Gregorian, 2024, 2, 31, true);
    assert_eq!(grid.leading(), 5);
    assert_eq!(grid.current_len(), 31);
    assert_eq!(grid.trailing(), 6);
    assert_eq!(grid.weeks().count(), 6);
    assert!(grid.weeks().all(|w| w.len() == 7));
}

#[test]
fn test_february() {
    let grid = build_grid(CalendarMode::Gregorian, 2024, 1, 29, false);
    assert_eq!(grid.current_len(), 29);
    assert_eq!(grid.leading(), 4);

    let grid = build_grid(CalendarMode::Gregorian, 2023, 1, 28, false);
    assert_eq!(grid.current_len(), 28);
    assert_eq!(grid.leading(), 3);
    assert_eq!(grid.trailing(), 11);
}

#[test]
fn test_invalid_month() {
    let grid = build_grid(CalendarMode::Gregorian, 2024, 12, 31, true);
    assert_eq!(grid.len(), GRID_LEN);
    assert!(grid.is_empty());
}

#[test]
fn test_all_months() {
    for (mode, years) in [
        (CalendarMode::Gregorian, 1998..2032),
        (CalendarMode::Hijri, 1418..1452),
    ] {
        for year in years {
            for month0 in 0..12 {
                let start = fields::from_year_month0(mode, year, month0).expect("month");
                let days = fields::days_in_month(mode, start);
                let first_weekday = fields::weekday0(start) as usize;

                let plain = build_grid(mode, year, month0, days, false);
                assert_eq!(plain.len(), GRID_LEN);
                assert_eq!(plain.current_len(), days as usize);
                assert_eq!(plain.leading(), first_weekday);

                let padded = build_grid(mode, year, month0, days, true);
                assert_eq!(padded.len(), GRID_LEN);
                assert_eq!(padded.current_len(), days as usize);
                assert_eq!(padded.leading(), first_weekday);
                assert_eq!(padded.trailing(), GRID_LEN - first_weekday - days as usize);

                // padded grids are 42 consecutive days.
                let first = padded.get(0).expect("cell").date;
                for (i, cell) in padded.iter().enumerate() {
                    let cell = cell.as_ref().expect("cell");
                    assert_eq!(cell.date, first + Days::new(i as u64));
                    assert_eq!(cell.label, fields::day(mode, cell.date).to_string());
                }
            }
        }
    }
}

#[test]
fn test_grid_for() {
    let grid = build_grid_for(CalendarMode::Hijri, date(2024, 4, 15), false);
    assert_eq!(grid, build_grid(CalendarMode::Hijri, 1445, 9, 29, false));
    assert_eq!(grid.position(date(2024, 4, 15)), Some(8));
    assert_eq!(grid.position(date(2024, 6, 15)), None);
}
