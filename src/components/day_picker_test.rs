use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn first_of_month_resets_the_day() {
    assert_eq!(first_of_month(date(2024, 8, 16)), date(2024, 8, 1));
}

#[test]
fn add_months_moves_forward_and_back() {
    assert_eq!(add_months(date(2024, 8, 1), 1), date(2024, 9, 1));
    assert_eq!(add_months(date(2024, 8, 1), -1), date(2024, 7, 1));
}

#[test]
fn add_months_wraps_across_years() {
    assert_eq!(add_months(date(2024, 12, 1), 1), date(2025, 1, 1));
    assert_eq!(add_months(date(2024, 1, 1), -1), date(2023, 12, 1));
}

#[test]
fn month_grid_pads_to_the_first_weekday_column() {
    // August 2024 starts on a Thursday: 4 leading blanks, Sunday-first.
    let grid = month_grid(date(2024, 8, 1));
    assert_eq!(grid.iter().take_while(|cell| cell.is_none()).count(), 4);
    assert_eq!(grid.iter().flatten().count(), 31);
    assert_eq!(grid.iter().flatten().next(), Some(&date(2024, 8, 1)));
    assert_eq!(grid.iter().flatten().last(), Some(&date(2024, 8, 31)));
}

#[test]
fn month_grid_handles_february_leap_year() {
    let grid = month_grid(date(2024, 2, 1));
    assert_eq!(grid.iter().flatten().count(), 29);
}

#[test]
fn weekends_are_never_selectable() {
    let saturday = date(2024, 8, 17);
    assert!(!is_selectable(saturday, &[]));
}

#[test]
fn disabled_dates_are_not_selectable() {
    let friday = date(2024, 8, 16);
    assert!(is_selectable(friday, &[]));
    assert!(!is_selectable(friday, &[friday]));
}

#[test]
fn back_navigation_stops_at_the_from_month() {
    let from = date(2024, 8, 16);
    assert!(!can_go_back(date(2024, 8, 1), from));
    assert!(can_go_back(date(2024, 9, 1), from));
}
