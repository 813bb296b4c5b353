//! Month calendar picker fed the dashboard's availability data.
//!
//! The widget itself is deliberately small: a month header with bounded
//! navigation, a weekday row, and one button per day. Which days are
//! selectable is decided entirely by data passed in (weekends off plus the
//! provider's unavailable dates).

#[cfg(test)]
#[path = "day_picker_test.rs"]
mod day_picker_test;

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::schedule::view_model::{is_weekend, month_name};

const WEEKDAY_HEADERS: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from `month_start`.
pub fn add_months(month_start: NaiveDate, delta: i32) -> NaiveDate {
    let index = month_start.year() * 12 + month_start.month0() as i32 + delta;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(month_start)
}

/// Cells of the month grid: leading `None` padding up to the first day's
/// weekday column (Sunday-first), then one `Some` per day of the month.
pub fn month_grid(month_start: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = first_of_month(month_start);
    let next = add_months(first, 1);
    let padding = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; padding];
    let mut day = first;
    while day < next {
        cells.push(Some(day));
        day = day.succ_opt().unwrap_or(next);
    }
    cells
}

/// Whether a day can be picked: weekdays only, and not marked unavailable.
pub fn is_selectable(date: NaiveDate, disabled: &[NaiveDate]) -> bool {
    !is_weekend(date) && !disabled.contains(&date)
}

/// Whether backwards navigation from `month_start` stays at or after the
/// earliest allowed month.
pub fn can_go_back(month_start: NaiveDate, from_month: NaiveDate) -> bool {
    first_of_month(month_start) > first_of_month(from_month)
}

/// Calendar picker for one month of selectable days.
#[component]
pub fn DayPicker(
    /// Currently selected date.
    selected: RwSignal<NaiveDate>,
    /// First day of the displayed month; navigation writes through here so
    /// the parent can refetch availability.
    month: RwSignal<NaiveDate>,
    /// Dates the provider has no open slots on.
    #[prop(into)]
    disabled: Signal<Vec<NaiveDate>>,
    /// Earliest month the picker may navigate back to.
    from_month: NaiveDate,
) -> impl IntoView {
    let header = move || {
        let start = month.get();
        format!("{} {}", month_name(start.month()), start.year())
    };

    view! {
        <div class="day-picker">
            <div class="day-picker__nav">
                <button
                    class="day-picker__nav-button"
                    disabled=move || !can_go_back(month.get(), from_month)
                    on:click=move |_| month.update(|m| *m = add_months(*m, -1))
                >
                    "‹"
                </button>
                <span class="day-picker__month">{header}</span>
                <button
                    class="day-picker__nav-button"
                    on:click=move |_| month.update(|m| *m = add_months(*m, 1))
                >
                    "›"
                </button>
            </div>
            <div class="day-picker__weekdays">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|label| view! { <span class="day-picker__weekday">{*label}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="day-picker__grid">
                {move || {
                    let off_days = disabled.get();
                    month_grid(month.get())
                        .into_iter()
                        .map(|cell| match cell {
                            None => view! { <span class="day-picker__cell"></span> }.into_any(),
                            Some(date) => {
                                let selectable = is_selectable(date, &off_days);
                                view! {
                                    <button
                                        class="day-picker__cell day-picker__day"
                                        class=("day-picker__day--selected", move || selected.get() == date)
                                        disabled=!selectable
                                        on:click=move |_| {
                                            if selectable {
                                                selected.set(date);
                                            }
                                        }
                                    >
                                        {date.day()}
                                    </button>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
