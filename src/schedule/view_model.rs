//! Pure derivations from fetched schedule data.
//!
//! DESIGN
//! ======
//! Everything here is a pure function over already-fetched payloads; the
//! dashboard wraps the calls in memos so they recompute only when inputs
//! change. Appointment timestamps are taken at face value (the backend
//! emits provider-local instants), so the morning/afternoon split works on
//! the parsed wall-clock hour without timezone conversion.

#[cfg(test)]
#[path = "view_model_test.rs"]
mod view_model_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::net::types::{Appointment, MonthDay};

/// Hours strictly below this split point belong to the morning section.
const AFTERNOON_SPLIT_HOUR: u32 = 12;

const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const WEEKDAYS: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// One appointment prepared for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Appointment identifier, used as the render key.
    pub id: String,
    /// Parsed scheduled instant.
    pub scheduled_at: NaiveDateTime,
    /// Display name of the booked client.
    pub counterparty_name: String,
    /// Avatar URL of the booked client, if available.
    pub counterparty_avatar_url: Option<String>,
}

/// Parse raw appointments into render entries. Records whose timestamp does
/// not parse as RFC 3339 are skipped; the backend never emits them and there
/// is nothing meaningful to render for one.
pub fn schedule_entries(appointments: &[Appointment]) -> Vec<ScheduleEntry> {
    appointments
        .iter()
        .filter_map(|appointment| {
            let scheduled_at = DateTime::parse_from_rfc3339(&appointment.date)
                .ok()?
                .naive_local();
            Some(ScheduleEntry {
                id: appointment.id.clone(),
                scheduled_at,
                counterparty_name: appointment.user.name.clone(),
                counterparty_avatar_url: appointment.user.avatar_url.clone(),
            })
        })
        .collect()
}

/// Entries scheduled before noon.
pub fn morning(entries: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    entries
        .iter()
        .filter(|entry| entry.scheduled_at.hour() < AFTERNOON_SPLIT_HOUR)
        .cloned()
        .collect()
}

/// Entries scheduled at noon or later.
pub fn afternoon(entries: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    entries
        .iter()
        .filter(|entry| entry.scheduled_at.hour() >= AFTERNOON_SPLIT_HOUR)
        .cloned()
        .collect()
}

/// The earliest entry strictly after `now`, for the "up next" card.
pub fn next_after(entries: &[ScheduleEntry], now: NaiveDateTime) -> Option<ScheduleEntry> {
    entries
        .iter()
        .filter(|entry| entry.scheduled_at > now)
        .min_by_key(|entry| entry.scheduled_at)
        .cloned()
}

/// Calendar dates of the month whose availability entry is marked off.
/// Entries naming a day the month does not have are ignored.
pub fn disabled_dates(days: &[MonthDay], year: i32, month: u32) -> Vec<NaiveDate> {
    days.iter()
        .filter(|month_day| !month_day.available)
        .filter_map(|month_day| NaiveDate::from_ymd_opt(year, month, month_day.day))
        .collect()
}

/// Whether the shop treats this date as closed (weekend).
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Lowercase Portuguese month name, 1-based; empty for an invalid month.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// Selected-date headline, e.g. `"Dia 16 de agosto"`.
pub fn selected_date_label(date: NaiveDate) -> String {
    format!("Dia {:02} de {}", date.day(), month_name(date.month()))
}

/// Portuguese weekday name, e.g. `"sexta-feira"`.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAYS
        .get(date.weekday().num_days_from_sunday() as usize)
        .copied()
        .unwrap_or("")
}

/// Wall-clock label for an entry, e.g. `"09:00"`.
pub fn hour_label(scheduled_at: NaiveDateTime) -> String {
    format!("{:02}:{:02}", scheduled_at.hour(), scheduled_at.minute())
}
