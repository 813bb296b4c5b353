//! Dashboard page: the signed-in provider's day schedule.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches month availability
//! whenever the displayed month changes and the day's appointments whenever
//! the selected date changes, then renders the morning/afternoon sections
//! from the schedule view model. A 401 on either fetch drops the session,
//! which routes the visitor back to login via the guard.

use chrono::{Datelike, Local};
use leptos::prelude::*;

use crate::components::day_picker::{DayPicker, first_of_month};
use crate::net::types::{Appointment, MonthDay};
use crate::schedule::view_model::{
    ScheduleEntry, afternoon, disabled_dates, hour_label, morning, next_after, schedule_entries,
    selected_date_label, weekday_label,
};
use crate::session::auth::SessionHandle;

/// Dashboard page — shows the selected day's bookings and the month picker.
#[component]
pub fn DashboardPage(
    /// Session handle injected by `App`.
    session: SessionHandle,
) -> impl IntoView {
    let today = Local::now().date_naive();
    let selected_date = RwSignal::new(today);
    let month = RwSignal::new(first_of_month(today));
    let month_availability = RwSignal::new(Vec::<MonthDay>::new());
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let fetch_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::{self, ApiError};

        Effect::new(move || {
            let month_start = month.get();
            let Some(user) = session.user() else { return };
            let Some(token) = session.token() else { return };
            leptos::task::spawn_local(async move {
                let fetched = api::fetch_month_availability(
                    &token,
                    &user.id,
                    month_start.year(),
                    month_start.month(),
                )
                .await;
                match fetched {
                    Ok(days) => month_availability.set(days),
                    Err(ApiError::Unauthorized) => session.sign_out(),
                    Err(e) => {
                        log::warn!("month availability fetch failed: {e}");
                        fetch_error.set(Some(e.to_string()));
                    }
                }
            });
        });

        Effect::new(move || {
            let date = selected_date.get();
            let Some(token) = session.token() else { return };
            leptos::task::spawn_local(async move {
                let fetched =
                    api::fetch_my_appointments(&token, date.year(), date.month(), date.day()).await;
                match fetched {
                    Ok(list) => appointments.set(list),
                    Err(ApiError::Unauthorized) => session.sign_out(),
                    Err(e) => {
                        log::warn!("appointments fetch failed: {e}");
                        fetch_error.set(Some(e.to_string()));
                    }
                }
            });
        });
    }

    let entries = Memo::new(move |_| schedule_entries(&appointments.get()));
    let morning_entries = Memo::new(move |_| morning(&entries.get()));
    let afternoon_entries = Memo::new(move |_| afternoon(&entries.get()));
    let disabled = Memo::new(move |_| {
        let month_start = month.get();
        disabled_dates(&month_availability.get(), month_start.year(), month_start.month())
    });
    // The "up next" card only makes sense while looking at today.
    let next_entry = Memo::new(move |_| {
        if selected_date.get() == today {
            next_after(&entries.get(), Local::now().naive_local())
        } else {
            None
        }
    });

    // Clearing the session is enough; the route guard re-evaluates and
    // redirects to the landing page.
    let on_sign_out = move |_| session.sign_out();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <span class="dashboard-page__logo">"Barbershop"</span>
                <div class="profile">
                    <img
                        class="profile__avatar"
                        src=move || session.user().and_then(|u| u.avatar_url)
                        alt=move || session.user().map(|u| u.name).unwrap_or_default()
                    />
                    <div>
                        <span>"Bem-vindo"</span>
                        <strong>{move || session.user().map(|u| u.name).unwrap_or_default()}</strong>
                    </div>
                </div>
                <button class="dashboard-page__sign-out" on:click=on_sign_out title="Sair">
                    "Sair"
                </button>
            </header>
            <div class="dashboard-page__content">
                <section class="schedule">
                    <h1>"Horários agendados"</h1>
                    <p class="schedule__date">
                        <Show when=move || selected_date.get() == today>
                            <span>"Hoje"</span>
                        </Show>
                        <span>{move || selected_date_label(selected_date.get())}</span>
                        <span>{move || weekday_label(selected_date.get())}</span>
                    </p>
                    <Show when=move || fetch_error.get().is_some()>
                        <p class="schedule__error">{move || fetch_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || next_entry.get().is_some()>
                        <div class="next-appointment">
                            <strong>"Atendimento a seguir"</strong>
                            {move || next_entry.get().map(|entry| view! { <EntryCard entry/> })}
                        </div>
                    </Show>
                    <ScheduleSection title="Manhã" entries=morning_entries/>
                    <ScheduleSection title="Tarde" entries=afternoon_entries/>
                </section>
                <aside class="dashboard-page__calendar">
                    <DayPicker
                        selected=selected_date
                        month=month
                        disabled=disabled
                        from_month=first_of_month(today)
                    />
                </aside>
            </div>
        </div>
    }
}

/// One named section (morning or afternoon) of the day schedule.
#[component]
fn ScheduleSection(title: &'static str, entries: Memo<Vec<ScheduleEntry>>) -> impl IntoView {
    view! {
        <div class="schedule-section">
            <strong>{title}</strong>
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <p class="schedule-section__empty">"Nenhum agendamento neste período"</p> }
            >
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| view! { <EntryCard entry/> })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}

/// One appointment row: hour badge plus the booked client.
#[component]
fn EntryCard(entry: ScheduleEntry) -> impl IntoView {
    view! {
        <div class="appointment">
            <span class="appointment__hour">{hour_label(entry.scheduled_at)}</span>
            <div class="appointment__client">
                <img
                    class="appointment__avatar"
                    src=entry.counterparty_avatar_url
                    alt=entry.counterparty_name.clone()
                />
                <strong>{entry.counterparty_name}</strong>
            </div>
        </div>
    }
}
