//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the booking API's JSON payloads so serde round-trips
//! stay lossless; view-layer shapes are derived from them in `schedule`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned inside the `POST /sessions` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// Body of a successful `POST /sessions` exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Opaque bearer token proving the session on subsequent requests.
    pub token: String,
    /// The signed-in user.
    pub user: User,
}

/// One calendar day of a provider's month availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    /// Day of month, 1-based.
    pub day: u32,
    /// Whether the provider still has open slots on this day.
    pub available: bool,
}

/// An appointment as returned by `GET /appointments/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment identifier (UUID string).
    pub id: String,
    /// Scheduled instant as an RFC 3339 timestamp string.
    pub date: String,
    /// The client who booked the slot.
    pub user: Counterparty,
}

/// The other party of an appointment, as nested in the appointments payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}
