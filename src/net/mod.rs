//! Networking modules for the booking REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and owns the error taxonomy, `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
