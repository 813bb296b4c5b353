//! Derived display shapes for the dashboard schedule.

pub mod view_model;
