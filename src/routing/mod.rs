//! Navigation-time authorization.

pub mod guard;
