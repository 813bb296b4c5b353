//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are leaf widgets; pages own route-scoped orchestration and
//! hand state down through explicit props.

pub mod day_picker;
pub mod form;
pub mod text_input;
