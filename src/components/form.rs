//! Field registry shared by a form and its input widgets.
//!
//! DESIGN
//! ======
//! Inputs register a typed value accessor under their field name; the form
//! reads, validates, and resets fields by name without knowing the concrete
//! widget. Validation outcomes flow the other way as a name -> message map
//! the widgets consult for error display.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashMap;

use leptos::prelude::*;

/// A mounted field's entry in the registry: its name and a typed accessor
/// for the widget's current value.
#[derive(Clone)]
pub struct FieldRegistration {
    /// Field name, unique within one form.
    pub name: String,
    /// Live value of the widget; reading and resetting go through this.
    pub value: RwSignal<String>,
}

/// Registry of the fields mounted under one form.
#[derive(Clone, Copy)]
pub struct FormRegistry {
    fields: RwSignal<Vec<FieldRegistration>>,
    errors: RwSignal<HashMap<String, String>>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(Vec::new()),
            errors: RwSignal::new(HashMap::new()),
        }
    }

    /// Add or replace the registration for `registration.name`. One
    /// registration per mounted input; remounting under the same name
    /// supersedes the previous entry.
    pub fn register(&self, registration: FieldRegistration) {
        self.fields.update(|fields| {
            fields.retain(|field| field.name != registration.name);
            fields.push(registration);
        });
    }

    /// Current value of the named field. Untracked: meant for submit-time
    /// reads, not reactive rendering.
    pub fn value_of(&self, name: &str) -> Option<String> {
        self.fields.with_untracked(|fields| {
            fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| field.value.get_untracked())
        })
    }

    /// Reset every registered field to the empty string.
    pub fn reset(&self) {
        self.fields.with_untracked(|fields| {
            for field in fields {
                field.value.set(String::new());
            }
        });
    }

    /// Replace the validation error map.
    pub fn set_errors(&self, errors: HashMap<String, String>) {
        self.errors.set(errors);
    }

    /// Drop all validation errors.
    pub fn clear_errors(&self) {
        self.errors.update(HashMap::clear);
    }

    /// Validation error for the named field, if any. Reactive.
    pub fn error_of(&self, name: &str) -> Option<String> {
        self.errors.with(|errors| errors.get(name).cloned())
    }
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}
