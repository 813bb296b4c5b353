use super::*;

fn registered(registry: &FormRegistry, name: &str, value: &str) -> RwSignal<String> {
    let signal = RwSignal::new(value.to_owned());
    registry.register(FieldRegistration { name: name.to_owned(), value: signal });
    signal
}

#[test]
fn value_of_reads_registered_field() {
    let registry = FormRegistry::new();
    registered(&registry, "email", "ana@example.com");
    assert_eq!(registry.value_of("email"), Some("ana@example.com".to_owned()));
}

#[test]
fn value_of_unknown_field_is_none() {
    let registry = FormRegistry::new();
    assert_eq!(registry.value_of("email"), None);
}

#[test]
fn reregistering_a_name_replaces_the_accessor() {
    let registry = FormRegistry::new();
    registered(&registry, "email", "old@example.com");
    registered(&registry, "email", "new@example.com");
    assert_eq!(registry.value_of("email"), Some("new@example.com".to_owned()));
}

#[test]
fn reset_empties_every_field() {
    let registry = FormRegistry::new();
    let email = registered(&registry, "email", "ana@example.com");
    let password = registered(&registry, "password", "secret");
    registry.reset();
    assert_eq!(email.get_untracked(), "");
    assert_eq!(password.get_untracked(), "");
}

#[test]
fn error_lookup_is_by_field_name() {
    let registry = FormRegistry::new();
    registry.set_errors(HashMap::from([(
        "email".to_owned(),
        "E-mail obrigatório".to_owned(),
    )]));
    assert_eq!(registry.error_of("email"), Some("E-mail obrigatório".to_owned()));
    assert_eq!(registry.error_of("password"), None);
}

#[test]
fn clear_errors_drops_the_map() {
    let registry = FormRegistry::new();
    registry.set_errors(HashMap::from([("email".to_owned(), "x".to_owned())]));
    registry.clear_errors();
    assert_eq!(registry.error_of("email"), None);
}
