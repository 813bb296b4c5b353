use super::*;

#[test]
fn filled_tracks_non_empty_values() {
    assert!(is_filled("a"));
    assert!(!is_filled(""));
    // Whitespace counts as content; only truly empty reads as unfilled.
    assert!(is_filled(" "));
}

#[test]
fn container_class_bare_by_default() {
    assert_eq!(container_class(false, false, false), "text-input");
}

#[test]
fn container_class_adds_one_modifier_per_flag() {
    assert_eq!(container_class(true, false, false), "text-input text-input--focused");
    assert_eq!(container_class(false, true, false), "text-input text-input--filled");
    assert_eq!(container_class(false, false, true), "text-input text-input--errored");
}

#[test]
fn container_class_flags_are_independent() {
    assert_eq!(
        container_class(true, true, true),
        "text-input text-input--focused text-input--filled text-input--errored"
    );
}
