use workout_map::error::WorkoutError;
use workout_map::pipeline::validate::{all_finite, all_positive, coerce_number, validate_form};
use workout_map::types::form::FormInput;
use workout_map::types::workout::ActivityInput;

#[test]
fn empty_input_is_vacuously_valid() {
    assert!(all_finite(&[]));
    assert!(all_positive(&[]));
}

#[test]
fn all_positive_rejects_zero_and_negatives() {
    assert!(all_positive(&[0.1, 3.0, 1e9]));
    assert!(!all_positive(&[5.0, 0.0]));
    assert!(!all_positive(&[-2.0, 4.0]));
    assert!(!all_positive(&[f64::NAN]));
}

#[test]
fn all_finite_rejects_nan_and_infinity() {
    assert!(all_finite(&[-3.0, 0.0, 12.5]));
    assert!(!all_finite(&[1.0, f64::NAN]));
    assert!(!all_finite(&[f64::INFINITY]));
    assert!(!all_finite(&[f64::NEG_INFINITY, 2.0]));
}

#[test]
fn coercion_matches_numeric_form_fields() {
    assert_eq!(coerce_number(" 12.5 "), 12.5);
    assert_eq!(coerce_number(""), 0.0);
    assert_eq!(coerce_number("   "), 0.0);
    assert!(coerce_number("ten").is_nan());
    assert!(coerce_number("5km").is_nan());
}

#[test]
fn running_form_becomes_draft() {
    let draft = validate_form(&FormInput::running("5", "25", "172")).expect("valid");
    assert_eq!(draft.distance, 5.0);
    assert_eq!(draft.duration, 25.0);
    assert_eq!(draft.input, ActivityInput::Running { step_rate: 172 });
}

#[test]
fn running_rejects_zero_step_rate() {
    assert_eq!(
        validate_form(&FormInput::running("5", "25", "0")),
        Err(WorkoutError::InvalidMetric("inputs must be positive"))
    );
}

#[test]
fn running_rejects_fractional_step_rate() {
    assert!(validate_form(&FormInput::running("5", "25", "170.5")).is_err());
}

#[test]
fn cycling_accepts_negative_elevation() {
    let draft = validate_form(&FormInput::cycling("10", "30", "-5")).expect("valid");
    assert_eq!(draft.input, ActivityInput::Cycling { elevation_gain: -5.0 });
}

#[test]
fn cycling_accepts_blank_elevation_as_zero() {
    let draft = validate_form(&FormInput::cycling("10", "30", "")).expect("valid");
    assert_eq!(draft.input, ActivityInput::Cycling { elevation_gain: 0.0 });
}

#[test]
fn non_numeric_or_missing_core_fields_are_rejected() {
    assert!(validate_form(&FormInput::cycling("abc", "30", "0")).is_err());
    assert!(validate_form(&FormInput::cycling("10", "", "0")).is_err());
    assert!(validate_form(&FormInput::running("-1", "30", "160")).is_err());
    assert!(validate_form(&FormInput::cycling("10", "30", "inf")).is_err());
}
