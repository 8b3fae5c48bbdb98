use crate::error::WorkoutError;
use crate::types::form::{FormInput, WorkoutDraft};
use crate::types::workout::{ActivityInput, WorkoutKind};

/// True iff every value is finite. Vacuously true for an empty slice.
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True iff every value is strictly greater than zero. Vacuously true for an empty slice.
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Numeric coercion of a form field: blank is 0, anything unparsable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Running checks step rate for positivity too; cycling lets elevation be zero or negative.
pub fn validate_form(form: &FormInput) -> Result<WorkoutDraft, WorkoutError> {
    let distance = coerce_number(&form.distance);
    let duration = coerce_number(&form.duration);

    let input = match form.kind {
        WorkoutKind::Running => {
            let step_rate = coerce_number(&form.step_rate);
            if !all_finite(&[distance, duration, step_rate]) {
                return Err(WorkoutError::InvalidMetric("inputs must be numbers"));
            }
            if !all_positive(&[distance, duration, step_rate]) {
                return Err(WorkoutError::InvalidMetric("inputs must be positive"));
            }
            if step_rate.fract() != 0.0 || step_rate > u32::MAX as f64 {
                return Err(WorkoutError::InvalidMetric("step rate must be a whole number"));
            }
            ActivityInput::Running {
                step_rate: step_rate as u32,
            }
        }
        WorkoutKind::Cycling => {
            let elevation_gain = coerce_number(&form.elevation_gain);
            if !all_finite(&[distance, duration, elevation_gain]) {
                return Err(WorkoutError::InvalidMetric("inputs must be numbers"));
            }
            if !all_positive(&[distance, duration]) {
                return Err(WorkoutError::InvalidMetric("inputs must be positive"));
            }
            ActivityInput::Cycling { elevation_gain }
        }
    };

    Ok(WorkoutDraft {
        distance,
        duration,
        input,
    })
}
