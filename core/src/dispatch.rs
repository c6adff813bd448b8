use crate::error::TrackerError;
use crate::workout::{Running, Swimming, Walking, Workout};

/// Decode one sensor package: a short type code plus positional values in
/// declaration order (base fields first, then the variant's own fields).
///
/// Unknown codes and wrong arities are rejected up front; field-level range
/// checks happen in the variant constructors.
pub fn dispatch(workout_type: &str, data: &[f64]) -> Result<Workout, TrackerError> {
    log::debug!("dispatching {:?} package with {} values", workout_type, data.len());
    match workout_type {
        "SWM" => match *data {
            [action, duration, weight, pool_length, pool_count] => Ok(Workout::Swimming(
                Swimming::new(
                    count_field("action_units", action)?,
                    duration,
                    weight,
                    count_field("pool_length_m", pool_length)?,
                    pool_count,
                )?,
            )),
            _ => Err(arity("SWM", 5, data.len())),
        },
        "RUN" => match *data {
            [action, duration, weight] => Ok(Workout::Running(Running::new(
                count_field("action_units", action)?,
                duration,
                weight,
            )?)),
            _ => Err(arity("RUN", 3, data.len())),
        },
        "WLK" => match *data {
            [action, duration, weight, height] => Ok(Workout::Walking(Walking::new(
                count_field("action_units", action)?,
                duration,
                weight,
                count_field("height_cm", height)?,
            )?)),
            _ => Err(arity("WLK", 4, data.len())),
        },
        other => {
            log::warn!("rejecting unknown workout type {:?}", other);
            Err(TrackerError::UnknownWorkoutType(other.to_string()))
        }
    }
}

fn arity(code: &'static str, expected: usize, got: usize) -> TrackerError {
    TrackerError::ArityMismatch { code, expected, got }
}

/// Sensor packages carry every value as a number; count-like fields must
/// still be whole and within range.
fn count_field(field: &'static str, value: f64) -> Result<u32, TrackerError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrackerError::InvalidInput { field, value })
    }
}
