use crate::error::TrackerError;
use crate::models::SummaryRecord;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Stride length assumed for land workouts (m per step).
pub const LEN_STEP_M: f64 = 0.65;
/// Distance covered per swimming stroke (m).
pub const LEN_STROKE_M: f64 = 1.38;

fn positive(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidInput { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidInput { field, value })
    }
}

fn nonzero_count(field: &'static str, value: u32) -> Result<u32, TrackerError> {
    if value == 0 {
        Err(TrackerError::InvalidInput {
            field,
            value: 0.0,
        })
    } else {
        Ok(value)
    }
}

/// Shared computation contract over all modalities. The provided methods are
/// the land-workout defaults; swimming overrides `mean_speed_kmh`. There is
/// no instantiable base type, so every concrete variant must supply its own
/// calorie formula.
pub trait Effort {
    /// Display name used as `workout_label` in the summary.
    fn label(&self) -> &'static str;

    fn duration_hours(&self) -> f64;

    fn distance_km(&self) -> f64;

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    fn spent_calories_kcal(&self) -> f64;

    fn summarize(&self) -> SummaryRecord {
        SummaryRecord {
            workout_label: self.label().to_string(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories_kcal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action_units: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    /// Empirically calibrated coefficients from the reference tracker.
    const SPEED_FACTOR: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub fn new(action_units: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, TrackerError> {
        Ok(Self {
            action_units,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }
}

impl Effort for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action_units) * LEN_STEP_M / M_IN_KM
    }

    fn spent_calories_kcal(&self) -> f64 {
        (Self::SPEED_FACTOR * self.mean_speed_kmh() - Self::SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * (self.duration_hours * MIN_IN_HOUR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    pub action_units: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: u32,
}

impl Walking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;

    pub fn new(
        action_units: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: u32,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            action_units,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
            height_cm: nonzero_count("height_cm", height_cm)?,
        })
    }
}

impl Effort for Walking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action_units) * LEN_STEP_M / M_IN_KM
    }

    fn spent_calories_kcal(&self) -> f64 {
        // Square first, then floor-divide by height. The reference output
        // depends on this exact ordering.
        let speed_term = (self.mean_speed_kmh().powi(2) / f64::from(self.height_cm)).floor();
        (Self::WEIGHT_FACTOR * self.weight_kg
            + speed_term * Self::SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_hours
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action_units: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: u32,
    pub pool_lengths_count: f64,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_FACTOR: f64 = 2.0;

    pub fn new(
        action_units: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: u32,
        pool_lengths_count: f64,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            action_units,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
            pool_length_m: nonzero_count("pool_length_m", pool_length_m)?,
            pool_lengths_count: non_negative("pool_lengths_count", pool_lengths_count)?,
        })
    }
}

impl Effort for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action_units) * LEN_STROKE_M / M_IN_KM
    }

    /// Pool-based speed, not stroke-based: lengths swum times pool length.
    fn mean_speed_kmh(&self) -> f64 {
        f64::from(self.pool_length_m) * self.pool_lengths_count / M_IN_KM / self.duration_hours
    }

    fn spent_calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT) * Self::WEIGHT_FACTOR * self.weight_kg
    }
}

/// Sum type over the supported modalities. Each variant owns its reading;
/// nothing is shared or cached across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    fn as_effort(&self) -> &dyn Effort {
        match self {
            Workout::Running(w) => w,
            Workout::Walking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Effort for Workout {
    fn label(&self) -> &'static str {
        self.as_effort().label()
    }

    fn duration_hours(&self) -> f64 {
        self.as_effort().duration_hours()
    }

    fn distance_km(&self) -> f64 {
        self.as_effort().distance_km()
    }

    // Delegate instead of taking the trait default, so the swimming
    // override survives the enum indirection.
    fn mean_speed_kmh(&self) -> f64 {
        self.as_effort().mean_speed_kmh()
    }

    fn spent_calories_kcal(&self) -> f64 {
        self.as_effort().spent_calories_kcal()
    }
}
