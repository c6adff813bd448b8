use serde::{Deserialize, Serialize};

/// Derived metrics for one completed session, computed once and handed to
/// the caller. No lifecycle beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub workout_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl SummaryRecord {
    /// Fixed output template. This is a compatibility contract with the
    /// reference tracker output, hence the Russian labels and the 3-decimal
    /// fixed-point formatting on every numeric field.
    pub fn render(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.workout_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
