pub mod cli;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod workout;

pub use dispatch::dispatch;
pub use error::TrackerError;
pub use models::SummaryRecord;
pub use workout::{Effort, Running, Swimming, Walking, Workout};

/// String-in/string-out convenience wrapper: takes the argument list as a
/// JSON array and returns the summary record as JSON. For callers that do
/// not want to touch the typed surface.
pub fn summarize_package_json(workout_type: &str, data_json: &str) -> Result<String, TrackerError> {
    let data: Vec<f64> = serde_json::from_str(data_json)?;
    let record = dispatch(workout_type, &data)?.summarize();
    Ok(serde_json::to_string(&record)?)
}
