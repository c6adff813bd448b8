use crate::dispatch::dispatch;
use crate::workout::Effort;

/// The sensor packages the reference program ships with.
pub const DEMO_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Dispatch every package and print one summary line per session.
/// A bad package is reported and skipped, not fatal.
pub fn run_packages(packages: &[(&str, &[f64])]) {
    for (workout_type, data) in packages {
        match dispatch(workout_type, data) {
            Ok(workout) => println!("{}", workout.summarize().render()),
            Err(err) => {
                log::warn!("skipping {workout_type} package: {err}");
                eprintln!("{err}");
            }
        }
    }
}
