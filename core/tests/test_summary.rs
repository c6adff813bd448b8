use fittrack_core::{dispatch, summarize_package_json, Effort};

#[test]
fn rendered_line_matches_reference_output() {
    let run = dispatch("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(
        run.summarize().render(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );

    let swm = dispatch("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(
        swm.summarize().render(),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );

    let wlk = dispatch("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(
        wlk.summarize().render(),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

#[test]
fn summarize_is_deterministic() {
    let w = dispatch("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let first = w.summarize();
    let second = w.summarize();
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}

#[test]
fn json_surface_round_trips_a_package() {
    let out = summarize_package_json("SWM", "[720, 1, 80, 25, 40]").unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["workout_label"], "Swimming");
    assert!((v["distance_km"].as_f64().unwrap() - 0.9936).abs() < 1e-9);
    assert!((v["mean_speed_kmh"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((v["calories_kcal"].as_f64().unwrap() - 336.0).abs() < 1e-9);
}

#[test]
fn json_surface_propagates_dispatch_errors() {
    assert!(summarize_package_json("XYZ", "[1, 2, 3]").is_err());
    assert!(summarize_package_json("RUN", "not json").is_err());
    assert!(summarize_package_json("RUN", "[15000, 1]").is_err());
}
