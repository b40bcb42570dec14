//! Integration-Tests für das Laden der Demo-Optionen
use bezier_drag_demo::{AppState, DemoOptions};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bezier_drag_demo_{}_{}.toml", std::process::id(), name))
}

#[test]
fn test_missing_file_yields_defaults() {
    let options = DemoOptions::load_from_file(&temp_path("does_not_exist"));

    assert_eq!(options, DemoOptions::default());
}

#[test]
fn test_malformed_file_yields_defaults() {
    let path = temp_path("malformed");
    std::fs::write(&path, "sample_count = \"viele\"").expect("Temp-Datei schreibbar");

    let options = DemoOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(options, DemoOptions::default());
}

#[test]
fn test_saved_template_loads_back_and_seeds_state() {
    let path = temp_path("template");
    let options = DemoOptions {
        sample_count: 250,
        pick_tolerance: 0.35,
        default_points: [[0.0, 1.0], [1.0, 3.0], [3.0, 3.5], [4.5, 1.0]],
        ..DemoOptions::default()
    };
    options.save_to_file(&path).expect("Speichern sollte klappen");

    let loaded = DemoOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, options);

    let state = AppState::with_options(loaded);
    assert_eq!(state.sample_count, 250);
    assert_eq!(state.control_points.to_arrays(), options.default_points);
}

#[test]
fn test_loaded_values_are_sanitized() {
    let path = temp_path("sanitize");
    std::fs::write(&path, "sample_count = 0\npick_tolerance = 0.0\n").expect("Temp-Datei schreibbar");

    let options = DemoOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(options.sample_count, 2);
    assert_eq!(options.pick_tolerance, 0.2);
}
