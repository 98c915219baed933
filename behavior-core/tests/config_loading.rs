//! Config file loading
//!
//! - JSON and RON both load, missing sections fall back to defaults
//! - Unknown extensions and missing files are errors, not panics
//! - Invalid tuning is rejected at load time

use std::io::Write;

use haunt_core::logging::LogLevel;
use haunt_core::{HauntConfig, HauntError, MonsterKind};
use tempfile::{Builder, NamedTempFile};

fn write_config(suffix: &str, body: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp config");
    file.write_all(body.as_bytes()).expect("write temp config");
    file
}

#[test]
fn json_overrides_merge_with_defaults() {
    let file = write_config(
        ".json",
        r#"{
            "seed": 7,
            "bestiary": {
                "wraith": {
                    "speed": 200.0,
                    "detection_range": 180.0,
                    "attack_range": 32.0,
                    "flashlight_death_time": 2500.0,
                    "max_health": 1
                }
            }
        }"#,
    );
    let config = HauntConfig::load(file.path()).expect("valid json config");
    assert_eq!(config.seed, 7);
    assert_eq!(config.tick_rate, 60);
    assert_eq!(config.bestiary.tuning(MonsterKind::Wraith).speed, 200.0);
    assert_eq!(
        config.bestiary.ghost,
        HauntConfig::default().bestiary.ghost
    );
}

#[test]
fn ron_config_loads() {
    let file = write_config(
        ".ron",
        r#"(
            seed: 99,
            tick_rate: 30,
            logging: (
                level: Warn,
                overrides: {"haunt_core::monster": Debug},
                timestamps: false,
            ),
        )"#,
    );
    let config = HauntConfig::load(file.path()).expect("valid ron config");
    assert_eq!(config.seed, 99);
    assert_eq!(config.tick_rate, 30);
    assert!((config.tick_ms() - 1000.0 / 30.0).abs() < 1e-4);
    assert_eq!(config.logging.level, LogLevel::Warn);
    assert!(!config.logging.timestamps);
    assert_eq!(
        config.logging.directives(),
        "warn,haunt_core::monster=debug"
    );
}

#[test]
fn saved_json_round_trips_through_load() {
    let mut config = HauntConfig::default();
    config.seed = 1234;
    config.bestiary.poltergeist.max_health = 5;
    let file = write_config(".json", &config.to_json().expect("serialize"));
    assert_eq!(HauntConfig::load(file.path()).expect("reload"), config);
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_config(".toml", "seed = 1");
    assert!(matches!(
        HauntConfig::load(file.path()),
        Err(HauntError::UnsupportedFormat(_))
    ));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nowhere.json");
    match HauntConfig::load(&path) {
        Err(HauntError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_json_error() {
    let file = write_config(".json", "{ \"seed\": ");
    assert!(matches!(
        HauntConfig::load(file.path()),
        Err(HauntError::Json(_))
    ));
}

#[test]
fn malformed_ron_is_a_ron_error() {
    let file = write_config(".ron", "(seed: )");
    assert!(matches!(
        HauntConfig::load(file.path()),
        Err(HauntError::Ron(_))
    ));
}

#[test]
fn negative_tuning_is_rejected() {
    let file = write_config(
        ".json",
        r#"{
            "bestiary": {
                "shadow": {
                    "speed": 0.0,
                    "detection_range": -5.0,
                    "attack_range": 32.0,
                    "flashlight_death_time": 1000.0,
                    "max_health": 1
                }
            }
        }"#,
    );
    match HauntConfig::load(file.path()) {
        Err(HauntError::InvalidTuning { kind, field, .. }) => {
            assert_eq!(kind, MonsterKind::Shadow);
            assert_eq!(field, "detection_range");
        }
        other => panic!("expected InvalidTuning, got {other:?}"),
    }
}

#[test]
fn zero_tick_rate_is_rejected() {
    let file = write_config(".json", r#"{ "tick_rate": 0 }"#);
    assert!(matches!(
        HauntConfig::load(file.path()),
        Err(HauntError::InvalidConfig(_))
    ));
}
