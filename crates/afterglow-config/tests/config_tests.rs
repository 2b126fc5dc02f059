//! Functional tests for savers config load, sanitize, and save round-trips.

use std::path::PathBuf;

use afterglow_config::SaversConfig;
use tempfile::TempDir;

/// Test environment with an isolated config directory
struct TestEnvironment {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestEnvironment {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("savers.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("Failed to write test config");
    }
}

#[test]
fn test_load_missing_file_is_an_error() {
    let env = TestEnvironment::new();
    assert!(SaversConfig::load_from(&env.config_path).is_err());
}

#[test]
fn test_save_then_load_roundtrip() {
    let env = TestEnvironment::new();

    let mut config = SaversConfig::default();
    config.matrix.set_delay(75);
    config.marquee.set_write("back soon");
    config.ramp.set_upper_left_corner_char('+');
    config.save_to(&env.config_path).unwrap();

    let loaded = SaversConfig::load_from(&env.config_path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.matrix.delay(), 75);
    assert_eq!(loaded.marquee.write(), "back soon");
    assert_eq!(loaded.ramp.upper_left_corner_char(), '+');
}

#[test]
fn test_load_sanitizes_hand_edits() {
    let env = TestEnvironment::new();
    env.write_config(
        r#"
        [matrix]
        delay = 0

        [disco]
        delay = -20
        minimum_red_color_level = -5
        maximum_red_color_level = 900

        [beat_fader]
        minimum_color_level = 0

        [siren]
        style = "Theremin"

        [excali_beats]
        trance_mode = true
        "#,
    );

    let config = SaversConfig::load_from(&env.config_path).unwrap();
    assert_eq!(config.matrix.delay(), 10);
    assert_eq!(config.disco.delay(), 100);
    assert_eq!(config.disco.minimum_red_color_level(), 0);
    assert_eq!(config.disco.maximum_red_color_level(), 255);
    assert_eq!(config.beat_fader.minimum_color_level(), 1);
    assert_eq!(config.siren.style(), "Cop");
    assert_eq!(config.excali_beats.trance_mode(), cfg!(unix));
}

#[test]
fn test_load_normalizes_color_spellings() {
    let env = TestEnvironment::new();
    env.write_config(
        r#"
        [glitter_matrix]
        background_color = "navy"
        foreground_color = "196"
        "#,
    );

    let config = SaversConfig::load_from(&env.config_path).unwrap();
    assert_eq!(config.glitter_matrix.background_color(), "0;0;128");
    assert_eq!(config.glitter_matrix.foreground_color(), "255;0;0");
}

#[test]
fn test_load_rejects_malformed_toml() {
    let env = TestEnvironment::new();
    env.write_config("[matrix\ndelay = 10");
    assert!(SaversConfig::load_from(&env.config_path).is_err());
}

#[test]
fn test_saved_file_has_header_comment() {
    let env = TestEnvironment::new();
    SaversConfig::default().save_to(&env.config_path).unwrap();
    let content = std::fs::read_to_string(&env.config_path).unwrap();
    assert!(content.starts_with("# Afterglow screensaver settings"));
    assert!(content.contains("[matrix]"));
    assert!(content.contains("[progress_clock]"));
}
