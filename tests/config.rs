//! config.toml 로드/저장 테스트.
use rvp_blending_toolbox::config::{load_or_default, Config, ConfigError};
use rvp_blending_toolbox::units::{PressureUnit, VolumeUnit};

#[test]
fn missing_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let again = load_or_default(&path).expect("reload");
    assert_eq!(again, cfg);
}

#[test]
fn saved_changes_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "en".into();
    cfg.default_units.pressure = PressureUnit::KiloPascal;
    cfg.default_units.volume = VolumeUnit::CubicMeter;
    cfg.limits.max_butane_pct = 15.0;
    cfg.save(&path).expect("save");
    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"ko\"\n\n[limits]\nmax_rvp = 14.0\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.limits.max_rvp, 14.0);
    assert_eq!(cfg.limits.min_rvp, 7.0);
    assert_eq!(cfg.economics.base_cost_per_gal, 0.90);
}

#[test]
fn inverted_limits_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[limits]\nmin_rvp = 16.0\nmax_rvp = 15.0\n").expect("write");
    let err = load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{err:?}");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").expect("write");
    let err = load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)), "{err:?}");
}
