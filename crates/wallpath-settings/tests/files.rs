use std::fs;
use tempfile::TempDir;
use wallpath_core::{CoveragePattern, ObstacleSpec, Point, Trajectory, WallSpec};
use wallpath_settings::{
    Config, ConfigError, LogFormat, PersistenceError, PlanJob, SettingsError, TrajectoryRecord,
};

#[test]
fn test_config_saved_as_toml_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::new();
    config.planner.max_points = 12_000;
    config.planner.compress_tolerance = Some(1e-6);
    config.planner.settings.pattern = CoveragePattern::Spiral;
    config.logging.format = LogFormat::Json;
    config.save_to_file(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[planner.settings]"));
    assert!(text.contains("pattern = \"spiral\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_json_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"planner": {"settings": {"spacing": 0.2}}, "output": {"pretty_json": false}}"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.planner.settings.spacing, 0.2);
    assert!(!config.output.pretty_json);
    assert_eq!(config.planner.max_points, 50_000);
}

#[test]
fn test_invalid_config_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[planner.settings]\nspacing = 4.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(ConfigError::Planner(_))));

    fs::write(&path, "[planner\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::TomlError(_))
    ));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError { .. }));
}

#[test]
fn test_explicit_path_wins_over_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::new();
    config.logging.level = "debug".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_or_default(Some(&path)).unwrap();
    assert_eq!(loaded.logging.level, "debug");
}

#[test]
fn test_job_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.json");

    let mut job = PlanJob::new(
        WallSpec::new(4.0, 2.5),
        vec![ObstacleSpec::new(1.0, 1.0, 0.8, 1.2)],
    );
    job.name = Some("kitchen".to_string());
    job.save_to_file(&path).unwrap();

    let loaded = PlanJob::load_from_file(&path).unwrap();
    assert_eq!(loaded, job);

    fs::write(&path, r#"{"obstacles": []}"#).unwrap();
    assert!(matches!(
        PlanJob::load_from_file(&path),
        Err(PersistenceError::InvalidJob { .. })
    ));
}

#[test]
fn test_trajectory_record_file() {
    let dir = TempDir::new().unwrap();
    let job = PlanJob::new(WallSpec::new(1.0, 1.0), vec![]);
    let points = vec![Point::new(0.0, 0.5), Point::new(1.0, 0.5)];
    let record = TrajectoryRecord::new(
        &job,
        job.resolve_settings(&Default::default()),
        Trajectory::from_parts(points, 1.0, 0.1),
    );

    let path = dir.path().join(record.file_name());
    record.save_to_file(&path, false).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains('\n'));
    assert!(text.contains(&record.id.to_string()));

    let loaded = TrajectoryRecord::load_from_file(&path).unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.coverage.coverage_efficiency_pct, 100.0);
}

#[test]
fn test_edited_record_is_rejected() {
    let dir = TempDir::new().unwrap();
    let job = PlanJob::new(WallSpec::new(1.0, 1.0), vec![]);
    let points = vec![Point::new(0.0, 0.5), Point::new(1.0, 0.5)];
    let record = TrajectoryRecord::new(
        &job,
        job.resolve_settings(&Default::default()),
        Trajectory::from_parts(points, 1.0, 0.1),
    );

    let mut json = serde_json::to_value(&record).unwrap();
    json["trajectory"]["length_m"] = serde_json::json!(0.25);
    let path = dir.path().join(record.file_name());
    fs::write(&path, json.to_string()).unwrap();

    assert!(matches!(
        TrajectoryRecord::load_from_file(&path),
        Err(PersistenceError::JsonError(_))
    ));
}
