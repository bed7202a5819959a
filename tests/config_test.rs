use clap::{CommandFactory, FromArgMatches, Parser};
use microtiter::config::{sanitize_aoi_size, ConfigRecord, Configuration};
use microtiter::error::MicrotiterError;
use microtiter::geometry::Point;
use microtiter::methods::{AggregationMethod, ScoringMethod};
use std::collections::BTreeSet;
use std::fs;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: ConfigRecord,
}

fn parse(args: &[&str]) -> (ConfigRecord, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_record_uses_persisted_key_names() {
    let value = serde_json::to_value(ConfigRecord::default()).unwrap();
    let keys: BTreeSet<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    let expected: BTreeSet<&str> = [
        "path_samples",
        "path_control",
        "top_left_x",
        "top_left_y",
        "bottom_right_x",
        "bottom_right_y",
        "n_rows",
        "n_columns",
        "control_x",
        "control_y",
        "AoI_size",
        "aggregation_method",
        "scoring_method",
    ]
    .into_iter()
    .collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Configuration {
        path_samples: "plate_07.jpg".to_string(),
        path_control: "blank.jpg".to_string(),
        top_left: Point::new(212, 157),
        bottom_right: Point::new(1873, 1260),
        rows: 8,
        columns: 12,
        control_position: Point::new(40, 60),
        aoi_size: 9,
        aggregation_method: AggregationMethod::WeightedMean,
        scoring_method: ScoringMethod::DistanceSaturation,
    };
    config.save_to_file(&path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"AoI_size\": 9"));
    assert!(raw.contains("\"scoring_method\": \"distance_saturation\""));

    assert_eq!(Configuration::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_loads_hand_written_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "path_samples": "s.jpeg", "path_control": "c.jpeg",
            "top_left_x": 10, "top_left_y": 20,
            "bottom_right_x": 110, "bottom_right_y": 220,
            "n_rows": 3, "n_columns": 2,
            "control_x": 5, "control_y": 6,
            "AoI_size": 3,
            "aggregation_method": "arithmetic_mean",
            "scoring_method": "euclidian_hsv"
        }"#,
    )
    .unwrap();

    let config = Configuration::load_from_file(&path).unwrap();
    assert_eq!(config.top_left, Point::new(10, 20));
    assert_eq!((config.rows, config.columns), (3, 2));
    assert_eq!(config.scoring_method, ScoringMethod::EuclidianHsv);
}

#[test]
fn test_unknown_method_code_is_rejected() {
    let record = ConfigRecord {
        scoring_method: "manhattan".to_string(),
        ..ConfigRecord::default()
    };
    match Configuration::try_from(record) {
        Err(MicrotiterError::UnknownMethod { kind, code }) => {
            assert_eq!(kind, "scoring");
            assert_eq!(code, "manhattan");
        }
        other => panic!("expected UnknownMethod, got {:?}", other),
    }
}

#[test]
fn test_even_aoi_in_record_is_invalid_until_sanitized() {
    let mut record = ConfigRecord {
        aoi_size: 6,
        ..ConfigRecord::default()
    };
    assert!(matches!(
        Configuration::try_from(record.clone()),
        Err(MicrotiterError::InvalidConfiguration(_))
    ));

    record.aoi_size = sanitize_aoi_size(record.aoi_size);
    assert_eq!(Configuration::try_from(record).unwrap().aoi_size, 7);
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ \"n_rows\": 3 }").unwrap();
    assert!(matches!(
        ConfigRecord::load_from_file(&path),
        Err(MicrotiterError::Json(_))
    ));
}

#[test]
fn test_cli_defaults_match_record_defaults() {
    let (record, _) = parse(&["test"]);
    assert_eq!(record, ConfigRecord::default());
}

#[test]
fn test_merge_only_takes_typed_flags() {
    let mut base = ConfigRecord {
        n_columns: 12,
        n_rows: 8,
        scoring_method: "euclidian_hsv".to_string(),
        ..ConfigRecord::default()
    };
    let (cli, matches) = parse(&[
        "test",
        "--n-rows",
        "4",
        "--aoi-size",
        "11",
        "--path-samples",
        "other.png",
    ]);

    base.merge_from_cli(&cli, &matches);

    assert_eq!(base.n_rows, 4);
    assert_eq!(base.aoi_size, 11);
    assert_eq!(base.path_samples, "other.png");
    // untouched on the command line, so the file values survive
    assert_eq!(base.n_columns, 12);
    assert_eq!(base.scoring_method, "euclidian_hsv");
}
