use climate_api::analyzers::DatasetAnalyzer;
use climate_api::queries::ClimateQueries;
use climate_api::store::Dataset;
use std::path::PathBuf;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("Resources")
        .join(name)
}

fn load_sample() -> Dataset {
    Dataset::load(
        &resource("hawaii_measurements.csv"),
        &resource("hawaii_stations.csv"),
    )
    .expect("bundled sample dataset should load")
}

/// (date, tobs) pairs read straight from the file, bypassing the crate
fn raw_rows() -> Vec<(String, f64)> {
    let contents = std::fs::read_to_string(resource("hawaii_measurements.csv")).unwrap();
    contents
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            (fields[1].to_string(), fields[3].parse().unwrap())
        })
        .collect()
}

#[test]
fn test_sample_dataset_is_consistent() {
    let dataset = load_sample();
    let overview = DatasetAnalyzer::new().analyze(&dataset.session());

    assert_eq!(overview.station_count, 9);
    assert_eq!(overview.measurement_count, raw_rows().len());
    assert!(overview.integrity.is_clean());
    assert_eq!(
        overview.date_range,
        Some(("2010-01-01".to_string(), "2017-08-23".to_string()))
    );
}

#[test]
fn test_precipitation_matches_row_count() {
    let dataset = load_sample();
    let series = dataset.session().precipitation();
    let rows = raw_rows();

    assert_eq!(series.len(), rows.len());
    for (entry, (date, _)) in series.iter().zip(rows.iter()) {
        assert_eq!(&entry.date, date);
    }
}

#[test]
fn test_tobs_window_on_sample() {
    let dataset = load_sample();
    let series = dataset.session().recent_temperatures().unwrap();

    let expected: Vec<(String, f64)> = raw_rows()
        .into_iter()
        .filter(|(date, _)| date.as_str() >= "2016-08-23")
        .collect();

    assert_eq!(series.len(), expected.len());
    for (entry, (date, tobs)) in series.iter().zip(expected.iter()) {
        assert_eq!(&entry.date, date);
        assert_eq!(entry.value, *tobs);
    }
    assert!(series.iter().all(|entry| entry.date.as_str() >= "2016-08-23"));
}

#[test]
fn test_summary_matches_manual_aggregate() {
    let dataset = load_sample();
    let summary = dataset.session().summary_between("2017-01-01", "2017-06-30");

    let temps: Vec<f64> = raw_rows()
        .into_iter()
        .filter(|(date, _)| date.as_str() >= "2017-01-01" && date.as_str() <= "2017-06-30")
        .map(|(_, tobs)| tobs)
        .collect();
    assert!(!temps.is_empty());

    let min = temps.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let avg = temps.iter().sum::<f64>() / temps.len() as f64;

    assert_eq!(summary.min, Some(min));
    assert_eq!(summary.max, Some(max));
    assert!((summary.avg.unwrap() - avg).abs() < 1e-9);
}
