use crate::analyzers::TemperatureAnalyzer;
use crate::models::TemperatureSummary;
use crate::processors::{IntegrityChecker, IntegrityReport};
use crate::store::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetOverview {
    pub station_count: usize,
    pub measurement_count: usize,
    pub date_range: Option<(String, String)>,
    pub missing_precipitation: usize,
    pub temperature: TemperatureSummary,
    pub integrity: IntegrityReport,
}

impl DatasetOverview {
    pub fn summary(&self) -> String {
        let date_range = match &self.date_range {
            Some((first, last)) => format!("{} to {}", first, last),
            None => "No measurements".to_string(),
        };

        format!(
            "Stations: {}\n\
            Measurements: {} total ({} without precipitation)\n\
            Date Range: {}\n\
            Temperature: {}\n\
            Orphaned Measurements: {}",
            self.station_count,
            self.measurement_count,
            self.missing_precipitation,
            date_range,
            self.temperature.summary(),
            self.integrity.orphaned_measurements
        )
    }
}

/// Whole-dataset statistics for the `inspect` command.
pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, session: &Session<'_>) -> DatasetOverview {
        let measurements = session.measurements();

        let first = measurements.iter().map(|m| m.date.as_str()).min();
        let last = measurements.iter().map(|m| m.date.as_str()).max();
        let date_range = first
            .zip(last)
            .map(|(first, last)| (first.to_string(), last.to_string()));

        DatasetOverview {
            station_count: session.stations().len(),
            measurement_count: measurements.len(),
            date_range,
            missing_precipitation: measurements
                .iter()
                .filter(|m| m.precipitation.is_none())
                .count(),
            temperature: TemperatureAnalyzer::new().summarize(measurements),
            integrity: IntegrityChecker::new().check_references(session.stations(), measurements),
        }
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
