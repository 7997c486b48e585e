use crate::error::Result;
use crate::models::{Measurement, Station};
use crate::processors::IntegrityChecker;
use crate::readers::{MeasurementReader, StationReader};
use crate::store::Session;
use std::path::Path;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::{info, warn};

/// Both tables of the climate dataset, in file order.
#[derive(Debug)]
pub struct Dataset {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
    orphaned_measurements: usize,
    active_sessions: AtomicUsize,
    next_session_id: AtomicU64,
}

impl Dataset {
    /// Load both CSV files. Any read, parse or validation failure is fatal.
    pub fn load(measurements_path: &Path, stations_path: &Path) -> Result<Self> {
        let stations = StationReader::new().read_stations(stations_path)?;
        let measurements = MeasurementReader::new().read_measurements(measurements_path)?;

        info!(
            "Loaded {} stations from {} and {} measurements from {}",
            stations.len(),
            stations_path.display(),
            measurements.len(),
            measurements_path.display()
        );

        Ok(Self::from_records(stations, measurements))
    }

    pub fn from_records(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        let report = IntegrityChecker::new().check_references(&stations, &measurements);
        if report.orphaned_measurements > 0 {
            warn!(
                "{} measurements reference unknown stations: {}",
                report.orphaned_measurements,
                report.unknown_station_ids.join(", ")
            );
        }

        Self {
            stations,
            measurements,
            orphaned_measurements: report.orphaned_measurements,
            active_sessions: AtomicUsize::new(0),
            next_session_id: AtomicU64::new(1),
        }
    }

    /// Open a scoped read session over the dataset
    pub fn session(&self) -> Session<'_> {
        self.active_sessions.fetch_add(1, Ordering::SeqCst);
        let id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
        Session::new(self, id)
    }

    /// Number of sessions opened and not yet dropped
    pub fn active_sessions(&self) -> usize {
        self.active_sessions.load(Ordering::SeqCst)
    }

    pub(crate) fn release_session(&self) {
        self.active_sessions.fetch_sub(1, Ordering::SeqCst);
    }

    pub(crate) fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub(crate) fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    pub fn orphaned_measurements(&self) -> usize {
        self.orphaned_measurements
    }
}
