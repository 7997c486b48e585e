use crate::models::{Measurement, Station};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrityReport {
    pub total_measurements: usize,
    pub orphaned_measurements: usize,
    pub unknown_station_ids: Vec<String>,
    pub duplicate_station_ids: Vec<String>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.orphaned_measurements == 0 && self.duplicate_station_ids.is_empty()
    }
}

/// Reports, without enforcing, whether measurements point at known stations.
pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check_references(
        &self,
        stations: &[Station],
        measurements: &[Measurement],
    ) -> IntegrityReport {
        let mut known = HashSet::with_capacity(stations.len());
        let mut duplicates = BTreeSet::new();
        for station in stations {
            if !known.insert(station.station_id.as_str()) {
                duplicates.insert(station.station_id.clone());
            }
        }

        let mut unknown = BTreeSet::new();
        let mut orphaned = 0;
        for measurement in measurements {
            if !known.contains(measurement.station_id.as_str()) {
                orphaned += 1;
                unknown.insert(measurement.station_id.clone());
            }
        }

        IntegrityReport {
            total_measurements: measurements.len(),
            orphaned_measurements: orphaned,
            unknown_station_ids: unknown.into_iter().collect(),
            duplicate_station_ids: duplicates.into_iter().collect(),
        }
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
