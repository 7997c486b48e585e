use crate::error::Result;
use crate::models::Measurement;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::utils::constants::DEFAULT_BUFFER_SIZE;

pub struct MeasurementReader {
    has_headers: bool,
}

impl MeasurementReader {
    pub fn new() -> Self {
        Self { has_headers: true }
    }

    pub fn with_headers(has_headers: bool) -> Self {
        Self { has_headers }
    }

    /// Read measurement rows from a `station,date,prcp,tobs` CSV file
    pub fn read_measurements(&self, path: &Path) -> Result<Vec<Measurement>> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let measurements = self.read_measurements_from(reader)?;
        debug!(
            "Read {} measurements from {}",
            measurements.len(),
            path.display()
        );
        Ok(measurements)
    }

    /// Read measurement rows from any reader, keeping file order.
    /// An empty `prcp` field becomes `None`.
    pub fn read_measurements_from<R: Read>(&self, reader: R) -> Result<Vec<Measurement>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut measurements = Vec::new();
        for row in csv_reader.deserialize() {
            let measurement: Measurement = row?;
            measurements.push(measurement);
        }

        Ok(measurements)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}
