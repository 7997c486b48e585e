use crate::error::Result;
use crate::models::Station;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use validator::Validate;

pub struct StationReader {
    has_headers: bool,
}

impl StationReader {
    pub fn new() -> Self {
        Self { has_headers: true }
    }

    pub fn with_headers(has_headers: bool) -> Self {
        Self { has_headers }
    }

    /// Read station rows from a `station,name,latitude,longitude,elevation` CSV file
    pub fn read_stations(&self, path: &Path) -> Result<Vec<Station>> {
        let file = File::open(path)?;
        let stations = self.read_stations_from(file)?;
        debug!("Read {} stations from {}", stations.len(), path.display());
        Ok(stations)
    }

    /// Read station rows from any reader, keeping file order
    pub fn read_stations_from<R: Read>(&self, reader: R) -> Result<Vec<Station>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut stations = Vec::new();
        for row in csv_reader.deserialize() {
            let station: Station = row?;
            station.validate()?;
            stations.push(station);
        }

        Ok(stations)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
