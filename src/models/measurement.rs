use serde::{Deserialize, Serialize};

/// One station's recorded precipitation and temperature for a given date.
///
/// `date` is kept exactly as stored (`YYYY-MM-DD` text). Every date filter in
/// the crate compares it as a string, which orders the same as the calendar
/// for that fixed format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "station")]
    pub station_id: String,

    pub date: String,

    #[serde(rename = "prcp")]
    pub precipitation: Option<f64>,

    #[serde(rename = "tobs")]
    pub temperature_observation: f64,
}

impl Measurement {
    pub fn new(
        station_id: String,
        date: String,
        precipitation: Option<f64>,
        temperature_observation: f64,
    ) -> Self {
        Self {
            station_id,
            date,
            precipitation,
            temperature_observation,
        }
    }

    pub fn is_on_or_after(&self, start: &str) -> bool {
        self.date.as_str() >= start
    }

    pub fn is_on_or_before(&self, end: &str) -> bool {
        self.date.as_str() <= end
    }
}
