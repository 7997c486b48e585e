use serde::{Deserialize, Serialize};
use validator::Validate;

/// A fixed weather-recording location, one row of the stations file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    #[serde(rename = "station")]
    #[validate(length(min = 1))]
    pub station_id: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: f64,
}

impl Station {
    pub fn new(
        station_id: String,
        name: String,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            station_id,
            name,
            latitude,
            longitude,
            elevation,
        }
    }
}
