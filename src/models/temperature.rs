use serde::ser::{Serialize, Serializer};

/// Minimum, mean and maximum temperature over a filtered set of measurements.
///
/// Each value is `None` when the set was empty. Serializes as the JSON array
/// `[min, avg, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureSummary {
    pub fn new(min: f64, avg: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            avg: Some(avg),
            max: Some(max),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }

    pub fn as_array(&self) -> [Option<f64>; 3] {
        [self.min, self.avg, self.max]
    }

    pub fn summary(&self) -> String {
        match (self.min, self.avg, self.max) {
            (Some(min), Some(avg), Some(max)) => {
                format!("min={:.1}, avg={:.1}, max={:.1}", min, avg, max)
            }
            _ => "No measurements".to_string(),
        }
    }
}

impl Serialize for TemperatureSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.as_array().serialize(serializer)
    }
}
