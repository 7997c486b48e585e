pub mod dataset_analyzer;
pub mod temperature_analyzer;

pub use dataset_analyzer::{DatasetAnalyzer, DatasetOverview};
pub use temperature_analyzer::{TemperatureAccumulator, TemperatureAnalyzer};
