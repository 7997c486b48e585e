pub mod measurement;
pub mod series;
pub mod station;
pub mod temperature;

pub use measurement::Measurement;
pub use series::DateValue;
pub use station::Station;
pub use temperature::TemperatureSummary;
