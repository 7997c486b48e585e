use crate::analyzers::TemperatureAnalyzer;
use crate::error::{ClimateError, Result};
use crate::models::{DateValue, TemperatureSummary};
use crate::store::Session;
use crate::utils::constants::RECENT_WINDOW_MONTHS;
use crate::utils::months_before;
use tracing::debug;

/// The read operations served by the API.
///
/// All results keep the storage order of the underlying rows. Date bounds
/// are compared as text and are not validated.
pub trait ClimateQueries {
    /// Every measurement as `{date: precipitation}`, duplicates included
    fn precipitation(&self) -> Vec<DateValue<Option<f64>>>;

    /// Every station id, one per station row
    fn station_ids(&self) -> Vec<String>;

    /// `{date: tobs}` for every measurement within 12 calendar months of the
    /// latest recorded date. Fails on an empty measurement table.
    fn recent_temperatures(&self) -> Result<Vec<DateValue<f64>>>;

    /// `[min, avg, max]` temperature for `date >= start`
    fn summary_from(&self, start: &str) -> TemperatureSummary;

    /// `[min, avg, max]` temperature for `start <= date <= end`
    fn summary_between(&self, start: &str, end: &str) -> TemperatureSummary;
}

impl ClimateQueries for Session<'_> {
    fn precipitation(&self) -> Vec<DateValue<Option<f64>>> {
        self.measurements()
            .iter()
            .map(|m| DateValue::new(m.date.clone(), m.precipitation))
            .collect()
    }

    fn station_ids(&self) -> Vec<String> {
        self.stations()
            .iter()
            .map(|s| s.station_id.clone())
            .collect()
    }

    fn recent_temperatures(&self) -> Result<Vec<DateValue<f64>>> {
        let max_date = self
            .measurements()
            .iter()
            .map(|m| m.date.as_str())
            .max()
            .ok_or(ClimateError::EmptyDataset)?;

        let year_ago = months_before(max_date, RECENT_WINDOW_MONTHS)?;
        debug!("Latest date {}, window starts {}", max_date, year_ago);

        Ok(self
            .measurements()
            .iter()
            .filter(|m| m.is_on_or_after(&year_ago))
            .map(|m| DateValue::new(m.date.clone(), m.temperature_observation))
            .collect())
    }

    fn summary_from(&self, start: &str) -> TemperatureSummary {
        TemperatureAnalyzer::new().summarize_range(self.measurements(), start, None)
    }

    fn summary_between(&self, start: &str, end: &str) -> TemperatureSummary {
        TemperatureAnalyzer::new().summarize_range(self.measurements(), start, Some(end))
    }
}
