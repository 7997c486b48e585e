use crate::models::{Measurement, TemperatureSummary};

/// Running min/sum/max over temperature observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureAccumulator {
    count: usize,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl TemperatureAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, temperature: f64) {
        self.count += 1;
        self.sum += temperature;
        self.min = Some(self.min.map_or(temperature, |m| m.min(temperature)));
        self.max = Some(self.max.map_or(temperature, |m| m.max(temperature)));
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Empty input yields all-`None`, like SQL aggregates over no rows
    pub fn finish(&self) -> TemperatureSummary {
        if self.count == 0 {
            return TemperatureSummary::empty();
        }

        TemperatureSummary {
            min: self.min,
            avg: Some(self.sum / self.count as f64),
            max: self.max,
        }
    }
}

/// Aggregates temperature observations over inclusive string date bounds.
pub struct TemperatureAnalyzer;

impl TemperatureAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize<'a, I>(&self, measurements: I) -> TemperatureSummary
    where
        I: IntoIterator<Item = &'a Measurement>,
    {
        let mut acc = TemperatureAccumulator::new();
        for measurement in measurements {
            acc.add(measurement.temperature_observation);
        }
        acc.finish()
    }

    /// Summarize measurements with `start <= date` and, when given, `date <= end`
    pub fn summarize_range(
        &self,
        measurements: &[Measurement],
        start: &str,
        end: Option<&str>,
    ) -> TemperatureSummary {
        self.summarize(measurements.iter().filter(|m| {
            m.is_on_or_after(start) && end.map_or(true, |end| m.is_on_or_before(end))
        }))
    }
}

impl Default for TemperatureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
