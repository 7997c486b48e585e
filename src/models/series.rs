use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single `{date: value}` entry of a date-keyed series.
///
/// Serializes as a one-key JSON object, so a series of these keeps duplicate
/// dates as separate entries instead of merging them into one map.
#[derive(Debug, Clone, PartialEq)]
pub struct DateValue<V> {
    pub date: String,
    pub value: V,
}

impl<V> DateValue<V> {
    pub fn new(date: impl Into<String>, value: V) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

impl<V: Serialize> Serialize for DateValue<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.value)?;
        map.end()
    }
}
