use crate::error::{ClimateError, Result};
use crate::utils::constants::DATE_FORMAT;
use chrono::{Months, NaiveDate};

/// Parse a stored `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date, DATE_FORMAT)?)
}

/// Format a date back into the stored `YYYY-MM-DD` text form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Subtract whole calendar months from a stored date, returning stored text.
///
/// Day-of-month is clamped to the target month, so `2016-02-29` minus 12
/// months is `2015-02-28`.
///
/// # Examples
/// ```
/// use climate_api::utils::months_before;
///
/// assert_eq!(months_before("2017-08-23", 12).unwrap(), "2016-08-23");
/// ```
pub fn months_before(date: &str, months: u32) -> Result<String> {
    let parsed = parse_date(date)?;
    let shifted = parsed.checked_sub_months(Months::new(months)).ok_or_else(|| {
        ClimateError::InvalidFormat(format!(
            "Date {} minus {} months is out of range",
            date, months
        ))
    })?;
    Ok(format_date(shifted))
}
