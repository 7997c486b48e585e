pub mod constants;
pub mod dates;

pub use constants::*;
pub use dates::{format_date, months_before, parse_date};
