pub mod integrity_checker;

pub use integrity_checker::{IntegrityChecker, IntegrityReport};
