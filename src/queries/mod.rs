pub mod climate_queries;

pub use climate_queries::ClimateQueries;
