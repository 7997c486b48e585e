use crate::error::Result;
use crate::models::{DateValue, TemperatureSummary};
use crate::queries::ClimateQueries;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use tracing::debug;

const INDEX_HTML: &str = "Available Routes:<br/>\
    /api/v1.0/precipitation<br/>\
    /api/v1.0/stations<br/>\
    /api/v1.0/tobs<br/>\
    /api/v1.0/&lt;start&gt;<br/>\
    /api/v1.0/&lt;start&gt;/&lt;end&gt;";

/// List all available api routes
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn precipitation(State(dataset): State<AppState>) -> Json<Vec<DateValue<Option<f64>>>> {
    let session = dataset.session();
    debug!(session = session.id(), "Precipitation series requested");
    Json(session.precipitation())
}

pub async fn stations(State(dataset): State<AppState>) -> Json<Vec<String>> {
    let session = dataset.session();
    debug!(session = session.id(), "Station list requested");
    Json(session.station_ids())
}

pub async fn tobs(State(dataset): State<AppState>) -> Result<Json<Vec<DateValue<f64>>>> {
    let session = dataset.session();
    debug!(session = session.id(), "Recent temperature observations requested");
    Ok(Json(session.recent_temperatures()?))
}

pub async fn summary_from(
    State(dataset): State<AppState>,
    Path(start): Path<String>,
) -> Json<TemperatureSummary> {
    let session = dataset.session();
    debug!(session = session.id(), %start, "Temperature summary requested");
    Json(session.summary_from(&start))
}

pub async fn summary_between(
    State(dataset): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Json<TemperatureSummary> {
    let session = dataset.session();
    debug!(session = session.id(), %start, %end, "Temperature summary requested");
    Json(session.summary_between(&start, &end))
}
