use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use climate_api::models::{Measurement, Station};
use climate_api::server::router;
use climate_api::store::Dataset;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn station(id: &str, name: &str) -> Station {
    Station::new(id.to_string(), name.to_string(), 21.2716, -157.8168, 3.0)
}

fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement::new(station.to_string(), date.to_string(), prcp, tobs)
}

fn test_dataset() -> Arc<Dataset> {
    Arc::new(Dataset::from_records(
        vec![
            station("USC00519397", "WAIKIKI 717.2, HI US"),
            station("USC00513117", "KANEOHE 838.1, HI US"),
        ],
        vec![
            measurement("USC00519397", "2016-08-22", Some(0.5), 70.0),
            measurement("USC00519397", "2016-08-23", Some(0.0), 81.0),
            measurement("USC00513117", "2017-01-01", None, 10.0),
            measurement("USC00519397", "2017-01-01", Some(0.2), 20.0),
            measurement("USC00519397", "2017-08-23", Some(0.0), 81.0),
            measurement("USC00513117", "2017-08-23", Some(0.08), 82.0),
        ],
    ))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_index_lists_routes() {
    let (status, body) = get(router(test_dataset()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/v1.0/precipitation"));
    assert!(body.contains("/api/v1.0/stations"));
    assert!(body.contains("/api/v1.0/tobs"));
    assert!(body.contains("/api/v1.0/&lt;start&gt;/&lt;end&gt;"));
}

#[tokio::test]
async fn test_precipitation_has_one_entry_per_row() {
    let (status, body) = get_json(router(test_dataset()), "/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"2016-08-22": 0.5},
            {"2016-08-23": 0.0},
            {"2017-01-01": null},
            {"2017-01-01": 0.2},
            {"2017-08-23": 0.0},
            {"2017-08-23": 0.08}
        ])
    );
}

#[tokio::test]
async fn test_stations_lists_ids_only() {
    let (status, body) = get_json(router(test_dataset()), "/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["USC00519397", "USC00513117"]));
}

#[tokio::test]
async fn test_tobs_covers_last_twelve_months() {
    let (status, body) = get_json(router(test_dataset()), "/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"2016-08-23": 81.0},
            {"2017-01-01": 10.0},
            {"2017-01-01": 20.0},
            {"2017-08-23": 81.0},
            {"2017-08-23": 82.0}
        ])
    );
}

#[tokio::test]
async fn test_tobs_on_empty_dataset_is_server_error() {
    let dataset = Arc::new(Dataset::from_records(
        vec![station("USC00519397", "WAIKIKI")],
        Vec::new(),
    ));

    let (status, body) = get_json(router(dataset.clone()), "/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Dataset contains no measurements"}));
    assert_eq!(dataset.active_sessions(), 0);
}

#[tokio::test]
async fn test_start_summary() {
    let (status, body) = get_json(router(test_dataset()), "/api/v1.0/2017-08-23").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([81.0, 81.5, 82.0]));
}

#[tokio::test]
async fn test_single_day_summary() {
    let (status, body) =
        get_json(router(test_dataset()), "/api/v1.0/2017-01-01/2017-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([10.0, 15.0, 20.0]));
}

#[tokio::test]
async fn test_inverted_range_is_null_triple() {
    let (status, body) = get(router(test_dataset()), "/api/v1.0/2017-08-23/2016-08-23").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[null,null,null]");
}

#[tokio::test]
async fn test_malformed_start_is_null_triple() {
    let (status, body) = get(router(test_dataset()), "/api/v1.0/yesterday").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[null,null,null]");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get(router(test_dataset()), "/api/v1.0/a/b/c").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_are_byte_identical() {
    let dataset = test_dataset();

    for uri in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/2016-08-23",
        "/api/v1.0/2016-08-23/2017-01-01",
    ] {
        let (_, first) = get(router(dataset.clone()), uri).await;
        let (_, second) = get(router(dataset.clone()), uri).await;
        assert_eq!(first, second, "{} is not idempotent", uri);
    }

    assert_eq!(dataset.active_sessions(), 0);
}
