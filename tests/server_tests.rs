//! HTTP behaviour of the map server.

#![cfg(feature = "server")]

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use pic2map::{
    core::config::MapConfig,
    server::{router, AppState},
    LatLng, LocationDb,
};
use tower::ServiceExt;

async fn get(db: LocationDb, map: MapConfig, uri: &str) -> Response {
    router(AppState::new(db, map))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_renders_markers() {
    let (_dir, db) = common::temp_db().await;
    db.insert(&[
        common::row("/photos/a.jpg", 10.0, 20.0),
        common::row("/photos/b.jpg", -10.0, -20.0),
    ])
    .await
    .unwrap();

    let response = get(db, MapConfig::default(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("L.map(\"map\").setView([40.2001925,-89.0876265], 3)"));
    assert!(page.contains("L.marker([10.0,20.0])"));
    assert!(page.contains("Filename: /photos/b.jpg"));
}

#[tokio::test]
async fn test_index_centers_on_locations() {
    let (_dir, db) = common::temp_db().await;
    db.insert(&[
        common::row("/photos/a.jpg", 10.0, 20.0),
        common::row("/photos/b.jpg", 20.0, 40.0),
    ])
    .await
    .unwrap();
    let map = MapConfig {
        center_on_locations: true,
        ..MapConfig::default()
    };

    let page = body_text(get(db, map, "/").await).await;
    let center = LatLng::new(15.0, 30.0);
    assert!(page.contains(&format!("setView([{:?},{:?}], 3)", center.lat, center.lng)));
}

#[tokio::test]
async fn test_index_empty_database() {
    let (_dir, db) = common::temp_db().await;

    let response = get(db, MapConfig::default(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("L.marker"));
}

#[tokio::test]
async fn test_locations_json() {
    let (_dir, db) = common::temp_db().await;
    db.insert(&[common::row("/photos/a.jpg", 1.5, -2.5)])
        .await
        .unwrap();

    let response = get(db, MapConfig::default(), "/locations").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"latitude": 1.5, "longitude": -2.5, "filename": "/photos/a.jpg"}])
    );
}

#[tokio::test]
async fn test_closed_database_is_an_error() {
    let (_dir, db) = common::temp_db().await;
    db.clone().close().await;

    let response = get(db, MapConfig::default(), "/locations").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_unknown_route() {
    let (_dir, db) = common::temp_db().await;
    let response = get(db, MapConfig::default(), "/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
