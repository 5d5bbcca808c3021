use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use doctor_cell::router::doctor_routes;
use doctor_cell::services::directory::DoctorDirectory;

fn create_test_app() -> Router {
    doctor_routes(Arc::new(DoctorDirectory::with_default_seed()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn listing_returns_seeded_roster() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doctors = body_json(response).await;
    assert_eq!(doctors.as_array().unwrap().len(), 3);
    assert_eq!(doctors[0]["name"], "Dr. García");
    assert_eq!(doctors[1]["specialty"], "Pediatrics");
}

#[tokio::test]
async fn get_by_id_resolves_and_404s() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Dr. Martínez");

    let response = app
        .oneshot(Request::builder().uri("/999").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
