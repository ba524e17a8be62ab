//! Integration tests for the template catalogue endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use serde_json::json;

#[tokio::test]
async fn list_returns_seeded_templates() {
    let app = common::build_test_app();
    let response = get(&app, "/templates").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "template_001");
    assert_eq!(items[0]["name"], "Corporate Presentation");
    assert_eq!(
        items[2]["slides_included"],
        json!(["problem", "solution", "market", "business_model", "team"])
    );
}

#[tokio::test]
async fn get_template_by_id() {
    let app = common::build_test_app();
    let response = get(&app, "/templates/template_002").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Academic Research");
    assert_eq!(json["category"], "academic");
    assert_eq!(json["description"], "Template for academic research presentations");
}

#[tokio::test]
async fn get_unknown_template_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, "/templates/nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Template with ID nonexistent not found"
    );
}
