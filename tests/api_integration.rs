//! Integration tests for the footprint API endpoints.
//!
//! These tests verify the full request/response cycle through the HTTP API.

use axum_test::TestServer;
use serde_json::json;

use footprint::api::{AppState, router};

fn create_test_server() -> TestServer {
    TestServer::new(router(AppState::default())).unwrap()
}

fn reference_profile() -> serde_json::Value {
    json!({
        "travelKmPerDay": 25,
        "transportMode": "car",
        "carpool": "no",
        "electricityUnits": 300,
        "acUsage": "occasionally",
        "renewableEnergy": "no",
        "meatMealsPerWeek": 7,
        "dairyLitersPerDay": 0.5,
        "localFood": "no",
        "wasteKgPerWeek": 10,
        "recycle": "no",
        "waterUsageLiters": 200,
        "shoppingFreq": 3,
        "onlineOrders": 5
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_predict_reference_profile() {
    let server = create_test_server();

    let response = server.post("/predict").json(&reference_profile()).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["footprint"], 468.25);
}

#[tokio::test]
async fn test_predict_accepts_boolean_flags() {
    let server = create_test_server();

    let response = server
        .post("/predict")
        .json(&json!({
            "travelKmPerDay": 20,
            "transportMode": "car",
            "carpool": true,
            "shoppingFreq": 0,
            "onlineOrders": 0
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    // 272.5 without transportation, plus 20 km by car halved to 51.3
    assert_eq!(body["footprint"], 323.8);
}

#[tokio::test]
async fn test_footprint_report() {
    let server = create_test_server();

    let response = server.post("/footprint").json(&reference_profile()).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_kg"], 468);
    assert_eq!(body["uncategorized_kg"], 68);
    assert_eq!(body["dominant_category"], "electricity");
    assert_eq!(body["rating"], "moderate");
    assert_eq!(body["breakdown"].as_array().unwrap().len(), 5);
    assert_eq!(body["breakdown"][0]["category"], "transportation");
    assert_eq!(body["breakdown"][0]["kg"], 128);
    assert_eq!(body["breakdown"][0]["label"], "Transportation");
    assert_eq!(body["comparisons"].as_array().unwrap().len(), 4);
    assert_eq!(body["comparisons"][1]["label"], "Country Average");
    assert_eq!(body["comparisons"][1]["is_better"], false);
    assert_eq!(
        body["recommendations"]["priority"]["id"],
        "renewable_energy"
    );
    assert_eq!(
        body["recommendations"]["priority"]["impact_label"],
        "High Impact"
    );
    assert_eq!(
        body["recommendations"]["others"][0]["trees_to_offset"],
        19
    );
    assert!(body["note"].as_str().unwrap().contains("may exceed"));
}

#[tokio::test]
async fn test_footprint_transport_heavy_profile() {
    let server = create_test_server();

    let response = server
        .post("/footprint")
        .json(&json!({
            "travelKmPerDay": 100,
            "transportMode": "bike",
            "renewableEnergy": "yes"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["dominant_category"], "transportation");
    assert_eq!(
        body["recommendations"]["priority"]["id"],
        "public_transport"
    );

    let others: Vec<&str> = body["recommendations"]["others"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(others, vec!["plant_trees", "recycle_more"]);
}

#[tokio::test]
async fn test_footprint_clamps_negative_input() {
    let server = create_test_server();

    let response = server
        .post("/footprint")
        .json(&json!({ "travelKmPerDay": -50 }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["breakdown"][0]["kg"], 0);
}

#[tokio::test]
async fn test_footprint_rejects_unknown_mode() {
    let server = create_test_server();

    let response = server
        .post("/footprint")
        .json(&json!({ "transportMode": "rocket" }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_benchmarks_endpoint() {
    let server = create_test_server();

    let response = server.get("/benchmarks").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let values: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["value"].as_f64().unwrap())
        .collect();
    assert_eq!(values, vec![450.0, 320.0, 250.0, 150.0]);
}
