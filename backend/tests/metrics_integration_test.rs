//! Integration tests for the nutrition metrics endpoints

mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_female_moderate_profile() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/nutrition/metrics",
            r#"{"weight":60,"height":165,"age":25,"sex":"Female","activity_level":"moderate"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let metrics: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(metrics["daily_calories"], 1485);
    assert_eq!(metrics["protein_macro"], 96);
}

#[tokio::test]
async fn test_aggressive_loss_hits_calorie_floor() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/nutrition/plan",
            r#"{"weight":60,"height":165,"age":25,"sex":"female","activity_level":"light",
                "weight_goal":"lose_weight","target_weight_loss":2.0}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let plan: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(plan["metrics"]["daily_calories"], 1200);
    assert_eq!(plan["meal_plan"]["calorie_range_min"], 1200);
}

#[tokio::test]
async fn test_zero_age_is_rejected() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/nutrition/metrics",
            r#"{"weight":60,"height":165,"age":0,"sex":"female","activity_level":"moderate"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("VALIDATION_ERROR"));
    assert!(body.contains("\"field\":\"age\""));
}

#[tokio::test]
async fn test_unknown_goal_is_rejected() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/nutrition/metrics",
            r#"{"weight":60,"height":165,"age":25,"sex":"female","activity_level":"moderate","weight_goal":"bulk"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("\"field\":\"weight_goal\""));
}
