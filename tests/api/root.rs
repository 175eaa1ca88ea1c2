use axum::http::{Method, StatusCode};
use drones_test_utils::prelude::*;
use serde_json::json;

use crate::util::{RequestBuilder, TestContextExt};

/// Expect the v1 root to link the drone collections by their original names
#[tokio::test]
async fn v1_root_lists_collections() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let response = test.app().get("/v1/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "competitions": "http://testserver/v1/competitions/",
            "drone-categories": "http://testserver/v1/drone-categories/",
            "drones": "http://testserver/v1/drones/",
            "pilots": "http://testserver/v1/pilots/",
        })
    );

    Ok(())
}

/// Expect the v2 root to rename drones to vehicles and link under /v2
#[tokio::test]
async fn v2_root_uses_vehicle_names() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let response = test.app().get("/v2/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "competitions": "http://testserver/v2/competitions/",
            "pilots": "http://testserver/v2/pilots/",
            "vehicle-categories": "http://testserver/v2/vehicle-categories/",
            "vehicles": "http://testserver/v2/vehicles/",
        })
    );

    Ok(())
}

/// Expect the v1 collection names to be unknown under /v2
#[tokio::test]
async fn v2_has_no_drone_paths() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let response = test.app().get("/v2/drones/").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 405 for a verb the resource does not support
#[tokio::test]
async fn unsupported_method_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let response = test
        .app()
        .send(RequestBuilder::new(Method::DELETE, "/v1/drone-categories/").build())
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
