use axum::http::StatusCode;
use drones_test_utils::prelude::*;
use serde_json::json;

use crate::util::TestContextExt;

/// Expect users to list the drones they own
#[tokio::test]
async fn lists_users_with_drones() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME).await?;
    test.user().insert_user("other-pilot").await?;
    let (_, drone) = test.drone().insert_drone_with_category("Falcon", user.id).await?;
    let app = test.app();

    let response = app.get("/v1/users/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 2);

    let detail = app.get(&format!("/v1/users/{}", user.id)).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["username"], TEST_USERNAME);
    assert_eq!(
        detail.body["drones"],
        json!([{
            "url": format!("http://testserver/v1/drones/{}", drone.id),
            "name": "Falcon",
        }])
    );

    Ok(())
}

/// Expect 404 for an unknown user
#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let response = test.app().get("/v1/users/99").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);

    Ok(())
}
