use axum::http::{header::WWW_AUTHENTICATE, Method, StatusCode};
use drones_test_utils::prelude::*;
use serde_json::json;

use crate::util::{RequestBuilder, TestContextExt};

mod create {
    use super::*;

    /// Expect the authenticated caller to become the owner of the new drone
    #[tokio::test]
    async fn assigns_caller_as_owner() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_user(TEST_USERNAME)
            .with_category("Quadcopter")
            .build()
            .await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::POST, "/v1/drones/")
                    .basic_auth(TEST_USERNAME, TEST_PASSWORD)
                    .json(json!({
                        "name": "Falcon",
                        "drone_category": "Quadcopter",
                        "manufacturing_date": "2023-02-20T02:02:00.716312Z",
                        "has_it_competed": false,
                        "owner": "someone-else",
                    }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body["owner"], TEST_USERNAME);
        assert_eq!(response.body["drone_category"], "Quadcopter");
        assert_eq!(response.body["has_it_competed"], false);

        Ok(())
    }

    /// Expect 401 with a basic challenge for anonymous writes
    #[tokio::test]
    async fn requires_authentication() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_category("Quadcopter")
            .build()
            .await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::POST, "/v1/drones/")
                    .json(json!({
                        "name": "Falcon",
                        "drone_category": "Quadcopter",
                        "manufacturing_date": "2023-02-20T02:02:00Z",
                    }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers.get(WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"api\""
        );
        assert_eq!(
            response.body,
            json!({ "detail": "Authentication credentials were not provided." })
        );

        Ok(())
    }

    /// Expect 401 for a wrong password even though the request is well formed
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_user(TEST_USERNAME)
            .build()
            .await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::GET, "/v1/drones/")
                    .basic_auth(TEST_USERNAME, "wrong")
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect 403 when a user other than the owner modifies the drone
    #[tokio::test]
    async fn forbids_non_owner() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let owner = test.user().insert_user(TEST_USERNAME).await?;
        test.user().insert_user("other-pilot").await?;
        let (_, drone) = test.drone().insert_drone_with_category("Falcon", owner.id).await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::PATCH, &format!("/v1/drones/{}", drone.id))
                    .basic_auth("other-pilot", TEST_PASSWORD)
                    .json(json!({ "has_it_competed": true }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(
            response.body,
            json!({ "detail": "You do not have permission to perform this action." })
        );

        Ok(())
    }

    /// Expect the owner to update a single field with PATCH
    #[tokio::test]
    async fn owner_can_patch() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let owner = test.user().insert_user(TEST_USERNAME).await?;
        let (_, drone) = test.drone().insert_drone_with_category("Falcon", owner.id).await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::PATCH, &format!("/v1/drones/{}", drone.id))
                    .basic_auth(TEST_USERNAME, TEST_PASSWORD)
                    .json(json!({ "has_it_competed": true }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["has_it_competed"], true);
        assert_eq!(response.body["name"], "Falcon");
        assert_eq!(response.body["owner"], TEST_USERNAME);

        Ok(())
    }

    /// Expect PUT without the required fields to fail validation
    #[tokio::test]
    async fn put_requires_all_fields() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let owner = test.user().insert_user(TEST_USERNAME).await?;
        let (_, drone) = test.drone().insert_drone_with_category("Falcon", owner.id).await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::PUT, &format!("/v1/drones/{}", drone.id))
                    .basic_auth(TEST_USERNAME, TEST_PASSWORD)
                    .json(json!({ "has_it_competed": true }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["name"], json!(["This field is required."]));

        Ok(())
    }
}

mod list {
    use super::*;

    /// Expect anonymous reads and a filter on the competed flag
    #[tokio::test]
    async fn filters_by_has_it_competed() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let owner = test.user().insert_user(TEST_USERNAME).await?;
        test.drone().insert_drone_with_category("Falcon", owner.id).await?;
        test.drone().insert_drone_with_category("Hawk", owner.id).await?;

        let app = test.app();

        let all = app.get("/v1/drones/").await;
        assert_eq!(all.status, StatusCode::OK);
        assert_eq!(all.body["count"], 2);

        let competed = app.get("/v1/drones/?has_it_competed=true").await;
        assert_eq!(competed.body["count"], 0);

        let invalid = app.get("/v1/drones/?has_it_competed=maybe").await;
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect v2 to serve the same drones under the vehicles collection
    #[tokio::test]
    async fn served_under_v2_vehicles() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let owner = test.user().insert_user(TEST_USERNAME).await?;
        let (_, drone) = test.drone().insert_drone_with_category("Falcon", owner.id).await?;

        let response = test.app().get("/v2/vehicles/").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body["results"][0]["url"],
            format!("http://testserver/v2/vehicles/{}", drone.id)
        );

        Ok(())
    }
}
