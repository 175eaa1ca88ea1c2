use axum::http::{header::LOCATION, Method, StatusCode};
use drones_test_utils::prelude::*;
use serde_json::json;

use crate::util::{RequestBuilder, TestContextExt};

mod create {
    use super::*;

    /// Expect 201 with a Location header, then the same record on retrieval
    #[tokio::test]
    async fn creates_and_retrieves_category() -> Result<(), TestError> {
        let test = TestBuilder::new().with_drone_tables().build().await?;
        let app = test.app();

        let response = app
            .send(
                RequestBuilder::new(Method::POST, "/v1/drone-categories/")
                    .json(json!({ "name": "Quadcopter" }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let url = response.body["url"].as_str().unwrap().to_string();
        assert_eq!(
            response.headers.get(LOCATION).unwrap().to_str().unwrap(),
            url
        );
        assert_eq!(response.body["drones"], json!([]));

        let path = url.trim_start_matches("http://testserver");
        let fetched = app.get(path).await;

        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.body["name"], "Quadcopter");
        assert_eq!(fetched.body["pk"], response.body["pk"]);

        Ok(())
    }

    /// Expect 400 with a field error when the name is already taken
    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_category("Quadcopter")
            .build()
            .await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::POST, "/v1/drone-categories/")
                    .json(json!({ "name": "Quadcopter" }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({ "name": ["drone category with this name already exists."] })
        );

        Ok(())
    }

    /// Expect 400 when the body is not valid JSON
    #[tokio::test]
    async fn rejects_malformed_json() -> Result<(), TestError> {
        let test = TestBuilder::new().with_drone_tables().build().await?;

        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/v1/drone-categories/")
            .header("host", "testserver")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{\"name\": "))
            .unwrap();
        let response = test.app().send(request).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body["detail"]
            .as_str()
            .unwrap()
            .starts_with("JSON parse error"));

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect PATCH to change the name and keep the key
    #[tokio::test]
    async fn patches_name() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let category = test.drone().insert_category("Quadcopter").await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::PATCH, &format!("/v1/drone-categories/{}", category.id))
                    .json(json!({ "name": "Quadcopter XL" }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["name"], "Quadcopter XL");
        assert_eq!(response.body["pk"], category.id);

        Ok(())
    }

    /// Expect a blank name to be rejected
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let category = test.drone().insert_category("Quadcopter").await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::PUT, &format!("/v1/drone-categories/{}", category.id))
                    .json(json!({ "name": "  " }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({ "name": ["This field may not be blank."] })
        );

        Ok(())
    }
}

mod list {
    use super::*;

    /// Expect the name filter to match exactly one category
    #[tokio::test]
    async fn filters_by_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_category("Quadcopter")
            .with_category("Octocopter")
            .build()
            .await?;

        let response = test.app().get("/v1/drone-categories/?name=Octocopter").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["count"], 1);
        assert_eq!(response.body["results"][0]["name"], "Octocopter");

        Ok(())
    }

    /// Expect search wildcards to match only themselves
    #[tokio::test]
    async fn search_treats_wildcards_literally() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_category("Quadcopter")
            .with_category("Octocopter")
            .build()
            .await?;
        let app = test.app();

        let percent = app.get("/v1/drone-categories/?search=%25").await;
        assert_eq!(percent.status, StatusCode::OK);
        assert_eq!(percent.body["count"], 0);

        let underscore = app.get("/v1/drone-categories/?search=_cto").await;
        assert_eq!(underscore.body["count"], 0);

        let prefix = app.get("/v1/drone-categories/?search=Octo").await;
        assert_eq!(prefix.body["count"], 1);

        Ok(())
    }

    /// Expect an offset beyond the signed range to return an empty page
    #[tokio::test]
    async fn handles_oversized_offset() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_category("Quadcopter")
            .build()
            .await?;

        let response = test
            .app()
            .get("/v1/drone-categories/?offset=18446744073709551615")
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["count"], 1);
        assert_eq!(response.body["results"], json!([]));
        assert_eq!(response.body["next"], json!(null));

        Ok(())
    }

    /// Expect categories ordered by name and descending on request
    #[tokio::test]
    async fn orders_by_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_category("Quadcopter")
            .with_category("Hexacopter")
            .build()
            .await?;
        let app = test.app();

        let ascending = app.get("/v1/drone-categories/").await;
        assert_eq!(ascending.body["results"][0]["name"], "Hexacopter");

        let descending = app.get("/v1/drone-categories/?ordering=-name").await;
        assert_eq!(descending.body["results"][0]["name"], "Quadcopter");

        Ok(())
    }

    /// Expect v2 links to point at the vehicle collections
    #[tokio::test]
    async fn v2_links_use_vehicle_paths() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let user = test.user().insert_user(TEST_USERNAME).await?;
        let (category, drone) = test.drone().insert_drone_with_category("Falcon", user.id).await?;

        let response = test
            .app()
            .get(&format!("/v2/vehicle-categories/{}", category.id))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body["url"],
            format!("http://testserver/v2/vehicle-categories/{}", category.id)
        );
        assert_eq!(
            response.body["drones"],
            json!([format!("http://testserver/v2/vehicles/{}", drone.id)])
        );

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Expect deleting a category to delete its drones and their competitions
    #[tokio::test]
    async fn cascades_to_drones() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_drone_tables().build().await?;
        let user = test.user().insert_user(TEST_USERNAME).await?;
        let (category, drone) = test.drone().insert_drone_with_category("Falcon", user.id).await?;
        let pilot = test
            .pilot()
            .insert_pilot("Penelope Pitstop", entity::pilot::Gender::Female, 1)
            .await?;
        test.pilot().insert_competition(pilot.id, drone.id, 800, 0).await?;
        let app = test.app();

        let response = app
            .send(
                RequestBuilder::new(Method::DELETE, &format!("/v1/drone-categories/{}", category.id))
                    .build(),
            )
            .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let drone = app.get(&format!("/v1/drones/{}", drone.id)).await;
        assert_eq!(drone.status, StatusCode::NOT_FOUND);

        let competitions = app.get("/v1/competitions/").await;
        assert_eq!(competitions.body["count"], 0);

        Ok(())
    }

    /// Expect 404 for a category that does not exist and for a non-numeric key
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_drone_tables().build().await?;
        let app = test.app();

        let missing = app
            .send(RequestBuilder::new(Method::DELETE, "/v1/drone-categories/42").build())
            .await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.body, json!({ "detail": "Not found." }));

        let invalid = app.get("/v1/drone-categories/abc").await;
        assert_eq!(invalid.status, StatusCode::NOT_FOUND);

        Ok(())
    }
}
