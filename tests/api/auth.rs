use axum::http::{
    header::{COOKIE, SET_COOKIE},
    Method, StatusCode,
};
use drones_test_utils::prelude::*;
use serde_json::json;

use crate::util::{RequestBuilder, TestContextExt};

mod token {
    use super::*;

    /// Expect the same token on repeated requests and that it unlocks the pilot views
    #[tokio::test]
    async fn issues_and_reuses_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_user(TEST_USERNAME)
            .build()
            .await?;
        let app = test.app();
        let credentials = json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD });

        let first = app
            .send(
                RequestBuilder::new(Method::POST, "/api-token-auth/")
                    .json(credentials.clone())
                    .build(),
            )
            .await;
        assert_eq!(first.status, StatusCode::OK);
        let key = first.body["token"].as_str().unwrap().to_string();
        assert_eq!(key.len(), 40);

        let second = app
            .send(
                RequestBuilder::new(Method::POST, "/api-token-auth/")
                    .json(credentials)
                    .build(),
            )
            .await;
        assert_eq!(second.body["token"], key);

        let pilots = app
            .send(RequestBuilder::new(Method::GET, "/v1/pilots/").token(&key).build())
            .await;
        assert_eq!(pilots.status, StatusCode::OK);

        Ok(())
    }

    /// Expect 400 with a non-field error for a wrong password
    #[tokio::test]
    async fn rejects_bad_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_user(TEST_USERNAME)
            .build()
            .await?;

        let response = test
            .app()
            .send(
                RequestBuilder::new(Method::POST, "/api-token-auth/")
                    .json(json!({ "username": TEST_USERNAME, "password": "wrong" }))
                    .build(),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({ "non_field_errors": ["Unable to log in with provided credentials."] })
        );

        Ok(())
    }
}

mod session {
    use super::*;

    /// Expect the session cookie from login to authenticate drone writes until logout
    #[tokio::test]
    async fn login_authenticates_following_requests() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_user(TEST_USERNAME)
            .with_category("Quadcopter")
            .build()
            .await?;
        let app = test.app();

        let login = app
            .send(
                RequestBuilder::new(Method::POST, "/api-auth/login/")
                    .json(json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }))
                    .build(),
            )
            .await;
        assert_eq!(login.status, StatusCode::OK);
        assert_eq!(login.body["username"], TEST_USERNAME);

        let set_cookie = login.headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        let cookie = set_cookie.split(';').next().unwrap().to_string();

        let drone = json!({
            "name": "Falcon",
            "drone_category": "Quadcopter",
            "manufacturing_date": "2023-02-20T02:02:00Z",
        });

        let created = app
            .send(
                RequestBuilder::new(Method::POST, "/v1/drones/")
                    .header(COOKIE, &cookie)
                    .json(drone.clone())
                    .build(),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.body["owner"], TEST_USERNAME);

        let logout = app
            .send(
                RequestBuilder::new(Method::POST, "/api-auth/logout/")
                    .header(COOKIE, &cookie)
                    .build(),
            )
            .await;
        assert_eq!(logout.status, StatusCode::NO_CONTENT);

        let after_logout = app
            .send(
                RequestBuilder::new(Method::POST, "/v1/drones/")
                    .header(COOKIE, &cookie)
                    .json(drone)
                    .build(),
            )
            .await;
        assert_eq!(after_logout.status, StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
