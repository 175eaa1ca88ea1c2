use axum::http::{header::WWW_AUTHENTICATE, Method, StatusCode};
use drones_test_utils::prelude::*;
use entity::pilot::Gender;
use serde_json::json;

use crate::util::{RequestBuilder, TestContextExt};

/// Expect anonymous pilot requests to be refused and nothing to be stored
#[tokio::test]
async fn refuses_requests_without_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let (_, token) = test.user().insert_user_with_token(TEST_USERNAME).await?;
    let app = test.app();

    let response = app
        .send(
            RequestBuilder::new(Method::POST, "/v1/pilots/")
                .json(json!({ "name": "Penelope Pitstop", "gender": "F", "races_count": 0 }))
                .build(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers.get(WWW_AUTHENTICATE).unwrap(), "Token");

    let listed = app
        .send(
            RequestBuilder::new(Method::GET, "/v1/pilots/")
                .token(&token.key)
                .build(),
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["count"], 0);

    Ok(())
}

/// Expect basic credentials to be ignored by the token only views
#[tokio::test]
async fn ignores_basic_authentication() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .with_user(TEST_USERNAME)
        .build()
        .await?;

    let response = test
        .app()
        .send(
            RequestBuilder::new(Method::GET, "/v1/pilots/")
                .basic_auth(TEST_USERNAME, TEST_PASSWORD)
                .build(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 with an invalid token message for an unknown key
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let response = test
        .app()
        .send(
            RequestBuilder::new(Method::GET, "/v1/pilots/")
                .token("0000000000000000000000000000000000000bad")
                .build(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "detail": "Invalid token." }));

    Ok(())
}

/// Expect a token holder to create, patch and delete a pilot
#[tokio::test]
async fn token_holder_manages_pilots() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let (_, token) = test.user().insert_user_with_token(TEST_USERNAME).await?;
    let app = test.app();

    let created = app
        .send(
            RequestBuilder::new(Method::POST, "/v1/pilots/")
                .token(&token.key)
                .json(json!({ "name": "Penelope Pitstop", "gender": "F", "races_count": 0 }))
                .build(),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["gender_description"], "Female");
    assert_eq!(created.body["competitions"], json!([]));

    let path = created.body["url"]
        .as_str()
        .unwrap()
        .trim_start_matches("http://testserver")
        .to_string();

    let anonymous = app.get(&path).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let patched = app
        .send(
            RequestBuilder::new(Method::PATCH, &path)
                .token(&token.key)
                .json(json!({ "races_count": 3 }))
                .build(),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["races_count"], 3);
    assert_eq!(patched.body["name"], "Penelope Pitstop");

    let deleted = app
        .send(RequestBuilder::new(Method::DELETE, &path).token(&token.key).build())
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = app
        .send(RequestBuilder::new(Method::GET, &path).token(&token.key).build())
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a pilot to embed their competitions with the full drone, longest distance first
#[tokio::test]
async fn embeds_competitions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let (user, token) = test.user().insert_user_with_token(TEST_USERNAME).await?;
    let (_, drone) = test.drone().insert_drone_with_category("Falcon", user.id).await?;
    let pilot = test.pilot().insert_pilot("Dick Dastardly", Gender::Male, 2).await?;
    test.pilot().insert_competition(pilot.id, drone.id, 800, 0).await?;
    test.pilot().insert_competition(pilot.id, drone.id, 2800, 1).await?;

    let response = test
        .app()
        .send(
            RequestBuilder::new(Method::GET, &format!("/v1/pilots/{}", pilot.id))
                .token(&token.key)
                .build(),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["gender"], "M");
    let competitions = response.body["competitions"].as_array().unwrap();
    assert_eq!(competitions.len(), 2);
    assert_eq!(competitions[0]["distance_in_feet"], 2800);
    assert_eq!(competitions[0]["drone"]["name"], "Falcon");
    assert_eq!(competitions[0]["drone"]["owner"], TEST_USERNAME);

    Ok(())
}

/// Expect a mistyped number to be reported against its field
#[tokio::test]
async fn reports_mistyped_races_count() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let (_, token) = test.user().insert_user_with_token(TEST_USERNAME).await?;

    let response = test
        .app()
        .send(
            RequestBuilder::new(Method::POST, "/v1/pilots/")
                .token(&token.key)
                .json(json!({ "name": "Penelope Pitstop", "races_count": "abc" }))
                .build(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "races_count": ["A valid integer is required."] })
    );

    Ok(())
}
