use axum::http::{Method, StatusCode};
use drones_test_utils::prelude::*;
use entity::pilot::Gender;
use serde_json::{json, Value};

use crate::util::{RequestBuilder, TestContextExt};

fn distances(body: &Value) -> Vec<i64> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|competition| competition["distance_in_feet"].as_i64().unwrap())
        .collect()
}

/// Expect competitions to be listed longest distance first by default
#[tokio::test]
async fn lists_longest_distance_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME).await?;
    let (_, drone) = test.drone().insert_drone_with_category("Falcon", user.id).await?;
    let pilot = test.pilot().insert_pilot("Penelope Pitstop", Gender::Female, 1).await?;
    for (distance, days) in [(800, 0), (2800, 1), (1500, 2)] {
        test.pilot()
            .insert_competition(pilot.id, drone.id, distance, days)
            .await?;
    }
    let app = test.app();

    let response = app.get("/v1/competitions/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(distances(&response.body), vec![2800, 1500, 800]);
    assert_eq!(response.body["results"][0]["pilot"], "Penelope Pitstop");
    assert_eq!(response.body["results"][0]["drone"], "Falcon");

    let by_date = app
        .get("/v1/competitions/?ordering=distance_achievement_date")
        .await;
    assert_eq!(distances(&by_date.body), vec![800, 2800, 1500]);

    Ok(())
}

/// Expect distance range and name filters to combine
#[tokio::test]
async fn filters_by_range_and_names() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME).await?;
    let (_, falcon) = test.drone().insert_drone_with_category("Falcon", user.id).await?;
    let (_, hawk) = test.drone().insert_drone_with_category("Hawk", user.id).await?;
    let pilot = test.pilot().insert_pilot("Penelope Pitstop", Gender::Female, 1).await?;
    test.pilot().insert_competition(pilot.id, falcon.id, 800, 0).await?;
    test.pilot().insert_competition(pilot.id, falcon.id, 2800, 1).await?;
    test.pilot().insert_competition(pilot.id, hawk.id, 1500, 2).await?;
    let app = test.app();

    let ranged = app
        .get("/v1/competitions/?min_distance_in_feet=700&max_distance_in_feet=2000")
        .await;
    assert_eq!(distances(&ranged.body), vec![1500, 800]);

    let combined = app
        .get("/v1/competitions/?min_distance_in_feet=700&drone_name=Falcon&pilot_name=Penelope%20Pitstop")
        .await;
    assert_eq!(distances(&combined.body), vec![2800, 800]);

    let invalid = app.get("/v1/competitions/?min_distance_in_feet=far").await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        invalid.body,
        json!({ "min_distance_in_feet": ["Enter a number."] })
    );

    Ok(())
}

/// Expect limit/offset pagination with neighbour links
#[tokio::test]
async fn paginates_with_links() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME).await?;
    let (_, drone) = test.drone().insert_drone_with_category("Falcon", user.id).await?;
    let pilot = test.pilot().insert_pilot("Penelope Pitstop", Gender::Female, 1).await?;
    for distance in 1..=6 {
        test.pilot()
            .insert_competition(pilot.id, drone.id, distance * 100, distance as i64)
            .await?;
    }
    let app = test.app();

    let first = app.get("/v1/competitions/").await;
    assert_eq!(first.body["count"], 6);
    assert_eq!(distances(&first.body), vec![600, 500, 400, 300]);
    assert_eq!(
        first.body["next"],
        "http://testserver/v1/competitions/?limit=4&offset=4"
    );
    assert_eq!(first.body["previous"], Value::Null);

    let second = app.get("/v1/competitions/?limit=4&offset=4").await;
    assert_eq!(distances(&second.body), vec![200, 100]);
    assert_eq!(second.body["next"], Value::Null);
    assert_eq!(
        second.body["previous"],
        "http://testserver/v1/competitions/?limit=4"
    );

    let capped = app.get("/v1/competitions/?limit=100").await;
    assert_eq!(distances(&capped.body).len(), 6);

    Ok(())
}

/// Expect a competition to be recorded by pilot and drone name
#[tokio::test]
async fn records_competition_by_names() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME).await?;
    test.drone().insert_drone_with_category("Falcon", user.id).await?;
    test.pilot().insert_pilot("Penelope Pitstop", Gender::Female, 1).await?;
    let app = test.app();

    let created = app
        .send(
            RequestBuilder::new(Method::POST, "/v1/competitions/")
                .json(json!({
                    "distance_in_feet": 800,
                    "distance_achievement_date": "2023-02-20T05:03:20.776594Z",
                    "pilot": "Penelope Pitstop",
                    "drone": "Falcon",
                }))
                .build(),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["pilot"], "Penelope Pitstop");

    let unknown = app
        .send(
            RequestBuilder::new(Method::POST, "/v1/competitions/")
                .json(json!({
                    "distance_in_feet": 800,
                    "distance_achievement_date": "2023-02-20T05:03:20Z",
                    "pilot": "Nobody",
                    "drone": "Falcon",
                }))
                .build(),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        unknown.body,
        json!({ "pilot": ["Object with name=Nobody does not exist."] })
    );

    Ok(())
}
