use serde_json::json;

use crate::{
    model::pilot::PilotPayload,
    server::{error::Error, service::pilot::PilotService},
};

use super::*;

/// Expect gender to default to male with its description
#[tokio::test]
async fn creates_pilot_with_default_gender() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let service = PilotService::new(&test.db);
    let pilot = service
        .create(
            PilotPayload {
                name: Some("Penelope Pitstop".to_string()),
                gender: None,
                races_count: Some(json!(0)),
            },
            &urls(),
        )
        .await
        .unwrap();

    assert_eq!(pilot.gender, "M");
    assert_eq!(pilot.gender_description, "Male");
    assert!(pilot.url.starts_with("http://testserver/v2/pilots/"));

    Ok(())
}

/// Expect an invalid gender code to be reported as a field error
#[tokio::test]
async fn rejects_unknown_gender() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let service = PilotService::new(&test.db);
    let result = service
        .create(
            PilotPayload {
                name: Some("Penelope Pitstop".to_string()),
                gender: Some("X".to_string()),
                races_count: Some(json!(0)),
            },
            &urls(),
        )
        .await;

    let Err(Error::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.get("gender").unwrap(),
        &["\"X\" is not a valid choice.".to_string()]
    );

    Ok(())
}

/// Expect name and races_count to be required
#[tokio::test]
async fn requires_name_and_races_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_drone_tables().build().await?;

    let service = PilotService::new(&test.db);
    let result = service.create(PilotPayload::default(), &urls()).await;

    let Err(Error::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.get("name").is_some());
    assert!(errors.get("races_count").is_some());
    assert!(errors.get("gender").is_none());

    Ok(())
}
