use serde_json::json;

use crate::{
    model::drone::DronePayload,
    server::{error::Error, service::drone::DroneService},
};

use super::*;

/// Expect a partial update to change only the given field and keep the owner
#[tokio::test]
async fn partial_update_keeps_other_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME).await?;
    let (category, drone) = test.drone().insert_drone_with_category("Atom", user.id).await?;

    let service = DroneService::new(&test.db);
    let updated = service
        .update(
            drone,
            DronePayload {
                has_it_competed: Some(json!(true)),
                ..Default::default()
            },
            true,
            &urls(),
        )
        .await
        .unwrap();

    assert!(updated.has_it_competed);
    assert_eq!(updated.name, "Atom");
    assert_eq!(updated.drone_category, category.name);
    assert_eq!(updated.owner, TEST_USERNAME);

    Ok(())
}

/// Expect a full update to require every writable field
#[tokio::test]
async fn full_update_requires_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_drone_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME).await?;
    let (_, drone) = test.drone().insert_drone_with_category("Atom", user.id).await?;

    let service = DroneService::new(&test.db);
    let result = service
        .update(
            drone,
            DronePayload {
                name: Some("Atom II".to_string()),
                ..Default::default()
            },
            false,
            &urls(),
        )
        .await;

    let Err(Error::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.get("drone_category").is_some());
    assert!(errors.get("manufacturing_date").is_some());
    assert!(errors.get("name").is_none());

    Ok(())
}
