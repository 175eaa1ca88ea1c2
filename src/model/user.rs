use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::drone::UserDroneDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub url: String,
    pub pk: i32,
    pub username: String,
    pub drones: Vec<UserDroneDto>,
}
