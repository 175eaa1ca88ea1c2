use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validate::not_blank;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DroneDto {
    pub url: String,
    pub name: String,
    /// Name of the drone category
    pub drone_category: String,
    /// Username of the user who registered the drone
    pub owner: String,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
    pub inserted_timestamp: DateTime<Utc>,
}

/// Drone summary listed under its owner
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDroneDto {
    pub url: String,
    pub name: String,
}

/// Writable drone fields; the owner is always the authenticated caller
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct DronePayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = 250, message = "Ensure this field has no more than 250 characters.")
    )]
    pub name: Option<String>,
    /// Name of an existing drone category
    pub drone_category: Option<String>,
    /// RFC 3339 or `YYYY-MM-DD hh:mm[:ss]` (UTC)
    pub manufacturing_date: Option<String>,
    #[schema(value_type = Option<bool>)]
    pub has_it_competed: Option<Value>,
}
