use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validate::not_blank;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DroneCategoryDto {
    pub url: String,
    pub pk: i32,
    pub name: String,
    /// Links to the drones in this category
    pub drones: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct DroneCategoryPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = 250, message = "Ensure this field has no more than 250 characters.")
    )]
    pub name: Option<String>,
}
