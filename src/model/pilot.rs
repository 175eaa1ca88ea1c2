use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{competition::CompetitionDto, validate::not_blank};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PilotDto {
    pub url: String,
    pub name: String,
    /// `M` or `F`
    pub gender: String,
    /// `Male` or `Female`
    pub gender_description: String,
    pub races_count: i32,
    pub inserted_timestamp: DateTime<Utc>,
    pub competitions: Vec<CompetitionDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PilotPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = 150, message = "Ensure this field has no more than 150 characters.")
    )]
    pub name: Option<String>,
    pub gender: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub races_count: Option<Value>,
}
