use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::drone::DroneDto;

/// Competition nested under its pilot, with the full drone representation
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompetitionDto {
    pub url: String,
    pub pk: i32,
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
    pub drone: DroneDto,
}

/// Competition as exposed by the competitions collection
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PilotCompetitionDto {
    pub url: String,
    pub pk: i32,
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
    /// Pilot name
    pub pilot: String,
    /// Drone name
    pub drone: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CompetitionPayload {
    #[schema(value_type = Option<i32>)]
    pub distance_in_feet: Option<Value>,
    pub distance_achievement_date: Option<String>,
    /// Name of an existing pilot
    pub pilot: Option<String>,
    /// Name of an existing drone
    pub drone: Option<String>,
}
