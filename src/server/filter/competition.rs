use chrono::{DateTime, Utc};
use entity::competition::{Column, Entity};
use sea_orm::{ColumnTrait, JoinType, Order, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::validation::FieldErrors,
    filter::{non_empty, parse_date_time, parse_number, parse_ordering},
};

const ORDERING_FIELDS: [(&str, Column); 2] = [
    ("distance_in_feet", Column::DistanceInFeet),
    ("distance_achievement_date", Column::DistanceAchievementDate),
];

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompetitionFilterParams {
    /// Exact distance in feet
    pub distance_in_feet: Option<String>,
    /// Achieved at or after this date
    pub from_achievement_date: Option<String>,
    /// Achieved at or before this date
    pub to_achievement_date: Option<String>,
    /// Minimum distance in feet
    pub min_distance_in_feet: Option<String>,
    /// Maximum distance in feet
    pub max_distance_in_feet: Option<String>,
    /// Exact name of the drone
    pub drone_name: Option<String>,
    /// Exact name of the pilot
    pub pilot_name: Option<String>,
    /// Comma separated list of `distance_in_feet`, `distance_achievement_date`, each optionally prefixed with `-`
    pub ordering: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CompetitionFilter {
    pub distance_in_feet: Option<i32>,
    pub from_achievement_date: Option<DateTime<Utc>>,
    pub to_achievement_date: Option<DateTime<Utc>>,
    pub min_distance_in_feet: Option<i32>,
    pub max_distance_in_feet: Option<i32>,
    pub drone_name: Option<String>,
    pub pilot_name: Option<String>,
    pub ordering: Vec<(Column, Order)>,
}

impl CompetitionFilterParams {
    pub fn parse(&self) -> Result<CompetitionFilter, FieldErrors> {
        let mut errors = FieldErrors::new();

        let filter = CompetitionFilter {
            distance_in_feet: parse_number(&mut errors, "distance_in_feet", &self.distance_in_feet),
            from_achievement_date: parse_date_time(
                &mut errors,
                "from_achievement_date",
                &self.from_achievement_date,
            ),
            to_achievement_date: parse_date_time(
                &mut errors,
                "to_achievement_date",
                &self.to_achievement_date,
            ),
            min_distance_in_feet: parse_number(
                &mut errors,
                "min_distance_in_feet",
                &self.min_distance_in_feet,
            ),
            max_distance_in_feet: parse_number(
                &mut errors,
                "max_distance_in_feet",
                &self.max_distance_in_feet,
            ),
            drone_name: non_empty(&self.drone_name).map(str::to_string),
            pilot_name: non_empty(&self.pilot_name).map(str::to_string),
            ordering: parse_ordering(self.ordering.as_deref(), &ORDERING_FIELDS),
        };

        errors.into_result().map(|_| filter)
    }
}

impl CompetitionFilter {
    pub fn apply(self, mut select: Select<Entity>) -> Select<Entity> {
        if let Some(distance) = self.distance_in_feet {
            select = select.filter(Column::DistanceInFeet.eq(distance));
        }
        if let Some(from) = self.from_achievement_date {
            select = select.filter(Column::DistanceAchievementDate.gte(from));
        }
        if let Some(to) = self.to_achievement_date {
            select = select.filter(Column::DistanceAchievementDate.lte(to));
        }
        if let Some(min) = self.min_distance_in_feet {
            select = select.filter(Column::DistanceInFeet.gte(min));
        }
        if let Some(max) = self.max_distance_in_feet {
            select = select.filter(Column::DistanceInFeet.lte(max));
        }
        if let Some(drone_name) = self.drone_name {
            select = select
                .join(JoinType::InnerJoin, entity::competition::Relation::Drone.def())
                .filter(entity::drone::Column::Name.eq(drone_name));
        }
        if let Some(pilot_name) = self.pilot_name {
            select = select
                .join(JoinType::InnerJoin, entity::competition::Relation::Pilot.def())
                .filter(entity::pilot::Column::Name.eq(pilot_name));
        }

        if self.ordering.is_empty() {
            select = select.order_by(Column::DistanceInFeet, Order::Desc);
        }
        for (column, order) in self.ordering {
            select = select.order_by(column, order);
        }

        select.order_by(Column::Id, Order::Asc)
    }
}
