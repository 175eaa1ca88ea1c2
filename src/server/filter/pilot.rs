use entity::pilot::{Column, Entity, Gender};
use sea_orm::{ColumnTrait, Order, QueryFilter, QueryOrder, Select};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::validation::FieldErrors,
    filter::{
        invalid_choice, non_empty, parse_number, parse_ordering, search_condition, search_terms,
    },
};

const ORDERING_FIELDS: [(&str, Column); 2] = [
    ("name", Column::Name),
    ("races_count", Column::RacesCount),
];

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PilotFilterParams {
    /// Exact pilot name
    pub name: Option<String>,
    /// `M` or `F`
    pub gender: Option<String>,
    /// Exact number of races
    pub races_count: Option<String>,
    /// Name prefixes, separated by spaces or commas
    pub search: Option<String>,
    /// Comma separated list of `name`, `races_count`, each optionally prefixed with `-`
    pub ordering: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct PilotFilter {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub races_count: Option<i32>,
    pub search: Vec<String>,
    pub ordering: Vec<(Column, Order)>,
}

/// Resolves a gender code (`M`/`F`).
pub fn parse_gender(value: &str) -> Option<Gender> {
    match value {
        "M" => Some(Gender::Male),
        "F" => Some(Gender::Female),
        _ => None,
    }
}

impl PilotFilterParams {
    pub fn parse(&self) -> Result<PilotFilter, FieldErrors> {
        let mut errors = FieldErrors::new();

        let gender = non_empty(&self.gender).and_then(|value| {
            let gender = parse_gender(value);
            if gender.is_none() {
                errors.add("gender", invalid_choice(value));
            }
            gender
        });

        let filter = PilotFilter {
            name: non_empty(&self.name).map(str::to_string),
            gender,
            races_count: parse_number(&mut errors, "races_count", &self.races_count),
            search: search_terms(self.search.as_deref()),
            ordering: parse_ordering(self.ordering.as_deref(), &ORDERING_FIELDS),
        };

        errors.into_result().map(|_| filter)
    }
}

impl PilotFilter {
    pub fn apply(self, mut select: Select<Entity>) -> Select<Entity> {
        if let Some(name) = self.name {
            select = select.filter(Column::Name.eq(name));
        }
        if let Some(gender) = self.gender {
            select = select.filter(Column::Gender.eq(gender));
        }
        if let Some(races_count) = self.races_count {
            select = select.filter(Column::RacesCount.eq(races_count));
        }

        if !self.search.is_empty() {
            select = select.filter(search_condition(Column::Name, &self.search));
        }

        if self.ordering.is_empty() {
            select = select.order_by(Column::Name, Order::Asc);
        }
        for (column, order) in self.ordering {
            select = select.order_by(column, order);
        }

        select.order_by(Column::Id, Order::Asc)
    }
}
