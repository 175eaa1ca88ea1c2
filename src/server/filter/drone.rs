use chrono::{DateTime, Utc};
use entity::drone::{Column, Entity};
use sea_orm::{ColumnTrait, Order, QueryFilter, QueryOrder, Select};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::validation::FieldErrors,
    filter::{
        non_empty, parse_bool, parse_date_time, parse_number, parse_ordering, search_condition,
        search_terms,
    },
};

const ORDERING_FIELDS: [(&str, Column); 2] = [
    ("name", Column::Name),
    ("manufacturing_date", Column::ManufacturingDate),
];

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DroneFilterParams {
    /// Exact drone name
    pub name: Option<String>,
    /// Primary key of the drone category
    pub drone_category: Option<String>,
    /// Exact manufacturing date
    pub manufacturing_date: Option<String>,
    /// `true` or `false`
    pub has_it_competed: Option<String>,
    /// Name prefixes, separated by spaces or commas
    pub search: Option<String>,
    /// Comma separated list of `name`, `manufacturing_date`, each optionally prefixed with `-`
    pub ordering: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct DroneFilter {
    pub name: Option<String>,
    pub drone_category_id: Option<i32>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub has_it_competed: Option<bool>,
    pub search: Vec<String>,
    pub ordering: Vec<(Column, Order)>,
}

impl DroneFilterParams {
    pub fn parse(&self) -> Result<DroneFilter, FieldErrors> {
        let mut errors = FieldErrors::new();

        let filter = DroneFilter {
            name: non_empty(&self.name).map(str::to_string),
            drone_category_id: parse_number(&mut errors, "drone_category", &self.drone_category),
            manufacturing_date: parse_date_time(
                &mut errors,
                "manufacturing_date",
                &self.manufacturing_date,
            ),
            has_it_competed: parse_bool(&mut errors, "has_it_competed", &self.has_it_competed),
            search: search_terms(self.search.as_deref()),
            ordering: parse_ordering(self.ordering.as_deref(), &ORDERING_FIELDS),
        };

        errors.into_result().map(|_| filter)
    }
}

impl DroneFilter {
    pub fn apply(self, mut select: Select<Entity>) -> Select<Entity> {
        if let Some(name) = self.name {
            select = select.filter(Column::Name.eq(name));
        }
        if let Some(drone_category_id) = self.drone_category_id {
            select = select.filter(Column::DroneCategoryId.eq(drone_category_id));
        }
        if let Some(manufacturing_date) = self.manufacturing_date {
            select = select.filter(Column::ManufacturingDate.eq(manufacturing_date));
        }
        if let Some(has_it_competed) = self.has_it_competed {
            select = select.filter(Column::HasItCompeted.eq(has_it_competed));
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
