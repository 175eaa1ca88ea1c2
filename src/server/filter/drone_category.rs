use entity::drone_category::{Column, Entity};
use sea_orm::{ColumnTrait, Order, QueryFilter, QueryOrder, Select};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::validation::FieldErrors,
    filter::{non_empty, parse_ordering, search_condition, search_terms},
};

const ORDERING_FIELDS: [(&str, Column); 1] = [("name", Column::Name)];

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DroneCategoryFilterParams {
    /// Exact category name
    pub name: Option<String>,
    /// Name prefixes, separated by spaces or commas
    pub search: Option<String>,
    /// `name` or `-name`
    pub ordering: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct DroneCategoryFilter {
    pub name: Option<String>,
    pub search: Vec<String>,
    pub ordering: Vec<(Column, Order)>,
}

impl DroneCategoryFilterParams {
    pub fn parse(&self) -> Result<DroneCategoryFilter, FieldErrors> {
        Ok(DroneCategoryFilter {
            name: non_empty(&self.name).map(str::to_string),
            search: search_terms(self.search.as_deref()),
            ordering: parse_ordering(self.ordering.as_deref(), &ORDERING_FIELDS),
        })
    }
}

impl DroneCategoryFilter {
    pub fn apply(self, mut select: Select<Entity>) -> Select<Entity> {
        if let Some(name) = self.name {
            select = select.filter(Column::Name.eq(name));
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
