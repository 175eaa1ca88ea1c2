//! Query-string filter sets for list endpoints.
//!
//! Each resource declares which fields can be matched exactly, range-compared, searched by
//! prefix and ordered on. Raw parameters are deserialized as strings, parsed into a typed
//! filter (collecting per-field errors), then applied to a sea-orm `Select` with all
//! predicates combined by AND.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;

use chrono::{DateTime, Utc};
use sea_orm::{sea_query::LikeExpr, ColumnTrait, Condition, Order};

use crate::server::{error::validation::FieldErrors, util::time::parse_datetime};

/// Parses an `ordering=name,-date` parameter against a whitelist of `(field, column)` pairs.
///
/// Unknown fields are dropped. An empty result means the resource's default ordering applies.
pub fn parse_ordering<C: Copy>(value: Option<&str>, fields: &[(&str, C)]) -> Vec<(C, Order)> {
    let Some(value) = value else {
        return Vec::new();
    };

    value
        .split(',')
        .map(str::trim)
        .filter_map(|term| {
            let (name, order) = match term.strip_prefix('-') {
                Some(name) => (name, Order::Desc),
                None => (term, Order::Asc),
            };

            fields
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, column)| (*column, order))
        })
        .collect()
}

/// Splits a `search=` parameter into terms on whitespace and commas.
pub fn search_terms(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .replace('\0', "")
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Condition requiring `column` to start with every term.
///
/// `%` and `_` in a term match themselves.
pub fn search_condition<C: ColumnTrait>(column: C, terms: &[String]) -> Condition {
    terms.iter().fold(Condition::all(), |condition, term| {
        condition.add(column.like(LikeExpr::new(prefix_pattern(term)).escape('\\')))
    })
}

/// `LIKE` pattern matching values that start with `term`, escaped with `\`.
fn prefix_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 1);
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}

/// Treats empty query values as absent.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

pub fn parse_number(errors: &mut FieldErrors, field: &str, value: &Option<String>) -> Option<i32> {
    let value = non_empty(value)?;

    match value.trim().parse::<i32>() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.add(field, "Enter a number.");
            None
        }
    }
}

pub fn parse_date_time(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
) -> Option<DateTime<Utc>> {
    let value = non_empty(value)?;

    match parse_datetime(value) {
        Some(datetime) => Some(datetime),
        None => {
            errors.add(field, "Enter a valid date/time.");
            None
        }
    }
}

pub fn parse_bool(errors: &mut FieldErrors, field: &str, value: &Option<String>) -> Option<bool> {
    let value = non_empty(value)?;

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => {
            errors.add(field, invalid_choice(value));
            None
        }
    }
}

pub fn invalid_choice(value: &str) -> String {
    format!(
        "Select a valid choice. {} is not one of the available choices.",
        value
    )
}
