use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub detail: String,
}

/// Validation errors keyed by field name
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrorsDto(pub BTreeMap<String, Vec<String>>);

/// A page of a collection, as returned by limit/offset pagination
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    /// Number of records matching the request across all pages
    pub count: u64,
    /// Link to the following page
    pub next: Option<String>,
    /// Link to the preceding page
    pub previous: Option<String>,
    pub results: Vec<T>,
}
