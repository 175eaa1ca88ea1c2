use std::{collections::BTreeMap, fmt};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use validator::Validate;

use crate::model::api::FieldErrorsDto;

/// Key used for errors that do not belong to a single field.
pub static NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field-keyed validation messages returned as a 400 response body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the `validator` rules of a payload, collecting any failures.
    pub fn validate<T: Validate>(payload: &T) -> Self {
        match payload.validate() {
            Ok(()) => Self::new(),
            Err(errors) => errors.into(),
        }
    }

    /// Records a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    /// Records "This field is required." when `value` is `None`.
    pub fn require<T>(&mut self, field: &str, value: &Option<T>) {
        if value.is_none() {
            self.add(field, "This field is required.");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(value: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();

        for (field, field_errors) in value.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                errors.add(&field, message);
            }
        }

        errors
    }
}

impl From<FieldErrors> for FieldErrorsDto {
    fn from(value: FieldErrors) -> Self {
        FieldErrorsDto(value.errors)
    }
}

impl IntoResponse for FieldErrors {
    fn into_response(self) -> Response {
        tracing::debug!("Request rejected: {}", self);

        (StatusCode::BAD_REQUEST, Json(FieldErrorsDto::from(self))).into_response()
    }
}
