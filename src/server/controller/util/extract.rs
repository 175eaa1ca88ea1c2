use axum::{extract::FromRequest, extract::FromRequestParts};

use crate::server::error::Error;

/// JSON request body; malformed bodies are rejected as `400 {"detail": "JSON parse error - ..."}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Path parameters; values that do not parse are rejected as `404 {"detail": "Not found."}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);
