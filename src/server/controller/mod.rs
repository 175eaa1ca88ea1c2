//! HTTP controller endpoints for the drone racing API.
//!
//! Handlers authenticate the caller, check the view's permissions, parse filters and
//! pagination, call the matching service and wrap the result in a response. The same
//! handlers serve both API versions; links in responses follow the version of the request
//! path. OpenAPI documentation is attached with utoipa.

pub mod auth;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod root;
pub mod user;
pub mod util;
