//! JSON wire representations shared by handlers and tests.
//!
//! `*Dto` types are what the API returns, `*Payload` types are what it accepts. Payload
//! fields are optional so the same type serves create, full update and partial update;
//! required-field checks happen in the service layer.

pub mod api;
pub mod auth;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod user;
pub mod validate;
