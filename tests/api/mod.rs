//! End-to-end tests driving the full router: routing, authentication, permissions,
//! filtering, pagination and status codes.

mod auth;
mod competition;
mod drone;
mod drone_category;
mod pilot;
mod root;
mod user;
