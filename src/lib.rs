//! Drone racing REST service.
//!
//! Exposes drone categories, drones, pilots and competitions over HTTP with owner-based
//! permissions, token/basic/session authentication, filtering and limit/offset pagination.

pub mod model;
pub mod server;
