//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model type aliases, the API version
//! namespace and session data wrappers.

pub mod app;
pub mod db;
pub mod session;
pub mod version;
