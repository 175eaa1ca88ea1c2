//! Server application core modules.
//!
//! HTTP routing, authentication, permission checks, filtering, pagination and database
//! access for the drone racing API. Requests flow controller → service → data, with DTOs
//! from [`crate::model`] as the wire format.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod filter;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
