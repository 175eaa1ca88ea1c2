//! Utility functions and helpers for server operations.
//!
//! Password hashing and token generation, limit/offset pagination, datetime parsing for
//! query and payload values, and hyperlink construction for API resources.

pub mod crypto;
pub mod pagination;
pub mod time;
pub mod url;
