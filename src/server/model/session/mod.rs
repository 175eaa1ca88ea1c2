//! Session data models.
//!
//! Type-safe wrappers around `tower-sessions` keys. The session is what session
//! authentication reads the logged-in user from.

pub mod user;
