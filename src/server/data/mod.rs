//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table and are generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait), so they run equally on a pooled connection
//! or inside a transaction. They return [`DbErr`](sea_orm::DbErr) and leave HTTP concerns
//! to the service layer.

pub mod drone;
pub mod pilot;
pub mod user;
