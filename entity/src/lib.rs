//! SeaORM entities for the drone racing service.

pub mod prelude;

pub mod auth_token;
pub mod auth_user;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
