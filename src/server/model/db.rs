//! Database model type aliases.
//!
//! Shorthand for the sea-orm models of the `entity` crate so services and repositories
//! do not need to spell out `entity::<table>::Model` everywhere.

/// Drone category record (`id`, `name`).
pub type DroneCategoryModel = entity::drone_category::Model;

/// Drone record.
///
/// # Fields (from `entity::drone::Model`)
/// - `id` - Primary key
/// - `name` - Drone name
/// - `drone_category_id` - Foreign key to the drone category
/// - `manufacturing_date` - When the drone was built
/// - `has_it_competed` - Whether the drone has taken part in a competition
/// - `owner_id` - Foreign key to the user who registered the drone, fixed at creation
/// - `inserted_timestamp` - When the record was created
pub type DroneModel = entity::drone::Model;

/// Pilot record.
pub type PilotModel = entity::pilot::Model;

/// Competition record linking a pilot, a drone and the distance achieved.
pub type CompetitionModel = entity::competition::Model;

/// User account. Passwords are stored as argon2 PHC strings.
pub type UserModel = entity::auth_user::Model;

/// API token issued to a user, at most one per user.
pub type TokenModel = entity::auth_token::Model;
