//! HTTP routing and OpenAPI documentation configuration.
//!
//! Version 1 of the API is registered through utoipa so that its endpoints make up the
//! OpenAPI document served at `/api/docs/openapi.json`, with Swagger UI at `/api/docs`.
//! Version 2 serves the same handlers under renamed drone collections; since responses
//! only differ in their hyperlinks it is not documented separately.

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller,
    model::{app::AppState, version::ApiVersion},
};

/// Builds the application's HTTP router with both API versions, the authentication
/// endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /v1/`, `GET /v2/` - Collection links of the version
/// - `/v1/drone-categories/`, `/v2/vehicle-categories/` - Drone categories
/// - `/v1/drones/`, `/v2/vehicles/` - Drones
/// - `/v1/pilots/`, `/v2/pilots/` - Pilots, token authentication only
/// - `/v1/competitions/`, `/v2/competitions/` - Competition results
/// - `/v1/users/`, `/v2/users/` - Read only user listing
/// - `POST /api-token-auth/` - Obtain an API token
/// - `POST /api-auth/login/`, `POST /api-auth/logout/` - Session login and logout
///
/// Collections end with a slash, single records are addressed as `<collection>/{pk}`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Drones", description = "Drone racing API"), tags(
        (name = controller::root::ROOT_TAG, description = "API discovery"),
        (name = controller::drone_category::DRONE_CATEGORY_TAG, description = "Drone categories"),
        (name = controller::drone::DRONE_TAG, description = "Drones, writable by their owner"),
        (name = controller::pilot::PILOT_TAG, description = "Pilots, requires token authentication"),
        (name = controller::competition::COMPETITION_TAG, description = "Competition results"),
        (name = controller::user::USER_TAG, description = "Users and the drones they own"),
        (name = controller::auth::AUTH_TAG, description = "Token and session authentication"),
    ))]
    struct ApiDoc;

    use controller::{auth, competition, drone, drone_category, pilot, root, user};

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::api_root))
        .routes(routes!(
            drone_category::list_drone_categories,
            drone_category::create_drone_category
        ))
        .routes(routes!(
            drone_category::get_drone_category,
            drone_category::update_drone_category,
            drone_category::partial_update_drone_category,
            drone_category::delete_drone_category
        ))
        .routes(routes!(drone::list_drones, drone::create_drone))
        .routes(routes!(
            drone::get_drone,
            drone::update_drone,
            drone::partial_update_drone,
            drone::delete_drone
        ))
        .routes(routes!(pilot::list_pilots, pilot::create_pilot))
        .routes(routes!(
            pilot::get_pilot,
            pilot::update_pilot,
            pilot::partial_update_pilot,
            pilot::delete_pilot
        ))
        .routes(routes!(
            competition::list_competitions,
            competition::create_competition
        ))
        .routes(routes!(
            competition::get_competition,
            competition::update_competition,
            competition::partial_update_competition,
            competition::delete_competition
        ))
        .routes(routes!(user::list_users))
        .routes(routes!(user::get_user))
        .routes(routes!(auth::obtain_token))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .split_for_parts();

    routes
        .merge(versioned_routes(ApiVersion::V2))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Registers every resource of an API version under its own path segments.
fn versioned_routes(version: ApiVersion) -> Router<AppState> {
    use controller::{competition, drone, drone_category, pilot, root, user};

    let prefix = version.prefix();
    let categories = format!("{}/{}", prefix, version.category_segment());
    let drones = format!("{}/{}", prefix, version.drone_segment());
    let pilots = format!("{}/pilots", prefix);
    let competitions = format!("{}/competitions", prefix);
    let users = format!("{}/users", prefix);

    Router::new()
        .route(&format!("{}/", prefix), get(root::api_root))
        .route(
            &format!("{}/", categories),
            get(drone_category::list_drone_categories).post(drone_category::create_drone_category),
        )
        .route(
            &format!("{}/{{pk}}", categories),
            get(drone_category::get_drone_category)
                .put(drone_category::update_drone_category)
                .patch(drone_category::partial_update_drone_category)
                .delete(drone_category::delete_drone_category),
        )
        .route(
            &format!("{}/", drones),
            get(drone::list_drones).post(drone::create_drone),
        )
        .route(
            &format!("{}/{{pk}}", drones),
            get(drone::get_drone)
                .put(drone::update_drone)
                .patch(drone::partial_update_drone)
                .delete(drone::delete_drone),
        )
        .route(
            &format!("{}/", pilots),
            get(pilot::list_pilots).post(pilot::create_pilot),
        )
        .route(
            &format!("{}/{{pk}}", pilots),
            get(pilot::get_pilot)
                .put(pilot::update_pilot)
                .patch(pilot::partial_update_pilot)
                .delete(pilot::delete_pilot),
        )
        .route(
            &format!("{}/", competitions),
            get(competition::list_competitions).post(competition::create_competition),
        )
        .route(
            &format!("{}/{{pk}}", competitions),
            get(competition::get_competition)
                .put(competition::update_competition)
                .patch(competition::partial_update_competition)
                .delete(competition::delete_competition),
        )
        .route(&format!("{}/", users), get(user::list_users))
        .route(&format!("{}/{{pk}}", users), get(user::get_user))
}
