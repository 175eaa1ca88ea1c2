use axum::{
    extract::{Query, State},
    http::{header::LOCATION, Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto, PageDto},
        drone::{DroneDto, DronePayload},
    },
    server::{
        controller::util::{
            caller::Caller,
            context::RequestContext,
            extract::{ApiJson, ApiPath},
        },
        error::Error,
        filter::drone::DroneFilterParams,
        model::app::AppState,
        service::{auth::permission::Permission, drone::DroneService},
        util::pagination::PageParams,
    },
};

pub static DRONE_TAG: &str = "drones";

/// Anyone may read, authenticated users may register drones, only owners may modify them.
const PERMISSIONS: &[Permission] = &[
    Permission::IsAuthenticatedOrReadOnly,
    Permission::IsCurrentUserOwnerOrReadOnly,
];

/// List drones
#[utoipa::path(
    get,
    path = "/v1/drones/",
    tag = DRONE_TAG,
    params(DroneFilterParams, PageParams),
    responses(
        (status = 200, description = "One page of drones", body = PageDto<DroneDto>),
        (status = 400, description = "Malformed filter value", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drones(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    Query(filter): Query<DroneFilterParams>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let filter = filter.parse()?;
    let page = state.pagination.request(&page);

    let (results, count) = DroneService::new(&state.db)
        .list(filter, page, &ctx.urls)
        .await?;

    Ok(Json(page.into_page(results, count, &ctx.request_url)))
}

/// Register a drone owned by the caller
///
/// # Responses
/// - 201 (Created): The new drone, with its URL in the `Location` header
/// - 400 (Bad Request): Missing or invalid fields, or an unknown category name
/// - 401 (Unauthorized): No credentials were provided
#[utoipa::path(
    post,
    path = "/v1/drones/",
    tag = DRONE_TAG,
    request_body = DronePayload,
    responses(
        (status = 201, description = "Drone created", body = DroneDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiJson(payload): ApiJson<DronePayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;
    let owner = caller.require_user()?;

    let drone = DroneService::new(&state.db)
        .create(payload, owner.id, &ctx.urls)
        .await?;

    Ok((StatusCode::CREATED, [(LOCATION, drone.url.clone())], Json(drone)))
}

/// Retrieve a drone
#[utoipa::path(
    get,
    path = "/v1/drones/{pk}",
    tag = DRONE_TAG,
    params(("pk" = i32, Path, description = "Drone ID")),
    responses(
        (status = 200, description = "The drone", body = DroneDto),
        (status = 404, description = "No such drone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let drone = DroneService::new(&state.db)
        .get(pk, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(drone))
}

/// Replace a drone
///
/// Only the drone's owner may update it; the owner itself cannot be changed.
#[utoipa::path(
    put,
    path = "/v1/drones/{pk}",
    tag = DRONE_TAG,
    params(("pk" = i32, Path, description = "Drone ID")),
    request_body = DronePayload,
    responses(
        (status = 200, description = "Drone updated", body = DroneDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the drone", body = ErrorDto),
        (status = 404, description = "No such drone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<DronePayload>,
) -> Result<impl IntoResponse, Error> {
    write_drone(state, method, caller, ctx, pk, payload, false).await
}

/// Partially update a drone
#[utoipa::path(
    patch,
    path = "/v1/drones/{pk}",
    tag = DRONE_TAG,
    params(("pk" = i32, Path, description = "Drone ID")),
    request_body = DronePayload,
    responses(
        (status = 200, description = "Drone updated", body = DroneDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the drone", body = ErrorDto),
        (status = 404, description = "No such drone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_drone(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<DronePayload>,
) -> Result<impl IntoResponse, Error> {
    write_drone(state, method, caller, ctx, pk, payload, true).await
}

/// Delete a drone
#[utoipa::path(
    delete,
    path = "/v1/drones/{pk}",
    tag = DRONE_TAG,
    params(("pk" = i32, Path, description = "Drone ID")),
    responses(
        (status = 204, description = "Drone deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the drone", body = ErrorDto),
        (status = 404, description = "No such drone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let drone_service = DroneService::new(&state.db);
    let drone = drone_service.get_model(pk).await?.ok_or(Error::NotFound)?;
    caller.require_object(&method, PERMISSIONS, drone.owner_id)?;

    drone_service.delete(drone.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn write_drone(
    state: AppState,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    pk: i32,
    payload: DronePayload,
    partial: bool,
) -> Result<Json<DroneDto>, Error> {
    caller.require(&method, PERMISSIONS)?;

    let drone_service = DroneService::new(&state.db);
    let drone = drone_service.get_model(pk).await?.ok_or(Error::NotFound)?;
    caller.require_object(&method, PERMISSIONS, drone.owner_id)?;

    let drone = drone_service
        .update(drone, payload, partial, &ctx.urls)
        .await?;

    Ok(Json(drone))
}
