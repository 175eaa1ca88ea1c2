use axum::{
    extract::{Query, State},
    http::{header::LOCATION, Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto, PageDto},
        drone_category::{DroneCategoryDto, DroneCategoryPayload},
    },
    server::{
        controller::util::{
            caller::Caller,
            context::RequestContext,
            extract::{ApiJson, ApiPath},
        },
        error::Error,
        filter::drone_category::DroneCategoryFilterParams,
        model::app::AppState,
        service::{auth::permission::Permission, drone::drone_category::DroneCategoryService},
        util::pagination::PageParams,
    },
};

pub static DRONE_CATEGORY_TAG: &str = "drone-categories";

const PERMISSIONS: &[Permission] = &[Permission::AllowAny];

/// List drone categories
///
/// Supports `name` filtering, prefix `search` on the name and `ordering` by name.
#[utoipa::path(
    get,
    path = "/v1/drone-categories/",
    tag = DRONE_CATEGORY_TAG,
    params(DroneCategoryFilterParams, PageParams),
    responses(
        (status = 200, description = "One page of drone categories", body = PageDto<DroneCategoryDto>),
        (status = 400, description = "Malformed filter value", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drone_categories(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    Query(filter): Query<DroneCategoryFilterParams>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let filter = filter.parse()?;
    let page = state.pagination.request(&page);

    let (results, count) = DroneCategoryService::new(&state.db)
        .list(filter, page, &ctx.urls)
        .await?;

    Ok(Json(page.into_page(results, count, &ctx.request_url)))
}

/// Create a drone category
///
/// # Responses
/// - 201 (Created): The new category, with its URL in the `Location` header
/// - 400 (Bad Request): Name missing, blank, too long or already in use
#[utoipa::path(
    post,
    path = "/v1/drone-categories/",
    tag = DRONE_CATEGORY_TAG,
    request_body = DroneCategoryPayload,
    responses(
        (status = 201, description = "Drone category created", body = DroneCategoryDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone_category(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiJson(payload): ApiJson<DroneCategoryPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let category = DroneCategoryService::new(&state.db)
        .create(payload, &ctx.urls)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, category.url.clone())],
        Json(category),
    ))
}

/// Retrieve a drone category
#[utoipa::path(
    get,
    path = "/v1/drone-categories/{pk}",
    tag = DRONE_CATEGORY_TAG,
    params(("pk" = i32, Path, description = "Drone category ID")),
    responses(
        (status = 200, description = "The drone category", body = DroneCategoryDto),
        (status = 404, description = "No such drone category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_category(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let category = DroneCategoryService::new(&state.db)
        .get(pk, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(category))
}

/// Replace a drone category
#[utoipa::path(
    put,
    path = "/v1/drone-categories/{pk}",
    tag = DRONE_CATEGORY_TAG,
    params(("pk" = i32, Path, description = "Drone category ID")),
    request_body = DroneCategoryPayload,
    responses(
        (status = 200, description = "Drone category updated", body = DroneCategoryDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 404, description = "No such drone category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_category(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<DroneCategoryPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let category = DroneCategoryService::new(&state.db)
        .update(pk, payload, false, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(category))
}

/// Partially update a drone category
#[utoipa::path(
    patch,
    path = "/v1/drone-categories/{pk}",
    tag = DRONE_CATEGORY_TAG,
    params(("pk" = i32, Path, description = "Drone category ID")),
    request_body = DroneCategoryPayload,
    responses(
        (status = 200, description = "Drone category updated", body = DroneCategoryDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 404, description = "No such drone category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_drone_category(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<DroneCategoryPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let category = DroneCategoryService::new(&state.db)
        .update(pk, payload, true, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(category))
}

/// Delete a drone category
///
/// Drones in the category and their competitions are deleted with it.
#[utoipa::path(
    delete,
    path = "/v1/drone-categories/{pk}",
    tag = DRONE_CATEGORY_TAG,
    params(("pk" = i32, Path, description = "Drone category ID")),
    responses(
        (status = 204, description = "Drone category deleted"),
        (status = 404, description = "No such drone category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone_category(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    if !DroneCategoryService::new(&state.db).delete(pk).await? {
        return Err(Error::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
