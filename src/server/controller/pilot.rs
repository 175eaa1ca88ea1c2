use axum::{
    extract::{Query, State},
    http::{header::LOCATION, Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto, PageDto},
        pilot::{PilotDto, PilotPayload},
    },
    server::{
        controller::util::{
            caller::{Caller, TokenAuth},
            context::RequestContext,
            extract::{ApiJson, ApiPath},
        },
        error::Error,
        filter::pilot::PilotFilterParams,
        model::app::AppState,
        service::{auth::permission::Permission, pilot::PilotService},
        util::pagination::PageParams,
    },
};

pub static PILOT_TAG: &str = "pilots";

const PERMISSIONS: &[Permission] = &[Permission::IsAuthenticated];

/// List pilots
///
/// Requires `Authorization: Token <key>`.
#[utoipa::path(
    get,
    path = "/v1/pilots/",
    tag = PILOT_TAG,
    params(PilotFilterParams, PageParams),
    responses(
        (status = 200, description = "One page of pilots", body = PageDto<PilotDto>),
        (status = 400, description = "Malformed filter value", body = FieldErrorsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pilots(
    State(state): State<AppState>,
    method: Method,
    caller: Caller<TokenAuth>,
    ctx: RequestContext,
    Query(filter): Query<PilotFilterParams>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let filter = filter.parse()?;
    let page = state.pagination.request(&page);

    let (results, count) = PilotService::new(&state.db)
        .list(filter, page, &ctx.urls)
        .await?;

    Ok(Json(page.into_page(results, count, &ctx.request_url)))
}

/// Register a pilot
#[utoipa::path(
    post,
    path = "/v1/pilots/",
    tag = PILOT_TAG,
    request_body = PilotPayload,
    responses(
        (status = 201, description = "Pilot created", body = PilotDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pilot(
    State(state): State<AppState>,
    method: Method,
    caller: Caller<TokenAuth>,
    ctx: RequestContext,
    ApiJson(payload): ApiJson<PilotPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let pilot = PilotService::new(&state.db)
        .create(payload, &ctx.urls)
        .await?;

    Ok((StatusCode::CREATED, [(LOCATION, pilot.url.clone())], Json(pilot)))
}

/// Retrieve a pilot with their competitions
#[utoipa::path(
    get,
    path = "/v1/pilots/{pk}",
    tag = PILOT_TAG,
    params(("pk" = i32, Path, description = "Pilot ID")),
    responses(
        (status = 200, description = "The pilot", body = PilotDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No such pilot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot(
    State(state): State<AppState>,
    method: Method,
    caller: Caller<TokenAuth>,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let pilot = PilotService::new(&state.db)
        .get(pk, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(pilot))
}

/// Replace a pilot
#[utoipa::path(
    put,
    path = "/v1/pilots/{pk}",
    tag = PILOT_TAG,
    params(("pk" = i32, Path, description = "Pilot ID")),
    request_body = PilotPayload,
    responses(
        (status = 200, description = "Pilot updated", body = PilotDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No such pilot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pilot(
    State(state): State<AppState>,
    method: Method,
    caller: Caller<TokenAuth>,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<PilotPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let pilot = PilotService::new(&state.db)
        .update(pk, payload, false, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(pilot))
}

/// Partially update a pilot
#[utoipa::path(
    patch,
    path = "/v1/pilots/{pk}",
    tag = PILOT_TAG,
    params(("pk" = i32, Path, description = "Pilot ID")),
    request_body = PilotPayload,
    responses(
        (status = 200, description = "Pilot updated", body = PilotDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No such pilot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_pilot(
    State(state): State<AppState>,
    method: Method,
    caller: Caller<TokenAuth>,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<PilotPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let pilot = PilotService::new(&state.db)
        .update(pk, payload, true, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(pilot))
}

/// Delete a pilot and their competitions
#[utoipa::path(
    delete,
    path = "/v1/pilots/{pk}",
    tag = PILOT_TAG,
    params(("pk" = i32, Path, description = "Pilot ID")),
    responses(
        (status = 204, description = "Pilot deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No such pilot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pilot(
    State(state): State<AppState>,
    method: Method,
    caller: Caller<TokenAuth>,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    if PilotService::new(&state.db).delete(pk).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound)
    }
}
