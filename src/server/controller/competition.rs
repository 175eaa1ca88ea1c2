use axum::{
    extract::{Query, State},
    http::{header::LOCATION, Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto, PageDto},
        competition::{CompetitionPayload, PilotCompetitionDto},
    },
    server::{
        controller::util::{
            caller::Caller,
            context::RequestContext,
            extract::{ApiJson, ApiPath},
        },
        error::Error,
        filter::competition::CompetitionFilterParams,
        model::app::AppState,
        service::{auth::permission::Permission, pilot::competition::CompetitionService},
        util::pagination::PageParams,
    },
};

pub static COMPETITION_TAG: &str = "competitions";

const PERMISSIONS: &[Permission] = &[Permission::AllowAny];

/// List competition results
///
/// Ordered by distance, longest first, unless `ordering` says otherwise. Date and distance
/// ranges as well as drone and pilot names can be used as filters.
#[utoipa::path(
    get,
    path = "/v1/competitions/",
    tag = COMPETITION_TAG,
    params(CompetitionFilterParams, PageParams),
    responses(
        (status = 200, description = "One page of competitions", body = PageDto<PilotCompetitionDto>),
        (status = 400, description = "Malformed filter value", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_competitions(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    Query(filter): Query<CompetitionFilterParams>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let filter = filter.parse()?;
    let page = state.pagination.request(&page);

    let (results, count) = CompetitionService::new(&state.db)
        .list(filter, page, &ctx.urls)
        .await?;

    Ok(Json(page.into_page(results, count, &ctx.request_url)))
}

/// Record a competition result
///
/// `pilot` and `drone` reference existing records by name.
#[utoipa::path(
    post,
    path = "/v1/competitions/",
    tag = COMPETITION_TAG,
    request_body = CompetitionPayload,
    responses(
        (status = 201, description = "Competition recorded", body = PilotCompetitionDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_competition(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiJson(payload): ApiJson<CompetitionPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let competition = CompetitionService::new(&state.db)
        .create(payload, &ctx.urls)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, competition.url.clone())],
        Json(competition),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/competitions/{pk}",
    tag = COMPETITION_TAG,
    params(("pk" = i32, Path, description = "Competition ID")),
    responses(
        (status = 200, description = "The competition", body = PilotCompetitionDto),
        (status = 404, description = "No such competition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competition(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let competition = CompetitionService::new(&state.db)
        .get(pk, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(competition))
}

#[utoipa::path(
    put,
    path = "/v1/competitions/{pk}",
    tag = COMPETITION_TAG,
    params(("pk" = i32, Path, description = "Competition ID")),
    request_body = CompetitionPayload,
    responses(
        (status = 200, description = "Competition updated", body = PilotCompetitionDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 404, description = "No such competition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_competition(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<CompetitionPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let competition = CompetitionService::new(&state.db)
        .update(pk, payload, false, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(competition))
}

#[utoipa::path(
    patch,
    path = "/v1/competitions/{pk}",
    tag = COMPETITION_TAG,
    params(("pk" = i32, Path, description = "Competition ID")),
    request_body = CompetitionPayload,
    responses(
        (status = 200, description = "Competition updated", body = PilotCompetitionDto),
        (status = 400, description = "Invalid payload", body = FieldErrorsDto),
        (status = 404, description = "No such competition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_competition(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
    ApiJson(payload): ApiJson<CompetitionPayload>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let competition = CompetitionService::new(&state.db)
        .update(pk, payload, true, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(competition))
}

#[utoipa::path(
    delete,
    path = "/v1/competitions/{pk}",
    tag = COMPETITION_TAG,
    params(("pk" = i32, Path, description = "Competition ID")),
    responses(
        (status = 204, description = "Competition deleted"),
        (status = 404, description = "No such competition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_competition(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    if CompetitionService::new(&state.db).delete(pk).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound)
    }
}
