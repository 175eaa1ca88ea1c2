use axum::{
    extract::{Query, State},
    http::Method,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        user::UserDto,
    },
    server::{
        controller::util::{caller::Caller, context::RequestContext, extract::ApiPath},
        error::Error,
        model::app::AppState,
        service::{auth::permission::Permission, user::UserService},
        util::pagination::PageParams,
    },
};

pub static USER_TAG: &str = "users";

const PERMISSIONS: &[Permission] = &[Permission::AllowAny];

/// List users with the drones they own
#[utoipa::path(
    get,
    path = "/v1/users/",
    tag = USER_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "One page of users", body = PageDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let page = state.pagination.request(&page);
    let (results, count) = UserService::new(&state.db).list(page, &ctx.urls).await?;

    Ok(Json(page.into_page(results, count, &ctx.request_url)))
}

/// Retrieve a user
#[utoipa::path(
    get,
    path = "/v1/users/{pk}",
    tag = USER_TAG,
    params(("pk" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    method: Method,
    caller: Caller,
    ctx: RequestContext,
    ApiPath(pk): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    caller.require(&method, PERMISSIONS)?;

    let user = UserService::new(&state.db)
        .get(pk, &ctx.urls)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(user))
}
