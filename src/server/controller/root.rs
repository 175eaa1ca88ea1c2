use std::collections::BTreeMap;

use axum::{response::IntoResponse, Json};

use crate::server::{controller::util::context::RequestContext, error::Error};

pub static ROOT_TAG: &str = "root";

/// Lists the collections of the API version
///
/// v1 exposes `drone-categories` and `drones`, v2 renames them to `vehicle-categories` and
/// `vehicles`. Both expose `pilots` and `competitions`.
///
/// # Responses
/// - 200 (OK): Map of collection names to absolute collection URLs
#[utoipa::path(
    get,
    path = "/v1/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Collection links of the API version", body = BTreeMap<String, String>),
    ),
)]
pub async fn api_root(ctx: RequestContext) -> Result<impl IntoResponse, Error> {
    let urls = &ctx.urls;
    let version = urls.version();

    let links = BTreeMap::from([
        (version.category_segment(), urls.drone_categories()),
        (version.drone_segment(), urls.drones()),
        ("pilots", urls.pilots()),
        ("competitions", urls.competitions()),
    ]);

    Ok(Json(links))
}
