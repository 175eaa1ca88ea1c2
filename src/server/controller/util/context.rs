use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{header::HOST, request::Parts},
};
use url::Url;

use crate::server::{error::Error, model::version::ApiVersion, util::url::ApiUrls};

static DEFAULT_HOST: &str = "localhost";
static FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Where the request was sent, as seen by the client.
///
/// Hyperlinks in responses are absolute, so they are built from the `Host` header
/// (and `X-Forwarded-Proto` behind a proxy) and point into the version namespace of
/// the request path.
pub struct RequestContext {
    /// Link builder for the request's API version
    pub urls: ApiUrls,
    /// Full URL of the request including its query string
    pub request_url: Url,
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = match parts.extensions.get::<OriginalUri>() {
            Some(OriginalUri(uri)) => uri.clone(),
            None => parts.uri.clone(),
        };

        let scheme = parts
            .headers
            .get(FORWARDED_PROTO)
            .and_then(|value| value.to_str().ok())
            .filter(|proto| *proto == "https" || *proto == "http")
            .unwrap_or("http");
        let host = parts
            .headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_HOST);

        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let (base, request_url) = match Url::parse(&format!("{}://{}{}", scheme, host, path_and_query)) {
            Ok(url) => (format!("{}://{}", scheme, host), url),
            Err(e) => {
                tracing::debug!("Unusable Host header {:?}: {}", host, e);

                let base = format!("{}://{}", scheme, DEFAULT_HOST);
                let url = Url::parse(&format!("{}{}", base, path_and_query))
                    .map_err(|e| Error::InternalError(format!("Failed to parse request URL: {}", e)))?;

                (base, url)
            }
        };

        let version = ApiVersion::from_path(uri.path());

        Ok(Self {
            urls: ApiUrls::new(base, version),
            request_url,
        })
    }
}
