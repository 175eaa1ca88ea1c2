//! Limit/offset pagination.
//!
//! `?limit=` selects the page size (falling back to the configured default when missing or
//! invalid, capped at the configured maximum) and `?offset=` the number of records to skip.
//! Pages link to their neighbours by rewriting those two parameters on the request URL.

use serde::Deserialize;
use url::Url;
use utoipa::IntoParams;

use crate::model::api::PageDto;

/// Page size limits applied to every list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: 4,
            max_limit: 8,
        }
    }
}

/// Raw pagination query parameters.
///
/// Kept as strings so malformed values fall back to defaults instead of failing the request.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of results to return per page
    pub limit: Option<String>,
    /// The initial index from which to return the results
    pub offset: Option<String>,
}

/// Largest offset the database drivers accept as a bound parameter.
const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PaginationConfig {
    /// Resolves query parameters into a concrete page window.
    pub fn request(&self, params: &PageParams) -> PageRequest {
        let limit = params
            .limit
            .as_deref()
            .and_then(|limit| limit.trim().parse::<u64>().ok())
            .filter(|limit| *limit > 0)
            .map(|limit| limit.min(self.max_limit))
            .unwrap_or(self.default_limit);

        let offset = params
            .offset
            .as_deref()
            .and_then(|offset| offset.trim().parse::<u64>().ok())
            .map(|offset| offset.min(MAX_OFFSET))
            .unwrap_or(0);

        PageRequest { limit, offset }
    }
}

impl PageRequest {
    /// Link to the following page, `None` on the last page.
    pub fn next_link(&self, count: u64, request_url: &Url) -> Option<String> {
        if self.offset + self.limit >= count {
            return None;
        }

        Some(with_page_params(
            request_url,
            self.limit,
            Some(self.offset + self.limit),
        ))
    }

    /// Link to the preceding page, `None` on the first page.
    ///
    /// The first page is linked without an `offset` parameter.
    pub fn previous_link(&self, request_url: &Url) -> Option<String> {
        if self.offset == 0 {
            return None;
        }

        let offset = self.offset.saturating_sub(self.limit);
        let offset = if offset == 0 { None } else { Some(offset) };

        Some(with_page_params(request_url, self.limit, offset))
    }

    /// Wraps one page of results together with the total count and neighbour links.
    pub fn into_page<T>(self, results: Vec<T>, count: u64, request_url: &Url) -> PageDto<T> {
        PageDto {
            count,
            next: self.next_link(count, request_url),
            previous: self.previous_link(request_url),
            results,
        }
    }
}

fn with_page_params(request_url: &Url, limit: u64, offset: Option<u64>) -> String {
    let retained: Vec<(String, String)> = request_url
        .query_pairs()
        .filter(|(key, _)| key != "limit" && key != "offset")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = request_url.clone();
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        query.extend_pairs(retained);
        query.append_pair("limit", &limit.to_string());
        if let Some(offset) = offset {
            query.append_pair("offset", &offset.to_string());
        }
    }

    url.to_string()
}
