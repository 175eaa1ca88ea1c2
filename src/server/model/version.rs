//! API version namespaces.
//!
//! Both versions serve the same resources; v2 renames drone categories to vehicle
//! categories and drones to vehicles in paths and in the root document.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    /// Path prefix of the namespace, e.g. `/v1`
    pub fn prefix(self) -> &'static str {
        match self {
            Self::V1 => "/v1",
            Self::V2 => "/v2",
        }
    }

    /// Path segment (and root document key) of the drone category collection
    pub fn category_segment(self) -> &'static str {
        match self {
            Self::V1 => "drone-categories",
            Self::V2 => "vehicle-categories",
        }
    }

    /// Path segment (and root document key) of the drone collection
    pub fn drone_segment(self) -> &'static str {
        match self {
            Self::V1 => "drones",
            Self::V2 => "vehicles",
        }
    }

    /// Resolves the namespace a request path belongs to, defaulting to v1.
    pub fn from_path(path: &str) -> Self {
        if path == "/v2" || path.starts_with("/v2/") {
            Self::V2
        } else {
            Self::V1
        }
    }
}
