//! Absolute hyperlinks to API resources.

use crate::server::model::version::ApiVersion;

/// Builds resource URLs for one API version namespace.
///
/// `base` is scheme and authority (`http://localhost:8000`) as seen by the client.
#[derive(Clone, Debug)]
pub struct ApiUrls {
    base: String,
    version: ApiVersion,
}

impl ApiUrls {
    pub fn new(base: impl Into<String>, version: ApiVersion) -> Self {
        let base = base.into().trim_end_matches('/').to_string();

        Self { base, version }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn root(&self) -> String {
        format!("{}{}/", self.base, self.version.prefix())
    }

    fn collection(&self, segment: &str) -> String {
        format!("{}{}/{}/", self.base, self.version.prefix(), segment)
    }

    fn item(&self, segment: &str, pk: i32) -> String {
        format!("{}{}/{}/{}", self.base, self.version.prefix(), segment, pk)
    }

    pub fn drone_categories(&self) -> String {
        self.collection(self.version.category_segment())
    }

    pub fn drone_category(&self, pk: i32) -> String {
        self.item(self.version.category_segment(), pk)
    }

    pub fn drones(&self) -> String {
        self.collection(self.version.drone_segment())
    }

    pub fn drone(&self, pk: i32) -> String {
        self.item(self.version.drone_segment(), pk)
    }

    pub fn pilots(&self) -> String {
        self.collection("pilots")
    }

    pub fn pilot(&self, pk: i32) -> String {
        self.item("pilots", pk)
    }

    pub fn competitions(&self) -> String {
        self.collection("competitions")
    }

    pub fn competition(&self, pk: i32) -> String {
        self.item("competitions", pk)
    }

    pub fn users(&self) -> String {
        self.collection("users")
    }

    pub fn user(&self, pk: i32) -> String {
        self.item("users", pk)
    }
}
