//! Extractors shared by controllers.
//!
//! Caller authentication and permission checks, the request context used to build
//! hyperlinks, and JSON body/path extractors whose rejections use the API error format.

pub mod caller;
pub mod context;
pub mod extract;
