//! Permission predicates.
//!
//! View-level checks run before the handler touches the database; object-level checks
//! run once the target record is loaded. Both only see the request method and the
//! caller's user id.

use axum::http::Method;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    /// Every request is allowed
    AllowAny,
    /// The caller must be authenticated
    IsAuthenticated,
    /// Anyone may read, only authenticated callers may write
    IsAuthenticatedOrReadOnly,
    /// Anyone may read a record, only its owner may modify it
    IsCurrentUserOwnerOrReadOnly,
}

/// GET, HEAD and OPTIONS never modify state.
pub fn is_safe_method(method: &Method) -> bool {
    method == Method::GET || method == Method::HEAD || method == Method::OPTIONS
}

impl Permission {
    /// View-level check.
    pub fn has_permission(self, method: &Method, user_id: Option<i32>) -> bool {
        match self {
            Self::AllowAny => true,
            Self::IsAuthenticated => user_id.is_some(),
            Self::IsAuthenticatedOrReadOnly => is_safe_method(method) || user_id.is_some(),
            // Decided per record
            Self::IsCurrentUserOwnerOrReadOnly => true,
        }
    }

    /// Object-level check against the record's owner.
    pub fn has_object_permission(self, method: &Method, user_id: Option<i32>, owner_id: i32) -> bool {
        match self {
            Self::IsCurrentUserOwnerOrReadOnly => {
                is_safe_method(method) || user_id == Some(owner_id)
            }
            _ => true,
        }
    }
}
