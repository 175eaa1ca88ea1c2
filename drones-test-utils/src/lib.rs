//! Shared test harness for the drones workspace.
//!
//! Tests describe the database they need with [`TestBuilder`], which creates the tables
//! and queued fixtures on an in-memory SQLite database and returns a [`TestContext`].
//! Further records are inserted through the fixture helpers on the context.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_USERNAME},
        fixtures::mock_date,
        TestBuilder, TestContext, TestError,
    };
}
