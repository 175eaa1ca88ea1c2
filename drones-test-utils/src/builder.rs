//! Declarative test builder.
//!
//! All configuration is queued and executed in order during [`TestBuilder::build`]:
//! tables first, then users, then drone categories.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_drone_tables: bool,

    users: Vec<String>,
    categories: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create an empty builder with no tables or fixtures.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_drone_tables: false,
            users: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Add every table of the service: users, tokens, categories, drones, pilots and competitions.
    pub fn with_drone_tables(mut self) -> Self {
        self.include_drone_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use drones_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), drones_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AuthUser)
    ///     .with_table(DroneCategory)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the shared fixture password.
    pub fn with_user(mut self, username: &str) -> Self {
        self.users.push(username.to_string());
        self
    }

    /// Insert a drone category.
    pub fn with_category(mut self, name: &str) -> Self {
        self.categories.push(name.to_string());
        self
    }

    /// Build the test context, creating tables and inserting queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_drone_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AuthUser),
                schema.create_table_from_entity(entity::prelude::AuthToken),
                schema.create_table_from_entity(entity::prelude::DroneCategory),
                schema.create_table_from_entity(entity::prelude::Drone),
                schema.create_table_from_entity(entity::prelude::Pilot),
                schema.create_table_from_entity(entity::prelude::Competition),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        for username in self.users {
            test.user().insert_user(&username).await?;
        }

        for name in self.categories {
            test.drone().insert_category(&name).await?;
        }

        Ok(test)
    }
}
