//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait};

use crate::{error::TestError, setup, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables
/// and fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_isp_tables: bool,

    // Database fixtures to insert
    clients: Vec<(String, String)>,    // (name, town)
    collectors: Vec<(String, String)>, // (name, assigned_town)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_isp_tables: false,
            clients: Vec::new(),
            collectors: Vec::new(),
        }
    }

    /// Add every Smart ISP table to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_isp_tables(mut self) -> Self {
        self.include_isp_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables, referenced tables first.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use smart_isp_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), smart_isp_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Client)
    ///     .with_table(Router)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables.push(setup::table(entity));
        self
    }

    /// Insert mock client into database.
    ///
    /// # Arguments
    /// - `name` - Client name
    /// - `town` - Town the client lives in
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_client(mut self, name: impl Into<String>, town: impl Into<String>) -> Self {
        self.clients.push((name.into(), town.into()));
        self
    }

    /// Insert mock collector into database.
    ///
    /// # Arguments
    /// - `name` - Collector name
    /// - `assigned_town` - Town the collector covers
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_collector(
        mut self,
        name: impl Into<String>,
        assigned_town: impl Into<String>,
    ) -> Self {
        self.collectors.push((name.into(), assigned_town.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (ISP tables if specified, then custom tables)
    /// 2. Inserts clients, then collectors, in the order they were added
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_isp_tables {
            all_tables.extend(setup::isp_tables());
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, town) in self.clients {
            test.client().insert_mock_client(&name, &town).await?;
        }

        for (name, assigned_town) in self.collectors {
            test.collector()
                .insert_mock_collector(&name, &assigned_town)
                .await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
