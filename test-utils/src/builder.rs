use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityName, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Location, Transporter};
///
/// let test = TestBuilder::new()
///     .with_table(Location)
///     .with_table(Transporter)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Natural-key index statements for the added tables.
    ///
    /// Entity-generated tables carry no partial indexes, so the statements the
    /// migrations install are replayed after the tables exist.
    indexes: Vec<&'static str>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, along with the live-row uniqueness index for its natural key when
    /// the table has one. Both are created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let table = entity.table_name().to_string();
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));

        if let Some(index) = migration::natural_key_index(&table) {
            self.indexes.push(index);
        }

        self
    }

    /// Adds all reference-data tables.
    ///
    /// This convenience method adds the following tables:
    /// - Location
    /// - Transporter
    /// - User
    /// - AppVersion
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Location)
            .with_table(Transporter)
            .with_table(User)
            .with_table(AppVersion)
    }

    /// Adds all tables required for trip operations.
    ///
    /// Trips reference locations and transporters, so both are added ahead of the trip
    /// table itself.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_trip_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_trip_tables(self) -> Self {
        self.with_table(Location)
            .with_table(Transporter)
            .with_table(Trip)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements that were added via `with_table()`, then creates the natural-key
    /// indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
