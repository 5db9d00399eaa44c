//! Declarative test builder.
//!
//! `TestBuilder` queues tables and database fixtures through chained
//! configuration methods, then executes everything during the final `build()`
//! call.

use chrono::NaiveDate;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a
/// complete test setup backed by an in-memory database.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_wellspring_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    entries: Vec<(i32, NaiveDate)>, // (user_id, entry_date)
    cards: Vec<(i32, String)>,      // (user_id, front)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_wellspring_tables: false,
            users: Vec::new(),
            entries: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Add the full wellspring schema to the test database: users, wellness
    /// entries, and flashcards, with their composite unique indexes.
    pub fn with_wellspring_tables(mut self) -> Self {
        self.include_wellspring_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user during `build()`.
    ///
    /// Users receive sequential IDs starting from 1 in the order added.
    pub fn with_user(mut self, display_name: impl Into<String>) -> Self {
        self.users.push(display_name.into());
        self
    }

    /// Insert a wellness entry for a user during `build()`.
    pub fn with_entry(mut self, user_id: i32, entry_date: NaiveDate) -> Self {
        self.entries.push((user_id, entry_date));
        self
    }

    /// Insert a flashcard for a user during `build()`.
    pub fn with_card(mut self, user_id: i32, front: impl Into<String>) -> Self {
        self.cards.push((user_id, front.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Tables are created first (wellspring schema if requested, then custom
    /// tables), then fixtures are inserted in the order users, entries, cards.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();

        if self.include_wellspring_tables {
            all_tables.extend(crate::setup::wellspring_table_statements());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_wellspring_tables {
            setup
                .with_indexes(crate::setup::wellspring_index_statements())
                .await?;
        }

        for display_name in self.users {
            setup.insert_mock_user(&display_name).await?;
        }

        for (user_id, entry_date) in self.entries {
            setup.insert_mock_entry(user_id, entry_date).await?;
        }

        for (user_id, front) in self.cards {
            setup.insert_mock_card(user_id, &front, None).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
