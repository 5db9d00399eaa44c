use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// CREATE TABLE statements for the full wellspring schema.
pub fn wellspring_table_statements() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::WellspringUser),
        schema.create_table_from_entity(entity::prelude::WellnessEntry),
        schema.create_table_from_entity(entity::prelude::Flashcard),
    ]
}

/// Composite unique indexes the entity-derived tables do not carry.
///
/// `create_table_from_entity` only emits single-column constraints, so the
/// (user_id, entry_date) and (user_id, front) uniqueness rules from the
/// migrations have to be recreated separately for the in-memory database.
pub fn wellspring_index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("uq_wellness_entry_user_id_entry_date")
            .table(entity::prelude::WellnessEntry)
            .col(entity::wellness_entry::Column::UserId)
            .col(entity::wellness_entry::Column::EntryDate)
            .unique()
            .to_owned(),
        Index::create()
            .name("uq_flashcard_user_id_front")
            .table(entity::prelude::Flashcard)
            .col(entity::flashcard::Column::UserId)
            .col(entity::flashcard::Column::Front)
            .unique()
            .to_owned(),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_wellspring_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            setup
                .with_tables($crate::setup::wellspring_table_statements())
                .await?;
            setup
                .with_indexes($crate::setup::wellspring_index_statements())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
