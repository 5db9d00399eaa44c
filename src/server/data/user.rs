use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Duplicate display names surface as a unique constraint violation.
    pub async fn create(&self, display_name: &str) -> Result<entity::wellspring_user::Model, DbErr> {
        let user = entity::wellspring_user::ActiveModel {
            display_name: ActiveValue::Set(display_name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::wellspring_user::Model>, DbErr> {
        entity::prelude::WellspringUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field. Child entries
    /// and flashcards are removed by the cascading foreign key.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::WellspringUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
