//! User fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_DISPLAY_NAME, error::TestError, model::UserModel, TestSetup};

impl TestSetup {
    /// Insert a user with the given display name.
    pub async fn insert_mock_user(&self, display_name: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::WellspringUser::insert(entity::wellspring_user::ActiveModel {
                display_name: ActiveValue::Set(display_name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}

/// Create an in-memory user model with standard test values.
///
/// No database interaction; suitable for unit tests.
pub fn mock_user_model(id: i32) -> UserModel {
    UserModel {
        id,
        display_name: TEST_DISPLAY_NAME.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}
