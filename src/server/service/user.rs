use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{record::RecordError, validation::ValidationError, Error},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User created
    /// - `Err(Error::ValidationError)` - Display name empty after trimming
    /// - `Err(Error::RecordError)` - Display name already taken
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let display_name = user.display_name.trim();
        if display_name.is_empty() {
            return Err(ValidationError::Empty("display_name").into());
        }

        let user_repo = UserRepository::new(self.db);

        match user_repo.create(display_name).await {
            Ok(model) => Ok(model.into()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(RecordError::DuplicateDisplayName(display_name.to_string()).into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    /// Deletes a user and, through the cascading foreign keys, all of their
    /// wellness entries and flashcards.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(Error::RecordError)` - No user with this ID existed
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        let result = user_repo.delete(user_id).await?;
        if result.rows_affected == 0 {
            return Err(RecordError::UserNotFound(user_id).into());
        }

        Ok(())
    }
}
