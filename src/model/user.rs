use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub display_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub display_name: String,
}

impl From<entity::wellspring_user::Model> for UserDto {
    fn from(model: entity::wellspring_user::Model) -> Self {
        Self {
            id: model.id,
            display_name: model.display_name,
            created_at: model.created_at,
        }
    }
}
