//! User model -> entity mapper

use kudos_core::entities::DirectoryUser;
use kudos_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to DirectoryUser entity
impl From<UserModel> for DirectoryUser {
    fn from(model: UserModel) -> Self {
        DirectoryUser {
            id: Snowflake::new(model.id),
            display_name: model.display_name,
        }
    }
}
