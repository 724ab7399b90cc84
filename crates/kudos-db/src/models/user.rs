//! User directory database model

use sqlx::FromRow;

/// Database model for the users directory table (read-only to this engine)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub display_name: String,
}
