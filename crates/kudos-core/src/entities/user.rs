//! Directory user - the slice of the user directory this engine consumes

use crate::value_objects::Snowflake;

/// A resolved user directory record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    pub id: Snowflake,
    pub display_name: String,
}

impl DirectoryUser {
    /// Create a new DirectoryUser
    pub fn new(id: Snowflake, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}
