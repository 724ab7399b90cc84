//! Notification entity <-> model mapper

use kudos_core::entities::{Notification, NotificationKind};
use kudos_core::value_objects::Snowflake;

use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            message: model.message,
            // Unknown tags degrade to the informational default rather than
            // dropping the row
            kind: NotificationKind::parse(&model.kind).unwrap_or_default(),
            read: model.read,
            created_at: model.created_at,
            link: model.link,
        }
    }
}

/// Convert Notification entity reference to values for database insertion
pub struct NotificationInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub title: &'a str,
    pub message: &'a str,
    pub kind: &'static str,
    pub read: bool,
    pub link: Option<&'a str>,
}

impl<'a> NotificationInsert<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self {
            id: notification.id.into_inner(),
            user_id: notification.user_id.into_inner(),
            title: &notification.title,
            message: &notification.message,
            kind: notification.kind.as_str(),
            read: notification.read,
            link: notification.link.as_deref(),
        }
    }
}
