//! # kudos-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateNotificationRequest, FeedPollResponse, HealthResponse, LeaderboardEntryResponse,
    MarkAllReadResponse, NotificationResponse, ReactionCountsResponse, ReadinessResponse,
    UnreadCountResponse,
};
pub use services::{
    FeedPoll, FeedService, FeedSessions, LeaderboardService, NotificationService, ReactionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
