//! # status-service
//!
//! Application layer containing the status use cases, the status projection,
//! the expired message sweeper and the DTOs exchanged with the API layer.

pub mod dto;
pub mod services;

pub use dto::{
    HealthChecks, HealthResponse, PublicStatusResponse, ReadinessResponse,
    SetCustomMessageRequest, SetPredefinedMessageRequest, SetStatusRequest, StatusView,
    UserStatusView,
};
pub use services::{
    Clock, ExpiredStatusSweeper, FixedClock, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StatusProjectionService, StatusService, SystemClock, UserContext,
};
