//! Service context - dependency container for services
//!
//! Holds the status repository, the token verifier and the clock.

use std::sync::Arc;

use status_common::JwtService;
use status_core::UserStatusRepository;

use super::clock::{Clock, SystemClock};
use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    status_repo: Arc<dyn UserStatusRepository>,
    jwt_service: Arc<JwtService>,
    clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        status_repo: Arc<dyn UserStatusRepository>,
        jwt_service: Arc<JwtService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            status_repo,
            jwt_service,
            clock,
        }
    }

    /// Get the user status repository
    pub fn status_repo(&self) -> &dyn UserStatusRepository {
        self.status_repo.as_ref()
    }

    /// Shared handle to the repository, for background tasks
    pub fn status_repo_handle(&self) -> Arc<dyn UserStatusRepository> {
        Arc::clone(&self.status_repo)
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Shared handle to the clock, for background tasks
    pub fn clock_handle(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Current time in epoch seconds
    pub fn now(&self) -> i64 {
        self.clock.now()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("status_repo", &self.status_repo.table_name())
            .field("jwt_service", &"JwtService")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    status_repo: Option<Arc<dyn UserStatusRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_repo(mut self, repo: Arc<dyn UserStatusRepository>) -> Self {
        self.status_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Defaults to [`SystemClock`] when not set
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.status_repo
                .ok_or_else(|| ServiceError::validation("status_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        ))
    }
}

/// Identity of the caller, if any
///
/// Passed explicitly into read operations so that "no user" is an input
/// rather than ambient session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    user_id: Option<String>,
}

impl UserContext {
    /// No authenticated caller
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

impl From<Option<String>> for UserContext {
    fn from(user_id: Option<String>) -> Self {
        Self { user_id }
    }
}
