//! Business logic services
//!
//! Status use cases, the read projection, and the background expiry sweep.

pub mod clock;
pub mod context;
pub mod error;
pub mod projection;
pub mod status;
pub mod sweeper;

// Re-export all services for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{ServiceContext, ServiceContextBuilder, UserContext};
pub use error::{ServiceError, ServiceResult};
pub use projection::StatusProjectionService;
pub use status::StatusService;
pub use sweeper::ExpiredStatusSweeper;
