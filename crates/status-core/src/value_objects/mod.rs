//! Value objects - immutable types that represent domain concepts

mod status_type;

pub use status_type::{StatusType, StatusTypeParseError};
