//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: logging
//! initialization, error body assertions, and unique test data.

pub mod error_body;
pub mod logging;
pub mod unique;
