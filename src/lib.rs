//! Integer-only approximations of the exponential function.

pub mod analysis;
pub mod approx;
pub mod error;
pub mod format;
pub mod opts;
pub mod utils;

pub use error::{ConfigError, ConfigErrorKind, DomainError, TrackingError};
pub use format::DecimalFormat;
