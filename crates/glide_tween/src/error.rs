//! Tween error types

use thiserror::Error;

/// Tween configuration errors
///
/// Every variant is a programming or configuration mistake surfaced at
/// setup time; nothing here is transient, so there is no retry path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweenError {
    /// An easing name that is not in the curve table
    #[error("unknown easing '{0}'")]
    UnknownEasing(String),

    /// A fixed duration that is zero or negative
    #[error("tween duration must be positive, got {0}ms")]
    NonPositiveDuration(f32),
}

/// Result type for tween construction
pub type Result<T> = std::result::Result<T, TweenError>;
