//! Glide Core Primitives
//!
//! This crate provides the foundational pieces the Glide animation engine
//! builds on:
//!
//! - **Geometry**: small `Copy` vector types (`Vec2`, `Vec3`) with the
//!   componentwise arithmetic interpolation needs
//! - **Time Sources**: a monotonic running-time seam (`TimeSource`) with a
//!   wall-clock implementation and a manually driven clock for tests and
//!   deterministic playback
//!
//! # Example
//!
//! ```rust
//! use glide_core::{ManualClock, TimeSource, Vec2};
//!
//! let v = Vec2::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let clock = ManualClock::new();
//! clock.advance_ms(16.0);
//! assert_eq!(clock.now_ms(), 16.0);
//! ```

pub mod geometry;
pub mod time;

pub use geometry::{Vec2, Vec3};
pub use time::{ManualClock, MonotonicClock, TimeSource};
