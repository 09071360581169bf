//! Glide Tween Engine
//!
//! Time-driven interpolation streams for the Glide animation layer.
//!
//! # Features
//!
//! - **Easing table**: 31 Penner curves, evaluated generically over any
//!   interpolable payload
//! - **Interpolable values**: scalars and vectors through one small
//!   capability set (`add`/`subtract`/`negate`/`scale`/`divide`/`compare`)
//! - **Frame-pulled sampling**: a playing tween is an `Iterator`; every
//!   poll is one frame's emission, boundary-exact at both ends with a
//!   guaranteed terminal sample
//! - **Looping**: repeat, ping-pong, and curve-mirrored loops, with
//!   endpoints re-resolved at every pass start
//!
//! # Example
//!
//! ```rust
//! use glide_core::ManualClock;
//! use glide_tween::{Easing, Tween};
//!
//! let clock = ManualClock::new();
//! let mut fade = Tween::new(0.0f32, 1.0)
//!     .duration_ms(200.0)
//!     .easing(Easing::EaseOutCubic)
//!     .play(clock.clone())
//!     .unwrap();
//!
//! let mut last = 0.0;
//! while let Some(opacity) = fade.next() {
//!     last = opacity;
//!     clock.advance_ms(16.0);
//! }
//! assert_eq!(last, 1.0);
//! ```

pub mod easing;
pub mod error;
pub mod tween;
pub mod value;

pub use easing::Easing;
pub use error::{Result, TweenError};
pub use tween::{LoopMode, Tween, TweenStream};
pub use value::Interpolable;
