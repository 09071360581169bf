//! Tween construction and the sampling stream
//!
//! A [`Tween`] describes an interpolation: endpoints (fixed values or
//! per-pass providers), a duration, an easing curve, and a loop mode.
//! [`Tween::play`] turns it into a [`TweenStream`], an iterator in which
//! every `next()` call is one frame's emission opportunity against the
//! supplied time source. Dropping the stream (or simply not polling it)
//! cancels the tween; nothing more is emitted, including the terminal
//! sample.

use glide_core::TimeSource;

use crate::easing::Easing;
use crate::error::{Result, TweenError};
use crate::value::Interpolable;

/// Default pass duration in milliseconds
const DEFAULT_DURATION_MS: f32 = 300.0;

/// A pass endpoint or duration, resolved once per pass.
///
/// `Dynamic` providers are re-invoked at every pass start, so a looping
/// tween chases fresh values from a stateful provider (moving targets).
enum Source<V> {
    Fixed(V),
    Dynamic(Box<dyn FnMut() -> V>),
}

impl<V: Copy> Source<V> {
    fn resolve(&mut self) -> V {
        match self {
            Source::Fixed(value) => *value,
            Source::Dynamic(provider) => provider(),
        }
    }
}

/// Loop behavior once a pass has emitted its terminal sample
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    /// Single pass; the stream completes after the terminal emission
    #[default]
    None,
    /// Replay the identical forward pass indefinitely
    Repeat,
    /// Alternate forward and reversed passes, keeping the same curve
    PingPong,
    /// Alternate forward and reversed passes, mirroring the curve on the
    /// way back (ease-in comes back as ease-out)
    Mirror,
}

/// Tween description (builder)
///
/// # Example
///
/// ```rust
/// use glide_core::ManualClock;
/// use glide_tween::{Easing, Tween};
///
/// let clock = ManualClock::new();
/// let mut stream = Tween::new(0.0f32, 10.0)
///     .duration_ms(1000.0)
///     .easing(Easing::EaseOutQuad)
///     .play(clock.clone())
///     .unwrap();
///
/// // The first poll anchors the pass at the current clock reading.
/// assert_eq!(stream.next(), Some(0.0));
/// clock.set_ms(500.0);
/// assert_eq!(stream.next(), Some(7.5));
/// ```
pub struct Tween<V> {
    start: Source<V>,
    finish: Source<V>,
    duration_ms: Source<f32>,
    easing: Easing,
    loop_mode: LoopMode,
}

impl<V: Interpolable> Tween<V> {
    /// Tween between two fixed values.
    pub fn new(start: V, finish: V) -> Self {
        Self {
            start: Source::Fixed(start),
            finish: Source::Fixed(finish),
            duration_ms: Source::Fixed(DEFAULT_DURATION_MS),
            easing: Easing::default(),
            loop_mode: LoopMode::default(),
        }
    }

    /// Tween between endpoints sampled from providers at every pass start.
    pub fn from_providers(
        start: impl FnMut() -> V + 'static,
        finish: impl FnMut() -> V + 'static,
    ) -> Self {
        Self {
            start: Source::Dynamic(Box::new(start)),
            finish: Source::Dynamic(Box::new(finish)),
            duration_ms: Source::Fixed(DEFAULT_DURATION_MS),
            easing: Easing::default(),
            loop_mode: LoopMode::default(),
        }
    }

    /// Replace the start endpoint with a per-pass provider.
    pub fn start_with(mut self, provider: impl FnMut() -> V + 'static) -> Self {
        self.start = Source::Dynamic(Box::new(provider));
        self
    }

    /// Replace the finish endpoint with a per-pass provider.
    pub fn finish_with(mut self, provider: impl FnMut() -> V + 'static) -> Self {
        self.finish = Source::Dynamic(Box::new(provider));
        self
    }

    /// Set a fixed pass duration in milliseconds.
    pub fn duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = Source::Fixed(duration_ms);
        self
    }

    /// Resolve the pass duration from a provider at every pass start.
    pub fn duration_with(mut self, provider: impl FnMut() -> f32 + 'static) -> Self {
        self.duration_ms = Source::Dynamic(Box::new(provider));
        self
    }

    /// Set the easing curve (applies to every forward pass).
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the loop mode.
    pub fn loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Replay the identical pass indefinitely.
    pub fn repeat(self) -> Self {
        self.loop_mode(LoopMode::Repeat)
    }

    /// Alternate forward and reversed passes with the same curve.
    pub fn ping_pong(self) -> Self {
        self.loop_mode(LoopMode::PingPong)
    }

    /// Alternate forward and reversed passes with the mirrored curve.
    pub fn mirror(self) -> Self {
        self.loop_mode(LoopMode::Mirror)
    }

    /// Start sampling against `clock`.
    ///
    /// A fixed non-positive duration is a configuration mistake and is
    /// rejected here, before the stream exists. Provider-resolved
    /// durations are trusted; a non-positive one is defused by the
    /// boundary policy, collapsing its pass to the boundary emissions.
    pub fn play<C: TimeSource>(self, clock: C) -> Result<TweenStream<V, C>> {
        if let Source::Fixed(duration_ms) = self.duration_ms {
            if duration_ms <= 0.0 {
                return Err(TweenError::NonPositiveDuration(duration_ms));
            }
        }
        Ok(TweenStream {
            clock,
            start: self.start,
            finish: self.finish,
            duration_ms: self.duration_ms,
            easing: self.easing,
            loop_mode: self.loop_mode,
            reversed: false,
            pass: None,
            done: false,
        })
    }
}

/// State for one pass, created fresh at every pass start.
///
/// `elapsed_ms` is the only field mutated after construction (once per
/// frame), and it is always measured against this pass's own
/// `started_at_ms`, never accumulated across passes.
#[derive(Clone, Copy, Debug)]
struct Pass<V> {
    started_at_ms: f32,
    elapsed_ms: f32,
    initial: V,
    target: V,
    delta: V,
    duration_ms: f32,
    easing: Easing,
}

/// A playing tween: an iterator yielding one sample per poll.
///
/// Each `next()` call reads the clock once and emits the sample for that
/// frame. The pass's exact finish value is guaranteed to be the final
/// emission of every pass: the first poll past the duration emits it
/// verbatim (the forced terminal), after which the loop mode decides
/// whether a new pass begins. With [`LoopMode::None`] the stream then
/// completes; every other mode runs until the consumer stops polling.
pub struct TweenStream<V, C: TimeSource> {
    clock: C,
    start: Source<V>,
    finish: Source<V>,
    duration_ms: Source<f32>,
    easing: Easing,
    loop_mode: LoopMode,
    reversed: bool,
    pass: Option<Pass<V>>,
    done: bool,
}

impl<V, C: TimeSource> std::fmt::Debug for TweenStream<V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenStream")
            .field("easing", &self.easing)
            .field("loop_mode", &self.loop_mode)
            .field("reversed", &self.reversed)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<V: Interpolable, C: TimeSource> TweenStream<V, C> {
    /// The curve configured for forward passes.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// True once a `LoopMode::None` stream has emitted its terminal
    /// sample.
    pub fn is_complete(&self) -> bool {
        self.done
    }

    /// True while the current pass runs finish-to-start.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Resolve endpoints and duration for a fresh pass and anchor it at
    /// the current clock reading.
    fn begin_pass(&mut self) {
        let start = self.start.resolve();
        let finish = self.finish.resolve();
        let duration_ms = self.duration_ms.resolve();

        let (initial, target) = if self.reversed {
            (finish, start)
        } else {
            (start, finish)
        };
        let easing = if self.reversed && self.loop_mode == LoopMode::Mirror {
            self.easing.mirrored()
        } else {
            self.easing
        };

        tracing::trace!(
            "tween pass start: {:?} -> {:?} over {}ms ({})",
            initial,
            target,
            duration_ms,
            easing
        );

        self.pass = Some(Pass {
            started_at_ms: self.clock.now_ms(),
            elapsed_ms: 0.0,
            initial,
            target,
            delta: target.subtract(initial),
            duration_ms,
            easing,
        });
    }

    /// Advance the loop state machine after a pass's terminal emission.
    fn advance_loop(&mut self) {
        self.pass = None;
        match self.loop_mode {
            LoopMode::None => {
                tracing::debug!("tween complete");
                self.done = true;
            }
            LoopMode::Repeat => self.begin_pass(),
            LoopMode::PingPong | LoopMode::Mirror => {
                self.reversed = !self.reversed;
                self.begin_pass();
            }
        }
    }
}

impl<V: Interpolable, C: TimeSource> Iterator for TweenStream<V, C> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.done {
            return None;
        }
        if self.pass.is_none() {
            self.begin_pass();
        }
        let now_ms = self.clock.now_ms();
        let Some(pass) = self.pass.as_mut() else {
            return None;
        };
        pass.elapsed_ms = now_ms - pass.started_at_ms;
        let Pass {
            elapsed_ms,
            initial,
            target,
            delta,
            duration_ms,
            easing,
            ..
        } = *pass;

        if elapsed_ms > duration_ms {
            // Forced terminal: the exact finish, then the loop decides.
            self.advance_loop();
            return Some(target);
        }
        let value = if elapsed_ms <= 0.0 {
            initial
        } else if elapsed_ms >= duration_ms {
            target
        } else {
            easing.apply(elapsed_ms, initial, delta, duration_ms)
        };
        Some(value)
    }
}

impl<V: Interpolable, C: TimeSource> std::iter::FusedIterator for TweenStream<V, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::ManualClock;

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let err = Tween::new(0.0f32, 1.0)
            .duration_ms(0.0)
            .play(ManualClock::new())
            .unwrap_err();
        assert_eq!(err, TweenError::NonPositiveDuration(0.0));

        let err = Tween::new(0.0f32, 1.0)
            .duration_ms(-5.0)
            .play(ManualClock::new())
            .unwrap_err();
        assert_eq!(err, TweenError::NonPositiveDuration(-5.0));
    }

    #[test]
    fn test_defaults() {
        let stream = Tween::new(0.0f32, 1.0).play(ManualClock::new()).unwrap();
        assert_eq!(stream.easing(), Easing::Linear);
        assert_eq!(stream.loop_mode(), LoopMode::None);
        assert!(!stream.is_complete());
        assert!(!stream.is_reversed());
    }

    #[test]
    fn test_loop_mode_sugar() {
        let clock = ManualClock::new();
        assert_eq!(
            Tween::new(0.0f32, 1.0)
                .repeat()
                .play(clock.clone())
                .unwrap()
                .loop_mode(),
            LoopMode::Repeat
        );
        assert_eq!(
            Tween::new(0.0f32, 1.0)
                .ping_pong()
                .play(clock.clone())
                .unwrap()
                .loop_mode(),
            LoopMode::PingPong
        );
        assert_eq!(
            Tween::new(0.0f32, 1.0)
                .mirror()
                .play(clock)
                .unwrap()
                .loop_mode(),
            LoopMode::Mirror
        );
    }

    #[test]
    fn test_fixed_source_resolves_every_pass() {
        let mut source = Source::Fixed(7);
        assert_eq!(source.resolve(), 7);
        assert_eq!(source.resolve(), 7);
    }

    #[test]
    fn test_dynamic_source_observes_state() {
        let mut calls = 0;
        let mut source = Source::Dynamic(Box::new(move || {
            calls += 1;
            calls
        }));
        assert_eq!(source.resolve(), 1);
        assert_eq!(source.resolve(), 2);
    }
}
