//! Easing curve table
//!
//! Every curve is a pure function `(time, initial, delta, duration) ->
//! value` over any [`Interpolable`] payload, in the classic Penner
//! formulation: `initial` is the pass start value, `delta` the total
//! change, and `time`/`duration` share an arbitrary unit (the driver feeds
//! milliseconds). The sampling driver guards the exact `time <= 0` and
//! `time >= duration` boundaries, so curve bodies may assume
//! `0 < time < duration` and a nonzero `duration`.

use std::fmt;
use std::str::FromStr;

use crate::error::TweenError;
use crate::value::Interpolable;

const BACK_OVERSHOOT: f32 = 1.70158;
const TWO_PI: f32 = std::f32::consts::TAU;

/// Easing curve identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

impl Easing {
    /// Every curve in the table, in declaration order.
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInCirc,
        Easing::EaseOutCirc,
        Easing::EaseInOutCirc,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
        Easing::EaseInBounce,
        Easing::EaseOutBounce,
        Easing::EaseInOutBounce,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
    ];

    /// Evaluate the curve at `time`.
    pub fn apply<V: Interpolable>(self, time: f32, initial: V, delta: V, duration: f32) -> V {
        match self {
            Easing::Linear => ease_linear(time, initial, delta, duration),
            Easing::EaseInQuad => ease_in_quad(time, initial, delta, duration),
            Easing::EaseOutQuad => ease_out_quad(time, initial, delta, duration),
            Easing::EaseInOutQuad => ease_in_out_quad(time, initial, delta, duration),
            Easing::EaseInCubic => ease_in_cubic(time, initial, delta, duration),
            Easing::EaseOutCubic => ease_out_cubic(time, initial, delta, duration),
            Easing::EaseInOutCubic => ease_in_out_cubic(time, initial, delta, duration),
            Easing::EaseInQuart => ease_in_quart(time, initial, delta, duration),
            Easing::EaseOutQuart => ease_out_quart(time, initial, delta, duration),
            Easing::EaseInOutQuart => ease_in_out_quart(time, initial, delta, duration),
            Easing::EaseInQuint => ease_in_quint(time, initial, delta, duration),
            Easing::EaseOutQuint => ease_out_quint(time, initial, delta, duration),
            Easing::EaseInOutQuint => ease_in_out_quint(time, initial, delta, duration),
            Easing::EaseInSine => ease_in_sine(time, initial, delta, duration),
            Easing::EaseOutSine => ease_out_sine(time, initial, delta, duration),
            Easing::EaseInOutSine => ease_in_out_sine(time, initial, delta, duration),
            Easing::EaseInExpo => ease_in_expo(time, initial, delta, duration),
            Easing::EaseOutExpo => ease_out_expo(time, initial, delta, duration),
            Easing::EaseInOutExpo => ease_in_out_expo(time, initial, delta, duration),
            Easing::EaseInCirc => ease_in_circ(time, initial, delta, duration),
            Easing::EaseOutCirc => ease_out_circ(time, initial, delta, duration),
            Easing::EaseInOutCirc => ease_in_out_circ(time, initial, delta, duration),
            Easing::EaseInBack => ease_in_back(time, initial, delta, duration),
            Easing::EaseOutBack => ease_out_back(time, initial, delta, duration),
            Easing::EaseInOutBack => ease_in_out_back(time, initial, delta, duration),
            Easing::EaseInBounce => ease_in_bounce(time, initial, delta, duration),
            Easing::EaseOutBounce => ease_out_bounce(time, initial, delta, duration),
            Easing::EaseInOutBounce => ease_in_out_bounce(time, initial, delta, duration),
            Easing::EaseInElastic => ease_in_elastic(time, initial, delta, duration),
            Easing::EaseOutElastic => ease_out_elastic(time, initial, delta, duration),
            Easing::EaseInOutElastic => ease_in_out_elastic(time, initial, delta, duration),
        }
    }

    /// The time-reversed counterpart of this curve.
    ///
    /// In and Out variants swap; Linear and the InOut variants are their
    /// own mirrors. Used by [`LoopMode::Mirror`](crate::tween::LoopMode)
    /// for the reversed pass. Involutive: `e.mirrored().mirrored() == e`.
    pub fn mirrored(self) -> Easing {
        match self {
            Easing::Linear => Easing::Linear,
            Easing::EaseInQuad => Easing::EaseOutQuad,
            Easing::EaseOutQuad => Easing::EaseInQuad,
            Easing::EaseInOutQuad => Easing::EaseInOutQuad,
            Easing::EaseInCubic => Easing::EaseOutCubic,
            Easing::EaseOutCubic => Easing::EaseInCubic,
            Easing::EaseInOutCubic => Easing::EaseInOutCubic,
            Easing::EaseInQuart => Easing::EaseOutQuart,
            Easing::EaseOutQuart => Easing::EaseInQuart,
            Easing::EaseInOutQuart => Easing::EaseInOutQuart,
            Easing::EaseInQuint => Easing::EaseOutQuint,
            Easing::EaseOutQuint => Easing::EaseInQuint,
            Easing::EaseInOutQuint => Easing::EaseInOutQuint,
            Easing::EaseInSine => Easing::EaseOutSine,
            Easing::EaseOutSine => Easing::EaseInSine,
            Easing::EaseInOutSine => Easing::EaseInOutSine,
            Easing::EaseInExpo => Easing::EaseOutExpo,
            Easing::EaseOutExpo => Easing::EaseInExpo,
            Easing::EaseInOutExpo => Easing::EaseInOutExpo,
            Easing::EaseInCirc => Easing::EaseOutCirc,
            Easing::EaseOutCirc => Easing::EaseInCirc,
            Easing::EaseInOutCirc => Easing::EaseInOutCirc,
            Easing::EaseInBack => Easing::EaseOutBack,
            Easing::EaseOutBack => Easing::EaseInBack,
            Easing::EaseInOutBack => Easing::EaseInOutBack,
            Easing::EaseInBounce => Easing::EaseOutBounce,
            Easing::EaseOutBounce => Easing::EaseInBounce,
            Easing::EaseInOutBounce => Easing::EaseInOutBounce,
            Easing::EaseInElastic => Easing::EaseOutElastic,
            Easing::EaseOutElastic => Easing::EaseInElastic,
            Easing::EaseInOutElastic => Easing::EaseInOutElastic,
        }
    }

    /// Kebab-case name of this curve, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "ease-in-quad",
            Easing::EaseOutQuad => "ease-out-quad",
            Easing::EaseInOutQuad => "ease-in-out-quad",
            Easing::EaseInCubic => "ease-in-cubic",
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
            Easing::EaseInQuart => "ease-in-quart",
            Easing::EaseOutQuart => "ease-out-quart",
            Easing::EaseInOutQuart => "ease-in-out-quart",
            Easing::EaseInQuint => "ease-in-quint",
            Easing::EaseOutQuint => "ease-out-quint",
            Easing::EaseInOutQuint => "ease-in-out-quint",
            Easing::EaseInSine => "ease-in-sine",
            Easing::EaseOutSine => "ease-out-sine",
            Easing::EaseInOutSine => "ease-in-out-sine",
            Easing::EaseInExpo => "ease-in-expo",
            Easing::EaseOutExpo => "ease-out-expo",
            Easing::EaseInOutExpo => "ease-in-out-expo",
            Easing::EaseInCirc => "ease-in-circ",
            Easing::EaseOutCirc => "ease-out-circ",
            Easing::EaseInOutCirc => "ease-in-out-circ",
            Easing::EaseInBack => "ease-in-back",
            Easing::EaseOutBack => "ease-out-back",
            Easing::EaseInOutBack => "ease-in-out-back",
            Easing::EaseInBounce => "ease-in-bounce",
            Easing::EaseOutBounce => "ease-out-bounce",
            Easing::EaseInOutBounce => "ease-in-out-bounce",
            Easing::EaseInElastic => "ease-in-elastic",
            Easing::EaseOutElastic => "ease-out-elastic",
            Easing::EaseInOutElastic => "ease-in-out-elastic",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == s)
            .ok_or_else(|| TweenError::UnknownEasing(s.to_string()))
    }
}

fn ease_linear<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    delta.scale(time).divide(duration).add(initial)
}

fn ease_in_quad<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    delta.scale(t).scale(t).add(initial)
}

fn ease_out_quad<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    delta.negate().scale(t).scale(t - 2.0).add(initial)
}

fn ease_in_out_quad<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / (duration / 2.0);
    if t <= 1.0 {
        return delta.divide(2.0).scale(t).scale(t).add(initial);
    }
    t -= 1.0;
    delta
        .negate()
        .divide(2.0)
        .scale(t * (t - 2.0) - 1.0)
        .add(initial)
}

fn ease_in_cubic<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    delta.scale(t.powi(3)).add(initial)
}

fn ease_out_cubic<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration - 1.0;
    delta.scale(t.powi(3) + 1.0).add(initial)
}

fn ease_in_out_cubic<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / (duration / 2.0);
    if t <= 1.0 {
        return delta.divide(2.0).scale(t.powi(3)).add(initial);
    }
    t -= 2.0;
    delta.divide(2.0).scale(t.powi(3) + 2.0).add(initial)
}

fn ease_in_quart<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    delta.scale(t.powi(4)).add(initial)
}

fn ease_out_quart<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration - 1.0;
    delta.negate().scale(t.powi(4) - 1.0).add(initial)
}

fn ease_in_out_quart<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / (duration / 2.0);
    if t <= 1.0 {
        return delta.divide(2.0).scale(t.powi(4)).add(initial);
    }
    t -= 2.0;
    delta.negate().divide(2.0).scale(t.powi(4) - 2.0).add(initial)
}

fn ease_in_quint<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    delta.scale(t.powi(5)).add(initial)
}

fn ease_out_quint<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration - 1.0;
    delta.scale(t.powi(5) + 1.0).add(initial)
}

fn ease_in_out_quint<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / (duration / 2.0);
    if t <= 1.0 {
        return delta.divide(2.0).scale(t.powi(5)).add(initial);
    }
    t -= 2.0;
    delta.divide(2.0).scale(t.powi(5) + 2.0).add(initial)
}

fn ease_in_sine<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    delta
        .negate()
        .scale((time / duration * std::f32::consts::FRAC_PI_2).cos())
        .add(delta)
        .add(initial)
}

fn ease_out_sine<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    delta
        .scale((time / duration * std::f32::consts::FRAC_PI_2).sin())
        .add(initial)
}

fn ease_in_out_sine<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    delta
        .negate()
        .divide(2.0)
        .scale((std::f32::consts::PI * time / duration).cos() - 1.0)
        .add(initial)
}

fn ease_in_expo<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    delta
        .scale(2.0_f32.powf(10.0 * (time / duration - 1.0)))
        .add(initial)
}

fn ease_out_expo<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    delta
        .scale(-(2.0_f32.powf(-10.0 * time / duration)) + 1.0)
        .add(initial)
}

fn ease_in_out_expo<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / (duration / 2.0);
    if t <= 1.0 {
        return delta
            .divide(2.0)
            .scale(2.0_f32.powf(10.0 * (t - 1.0)))
            .add(initial);
    }
    t -= 1.0;
    delta
        .divide(2.0)
        .scale(-(2.0_f32.powf(-10.0 * t)) + 2.0)
        .add(initial)
}

fn ease_in_circ<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    delta
        .negate()
        .scale((1.0 - t * t).sqrt() - 1.0)
        .add(initial)
}

fn ease_out_circ<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration - 1.0;
    delta.scale((1.0 - t * t).sqrt()).add(initial)
}

fn ease_in_out_circ<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / (duration / 2.0);
    if t <= 1.0 {
        return delta
            .negate()
            .divide(2.0)
            .scale((1.0 - t * t).sqrt() - 1.0)
            .add(initial);
    }
    t -= 2.0;
    delta
        .divide(2.0)
        .scale((1.0 - t * t).sqrt() + 1.0)
        .add(initial)
}

fn ease_in_back<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    delta
        .scale(t * t)
        .scale((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT)
        .add(initial)
}

fn ease_out_back<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration - 1.0;
    delta
        .scale(t * t * ((BACK_OVERSHOOT + 1.0) * t + BACK_OVERSHOOT) + 1.0)
        .add(initial)
}

fn ease_in_out_back<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let overshoot = BACK_OVERSHOOT * 1.525;
    let mut t = time / (duration / 2.0);
    if t <= 1.0 {
        return delta
            .divide(2.0)
            .scale(t * t * ((overshoot + 1.0) * t - overshoot))
            .add(initial);
    }
    t -= 2.0;
    delta
        .divide(2.0)
        .scale(t * t * ((overshoot + 1.0) * t + overshoot) + 2.0)
        .add(initial)
}

/// Out-bounce displacement from the pass start: four piecewise quadratic
/// segments of decreasing amplitude. Shared by the In/InOut compositions,
/// which need the curve evaluated with a zero initial value.
fn out_bounce_offset<V: Interpolable>(time: f32, delta: V, duration: f32) -> V {
    let mut t = time / duration;
    if t <= 1.0 / 2.75 {
        return delta.scale(7.5625 * t * t);
    }
    if t <= 2.0 / 2.75 {
        t -= 1.5 / 2.75;
        return delta.scale(7.5625 * t * t + 0.75);
    }
    if t <= 2.5 / 2.75 {
        t -= 2.25 / 2.75;
        return delta.scale(7.5625 * t * t + 0.9375);
    }
    t -= 2.625 / 2.75;
    delta.scale(7.5625 * t * t + 0.984375)
}

/// In-bounce displacement: the time-reversed out-bounce.
fn in_bounce_offset<V: Interpolable>(time: f32, delta: V, duration: f32) -> V {
    delta.subtract(out_bounce_offset(duration - time, delta, duration))
}

fn ease_in_bounce<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    in_bounce_offset(time, delta, duration).add(initial)
}

fn ease_out_bounce<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    out_bounce_offset(time, delta, duration).add(initial)
}

fn ease_in_out_bounce<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    if time <= duration / 2.0 {
        return in_bounce_offset(time * 2.0, delta, duration)
            .scale(0.5)
            .add(initial);
    }
    out_bounce_offset(time * 2.0 - duration, delta, duration)
        .scale(0.5)
        .add(delta.scale(0.5))
        .add(initial)
}

/// Approximate float equality, scaled to the operands' magnitude.
///
/// The elastic formulas oscillate right up to the boundary and only meet
/// the finish value there in exact arithmetic; ticks landing within float
/// noise of the boundary take the exact-finish path instead.
fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}

fn ease_in_elastic<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / duration;
    if approximately(t, 1.0) {
        return initial.add(delta);
    }
    t -= 1.0;
    let period = duration * 0.3;
    let s = period / 4.0;
    delta
        .scale(2.0_f32.powf(10.0 * t))
        .scale(((t * duration - s) * TWO_PI / period).sin())
        .negate()
        .add(initial)
}

fn ease_out_elastic<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let t = time / duration;
    if approximately(t, 1.0) {
        return initial.add(delta);
    }
    let period = duration * 0.3;
    let s = period / 4.0;
    delta
        .scale(2.0_f32.powf(-10.0 * t))
        .scale(((t * duration - s) * TWO_PI / period).sin())
        .add(delta)
        .add(initial)
}

fn ease_in_out_elastic<V: Interpolable>(time: f32, initial: V, delta: V, duration: f32) -> V {
    let mut t = time / (duration / 2.0);
    if approximately(t, 2.0) {
        return initial.add(delta);
    }
    t -= 1.0;
    let period = duration * (0.3 * 1.5);
    let s = period / 4.0;
    if t <= 0.0 {
        return delta
            .scale(2.0_f32.powf(10.0 * t))
            .scale(((t * duration - s) * TWO_PI / period).sin())
            .scale(-0.5)
            .add(initial);
    }
    delta
        .scale(2.0_f32.powf(-10.0 * t))
        .scale(((t * duration - s) * TWO_PI / period).sin())
        .scale(0.5)
        .add(delta)
        .add(initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    /// Curves whose output never reverses direction between the endpoints.
    /// Back overshoots below the start, bounce/elastic oscillate.
    const MONOTONE: [Easing; 22] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInCirc,
        Easing::EaseOutCirc,
        Easing::EaseInOutCirc,
    ];

    #[test]
    fn test_linear_midpoint() {
        let v: f32 = Easing::Linear.apply(500.0, 0.0, 10.0, 1000.0);
        assert!((v - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_in_quad_midpoint() {
        // (0.5)^2 = 0.25 of the delta
        let v: f32 = Easing::EaseInQuad.apply(500.0, 0.0, 10.0, 1000.0);
        assert!((v - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_out_quad_midpoint() {
        // -t(t-2) = 0.75 of the delta
        let v: f32 = Easing::EaseOutQuad.apply(500.0, 0.0, 10.0, 1000.0);
        assert!((v - 7.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_in_out_curves_hit_half_delta_at_midpoint() {
        for easing in [
            Easing::EaseInOutQuad,
            Easing::EaseInOutCubic,
            Easing::EaseInOutQuart,
            Easing::EaseInOutQuint,
            Easing::EaseInOutSine,
            Easing::EaseInOutExpo,
            Easing::EaseInOutCirc,
            Easing::EaseInOutBounce,
        ] {
            let v: f32 = easing.apply(500.0, 0.0, 1.0, 1000.0);
            assert!(
                (v - 0.5).abs() < 1e-3,
                "{easing:?} at midpoint: {v}"
            );
        }
    }

    #[test]
    fn test_monotone_families_never_reverse() {
        for easing in MONOTONE {
            let mut previous: f32 = easing.apply(1.0, 0.0, 10.0, 1000.0);
            for step in 2..1000 {
                let v: f32 = easing.apply(step as f32, 0.0, 10.0, 1000.0);
                assert!(
                    v >= previous - TOLERANCE,
                    "{easing:?} reversed at t={step}: {previous} -> {v}"
                );
                previous = v;
            }
        }
    }

    #[test]
    fn test_curves_approach_endpoints() {
        // Raw formulas near (not at) the boundaries; the driver owns the
        // exact endpoints. Expo famously misses by delta/1024, hence the
        // loose tolerance.
        for easing in Easing::ALL {
            let near_start: f32 = easing.apply(0.001, 0.0, 1.0, 1000.0);
            let near_end: f32 = easing.apply(999.999, 0.0, 1.0, 1000.0);
            assert!(
                near_start.abs() < 2e-3,
                "{easing:?} near t=0: {near_start}"
            );
            assert!(
                (near_end - 1.0).abs() < 2e-3,
                "{easing:?} near t=duration: {near_end}"
            );
        }
    }

    #[test]
    fn test_out_bounce_segment_joints() {
        // Segment boundaries are continuous
        for joint in [1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let before: f32 = Easing::EaseOutBounce.apply(joint * 1000.0 - 0.01, 0.0, 1.0, 1000.0);
            let after: f32 = Easing::EaseOutBounce.apply(joint * 1000.0 + 0.01, 0.0, 1.0, 1000.0);
            assert!((before - after).abs() < 1e-3, "joint {joint}: {before} vs {after}");
        }
    }

    #[test]
    fn test_in_bounce_is_reversed_out_bounce() {
        for step in 1..100 {
            let t = step as f32 * 10.0;
            let forward: f32 = Easing::EaseInBounce.apply(t, 0.0, 1.0, 1000.0);
            let reversed: f32 = Easing::EaseOutBounce.apply(1000.0 - t, 0.0, 1.0, 1000.0);
            assert!((forward - (1.0 - reversed)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_elastic_boundary_guard() {
        let v: f32 = Easing::EaseInElastic.apply(1000.0, 2.0, 8.0, 1000.0);
        assert_eq!(v, 10.0);
        let v: f32 = Easing::EaseOutElastic.apply(1000.0, 2.0, 8.0, 1000.0);
        assert_eq!(v, 10.0);
        let v: f32 = Easing::EaseInOutElastic.apply(1000.0, 2.0, 8.0, 1000.0);
        assert_eq!(v, 10.0);
    }

    #[test]
    fn test_back_overshoots_below_start() {
        let mut lowest: f32 = 0.0;
        for step in 1..1000 {
            let v: f32 = Easing::EaseInBack.apply(step as f32, 0.0, 10.0, 1000.0);
            lowest = lowest.min(v);
        }
        assert!(lowest < 0.0, "ease-in-back never dipped: {lowest}");
    }

    #[test]
    fn test_mirror_is_involution() {
        for easing in Easing::ALL {
            assert_eq!(easing.mirrored().mirrored(), easing);
        }
    }

    #[test]
    fn test_mirror_fixed_points() {
        assert_eq!(Easing::Linear.mirrored(), Easing::Linear);
        for easing in Easing::ALL {
            if easing.name().starts_with("ease-in-out") {
                assert_eq!(easing.mirrored(), easing, "{easing:?}");
            }
        }
    }

    #[test]
    fn test_mirror_swaps_in_and_out() {
        assert_eq!(Easing::EaseInQuad.mirrored(), Easing::EaseOutQuad);
        assert_eq!(Easing::EaseOutElastic.mirrored(), Easing::EaseInElastic);
        assert_eq!(Easing::EaseInBounce.mirrored(), Easing::EaseOutBounce);
    }

    #[test]
    fn test_names_round_trip() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>().unwrap(), easing);
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "ease-in-out-bezier".parse::<Easing>().unwrap_err();
        assert_eq!(
            err,
            crate::error::TweenError::UnknownEasing("ease-in-out-bezier".into())
        );
    }

    #[test]
    fn test_integer_linear_truncates() {
        // delta * t first, then the divide, both truncating toward zero
        assert_eq!(Easing::Linear.apply(333.0, 0, 10, 1000.0), 3);
        assert_eq!(Easing::Linear.apply(250.0, 0, 10, 1000.0), 2);
    }

    #[test]
    fn test_vector_curves_are_componentwise() {
        use glide_core::Vec2;

        let v = Easing::EaseInQuad.apply(
            500.0,
            Vec2::ZERO,
            Vec2::new(8.0, -4.0),
            1000.0,
        );
        assert!((v.x - 2.0).abs() < TOLERANCE);
        assert!((v.y + 1.0).abs() < TOLERANCE);
    }
}
