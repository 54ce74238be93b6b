//! Rotation engine for one ring
//!
//! Holds the ring's current rotation and drives it through a [`Tween`] once
//! the view has appeared. Timing lives entirely in the tween; the engine only
//! samples it on each frame.

use iced::animation::{Animation, Easing};
use iced::time::{Duration, Instant};

use crate::features::settings::Repeat;

/// Degrees covered by one cycle
pub const FULL_TURN: f32 = 360.0;

/// A value interpolated between two endpoints over a fixed duration
pub trait Tween {
    /// Begin interpolating `from` -> `to` at `now`
    fn start(from: f32, to: f32, duration: Duration, now: Instant) -> Self;

    /// Current interpolated value
    fn sample(&self, now: Instant) -> f32;

    /// Whether the end value has been reached
    fn is_finished(&self, now: Instant) -> bool;
}

/// Linear tween backed by iced's animation primitive
pub struct LinearTween {
    animation: Animation<bool>,
    from: f32,
    to: f32,
}

impl Tween for LinearTween {
    fn start(from: f32, to: f32, duration: Duration, now: Instant) -> Self {
        let mut animation = Animation::new(false)
            .easing(Easing::Linear)
            .duration(duration);
        animation.go_mut(true, now);

        Self { animation, from, to }
    }

    fn sample(&self, now: Instant) -> f32 {
        self.animation.interpolate(self.from, self.to, now)
    }

    fn is_finished(&self, now: Instant) -> bool {
        !self.animation.is_animating(now)
    }
}

/// The ring's mutable rotation
///
/// Completed cycles accumulate, so the value only ever grows while running.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub current_degrees: f64,
}

#[derive(Debug, Clone)]
enum Phase<T> {
    NotStarted,
    Running { tween: T, cycles: u32 },
}

/// Drives one ring's [`AnimationState`]
#[derive(Debug, Clone)]
pub struct RotationEngine<T: Tween = LinearTween> {
    state: AnimationState,
    phase: Phase<T>,
    cycle: Duration,
    repeat: Repeat,
    /// Set once a `Repeat::Once` cycle has reached its end
    settled: bool,
}

impl<T: Tween> RotationEngine<T> {
    pub fn new(cycle: Duration, repeat: Repeat) -> Self {
        Self {
            state: AnimationState::default(),
            phase: Phase::NotStarted,
            cycle,
            repeat,
            settled: false,
        }
    }

    /// Signal that the view became visible
    ///
    /// Starts the 0-360 tween. Later calls are ignored.
    pub fn appear(&mut self, now: Instant) {
        if self.is_started() {
            return;
        }

        self.phase = Phase::Running {
            tween: T::start(0.0, FULL_TURN, self.cycle, now),
            cycles: 0,
        };
    }

    /// Advance to `now`
    pub fn tick(&mut self, now: Instant) {
        let Phase::Running { tween, cycles } = &mut self.phase else {
            return;
        };

        if self.settled {
            return;
        }

        let completed = f64::from(*cycles) * f64::from(FULL_TURN);
        self.state.current_degrees = completed + f64::from(tween.sample(now));

        if !tween.is_finished(now) {
            return;
        }

        *cycles += 1;
        tracing::debug!("Rotation cycle {} complete", cycles);
        self.state.current_degrees = f64::from(*cycles) * f64::from(FULL_TURN);

        match self.repeat {
            // Keep counting up; element rotations only match at the wrap
            // when every `k * 360 / N` turns a whole number of times
            Repeat::Forever => *tween = T::start(0.0, FULL_TURN, self.cycle, now),
            Repeat::Once => self.settled = true,
        }
    }

    pub fn current_degrees(&self) -> f64 {
        self.state.current_degrees
    }

    #[cfg(test)]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Whether frames are still needed
    pub fn is_animating(&self) -> bool {
        self.is_started() && !self.settled
    }

    /// Completed 0-360 cycles
    pub fn cycles(&self) -> u32 {
        match self.phase {
            Phase::NotStarted => 0,
            Phase::Running { cycles, .. } => cycles,
        }
    }
}
