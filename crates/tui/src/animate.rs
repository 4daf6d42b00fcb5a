//! Stepped resize animation.
//!
//! A resize transition is an explicit state machine advanced by scheduler
//! ticks, never a blocking loop: each tick yields the next interpolated
//! geometry and control returns to the host between steps. Cancellation is
//! generation-based: the dashboard bumps its generation on destroy and on
//! every newer resize, and a tick whose generation is stale applies nothing.

use portico_model::Dimensions;

/// An in-flight stepped resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeAnimation {
    start: Dimensions,
    target: Dimensions,
    step: u32,
    total: u32,
    generation: u64,
}

impl ResizeAnimation {
    /// Creates an animation from `start` to `target` over `total` steps.
    ///
    /// A zero `total` is treated as one step.
    #[must_use]
    pub fn new(start: Dimensions, target: Dimensions, total: u32, generation: u64) -> Self {
        Self {
            start,
            target,
            step: 0,
            total: total.max(1),
            generation,
        }
    }

    /// The generation this animation belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The final geometry.
    #[must_use]
    pub fn target(&self) -> Dimensions {
        self.target
    }

    /// Steps remaining before the animation completes.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total - self.step
    }

    /// Whether every step has been consumed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step >= self.total
    }

    /// Advances one step and returns the geometry to apply.
    ///
    /// The final step returns exactly the target; further calls return
    /// `None`.
    pub fn tick(&mut self) -> Option<Dimensions> {
        if self.is_done() {
            return None;
        }
        self.step += 1;
        if self.step == self.total {
            return Some(self.target);
        }

        Some(Dimensions {
            width: lerp(self.start.width, self.target.width, self.step, self.total),
            height: lerp(self.start.height, self.target.height, self.step, self.total),
            row: lerp(self.start.row, self.target.row, self.step, self.total),
            col: lerp(self.start.col, self.target.col, self.step, self.total),
        })
    }
}

/// Linear interpolation on cell coordinates.
fn lerp(start: u16, end: u16, step: u32, total: u32) -> u16 {
    let delta = (i64::from(end) - i64::from(start)) * i64::from(step) / i64::from(total);
    u16::try_from(i64::from(start) + delta).unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u16, height: u16) -> Dimensions {
        Dimensions::new(width, height, 0, 0)
    }

    #[test]
    fn final_step_is_exact_target() {
        let mut anim = ResizeAnimation::new(dims(10, 10), dims(23, 17), 3, 0);
        let mut last = None;
        while let Some(d) = anim.tick() {
            last = Some(d);
        }
        assert_eq!(last, Some(dims(23, 17)));
        assert!(anim.is_done());
    }

    #[test]
    fn steps_move_monotonically_toward_target() {
        let mut anim = ResizeAnimation::new(dims(10, 10), dims(50, 30), 5, 0);
        let mut previous = 10;
        while let Some(d) = anim.tick() {
            assert!(d.width >= previous);
            assert!(d.width <= 50);
            previous = d.width;
        }
    }

    #[test]
    fn shrinking_works_too() {
        let mut anim = ResizeAnimation::new(dims(60, 30), dims(20, 10), 4, 0);
        let mut previous = 60;
        while let Some(d) = anim.tick() {
            assert!(d.width <= previous);
            previous = d.width;
        }
        assert_eq!(previous, 20);
    }

    #[test]
    fn tick_after_done_is_none() {
        let mut anim = ResizeAnimation::new(dims(10, 10), dims(20, 20), 1, 0);
        assert_eq!(anim.tick(), Some(dims(20, 20)));
        assert_eq!(anim.tick(), None);
        assert_eq!(anim.tick(), None);
    }

    #[test]
    fn zero_steps_coerces_to_one() {
        let mut anim = ResizeAnimation::new(dims(10, 10), dims(20, 20), 0, 0);
        assert_eq!(anim.remaining(), 1);
        assert_eq!(anim.tick(), Some(dims(20, 20)));
    }

    #[test]
    fn remaining_counts_down() {
        let mut anim = ResizeAnimation::new(dims(10, 10), dims(20, 20), 5, 0);
        assert_eq!(anim.remaining(), 5);
        let _ = anim.tick();
        let _ = anim.tick();
        assert_eq!(anim.remaining(), 3);
    }
}
