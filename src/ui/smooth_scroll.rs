//! Page-level smooth scroll with exponential ease-out.
//!
//! Input handlers move the *target* offset instantly; each tick the rendered
//! offset closes a fixed fraction of the remaining gap, so the page glides
//! and visibly decelerates into place.  A snap threshold stops the tail of
//! the exponential from running forever.

/// Target-chasing scroll animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Offset actually rendered this frame.
    offset: f64,
    /// Offset the user asked for.
    target: f64,
    /// Easing: `offset += (target - offset) * speed` each tick.
    /// Higher speed = faster settle.  Good range: 0.2–0.5 at 30 fps.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Move the target by a delta (wheel notch, arrow key).
    pub fn nudge(&mut self, delta: f64) {
        self.target += delta;
    }

    /// Jump the target to an absolute offset (section navigation).
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Snap both offset and target (reduce-motion mode, initial placement).
    pub fn jump(&mut self, offset: f64) {
        self.offset = offset;
        self.target = offset;
    }

    /// Keep the target inside the scrollable range.
    pub fn clamp_target(&mut self, max: f64) {
        self.target = self.target.clamp(0.0, max.max(0.0));
    }

    /// Ease toward the target.  Call once per frame; returns `true` while
    /// the offset is still moving.
    pub fn tick(&mut self) -> bool {
        let gap = self.target - self.offset;
        if gap.abs() < 0.4 {
            let moved = self.offset != self.target;
            self.offset = self.target;
            return moved;
        }
        self.offset += gap * self.speed;
        true
    }

    /// True while the animation has not fully settled.
    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_toward_target_and_settles() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.set_target(100.0);
        let mut last = scroll.offset();
        for _ in 0..200 {
            scroll.tick();
            assert!(scroll.offset() >= last, "offset must approach monotonically");
            last = scroll.offset();
        }
        assert_eq!(scroll.offset(), 100.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn clamp_target_bounds_the_request() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.nudge(-50.0);
        scroll.clamp_target(100.0);
        assert_eq!(scroll.target(), 0.0);
        scroll.nudge(500.0);
        scroll.clamp_target(100.0);
        assert_eq!(scroll.target(), 100.0);
    }

    #[test]
    fn jump_snaps_without_animation() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.jump(42.0);
        assert_eq!(scroll.offset(), 42.0);
        assert!(!scroll.is_animating());
    }
}
