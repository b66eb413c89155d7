//! Custom cursor: a dot pinned to the pointer and a ring that eases after it.
//!
//! The easing runs once per animation frame (see `page::start_frame_loop`) and
//! has no effect on any game state.

/// Ring position chasing the last known pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    pub target: (f64, f64),
    pub pos: (f64, f64),
    /// Fraction of the remaining distance covered per frame.
    pub easing: f64,
}

impl Follower {
    pub fn new(easing: f64) -> Self {
        Self {
            target: (0.0, 0.0),
            pos: (0.0, 0.0),
            easing: easing.clamp(0.0, 1.0),
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    /// Advance one frame; returns the new ring position.
    pub fn step(&mut self) -> (f64, f64) {
        self.pos.0 += (self.target.0 - self.pos.0) * self.easing;
        self.pos.1 += (self.target.1 - self.pos.1) * self.easing;
        self.pos
    }
}

/// Elements that switch the cursor into its hover state.
pub const HOVER_TARGETS: &str = "a, button, input, textarea, .skill-tile, .work-card";
