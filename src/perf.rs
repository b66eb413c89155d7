//! Performance Optimizer mini-game: toggle optimizations, watch the page score climb.

use crate::render::dash_offset;

/// A single optimization the player can switch on.
#[derive(Clone, Copy, Debug)]
pub struct PerfOption {
    pub label: &'static str,
    pub points: u32,
    pub tip: &'static str,
}

pub const BASE_SCORE: u32 = 35;
pub const MAX_SCORE: u32 = 100;
/// Radius of the score gauge circle in the page markup.
pub const RING_RADIUS: f64 = 52.0;

pub const PERF_OPTIONS: &[PerfOption] = &[
    PerfOption {
        label: "Compress images (WebP)",
        points: 15,
        tip: "WebP images are 25-35% smaller than JPEG at equivalent quality.",
    },
    PerfOption {
        label: "Enable lazy loading",
        points: 12,
        tip: "Only load images when they enter the viewport, saving initial bandwidth.",
    },
    PerfOption {
        label: "Minify CSS & JS",
        points: 10,
        tip: "Remove whitespace and shorten variable names to reduce file sizes by 20-40%.",
    },
    PerfOption {
        label: "Use a CDN",
        points: 10,
        tip: "Serve assets from edge servers closest to your user for faster delivery.",
    },
    PerfOption {
        label: "Enable browser caching",
        points: 8,
        tip: "Return visitors load cached assets instantly instead of re-downloading.",
    },
    PerfOption {
        label: "Defer non-critical JS",
        points: 8,
        tip: "Let the page render first, then load scripts that aren't needed immediately.",
    },
    PerfOption {
        label: "Remove unused CSS",
        points: 5,
        tip: "Eliminate dead CSS rules to reduce render-blocking stylesheet size.",
    },
    PerfOption {
        label: "Preconnect to origins",
        points: 3,
        tip: "Establish early connections to third-party domains to reduce DNS/TLS time.",
    },
];

/// Colour band of the gauge, Lighthouse style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Fast,
    Average,
    Slow,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            ScoreBand::Fast
        } else if score >= 50 {
            ScoreBand::Average
        } else {
            ScoreBand::Slow
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Fast => "#c8ff00",
            ScoreBand::Average => "#f59e0b",
            ScoreBand::Slow => "#ff3cac",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerfOptimizer {
    enabled: Vec<bool>,
}

impl Default for PerfOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfOptimizer {
    pub fn new() -> Self {
        Self {
            enabled: vec![false; PERF_OPTIONS.len()],
        }
    }

    /// Out-of-range indices are ignored.
    pub fn set(&mut self, idx: usize, on: bool) {
        if let Some(slot) = self.enabled.get_mut(idx) {
            *slot = on;
        }
    }

    pub fn score(&self) -> u32 {
        let bonus: u32 = PERF_OPTIONS
            .iter()
            .zip(&self.enabled)
            .filter(|(_, on)| **on)
            .map(|(opt, _)| opt.points)
            .sum();
        (BASE_SCORE + bonus).min(MAX_SCORE)
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score())
    }

    /// Dash offset of the score gauge.
    pub fn ring_offset(&self) -> f64 {
        dash_offset(self.score() as f64, RING_RADIUS)
    }
}
