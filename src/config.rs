//! Runtime tunables for the page widgets.

/// Page behaviour knobs. Defaults reproduce the shipped portfolio.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    /// Fraction of the gap the cursor ring closes per frame.
    pub follower_easing: f64,
    /// Distance below the viewport top used to pick the active nav link.
    pub nav_offset_px: f64,
    /// Scroll distance after which the nav gets its shadow.
    pub nav_shadow_threshold_px: f64,
    pub parallax_factor: f64,
    /// Visible fraction at which `.fade-up` elements are revealed.
    pub reveal_threshold: f64,
    /// Visible fraction at which skill rings animate.
    pub ring_reveal_threshold: f64,
    pub form_success_ms: i32,
    /// Emit `debug` records to the console.
    pub verbose: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            follower_easing: 0.15,
            nav_offset_px: 140.0,
            nav_shadow_threshold_px: 10.0,
            parallax_factor: 0.3,
            reveal_threshold: 0.1,
            ring_reveal_threshold: 0.3,
            form_success_ms: 4000,
            verbose: false,
        }
    }
}

impl PageConfig {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Parse a (possibly partial) JSON config; missing keys keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
