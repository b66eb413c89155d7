//! Portfolio games crate.
//!
//! Interactive widgets for a static portfolio page compiled to WASM: two quiz
//! mini-games driven by one sequential quiz engine, a performance-optimizer
//! toggle game, skill tiles, a cursor follower and scroll effects. The engine
//! and markup builders are plain Rust; only `page` touches the DOM.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod cursor;
pub mod games;
pub mod keymap;
mod logging;
pub mod nav;
mod page;
pub mod perf;
pub mod quiz;
pub mod render;
pub mod skills;

pub use config::PageConfig;
pub use quiz::{
    ChallengeItem, Marker, Phase, QuizDefinition, QuizError, QuizSession, Selection, Summary,
    Tier, Verdict,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(PageConfig::default().log_level());
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Wire every widget on the current document with default settings.
#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    page::start_page(PageConfig::default())
}

/// Same as [`start_page`] with a JSON [`PageConfig`]; missing keys use defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_page_with_config(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    logging::init(config.log_level());
    page::start_page(config)
}
