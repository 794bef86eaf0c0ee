//! Topo Engine - interactive topographic wallpaper renderer in WASM
//!
//! A procedural-noise height field is contoured with marching squares and
//! rasterized into an ABGR pixel buffer every animation frame, with
//! pointer-reactive ripple distortion. The JS host owns the canvas, the
//! animation callback and the input events; everything that draws lives
//! here behind the `Wallpaper` facade.
//!
//! Architecture:
//! - noise     - seeded gradient noise + fbm
//! - field     - per-frame scalar grid sampling (with the cell cap)
//! - contour   - marching-squares iso-line extraction
//! - render    - framebuffer, palette, per-frame pipeline
//! - settings  - persisted render configuration
//! - wallpaper - core orchestration + WASM facade

pub mod contour;
pub mod field;
pub mod noise;
pub mod render;
pub mod settings;
pub mod wallpaper;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🗺️ Topo WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use wallpaper::{PerfStats, Wallpaper, WallpaperCore};
