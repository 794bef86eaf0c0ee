use wasm_bindgen::prelude::*;

use crate::render::palette::Rgb;

use super::{PerfStats, WallpaperCore};

/// JS-facing wallpaper engine: one instance per canvas. The host drives
/// `tick` from requestAnimationFrame and blits `pixels_ptr` into an
/// ImageData; input events and toolbar controls call the setters.
#[wasm_bindgen]
pub struct Wallpaper {
    core: WallpaperCore,
}

#[wasm_bindgen]
impl Wallpaper {
    /// Create an engine for a surface of the given pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WallpaperCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Advance the animation; returns whether a frame was rendered.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.core.tick(now_ms)
    }

    /// Call when the tab is hidden so hidden time is never animated.
    pub fn suspend(&mut self) {
        self.core.suspend();
    }

    // === POINTER (mouse and touch both land here) ===

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.core.pointer_moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.core.pointer_left();
    }

    // === TOOLBAR ===

    pub fn set_density(&mut self, density: u32) {
        self.core.set_density(density);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.core.set_speed(speed);
    }

    pub fn set_mouse_radius(&mut self, radius: f32) {
        self.core.set_mouse_radius(radius);
    }

    pub fn set_contours(&mut self, contours: u32) {
        self.core.set_contours(contours);
    }

    /// Unknown names are logged and ignored.
    pub fn set_color_scheme(&mut self, name: &str) -> bool {
        let ok = self.core.set_color_scheme(name);
        if !ok {
            web_sys::console::warn_1(&format!("unknown color scheme: {name}").into());
        }
        ok
    }

    pub fn set_custom_color(&mut self, r: u8, g: u8, b: u8) {
        self.core.set_custom_color(Rgb::new(r, g, b));
    }

    pub fn clear_custom_color(&mut self) {
        self.core.clear_custom_color();
    }

    /// Expects `#rrggbb`; malformed input is logged and ignored.
    pub fn set_custom_bg(&mut self, hex: &str) -> bool {
        let ok = self.core.set_custom_bg(hex);
        if !ok {
            web_sys::console::warn_1(&format!("invalid background color: {hex}").into());
        }
        ok
    }

    pub fn clear_custom_bg(&mut self) {
        self.core.clear_custom_bg();
    }

    /// "dark" or "light"; anything else is logged and ignored.
    pub fn set_mode(&mut self, name: &str) -> bool {
        let ok = self.core.set_mode(name);
        if !ok {
            web_sys::console::warn_1(&format!("unknown mode: {name}").into());
        }
        ok
    }

    pub fn set_show_coords(&mut self, show: bool) {
        self.core.set_show_coords(show);
    }

    pub fn set_show_watermark(&mut self, show: bool) {
        self.core.set_show_watermark(show);
    }

    pub fn set_show_crosshair(&mut self, show: bool) {
        self.core.set_show_crosshair(show);
    }

    /// Current settings as JSON, for syncing sliders and pickers on load.
    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    /// Defaults + fresh noise + rewound clock; drops the persisted blob.
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Re-roll the terrain without touching any settings.
    pub fn reseed(&mut self) {
        self.core.reseed();
    }

    // === FRAME EXPORT ===

    /// Pointer to the ABGR pixel buffer (for ImageData over WASM memory);
    /// also the source for the PNG download path.
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len_elements(&self) -> usize {
        self.core.pixels_len_elements()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.core.pixels_len_bytes()
    }

    // === PERF ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get the last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
