//! Wallpaper - the engine core behind the JS facade
//!
//! `WallpaperCore` owns everything the renderer touches: the settings store,
//! the noise field, the render pipeline with its scratch buffers, pointer
//! state and the frame clock. There are no module-level globals; the host
//! constructs one core per canvas and drives it from its animation loop.

use crate::field::PointerState;
use crate::noise::{xorshift32, NoiseField};
use crate::render::palette::Rgb;
use crate::render::RenderPipeline;
use crate::settings::SettingsStore;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "frame/tick.rs"]
mod tick;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings_ops;
mod facade;

pub use facade::Wallpaper;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Throttled frame interval in milliseconds (30 Hz target).
pub const FRAME_INTERVAL_MS: f64 = tick::FRAME_INTERVAL_MS;

pub struct WallpaperCore {
    store: SettingsStore,
    noise: NoiseField,
    pipeline: RenderPipeline,
    pointer: PointerState,

    // Frame clock
    time_ms: f64,
    last_frame_ms: Option<f64>,
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WallpaperCore {
    /// Create a core for a surface of the given size, seeding the noise
    /// table from wall-clock entropy.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_core(width, height, init::entropy_seed())
    }

    /// Deterministic variant for tests and reproducible captures.
    pub fn new_with_seed(width: u32, height: u32, seed: u32) -> Self {
        init::create_core(width, height, seed)
    }

    pub fn width(&self) -> u32 {
        self.pipeline.frame_buffer().width()
    }

    pub fn height(&self) -> u32 {
        self.pipeline.frame_buffer().height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.pipeline.resize(width, height);
    }

    /// Advance the animation. Returns true when a frame was actually
    /// rendered, false when skipped under the 30 Hz budget.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        tick::tick(self, now_ms)
    }

    /// Forget the frame-clock anchor; wall-clock time until the next tick is
    /// not accumulated. Call when the surface is hidden.
    pub fn suspend(&mut self) {
        self.last_frame_ms = None;
    }

    // === POINTER ===

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.x = x;
        self.pointer.y = y;
        self.pointer.active = true;
    }

    pub fn pointer_left(&mut self) {
        self.pointer.active = false;
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    // === SETTINGS ===

    pub fn set_density(&mut self, density: u32) {
        settings_ops::set_density(self, density);
    }

    pub fn set_speed(&mut self, speed: f32) {
        settings_ops::set_speed(self, speed);
    }

    pub fn set_mouse_radius(&mut self, radius: f32) {
        settings_ops::set_mouse_radius(self, radius);
    }

    pub fn set_contours(&mut self, contours: u32) {
        settings_ops::set_contours(self, contours);
    }

    /// Returns false (and changes nothing) for an unknown scheme name.
    pub fn set_color_scheme(&mut self, name: &str) -> bool {
        settings_ops::set_color_scheme(self, name)
    }

    pub fn set_custom_color(&mut self, color: Rgb) {
        settings_ops::set_custom_color(self, color);
    }

    pub fn clear_custom_color(&mut self) {
        settings_ops::clear_custom_color(self);
    }

    /// Returns false (and changes nothing) for a malformed hex color.
    pub fn set_custom_bg(&mut self, hex: &str) -> bool {
        settings_ops::set_custom_bg(self, hex)
    }

    pub fn clear_custom_bg(&mut self) {
        settings_ops::clear_custom_bg(self);
    }

    pub fn set_mode(&mut self, name: &str) -> bool {
        settings_ops::set_mode(self, name)
    }

    pub fn set_show_coords(&mut self, show: bool) {
        settings_ops::set_show_coords(self, show);
    }

    pub fn set_show_watermark(&mut self, show: bool) {
        settings_ops::set_show_watermark(self, show);
    }

    pub fn set_show_crosshair(&mut self, show: bool) {
        settings_ops::set_show_crosshair(self, show);
    }

    /// Serialized current settings, for syncing the toolbar controls.
    pub fn settings_json(&self) -> String {
        self.store.to_json()
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Hard-coded defaults, fresh permutation table, rewound clock, and the
    /// persisted blob removed.
    pub fn reset(&mut self) {
        self.store.reset();
        self.reseed();
        self.time_ms = 0.0;
        self.last_frame_ms = None;
        self.pointer = PointerState::default();
    }

    /// New permutation table only; settings and clock untouched.
    pub fn reseed(&mut self) {
        let seed = xorshift32(&mut self.rng_state);
        self.noise.reseed(seed);
    }

    // === FRAME EXPORT (JS reads pixels straight from WASM memory) ===

    pub fn pixels_ptr(&self) -> *const u32 {
        self.pipeline.frame_buffer().pixels_ptr()
    }

    pub fn pixels_len_elements(&self) -> usize {
        self.pipeline.frame_buffer().len_elements()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.pipeline.frame_buffer().len_bytes()
    }

    pub fn pixels(&self) -> &[u32] {
        self.pipeline.frame_buffer().pixels()
    }

    // === PERF ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get the last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
