use wasm_bindgen::prelude::*;

/// Per-frame timing snapshot (zeros while perf metrics are disabled).
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) spacing: u32,
    pub(super) cell_count: u32,
    pub(super) segment_count: u32,
    pub(super) contour_levels: u32,
    pub(super) frames_rendered: u32,
    pub(super) frames_skipped: u32,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 {
        self.frame_ms
    }

    #[wasm_bindgen(getter)]
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    #[wasm_bindgen(getter)]
    pub fn contour_levels(&self) -> u32 {
        self.contour_levels
    }

    #[wasm_bindgen(getter)]
    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    #[wasm_bindgen(getter)]
    pub fn frames_skipped(&self) -> u32 {
        self.frames_skipped
    }
}

impl PerfStats {
    pub(crate) fn reset_frame(&mut self) {
        self.frame_ms = 0.0;
        self.spacing = 0;
        self.cell_count = 0;
        self.segment_count = 0;
        self.contour_levels = 0;
    }
}
