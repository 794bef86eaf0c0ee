//! ScalarGrid - per-frame height field sampled from the noise
//!
//! The grid is a flat row-major `Vec<f32>` sized from the viewport and the
//! effective spacing, rebuilt in place every executed frame. Spacing is
//! clamped upward so `cols * rows` stays bounded regardless of the requested
//! density, which is what keeps worst-case frame latency in budget.

use crate::noise::{NoiseField, FBM_OCTAVES};

/// Hard cap on sampled cells per frame.
pub const MAX_CELLS: f32 = 50_000.0;

/// Spatial frequency of the base field (pixels -> noise space).
const FIELD_SCALE: f32 = 0.004;

/// Weight of the pointer ripple added onto the base field.
const RIPPLE_WEIGHT: f32 = 0.6;

/// Current pointer position in viewport pixels, plus whether the pointer is
/// over the surface at all. Updated from move/leave events, read once per frame.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        // Parked far off-surface until the first move event.
        PointerState {
            x: -9999.0,
            y: -9999.0,
            active: false,
        }
    }
}

/// Grid geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub spacing: u32,
    pub cols: u32,
    pub rows: u32,
}

impl GridSpec {
    /// Effective spacing for a viewport: the requested density, pushed up
    /// until the cell count fits under [`MAX_CELLS`]. The +2 margin keeps
    /// edge cells interpolatable past the right/bottom viewport border.
    pub fn for_viewport(width: u32, height: u32, density: u32) -> GridSpec {
        let area = (width as f32) * (height as f32);
        let min_spacing = (area / MAX_CELLS).sqrt().ceil() as u32;
        let spacing = density.max(1).max(min_spacing);
        GridSpec {
            spacing,
            cols: (width as f32 / spacing as f32).ceil() as u32 + 2,
            rows: (height as f32 / spacing as f32).ceil() as u32 + 2,
        }
    }

    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }
}

/// Row-major height values for one frame.
pub struct ScalarGrid {
    spec: GridSpec,
    values: Vec<f32>,
}

impl ScalarGrid {
    pub fn new() -> Self {
        ScalarGrid {
            spec: GridSpec {
                spacing: 1,
                cols: 0,
                rows: 0,
            },
            values: Vec::new(),
        }
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    #[inline]
    pub fn value(&self, col: u32, row: u32) -> f32 {
        self.values[(row * self.spec.cols + col) as usize]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Rebuild the whole field for this frame. `time_ms` is accumulated
    /// animation time; `speed` scales both drift and ripple phase. The
    /// ripple term only applies while the pointer is active and
    /// `mouse_radius > 0`.
    pub fn rebuild(
        &mut self,
        spec: GridSpec,
        noise: &NoiseField,
        time_ms: f64,
        speed: f32,
        mouse_radius: f32,
        pointer: PointerState,
    ) {
        self.spec = spec;
        self.values.clear();
        self.values.resize(spec.cell_count(), 0.0);

        let time_offset = (time_ms * 0.0003) as f32 * speed;
        let ripple_phase = (time_ms * 0.005) as f32 * speed;
        let rippling = pointer.active && mouse_radius > 0.0;

        for j in 0..spec.rows {
            let py = (j * spec.spacing) as f32;
            for i in 0..spec.cols {
                let px = (i * spec.spacing) as f32;
                let mut val = noise.fbm(
                    px * FIELD_SCALE + time_offset,
                    py * FIELD_SCALE + time_offset * 0.7,
                    FBM_OCTAVES,
                );

                if rippling {
                    let dx = px - pointer.x;
                    let dy = py - pointer.y;
                    let dist = (dx * dx + dy * dy).sqrt();
                    if dist < mouse_radius {
                        let influence = 1.0 - dist / mouse_radius;
                        let wave = (dist * 0.03 - ripple_phase).sin() * influence * influence;
                        val += wave * RIPPLE_WEIGHT;
                    }
                }

                self.values[(j * spec.cols + i) as usize] = val;
            }
        }
    }

    /// Test/tooling constructor: adopt a pre-built field.
    pub fn from_values(spec: GridSpec, values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), spec.cell_count());
        ScalarGrid { spec, values }
    }
}

impl Default for ScalarGrid {
    fn default() -> Self {
        Self::new()
    }
}
