//! RenderPipeline - per-frame orchestration
//!
//! The pipeline is the only component that touches drawing primitives. Each
//! executed frame it: sizes the grid (density vs. the cell cap), fills the
//! background, rebuilds the height field, strokes every contour level in
//! order, then layers the pointer glow/crosshair and the vignette. All
//! scratch buffers (framebuffer, grid, segment list) live here and are
//! reused across frames.

pub mod palette;
pub mod raster;

use crate::contour;
use crate::field::{GridSpec, PointerState, ScalarGrid};
use crate::noise::NoiseField;
use crate::settings::{Mode, RenderSettings};

use palette::{LinePalette, Rgb};
use raster::FrameBuffer;

/// Crosshair arm half-length in pixels.
const CROSSHAIR_SIZE: f32 = 12.0;

/// Segment totals for the last rendered frame (perf reporting).
#[derive(Clone, Copy, Default)]
pub struct FrameReport {
    pub spacing: u32,
    pub cell_count: u32,
    pub segment_count: u32,
}

pub struct RenderPipeline {
    frame: FrameBuffer,
    grid: ScalarGrid,
    segments: Vec<contour::Segment>,
    report: FrameReport,
}

impl RenderPipeline {
    pub fn new(width: u32, height: u32) -> Self {
        RenderPipeline {
            frame: FrameBuffer::new(width, height),
            grid: ScalarGrid::new(),
            segments: Vec::new(),
            report: FrameReport::default(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.frame.resize(width, height);
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn last_report(&self) -> FrameReport {
        self.report
    }

    /// Draw one full frame at accumulated animation time `time_ms`.
    pub fn render(
        &mut self,
        settings: &RenderSettings,
        noise: &NoiseField,
        pointer: PointerState,
        time_ms: f64,
    ) {
        let w = self.frame.width();
        let h = self.frame.height();
        let light = settings.mode == Mode::Light;
        let scheme = settings.color_scheme.def();

        // 1. Background: explicit override, else the scheme color for the mode.
        let bg = settings
            .custom_bg
            .unwrap_or(if light { scheme.light_bg } else { scheme.bg });
        self.frame.fill(bg);

        // 2. Height field under the performance cap.
        let spec = GridSpec::for_viewport(w, h, settings.density);
        self.grid.rebuild(
            spec,
            noise,
            time_ms,
            settings.speed,
            settings.mouse_radius,
            pointer,
        );

        // 3. Contour levels, dim to bright.
        let line_palette =
            LinePalette::resolve(settings.color_scheme, light, settings.custom_color);
        let count = settings.contours.max(1);
        let mut segment_total = 0u32;
        for c in 0..count {
            let level = contour::threshold(c, count);
            let color = line_palette.color(c);
            let alpha = palette::line_alpha(c, count, light);

            contour::extract_into(&self.grid, level, &mut self.segments);
            segment_total += self.segments.len() as u32;
            for seg in &self.segments {
                if palette::level_has_glow(c) {
                    self.frame.stroke_segment_glow(seg, color, alpha);
                }
                self.frame.stroke_segment(seg, color, alpha);
            }
        }

        // 4. Pointer overlay.
        if pointer.active && settings.mouse_radius > 0.0 {
            self.frame.fill_radial_glow(
                pointer.x,
                pointer.y,
                settings.mouse_radius,
                scheme.glow.color,
                scheme.glow.alpha,
            );

            if settings.show_crosshair {
                let marker = if light {
                    Rgb::new(0, 0, 0)
                } else {
                    Rgb::new(255, 255, 255)
                };
                for seg in crosshair_arms(pointer) {
                    self.frame.stroke_segment(&seg, marker, 0.2);
                }
                self.frame
                    .stroke_circle(pointer.x, pointer.y, settings.mouse_radius, marker, 0.06);
            }
        }

        // 5. Vignette, radii scaled off the viewport width.
        let (vignette_color, vignette_alpha) = if light {
            (Rgb::new(255, 255, 255), 0.3)
        } else {
            (Rgb::new(0, 0, 0), 0.4)
        };
        self.frame
            .vignette(w as f32 * 0.3, w as f32 * 0.8, vignette_color, vignette_alpha);

        self.report = FrameReport {
            spacing: spec.spacing,
            cell_count: spec.cell_count() as u32,
            segment_count: segment_total,
        };
    }
}

fn crosshair_arms(pointer: PointerState) -> [contour::Segment; 2] {
    use contour::{Point, Segment};
    [
        Segment {
            start: Point::new(pointer.x - CROSSHAIR_SIZE, pointer.y),
            end: Point::new(pointer.x + CROSSHAIR_SIZE, pointer.y),
        },
        Segment {
            start: Point::new(pointer.x, pointer.y - CROSSHAIR_SIZE),
            end: Point::new(pointer.x, pointer.y + CROSSHAIR_SIZE),
        },
    ]
}
