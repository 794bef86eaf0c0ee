//! FrameBuffer - packed ABGR pixels plus the few drawing primitives the
//! wallpaper needs (src-over blending, 1px strokes, radial fades).
//!
//! ABGR format (little-endian 0xAABBGGRR) so the JS host can wrap the WASM
//! memory in a `Uint8ClampedArray` and hand it straight to `ImageData`.

use crate::contour::Segment;
use crate::render::palette::Rgb;

#[inline]
fn pack(color: Rgb) -> u32 {
    0xFF00_0000 | ((color.b as u32) << 16) | ((color.g as u32) << 8) | (color.r as u32)
}

pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![0xFF00_0000; (width as usize) * (height as usize)],
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width as usize) * (height as usize), 0xFF00_0000);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pointer for the JS host (ImageData over WASM memory).
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len_elements(&self) -> usize {
        self.pixels.len()
    }

    pub fn len_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn fill(&mut self, color: Rgb) {
        let packed = pack(color);
        for px in self.pixels.iter_mut() {
            *px = packed;
        }
    }

    /// Src-over blend of `color` at `alpha` onto an opaque destination.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        let a = (alpha.clamp(0.0, 1.0) * 255.0) as u32;
        if a == 0 {
            return;
        }
        let dst = self.pixels[idx];
        let inv = 255 - a;
        let dr = dst & 0xFF;
        let dg = (dst >> 8) & 0xFF;
        let db = (dst >> 16) & 0xFF;
        let r = (color.r as u32 * a + dr * inv) / 255;
        let g = (color.g as u32 * a + dg * inv) / 255;
        let b = (color.b as u32 * a + db * inv) / 255;
        self.pixels[idx] = 0xFF00_0000 | (b << 16) | (g << 8) | r;
    }

    /// 1px stroke along a segment (DDA walk, each covered pixel blended once).
    pub fn stroke_segment(&mut self, seg: &Segment, color: Rgb, alpha: f32) {
        self.stroke_offset(seg, 0.0, 0.0, color, alpha);
    }

    fn stroke_offset(&mut self, seg: &Segment, ox: f32, oy: f32, color: Rgb, alpha: f32) {
        let ax = seg.start.x + ox;
        let ay = seg.start.y + oy;
        let dx = seg.end.x - seg.start.x;
        let dy = seg.end.y - seg.start.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;

        let mut last = (i32::MIN, i32::MIN);
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let px = (ax + dx * t).round() as i32;
            let py = (ay + dy * t).round() as i32;
            if (px, py) != last {
                self.blend_pixel(px, py, color, alpha);
                last = (px, py);
            }
        }
    }

    /// Soft halo under an emphasized stroke: the same segment re-drawn at the
    /// four unit offsets with reduced alpha (stand-in for canvas shadowBlur).
    pub fn stroke_segment_glow(&mut self, seg: &Segment, color: Rgb, alpha: f32) {
        let halo = alpha * 0.5;
        for (ox, oy) in [(0.0, -1.0), (0.0, 1.0), (-1.0, 0.0), (1.0, 0.0)] {
            self.stroke_offset(seg, ox, oy, color, halo * 0.5);
        }
        self.stroke_offset(seg, 0.0, 0.0, color, halo);
    }

    /// Circle outline, 1px, parametric walk.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        let steps = (radius * std::f32::consts::TAU).ceil().max(8.0) as u32;
        let mut last = (i32::MIN, i32::MIN);
        for s in 0..steps {
            let angle = s as f32 / steps as f32 * std::f32::consts::TAU;
            let px = (cx + radius * angle.cos()).round() as i32;
            let py = (cy + radius * angle.sin()).round() as i32;
            if (px, py) != last {
                self.blend_pixel(px, py, color, alpha);
                last = (px, py);
            }
        }
    }

    /// Radial fade centered on the pointer: `alpha0` at the center, 0.05 at
    /// half radius, transparent at the rim.
    pub fn fill_radial_glow(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, alpha0: f32) {
        if radius <= 0.0 {
            return;
        }
        let x_min = ((cx - radius).floor() as i32).max(0);
        let x_max = ((cx + radius).ceil() as i32).min(self.width as i32 - 1);
        let y_min = ((cy - radius).floor() as i32).max(0);
        let y_max = ((cy + radius).ceil() as i32).min(self.height as i32 - 1);

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let t = (dx * dx + dy * dy).sqrt() / radius;
                if t >= 1.0 {
                    continue;
                }
                let alpha = if t < 0.5 {
                    alpha0 + (0.05 - alpha0) * (t * 2.0)
                } else {
                    0.05 * (1.0 - (t - 0.5) * 2.0)
                };
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }

    /// Radial edge darkening/lightening: transparent inside `inner`, ramping
    /// linearly to `max_alpha` at `outer` and beyond.
    pub fn vignette(&mut self, inner: f32, outer: f32, color: Rgb, max_alpha: f32) {
        if outer <= inner {
            return;
        }
        let cx = self.width as f32 * 0.5;
        let cy = self.height as f32 * 0.5;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let t = ((d - inner) / (outer - inner)).clamp(0.0, 1.0);
                if t > 0.0 {
                    self.blend_pixel(x, y, color, t * max_alpha);
                }
            }
        }
    }
}
