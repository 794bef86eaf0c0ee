//! ContourExtractor - iso-line extraction via marching squares
//!
//! Every 2x2 cell of the height field is classified by which corners sit at
//! or above the threshold; crossed edges are interpolated and joined into
//! line segments in pixel space. Saddle cells (two opposite corners high)
//! are resolved by pairing crossings in collection order, without a
//! center-sample tiebreak. The occasional misconnected saddle is invisible
//! at wallpaper line weights, so the cheaper rule stays.

use crate::field::ScalarGrid;

/// Contour levels span this fixed value range of the height field.
pub const LEVEL_MIN: f32 = -0.8;
pub const LEVEL_MAX: f32 = 0.8;

/// Below this corner-value difference an edge crossing collapses to the
/// edge midpoint instead of dividing by a near-zero denominator.
const EDGE_EPS: f32 = 1e-4;

/// A point in 2D space (pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Threshold for contour `index` of `count`: evenly spaced over
/// `[LEVEL_MIN, LEVEL_MAX)`, strictly increasing.
#[inline]
pub fn threshold(index: u32, count: u32) -> f32 {
    LEVEL_MIN + (LEVEL_MAX - LEVEL_MIN) * (index as f32 / count.max(1) as f32)
}

#[inline]
fn interp(threshold: f32, va: f32, vb: f32, pa: f32, pb: f32) -> f32 {
    if (vb - va).abs() < EDGE_EPS {
        return (pa + pb) * 0.5;
    }
    let t = (threshold - va) / (vb - va);
    pa + t * (pb - pa)
}

/// Extract all segments for one threshold into `out` (cleared first).
/// Segment coordinates are in pixels (`grid cell * spacing`).
pub fn extract_into(grid: &ScalarGrid, level: f32, out: &mut Vec<Segment>) {
    out.clear();
    let spec = grid.spec();
    if spec.cols < 2 || spec.rows < 2 {
        return;
    }
    let spacing = spec.spacing as f32;

    for j in 0..spec.rows - 1 {
        for i in 0..spec.cols - 1 {
            // Corners clockwise from top-left.
            let v0 = grid.value(i, j);
            let v1 = grid.value(i + 1, j);
            let v2 = grid.value(i + 1, j + 1);
            let v3 = grid.value(i, j + 1);

            let b0 = v0 >= level;
            let b1 = v1 >= level;
            let b2 = v2 >= level;
            let b3 = v3 >= level;

            // Entirely below or entirely above: no crossing.
            if b0 == b1 && b1 == b2 && b2 == b3 {
                continue;
            }

            let x0 = i as f32 * spacing;
            let y0 = j as f32 * spacing;
            let x1 = (i + 1) as f32 * spacing;
            let y1 = (j + 1) as f32 * spacing;

            // Crossed-edge points, in fixed top/right/bottom/left order.
            let mut pts = [Point::new(0.0, 0.0); 4];
            let mut n = 0;
            if b0 != b1 {
                pts[n] = Point::new(interp(level, v0, v1, x0, x1), y0);
                n += 1;
            }
            if b1 != b2 {
                pts[n] = Point::new(x1, interp(level, v1, v2, y0, y1));
                n += 1;
            }
            if b3 != b2 {
                pts[n] = Point::new(interp(level, v3, v2, x0, x1), y1);
                n += 1;
            }
            if b0 != b3 {
                pts[n] = Point::new(x0, interp(level, v0, v3, y0, y1));
                n += 1;
            }

            // 2 crossings: one segment. 4 crossings: ambiguous saddle,
            // paired (0,1) and (2,3) in collection order. Other counts
            // cannot occur; treat them as no-ops.
            match n {
                2 => out.push(Segment {
                    start: pts[0],
                    end: pts[1],
                }),
                4 => {
                    out.push(Segment {
                        start: pts[0],
                        end: pts[1],
                    });
                    out.push(Segment {
                        start: pts[2],
                        end: pts[3],
                    });
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{GridSpec, ScalarGrid};

    fn grid_2x2(v0: f32, v1: f32, v2: f32, v3: f32, spacing: u32) -> ScalarGrid {
        let spec = GridSpec {
            spacing,
            cols: 2,
            rows: 2,
        };
        // Row-major: [top-left, top-right, bottom-left, bottom-right].
        ScalarGrid::from_values(spec, vec![v0, v1, v3, v2])
    }

    #[test]
    fn thresholds_are_evenly_spaced_over_fixed_range() {
        let n = 16;
        let levels: Vec<f32> = (0..n).map(|i| threshold(i, n)).collect();
        assert_eq!(levels[0], -0.8);
        for w in levels.windows(2) {
            assert!((w[1] - w[0] - 0.1).abs() < 1e-6);
            assert!(w[1] > w[0]);
        }
        assert!((levels[15] - 0.7).abs() < 1e-6);
        assert!(*levels.last().unwrap() < LEVEL_MAX);
    }

    #[test]
    fn flat_cell_below_threshold_emits_nothing() {
        let grid = grid_2x2(0.0, 0.0, 0.0, 0.0, 10);
        let mut out = Vec::new();
        extract_into(&grid, 0.5, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn flat_cell_above_threshold_emits_nothing() {
        let grid = grid_2x2(1.0, 1.0, 1.0, 1.0, 10);
        let mut out = Vec::new();
        extract_into(&grid, 0.5, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn top_row_above_threshold_crosses_left_and_right_edges() {
        let grid = grid_2x2(1.0, 1.0, 0.0, 0.0, 10);
        let mut out = Vec::new();
        extract_into(&grid, 0.5, &mut out);
        assert_eq!(out.len(), 1);
        let seg = out[0];
        // Right edge crossing collected first (top edge is uncrossed).
        assert_eq!(seg.start, Point::new(10.0, 5.0));
        assert_eq!(seg.end, Point::new(0.0, 5.0));
    }

    #[test]
    fn single_high_corner_cuts_its_two_edges() {
        let grid = grid_2x2(1.0, 0.0, 0.0, 0.0, 10);
        let mut out = Vec::new();
        extract_into(&grid, 0.5, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, Point::new(5.0, 0.0));
        assert_eq!(out[0].end, Point::new(0.0, 5.0));
    }

    #[test]
    fn saddle_emits_two_segments_paired_in_collection_order() {
        // v0 and v2 high: case with all four edges crossed.
        let grid = grid_2x2(1.0, 0.0, 1.0, 0.0, 10);
        let mut out = Vec::new();
        extract_into(&grid, 0.5, &mut out);
        assert_eq!(out.len(), 2);
        // top-right pair, then bottom-left pair; no center disambiguation.
        assert_eq!(out[0].start, Point::new(5.0, 0.0));
        assert_eq!(out[0].end, Point::new(10.0, 5.0));
        assert_eq!(out[1].start, Point::new(5.0, 10.0));
        assert_eq!(out[1].end, Point::new(0.0, 5.0));
    }

    #[test]
    fn near_degenerate_edge_falls_back_to_midpoint() {
        // Corner values straddle the level but differ by less than EDGE_EPS.
        let eps = 2e-5;
        let grid = grid_2x2(0.5 + eps, 0.5 - eps, 0.0, 0.0, 10);
        let mut out = Vec::new();
        extract_into(&grid, 0.5, &mut out);
        assert_eq!(out.len(), 1);
        // Top edge crossing sits at the midpoint, not at an extrapolated x.
        assert_eq!(out[0].start.x, 5.0);
        assert_eq!(out[0].start.y, 0.0);
    }

    #[test]
    fn all_zero_grid_at_zero_threshold_is_quiet() {
        let spec = GridSpec {
            spacing: 1,
            cols: 100,
            rows: 100,
        };
        let grid = ScalarGrid::from_values(spec, vec![0.0; spec.cell_count()]);
        let mut out = Vec::new();
        extract_into(&grid, 0.0, &mut out);
        // Every corner is >= 0, so every cell is case "all above".
        assert!(out.is_empty());
    }

    #[test]
    fn segment_endpoints_stay_on_cell_edges() {
        let spec = GridSpec {
            spacing: 4,
            cols: 8,
            rows: 8,
        };
        let values: Vec<f32> = (0..spec.cell_count())
            .map(|i| ((i as u64 * 2654435761) % 1000) as f32 / 500.0 - 1.0)
            .collect();
        let grid = ScalarGrid::from_values(spec, values);
        let mut out = Vec::new();
        for c in 0..16 {
            extract_into(&grid, threshold(c, 16), &mut out);
            for seg in &out {
                for p in [seg.start, seg.end] {
                    let on_vertical = (p.x / 4.0).fract() == 0.0;
                    let on_horizontal = (p.y / 4.0).fract() == 0.0;
                    assert!(on_vertical || on_horizontal);
                    assert!(p.x >= 0.0 && p.x <= 7.0 * 4.0);
                    assert!(p.y >= 0.0 && p.y <= 7.0 * 4.0);
                }
            }
        }
    }
}
