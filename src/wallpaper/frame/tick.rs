//! Frame pacing and per-frame execution.
//!
//! The host calls `tick` on every animation callback; the engine
//! self-throttles to the 30 Hz target by comparing host timestamps against
//! the frame interval. Animation time advances only across executed frames,
//! so `suspend()` (which forgets the clock anchor) freezes the wallpaper at
//! the suspended instant with no catch-up on resume.

use super::{PerfTimer, WallpaperCore};

pub(super) const TARGET_FPS: f64 = 30.0;
pub(super) const FRAME_INTERVAL_MS: f64 = 1000.0 / TARGET_FPS;

pub(super) fn tick(core: &mut WallpaperCore, now_ms: f64) -> bool {
    match core.last_frame_ms {
        Some(last) => {
            let delta = now_ms - last;
            if delta < FRAME_INTERVAL_MS {
                if core.perf_enabled {
                    core.perf_stats.frames_skipped = core.perf_stats.frames_skipped.wrapping_add(1);
                }
                return false;
            }
            // Keep the residual so the cadence stays locked to the interval.
            core.last_frame_ms = Some(now_ms - (delta % FRAME_INTERVAL_MS));
            core.time_ms += delta;
        }
        None => {
            // First frame, or first tick after suspend: re-anchor without
            // accumulating any of the elapsed wall-clock time.
            core.last_frame_ms = Some(now_ms);
        }
    }

    execute_frame(core);
    true
}

fn execute_frame(core: &mut WallpaperCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset_frame();
    }
    let frame_start = if perf_on { Some(PerfTimer::start()) } else { None };

    core.pipeline
        .render(core.store.settings(), &core.noise, core.pointer, core.time_ms);

    if let Some(start) = frame_start {
        let report = core.pipeline.last_report();
        core.perf_stats.frame_ms = start.elapsed_ms();
        core.perf_stats.spacing = report.spacing;
        core.perf_stats.cell_count = report.cell_count;
        core.perf_stats.segment_count = report.segment_count;
        core.perf_stats.contour_levels = core.store.settings().contours;
        core.perf_stats.frames_rendered = core.perf_stats.frames_rendered.wrapping_add(1);
    }

    core.frame += 1;
}
