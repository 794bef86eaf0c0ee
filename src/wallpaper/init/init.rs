use crate::field::PointerState;
use crate::noise::NoiseField;
use crate::render::RenderPipeline;
use crate::settings::SettingsStore;

use super::perf_stats::PerfStats;
use super::WallpaperCore;

pub(super) fn create_core(width: u32, height: u32, seed: u32) -> WallpaperCore {
    WallpaperCore {
        store: SettingsStore::load(),
        noise: NoiseField::new(seed),
        pipeline: RenderPipeline::new(width, height),
        pointer: PointerState::default(),
        time_ms: 0.0,
        last_frame_ms: None,
        frame: 0,
        rng_state: seed | 1,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Wall-clock entropy for the initial permutation shuffle.
pub(super) fn entropy_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64 as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(0x9E37_79B9)
    }
}
