//! NoiseField - seeded 2D gradient noise for the height field
//!
//! Classic Perlin-style noise: a shuffled 256-entry permutation table
//! (doubled to 512 so corner hashing never wraps mid-lookup) selects one of
//! 8 fixed gradient directions per lattice corner. Sampling is a pure
//! function of the table; `reseed` swaps the table and nothing else.

/// Octave count used by the wallpaper field (higher = richer, linearly slower).
pub const FBM_OCTAVES: u32 = 4;

const GRADS: [(f32, f32); 8] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

pub struct NoiseField {
    perm: [u8; 512],
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        let mut field = NoiseField { perm: [0; 512] };
        field.reseed(seed);
        field
    }

    /// Rebuild the permutation table with a Fisher-Yates shuffle.
    pub fn reseed(&mut self, seed: u32) {
        // xorshift32 has a fixed point at zero.
        let mut rng = seed | 1;
        let mut p: [u8; 256] = [0; 256];
        for (i, v) in p.iter_mut().enumerate() {
            *v = i as u8;
        }
        for i in (1..256usize).rev() {
            let j = (xorshift32(&mut rng) as usize) % (i + 1);
            p.swap(i, j);
        }
        for i in 0..512 {
            self.perm[i] = p[i & 255];
        }
    }

    /// Single-octave gradient noise, deterministic for a fixed table.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let xi = (x.floor() as i32 & 255) as usize;
        let yi = (y.floor() as i32 & 255) as usize;
        let xf = x - x.floor();
        let yf = y - y.floor();
        let u = fade(xf);
        let v = fade(yf);

        let aa = self.perm[self.perm[xi] as usize + yi];
        let ab = self.perm[self.perm[xi] as usize + yi + 1];
        let ba = self.perm[self.perm[xi + 1] as usize + yi];
        let bb = self.perm[self.perm[xi + 1] as usize + yi + 1];

        lerp(
            lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u),
            lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u),
            v,
        )
    }

    /// Fractal Brownian Motion: `octaves` layers at doubling frequency and
    /// halving amplitude, normalized by the amplitude sum.
    pub fn fbm(&self, x: f32, y: f32, octaves: u32) -> f32 {
        let mut val = 0.0;
        let mut amp = 1.0;
        let mut freq = 1.0;
        let mut max_val = 0.0;
        for _ in 0..octaves.max(1) {
            val += amp * self.sample(x * freq, y * freq);
            max_val += amp;
            amp *= 0.5;
            freq *= 2.0;
        }
        val / max_val
    }
}

#[inline]
fn fade(t: f32) -> f32 {
    // smootherstep: 6t^5 - 15t^4 + 10t^3
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: u8, x: f32, y: f32) -> f32 {
    let (gx, gy) = GRADS[(hash & 7) as usize];
    gx * x + gy * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_deterministic_for_fixed_table() {
        let noise = NoiseField::new(42);
        for &(x, y) in &[(0.3f32, 0.7f32), (12.25, -4.5), (255.9, 255.9), (-1.5, 3.25)] {
            assert_eq!(noise.sample(x, y), noise.sample(x, y));
        }
    }

    #[test]
    fn same_seed_same_field_different_seed_differs_somewhere() {
        let a = NoiseField::new(7);
        let b = NoiseField::new(7);
        let c = NoiseField::new(8);
        let mut diverged = false;
        for i in 0..64 {
            let x = i as f32 * 0.37 + 0.11;
            let y = i as f32 * 0.73 + 0.29;
            assert_eq!(a.sample(x, y), b.sample(x, y));
            if a.sample(x, y) != c.sample(x, y) {
                diverged = true;
            }
        }
        assert!(diverged, "reseeding should change the field");
    }

    #[test]
    fn reseed_changes_only_the_table() {
        let mut noise = NoiseField::new(1);
        let before = noise.sample(3.7, 9.1);
        noise.reseed(1);
        assert_eq!(noise.sample(3.7, 9.1), before);
        noise.reseed(2);
        // A fresh shuffle almost surely moves this sample.
        let _ = noise.sample(3.7, 9.1);
    }

    #[test]
    fn fbm_stays_in_unit_range() {
        let noise = NoiseField::new(1234);
        for octaves in 1..=6u32 {
            for i in 0..500 {
                let x = (i % 50) as f32 * 0.173;
                let y = (i / 50) as f32 * 0.291;
                let v = noise.fbm(x, y, octaves);
                assert!((-1.0..=1.0).contains(&v), "fbm({x},{y},{octaves}) = {v}");
            }
        }
    }

    #[test]
    fn fbm_zero_octaves_treated_as_one() {
        let noise = NoiseField::new(5);
        assert_eq!(noise.fbm(1.5, 2.5, 0), noise.fbm(1.5, 2.5, 1));
    }

    #[test]
    fn permutation_table_wraps_cleanly() {
        let noise = NoiseField::new(99);
        // Sampling across the 256-cell wrap boundary must not panic and must
        // stay continuous-ish (no index-out-of-range via the doubled table).
        let _ = noise.sample(255.999, 255.999);
        let _ = noise.sample(-0.001, -0.001);
        let _ = noise.sample(1e6, -1e6);
    }
}
