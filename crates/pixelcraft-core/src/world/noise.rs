//! Seeded value noise
//!
//! Everything here is a pure function of its arguments. Terrain, caves and
//! biomes are built only from these, which is what makes a seed reproduce the
//! same world.

/// Deterministic hash of a number into [0, 1)
#[inline]
pub fn pseudo_random(n: f64) -> f64 {
    let x = n.sin() * 10000.0;
    x - x.floor()
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Smooth 1D value noise in [0, 1)
///
/// Hashes the two lattice points around `x * frequency` and blends them with
/// a smoothstep weight `t^2 (3 - 2t)`.
pub fn noise_1d(x: f64, frequency: f64, seed: f64) -> f64 {
    let scaled_x = x * frequency;
    let x0 = scaled_x.floor();
    let t = scaled_x - x0;

    let v0 = pseudo_random(x0 + seed);
    let v1 = pseudo_random(x0 + 1.0 + seed);

    lerp(v0, v1, t * t * (3.0 - 2.0 * t))
}

/// Bilinear 2D value noise in [0, 1)
///
/// Corner hashes use `x0 + y0 * 57 + seed` so neighbouring rows don't repeat
/// the same lattice values.
pub fn noise_2d(x: f64, y: f64, frequency: f64, seed: f64) -> f64 {
    let sx = x * frequency;
    let sy = y * frequency;
    let x0 = sx.floor();
    let y0 = sy.floor();
    let tx = sx - x0;
    let ty = sy - y0;

    let v00 = pseudo_random(x0 + y0 * 57.0 + seed);
    let v10 = pseudo_random(x0 + 1.0 + y0 * 57.0 + seed);
    let v01 = pseudo_random(x0 + (y0 + 1.0) * 57.0 + seed);
    let v11 = pseudo_random(x0 + 1.0 + (y0 + 1.0) * 57.0 + seed);

    let top = lerp(v00, v10, tx);
    let bottom = lerp(v01, v11, tx);

    lerp(top, bottom, ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_random_range() {
        for i in -500..500 {
            let v = pseudo_random(i as f64 * 0.37);
            assert!((0.0..1.0).contains(&v), "pseudo_random out of range: {}", v);
        }
    }

    #[test]
    fn test_pseudo_random_is_deterministic() {
        for i in 0..100 {
            let n = i as f64 * 1.5 + 42.0;
            assert_eq!(pseudo_random(n).to_bits(), pseudo_random(n).to_bits());
        }
    }

    #[test]
    fn test_noise_1d_hits_lattice_values() {
        // At integer lattice points the smoothstep weight is zero
        let seed = 7.0;
        for x in 0..20 {
            let expected = pseudo_random(x as f64 + seed);
            let actual = noise_1d(x as f64, 1.0, seed);
            assert!((expected - actual).abs() < 1e-12, "x={}", x);
        }
    }

    #[test]
    fn test_noise_1d_stays_between_neighbours() {
        let seed = 3.0;
        let v0 = pseudo_random(seed);
        let v1 = pseudo_random(1.0 + seed);
        let (lo, hi) = if v0 < v1 { (v0, v1) } else { (v1, v0) };
        for step in 0..10 {
            let v = noise_1d(step as f64 * 0.1, 1.0, seed);
            assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
        }
    }

    #[test]
    fn test_noise_2d_hits_corner_values() {
        let seed = 11.0;
        let v00 = pseudo_random(seed);
        let v01 = pseudo_random(57.0 + seed);
        assert!((noise_2d(0.0, 0.0, 1.0, seed) - v00).abs() < 1e-12);
        assert!((noise_2d(0.0, 1.0, 1.0, seed) - v01).abs() < 1e-12);
    }

    #[test]
    fn test_noise_2d_range_and_determinism() {
        for y in 0..40 {
            for x in 0..40 {
                let a = noise_2d(x as f64, y as f64, 0.15, 165.0);
                let b = noise_2d(x as f64, y as f64, 0.15, 165.0);
                assert_eq!(a.to_bits(), b.to_bits());
                assert!((0.0..=1.0).contains(&a));
            }
        }
    }
}
