use log::trace;
use rand::Rng;

use crate::model::Color;

/// Lightness gap at level 1, in percentage points.
pub const MAX_SHADE_DELTA: f32 = 25.0;
/// Smallest gap ever used; still renders as two different RGB colors.
pub const MIN_SHADE_DELTA: f32 = 2.0;
const SHADE_DECAY: f32 = 0.15;

const SATURATION_RANGE: std::ops::RangeInclusive<f32> = 50.0..=80.0;
const LIGHTNESS_RANGE: std::ops::RangeInclusive<f32> = 35.0..=65.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shades {
    pub main_color: Color,
    pub different_color: Color,
}

/// Lightness difference between the two shades at `level`. Depends only on the level.
pub fn shade_delta(level: u32) -> f32 {
    let steps = level.max(1) - 1;
    (MAX_SHADE_DELTA / (1.0 + steps as f32 * SHADE_DECAY)).max(MIN_SHADE_DELTA)
}

/// Picks a random base color and the slightly lighter target color for `level`.
pub fn generate_shades<R: Rng>(level: u32, rng: &mut R) -> Shades {
    let main_color = Color::hsl(
        rng.random_range(0.0..360.0),
        rng.random_range(SATURATION_RANGE),
        rng.random_range(LIGHTNESS_RANGE),
    );
    let different_color = main_color.with_lightness_offset(shade_delta(level));
    trace!(
        target: "color_shades",
        "level {}: {} vs {}",
        level,
        main_color.to_css(),
        different_color.to_css()
    );
    Shades {
        main_color,
        different_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shade_delta_curve() {
        assert_eq!(shade_delta(1), MAX_SHADE_DELTA);
        assert_eq!(shade_delta(0), MAX_SHADE_DELTA);
        assert_eq!(shade_delta(1000), MIN_SHADE_DELTA);

        let mut previous = shade_delta(1);
        for level in 2..300 {
            let delta = shade_delta(level);
            assert!(delta <= previous, "delta grew at level {}", level);
            assert!(delta >= MIN_SHADE_DELTA);
            previous = delta;
        }
    }

    #[test]
    fn test_generated_shades_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for level in 1..200 {
            let shades = generate_shades(level, &mut rng);
            assert_ne!(
                shades.main_color.to_rgb(),
                shades.different_color.to_rgb(),
                "indistinguishable shades at level {}",
                level
            );
            let distance = shades.main_color.lightness_distance(&shades.different_color);
            assert!((distance - shade_delta(level)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_only_the_base_color_is_random() {
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let a = generate_shades(12, &mut rng_a);
        let b = generate_shades(12, &mut rng_b);
        assert_ne!(a.main_color, b.main_color);
        let distance_a = a.main_color.lightness_distance(&a.different_color);
        let distance_b = b.main_color.lightness_distance(&b.different_color);
        assert!((distance_a - distance_b).abs() < 1e-3);
    }

    #[test]
    fn test_same_seed_same_shades() {
        let a = generate_shades(5, &mut StdRng::seed_from_u64(99));
        let b = generate_shades(5, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
