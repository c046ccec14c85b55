//! Decay pass - time-based effects applied once the movement scan is done
//!
//! Clears every `updated` flag, ages every particle by the tick's delta and
//! retires or recolors the short-lived materials.

use rand::Rng;

use crate::domain::catalog;
use crate::domain::{Color, Material};
use crate::simulation::SimSettings;
use crate::spatial::grid::Grid;

pub const FIRE_LIFETIME: f32 = 2.0;
pub const SMOKE_LIFETIME: f32 = 8.0;
pub const EMBER_LIFETIME: f32 = 0.5;
pub const STEAM_LIFETIME: f32 = 10.0;
/// Alpha steam fades down to just before it vanishes.
pub const STEAM_MIN_ALPHA: u8 = 30;
/// Smoke thins toward this.
const SMOKE_FADE_TARGET: Color = Color::rgba(140, 140, 140, 0);

/// Returns how many particles expired.
pub fn apply<R: Rng + ?Sized>(grid: &mut Grid, settings: &SimSettings, rng: &mut R, dt: f32) -> u32 {
    grid.reset_updated();

    let mut expired = 0;
    for idx in 0..grid.size() {
        let material = grid.materials[idx];
        if material.is_empty() {
            continue;
        }
        grid.ages[idx] += dt;
        let age = grid.ages[idx];

        let gone = match material {
            Material::Fire => {
                if age > FIRE_LIFETIME && rng.gen::<f32>() < settings.fire_extinguish_chance {
                    true
                } else {
                    grid.colors[idx] = catalog::fire_flicker(rng);
                    false
                }
            }
            Material::Smoke => {
                if age > SMOKE_LIFETIME {
                    true
                } else {
                    let base = catalog::default_color(Material::Smoke);
                    grid.colors[idx] = base.lerp(SMOKE_FADE_TARGET, age / SMOKE_LIFETIME);
                    false
                }
            }
            Material::Ember => age > EMBER_LIFETIME,
            Material::Steam => {
                if age > STEAM_LIFETIME {
                    true
                } else {
                    let t = age / STEAM_LIFETIME;
                    let alpha = 255.0 + (STEAM_MIN_ALPHA as f32 - 255.0) * t;
                    grid.colors[idx] = grid.colors[idx].with_alpha(alpha.round() as u8);
                    false
                }
            }
            _ => false,
        };

        if gone {
            grid.clear_idx(idx);
            expired += 1;
        }
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::reactions::replace;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid_with(m: Material) -> (Grid, StdRng) {
        let mut grid = Grid::new(1, 1);
        let mut rng = StdRng::seed_from_u64(12);
        replace(&mut grid, &mut rng, 0, 0, m);
        (grid, rng)
    }

    #[test]
    fn clears_flags_and_ages_particles() {
        let (mut grid, mut rng) = grid_with(Material::Sand);
        assert!(grid.is_updated(0, 0));
        apply(&mut grid, &SimSettings::default(), &mut rng, 0.25);
        assert!(!grid.is_updated(0, 0));
        assert_eq!(grid.age(0, 0), 0.25);
    }

    #[test]
    fn empty_cells_do_not_age() {
        let mut grid = Grid::new(2, 2);
        let mut rng = StdRng::seed_from_u64(1);
        apply(&mut grid, &SimSettings::default(), &mut rng, 1.0);
        assert_eq!(grid.age(1, 1), 0.0);
    }

    #[test]
    fn ember_burns_out_after_half_a_second() {
        let (mut grid, mut rng) = grid_with(Material::Ember);
        let settings = SimSettings::default();
        apply(&mut grid, &settings, &mut rng, 0.3);
        assert_eq!(grid.material_at(0, 0), Material::Ember);
        assert_eq!(apply(&mut grid, &settings, &mut rng, 0.3), 1);
        assert_eq!(grid.material_at(0, 0), Material::Empty);
        assert_eq!(grid.color_at(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn young_fire_never_goes_out() {
        let (mut grid, mut rng) = grid_with(Material::Fire);
        let settings = SimSettings { fire_extinguish_chance: 1.0, ..SimSettings::default() };
        for _ in 0..10 {
            apply(&mut grid, &settings, &mut rng, 0.1);
            assert_eq!(grid.material_at(0, 0), Material::Fire);
            assert!(catalog::FIRE_PALETTE.contains(&grid.color_at(0, 0)));
        }
        apply(&mut grid, &settings, &mut rng, 1.5);
        assert_eq!(grid.material_at(0, 0), Material::Empty);
    }

    #[test]
    fn smoke_fades_then_vanishes() {
        let (mut grid, mut rng) = grid_with(Material::Smoke);
        let settings = SimSettings::default();
        apply(&mut grid, &settings, &mut rng, 4.0);
        let half = grid.color_at(0, 0);
        assert!(half.a < 255 && half.a > 0);
        assert!(half.r > catalog::default_color(Material::Smoke).r);
        apply(&mut grid, &settings, &mut rng, 4.5);
        assert_eq!(grid.material_at(0, 0), Material::Empty);
    }

    #[test]
    fn steam_alpha_approaches_floor() {
        let (mut grid, mut rng) = grid_with(Material::Steam);
        let settings = SimSettings::default();
        apply(&mut grid, &settings, &mut rng, 9.9);
        let a = grid.color_at(0, 0).a;
        assert!((30..=35).contains(&a), "alpha {}", a);
        apply(&mut grid, &settings, &mut rng, 0.2);
        assert_eq!(grid.material_at(0, 0), Material::Empty);
    }
}
