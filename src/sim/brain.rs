//! Alien firing decisions
//!
//! Two gates: a hard per-alien cooldown that must elapse first, then a
//! percentage roll made every frame until it succeeds. Only a successful
//! roll restarts the cooldown.

use super::rng::RandomSource;
use super::stopwatch::Stopwatch;
use crate::consts::ALIEN_FIRE_CHANCE_PERCENT;

#[derive(Debug, Clone)]
pub struct AlienBrain {
    since_last_fire: Stopwatch,
    cooldown_secs: f32,
    rng: RandomSource,
}

impl AlienBrain {
    /// Draw this brain's cooldown uniformly from `[min_secs, max_secs]`
    pub fn new(min_secs: u32, max_secs: u32, mut rng: RandomSource) -> Self {
        let cooldown_secs = rng.range_inclusive(min_secs, max_secs) as f32;
        Self::with_cooldown(cooldown_secs, rng)
    }

    pub fn with_cooldown(cooldown_secs: f32, rng: RandomSource) -> Self {
        Self {
            since_last_fire: Stopwatch::new(),
            cooldown_secs,
            rng,
        }
    }

    pub fn cooldown_secs(&self) -> f32 {
        self.cooldown_secs
    }

    /// Advance the brain's clock by `dt` and decide whether to fire now
    pub fn should_fire_missile(&mut self, dt: f32) -> bool {
        self.since_last_fire.advance(dt);
        if self.since_last_fire.elapsed() <= self.cooldown_secs {
            return false;
        }

        let fire = self.rng.percent() < ALIEN_FIRE_CHANCE_PERCENT;
        if fire {
            self.since_last_fire.restart();
        }
        fire
    }
}
