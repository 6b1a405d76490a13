//! Alien difficulty ramp
//!
//! Each new wave tightens exactly one knob, tried in a fixed order:
//! minimum fire cooldown, then maximum fire cooldown, then horizontal speed.

/// Tuning handed to every alien built for a wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParameters {
    pub min_secs_between_missile_fires: u32,
    pub max_secs_between_missile_fires: u32,
    /// Pixels per second
    pub horizontal_speed: f32,
}

/// Floor for the minimum fire cooldown
pub const MIN_FIRE_COOLDOWN_FLOOR: u32 = 1;
/// Floor for the maximum fire cooldown, leaving room for speed increases
pub const MAX_FIRE_COOLDOWN_FLOOR: u32 = 30;
pub const MAX_FIRE_COOLDOWN_STEP: u32 = 4;
pub const SPEED_STEP: f32 = 4.0;

impl Default for DifficultyParameters {
    fn default() -> Self {
        Self {
            min_secs_between_missile_fires: 3,
            max_secs_between_missile_fires: 62,
            horizontal_speed: 64.0,
        }
    }
}

/// Which knob an escalation turned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    MinCooldownDecreased,
    MaxCooldownDecreased,
    SpeedIncreased,
}

impl DifficultyParameters {
    /// Tighten one parameter; `None` once everything has capped
    ///
    /// Speed is capped at half of `screen_width`.
    pub fn escalate(&mut self, screen_width: f32) -> Option<Escalation> {
        if self.min_secs_between_missile_fires > MIN_FIRE_COOLDOWN_FLOOR {
            self.min_secs_between_missile_fires -= 1;
            return Some(Escalation::MinCooldownDecreased);
        }

        let max = self.max_secs_between_missile_fires;
        if max > self.min_secs_between_missile_fires && max > MAX_FIRE_COOLDOWN_FLOOR {
            self.max_secs_between_missile_fires = max.saturating_sub(MAX_FIRE_COOLDOWN_STEP);
            return Some(Escalation::MaxCooldownDecreased);
        }

        if self.horizontal_speed < screen_width / 2.0 {
            self.horizontal_speed += SPEED_STEP;
            return Some(Escalation::SpeedIncreased);
        }

        None
    }
}
