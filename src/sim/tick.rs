//! Per-frame simulation tick
//!
//! Advances a `GameplayState` by one frame in a fixed order: input, actor
//! updates, missile hits, direct alien contact, screen boundaries, wave
//! spawning and finally the round state.

use super::actors::MissileSource;
use super::boundary::resolve_boundary_collision;
use super::state::{GameEvent, GameplayState};
use crate::consts::*;

/// Buttons held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Advance the gameplay state by `dt` seconds
pub fn tick(state: &mut GameplayState, input: &TickInput, dt: f32) {
    // An ended round is frozen; only the outcome is re-evaluated
    if !state.round.has_ended() {
        handle_input(state, input, dt);
        update_actors(state, dt);
        handle_missile_collisions(state);
        handle_alien_contact(state);
        handle_boundary_collisions(state);

        if state.aliens.len() == ALIENS_REMAINING_FOR_NEW_WAVE {
            state.spawn_alien_wave();
        }
    }

    state.update_round_state();
}

fn handle_input(state: &mut GameplayState, input: &TickInput, dt: f32) {
    if input.left {
        state.bunny.move_left(dt);
    }
    if input.right {
        state.bunny.move_right(dt);
    }

    if input.fire && state.bunny.can_fire() {
        let carrot = state.assets().carrot_missile;
        let missile = state.bunny.fire_missile(carrot);
        state.missiles.push(missile);
        state.push_event(GameEvent::MissileFired {
            source: MissileSource::Bunny,
        });
    }
}

fn update_actors(state: &mut GameplayState, dt: f32) {
    state.explosions.retain_mut(|explosion| {
        explosion.update(dt);
        !explosion.lifetime_exceeded()
    });

    state.bunny.update(dt);

    let mut fired = Vec::new();
    for alien in &mut state.aliens {
        alien.update(dt);
        if alien.wants_to_fire_missile(dt) {
            fired.push(alien.fire_missile());
        }
    }
    for missile in fired {
        state.missiles.push(missile);
        state.push_event(GameEvent::MissileFired {
            source: MissileSource::Alien,
        });
    }

    for missile in &mut state.missiles {
        missile.update(dt);
    }
}

/// Apply every missile hit; each missile hits at most one actor
fn handle_missile_collisions(state: &mut GameplayState) {
    let missiles = std::mem::take(&mut state.missiles);
    let mut survivors = Vec::with_capacity(missiles.len());

    for missile in missiles {
        let bounds = missile.bounds();
        let hit = match missile.source {
            MissileSource::Alien => {
                if let Some(i) = state.eggs.iter().position(|e| e.bounds().intersects(&bounds)) {
                    let hit = state.eggs[i].bounds();
                    state.eggs[i].lose_health();
                    if !state.eggs[i].is_alive() {
                        state.eggs.remove(i);
                    }
                    Some(hit)
                } else if state.bunny.bounds().intersects(&bounds) {
                    state.bunny.lose_life();
                    log::debug!("Bunny hit, {} lives left", state.bunny.lives());
                    Some(state.bunny.bounds())
                } else {
                    None
                }
            }
            MissileSource::Bunny => state
                .aliens
                .iter()
                .position(|a| a.bounds().intersects(&bounds))
                .map(|i| {
                    let alien = state.aliens.remove(i);
                    state.add_to_score(ALIEN_KILL_POINTS);
                    state.push_event(GameEvent::AlienKilled {
                        points: ALIEN_KILL_POINTS,
                    });
                    alien.bounds()
                }),
        };

        match hit {
            Some(rect) => state.spawn_explosion(&rect),
            None => survivors.push(missile),
        }
    }

    state.missiles = survivors;
}

/// Aliens touching the bunny or eggs damage them without dying
fn handle_alien_contact(state: &mut GameplayState) {
    for alien in &state.aliens {
        let bounds = alien.bounds();

        if state.bunny.bounds().intersects(&bounds) {
            state.bunny.lose_life();
            log::debug!("Alien reached the bunny, {} lives left", state.bunny.lives());
        }

        for egg in &mut state.eggs {
            if egg.bounds().intersects(&bounds) {
                egg.lose_health();
            }
        }
    }
    state.eggs.retain(|egg| egg.is_alive());
}

fn handle_boundary_collisions(state: &mut GameplayState) {
    let screen = state.screen;

    resolve_boundary_collision(&screen, &mut state.bunny);
    for egg in &mut state.eggs {
        resolve_boundary_collision(&screen, egg);
    }
    for alien in &mut state.aliens {
        resolve_boundary_collision(&screen, alien);
    }
    state
        .missiles
        .retain_mut(|missile| resolve_boundary_collision(&screen, missile).is_none());
}
