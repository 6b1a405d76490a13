//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller
//! - Seeded RNG only, forked per alien brain
//! - Stable iteration order (collection order)
//! - No rendering, terminal or file system dependencies

pub mod actors;
pub mod boundary;
pub mod brain;
pub mod difficulty;
pub mod geometry;
pub mod rng;
pub mod state;
pub mod stopwatch;
pub mod tick;

pub use actors::{Alien, Bunny, EasterEgg, Explosion, Missile, MissileSource, Sprite};
pub use boundary::{Collidable, Edge, resolve_boundary_collision};
pub use brain::AlienBrain;
pub use difficulty::{DifficultyParameters, Escalation};
pub use geometry::Rect;
pub use rng::RandomSource;
pub use state::{ActorAssets, GameEvent, GameplayState, RoundState};
pub use stopwatch::Stopwatch;
pub use tick::{TickInput, tick};
