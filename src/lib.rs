//! Galactic Egg Snatchers - a small alien-wave arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, collisions, waves, round state)
//! - `resources`: Path-keyed asset handles backed by an asset manifest
//! - `render`: Draw-command surface and gameplay drawing
//! - `scenes`: Title, credits, high scores and gameplay screens
//! - `game`: Scene driver used by the terminal host
//! - `highscores`: Flat high score list persistence

pub mod error;
pub mod game;
pub mod highscores;
pub mod hud;
pub mod input;
pub mod render;
pub mod resources;
pub mod scenes;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 448.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;
    pub const GAME_TITLE: &str = "Galactic Egg Snatchers";

    /// Bunny defaults
    pub const BUNNY_START_LIVES: u8 = 3;
    pub const BUNNY_MOVE_SPEED: f32 = 128.0;
    /// Minimum seconds between carrot missiles
    pub const BUNNY_FIRE_DELAY: f32 = 0.5;
    pub const CARROT_MISSILE_SPEED: f32 = 256.0;

    /// Alien grid layout
    pub const ALIEN_ROWS: usize = 5;
    pub const ALIEN_COLUMNS: usize = 6;
    pub const ALIEN_ROW_SPACING: f32 = 8.0;
    /// Pixels an alien drops each time it bounces off an edge
    pub const ALIEN_DROP_PER_BOUNCE: f32 = 8.0;
    pub const ALIEN_MISSILE_SPEED: f32 = 192.0;
    /// Percent chance (0-99 roll) an alien fires once its cooldown elapsed
    pub const ALIEN_FIRE_CHANCE_PERCENT: u32 = 10;

    /// Egg defaults
    pub const EGG_COUNT: usize = 4;
    pub const EGG_START_HEALTH: u8 = 4;

    /// Explosion lifetime in seconds
    pub const EXPLOSION_LIFETIME: f32 = 1.0;

    /// Scoring
    pub const ALIEN_KILL_POINTS: u16 = 100;
    /// Largest multiple of 100 that fits a u16 score
    pub const MAX_SCORE: u16 = 65500;

    /// Alien count that triggers the next wave
    pub const ALIENS_REMAINING_FOR_NEW_WAVE: usize = 1;

    /// Longest frame delta the host feeds the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
}
