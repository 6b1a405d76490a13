//! Top-level screens
//!
//! Exactly one scene is active at a time. A scene never switches itself;
//! it reports where to go next and `Game` builds the replacement.

pub mod credits;
pub mod gameplay;
pub mod high_scores;
pub mod title;

pub use credits::CreditsScene;
pub use gameplay::GameplayScene;
pub use high_scores::HighScoresScene;
pub use title::TitleScene;

use crate::input::{InputSource, Key};
use crate::render::Renderer;
use crate::sim::GameplayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Title,
    Gameplay,
    HighScores,
    Credits,
}

pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Advance by `dt` seconds with the buttons currently held
    fn update(&mut self, dt: f32, input: &dyn InputSource);

    /// Draw the frame and play any sounds queued since the last render
    fn render(&mut self, renderer: &mut dyn Renderer);

    fn handle_key_press(&mut self, key: Key);

    /// Scene to switch to, once this one is done
    fn next_scene(&self) -> Option<SceneKind>;

    fn gameplay_state(&self) -> Option<&GameplayState> {
        None
    }

    #[cfg(test)]
    fn gameplay_state_mut(&mut self) -> Option<&mut GameplayState> {
        None
    }
}
