//! Gameplay HUD: lives, score, high score and the round-ended banner

use glam::Vec2;

use crate::render::{Renderer, TextAlign, TextDraw};
use crate::resources::FontHandle;
use crate::sim::{GameplayState, Rect, RoundState};

pub const HUD_TEXT_SIZE: u16 = 12;
pub const ENDED_MESSAGE_SIZE: u16 = 32;
pub const RETURN_INSTRUCTION: &str = "(Press Enter to return to the title screen.)";

pub fn lives_text(lives: u8) -> String {
    format!("LIVES: {}", lives)
}

/// Scores are shown zero-padded to five digits
pub fn score_text(score: u16) -> String {
    format!("SCORE: {:05}", score)
}

pub fn high_score_text(high_score: u16) -> String {
    format!("HIGH SCORE: {:05}", high_score)
}

/// Banner for an ended round; `None` while still playing
pub fn ended_message(round: RoundState) -> Option<&'static str> {
    match round {
        RoundState::Playing => None,
        RoundState::Victory => Some("YOU WIN!"),
        RoundState::GameOver => Some("GAME OVER"),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameplayHud {
    font: FontHandle,
    screen: Rect,
}

impl GameplayHud {
    pub fn new(font: FontHandle, screen: Rect) -> Self {
        Self { font, screen }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, state: &GameplayState) {
        let top = self.screen.top;

        renderer.draw_text(TextDraw::new(
            self.font,
            lives_text(state.bunny.lives()),
            Vec2::new(self.screen.left, top),
            HUD_TEXT_SIZE,
        ));
        renderer.draw_text(
            TextDraw::new(
                self.font,
                score_text(state.score()),
                Vec2::new(self.screen.center().x, top),
                HUD_TEXT_SIZE,
            )
            .aligned(TextAlign::Center),
        );
        renderer.draw_text(
            TextDraw::new(
                self.font,
                high_score_text(state.high_score()),
                Vec2::new(self.screen.right(), top),
                HUD_TEXT_SIZE,
            )
            .aligned(TextAlign::Right),
        );

        if let Some(message) = ended_message(state.round) {
            // Message a third of the way down, instruction two thirds down
            let center_x = self.screen.center().x;
            let third = self.screen.height / 3.0;
            renderer.draw_text(
                TextDraw::new(
                    self.font,
                    message,
                    Vec2::new(center_x, self.screen.top + third - ENDED_MESSAGE_SIZE as f32),
                    ENDED_MESSAGE_SIZE,
                )
                .aligned(TextAlign::Center),
            );
            renderer.draw_text(
                TextDraw::new(
                    self.font,
                    RETURN_INSTRUCTION,
                    Vec2::new(center_x, self.screen.top + third * 2.0),
                    HUD_TEXT_SIZE,
                )
                .aligned(TextAlign::Center),
            );
        }
    }
}
