//! High score screen

use std::path::Path;

use glam::Vec2;

use super::{Scene, SceneKind};
use crate::highscores::{HighScores, MAX_HIGH_SCORES};
use crate::input::{InputSource, Key};
use crate::render::{Renderer, TextAlign, TextDraw};
use crate::resources::{FontHandle, ResourceError, ResourceManager, paths};
use crate::sim::Rect;

const TITLE_SIZE: u16 = 24;
const TITLE_TOP: f32 = 64.0;
const SCORE_SIZE: u16 = 18;
const FIRST_SCORE_TOP: f32 = 160.0;
const SCORE_SPACING: f32 = 8.0;

pub struct HighScoresScene {
    font: FontHandle,
    screen: Rect,
    scores: [u16; MAX_HIGH_SCORES],
    next: Option<SceneKind>,
}

impl HighScoresScene {
    /// Reads the table once; it cannot change while this screen is shown
    pub fn new(
        resources: &mut ResourceManager,
        screen: Rect,
        high_scores_path: &Path,
    ) -> Result<Self, ResourceError> {
        Ok(Self {
            font: resources.font(paths::FONT)?,
            screen,
            scores: HighScores::load(high_scores_path).descending(),
            next: None,
        })
    }

    pub fn scores(&self) -> &[u16; MAX_HIGH_SCORES] {
        &self.scores
    }
}

impl Scene for HighScoresScene {
    fn kind(&self) -> SceneKind {
        SceneKind::HighScores
    }

    fn update(&mut self, _dt: f32, _input: &dyn InputSource) {}

    fn render(&mut self, renderer: &mut dyn Renderer) {
        let center_x = self.screen.center().x;
        renderer.draw_text(
            TextDraw::new(self.font, "High Scores", Vec2::new(center_x, TITLE_TOP), TITLE_SIZE)
                .aligned(TextAlign::Center),
        );

        let mut y = FIRST_SCORE_TOP;
        for score in self.scores {
            renderer.draw_text(
                TextDraw::new(
                    self.font,
                    format!("{:05}", score),
                    Vec2::new(center_x, y),
                    SCORE_SIZE,
                )
                .aligned(TextAlign::Center),
            );
            y += SCORE_SIZE as f32 + SCORE_SPACING;
        }
    }

    fn handle_key_press(&mut self, _key: Key) {
        self.next = Some(SceneKind::Title);
    }

    fn next_scene(&self) -> Option<SceneKind> {
        self.next
    }
}
