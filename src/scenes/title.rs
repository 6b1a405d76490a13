//! Title screen with the main menu

use glam::Vec2;

use super::{Scene, SceneKind};
use crate::consts::GAME_TITLE;
use crate::input::{InputSource, Key};
use crate::render::{Renderer, TextAlign, TextDraw};
use crate::resources::{FontHandle, ResourceError, ResourceManager, paths};
use crate::sim::Rect;

const TITLE_SIZE: u16 = 24;
const TITLE_TOP: f32 = 64.0;
const MENU_OPTION_SIZE: u16 = 14;
const MENU_OPTION_SPACING: f32 = 2.0;

/// Menu entries and the key that selects each
const MENU_OPTIONS: [(char, &str, SceneKind); 3] = [
    ('1', "(1) Start Game", SceneKind::Gameplay),
    ('2', "(2) High Scores", SceneKind::HighScores),
    ('3', "(3) Credits", SceneKind::Credits),
];

pub struct TitleScene {
    font: FontHandle,
    screen: Rect,
    next: Option<SceneKind>,
}

impl TitleScene {
    pub fn new(resources: &mut ResourceManager, screen: Rect) -> Result<Self, ResourceError> {
        Ok(Self {
            font: resources.font(paths::FONT)?,
            screen,
            next: None,
        })
    }
}

impl Scene for TitleScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Title
    }

    fn update(&mut self, _dt: f32, _input: &dyn InputSource) {}

    fn render(&mut self, renderer: &mut dyn Renderer) {
        let center_x = self.screen.center().x;
        renderer.draw_text(
            TextDraw::new(self.font, GAME_TITLE, Vec2::new(center_x, TITLE_TOP), TITLE_SIZE)
                .aligned(TextAlign::Center),
        );

        // Menu starts halfway down the screen
        let mut y = self.screen.top + self.screen.height / 2.0;
        for (_, label, _) in MENU_OPTIONS {
            renderer.draw_text(
                TextDraw::new(self.font, label, Vec2::new(center_x, y), MENU_OPTION_SIZE)
                    .aligned(TextAlign::Center),
            );
            y += MENU_OPTION_SIZE as f32 + MENU_OPTION_SPACING;
        }
    }

    fn handle_key_press(&mut self, key: Key) {
        if let Key::Char(c) = key {
            if let Some(&(_, _, kind)) = MENU_OPTIONS.iter().find(|(k, _, _)| *k == c) {
                self.next = Some(kind);
            }
        }
    }

    fn next_scene(&self) -> Option<SceneKind> {
        self.next
    }
}
