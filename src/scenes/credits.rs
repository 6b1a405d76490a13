//! Credits screen

use glam::Vec2;

use super::{Scene, SceneKind};
use crate::input::{InputSource, Key};
use crate::render::{Renderer, TextDraw};
use crate::resources::{FontHandle, ResourceError, ResourceManager, paths};

const CREDITS_SIZE: u16 = 14;
const CREDITS_LEFT: f32 = 64.0;
const CREDITS_TOP: f32 = 64.0;
const CREDITS_SPACING: f32 = 8.0;

pub const CONTRIBUTORS: [&str; 5] = [
    "Jacob Pike - Team Lead, Programmer",
    "AleKahpwn - Art, Task Management",
    "Johnicholas - Art",
    "Mercy404 - Sound",
    "Andrew Tyler - Font",
];

pub struct CreditsScene {
    font: FontHandle,
    next: Option<SceneKind>,
}

impl CreditsScene {
    pub fn new(resources: &mut ResourceManager) -> Result<Self, ResourceError> {
        Ok(Self {
            font: resources.font(paths::FONT)?,
            next: None,
        })
    }
}

impl Scene for CreditsScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Credits
    }

    fn update(&mut self, _dt: f32, _input: &dyn InputSource) {}

    fn render(&mut self, renderer: &mut dyn Renderer) {
        let mut y = CREDITS_TOP;
        for line in CONTRIBUTORS {
            renderer.draw_text(TextDraw::new(
                self.font,
                line,
                Vec2::new(CREDITS_LEFT, y),
                CREDITS_SIZE,
            ));
            y += CREDITS_SIZE as f32 + CREDITS_SPACING;
        }
    }

    /// Any key goes back to the title
    fn handle_key_press(&mut self, _key: Key) {
        self.next = Some(SceneKind::Title);
    }

    fn next_scene(&self) -> Option<SceneKind> {
        self.next
    }
}
