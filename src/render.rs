//! Draw-command surface
//!
//! The game never touches a graphics API. Scenes describe each frame as
//! sprite and text commands sent to a `Renderer`, and request sounds through
//! the same trait. The terminal host in `main.rs` is one implementation.

use glam::Vec2;

use crate::resources::{FontHandle, SoundHandle, TextureHandle};
use crate::sim::{GameEvent, GameplayState};

/// Grey level for untinted sprites
pub const FULL_SHADE: u8 = u8::MAX;

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureHandle,
    /// Top-left corner in screen pixels
    pub pos: Vec2,
    pub size: Vec2,
    /// Degrees, clockwise around the center
    pub rotation: f32,
    /// Grey tint, `FULL_SHADE` for none
    pub shade: u8,
}

impl SpriteDraw {
    pub fn new(texture: TextureHandle, pos: Vec2, size: Vec2) -> Self {
        Self {
            texture,
            pos,
            size,
            rotation: 0.0,
            shade: FULL_SHADE,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A line of text; `pos.x` is interpreted according to `align`
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub pos: Vec2,
    /// Character height in pixels
    pub size: u16,
    pub align: TextAlign,
    pub font: FontHandle,
}

impl TextDraw {
    pub fn new(font: FontHandle, text: impl Into<String>, pos: Vec2, size: u16) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            align: TextAlign::Left,
            font,
        }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Sink for one frame of draw commands plus one-shot sounds
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: SpriteDraw);
    fn draw_text(&mut self, text: TextDraw);
    fn play_sound(&mut self, sound: SoundHandle);
}

/// Draw every actor in back-to-front order: eggs, aliens, bunny, missiles, explosions
pub fn draw_gameplay<R: Renderer + ?Sized>(renderer: &mut R, state: &GameplayState) {
    for egg in &state.eggs {
        let sprite = &egg.sprite;
        renderer.draw_sprite(SpriteDraw {
            shade: egg.shade(),
            ..SpriteDraw::new(sprite.texture, sprite.pos, sprite.size)
        });
    }

    for alien in &state.aliens {
        let sprite = &alien.sprite;
        renderer.draw_sprite(SpriteDraw::new(sprite.texture, sprite.pos, sprite.size));
    }

    let bunny = &state.bunny.sprite;
    renderer.draw_sprite(SpriteDraw::new(bunny.texture, bunny.pos, bunny.size));

    for missile in &state.missiles {
        let sprite = &missile.sprite;
        renderer.draw_sprite(SpriteDraw::new(sprite.texture, sprite.pos, sprite.size));
    }

    for explosion in &state.explosions {
        renderer.draw_sprite(SpriteDraw {
            rotation: explosion.rotation,
            ..SpriteDraw::new(
                explosion.texture,
                explosion.center - explosion.size / 2.0,
                explosion.size,
            )
        });
    }
}

/// Play the sound tied to each drained gameplay event
pub fn play_event_sounds<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameplayState,
    events: &[GameEvent],
) {
    for event in events {
        match event {
            GameEvent::MissileFired { .. } => renderer.play_sound(state.assets().missile_sound),
            GameEvent::Explosion { .. } => renderer.play_sound(state.assets().explosion_sound),
            _ => {}
        }
    }
}

/// Keeps every command it receives; handy for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub sprites: Vec<SpriteDraw>,
    pub texts: Vec<TextDraw>,
    pub sounds: Vec<SoundHandle>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.texts.clear();
        self.sounds.clear();
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text.contains(needle))
    }
}

impl Renderer for RecordingRenderer {
    fn draw_sprite(&mut self, sprite: SpriteDraw) {
        self.sprites.push(sprite);
    }

    fn draw_text(&mut self, text: TextDraw) {
        self.texts.push(text);
    }

    fn play_sound(&mut self, sound: SoundHandle) {
        self.sounds.push(sound);
    }
}
