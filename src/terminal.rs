//! Terminal rendering and key translation for the crossterm host
//!
//! The 448x512 playfield is mapped onto a 56x32 cell grid (8x16 pixels per
//! cell). Sprites are drawn as coloured glyphs chosen by texture path; text
//! is written cell by cell.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    event::KeyCode,
    style::{self, Color, Print},
};
use egg_snatchers::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use egg_snatchers::input::Key;
use egg_snatchers::render::{Renderer, SpriteDraw, TextAlign, TextDraw};
use egg_snatchers::resources::{ResourceManager, SoundHandle, paths};

pub const CELL_WIDTH: f32 = 8.0;
pub const CELL_HEIGHT: f32 = 16.0;
pub const COLUMNS: usize = (SCREEN_WIDTH / CELL_WIDTH) as usize;
pub const ROWS: usize = (SCREEN_HEIGHT / CELL_HEIGHT) as usize;

const C_BACKGROUND: Color = Color::Black;
const C_TEXT: Color = Color::White;
const C_UNKNOWN: Color = Color::DarkGrey;

pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    color: C_BACKGROUND,
};

/// Glyph and colour standing in for a texture
fn sprite_cell(path: Option<&str>, shade: u8) -> Cell {
    let (glyph, color) = match path {
        Some(paths::BUNNY_TEXTURE) => ('B', Color::White),
        Some(paths::CARROT_MISSILE_TEXTURE) => ('|', Color::DarkYellow),
        Some(paths::ALIEN_MISSILE_TEXTURE) => ('!', Color::Red),
        Some(paths::EXPLOSION_TEXTURE) => ('*', Color::Yellow),
        Some(p) if p == paths::ALIEN_TEXTURES[0] => ('W', Color::Green),
        Some(p) if p == paths::ALIEN_TEXTURES[1] => ('M', Color::Magenta),
        Some(p) if paths::EGG_TEXTURES.contains(&p) => ('O', egg_color(shade)),
        _ => ('?', C_UNKNOWN),
    };
    Cell { glyph, color }
}

/// Eggs fade from white to dark grey as they take damage
fn egg_color(shade: u8) -> Color {
    match shade {
        192.. => Color::White,
        96.. => Color::Grey,
        _ => Color::DarkGrey,
    }
}

/// Collects one frame of draw commands, then writes it to the terminal
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    sprites: Vec<SpriteDraw>,
    texts: Vec<TextDraw>,
    sounds: Vec<SoundHandle>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn compose(&self, resources: &ResourceManager) -> Vec<Vec<Cell>> {
        let mut grid = vec![vec![BLANK; COLUMNS]; ROWS];

        for sprite in &self.sprites {
            let cell = sprite_cell(resources.texture_path(sprite.texture), sprite.shade);
            let (first_col, last_col) = span(sprite.pos.x, sprite.size.x, CELL_WIDTH, COLUMNS);
            let (first_row, last_row) = span(sprite.pos.y, sprite.size.y, CELL_HEIGHT, ROWS);
            for row in &mut grid[first_row..last_row] {
                for slot in &mut row[first_col..last_col] {
                    *slot = cell;
                }
            }
        }

        for text in &self.texts {
            let row = (text.pos.y / CELL_HEIGHT).round() as usize;
            let Some(row) = grid.get_mut(row) else {
                continue;
            };
            let len = text.text.chars().count() as f32;
            let anchor = text.pos.x / CELL_WIDTH;
            let start = match text.align {
                TextAlign::Left => anchor,
                TextAlign::Center => anchor - len / 2.0,
                TextAlign::Right => anchor - len,
            }
            .max(0.0) as usize;

            for (slot, glyph) in row.iter_mut().skip(start).zip(text.text.chars()) {
                *slot = Cell {
                    glyph,
                    color: C_TEXT,
                };
            }
        }

        grid
    }

    /// Write the collected frame and clear it for the next one
    pub fn present<W: Write>(
        &mut self,
        out: &mut W,
        resources: &ResourceManager,
    ) -> std::io::Result<()> {
        for sound in self.sounds.drain(..) {
            log::debug!("Sound: {}", resources.sound_path(sound).unwrap_or("?"));
        }

        let grid = self.compose(resources);
        for (y, row) in grid.iter().enumerate() {
            out.queue(cursor::MoveTo(0, y as u16))?;
            let mut current = None;
            for cell in row {
                if current != Some(cell.color) {
                    out.queue(style::SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                out.queue(Print(cell.glyph))?;
            }
        }

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, ROWS as u16))?;
        out.flush()?;

        self.sprites.clear();
        self.texts.clear();
        Ok(())
    }
}

/// Cells covered by `[start, start + length)` in pixels, clipped to `limit`
fn span(start: f32, length: f32, cell: f32, limit: usize) -> (usize, usize) {
    let first = (start / cell).floor().max(0.0) as usize;
    let last = ((start + length) / cell).ceil().max(0.0) as usize;
    (first.min(limit), last.min(limit).max(first.min(limit)))
}

impl Renderer for TerminalRenderer {
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
