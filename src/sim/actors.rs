//! Actor types: the bunny, aliens, eggs, missiles and explosions
//!
//! Actors only mutate themselves. Damage and scoring between actors are
//! applied by the tick functions.

use glam::Vec2;

use super::boundary::Collidable;
use super::brain::AlienBrain;
use super::geometry::Rect;
use super::stopwatch::Stopwatch;
use crate::consts::*;
use crate::resources::{SpriteAsset, TextureHandle};

/// Position, size and texture of an on-screen actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub texture: TextureHandle,
}

impl Sprite {
    pub fn new(asset: SpriteAsset, pos: Vec2) -> Self {
        Self {
            pos,
            size: asset.size,
            texture: asset.texture,
        }
    }

    /// Bounding box at the current position
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn set_left(&mut self, left: f32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.pos.x = right - self.size.x;
    }
}

/// Who fired a missile; decides which collision rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileSource {
    Bunny,
    Alien,
}

/// A projectile flying in a straight line
#[derive(Debug, Clone)]
pub struct Missile {
    pub sprite: Sprite,
    pub velocity: Vec2,
    pub source: MissileSource,
}

impl Missile {
    pub fn new(source: MissileSource, velocity: Vec2, sprite: Sprite) -> Self {
        Self {
            sprite,
            velocity,
            source,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.sprite.translate(self.velocity * dt);
    }

    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }
}

/// The player
#[derive(Debug, Clone)]
pub struct Bunny {
    pub sprite: Sprite,
    lives: u8,
    since_last_fire: Stopwatch,
}

impl Bunny {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            lives: BUNNY_START_LIVES,
            since_last_fire: Stopwatch::new(),
        }
    }

    pub fn with_lives(mut self, lives: u8) -> Self {
        self.lives = lives;
        self
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }

    pub fn update(&mut self, dt: f32) {
        self.since_last_fire.advance(dt);
    }

    pub fn move_left(&mut self, dt: f32) {
        self.sprite.translate(Vec2::new(-BUNNY_MOVE_SPEED * dt, 0.0));
    }

    pub fn move_right(&mut self, dt: f32) {
        self.sprite.translate(Vec2::new(BUNNY_MOVE_SPEED * dt, 0.0));
    }

    /// Whether enough time has passed since the last carrot was fired
    pub fn can_fire(&self) -> bool {
        self.since_last_fire.elapsed() > BUNNY_FIRE_DELAY
    }

    /// Fire a carrot upward from the bunny's horizontal center
    pub fn fire_missile(&mut self, carrot: SpriteAsset) -> Missile {
        self.since_last_fire.restart();

        let bounds = self.bounds();
        let pos = Vec2::new(
            bounds.center().x - carrot.size.x / 2.0,
            bounds.top - carrot.size.y,
        );
        Missile::new(
            MissileSource::Bunny,
            Vec2::new(0.0, -CARROT_MISSILE_SPEED),
            Sprite::new(carrot, pos),
        )
    }
}

impl Collidable for Bunny {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

/// An enemy moving side to side and dropping lower at each edge
#[derive(Debug, Clone)]
pub struct Alien {
    pub sprite: Sprite,
    pub velocity: Vec2,
    brain: AlienBrain,
    missile: SpriteAsset,
}

impl Alien {
    /// New aliens start moving right at `speed` pixels per second
    pub fn new(sprite: Sprite, speed: f32, brain: AlienBrain, missile: SpriteAsset) -> Self {
        Self {
            sprite,
            velocity: Vec2::new(speed, 0.0),
            brain,
            missile,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }

    pub fn brain(&self) -> &AlienBrain {
        &self.brain
    }

    pub fn update(&mut self, dt: f32) {
        self.sprite.translate(self.velocity * dt);
    }

    pub fn wants_to_fire_missile(&mut self, dt: f32) -> bool {
        self.brain.should_fire_missile(dt)
    }

    /// Fire a missile downward from just below the alien's center
    pub fn fire_missile(&self) -> Missile {
        let bounds = self.bounds();
        let pos = Vec2::new(
            bounds.center().x - self.missile.size.x / 2.0,
            bounds.bottom(),
        );
        Missile::new(
            MissileSource::Alien,
            Vec2::new(0.0, ALIEN_MISSILE_SPEED),
            Sprite::new(self.missile, pos),
        )
    }
}

impl Collidable for Alien {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    fn on_boundary_collide(&mut self) {
        self.sprite.translate(Vec2::new(0.0, ALIEN_DROP_PER_BOUNCE));
        self.velocity = -self.velocity;
    }
}

/// A stationary egg the bunny defends
#[derive(Debug, Clone)]
pub struct EasterEgg {
    pub sprite: Sprite,
    health: u8,
}

impl EasterEgg {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            health: EGG_START_HEALTH,
        }
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn lose_health(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }

    /// Grey level for rendering; fades toward black as health drops
    pub fn shade(&self) -> u8 {
        let step = u8::MAX / EGG_START_HEALTH;
        self.health.min(EGG_START_HEALTH) * step
    }
}

impl Collidable for EasterEgg {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

impl Collidable for Missile {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

/// Short-lived blast left where a missile hit something
#[derive(Debug, Clone)]
pub struct Explosion {
    pub center: Vec2,
    /// Cosmetic rotation in degrees
    pub rotation: f32,
    pub texture: TextureHandle,
    pub size: Vec2,
    lifetime: Stopwatch,
}

impl Explosion {
    pub fn new(asset: SpriteAsset, center: Vec2, rotation: f32) -> Self {
        Self {
            center,
            rotation,
            texture: asset.texture,
            size: asset.size,
            lifetime: Stopwatch::new(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.lifetime.advance(dt);
    }

    pub fn lifetime_exceeded(&self) -> bool {
        self.lifetime.elapsed() > EXPLOSION_LIFETIME
    }
}
