//! Gameplay state and actor spawning
//!
//! `GameplayState` owns every actor collection. Nothing else holds actors,
//! and actors never reference each other or the state.

use glam::Vec2;

use super::actors::{Alien, Bunny, EasterEgg, Explosion, Missile, MissileSource, Sprite};
use super::brain::AlienBrain;
use super::difficulty::{DifficultyParameters, Escalation};
use super::geometry::Rect;
use super::rng::RandomSource;
use crate::consts::*;
use crate::resources::{ResourceError, ResourceManager, SoundHandle, SpriteAsset, paths};

/// Outcome of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Victory,
    GameOver,
}

impl RoundState {
    pub fn has_ended(&self) -> bool {
        !matches!(self, RoundState::Playing)
    }
}

/// Things that happened during a tick, drained by the host (sounds, logging)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    MissileFired { source: MissileSource },
    Explosion { at: Vec2 },
    AlienKilled { points: u16 },
    WaveSpawned { wave: u32 },
    RoundEnded(RoundState),
}

/// Every resource the simulation needs, loaded up front
///
/// Loading fails on the first missing asset; there is no fallback texture.
#[derive(Debug, Clone)]
pub struct ActorAssets {
    pub bunny: SpriteAsset,
    pub carrot_missile: SpriteAsset,
    pub alien_missile: SpriteAsset,
    pub explosion: SpriteAsset,
    pub aliens: Vec<SpriteAsset>,
    pub eggs: Vec<SpriteAsset>,
    pub missile_sound: SoundHandle,
    pub explosion_sound: SoundHandle,
}

impl ActorAssets {
    pub fn load(resources: &mut ResourceManager) -> Result<Self, ResourceError> {
        let aliens = paths::ALIEN_TEXTURES
            .iter()
            .map(|path| resources.sprite(path))
            .collect::<Result<Vec<_>, _>>()?;
        let eggs = paths::EGG_TEXTURES
            .iter()
            .map(|path| resources.sprite(path))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bunny: resources.sprite(paths::BUNNY_TEXTURE)?,
            carrot_missile: resources.sprite(paths::CARROT_MISSILE_TEXTURE)?,
            alien_missile: resources.sprite(paths::ALIEN_MISSILE_TEXTURE)?,
            explosion: resources.sprite(paths::EXPLOSION_TEXTURE)?,
            aliens,
            eggs,
            missile_sound: resources.sound(paths::MISSILE_SOUND)?,
            explosion_sound: resources.sound(paths::EXPLOSION_SOUND)?,
        })
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameplayState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: RandomSource,
    assets: ActorAssets,
    /// Playfield; actors are confined to it
    pub screen: Rect,
    pub round: RoundState,
    score: u16,
    high_score: u16,
    pub difficulty: DifficultyParameters,
    /// Waves spawned after the initial grid
    pub wave: u32,
    pub bunny: Bunny,
    pub eggs: Vec<EasterEgg>,
    pub aliens: Vec<Alien>,
    pub missiles: Vec<Missile>,
    pub explosions: Vec<Explosion>,
    events: Vec<GameEvent>,
}

impl GameplayState {
    /// Start a new round: bunny, a row of eggs and the first alien grid
    pub fn new(seed: u64, assets: ActorAssets, screen: Rect) -> Self {
        let bunny = Self::initial_bunny(&assets, &screen);
        let mut state = Self {
            seed,
            rng: RandomSource::new(seed),
            assets,
            screen,
            round: RoundState::Playing,
            score: 0,
            high_score: 0,
            difficulty: DifficultyParameters::default(),
            wave: 0,
            bunny,
            eggs: Vec::new(),
            aliens: Vec::new(),
            missiles: Vec::new(),
            explosions: Vec::new(),
            events: Vec::new(),
        };

        state.eggs = state.initial_eggs();
        state.aliens = state.alien_grid();
        log::info!(
            "New round (seed {}): {} aliens, {} eggs",
            seed,
            state.aliens.len(),
            state.eggs.len()
        );
        state
    }

    /// Seed the session high score (the best score loaded from disk)
    pub fn with_high_score(mut self, high_score: u16) -> Self {
        self.high_score = high_score.max(self.score);
        self
    }

    pub fn assets(&self) -> &ActorAssets {
        &self.assets
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn high_score(&self) -> u16 {
        self.high_score
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Centered horizontally, two sprite heights above the bottom edge
    fn initial_bunny(assets: &ActorAssets, screen: &Rect) -> Bunny {
        let size = assets.bunny.size;
        let pos = Vec2::new(
            screen.center().x - size.x / 2.0,
            screen.bottom() - size.y * 2.0,
        );
        Bunny::new(Sprite::new(assets.bunny, pos))
    }

    /// Eggs evenly spaced across the screen, four sprite heights up
    fn initial_eggs(&mut self) -> Vec<EasterEgg> {
        let spacing = self.screen.width / (EGG_COUNT + 1) as f32;
        (0..EGG_COUNT)
            .map(|i| {
                let asset = self.assets.eggs[self.rng.index(self.assets.eggs.len())];
                let center_x = self.screen.left + spacing * (i + 1) as f32;
                let pos = Vec2::new(
                    center_x - asset.size.x / 2.0,
                    self.screen.bottom() - asset.size.y * 4.0,
                );
                EasterEgg::new(Sprite::new(asset, pos))
            })
            .collect()
    }

    /// A full grid of aliens built from the current difficulty
    pub fn alien_grid(&mut self) -> Vec<Alien> {
        let params = self.difficulty;
        let column_spacing = self.screen.width / (ALIEN_COLUMNS + 1) as f32;
        let mut aliens = Vec::with_capacity(ALIEN_ROWS * ALIEN_COLUMNS);

        for row in 0..ALIEN_ROWS {
            for column in 0..ALIEN_COLUMNS {
                let asset = self.assets.aliens[self.rng.index(self.assets.aliens.len())];

                // Leave three sprite heights at the top for the HUD
                let top = self.screen.top
                    + asset.size.y * 3.0
                    + (ALIEN_ROW_SPACING + asset.size.y) * row as f32;
                let center_x = self.screen.left + column_spacing * (column + 1) as f32;
                let pos = Vec2::new(center_x - asset.size.x / 2.0, top);

                let brain = AlienBrain::new(
                    params.min_secs_between_missile_fires,
                    params.max_secs_between_missile_fires,
                    self.rng.fork(),
                );
                aliens.push(Alien::new(
                    Sprite::new(asset, pos),
                    params.horizontal_speed,
                    brain,
                    self.assets.alien_missile,
                ));
            }
        }

        aliens
    }

    /// Escalate difficulty, then append a fresh grid to the existing aliens
    pub fn spawn_alien_wave(&mut self) -> Option<Escalation> {
        let escalation = self.difficulty.escalate(self.screen.width);
        let grid = self.alien_grid();
        self.aliens.extend(grid);
        self.wave += 1;

        log::info!(
            "Wave {} spawned ({:?}): cooldown {}-{}s, speed {}",
            self.wave,
            escalation,
            self.difficulty.min_secs_between_missile_fires,
            self.difficulty.max_secs_between_missile_fires,
            self.difficulty.horizontal_speed
        );
        self.push_event(GameEvent::WaveSpawned { wave: self.wave });
        escalation
    }

    /// Add points, never past `MAX_SCORE`
    pub fn add_to_score(&mut self, points: u16) {
        if self.score < MAX_SCORE {
            self.score = self.score.saturating_add(points).min(MAX_SCORE);
        }
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Leave an explosion centered on `rect`
    pub fn spawn_explosion(&mut self, rect: &Rect) {
        let at = rect.center();
        let rotation = self.rng.rotation_degrees();
        self.explosions
            .push(Explosion::new(self.assets.explosion, at, rotation));
        self.push_event(GameEvent::Explosion { at });
    }

    /// Re-evaluate win/lose conditions; losing overrides winning
    pub fn update_round_state(&mut self) {
        let previous = self.round;

        let won = self.score >= MAX_SCORE || self.aliens.is_empty();
        if won {
            self.round = RoundState::Victory;
        }

        let lost = self.bunny.lives() == 0 || self.eggs.is_empty();
        if lost {
            self.round = RoundState::GameOver;
        }

        if self.round != previous {
            log::info!("Round ended: {:?} with score {}", self.round, self.score);
            self.push_event(GameEvent::RoundEnded(self.round));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_state(seed: u64) -> GameplayState {
        let assets = ActorAssets::load(&mut ResourceManager::default()).unwrap();
        GameplayState::new(seed, assets, Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_initial_layout() {
        let state = new_state(1);
        assert_eq!(state.round, RoundState::Playing);
        assert_eq!(state.bunny.lives(), BUNNY_START_LIVES);
        assert_eq!(state.eggs.len(), EGG_COUNT);
        assert_eq!(state.aliens.len(), ALIEN_ROWS * ALIEN_COLUMNS);
        assert!(state.missiles.is_empty());

        for alien in &state.aliens {
            assert!(state.screen.contains_rect(&alien.bounds()));
        }
        for egg in &state.eggs {
            assert!(state.screen.contains_rect(&egg.bounds()));
        }
        assert!(state.screen.contains_rect(&state.bunny.bounds()));
    }

    #[test]
    fn test_aliens_use_difficulty_range() {
        let state = new_state(2);
        let params = DifficultyParameters::default();
        for alien in &state.aliens {
            let cooldown = alien.brain().cooldown_secs();
            assert!(cooldown >= params.min_secs_between_missile_fires as f32);
            assert!(cooldown <= params.max_secs_between_missile_fires as f32);
            assert_eq!(alien.velocity.x, params.horizontal_speed);
        }
    }

    #[test]
    fn test_brains_are_not_all_identical() {
        let state = new_state(3);
        let first = state.aliens[0].brain().cooldown_secs();
        assert!(
            state
                .aliens
                .iter()
                .any(|a| a.brain().cooldown_secs() != first)
        );
    }

    #[test]
    fn test_spawn_wave_appends_grid() {
        let mut state = new_state(4);
        state.aliens.truncate(1);
        let survivor = state.aliens[0].sprite.pos;

        let escalation = state.spawn_alien_wave();
        assert_eq!(escalation, Some(Escalation::MinCooldownDecreased));
        assert_eq!(state.aliens.len(), 1 + ALIEN_ROWS * ALIEN_COLUMNS);
        assert_eq!(state.aliens[0].sprite.pos, survivor);
        assert_eq!(state.difficulty.min_secs_between_missile_fires, 2);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::WaveSpawned { wave: 1 })
        );
    }

    #[test]
    fn test_score_updates_high_score() {
        let mut state = new_state(5).with_high_score(250);
        state.add_to_score(100);
        assert_eq!(state.high_score(), 250);
        state.add_to_score(200);
        assert_eq!(state.score(), 300);
        assert_eq!(state.high_score(), 300);
    }

    #[test]
    fn test_victory_when_aliens_gone() {
        let mut state = new_state(6);
        state.aliens.clear();
        state.update_round_state();
        assert_eq!(state.round, RoundState::Victory);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::RoundEnded(RoundState::Victory))
        );
    }

    #[test]
    fn test_game_over_beats_victory() {
        let mut state = new_state(7);
        state.aliens.clear();
        state.eggs.clear();
        state.update_round_state();
        assert_eq!(state.round, RoundState::GameOver);
    }

    #[test]
    fn test_victory_at_max_score() {
        let mut state = new_state(8);
        state.add_to_score(MAX_SCORE);
        state.update_round_state();
        assert_eq!(state.round, RoundState::Victory);
    }

    proptest! {
        #[test]
        fn prop_score_never_exceeds_cap(additions in proptest::collection::vec(0u16..5000, 0..100)) {
            let mut state = new_state(9);
            for points in additions {
                let before = state.score();
                state.add_to_score(points);
                prop_assert!(state.score() <= MAX_SCORE);
                prop_assert!(state.score() >= before);
                if before == MAX_SCORE {
                    prop_assert_eq!(state.score(), MAX_SCORE);
                }
            }
        }
    }
}
