//! Gameplay screen
//!
//! Wraps a `GameplayState`, feeds it sampled input each frame and turns its
//! events into sounds. Leaving an ended round records the score.

use std::path::PathBuf;

use super::{Scene, SceneKind};
use crate::highscores::{HighScoreError, HighScores};
use crate::hud::GameplayHud;
use crate::input::{InputSource, Key};
use crate::render::{Renderer, draw_gameplay, play_event_sounds};
use crate::resources::{ResourceError, ResourceManager, paths};
use crate::sim::{ActorAssets, GameEvent, GameplayState, Rect, TickInput, tick};

pub struct GameplayScene {
    state: GameplayState,
    hud: GameplayHud,
    high_scores_path: PathBuf,
    /// Events not yet turned into sounds
    pending: Vec<GameEvent>,
    next: Option<SceneKind>,
}

impl GameplayScene {
    pub fn new(
        resources: &mut ResourceManager,
        seed: u64,
        screen: Rect,
        high_scores_path: PathBuf,
    ) -> Result<Self, ResourceError> {
        let assets = ActorAssets::load(resources)?;
        let font = resources.font(paths::FONT)?;
        let top_score = HighScores::load(&high_scores_path).top_score();

        Ok(Self {
            state: GameplayState::new(seed, assets, screen).with_high_score(top_score),
            hud: GameplayHud::new(font, screen),
            high_scores_path,
            pending: Vec::new(),
            next: None,
        })
    }

    pub fn state(&self) -> &GameplayState {
        &self.state
    }

    /// Insert this round's score into the saved table
    fn record_score(&self) -> Result<(), HighScoreError> {
        let score = self.state.score();
        let scores = HighScores::load(&self.high_scores_path).with_recorded_score(score);
        scores.save(&self.high_scores_path)?;
        log::info!("Recorded score {}", score);
        Ok(())
    }
}

impl Scene for GameplayScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Gameplay
    }

    fn update(&mut self, dt: f32, input: &dyn InputSource) {
        if self.next.is_some() {
            return;
        }

        let input = TickInput::sample(input);
        tick(&mut self.state, &input, dt);

        for event in self.state.drain_events() {
            match event {
                GameEvent::WaveSpawned { wave } => log::info!("Wave {} incoming", wave),
                GameEvent::RoundEnded(round) => {
                    log::info!("Round over: {:?}, score {}", round, self.state.score())
                }
                _ => log::debug!("{:?}", event),
            }
            self.pending.push(event);
        }
    }

    fn render(&mut self, renderer: &mut dyn Renderer) {
        play_event_sounds(renderer, &self.state, &self.pending);
        self.pending.clear();

        draw_gameplay(renderer, &self.state);
        self.hud.render(renderer, &self.state);
    }

    /// Only Enter after the round has ended does anything
    fn handle_key_press(&mut self, key: Key) {
        if key != Key::Enter || !self.state.round.has_ended() || self.next.is_some() {
            return;
        }

        if let Err(err) = self.record_score() {
            log::error!("{}", err);
        }
        self.next = Some(SceneKind::Title);
    }

    fn next_scene(&self) -> Option<SceneKind> {
        self.next
    }

    fn gameplay_state(&self) -> Option<&GameplayState> {
        Some(&self.state)
    }

    #[cfg(test)]
    fn gameplay_state_mut(&mut self) -> Option<&mut GameplayState> {
        Some(&mut self.state)
    }
}
