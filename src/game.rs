//! Scene driver
//!
//! `Game` owns the shared resources and the active scene, forwards frames and
//! key presses to it, and swaps in the next scene when it asks for one.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::*;
use crate::error::GameError;
use crate::input::{InputSource, Key};
use crate::render::Renderer;
use crate::resources::{AssetManifest, ResourceManager};
use crate::scenes::{
    CreditsScene, GameplayScene, HighScoresScene, Scene, SceneKind, TitleScene,
};
use crate::settings::Settings;
use crate::sim::{GameplayState, RandomSource, Rect};

pub struct Game {
    settings: Settings,
    resources: ResourceManager,
    screen: Rect,
    /// Source of per-round seeds
    seeds: RandomSource,
    scene: Box<dyn Scene>,
}

impl Game {
    /// Load resources from the configured manifest and open the title screen
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        let manifest = match &settings.asset_manifest_path {
            Some(path) => AssetManifest::load(path)?,
            None => AssetManifest::builtin(),
        };
        let seed = settings.seed.unwrap_or_else(clock_seed);
        Self::with_resources(settings, ResourceManager::new(manifest), seed)
    }

    pub fn with_resources(
        settings: Settings,
        mut resources: ResourceManager,
        seed: u64,
    ) -> Result<Self, GameError> {
        let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
        let scene = Box::new(TitleScene::new(&mut resources, screen)?);
        log::info!("{} starting (seed {})", GAME_TITLE, seed);

        Ok(Self {
            settings,
            resources,
            screen,
            seeds: RandomSource::new(seed),
            scene,
        })
    }

    pub fn scene_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    /// State of the running round, if the gameplay scene is active
    pub fn gameplay(&self) -> Option<&GameplayState> {
        self.scene.gameplay_state()
    }

    #[cfg(test)]
    pub(crate) fn gameplay_mut(&mut self) -> Option<&mut GameplayState> {
        self.scene.gameplay_state_mut()
    }

    /// Advance the active scene by one frame
    pub fn update(&mut self, dt: f32, input: &dyn InputSource) -> Result<(), GameError> {
        self.scene.update(dt, input);
        self.switch_if_requested()
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        self.scene.render(renderer);
    }

    pub fn handle_key_press(&mut self, key: Key) -> Result<(), GameError> {
        self.scene.handle_key_press(key);
        self.switch_if_requested()
    }

    fn switch_if_requested(&mut self) -> Result<(), GameError> {
        if let Some(next) = self.scene.next_scene() {
            log::info!("Switching scene {:?} -> {:?}", self.scene.kind(), next);
            self.scene = self.build_scene(next)?;
        }
        Ok(())
    }

    fn build_scene(&mut self, kind: SceneKind) -> Result<Box<dyn Scene>, GameError> {
        let scene: Box<dyn Scene> = match kind {
            SceneKind::Title => Box::new(TitleScene::new(&mut self.resources, self.screen)?),
            SceneKind::Gameplay => Box::new(GameplayScene::new(
                &mut self.resources,
                self.seeds.next_seed(),
                self.screen,
                self.settings.high_scores_path.clone(),
            )?),
            SceneKind::HighScores => Box::new(HighScoresScene::new(
                &mut self.resources,
                self.screen,
                &self.settings.high_scores_path,
            )?),
            SceneKind::Credits => Box::new(CreditsScene::new(&mut self.resources)?),
        };
        Ok(scene)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScores;
    use crate::input::HeldButtons;
    use crate::resources::paths;
    use crate::sim::RoundState;

    fn game(dir: &tempfile::TempDir) -> Game {
        let settings = Settings {
            high_scores_path: dir.path().join("highScores.txt"),
            ..Default::default()
        };
        Game::with_resources(settings, ResourceManager::default(), 99).unwrap()
    }

    #[test]
    fn test_starts_on_title() {
        let dir = tempfile::tempdir().unwrap();
        let game = game(&dir);
        assert_eq!(game.scene_kind(), SceneKind::Title);
        assert!(game.gameplay().is_none());
    }

    #[test]
    fn test_menu_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game(&dir);

        game.handle_key_press(Key::Char('3')).unwrap();
        assert_eq!(game.scene_kind(), SceneKind::Credits);
        game.handle_key_press(Key::Char('x')).unwrap();
        assert_eq!(game.scene_kind(), SceneKind::Title);

        game.handle_key_press(Key::Char('2')).unwrap();
        assert_eq!(game.scene_kind(), SceneKind::HighScores);
        game.handle_key_press(Key::Enter).unwrap();
        assert_eq!(game.scene_kind(), SceneKind::Title);

        game.handle_key_press(Key::Char('1')).unwrap();
        assert_eq!(game.scene_kind(), SceneKind::Gameplay);
        assert!(game.gameplay().is_some());
    }

    #[test]
    fn test_ended_round_records_score_on_enter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highScores.txt");
        let mut game = game(&dir);
        game.handle_key_press(Key::Char('1')).unwrap();

        let state = game.gameplay_mut().unwrap();
        state.add_to_score(1200);
        state.eggs.clear();
        game.update(1.0 / 60.0, &HeldButtons::default()).unwrap();
        assert_eq!(game.gameplay().unwrap().round, RoundState::GameOver);

        game.handle_key_press(Key::Enter).unwrap();
        assert_eq!(game.scene_kind(), SceneKind::Title);
        assert_eq!(HighScores::load(&path).descending(), [1200, 0, 0, 0, 0]);
    }

    #[test]
    fn test_failed_save_still_returns_to_title() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the score directory should be
        let blocker = dir.path().join("res");
        std::fs::write(&blocker, "").unwrap();
        let settings = Settings {
            high_scores_path: blocker.join("highScores.txt"),
            ..Default::default()
        };
        let mut game = Game::with_resources(settings, ResourceManager::default(), 5).unwrap();
        game.handle_key_press(Key::Char('1')).unwrap();

        game.gameplay_mut().unwrap().aliens.clear();
        game.update(0.0, &HeldButtons::default()).unwrap();
        assert_eq!(game.gameplay().unwrap().round, RoundState::Victory);

        assert!(game.handle_key_press(Key::Enter).is_ok());
        assert_eq!(game.scene_kind(), SceneKind::Title);
    }

    #[test]
    fn test_rounds_get_different_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game(&dir);

        game.handle_key_press(Key::Char('1')).unwrap();
        let first = game.gameplay().unwrap().seed;
        game.gameplay_mut().unwrap().aliens.clear();
        game.update(0.0, &HeldButtons::default()).unwrap();
        game.handle_key_press(Key::Enter).unwrap();

        game.handle_key_press(Key::Char('1')).unwrap();
        assert_ne!(game.gameplay().unwrap().seed, first);
    }

    #[test]
    fn test_missing_font_fails_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut manifest = AssetManifest::builtin();
        manifest.fonts.remove(paths::FONT);

        let result = Game::with_resources(
            Settings {
                high_scores_path: dir.path().join("highScores.txt"),
                ..Default::default()
            },
            ResourceManager::new(manifest),
            1,
        );
        assert!(matches!(result, Err(GameError::Resource(_))));
    }

    #[test]
    fn test_missing_manifest_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            asset_manifest_path: Some(dir.path().join("assets.json")),
            seed: Some(1),
            ..Default::default()
        };
        assert!(Game::new(settings).is_err());
    }
}
