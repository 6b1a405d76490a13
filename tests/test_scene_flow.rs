use egg_snatchers::hud::ended_message;
use egg_snatchers::input::{HeldButtons, Key};
use egg_snatchers::render::RecordingRenderer;
use egg_snatchers::resources::ResourceManager;
use egg_snatchers::scenes::SceneKind;
use egg_snatchers::{Game, HighScores, Settings};

fn game_in(dir: &tempfile::TempDir) -> Game {
    let settings = Settings {
        high_scores_path: dir.path().join("highScores.txt"),
        seed: Some(3),
        ..Default::default()
    };
    Game::with_resources(settings, ResourceManager::default(), 3).unwrap()
}

#[test]
fn test_play_a_round_and_record_the_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highScores.txt");
    let mut game = game_in(&dir);
    let fire = HeldButtons {
        fire: true,
        ..Default::default()
    };

    game.handle_key_press(Key::Char('1')).unwrap();
    assert_eq!(game.scene_kind(), SceneKind::Gameplay);

    // Hold fire from a standing start until the round is decided
    let mut frames = 0;
    while !game.gameplay().unwrap().round.has_ended() && frames < 60 * 60 * 30 {
        game.update(1.0 / 60.0, &fire).unwrap();
        frames += 1;
    }
    let state = game.gameplay().unwrap();
    let round = state.round;
    let score = state.score();
    assert!(round.has_ended());

    let mut renderer = RecordingRenderer::new();
    game.render(&mut renderer);
    assert!(renderer.has_text(ended_message(round).unwrap()));
    assert!(renderer.has_text(&format!("SCORE: {:05}", score)));

    game.handle_key_press(Key::Enter).unwrap();
    assert_eq!(game.scene_kind(), SceneKind::Title);
    assert_eq!(HighScores::load(&path).descending(), [score, 0, 0, 0, 0]);

    // The high score screen shows what was just saved
    game.handle_key_press(Key::Char('2')).unwrap();
    renderer.clear();
    game.render(&mut renderer);
    assert!(renderer.has_text(&format!("{:05}", score)));
}

#[test]
fn test_new_round_shows_saved_high_score() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("highScores.txt"), "100\n4500\n").unwrap();
    let mut game = game_in(&dir);

    game.handle_key_press(Key::Char('1')).unwrap();
    let mut renderer = RecordingRenderer::new();
    game.render(&mut renderer);
    assert!(renderer.has_text("HIGH SCORE: 04500"));
    assert!(renderer.has_text("LIVES: 3"));
}

#[test]
fn test_held_fire_shoots_from_game_update() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(&dir);
    game.handle_key_press(Key::Char('1')).unwrap();

    let fire = HeldButtons {
        fire: true,
        ..Default::default()
    };
    for _ in 0..40 {
        game.update(1.0 / 60.0, &fire).unwrap();
    }
    let state = game.gameplay().unwrap();
    assert!(!state.missiles.is_empty() || state.score() > 0);
}
