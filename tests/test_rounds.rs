use egg_snatchers::consts::*;
use egg_snatchers::resources::ResourceManager;
use egg_snatchers::sim::{
    ActorAssets, GameEvent, GameplayState, Missile, MissileSource, Rect, RoundState, Sprite,
    TickInput, tick,
};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn new_round(seed: u64) -> GameplayState {
    let assets = ActorAssets::load(&mut ResourceManager::default()).unwrap();
    GameplayState::new(seed, assets, Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT))
}

fn carrot_at(state: &GameplayState, target: &Rect) -> Missile {
    let asset = state.assets().carrot_missile;
    Missile::new(
        MissileSource::Bunny,
        Vec2::ZERO,
        Sprite::new(asset, target.center() - asset.size / 2.0),
    )
}

#[test]
fn test_clearing_every_alien_but_one_spawns_a_wave() {
    let mut state = new_round(21);
    let total = state.aliens.len();

    // Shoot down all but the last alien, one per frame
    for _ in 0..total - 1 {
        let target = state.aliens[0].bounds();
        let missile = carrot_at(&state, &target);
        state.missiles.push(missile);
        tick(&mut state, &TickInput::default(), 0.0);
    }

    assert_eq!(state.wave, 1);
    assert_eq!(state.aliens.len(), 1 + ALIEN_ROWS * ALIEN_COLUMNS);
    assert_eq!(state.score(), (total as u16 - 1) * ALIEN_KILL_POINTS);
    assert_eq!(state.round, RoundState::Playing);
}

#[test]
fn test_idle_bunny_eventually_loses() {
    // With nobody shooting back, aliens wear down the eggs and bunny
    let mut state = new_round(5);
    let mut frames = 0;
    while state.round == RoundState::Playing && frames < 60 * 60 * 30 {
        tick(&mut state, &TickInput::default(), DT);
        frames += 1;
    }

    assert_eq!(state.round, RoundState::GameOver);
    assert!(state.eggs.is_empty() || state.bunny.lives() == 0);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_events_describe_a_kill() {
    let mut state = new_round(8);
    let target = state.aliens[3].bounds();
    let missile = carrot_at(&state, &target);
    state.missiles.push(missile);
    tick(&mut state, &TickInput::default(), 0.0);

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::AlienKilled {
        points: ALIEN_KILL_POINTS
    }));
    assert!(events.contains(&GameEvent::Explosion {
        at: target.center()
    }));
    assert!(state.drain_events().is_empty());
}

#[test]
fn test_explosions_fade() {
    let mut state = new_round(9);
    let target = state.aliens[0].bounds();
    let missile = carrot_at(&state, &target);
    state.missiles.push(missile);
    tick(&mut state, &TickInput::default(), 0.0);
    assert_eq!(state.explosions.len(), 1);

    for _ in 0..70 {
        tick(&mut state, &TickInput::default(), DT);
    }
    assert!(state.explosions.is_empty());
}

#[test]
fn test_same_seed_same_round() {
    let run = |seed| {
        let mut state = new_round(seed);
        for i in 0..900 {
            let input = TickInput {
                left: i % 120 < 40,
                right: i % 120 >= 80,
                fire: true,
            };
            tick(&mut state, &input, DT);
        }
        (
            state.score(),
            state.bunny.lives(),
            state.eggs.iter().map(|e| e.health()).collect::<Vec<_>>(),
            state.aliens.iter().map(|a| a.sprite.pos).collect::<Vec<_>>(),
        )
    };

    assert_eq!(run(77), run(77));
}
