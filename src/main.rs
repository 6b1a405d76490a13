//! Galactic Egg Snatchers terminal entry point
//!
//! Loads settings, sets up logging and the terminal, then runs the frame loop.

mod terminal;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal as term,
};

use egg_snatchers::consts::{GAME_TITLE, MAX_FRAME_DT};
use egg_snatchers::input::KeyTracker;
use egg_snatchers::settings::DEFAULT_SETTINGS_PATH;
use egg_snatchers::{Game, GameError, Settings};

use terminal::{TerminalRenderer, key_from_code};

/// Log to a file, and only when asked; stderr would tear the alternate screen
fn init_logging(settings: &Settings) {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    match File::create(&settings.log_path) {
        Ok(file) => {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => eprintln!(
            "Could not open log file {}: {}",
            settings.log_path.display(),
            err
        ),
    }
}

fn main() -> ExitCode {
    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load(&settings_path);
    init_logging(&settings);
    log::info!("{} (terminal) starting...", GAME_TITLE);

    let frame = settings.frame_duration();
    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Failed to start: {}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match run_in_terminal(&mut game, frame) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_in_terminal(game: &mut Game, frame: Duration) -> Result<(), GameError> {
    let mut out = BufWriter::new(stdout());

    term::enable_raw_mode()?;
    out.execute(term::EnterAlternateScreen)?;
    out.execute(term::Clear(term::ClearType::All))?;
    out.execute(cursor::Hide)?;

    // Key release events where the terminal supports them
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the frame loop never waits
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = frame_loop(&mut out, &rx, game, frame);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(term::LeaveAlternateScreen);
    let _ = term::disable_raw_mode();

    result
}

fn frame_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    game: &mut Game,
    frame: Duration,
) -> Result<(), GameError> {
    let mut keys = KeyTracker::new();
    let mut renderer = TerminalRenderer::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        keys.begin_frame();

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };

            let quit = matches!(code, KeyCode::Esc)
                || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL));
            if quit && kind == KeyEventKind::Press {
                log::info!("Quit requested");
                return Ok(());
            }

            let key = key_from_code(code);
            match kind {
                KeyEventKind::Press => {
                    keys.press(key);
                    game.handle_key_press(key)?;
                }
                KeyEventKind::Repeat => keys.press(key),
                KeyEventKind::Release => keys.release(key),
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
        last = now;

        game.update(dt, &keys)?;
        game.render(&mut renderer);
        renderer.present(out, game.resources())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}
