//! CV Pong entry point
//!
//! Runs the frame-locked game loop headless. The autopilot steers the paddle
//! by default; `--controller keyboard` reads key transitions from stdin
//! instead (`press ArrowUp`, `release ArrowUp`, ...). The log view reports
//! the score. Window and camera backends plug in through the
//! `PaddleController` and `PongView` traits.

use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use cv_pong::controller::{
    AutopilotController, KeyEvent, KeyboardController, PaddleController, drive,
};
use cv_pong::sim::{GameEvent, GameState, tick};
use cv_pong::view::{LogView, PongView};
use cv_pong::{Config, ControllerError, FrameClock};

const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_SEED: u64 = 0x5EED;
const USAGE: &str =
    "usage: cv-pong [--config PATH] [--frames N] [--seed S] [--controller auto|keyboard] [--fast]";

/// Which paddle controller the runner wires in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControllerKind {
    Auto,
    Keyboard,
}

/// Command-line options
#[derive(Debug)]
struct Options {
    config: Option<PathBuf>,
    frames: u64,
    seed: u64,
    controller: ControllerKind,
    /// Skip frame pacing
    fast: bool,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self, String> {
        let mut opts = Options {
            config: None,
            frames: DEFAULT_FRAMES,
            seed: DEFAULT_SEED,
            controller: ControllerKind::Auto,
            fast: false,
        };
        while let Some(arg) = args.next() {
            let mut value = |name: &str| args.next().ok_or(format!("{} needs a value", name));
            match arg.as_str() {
                "--config" => opts.config = Some(PathBuf::from(value("--config")?)),
                "--frames" => {
                    opts.frames = value("--frames")?
                        .parse()
                        .map_err(|e| format!("bad --frames: {}", e))?
                }
                "--seed" => {
                    opts.seed = value("--seed")?
                        .parse()
                        .map_err(|e| format!("bad --seed: {}", e))?
                }
                "--controller" => {
                    opts.controller = match value("--controller")?.as_str() {
                        "auto" => ControllerKind::Auto,
                        "keyboard" => ControllerKind::Keyboard,
                        other => return Err(format!("unknown controller: {}", other)),
                    }
                }
                "--fast" => opts.fast = true,
                other => return Err(format!("unknown argument: {}", other)),
            }
        }
        Ok(opts)
    }
}

/// Keyboard controller fed by key transitions read from stdin
struct StdinKeyboard {
    keys: KeyboardController,
    events: mpsc::Receiver<KeyEvent>,
}

impl StdinKeyboard {
    fn spawn(config: &Config) -> std::io::Result<Self> {
        let (tx, events) = mpsc::channel();
        std::thread::Builder::new()
            .name("stdin-keys".into())
            .spawn(move || {
                for line in std::io::stdin().lock().lines() {
                    let Ok(line) = line else { break };
                    match KeyEvent::from_line(&line) {
                        Some(event) => {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                        None => log::warn!("Ignoring key line {:?}", line),
                    }
                }
            })?;
        Ok(Self {
            keys: KeyboardController::new(config),
            events,
        })
    }
}

impl PaddleController for StdinKeyboard {
    fn target(&mut self, state: &GameState) -> Result<Option<i32>, ControllerError> {
        // Non-blocking: apply whatever arrived since the last frame
        self.keys.handle_events(self.events.try_iter());
        self.keys.target(state)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("CV Pong (headless) starting...");

    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            log::error!("{}", msg);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = match &opts.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let mut controller: Box<dyn PaddleController> = match opts.controller {
        ControllerKind::Auto => Box::new(AutopilotController::new(&config, opts.seed)),
        ControllerKind::Keyboard => match StdinKeyboard::spawn(&config) {
            Ok(keys) => Box::new(keys),
            Err(e) => {
                log::error!("Failed to start key reader: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    let mut view = LogView::new();
    match run(&config, &mut controller, &mut view, &opts) {
        Ok(state) => {
            log::info!(
                "Finished {} frames, final score {}",
                state.time_ticks(),
                state.score()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Input failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Frame loop: input, update, draw, wait
fn run<C: PaddleController + ?Sized, V: PongView>(
    config: &Config,
    controller: &mut C,
    view: &mut V,
    opts: &Options,
) -> Result<GameState, ControllerError> {
    let mut state = GameState::new(config);
    let mut clock = FrameClock::new(config.frame_rate);
    log::info!(
        "Game initialized with {:?} controller, seed {} at {} fps",
        opts.controller,
        opts.seed,
        config.frame_rate
    );

    for _ in 0..opts.frames {
        drive(controller, &mut state)?;
        for event in tick(&mut state) {
            if let GameEvent::Miss { score } = event {
                log::info!("Missed! Score now {}", score);
            }
        }
        view.draw(&state, controller.camera_frame());

        if !opts.fast {
            clock.wait();
        }
    }

    Ok(state)
}
