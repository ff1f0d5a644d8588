use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use snake_arcade::frontend::audio::{Effect, SoundEffects};
use snake_arcade::frontend::{MacroquadClock, draw, input};
use snake_arcade::game::{GameSession, SessionSummary, TickOutcome, TickScheduler};
use snake_arcade::{Clock, Difficulty, GameConfig, HighScoreStore, MenuAction, MenuController};

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Arcade snake with levels, boosts and a high score")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the high score is kept (overrides the config)
    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// Starting difficulty
    #[arg(long, value_enum, default_value = "normal")]
    difficulty: Difficulty,

    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// Run without sound
    #[arg(long)]
    mute: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

enum Screen {
    Menu(MenuController),
    Playing {
        session: GameSession,
        scheduler: TickScheduler,
    },
    GameOver {
        session: GameSession,
        summary: SessionSummary,
    },
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: 795,
        window_height: 600,
        high_dpi: true,
        ..Default::default()
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => GameConfig::default(),
    };
    config = config.with_difficulty(cli.difficulty);
    if let Some(path) = &cli.high_score_file {
        config.high_score_path = path.clone();
    }
    Ok(config)
}

fn start_session(config: &GameConfig) -> Result<Screen> {
    let store = HighScoreStore::new(config.high_score_path.clone());
    let session = GameSession::new(config.clone(), store).context("Failed to start session")?;
    Ok(Screen::Playing {
        session,
        scheduler: TickScheduler::new(),
    })
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    info!("Starting snake");

    let mut config = load_config(&cli)?;
    let (window_width, window_height) = config.window_size();
    request_new_screen_size(window_width, window_height);
    let high_scores = HighScoreStore::new(config.high_score_path.clone());
    let sounds = if cli.mute {
        SoundEffects::muted()
    } else {
        SoundEffects::load(1.0).await
    };
    let clock = MacroquadClock;
    let mut difficulty = cli.difficulty;
    let mut screen = Screen::Menu(MenuController::new(difficulty));

    loop {
        if input::quit_pressed() {
            break;
        }

        let mut next_screen: Option<Screen> = None;
        let mut finished: Option<SessionSummary> = None;
        match &mut screen {
            Screen::Menu(menu) => {
                for menu_input in input::poll_menu_inputs() {
                    match menu.handle(menu_input) {
                        Some(MenuAction::Start) => next_screen = Some(start_session(&config)?),
                        Some(MenuAction::DifficultyChanged(selected)) => {
                            difficulty = selected;
                            config = config.with_difficulty(selected);
                            info!("Difficulty set to {}", selected.label());
                        }
                        Some(MenuAction::Quit) => return Ok(()),
                        None => {}
                    }
                }
                draw::draw_menu(menu, high_scores.load());
            }

            Screen::Playing { session, scheduler } => {
                if input::back_pressed() {
                    info!("Session abandoned with score {}", session.snake().score());
                    next_screen = Some(Screen::Menu(MenuController::new(difficulty)));
                } else {
                    for session_input in input::poll_session_inputs() {
                        session.handle_input(session_input);
                    }

                    if scheduler.poll(clock.now_ms(), session.tick_interval_ms()) {
                        match session.tick(&clock) {
                            TickOutcome::Advanced(report) => {
                                if report.eaten.is_some() {
                                    sounds.play(Effect::Eat);
                                }
                                if report.leveled_up {
                                    sounds.play(Effect::LevelUp);
                                }
                            }
                            TickOutcome::Paused => {}
                            TickOutcome::GameOver(summary) => {
                                sounds.play(Effect::GameOver);
                                finished = Some(summary);
                            }
                        }
                    }
                    draw::draw_session(&session.render_model(clock.now_ms()), &config);
                }
            }

            Screen::GameOver { session, summary } => {
                draw::draw_game_over(&session.render_model(clock.now_ms()), summary, &config);
                if input::restart_pressed() {
                    next_screen = Some(start_session(&config)?);
                } else if input::confirm_pressed() {
                    next_screen = Some(Screen::Menu(MenuController::new(difficulty)));
                }
            }
        }

        if let Some(summary) = finished {
            let placeholder = Screen::Menu(MenuController::new(difficulty));
            if let Screen::Playing { session, .. } = std::mem::replace(&mut screen, placeholder) {
                next_screen = Some(Screen::GameOver { session, summary });
            }
        }

        if let Some(ns) = next_screen {
            screen = ns;
        }

        next_frame().await;
    }

    info!("Quitting");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        eprintln!("snake_arcade: {:#}", e);
        std::process::exit(1);
    }
}
