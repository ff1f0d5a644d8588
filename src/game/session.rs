use std::collections::VecDeque;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::food::{Food, FoodType};
use super::grid::{Direction, Position};
use super::render::{RenderModel, fade_cells};
use super::schedule::interval_for_speed;
use super::snake::{Snake, SnakeTuning};
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::error::Result;
use crate::highscore::HighScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Turn(Direction),
    TogglePause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_score: u32,
    /// The final score beat the stored high score and was persisted
    pub new_high_score: bool,
}

/// What happened during one tick while running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub eaten: Option<FoodType>,
    pub leveled_up: bool,
    pub boost_expired: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced(TickReport),
    Paused,
    GameOver(SessionSummary),
}

/// Turns that can wait for upcoming ticks.
const MAX_PENDING_TURNS: usize = 3;

/// One play session, from the first tick until the snake crashes.
pub struct GameSession<R: Rng = StdRng> {
    config: GameConfig,
    snake: Snake,
    food: Food,
    rng: R,
    store: HighScoreStore,
    high_score: u32,
    state: SessionState,
    pending: VecDeque<Direction>,
    summary: Option<SessionSummary>,
}

impl GameSession<StdRng> {
    pub fn new(config: GameConfig, store: HighScoreStore) -> Result<Self> {
        Self::with_rng(config, store, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session with a given random source. Fails if `config` does
    /// not validate.
    pub fn with_rng(config: GameConfig, store: HighScoreStore, mut rng: R) -> Result<Self> {
        config.validate()?;
        let snake = Snake::new(SnakeTuning::from(&config));
        let occupied: Vec<Position> = snake.positions().iter().copied().collect();
        let food = Food::new(
            config.food_types.clone(),
            config.grid_width,
            config.grid_height,
            &occupied,
            &mut rng,
        );
        let high_score = store.load();
        info!(
            "Session started: {}x{} grid, speed {}, high score {}",
            config.grid_width, config.grid_height, config.initial_speed, high_score
        );

        Ok(Self {
            config,
            snake,
            food,
            rng,
            store,
            high_score,
            state: SessionState::Running,
            pending: VecDeque::new(),
            summary: None,
        })
    }

    /// Turn intents queue up, one applied per tick. Each is checked against
    /// the direction the turns before it will leave the snake in, so a quick
    /// Up then Left while moving Right keeps both. While paused they are
    /// dropped.
    pub fn handle_input(&mut self, input: SessionInput) {
        match (input, self.state) {
            (SessionInput::TogglePause, SessionState::Running) => {
                self.state = SessionState::Paused;
                debug!("Paused");
            }
            (SessionInput::TogglePause, SessionState::Paused) => {
                self.state = SessionState::Running;
                debug!("Resumed");
            }
            (SessionInput::Turn(direction), SessionState::Running) => {
                let heading = self.pending.back().copied().unwrap_or(self.snake.direction());
                if direction != heading
                    && !heading.is_opposite(direction)
                    && self.pending.len() < MAX_PENDING_TURNS
                {
                    self.pending.push_back(direction);
                }
            }
            _ => {}
        }
    }

    pub fn tick(&mut self, clock: &dyn Clock) -> TickOutcome {
        if let Some(summary) = self.summary {
            return TickOutcome::GameOver(summary);
        }
        if self.state == SessionState::Paused {
            return TickOutcome::Paused;
        }

        if let Some(direction) = self.pending.pop_front() {
            self.snake.set_direction(direction);
        }

        self.snake.advance();

        if self.snake.check_collision() {
            return TickOutcome::GameOver(self.finish());
        }

        let now = clock.now_ms();
        let mut report = TickReport::default();

        if self.snake.head() == self.food.position() {
            let eaten = self.food.item().kind.clone();
            self.snake
                .grow(eaten.value as usize, eaten.value * self.config.score_per_value);
            if let Some(duration) = eaten.boost_duration_ms() {
                self.snake.apply_boost(duration, now);
            }
            report.leveled_up = self.snake.apply_level_up();

            let occupied: Vec<Position> = self.snake.positions().iter().copied().collect();
            self.food.respawn(&occupied, &mut self.rng);
            debug!(
                "Ate {} at {:?}, score {}",
                eaten.name,
                self.snake.head(),
                self.snake.score()
            );
            report.eaten = Some(eaten);
        }

        report.boost_expired = self.snake.expire_boost_if_due(now);

        TickOutcome::Advanced(report)
    }

    fn finish(&mut self) -> SessionSummary {
        let final_score = self.snake.score();
        let new_high_score = self.store.save(final_score);
        if new_high_score {
            self.high_score = final_score;
        }
        info!(
            "Game over: score {}, level {}, length {}",
            final_score,
            self.snake.level(),
            self.snake.length()
        );

        let summary = SessionSummary {
            final_score,
            new_high_score,
        };
        self.state = SessionState::Over;
        self.summary = Some(summary);
        summary
    }

    /// Delay before the next tick; faster snakes tick more often.
    pub fn tick_interval_ms(&self) -> u64 {
        interval_for_speed(self.snake.speed())
    }

    pub fn render_model(&self, now_ms: u64) -> RenderModel {
        RenderModel {
            cells: fade_cells(self.snake.positions().iter()),
            food: self.food.item().clone(),
            hud: vec![
                format!("Score: {}", self.snake.score()),
                format!("High Score: {}", self.high_score),
                format!("Speed: {}", self.snake.speed()),
                format!("Level: {}", self.snake.level()),
            ],
            boost_progress: self.snake.boost_remaining_fraction(now_ms),
            state: self.state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        self.summary
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
