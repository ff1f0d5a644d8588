use std::collections::VecDeque;

use log::{debug, info};

use super::grid::{Direction, Position};
use crate::config::GameConfig;

/// Fixed parameters a snake is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeTuning {
    pub grid_width: i32,
    pub grid_height: i32,
    pub initial_speed: u32,
    pub max_level: u32,
    pub points_per_level: u32,
    pub level_speed_step: u32,
    pub boost_speed_step: u32,
}

impl From<&GameConfig> for SnakeTuning {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            initial_speed: config.initial_speed,
            max_level: config.max_level,
            points_per_level: config.points_per_level,
            level_speed_step: config.level_speed_step,
            boost_speed_step: config.boost_speed_step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Boost {
    until_ms: u64,
    duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Snake {
    tuning: SnakeTuning,
    /// Tail at the front, head at the back
    positions: VecDeque<Position>,
    length: usize,
    direction: Direction,
    speed: u32,
    score: u32,
    level: u32,
    boost: Option<Boost>,
}

impl Snake {
    pub fn new(tuning: SnakeTuning) -> Self {
        let mut snake = Self {
            tuning,
            positions: VecDeque::new(),
            length: 1,
            direction: Direction::None,
            speed: tuning.initial_speed,
            score: 0,
            level: 1,
            boost: None,
        };
        snake.reset();
        snake
    }

    pub fn reset(&mut self) {
        let center = Position::new(self.tuning.grid_width / 2, self.tuning.grid_height / 2);
        self.positions.clear();
        self.positions.push_back(center);
        self.length = 1;
        self.direction = Direction::None;
        self.speed = self.tuning.initial_speed;
        self.score = 0;
        self.level = 1;
        self.boost = None;
    }

    /// Adopt a new direction unless it would reverse the snake into itself.
    pub fn set_direction(&mut self, intent: Direction) {
        if intent == self.direction || self.direction.is_opposite(intent) {
            return;
        }
        self.direction = intent;
    }

    /// Move one cell along the current direction. Does nothing before the
    /// first turn.
    pub fn advance(&mut self) {
        if self.direction == Direction::None {
            return;
        }
        let new_head = self.head().moved_in_direction(self.direction);
        self.positions.push_back(new_head);
        while self.positions.len() > self.length {
            self.positions.pop_front();
        }
    }

    pub fn check_collision(&self) -> bool {
        let head = self.head();
        if !head.in_bounds(self.tuning.grid_width, self.tuning.grid_height) {
            return true;
        }
        // Linear scan; the body never gets long enough for a set to pay off.
        self.positions
            .iter()
            .take(self.positions.len() - 1)
            .any(|p| *p == head)
    }

    pub fn grow(&mut self, amount: usize, score_delta: u32) {
        self.length += amount;
        self.score += score_delta;
    }

    /// Move up one level if the score has crossed into a new one. Returns
    /// true on a level-up.
    pub fn apply_level_up(&mut self) -> bool {
        let earned = 1 + self.score / self.tuning.points_per_level;
        if earned > self.level && self.level < self.tuning.max_level {
            self.level += 1;
            self.speed += self.tuning.level_speed_step;
            info!("Level up: level {} speed {}", self.level, self.speed);
            return true;
        }
        false
    }

    pub fn apply_boost(&mut self, duration_ms: u64, now_ms: u64) {
        let until_ms = now_ms + duration_ms;
        match self.boost.as_mut() {
            // Refresh the timer only, the step is already applied.
            Some(boost) => {
                boost.until_ms = until_ms;
                boost.duration_ms = duration_ms;
            }
            None => {
                self.speed += self.tuning.boost_speed_step;
                self.boost = Some(Boost { until_ms, duration_ms });
            }
        }
        debug!("Boost active until {} ms, speed {}", until_ms, self.speed);
    }

    /// Remove the boost once its time is up. Returns true if it expired now.
    pub fn expire_boost_if_due(&mut self, now_ms: u64) -> bool {
        match self.boost {
            Some(boost) if now_ms >= boost.until_ms => {
                self.speed = self.speed.saturating_sub(self.tuning.boost_speed_step);
                self.boost = None;
                debug!("Boost expired, speed {}", self.speed);
                true
            }
            _ => false,
        }
    }

    /// Remaining boost time as a fraction of its duration.
    pub fn boost_remaining_fraction(&self, now_ms: u64) -> Option<f32> {
        self.boost.map(|boost| {
            let remaining = boost.until_ms.saturating_sub(now_ms);
            (remaining as f32 / boost.duration_ms as f32).clamp(0.0, 1.0)
        })
    }

    pub fn head(&self) -> Position {
        // The body always holds at least one cell.
        self.positions[self.positions.len() - 1]
    }

    pub fn positions(&self) -> &VecDeque<Position> {
        &self.positions
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_boosted(&self) -> bool {
        self.boost.is_some()
    }

    #[cfg(test)]
    pub(crate) fn place_head(&mut self, pos: Position) {
        self.positions.clear();
        self.positions.push_back(pos);
    }
}
