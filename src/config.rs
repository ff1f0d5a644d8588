use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::food::{FoodKind, FoodType, Rgb};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the grid in cells
    pub grid_width: i32,
    /// Height of the grid in cells
    pub grid_height: i32,
    /// Pixel size of one cell
    pub cell_size: u32,
    /// Ticks per second at level 1
    pub initial_speed: u32,
    pub max_level: u32,
    /// Score needed for each level
    pub points_per_level: u32,
    /// Speed added on each level-up
    pub level_speed_step: u32,
    /// Speed added while a boost is active
    pub boost_speed_step: u32,
    /// Score awarded per unit of food value
    pub score_per_value: u32,
    pub food_types: Vec<FoodType>,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 53,
            grid_height: 40,
            cell_size: 15,
            initial_speed: Difficulty::Normal.initial_speed(),
            max_level: 5,
            points_per_level: 100,
            level_speed_step: 1,
            boost_speed_step: 2,
            score_per_value: 10,
            food_types: vec![
                FoodType {
                    name: "apple".to_string(),
                    color: Rgb::new(0, 255, 0),
                    value: 1,
                    kind: FoodKind::Basic,
                },
                FoodType {
                    name: "berry".to_string(),
                    color: Rgb::new(128, 0, 128),
                    value: 3,
                    kind: FoodKind::Boosted { duration_ms: 5000 },
                },
            ],
            high_score_path: PathBuf::from("highscore.txt"),
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Window size in pixels that shows the whole grid at `cell_size`.
    pub fn window_size(&self) -> (f32, f32) {
        let cell = self.cell_size as f32;
        (self.grid_width as f32 * cell, self.grid_height as f32 * cell)
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.initial_speed = difficulty.initial_speed();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.cell_size == 0 {
            return Err(Error::InvalidConfig("cell_size must be non-zero".into()));
        }
        if self.initial_speed == 0 {
            return Err(Error::InvalidConfig("initial_speed must be non-zero".into()));
        }
        if self.max_level == 0 || self.points_per_level == 0 {
            return Err(Error::InvalidConfig(
                "max_level and points_per_level must be non-zero".into(),
            ));
        }
        if self.food_types.is_empty() {
            return Err(Error::InvalidConfig("at least one food type is required".into()));
        }
        for food in &self.food_types {
            if let FoodKind::Boosted { duration_ms: 0 } = food.kind {
                return Err(Error::InvalidConfig(format!(
                    "food type {:?} has a zero boost duration",
                    food.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn initial_speed(self) -> u32 {
        match self {
            Difficulty::Easy => 7,
            Difficulty::Normal => 10,
            Difficulty::Hard => 14,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}
