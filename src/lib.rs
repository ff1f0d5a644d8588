//! Snake arcade game.
//!
//! The `game` module holds the simulation (snake, food, session state machine)
//! with no rendering or audio dependencies. `frontend` draws it with macroquad.

pub mod clock;
pub mod config;
pub mod error;
pub mod frontend;
pub mod game;
pub mod highscore;
pub mod menu;

pub use clock::{Clock, ManualClock};
pub use config::{Difficulty, GameConfig};
pub use error::{Error, Result};
pub use highscore::HighScoreStore;
pub use menu::{MenuAction, MenuController, MenuInput};
