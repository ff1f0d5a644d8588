//! Core game logic, free of rendering and audio.

pub mod food;
pub mod grid;
pub mod render;
pub mod schedule;
pub mod session;
pub mod snake;

pub use food::{Food, FoodItem, FoodKind, FoodType, Rgb};
pub use grid::{Direction, Position};
pub use render::{BodyCell, RenderModel};
pub use schedule::TickScheduler;
pub use session::{GameSession, SessionInput, SessionState, SessionSummary, TickOutcome, TickReport};
pub use snake::{Snake, SnakeTuning};
