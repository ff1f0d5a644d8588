use std::collections::HashSet;

use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::grid::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodKind {
    Basic,
    /// Speeds the snake up for a while after being eaten
    Boosted { duration_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodType {
    pub name: String,
    pub color: Rgb,
    /// Cells of growth; score is this times the configured multiplier
    pub value: u32,
    pub kind: FoodKind,
}

impl FoodType {
    pub fn boost_duration_ms(&self) -> Option<u64> {
        match self.kind {
            FoodKind::Basic => None,
            FoodKind::Boosted { duration_ms } => Some(duration_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    pub kind: FoodType,
    pub position: Position,
}

/// Spawn policy for the single food item on the board.
#[derive(Debug, Clone)]
pub struct Food {
    types: Vec<FoodType>,
    grid_width: i32,
    grid_height: i32,
    current: FoodItem,
}

impl Food {
    /// Create food and place the first item away from `occupied`.
    ///
    /// `types` must not be empty; the config validation guarantees that.
    pub fn new<R: Rng>(
        types: Vec<FoodType>,
        grid_width: i32,
        grid_height: i32,
        occupied: &[Position],
        rng: &mut R,
    ) -> Self {
        let current = FoodItem {
            kind: types[0].clone(),
            position: Position::new(0, 0),
        };
        let mut food = Self {
            types,
            grid_width,
            grid_height,
            current,
        };
        food.respawn(occupied, rng);
        food
    }

    /// Pick a new type and a free cell. If the snake fills every cell the
    /// item keeps its old position.
    pub fn respawn<R: Rng>(&mut self, occupied: &[Position], rng: &mut R) {
        if let Some(kind) = self.types.choose(rng) {
            self.current.kind = kind.clone();
        }

        let taken: HashSet<Position> = occupied.iter().copied().collect();
        let free: Vec<Position> = (0..self.grid_height)
            .flat_map(|y| (0..self.grid_width).map(move |x| Position::new(x, y)))
            .filter(|pos| !taken.contains(pos))
            .collect();

        match free.choose(rng) {
            Some(pos) => self.current.position = *pos,
            None => warn!("No free cell left for food"),
        }
    }

    pub fn item(&self) -> &FoodItem {
        &self.current
    }

    pub fn position(&self) -> Position {
        self.current.position
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, item: FoodItem) {
        self.current = item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn types() -> Vec<FoodType> {
        GameConfig::default().food_types
    }

    #[test]
    fn test_spawn_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new(types(), 10, 8, &[], &mut rng);
        for _ in 0..200 {
            food.respawn(&[], &mut rng);
            assert!(food.position().in_bounds(10, 8));
        }
    }

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        // Everything but the last column is occupied.
        let occupied: Vec<Position> = (0..4)
            .flat_map(|y| (0..3).map(move |x| Position::new(x, y)))
            .collect();
        let mut food = Food::new(types(), 4, 4, &occupied, &mut rng);
        for _ in 0..50 {
            food.respawn(&occupied, &mut rng);
            assert_eq!(food.position().x, 3);
        }
    }

    #[test]
    fn test_full_board_keeps_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::new(types(), 2, 1, &[Position::new(0, 0)], &mut rng);
        assert_eq!(food.position(), Position::new(1, 0));

        let everything = [Position::new(0, 0), Position::new(1, 0)];
        food.respawn(&everything, &mut rng);
        assert_eq!(food.position(), Position::new(1, 0));
    }

    #[test]
    fn test_both_types_are_picked() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::new(types(), 10, 10, &[], &mut rng);
        let mut seen_boosted = false;
        let mut seen_basic = false;
        for _ in 0..100 {
            food.respawn(&[], &mut rng);
            match food.item().kind.kind {
                FoodKind::Basic => seen_basic = true,
                FoodKind::Boosted { .. } => seen_boosted = true,
            }
        }
        assert!(seen_basic && seen_boosted);
    }

    #[test]
    fn test_boost_duration() {
        let types = types();
        assert_eq!(types[0].boost_duration_ms(), None);
        assert_eq!(types[1].boost_duration_ms(), Some(5000));
    }
}
