use super::food::FoodItem;
use super::grid::Position;
use super::session::SessionState;

/// One drawn body segment. `fade` runs from near 0 at the tail to 1 at the head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyCell {
    pub position: Position,
    pub fade: f32,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub cells: Vec<BodyCell>,
    pub food: FoodItem,
    pub hud: Vec<String>,
    /// Fraction of the boost left, while one is active
    pub boost_progress: Option<f32>,
    pub state: SessionState,
}

impl RenderModel {
    pub fn head(&self) -> Option<Position> {
        self.cells.last().map(|cell| cell.position)
    }
}

pub(crate) fn fade_cells<'a>(positions: impl ExactSizeIterator<Item = &'a Position>) -> Vec<BodyCell> {
    let len = positions.len() as f32;
    positions
        .enumerate()
        .map(|(i, position)| BodyCell {
            position: *position,
            fade: (i + 1) as f32 / len,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_runs_tail_to_head() {
        let body = [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)];
        let cells = fade_cells(body.iter());
        let fades: Vec<f32> = cells.iter().map(|c| c.fade).collect();
        assert_eq!(fades, vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(cells[3].position, Position::new(3, 0));
    }
}
