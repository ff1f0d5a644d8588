use macroquad::prelude::*;

use crate::config::GameConfig;
use crate::game::{RenderModel, Rgb, SessionState, SessionSummary};
use crate::menu::MenuController;

const BACKGROUND: Color = Color::new(0.2, 0.6, 0.84, 1.0);
const SNAKE: Color = Color::new(0.0, 0.78, 0.0, 1.0);
const HUD_TEXT: Color = Color::new(1.0, 1.0, 0.4, 1.0);
const BOOST_BAR: Color = Color::new(0.5, 0.0, 0.5, 1.0);
const BUTTON: Color = Color::new(1.0, 1.0, 0.4, 1.0);
const BUTTON_SELECTED: Color = Color::new(0.84, 0.2, 0.31, 1.0);

/// Placement of the grid inside the window, keeping cells square.
#[derive(Debug, PartialEq)]
struct Layout {
    tile: f32,
    off_x: f32,
    off_y: f32,
}

impl Layout {
    /// Tiles are `cell_size` pixels unless the screen is too small for that.
    fn fit(grid_width: i32, grid_height: i32, cell_size: u32, sw: f32, sh: f32) -> Self {
        let tile = (cell_size as f32)
            .min(sw / grid_width as f32)
            .min(sh / grid_height as f32);
        Self {
            tile,
            off_x: (sw - tile * grid_width as f32) * 0.5,
            off_y: (sh - tile * grid_height as f32) * 0.5,
        }
    }

    fn cell_origin(&self, x: i32, y: i32) -> (f32, f32) {
        (self.off_x + x as f32 * self.tile, self.off_y + y as f32 * self.tile)
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

pub fn draw_session(model: &RenderModel, config: &GameConfig) {
    let (grid_width, grid_height) = (config.grid_width, config.grid_height);
    clear_background(BLACK);
    let layout = Layout::fit(
        grid_width,
        grid_height,
        config.cell_size,
        screen_width(),
        screen_height(),
    );
    draw_rectangle(
        layout.off_x,
        layout.off_y,
        layout.tile * grid_width as f32,
        layout.tile * grid_height as f32,
        BACKGROUND,
    );

    // Body fades in towards the head
    for cell in &model.cells {
        let (x, y) = layout.cell_origin(cell.position.x, cell.position.y);
        let color = Color::new(SNAKE.r, SNAKE.g, SNAKE.b, cell.fade);
        draw_rectangle(x, y, layout.tile, layout.tile, color);
    }

    let (fx, fy) = layout.cell_origin(model.food.position.x, model.food.position.y);
    let half = layout.tile * 0.5;
    draw_circle(fx + half, fy + half, half, to_color(model.food.kind.color));

    let mut y = layout.off_y + 24.0;
    for line in &model.hud {
        draw_text(line, layout.off_x + 10.0, y, 22.0, HUD_TEXT);
        y += 25.0;
    }

    if let Some(progress) = model.boost_progress {
        let bottom = layout.off_y + layout.tile * grid_height as f32;
        draw_rectangle(layout.off_x + 10.0, bottom - 30.0, 100.0 * progress, 20.0, BOOST_BAR);
    }

    if model.state == SessionState::Paused {
        draw_centered("PAUSED", screen_height() * 0.45, 40.0, WHITE);
        draw_centered("Space: resume  Esc: menu", screen_height() * 0.45 + 36.0, 20.0, WHITE);
    }
}

pub fn draw_game_over(model: &RenderModel, summary: &SessionSummary, config: &GameConfig) {
    draw_session(model, config);
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.4));

    let sh = screen_height();
    draw_centered("GAME OVER", sh * 0.4, 40.0, WHITE);
    draw_centered(&format!("Score: {}", summary.final_score), sh * 0.4 + 40.0, 26.0, HUD_TEXT);
    if summary.new_high_score {
        draw_centered("New high score!", sh * 0.4 + 70.0, 24.0, HUD_TEXT);
    }
    draw_centered("R: Restart  Enter: Menu  Q: Quit", sh * 0.4 + 104.0, 20.0, WHITE);
}

pub fn draw_menu(menu: &MenuController, high_score: u32) {
    clear_background(BACKGROUND);
    let sw = screen_width();
    let sh = screen_height();

    draw_centered("SNAKE", sh * 0.2, 48.0, WHITE);

    let (bw, bh) = (240.0, 50.0);
    for (i, (label, selected)) in menu.entries().iter().enumerate() {
        let x = (sw - bw) * 0.5;
        let y = sh * 0.33 + i as f32 * 60.0;
        let color = if *selected { BUTTON_SELECTED } else { BUTTON };
        draw_rectangle(x, y, bw, bh, color);
        let m = measure_text(label, None, 26, 1.0);
        draw_text(label, x + (bw - m.width) * 0.5, y + bh * 0.5 + m.height * 0.5, 26.0, BLACK);
    }

    draw_centered(&format!("Best: {}", high_score), sh - 64.0, 22.0, WHITE);
    draw_centered("Up/Down: select  Enter: confirm  Q: quit", sh - 36.0, 18.0, LIGHTGRAY);
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let m = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, size, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_uses_cell_size_when_it_fits() {
        let layout = Layout::fit(53, 40, 15, 795.0, 600.0);
        assert_eq!(layout, Layout { tile: 15.0, off_x: 0.0, off_y: 0.0 });

        // A bigger window centres the grid without stretching it.
        let layout = Layout::fit(10, 10, 20, 400.0, 300.0);
        assert_eq!(layout, Layout { tile: 20.0, off_x: 100.0, off_y: 50.0 });
        assert_eq!(layout.cell_origin(2, 3), (140.0, 110.0));
    }

    #[test]
    fn test_layout_shrinks_on_small_screen() {
        let layout = Layout::fit(20, 10, 30, 300.0, 300.0);
        assert_eq!(layout.tile, 15.0);
        assert_eq!(layout.off_x, 0.0);
        assert_eq!(layout.off_y, 75.0);
    }
}
