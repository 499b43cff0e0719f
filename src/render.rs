use macroquad::prelude::*;

use crate::assets::Assets;
use crate::run::{GameConfig, Run};
use crate::stage::GameOverSummary;
use crate::ui::{TEXT_WHITE, draw_text_centered};
use crate::worm::{Shade, Worm};

pub const MENU_BACKGROUND: Color = Color::new(0.118, 0.549, 0.196, 1.0);
pub const BOARD_BACKGROUND: Color = Color::new(0.4, 0.271, 0.192, 1.0);
const GRID_LINE: Color = Color::new(0.157, 0.157, 0.157, 1.0);
const WORM_LIGHT: Color = Color::new(0.851, 0.298, 0.529, 1.0);
const WORM_DARK: Color = Color::new(0.773, 0.22, 0.451, 1.0);

fn shade_color(shade: Shade) -> Color {
    match shade {
        Shade::Light => WORM_LIGHT,
        Shade::Dark => WORM_DARK,
    }
}

fn draw_grid_lines(config: &GameConfig) {
    let (area_w, area_h) = config.play_area;
    for i in 0..=config.num_tiles {
        let p = i as f32 * config.tile_size;
        draw_line(p, 0.0, p, area_h, 1.0, GRID_LINE);
        draw_line(0.0, p, area_w, p, 1.0, GRID_LINE);
    }
}

/// Tail first so the head ends up on top.
fn draw_worm(worm: &Worm, tile: f32, progress: f32) {
    for (i, block) in worm.blocks().iter().enumerate().rev() {
        let (x, y) = block.draw_position(progress);
        draw_rectangle(x * tile, y * tile, tile, tile, shade_color(Worm::shade(i)));
    }
}

fn draw_food(run: &Run, assets: &Assets) {
    let tile = run.config().tile_size;
    let cell = run.food().cell;
    draw_texture_ex(
        &assets.food,
        cell.col as f32 * tile,
        cell.row as f32 * tile,
        WHITE,
        DrawTextureParams { dest_size: Some(vec2(tile, tile)), ..Default::default() },
    );
}

/// Board, food and worm with blocks `progress` of the way through their
/// last move.
pub fn draw_board(run: &Run, assets: &Assets, progress: f32) {
    clear_background(BOARD_BACKGROUND);
    draw_grid_lines(run.config());
    draw_food(run, assets);
    draw_worm(run.worm(), run.config().tile_size, progress);
}

pub fn draw_press_to_start(screen_w: f32) {
    draw_text_centered("Press any key to start!", screen_w * 0.5, 100.0, 40, TEXT_WHITE);
}

pub fn draw_menu_text(screen: (f32, f32), speed: f32, grid: f32) {
    let (w, h) = screen;
    clear_background(MENU_BACKGROUND);
    draw_text_centered("Worm", w * 0.5, 70.0, 48, TEXT_WHITE);
    draw_text_centered("Arrow keys to turn", w * 0.5, 150.0, 28, TEXT_WHITE);
    draw_text(&format!("Speed (tile/s): {:.1}", speed), 100.0, h - 234.0, 18.0, TEXT_WHITE);
    draw_text(&format!("Grid Size: {}", grid as i32), 100.0, h - 174.0, 18.0, TEXT_WHITE);
}

pub fn draw_game_over(screen_w: f32, summary: &GameOverSummary) {
    clear_background(MENU_BACKGROUND);
    draw_text_centered(&summary.title, screen_w * 0.5, 100.0, 48, TEXT_WHITE);
    draw_text_centered(&summary.score_text, screen_w * 0.5, 160.0, 32, TEXT_WHITE);
    draw_text_centered(&summary.grid_text, screen_w * 0.5, 210.0, 32, TEXT_WHITE);
}
