use macroquad::prelude::*;
use tracing::info;

use crate::assets::Assets;
use crate::grid::Direction;
use crate::render;
use crate::settings::Settings;
use crate::stage::{FrameInput, GameState, Stage};
use crate::ui::{Button, Slider};

const BUTTON_GREEN: [u8; 3] = [50, 160, 70];
const BUTTON_LIGHT_UP: u32 = 350;
const SLIDER_LINE: Color = Color::new(0.471, 0.863, 0.471, 1.0);
const SLIDER_HANDLE: Color = Color::new(0.157, 0.471, 0.157, 1.0);

fn key_for(direction: Direction) -> KeyCode {
    match direction {
        Direction::Up => KeyCode::Up,
        Direction::Down => KeyCode::Down,
        Direction::Left => KeyCode::Left,
        Direction::Right => KeyCode::Right,
    }
}

struct MenuWidgets {
    speed: Slider,
    grid: Slider,
    start: Button,
}

impl MenuWidgets {
    fn new(settings: &Settings) -> Self {
        let (w, h) = settings.screen_size();
        let speed = settings.speed;
        let grid = settings.grid;
        Self {
            speed: Slider::new(
                Rect::new(100.0, h - 220.0, 300.0, 15.0),
                SLIDER_LINE,
                SLIDER_HANDLE,
                speed.min,
                speed.max,
                speed.initial,
            ),
            grid: Slider::new(
                Rect::new(100.0, h - 160.0, 300.0, 15.0),
                SLIDER_LINE,
                SLIDER_HANDLE,
                grid.min,
                grid.max,
                grid.initial,
            ),
            start: Button::new(Rect::new(w * 0.5 - 57.0, h - 100.0, 115.0, 70.0), "Start", 45, BUTTON_GREEN, BUTTON_LIGHT_UP),
        }
    }
}

struct GameOverWidgets {
    retry: Button,
    quit: Button,
}

impl GameOverWidgets {
    fn new(settings: &Settings) -> Self {
        let (w, h) = settings.screen_size();
        Self {
            retry: Button::new(Rect::new(w * 0.5 - 57.0, h - 200.0, 115.0, 70.0), "Retry", 45, BUTTON_GREEN, BUTTON_LIGHT_UP),
            quit: Button::new(Rect::new(w * 0.5 - 57.0, h - 100.0, 115.0, 70.0), "Quit", 45, BUTTON_GREEN, BUTTON_LIGHT_UP),
        }
    }
}

fn poll_input(state: &GameState, menu: &mut MenuWidgets, game_over: &mut GameOverWidgets) -> FrameInput {
    let (mx, my) = mouse_position();
    let mouse = vec2(mx, my);
    let pressed = is_mouse_button_pressed(MouseButton::Left);
    let held = is_mouse_button_down(MouseButton::Left);

    let mut input = FrameInput {
        now: get_time(),
        any_key: !get_keys_down().is_empty(),
        held_directions: Direction::ALL.into_iter().filter(|d| is_key_down(key_for(*d))).collect(),
        close_requested: is_quit_requested(),
        speed_value: menu.speed.value(),
        grid_value: menu.grid.value(),
        ..Default::default()
    };

    match state.stage() {
        Stage::Menu => {
            menu.speed.update(held, mouse);
            menu.grid.update(held, mouse);
            menu.start.update(mouse);
            input.speed_value = menu.speed.value();
            input.grid_value = menu.grid.value();
            input.start_clicked = menu.start.check_click(pressed);
        }
        Stage::GameOverDisplay(_) => {
            game_over.retry.update(mouse);
            game_over.quit.update(mouse);
            input.retry_clicked = game_over.retry.check_click(pressed);
            input.quit_clicked = game_over.quit.check_click(pressed);
        }
        _ => {}
    }
    input
}

fn draw_stage(state: &GameState, assets: &Assets, menu: &MenuWidgets, game_over: &GameOverWidgets, settings: &Settings, now: f64) {
    let screen = settings.screen_size();
    match state.stage() {
        Stage::Menu | Stage::Countdown(_) => {
            render::draw_menu_text(screen, menu.speed.value(), menu.grid.value());
            menu.speed.draw();
            menu.grid.draw();
            menu.start.draw();
        }
        Stage::WaitForFirstInput(run) => {
            render::draw_board(run, assets, 1.0);
            render::draw_press_to_start(screen.0);
        }
        Stage::Playing(run) => render::draw_board(run, assets, run.progress(now)),
        Stage::GameOverCompute { run, .. } => render::draw_board(run, assets, 1.0),
        Stage::GameOverDisplay(summary) => {
            render::draw_game_over(screen.0, summary);
            game_over.retry.draw();
            game_over.quit.draw();
        }
        Stage::Terminated => {}
    }
}

fn in_run(stage: &Stage) -> bool {
    matches!(stage, Stage::Countdown(_) | Stage::WaitForFirstInput(_) | Stage::Playing(_) | Stage::GameOverCompute { .. })
}

/// The frame loop. Returns once the player quits or closes the window.
pub async fn run(settings: Settings, food: Image) {
    let assets = Assets::new(&food);

    prevent_quit();
    let mut state = GameState::new(&settings);
    let mut menu = MenuWidgets::new(&settings);
    let mut game_over = GameOverWidgets::new(&settings);
    let mut cursor_hidden = false;
    info!(fps = settings.fps, "entering frame loop");

    loop {
        let frame_start = get_time();
        let input = poll_input(&state, &mut menu, &mut game_over);
        state.update(&input);
        if state.is_terminated() {
            break;
        }

        let hide = in_run(state.stage());
        if hide != cursor_hidden {
            show_mouse(!hide);
            cursor_hidden = hide;
        }

        draw_stage(&state, &assets, &menu, &game_over, &settings, input.now);

        #[cfg(not(target_arch = "wasm32"))]
        {
            let spent = get_time() - frame_start;
            let budget = settings.frame_budget();
            if spent < budget {
                std::thread::sleep(std::time::Duration::from_secs_f64(budget - spent));
            }
        }

        next_frame().await;
    }
    info!("frame loop finished");
}
