use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::grid::Direction;
use crate::run::{Collision, GameConfig, Run, TickOutcome};
use crate::settings::Settings;

/// Everything the state machine reads from one frame of input.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// Seconds since startup.
    pub now: f64,
    pub any_key: bool,
    /// Held arrow keys in `Direction::ALL` order.
    pub held_directions: Vec<Direction>,
    pub start_clicked: bool,
    pub retry_clicked: bool,
    pub quit_clicked: bool,
    pub close_requested: bool,
    pub speed_value: f32,
    pub grid_value: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Collision(Collision),
    BoardFilled,
}

/// Final result, rendered to text once when the run ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub num_tiles: i32,
    pub ending: Ending,
    pub title: String,
    pub score_text: String,
    pub grid_text: String,
}

impl GameOverSummary {
    pub fn new(run: &Run, ending: Ending) -> Self {
        let score = run.score();
        let num_tiles = run.config().num_tiles;
        let title = match ending {
            Ending::BoardFilled => "You Win!",
            Ending::Collision(_) => "Game Over!",
        };
        Self {
            score,
            num_tiles,
            ending,
            title: title.to_owned(),
            score_text: format!("Score: {}", score),
            grid_text: format!("Grid Size: {}", num_tiles),
        }
    }
}

#[derive(Debug)]
pub enum Stage {
    Menu,
    Countdown(GameConfig),
    WaitForFirstInput(Run),
    Playing(Run),
    GameOverCompute { run: Run, ending: Ending },
    GameOverDisplay(GameOverSummary),
    Terminated,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Menu => "menu",
            Stage::Countdown(_) => "countdown",
            Stage::WaitForFirstInput(_) => "wait_for_first_input",
            Stage::Playing(_) => "playing",
            Stage::GameOverCompute { .. } => "game_over_compute",
            Stage::GameOverDisplay(_) => "game_over_display",
            Stage::Terminated => "terminated",
        }
    }
}

/// Owns the current stage and the RNG; advanced once per frame.
pub struct GameState {
    stage: Stage,
    screen: (f32, f32),
    initial_length: usize,
    rng: StdRng,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings.screen_size(), settings.initial_length, rng)
    }

    pub fn with_rng(screen: (f32, f32), initial_length: usize, rng: StdRng) -> Self {
        Self { stage: Stage::Menu, screen, initial_length, rng }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.stage, Stage::Terminated)
    }

    /// The run on the board, if any.
    pub fn run(&self) -> Option<&Run> {
        match &self.stage {
            Stage::WaitForFirstInput(run) | Stage::Playing(run) => Some(run),
            Stage::GameOverCompute { run, .. } => Some(run),
            _ => None,
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        let stage = std::mem::replace(&mut self.stage, Stage::Terminated);
        let from = stage.name();
        let next = if input.close_requested {
            info!("window closed");
            Stage::Terminated
        } else {
            self.step(stage, input)
        };
        if next.name() != from {
            debug!(from, to = next.name(), "stage transition");
        }
        self.stage = next;
    }

    fn step(&mut self, stage: Stage, input: &FrameInput) -> Stage {
        match stage {
            Stage::Menu => {
                if !input.start_clicked {
                    return Stage::Menu;
                }
                let config = GameConfig::new(input.grid_value as i32, input.speed_value, self.screen);
                info!(
                    num_tiles = config.num_tiles,
                    move_speed = config.move_speed,
                    tick_interval_ms = config.tick_interval_ms(),
                    tile_size = config.tile_size,
                    "starting run"
                );
                Stage::Countdown(config)
            }
            Stage::Countdown(config) => match Run::new(config, self.initial_length, &mut self.rng) {
                Some(run) => Stage::WaitForFirstInput(run),
                None => {
                    warn!(num_tiles = config.num_tiles, "no room for food on this board");
                    Stage::Menu
                }
            },
            Stage::WaitForFirstInput(mut run) => {
                if input.any_key {
                    run.start_clock(input.now);
                    Stage::Playing(run)
                } else {
                    Stage::WaitForFirstInput(run)
                }
            }
            Stage::Playing(mut run) => {
                run.steer(&input.held_directions);
                match run.advance(input.now, &mut self.rng) {
                    Some(TickOutcome::Crashed(collision)) => Stage::GameOverCompute {
                        run,
                        ending: Ending::Collision(collision),
                    },
                    Some(TickOutcome::BoardFilled) => Stage::GameOverCompute {
                        run,
                        ending: Ending::BoardFilled,
                    },
                    _ => Stage::Playing(run),
                }
            }
            Stage::GameOverCompute { run, ending } => {
                let summary = GameOverSummary::new(&run, ending);
                info!(score = summary.score, num_tiles = summary.num_tiles, ending = ?ending, "run ended");
                Stage::GameOverDisplay(summary)
            }
            Stage::GameOverDisplay(summary) => {
                if input.quit_clicked {
                    info!("quit");
                    Stage::Terminated
                } else if input.retry_clicked {
                    info!("retry");
                    Stage::Menu
                } else {
                    Stage::GameOverDisplay(summary)
                }
            }
            Stage::Terminated => Stage::Terminated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::with_rng((500.0, 500.0), 3, StdRng::seed_from_u64(9))
    }

    fn start(speed: f32, grid: f32) -> FrameInput {
        FrameInput { start_clicked: true, speed_value: speed, grid_value: grid, ..Default::default() }
    }

    #[test]
    fn menu_waits_for_start() {
        let mut gs = state();
        gs.update(&FrameInput::default());
        assert!(matches!(gs.stage(), Stage::Menu));
        assert!(gs.run().is_none());
    }

    #[test]
    fn start_commits_config_and_builds_run() {
        let mut gs = state();
        gs.update(&start(2.5, 8.9));
        match gs.stage() {
            Stage::Countdown(config) => {
                assert_eq!(config.num_tiles, 8);
                assert_eq!(config.move_speed, 2.5);
                assert_eq!(config.tile_size, 62.0);
            }
            _ => panic!("expected countdown"),
        }

        gs.update(&FrameInput::default());
        let run = gs.run().expect("run after countdown");
        assert_eq!(run.worm().len(), 3);
        assert_eq!(run.worm().head(), crate::grid::Cell::new(4, 4));
        assert!(!run.worm().contains(run.food().cell));
        assert!(matches!(gs.stage(), Stage::WaitForFirstInput(_)));
    }

    #[test]
    fn no_movement_until_first_key() {
        let mut gs = state();
        gs.update(&start(2.0, 8.0));
        gs.update(&FrameInput::default());
        for t in 0..10 {
            gs.update(&FrameInput { now: t as f64, ..Default::default() });
        }
        assert!(matches!(gs.stage(), Stage::WaitForFirstInput(_)));
        assert_eq!(gs.run().unwrap().worm().head(), crate::grid::Cell::new(4, 4));

        gs.update(&FrameInput { now: 10.0, any_key: true, ..Default::default() });
        assert!(matches!(gs.stage(), Stage::Playing(_)));
    }

    #[test]
    fn game_over_summary_then_retry_returns_to_menu() {
        let mut gs = state();
        gs.update(&start(1.0, 4.0));
        gs.update(&FrameInput::default());
        gs.update(&FrameInput { any_key: true, ..Default::default() });

        // Heading right from (2,2) on a 4-board: out of bounds on the second tick.
        let mut now = 0.0;
        while matches!(gs.stage(), Stage::Playing(_)) {
            now += 1.0;
            gs.update(&FrameInput { now, ..Default::default() });
            assert!(now < 10.0);
        }
        assert!(matches!(gs.stage(), Stage::GameOverCompute { .. }));

        gs.update(&FrameInput::default());
        match gs.stage() {
            Stage::GameOverDisplay(summary) => {
                assert_eq!(summary.num_tiles, 4);
                assert_eq!(summary.grid_text, "Grid Size: 4");
                assert!(summary.score >= 3);
                assert!(matches!(summary.ending, Ending::Collision(Collision::Boundary)));
            }
            _ => panic!("expected game over display"),
        }

        gs.update(&FrameInput { retry_clicked: true, ..Default::default() });
        assert!(matches!(gs.stage(), Stage::Menu));
        assert!(gs.run().is_none());
    }

    #[test]
    fn quit_wins_over_retry_and_close_ends_anywhere() {
        let mut gs = state();
        gs.update(&FrameInput { close_requested: true, ..Default::default() });
        assert!(gs.is_terminated());

        let mut gs = state();
        gs.update(&start(1.0, 4.0));
        gs.update(&FrameInput::default());
        gs.update(&FrameInput { any_key: true, ..Default::default() });
        let mut now = 0.0;
        while !matches!(gs.stage(), Stage::GameOverDisplay(_)) {
            now += 1.0;
            gs.update(&FrameInput { now, ..Default::default() });
            assert!(now < 10.0);
        }
        gs.update(&FrameInput { retry_clicked: true, quit_clicked: true, ..Default::default() });
        assert!(gs.is_terminated());
    }
}
