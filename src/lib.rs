//! Worm: a single-screen grid snake game.
//!
//! The simulation (`grid`, `worm`, `food`, `run`, `stage`) is plain data and
//! runs headless; `ui`, `render`, `assets` and `app` put it on screen with
//! macroquad.

pub mod app;
pub mod assets;
pub mod food;
pub mod grid;
pub mod render;
pub mod run;
pub mod settings;
pub mod stage;
pub mod ui;
pub mod worm;

pub use grid::{Cell, Direction};
pub use run::{Collision, GameConfig, Run, TickOutcome};
pub use settings::Settings;
pub use stage::{FrameInput, GameState, Stage};
pub use worm::{GridBlock, Worm};
