use rand::Rng;
use tracing::{debug, trace};

use crate::food::{Food, place_food};
use crate::grid::{Cell, Direction};
use crate::worm::Worm;

/// Floor applied to the configured speed so the tick interval stays finite.
pub const MIN_MOVE_SPEED: f32 = 0.1;
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Board geometry and pace for one run. Fixed once the run starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub num_tiles: i32,
    /// Whole pixels per tile.
    pub tile_size: f32,
    /// Drawable board extent, truncated to a multiple of `tile_size`.
    pub play_area: (f32, f32),
    /// Tiles per second.
    pub move_speed: f32,
}

impl GameConfig {
    pub fn new(num_tiles: i32, move_speed: f32, screen: (f32, f32)) -> Self {
        let (w, h) = screen;
        // At least one pixel per tile, so the board never outgrows the window.
        let num_tiles = num_tiles.min(w.min(h).max(1.0) as i32).max(1);
        let move_speed = if move_speed.is_finite() { move_speed.max(MIN_MOVE_SPEED) } else { MIN_MOVE_SPEED };
        let tile_size = (w.min(h) / num_tiles as f32).floor().max(1.0);
        let play_area = (w - w % tile_size, h - h % tile_size);
        Self { num_tiles, tile_size, play_area, move_speed }
    }

    /// Seconds between ticks.
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.move_speed as f64
    }

    /// Milliseconds between ticks.
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.move_speed as f64
    }

    pub fn center(&self) -> Cell {
        let c = self.num_tiles / 2;
        Cell::new(c, c)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    SelfHit,
    Boundary,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Grew,
    Crashed(Collision),
    /// The worm ate and no free cell remains for new food.
    BoardFilled,
}

impl TickOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, TickOutcome::Crashed(_) | TickOutcome::BoardFilled)
    }
}

/// Worm, food and pacing for a single attempt, from countdown to game over.
#[derive(Clone, Debug)]
pub struct Run {
    config: GameConfig,
    worm: Worm,
    food: Food,
    direction: Direction,
    next_direction: Direction,
    score: u32,
    last_tick_at: f64,
}

impl Run {
    /// Places a straight worm of `initial_length` at the board centre and
    /// food on a free cell. `None` if the board has no room for food.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, initial_length: usize, rng: &mut R) -> Option<Self> {
        let worm = Worm::spawn(config.center(), initial_length, INITIAL_DIRECTION);
        let food = Food::new(place_food(rng, config.num_tiles, &worm)?);
        Some(Self::with_parts(config, worm, food, INITIAL_DIRECTION))
    }

    /// Assembles a run from explicit pieces.
    pub fn with_parts(config: GameConfig, worm: Worm, food: Food, direction: Direction) -> Self {
        let score = worm.len() as u32;
        Self {
            config,
            worm,
            food,
            direction,
            next_direction: direction,
            score,
            last_tick_at: 0.0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn worm(&self) -> &Worm {
        &self.worm
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Stages the first held direction that does not reverse the committed
    /// one. Keys are expected in `Direction::ALL` order.
    pub fn steer(&mut self, held: &[Direction]) {
        if let Some(&dir) = held.iter().find(|d| !d.is_reverse_of(self.direction)) {
            self.next_direction = dir;
        }
    }

    pub fn start_clock(&mut self, now: f64) {
        self.last_tick_at = now;
    }

    /// Fraction of the current tick interval elapsed at `now`.
    pub fn progress(&self, now: f64) -> f32 {
        ((now - self.last_tick_at) / self.config.tick_interval()).clamp(0.0, 1.0) as f32
    }

    /// Ticks once if a full interval has elapsed since the last tick.
    pub fn advance<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> Option<TickOutcome> {
        if now - self.last_tick_at < self.config.tick_interval() {
            return None;
        }
        self.last_tick_at = now;
        Some(self.tick(rng))
    }

    /// One simulation step: commit direction, shift the body, eat, move the
    /// head, then check the boundary.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        self.direction = self.next_direction;
        let head = self.worm.head();
        let target = head.step(self.direction);

        let shift = self.worm.shift_body(target);
        let mut self_hit = shift.self_collision;

        let ate = self.food.cell == head;
        if ate {
            self.worm.grow(shift.old_tail);
            self.score += 1;
            if shift.old_tail == target {
                self_hit = true;
            }
        }

        self.worm.move_head(target);
        let boundary_hit = target.on_boundary_ring(self.config.num_tiles);
        trace!(col = target.col, row = target.row, direction = ?self.direction, "tick");

        if boundary_hit {
            return TickOutcome::Crashed(Collision::Boundary);
        }
        if self_hit {
            return TickOutcome::Crashed(Collision::SelfHit);
        }
        debug_assert!(
            self.worm.cells().all(|c| c.in_bounds(self.config.num_tiles)) && !self.worm.overlaps_itself(),
            "worm left the board or overlapped without a collision"
        );
        if !ate {
            return TickOutcome::Moved;
        }

        match place_food(rng, self.config.num_tiles, &self.worm) {
            Some(cell) => {
                self.food.set_location(cell);
                debug!(col = cell.col, row = cell.row, score = self.score, "food respawned");
                TickOutcome::Grew
            }
            None => TickOutcome::BoardFilled,
        }
    }
}
