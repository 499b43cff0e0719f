use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use worm::food::Food;
use worm::stage::Ending;
use worm::{Cell, Collision, Direction, FrameInput, GameConfig, GameState, Run, Stage, TickOutcome, Worm};

fn config(num_tiles: i32) -> GameConfig {
    GameConfig::new(num_tiles, 4.0, (500.0, 500.0))
}

#[test]
fn first_tick_moves_head_right_without_collision() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut run = Run::new(config(8), 3, &mut rng).unwrap();
    assert_eq!(run.worm().head(), Cell::new(4, 4));
    assert_eq!(run.direction(), Direction::Right);

    let outcome = run.tick(&mut rng);
    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(run.worm().head(), Cell::new(5, 4));
    assert_eq!(run.worm().len(), 3);
}

#[test]
fn heading_into_own_body_is_caught_within_five_ticks() {
    let mut rng = StdRng::seed_from_u64(1);
    // Hooked worm on a 5-board whose tail lies straight ahead of the head.
    let worm = Worm::from_cells([
        Cell::new(1, 1),
        Cell::new(1, 2),
        Cell::new(2, 2),
        Cell::new(2, 1),
        Cell::new(3, 1),
    ])
    .unwrap();
    let mut run = Run::with_parts(config(5), worm, Food::new(Cell::new(4, 4)), Direction::Right);

    let mut crashed = None;
    for n in 1..=5 {
        let outcome = run.tick(&mut rng);
        if outcome.is_terminal() {
            crashed = Some((n, outcome));
            break;
        }
    }
    assert_eq!(crashed.map(|(_, o)| o), Some(TickOutcome::Crashed(Collision::SelfHit)));
}

#[test]
fn eating_at_head_cell_grows_scores_and_moves_food() {
    let mut rng = StdRng::seed_from_u64(8);
    let worm = Worm::spawn(Cell::new(4, 4), 3, Direction::Right);
    let mut run = Run::with_parts(config(8), worm, Food::new(Cell::new(4, 4)), Direction::Right);
    let (len, score) = (run.worm().len(), run.score());

    assert_eq!(run.tick(&mut rng), TickOutcome::Grew);
    assert_eq!(run.worm().len(), len + 1);
    assert_eq!(run.score(), score + 1);
    assert_ne!(run.food().cell, Cell::new(4, 4));
    assert!(!run.worm().contains(run.food().cell));
}

#[test]
fn random_play_keeps_tick_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    for game in 0..50 {
        let mut run = Run::new(config(6 + game % 5), 3, &mut rng).unwrap();
        let num_tiles = run.config().num_tiles;
        for _ in 0..400 {
            let before_dir = run.direction();
            let before_len = run.worm().len();
            let before_head = run.worm().head();
            let ate = run.food().cell == before_head;

            let turn = Direction::ALL[rng.gen_range(0..4)];
            run.steer(&[turn]);
            let outcome = run.tick(&mut rng);

            assert!(!run.direction().is_reverse_of(before_dir));
            assert_eq!(run.worm().len(), before_len + usize::from(ate));
            assert_eq!(run.score() as usize, run.worm().len());

            let head = run.worm().head();
            let left_board = head.on_boundary_ring(num_tiles);
            assert_eq!(left_board, outcome == TickOutcome::Crashed(Collision::Boundary));

            if outcome.is_terminal() {
                break;
            }
            assert!(!run.worm().overlaps_itself());
            if outcome == TickOutcome::Grew {
                assert!(!run.worm().contains(run.food().cell));
            }
        }
    }
}

#[test]
fn full_stage_walkthrough() {
    let mut gs = GameState::with_rng((500.0, 500.0), 3, StdRng::seed_from_u64(77));
    assert!(matches!(gs.stage(), Stage::Menu));

    gs.update(&FrameInput { start_clicked: true, speed_value: 4.0, grid_value: 4.0, ..Default::default() });
    assert!(matches!(gs.stage(), Stage::Countdown(_)));
    gs.update(&FrameInput::default());
    assert!(matches!(gs.stage(), Stage::WaitForFirstInput(_)));
    gs.update(&FrameInput { now: 1.0, any_key: true, ..Default::default() });
    assert!(matches!(gs.stage(), Stage::Playing(_)));

    // Half an interval in: no tick yet, halfway through the move.
    gs.update(&FrameInput { now: 1.125, ..Default::default() });
    let run = gs.run().unwrap();
    assert_eq!(run.worm().head(), Cell::new(2, 2));
    assert!((run.progress(1.125) - 0.5).abs() < 1e-6);

    // Steer up each frame until the head leaves through the top edge.
    let mut now = 1.0;
    while matches!(gs.stage(), Stage::Playing(_)) {
        now += 0.25;
        gs.update(&FrameInput { now, held_directions: vec![Direction::Up], ..Default::default() });
        assert!(now < 5.0);
    }
    gs.update(&FrameInput::default());
    match gs.stage() {
        Stage::GameOverDisplay(summary) => {
            assert_eq!(summary.ending, Ending::Collision(Collision::Boundary));
            assert_eq!(summary.title, "Game Over!");
            assert_eq!(summary.score_text, format!("Score: {}", summary.score));
        }
        _ => panic!("expected game over display"),
    }

    gs.update(&FrameInput { quit_clicked: true, ..Default::default() });
    assert!(gs.is_terminated());
}
