use tui_pacbomb::core::{
    BoundaryRule, Mover, Player, RandomSource, SecureRng, Step, TurnBuffer,
};
use tui_pacbomb::types::{Cell, Direction, NUM_COLS, NUM_ROWS, TILE_SIZE};

const TILE: f64 = TILE_SIZE as f64;

fn mover(cell: Cell, direction: Direction) -> Mover {
    Mover::new(cell, direction, 5.0 * TILE, (NUM_COLS, NUM_ROWS), TILE_SIZE)
}

#[test]
fn offset_stays_below_one_tile_for_any_frame_time() {
    let mut rng = SecureRng::from_seed(1);
    for rule in [BoundaryRule::Wrap, BoundaryRule::Halt] {
        for d in Direction::ALL {
            let mut m = mover(Cell::new(8, 8), d);
            m.advance(0.0, rule);
            for _ in 0..200 {
                let dt = rng.index(120) as f64 / 1000.0;
                m.advance(dt, rule);
                assert!(m.offset() >= 0.0 && m.offset() < TILE, "offset {}", m.offset());
                let c = m.cell();
                assert!(c.col >= 0 && c.col < NUM_COLS && c.row >= 0 && c.row < NUM_ROWS);
            }
        }
    }
}

#[test]
fn rect_is_cell_shifted_by_truncated_offset() {
    let mut m = mover(Cell::new(4, 4), Direction::Up);
    m.advance(0.0, BoundaryRule::Wrap);
    m.advance(0.07, BoundaryRule::Wrap);
    let shift = m.offset() as i32;
    let r = m.rect();
    assert_eq!((r.x, r.y), (4 * TILE_SIZE, 4 * TILE_SIZE - shift));
    assert_eq!((r.w, r.h), (TILE_SIZE, TILE_SIZE));
}

#[test]
fn edge_of_grid_clamps_with_zero_offset() {
    let mut m = mover(Cell::new(NUM_COLS - 2, 3), Direction::Right);
    m.advance(0.0, BoundaryRule::Wrap);
    let step = m.advance(1.0, BoundaryRule::Wrap);
    assert_eq!(step, Step::Clamped);
    assert_eq!(m.cell(), Cell::new(NUM_COLS - 1, 3));
    assert_eq!(m.offset(), 0.0);
    assert_eq!(m.next_cell(), m.cell());
}

#[test]
fn zero_or_negative_time_is_a_no_op() {
    let mut m = mover(Cell::new(4, 4), Direction::Left);
    m.advance(0.0, BoundaryRule::Wrap);
    let before = m.clone();
    assert_eq!(m.advance(0.0, BoundaryRule::Wrap), Step::Idle);
    assert_eq!(m.advance(-1.0, BoundaryRule::Wrap), Step::Idle);
    assert_eq!(m.advance(f64::NAN, BoundaryRule::Wrap), Step::Idle);
    assert_eq!(m, before);
}

#[test]
fn reversal_mid_tile_keeps_position_and_footprint() {
    let mut m = mover(Cell::new(4, 4), Direction::Right);
    m.advance(0.0, BoundaryRule::Wrap);
    m.advance(0.05, BoundaryRule::Wrap);
    let rect = m.rect();
    let mut footprint = m.footprint();
    footprint.sort_by_key(|c| (c.col, c.row));

    m.reverse();
    assert_eq!(m.direction(), Direction::Left);
    let mut after = m.footprint();
    after.sort_by_key(|c| (c.col, c.row));
    assert_eq!(after, footprint);
    assert_eq!(m.rect(), rect);
}

#[test]
fn player_turn_waits_for_the_boundary() {
    let mut p = Player::new(
        Cell::new(2, 8),
        Direction::Right,
        5.0 * TILE,
        (NUM_COLS, NUM_ROWS),
        TILE_SIZE,
    );
    p.advance(0.0);
    p.advance(0.1);
    p.key_down(Direction::Up);
    assert_eq!(p.direction(), Direction::Right);

    p.advance(0.05);
    assert_eq!(p.direction(), Direction::Right);

    p.advance(0.06);
    assert_eq!(p.cell(), Cell::new(3, 8));
    assert_eq!(p.direction(), Direction::Up);
    assert_eq!(p.offset(), 0.0);
    assert!(p.turns().queue().is_empty());
}

#[test]
fn player_reversal_is_immediate() {
    let mut p = Player::default();
    p.advance(0.0);
    p.advance(0.1);
    p.key_down(Direction::Left);
    p.advance(0.01);
    assert_eq!(p.direction(), Direction::Left);
}

#[test]
fn turn_buffer_tracks_held_keys() {
    let mut t = TurnBuffer::new();
    t.on_key_down(Direction::Up, Direction::Right);
    let q = t.on_key_down(Direction::Down, Direction::Right);
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![Direction::Up, Direction::Down]);
    // Most recent key first.
    assert_eq!(t.held(), &[Direction::Down, Direction::Up]);

    t.on_key_up(Direction::Down, Direction::Right);
    assert_eq!(t.held(), &[Direction::Up]);
    assert_eq!(t.front(), Some(Direction::Up));
    assert!(t.any_held());
}
