use tui_pacbomb::core::{CoreError, Grid, RandomSource, Resolution, ScriptedRng, SecureRng};
use tui_pacbomb::types::{Cell, Tile, NUM_COLS, NUM_ROWS, PLAYER_SPAWN};

#[test]
fn standard_maze_is_walled_in() {
    let grid = Grid::standard().unwrap();
    for col in 0..NUM_COLS {
        assert!(grid.is_wall(Cell::new(col, 0)));
        assert!(grid.is_wall(Cell::new(col, NUM_ROWS - 1)));
    }
    for row in 0..NUM_ROWS {
        assert!(grid.is_wall(Cell::new(0, row)));
        assert!(grid.is_wall(Cell::new(NUM_COLS - 1, row)));
    }
    assert_eq!(grid.tile(PLAYER_SPAWN), Some(Tile::Player));
}

#[test]
fn off_grid_cells_read_as_walls() {
    let grid = Grid::standard().unwrap();
    assert!(grid.is_wall(Cell::new(-1, 3)));
    assert!(grid.is_wall(Cell::new(3, NUM_ROWS)));
    assert_eq!(grid.tile(Cell::new(NUM_COLS, 0)), None);
}

#[test]
fn layout_errors_name_the_offending_cell() {
    let err = Grid::from_layout(&["#.", "#x"]).unwrap_err();
    match err {
        CoreError::Layout { row, col, .. } => assert_eq!((row, col), (1, 1)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(Grid::from_layout(&["##", "#"]).is_err());
    assert!(Grid::from_layout::<&str>(&[]).is_err());
    assert!(Grid::from_layout(&["P.P"]).is_err());
}

#[test]
fn fruit_lands_only_on_empty_cells() {
    let mut rng = SecureRng::from_seed(7);
    for _ in 0..50 {
        let mut grid = Grid::standard().unwrap();
        let cell = grid.seed_fruit(&mut rng).unwrap();
        assert_eq!(grid.tile(cell), Some(Tile::Fruit));
        assert_ne!(cell, PLAYER_SPAWN);
    }
}

#[test]
fn fruit_placement_reaches_every_empty_cell() {
    let grid = Grid::standard().unwrap();
    let empty: Vec<Cell> = grid.empty_cells().collect();
    let mut seen = vec![false; empty.len()];
    let mut rng = SecureRng::from_seed(42);
    for _ in 0..20_000 {
        seen[rng.index(empty.len())] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn walking_into_fruit_on_a_full_board_is_exhausted() {
    // Nowhere left to put the next fruit once the player takes this one.
    let mut grid = Grid::from_layout(&["#*E"]).unwrap();
    let mut rng = ScriptedRng::new([]);
    assert_eq!(
        grid.resolve(Cell::new(0, 0), Cell::new(1, 0), &mut rng),
        Resolution::Exhausted
    );
    assert!(Resolution::Exhausted.is_fatal());
}

#[test]
fn reset_restores_the_pristine_board() {
    let mut grid = Grid::standard().unwrap();
    let mut rng = ScriptedRng::new([]);
    grid.seed_fruit(&mut rng);
    assert_eq!(
        grid.resolve(Cell::new(3, 8), Cell::new(4, 8), &mut rng),
        Resolution::Advanced
    );
    assert_eq!(grid.tile(Cell::new(4, 8)), Some(Tile::Player));

    grid.reset(&mut rng);
    assert_eq!(grid.tile(Cell::new(4, 8)), Some(Tile::Empty));
    assert_eq!(grid.player_mark(), Some(PLAYER_SPAWN));
    assert!(grid.fruit().is_some());
}
