use torus_life_core::{BoardSize, CellCoord, Grid};
use torus_life_system_generation::{advance_into, Generation};

fn size(width: u32, height: u32) -> BoardSize {
    BoardSize::new(width, height).expect("valid board size")
}

fn grid_with(width: u32, height: u32, live: &[(u32, u32)]) -> Grid {
    Grid::from_live_cells(
        size(width, height),
        live.iter().map(|&(column, row)| CellCoord::new(column, row)),
    )
}

fn live_cells(grid: &Grid) -> Vec<(u32, u32)> {
    grid.iter()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(coord, _)| (coord.column(), coord.row()))
        .collect()
}

#[test]
fn dead_board_stays_dead() {
    let mut generation = Generation::new(size(8, 6));
    for _ in 0..4 {
        assert_eq!(generation.advance().population(), 0);
    }
}

#[test]
fn block_is_a_still_life() {
    let block = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
    let mut generation = Generation::from_grid(block.clone());

    let _ = generation.advance();
    assert_eq!(generation.current(), &block, "block changed:\n{}", generation.current());
    assert_eq!(generation.advance(), &block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    let mut generation = Generation::from_grid(vertical.clone());

    assert_eq!(live_cells(generation.advance()), vec![(1, 2), (2, 2), (3, 2)]);
    assert_eq!(generation.advance(), &vertical);
}

#[test]
fn blinker_on_three_by_three_torus_fills_the_board() {
    // Every cell of a 3x3 torus neighbours all eight others, so each dead
    // cell sees the three live ones and is born.
    let vertical = grid_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
    let mut generation = Generation::from_grid(vertical);

    assert_eq!(generation.advance().population(), 9);
    assert_eq!(generation.advance().population(), 0);
}

#[test]
fn glider_wraps_back_to_its_start() {
    let glider = grid_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    let mut generation = Generation::from_grid(glider.clone());

    // A glider moves one cell diagonally every four generations.
    for _ in 0..32 {
        let _ = generation.advance();
    }

    assert_eq!(generation.current(), &glider, "glider lost on the torus:\n{}", generation.current());
}

#[test]
fn advance_is_deterministic() {
    let seed = grid_with(
        10,
        7,
        &[(0, 0), (1, 0), (9, 6), (4, 3), (5, 3), (6, 3), (5, 4), (2, 6), (9, 0)],
    );
    let first_input = seed.clone();
    let second_input = seed.clone();
    let mut first = Grid::new(seed.size());
    let mut second = Grid::new(seed.size());

    advance_into(&first_input, &mut first);
    advance_into(&second_input, &mut second);

    assert_eq!(first, second);
    assert_eq!(first_input, seed, "source grid must not be modified");
}

#[test]
fn advance_reads_only_the_previous_generation() {
    // An in-place row-major pass would kill (1, 0) before visiting (0, 1),
    // so (0, 1) would never be born.
    let source = grid_with(5, 5, &[(1, 0), (1, 1), (1, 2)]);
    let mut target = Grid::new(source.size());
    advance_into(&source, &mut target);
    assert_eq!(live_cells(&target), vec![(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn buffers_are_reused_between_generations() {
    let mut generation = Generation::from_grid(grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]));
    let original = generation.current().cells().as_ptr();

    let after_one = generation.advance().cells().as_ptr();
    let after_two = generation.advance().cells().as_ptr();

    assert_ne!(original, after_one, "advance should swap to the scratch buffer");
    assert_eq!(original, after_two, "two advances should return to the first buffer");
}

#[test]
fn single_cell_board_sees_itself_eight_times() {
    let mut generation = Generation::from_grid(grid_with(1, 1, &[(0, 0)]));
    assert_eq!(generation.current().live_neighbors(CellCoord::new(0, 0)), 8);
    assert_eq!(generation.advance().population(), 0);
}
