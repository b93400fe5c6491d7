use torus_life_core::{BoardSize, Grid};
use torus_life_system_seeding::{Config, Density, DensityError, Seeding};

fn board(width: u32, height: u32) -> Grid {
    Grid::new(BoardSize::new(width, height).expect("valid board size"))
}

fn seeded(probability: f64, seed: u64) -> Seeding {
    let density = Density::new(probability).expect("valid density");
    Seeding::new(Config::new(density, Some(seed)))
}

#[test]
fn identical_seeds_fill_identical_boards() {
    let mut first = seeded(0.3, 7);
    let mut second = seeded(0.3, 7);

    for _ in 0..3 {
        let mut left = board(20, 12);
        let mut right = board(20, 12);
        let left_population = first.fill(&mut left);
        let right_population = second.fill(&mut right);

        assert_eq!(left, right, "seeded fills diverged");
        assert_eq!(left_population, right_population);
    }
}

#[test]
fn successive_fills_differ() {
    let mut seeding = seeded(0.5, 11);
    let mut first = board(16, 16);
    let mut second = board(16, 16);
    let _ = seeding.fill(&mut first);
    let _ = seeding.fill(&mut second);

    assert_ne!(first, second, "random stream should advance between fills");
}

#[test]
fn reported_population_matches_board() {
    let mut seeding = seeded(0.3, 99);
    let mut grid = board(50, 30);
    let population = seeding.fill(&mut grid);
    assert_eq!(population, grid.population());
}

#[test]
fn extreme_densities_are_exact() {
    let mut empty = board(9, 9);
    empty.fill(torus_life_core::Cell::ALIVE);
    assert_eq!(seeded(0.0, 3).fill(&mut empty), 0);
    assert_eq!(empty.population(), 0);

    let mut full = board(9, 9);
    assert_eq!(seeded(1.0, 3).fill(&mut full), 81);
}

#[test]
fn default_density_produces_roughly_thirty_percent() {
    let mut seeding = Seeding::new(Config::new(Density::default(), Some(2024)));
    let mut grid = board(200, 200);
    let ratio = seeding.fill(&mut grid) as f64 / 40_000.0;
    assert!((0.27..0.33).contains(&ratio), "unexpected live ratio {ratio}");
}

#[test]
fn densities_outside_unit_interval_are_rejected() {
    assert_eq!(Density::new(1.5), Err(DensityError::OutOfRange(1.5)));
    assert_eq!(Density::new(-0.1), Err(DensityError::OutOfRange(-0.1)));
    assert!(Density::new(f64::NAN).is_err());
}

#[test]
fn configured_seed_is_reported() {
    assert_eq!(seeded(0.3, 42).seed(), 42);
}
