#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seedable random fill used when the board is randomized.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use torus_life_core::{Cell, Grid};
use tracing::info;

/// Probability of a cell being alive after a randomize when none is configured.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Probability in `0.0..=1.0` that a randomized cell starts alive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(f64);

impl Density {
    /// Validates and wraps a probability.
    pub fn new(probability: f64) -> Result<Self, DensityError> {
        if (0.0..=1.0).contains(&probability) {
            Ok(Self(probability))
        } else {
            Err(DensityError::OutOfRange(probability))
        }
    }

    /// Underlying probability.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(DEFAULT_DENSITY)
    }
}

/// Reasons a density may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DensityError {
    /// The value is not a probability.
    #[error("density {0} is not a probability between 0 and 1")]
    OutOfRange(f64),
}

/// Configuration parameters required to construct the seeding system.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    density: Density,
    seed: Option<u64>,
}

impl Config {
    /// Creates a configuration with the provided density and optional fixed seed.
    #[must_use]
    pub const fn new(density: Density, seed: Option<u64>) -> Self {
        Self { density, seed }
    }

    /// Probability that a seeded cell starts alive.
    #[must_use]
    pub const fn density(&self) -> Density {
        self.density
    }

    /// Fixed seed, if one was requested.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Random number source that refills boards with independently drawn cells.
#[derive(Clone, Debug)]
pub struct Seeding {
    density: Density,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Seeding {
    /// Creates the seeding system, drawing a seed when the configuration has none.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let seed = match config.seed() {
            Some(seed) => seed,
            None => {
                let seed: u64 = rand::random();
                info!(seed, "drew seed for board randomization");
                seed
            }
        };

        Self {
            density: config.density(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed the random stream started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Overwrites every cell of `grid` and returns the resulting population.
    pub fn fill(&mut self, grid: &mut Grid) -> usize {
        let probability = self.density.get();
        let mut population = 0;
        for cell in grid.cells_mut() {
            let alive = self.rng.gen_bool(probability);
            *cell = Cell::new(alive);
            if alive {
                population += 1;
            }
        }
        population
    }
}
