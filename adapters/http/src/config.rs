//! Command-line and environment configuration for the server binary.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;
use thiserror::Error;
use torus_life_core::{BoardSize, BoardSizeError, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use torus_life_system_seeding::{self as seeding, Density, DensityError, DEFAULT_DENSITY};
use torus_life_world::Config;

/// Serve an interactive Game of Life board on a torus.
#[derive(Clone, Debug, Parser)]
#[command(name = "torus-life", version, about)]
pub struct Args {
    /// Address the server binds to.
    #[arg(long, env = "LIFE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port the server listens on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Number of board columns.
    #[arg(long, env = "LIFE_WIDTH", default_value_t = DEFAULT_BOARD_WIDTH)]
    pub width: u32,

    /// Number of board rows.
    #[arg(long, env = "LIFE_HEIGHT", default_value_t = DEFAULT_BOARD_HEIGHT)]
    pub height: u32,

    /// Probability that a cell starts alive when the board is randomized.
    #[arg(long, env = "LIFE_DENSITY", default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed for the randomize generator. Drawn at startup when omitted.
    #[arg(long, env = "LIFE_SEED")]
    pub seed: Option<u64>,

    /// Page template rendered for the home page.
    #[arg(long, env = "LIFE_TEMPLATE", default_value = "templates/index.html")]
    pub template: PathBuf,

    /// Directory served under `/static/`.
    #[arg(long, env = "LIFE_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

/// Errors raised while validating board parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested board dimensions are unusable.
    #[error(transparent)]
    BoardSize(#[from] BoardSizeError),
    /// The randomize density lies outside `[0, 1]`.
    #[error(transparent)]
    Density(#[from] DensityError),
}

impl Args {
    /// Socket address the listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validates the board parameters into a world configuration.
    pub fn world_config(&self) -> Result<Config, ConfigError> {
        let size = BoardSize::new(self.width, self.height)?;
        let density = Density::new(self.density)?;
        Ok(Config::new(size, seeding::Config::new(density, self.seed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("torus-life").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let args = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
            "--width",
            "12",
            "--height",
            "7",
            "--density",
            "0.5",
            "--seed",
            "99",
        ]);

        assert_eq!(args.socket_addr(), "127.0.0.1:3000".parse().expect("address"));
        let config = args.world_config().expect("valid config");
        assert_eq!(config.size(), BoardSize::new(12, 7).expect("valid size"));
        assert_eq!(config.seeding().seed(), Some(99));
        assert_eq!(config.seeding().density().get(), 0.5);
    }

    #[test]
    fn zero_width_is_rejected() {
        let args = parse(&["--width", "0"]);
        assert!(matches!(
            args.world_config(),
            Err(ConfigError::BoardSize(BoardSizeError::ZeroWidth))
        ));
    }

    #[test]
    fn unallocatable_board_is_rejected() {
        let args = parse(&["--width", "4000000000", "--height", "4000000000"]);
        assert!(matches!(
            args.world_config(),
            Err(ConfigError::BoardSize(BoardSizeError::TooLarge { .. }))
        ));
    }

    #[test]
    fn density_above_one_is_rejected() {
        let args = parse(&["--density", "1.5"]);
        assert!(matches!(args.world_config(), Err(ConfigError::Density(_))));
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
