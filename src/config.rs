use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use thiserror::Error;

pub const DEFAULT_TICK_RATE: u32 = 10;
pub const MAX_TICK_RATE: u32 = 1000;

/// Grid snake for the terminal.
///
/// Arrow keys or WASD to move, Space to restart after a crash,
/// Esc to pause, Ctrl+C to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Simulation steps per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    pub tick_rate: u32,

    /// Seed for food placement, for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick rate must be between 1 and {max} ticks per second, got {got}")]
    TickRate { got: u32, max: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if args.tick_rate == 0 || args.tick_rate > MAX_TICK_RATE {
            return Err(ConfigError::TickRate { got: args.tick_rate, max: MAX_TICK_RATE });
        }

        Ok(Config {
            tick_interval: Duration::from_micros(1_000_000 / args.tick_rate as u64),
            seed: args.seed,
            log_file: args.log_file,
            log_level: args.log_level.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("snake").chain(argv.iter().copied()))
            .expect("arguments should parse");
        Config::from_args(args)
    }

    #[test]
    fn defaults_run_at_ten_ticks_per_second() {
        assert_eq!(parse(&[]), Ok(Config {
            tick_interval: Duration::from_millis(100),
            seed: None,
            log_file: PathBuf::from("snake.log"),
            log_level: LevelFilter::Info,
        }));
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--tick-rate", "20",
            "--seed", "42",
            "--log-file", "/tmp/s.log",
            "--log-level", "debug",
        ]).unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_file, PathBuf::from("/tmp/s.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn tick_rate_out_of_range_is_rejected() {
        assert_eq!(parse(&["--tick-rate", "0"]), Err(ConfigError::TickRate { got: 0, max: 1000 }));
        assert_eq!(parse(&["--tick-rate", "1001"]), Err(ConfigError::TickRate { got: 1001, max: 1000 }));
        assert!(parse(&["--tick-rate", "1000"]).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_to_parse() {
        let res = Args::try_parse_from(["snake", "--log-level", "loud"]);
        assert!(res.is_err());
    }
}
