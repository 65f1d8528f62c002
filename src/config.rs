//! Command line parameters.
//!
//! Six positional parameters name the two coordinate files, the window size
//! and the two pair counts. Everything else only changes how the playback
//! looks.
use crate::render::Resolution;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "hulldraw", version, about, allow_negative_numbers = true)]
pub struct Args {
  /// File with every point, one integer per line: x0, y0, x1, y1, ...
  pub points_file: PathBuf,
  /// File with the hull vertices in polygon order, same format.
  pub vertices_file: PathBuf,
  /// Window width in world units; the origin sits at its centre.
  pub width: i64,
  /// Window height in world units.
  pub height: i64,
  /// Number of coordinate pairs to read from the points file.
  pub num_points: i64,
  /// Number of coordinate pairs to read from the vertices file.
  pub num_vertices: i64,
  /// Canvas width in terminal cells.
  #[arg(long, default_value_t = 80)]
  pub cols: usize,
  /// Canvas height in terminal cells.
  #[arg(long, default_value_t = 40)]
  pub rows: usize,
  /// Pause after every draw step, in milliseconds.
  #[arg(long, default_value_t = 20)]
  pub delay_ms: u64,
  /// Exit as soon as the animation ends instead of waiting for ENTER.
  #[arg(long)]
  pub no_wait: bool,
  /// Log more (repeat for more detail).
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

/// Validated invocation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub points_file: PathBuf,
  pub vertices_file: PathBuf,
  pub width: u32,
  pub height: u32,
  pub num_points: usize,
  pub num_vertices: usize,
  pub resolution: Resolution,
  pub delay: Duration,
  pub wait: bool,
  pub verbosity: u8,
}

impl Config {
  /// Parse and validate a full argument list (including the program name).
  pub fn try_parse_from<I, T>(args: I) -> Result<Config>
  where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
  {
    let args = Args::try_parse_from(args).map_err(|err| Error::Configuration(err.to_string()))?;
    Config::try_from(args)
  }

  pub fn log_level(&self) -> tracing::Level {
    log_level(self.verbosity)
  }
}

/// Maximum log level for a `-v` count. Quiet by default.
pub fn log_level(verbosity: u8) -> tracing::Level {
  match verbosity {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  }
}

impl TryFrom<Args> for Config {
  type Error = Error;

  fn try_from(args: Args) -> Result<Config> {
    let width = positive("WIDTH", args.width)?;
    let height = positive("HEIGHT", args.height)?;
    let num_points = positive("NUM_POINTS", args.num_points)?;
    let num_vertices = positive("NUM_VERTICES", args.num_vertices)?;
    if args.cols == 0 || args.rows == 0 {
      return Err(Error::Configuration(format!(
        "--cols and --rows must be positive, got {}x{}",
        args.cols, args.rows
      )));
    }
    Ok(Config {
      points_file: args.points_file,
      vertices_file: args.vertices_file,
      width,
      height,
      num_points,
      num_vertices,
      resolution: Resolution {
        cols: args.cols,
        rows: args.rows,
      },
      delay: Duration::from_millis(args.delay_ms),
      wait: !args.no_wait,
      verbosity: args.verbose,
    })
  }
}

fn positive<T: TryFrom<i64>>(name: &str, value: i64) -> Result<T> {
  if value <= 0 {
    return Err(Error::Configuration(format!(
      "{name} must be positive, got {value}"
    )));
  }
  T::try_from(value)
    .map_err(|_| Error::Configuration(format!("{name} is too large: {value}")))
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_matches, assert_ok};

  fn parse(args: &[&str]) -> Result<Config> {
    Config::try_parse_from(std::iter::once("hulldraw").chain(args.iter().copied()))
  }

  #[test]
  fn positional_order() {
    let config = assert_ok!(parse(&[".points", ".vertices", "1000", "800", "100", "12"]));
    assert_eq!(config.points_file, PathBuf::from(".points"));
    assert_eq!(config.vertices_file, PathBuf::from(".vertices"));
    assert_eq!((config.width, config.height), (1000, 800));
    assert_eq!((config.num_points, config.num_vertices), (100, 12));
    assert_eq!(config.resolution, Resolution::default());
    assert_eq!(config.delay, Duration::from_millis(20));
    assert!(config.wait);
    assert_eq!(config.log_level(), tracing::Level::WARN);
  }

  #[test]
  fn options() {
    let config = assert_ok!(parse(&[
      "p", "v", "10", "10", "1", "1", "--cols", "20", "--rows", "5", "--delay-ms", "0",
      "--no-wait", "-vv",
    ]));
    assert_eq!(config.resolution, Resolution { cols: 20, rows: 5 });
    assert_eq!(config.delay, Duration::ZERO);
    assert!(!config.wait);
    assert_eq!(config.log_level(), tracing::Level::DEBUG);
  }

  #[test]
  fn missing_parameter() {
    let err = parse(&["p", "v", "10", "10", "1"]).unwrap_err();
    assert_matches!(err, Error::Configuration(_));
  }

  #[test]
  fn non_numeric_parameter() {
    let err = parse(&["p", "v", "wide", "10", "1", "1"]).unwrap_err();
    assert_matches!(err, Error::Configuration(_));
  }

  #[test]
  fn zero_count_rejected() {
    let err = parse(&["p", "v", "10", "10", "0", "3"]).unwrap_err();
    assert_matches!(err, Error::Configuration(ref msg) if msg.contains("NUM_POINTS"));
  }

  #[test]
  fn negative_count_rejected() {
    let err = parse(&["p", "v", "10", "10", "3", "-3"]).unwrap_err();
    assert_matches!(err, Error::Configuration(ref msg) if msg.contains("NUM_VERTICES"));
  }

  #[test]
  fn negative_size_rejected() {
    let err = parse(&["p", "v", "-10", "10", "3", "3"]).unwrap_err();
    assert_matches!(err, Error::Configuration(ref msg) if msg.contains("WIDTH"));
  }

  #[test]
  fn oversized_window_rejected() {
    let err = parse(&["p", "v", "10", "99999999999", "3", "3"]).unwrap_err();
    assert_matches!(err, Error::Configuration(ref msg) if msg.contains("HEIGHT"));
  }

  #[test]
  fn zero_grid_rejected() {
    let err = parse(&["p", "v", "10", "10", "3", "3", "--rows", "0"]).unwrap_err();
    assert_matches!(err, Error::Configuration(_));
  }
}
