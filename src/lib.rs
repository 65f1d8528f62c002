// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Animated playback of a point set and its hull polygon.
//!
//! Two coordinate files are read up front (see [`reader`] and [`Scene`]).
//! An [`AnimatedRenderer`] then stamps every point, and afterwards stamps the
//! hull vertices while connecting them into a closed loop, keeping a
//! `points` and a `vertices` counter up to date on the [`Canvas`].
//!
//! ```
//! use hulldraw::data::{HullSequence, Point, PointSet};
//! use hulldraw::render::{CounterKind, Recorder};
//! use hulldraw::{AnimatedRenderer, Scene};
//!
//! let points = PointSet::new(vec![Point::new([0, 0]), Point::new([10, 0])]);
//! let hull = HullSequence::new(vec![Point::new([0, 0]), Point::new([10, 0])]);
//! let scene = Scene::new(points, hull);
//!
//! let mut recorder = Recorder::new();
//! AnimatedRenderer::new(&scene, &mut recorder)?.run()?;
//! assert_eq!(recorder.current_label(CounterKind::Points), Some("points 2"));
//! assert_eq!(recorder.current_label(CounterKind::Vertices), Some("vertices 2"));
//! # Ok::<(), hulldraw::Error>(())
//! ```
use std::num::ParseIntError;
use std::path::PathBuf;

pub mod animation;
pub mod config;
pub mod data;
pub mod reader;
pub mod render;
mod scene;

pub use animation::{AnimatedRenderer, Phase};
pub use config::Config;
pub use render::Canvas;
pub use scene::Scene;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A coordinate line could not be parsed as an integer. `line` is 1-based.
  #[error("{}:{line}: expected an integer coordinate, found {content:?}", .path.display())]
  Parse {
    path: PathBuf,
    line: usize,
    content: String,
    #[source]
    source: ParseIntError,
  },
  #[error("{}: expected at least {expected} lines, found {found}", .path.display())]
  TruncatedInput {
    path: PathBuf,
    expected: usize,
    found: usize,
  },
  #[error("{}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("invalid configuration: {0}")]
  Configuration(String),
  /// The drawing backend could not be written to.
  #[error("canvas write failed: {0}")]
  Canvas(#[source] std::io::Error),
}
