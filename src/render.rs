//! Drawing backends.
//!
//! The animation only talks to a [`Canvas`]. A canvas has a single pen,
//! can stamp markers where the pen is, and owns two text labels used for the
//! step counters.
use crate::data::Point;
use crate::Result;
use std::fmt;

mod braille;
mod recorder;
mod terminal;

pub use braille::{BrailleCanvas, Resolution};
pub use recorder::{DrawOp, Recorder};
pub use terminal::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pen {
  /// Moving only repositions the pen.
  Up,
  /// Moving draws a straight segment from the previous position.
  Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
  /// Small marker used for every input point.
  Point,
  /// Larger marker used for hull vertices.
  Vertex,
}

/// The two counter labels shown on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CounterKind {
  Points,
  Vertices,
}

impl CounterKind {
  pub const ALL: [CounterKind; 2] = [CounterKind::Points, CounterKind::Vertices];

  pub fn label(self) -> &'static str {
    match self {
      CounterKind::Points => "points",
      CounterKind::Vertices => "vertices",
    }
  }
}

impl fmt::Display for CounterKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

pub trait Canvas {
  /// Move the pen to `to`. With [`Pen::Down`] a segment is drawn from the
  /// previous pen position.
  fn move_to(&mut self, to: Point, pen: Pen) -> Result<()>;

  /// Stamp a marker at `at`.
  fn stamp(&mut self, at: Point, marker: Marker) -> Result<()>;

  /// Show `text` in the slot reserved for `counter`.
  fn write_label(&mut self, counter: CounterKind, text: &str) -> Result<()>;

  /// Remove whatever text the slot for `counter` shows.
  fn erase_label(&mut self, counter: CounterKind) -> Result<()>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
  fn move_to(&mut self, to: Point, pen: Pen) -> Result<()> {
    (**self).move_to(to, pen)
  }
  fn stamp(&mut self, at: Point, marker: Marker) -> Result<()> {
    (**self).stamp(at, marker)
  }
  fn write_label(&mut self, counter: CounterKind, text: &str) -> Result<()> {
    (**self).write_label(counter, text)
  }
  fn erase_label(&mut self, counter: CounterKind) -> Result<()> {
    (**self).erase_label(counter)
  }
}
