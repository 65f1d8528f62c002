use super::{Canvas, CounterKind, Marker, Pen};
use crate::data::Point;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
  MoveTo { to: Point, pen: Pen },
  Stamp { at: Point, marker: Marker },
  WriteLabel { counter: CounterKind, text: String },
  EraseLabel { counter: CounterKind },
}

/// A canvas that draws nothing and remembers every operation.
///
/// Two runs over the same scene produce equal recorders, which makes it the
/// reference backend for checking playback order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
  ops: Vec<DrawOp>,
}

impl Recorder {
  pub fn new() -> Recorder {
    Recorder::default()
  }

  pub fn ops(&self) -> &[DrawOp] {
    &self.ops
  }

  /// Locations stamped with `marker`, in stamping order.
  pub fn stamps(&self, marker: Marker) -> Vec<Point> {
    self
      .ops
      .iter()
      .filter_map(|op| match op {
        DrawOp::Stamp { at, marker: m } if *m == marker => Some(*at),
        _ => None,
      })
      .collect()
  }

  /// Segments drawn by pen-down moves, as `(from, to)` pairs.
  ///
  /// A pen-down move with no earlier pen position draws nothing.
  pub fn segments(&self) -> Vec<(Point, Point)> {
    let mut cursor: Option<Point> = None;
    let mut segments = Vec::new();
    for op in &self.ops {
      if let DrawOp::MoveTo { to, pen } = op {
        if let (Pen::Down, Some(from)) = (pen, cursor) {
          segments.push((from, *to));
        }
        cursor = Some(*to);
      }
    }
    segments
  }

  /// Every text written to the `counter` label, oldest first.
  pub fn label_history(&self, counter: CounterKind) -> Vec<&str> {
    self
      .ops
      .iter()
      .filter_map(|op| match op {
        DrawOp::WriteLabel { counter: c, text } if *c == counter => Some(text.as_str()),
        _ => None,
      })
      .collect()
  }

  /// Text the `counter` label shows after replaying every operation.
  pub fn current_label(&self, counter: CounterKind) -> Option<&str> {
    let mut current = None;
    for op in &self.ops {
      match op {
        DrawOp::WriteLabel { counter: c, text } if *c == counter => current = Some(text.as_str()),
        DrawOp::EraseLabel { counter: c } if *c == counter => current = None,
        _ => {}
      }
    }
    current
  }
}

impl Canvas for Recorder {
  fn move_to(&mut self, to: Point, pen: Pen) -> Result<()> {
    self.ops.push(DrawOp::MoveTo { to, pen });
    Ok(())
  }

  fn stamp(&mut self, at: Point, marker: Marker) -> Result<()> {
    self.ops.push(DrawOp::Stamp { at, marker });
    Ok(())
  }

  fn write_label(&mut self, counter: CounterKind, text: &str) -> Result<()> {
    self.ops.push(DrawOp::WriteLabel {
      counter,
      text: text.to_string(),
    });
    Ok(())
  }

  fn erase_label(&mut self, counter: CounterKind) -> Result<()> {
    self.ops.push(DrawOp::EraseLabel { counter });
    Ok(())
  }
}
