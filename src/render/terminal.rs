use super::{BrailleCanvas, Canvas, CounterKind, Marker, Pen};
use crate::data::Point;
use crate::{Error, Result};
use std::io::Write;
use std::thread;
use std::time::Duration;

// Cursor home, then clear the screen.
const CLEAR: &str = "\x1b[H\x1b[2J";

/// Plays a [`BrailleCanvas`] on a terminal.
///
/// The whole frame is repainted after every operation. Pen moves and stamps
/// are followed by `delay`, which sets the pace of the animation.
pub struct Terminal<W: Write> {
  canvas: BrailleCanvas,
  out: W,
  delay: Duration,
}

impl<W: Write> Terminal<W> {
  pub fn new(canvas: BrailleCanvas, out: W, delay: Duration) -> Self {
    Terminal { canvas, out, delay }
  }

  pub fn canvas(&self) -> &BrailleCanvas {
    &self.canvas
  }

  pub fn into_inner(self) -> (BrailleCanvas, W) {
    (self.canvas, self.out)
  }

  /// Write the current frame without pausing.
  pub fn repaint(&mut self) -> Result<()> {
    write!(self.out, "{CLEAR}{}", self.canvas).map_err(Error::Canvas)?;
    self.out.flush().map_err(Error::Canvas)
  }

  fn pace(&mut self) -> Result<()> {
    self.repaint()?;
    if !self.delay.is_zero() {
      thread::sleep(self.delay);
    }
    Ok(())
  }
}

impl<W: Write> Canvas for Terminal<W> {
  fn move_to(&mut self, to: Point, pen: Pen) -> Result<()> {
    self.canvas.move_to(to, pen)?;
    if pen == Pen::Down {
      self.pace()?;
    }
    Ok(())
  }

  fn stamp(&mut self, at: Point, marker: Marker) -> Result<()> {
    self.canvas.stamp(at, marker)?;
    self.pace()
  }

  fn write_label(&mut self, counter: CounterKind, text: &str) -> Result<()> {
    self.canvas.write_label(counter, text)?;
    self.repaint()
  }

  // Erasing is always followed by a write, which repaints.
  fn erase_label(&mut self, counter: CounterKind) -> Result<()> {
    self.canvas.erase_label(counter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::Resolution;
  use claims::assert_matches;
  use std::io;

  fn terminal() -> Terminal<Vec<u8>> {
    let canvas = BrailleCanvas::new(8, 8, Resolution { cols: 4, rows: 2 }).unwrap();
    Terminal::new(canvas, Vec::new(), Duration::ZERO)
  }

  #[test]
  fn stamp_repaints() -> Result<()> {
    let mut term = terminal();
    term.stamp(Point::new([0, 0]), Marker::Vertex)?;
    let (canvas, out) = term.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with(CLEAR));
    assert!(out.ends_with(&canvas.to_string()));
    Ok(())
  }

  #[test]
  fn pen_up_move_is_silent() -> Result<()> {
    let mut term = terminal();
    term.move_to(Point::new([1, 1]), Pen::Up)?;
    term.erase_label(CounterKind::Points)?;
    let (_, out) = term.into_inner();
    assert!(out.is_empty());
    Ok(())
  }

  #[test]
  fn label_write_repaints() -> Result<()> {
    let mut term = terminal();
    term.write_label(CounterKind::Points, "points 0")?;
    assert_eq!(term.canvas().label(CounterKind::Points), Some("points 0"));
    let (_, out) = term.into_inner();
    assert_eq!(String::from_utf8(out).unwrap().matches(CLEAR).count(), 1);
    Ok(())
  }

  struct Broken;

  impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn write_failure_is_canvas_error() {
    let canvas = BrailleCanvas::new(8, 8, Resolution::default()).unwrap();
    let mut term = Terminal::new(canvas, Broken, Duration::ZERO);
    let err = term.stamp(Point::new([0, 0]), Marker::Point).unwrap_err();
    assert_matches!(err, Error::Canvas(_));
  }
}
