use super::{Canvas, CounterKind, Marker, Pen};
use crate::data::Point;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Size of a [`BrailleCanvas`] in terminal character cells.
///
/// Each cell holds a 2×4 block of dots, so the dot grid is `cols*2` wide and
/// `rows*4` tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
  pub cols: usize,
  pub rows: usize,
}

impl Default for Resolution {
  fn default() -> Self {
    Resolution { cols: 80, rows: 40 }
  }
}

/// A raster canvas rendered with Braille Unicode symbols.
///
/// World coordinates follow the usual turtle convention: the origin is the
/// centre of a `width × height` window and y grows upwards. The window is
/// scaled onto the dot grid; anything outside it is clipped.
///
/// # Braille Dot Numbering
///
/// ```text
/// 1  4
/// 2  5
/// 3  6
/// 7  8
/// ```
///
/// # Examples
///
/// ```
/// use hulldraw::data::Point;
/// use hulldraw::render::{BrailleCanvas, Canvas, Marker, Pen, Resolution};
///
/// let mut canvas = BrailleCanvas::new(8, 8, Resolution { cols: 4, rows: 2 })?;
/// canvas.move_to(Point::new([-4, 0]), Pen::Up)?;
/// canvas.move_to(Point::new([3, 0]), Pen::Down)?;
/// canvas.stamp(Point::new([0, 3]), Marker::Point)?;
///
/// let expected = "\
/// ⠀⠀⠂⠀
/// ⠉⠉⠉⠉
/// ";
/// assert_eq!(canvas.render_grid(), expected);
/// # Ok::<(), hulldraw::Error>(())
/// ```
const BRAILLE_BLANK: u32 = 0x2800;

// Pattern bit of each dot in a cell, indexed `[row][col]`.
const CELL_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

#[derive(Debug, Clone)]
pub struct BrailleCanvas {
  width: u32,
  height: u32,
  dots_x: usize,
  dots_y: usize,
  grid: Vec<Vec<bool>>,
  cursor: Option<Point>,
  labels: BTreeMap<CounterKind, String>,
}

impl BrailleCanvas {
  pub fn new(width: u32, height: u32, resolution: Resolution) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(Error::Configuration(format!(
        "canvas size must be positive, got {width}x{height}"
      )));
    }
    if resolution.cols == 0 || resolution.rows == 0 {
      return Err(Error::Configuration(format!(
        "grid resolution must be positive, got {}x{}",
        resolution.cols, resolution.rows
      )));
    }
    let dots_x = resolution.cols * 2;
    let dots_y = resolution.rows * 4;
    Ok(BrailleCanvas {
      width,
      height,
      dots_x,
      dots_y,
      grid: vec![vec![false; dots_x]; dots_y],
      cursor: None,
      labels: BTreeMap::new(),
    })
  }

  /// Text currently shown for `counter`, if any.
  pub fn label(&self, counter: CounterKind) -> Option<&str> {
    self.labels.get(&counter).map(String::as_str)
  }

  /// Whether the dot at column `x`, row `y` (row 0 at the top) is set.
  pub fn dot(&self, x: usize, y: usize) -> bool {
    self
      .grid
      .get(y)
      .and_then(|row| row.get(x))
      .copied()
      .unwrap_or(false)
  }

  /// The dot a world coordinate lands on, or `None` if it is off-canvas.
  pub fn to_dot(&self, point: Point) -> Option<(usize, usize)> {
    let (x, y) = self.project(point);
    let (x, y) = (x.floor(), y.floor());
    if x < 0.0 || y < 0.0 || x >= self.dots_x as f64 || y >= self.dots_y as f64 {
      return None;
    }
    Some((x as usize, y as usize))
  }

  /// Render only the dot grid, one line per row of Braille cells.
  pub fn render_grid(&self) -> String {
    let (cols, rows) = (self.dots_x / 2, self.dots_y / 4);
    let mut out = String::with_capacity(rows * (cols * 3 + 1));
    for row in 0..rows {
      out.extend((0..cols).map(|col| self.cell(col, row)));
      out.push('\n');
    }
    out
  }

  // World coordinate to fractional dot position.
  fn project(&self, point: Point) -> (f64, f64) {
    let width = f64::from(self.width);
    let height = f64::from(self.height);
    let x = (point.x_coord() as f64 + width / 2.0) / width * self.dots_x as f64;
    let y = (height / 2.0 - point.y_coord() as f64) / height * self.dots_y as f64;
    (x, y)
  }

  fn set_dot(&mut self, x: i64, y: i64) {
    if x >= 0 && y >= 0 && (x as usize) < self.dots_x && (y as usize) < self.dots_y {
      self.grid[y as usize][x as usize] = true;
    }
  }

  fn draw_segment(&mut self, from: Point, to: Point) {
    let (x0, y0) = self.project(from);
    let (x1, y1) = self.project(to);
    let max_x = self.dots_x as f64 - 0.5;
    let max_y = self.dots_y as f64 - 0.5;
    let Some(((x0, y0), (x1, y1))) = clip_segment((x0, y0), (x1, y1), max_x, max_y) else {
      return;
    };
    // Rounding in the clip can leave endpoints a hair outside the grid.
    let (x0, x1) = (x0.clamp(0.0, max_x), x1.clamp(0.0, max_x));
    let (y0, y1) = (y0.clamp(0.0, max_y), y1.clamp(0.0, max_y));
    bresenham_line(
      x0.floor() as i64,
      y0.floor() as i64,
      x1.floor() as i64,
      y1.floor() as i64,
      |x, y| self.set_dot(x, y),
    );
  }

  fn draw_marker(&mut self, at: Point, marker: Marker) {
    let Some((x, y)) = self.to_dot(at) else {
      return;
    };
    let (x, y) = (x as i64, y as i64);
    match marker {
      Marker::Point => self.set_dot(x, y),
      Marker::Vertex => {
        for dy in -1..=1 {
          for dx in -1..=1 {
            self.set_dot(x + dx, y + dy);
          }
        }
      }
    }
  }

  // One Braille character for the 2×4 dot block at cell (`col`, `row`).
  fn cell(&self, col: usize, row: usize) -> char {
    let mut bits = 0u8;
    for (dy, row_bits) in CELL_BITS.iter().enumerate() {
      for (dx, bit) in row_bits.iter().enumerate() {
        if self.dot(col * 2 + dx, row * 4 + dy) {
          bits |= bit;
        }
      }
    }
    char::from_u32(BRAILLE_BLANK + u32::from(bits)).unwrap_or(' ')
  }
}

impl Canvas for BrailleCanvas {
  fn move_to(&mut self, to: Point, pen: Pen) -> Result<()> {
    if let (Pen::Down, Some(from)) = (pen, self.cursor) {
      self.draw_segment(from, to);
    }
    self.cursor = Some(to);
    Ok(())
  }

  fn stamp(&mut self, at: Point, marker: Marker) -> Result<()> {
    self.draw_marker(at, marker);
    Ok(())
  }

  fn write_label(&mut self, counter: CounterKind, text: &str) -> Result<()> {
    self.labels.insert(counter, text.to_string());
    Ok(())
  }

  fn erase_label(&mut self, counter: CounterKind) -> Result<()> {
    self.labels.remove(&counter);
    Ok(())
  }
}

/// Counter labels first, one line per slot, then the dot grid.
impl fmt::Display for BrailleCanvas {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for counter in CounterKind::ALL {
      writeln!(f, "{}", self.label(counter).unwrap_or(""))?;
    }
    write!(f, "{}", self.render_grid())
  }
}

/// Liang-Barsky clipping of a segment against `[0, max_x] × [0, max_y]`.
///
/// Returns `None` when no part of the segment is inside.
fn clip_segment(
  (x0, y0): (f64, f64),
  (x1, y1): (f64, f64),
  max_x: f64,
  max_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
  let dx = x1 - x0;
  let dy = y1 - y0;
  let mut t0: f64 = 0.0;
  let mut t1: f64 = 1.0;
  for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
    if p == 0.0 {
      if q < 0.0 {
        return None;
      }
    } else {
      let r = q / p;
      if p < 0.0 {
        t0 = t0.max(r);
      } else {
        t1 = t1.min(r);
      }
    }
  }
  if t0 > t1 {
    return None;
  }
  Some((
    (x0 + t0 * dx, y0 + t0 * dy),
    (x0 + t1 * dx, y0 + t1 * dy),
  ))
}

/// Bresenham walk from (x0, y0) to (x1, y1), both ends included.
fn bresenham_line<F>(x0: i64, y0: i64, x1: i64, y1: i64, mut plot: F)
where
  F: FnMut(i64, i64),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;

  let mut x = x0;
  let mut y = y0;

  loop {
    plot(x, y);

    if x == x1 && y == y1 {
      break;
    }

    let e2 = 2 * error;

    if e2 >= dy {
      if x == x1 {
        break;
      }
      error += dy;
      x += sx;
    }

    if e2 <= dx {
      if y == y1 {
        break;
      }
      error += dx;
      y += sy;
    }
  }
}
