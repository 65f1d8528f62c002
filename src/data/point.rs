use std::fmt;

/// A coordinate pair as read from a coordinate file.
///
/// Points carry no identity of their own. They only mean something through
/// their position in a [`PointSet`](super::PointSet) or
/// [`HullSequence`](super::HullSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point {
  pub array: [i64; 2],
}

impl Point {
  pub const fn new(array: [i64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> i64 {
    self.array[0]
  }
  pub fn y_coord(&self) -> i64 {
    self.array[1]
  }
}

impl From<(i64, i64)> for Point {
  fn from((x, y): (i64, i64)) -> Point {
    Point { array: [x, y] }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x_coord(), self.y_coord())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn coords() {
    let pt = Point::new([3, -7]);
    assert_eq!(pt.x_coord(), 3);
    assert_eq!(pt.y_coord(), -7);
    assert_eq!(pt.array, [3, -7]);
  }

  #[test]
  fn from_tuple() {
    let pt: Point = (10, 0).into();
    assert_eq!(pt, Point::new([10, 0]));
  }

  #[test]
  fn display() {
    assert_eq!(Point::new([0, 10]).to_string(), "(0, 10)");
  }
}
