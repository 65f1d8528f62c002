use super::Point;
use std::ops::Deref;

/// Every point of the scene, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
  points: Vec<Point>,
}

impl PointSet {
  pub fn new(points: Vec<Point>) -> PointSet {
    PointSet { points }
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.points.iter()
  }
}

impl Deref for PointSet {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.points
  }
}

impl FromIterator<Point> for PointSet {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
    PointSet::new(iter.into_iter().collect())
  }
}

/// Hull vertices in polygon order.
///
/// Unlike a [`PointSet`], the order here is meaningful: consecutive vertices
/// are joined by an edge, and the last vertex is joined back to the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HullSequence {
  vertices: Vec<Point>,
}

impl HullSequence {
  pub fn new(vertices: Vec<Point>) -> HullSequence {
    HullSequence { vertices }
  }

  /// Wrap-around lookup: `-1` is the last vertex, `len()` is the first.
  ///
  /// Returns `None` for an empty sequence.
  ///
  /// ```
  /// use hulldraw::data::{HullSequence, Point};
  ///
  /// let hull = HullSequence::new(vec![Point::new([0, 0]), Point::new([10, 0]), Point::new([0, 10])]);
  /// assert_eq!(hull.vertex_at(-1), Some(&Point::new([0, 10])));
  /// assert_eq!(hull.vertex_at(3), Some(&Point::new([0, 0])));
  /// ```
  pub fn vertex_at(&self, index: isize) -> Option<&Point> {
    let len = self.vertices.len() as isize;
    if len == 0 {
      return None;
    }
    self.vertices.get(index.rem_euclid(len) as usize)
  }

  /// Indices visited when drawing the closed polygon: `M-1, M-2, ..., 0, -1`.
  ///
  /// The final `-1` wraps around to the starting vertex and produces the
  /// closing edge, so a non-empty sequence yields `M+1` indices. An empty
  /// sequence yields nothing.
  pub fn closed_traversal(&self) -> ClosedTraversal<'_> {
    let len = self.vertices.len() as isize;
    ClosedTraversal {
      hull: self,
      next: len - 1,
      exhausted: len == 0,
    }
  }
}

impl Deref for HullSequence {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.vertices
  }
}

impl FromIterator<Point> for HullSequence {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
    HullSequence::new(iter.into_iter().collect())
  }
}

/// Iterator returned by [`HullSequence::closed_traversal`].
///
/// Yields `(index, vertex)` pairs where `index` is the unwrapped traversal
/// index (the last item has index `-1`).
#[derive(Debug, Clone)]
pub struct ClosedTraversal<'a> {
  hull: &'a HullSequence,
  next: isize,
  exhausted: bool,
}

impl<'a> Iterator for ClosedTraversal<'a> {
  type Item = (isize, &'a Point);

  fn next(&mut self) -> Option<Self::Item> {
    if self.exhausted {
      return None;
    }
    let index = self.next;
    let vertex = self.hull.vertex_at(index)?;
    if index == -1 {
      self.exhausted = true;
    } else {
      self.next -= 1;
    }
    Some((index, vertex))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.len();
    (len, Some(len))
  }
}

impl ExactSizeIterator for ClosedTraversal<'_> {
  fn len(&self) -> usize {
    if self.exhausted {
      0
    } else {
      (self.next + 2) as usize
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::collection::vec;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn triangle() -> HullSequence {
    HullSequence::new(vec![
      Point::new([0, 0]),
      Point::new([10, 0]),
      Point::new([0, 10]),
    ])
  }

  #[test]
  fn vertex_at_wraps() {
    let hull = triangle();
    assert_eq!(hull.vertex_at(0), Some(&Point::new([0, 0])));
    assert_eq!(hull.vertex_at(2), Some(&Point::new([0, 10])));
    assert_eq!(hull.vertex_at(-1), Some(&Point::new([0, 10])));
    assert_eq!(hull.vertex_at(-4), Some(&Point::new([0, 10])));
    assert_eq!(hull.vertex_at(5), Some(&Point::new([0, 10])));
  }

  #[test]
  fn vertex_at_empty() {
    assert_eq!(HullSequence::default().vertex_at(0), None);
    assert_eq!(HullSequence::default().vertex_at(-1), None);
  }

  #[test]
  fn closed_traversal_triangle() {
    let hull = triangle();
    let visited: Vec<(isize, Point)> = hull
      .closed_traversal()
      .map(|(i, pt)| (i, *pt))
      .collect();
    assert_eq!(
      visited,
      vec![
        (2, Point::new([0, 10])),
        (1, Point::new([10, 0])),
        (0, Point::new([0, 0])),
        (-1, Point::new([0, 10])),
      ]
    );
  }

  #[test]
  fn closed_traversal_single() {
    let hull = HullSequence::new(vec![Point::new([4, 4])]);
    let indices: Vec<isize> = hull.closed_traversal().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![0, -1]);
  }

  #[test]
  fn closed_traversal_empty() {
    let hull = HullSequence::default();
    assert_eq!(hull.closed_traversal().len(), 0);
    assert_eq!(hull.closed_traversal().next(), None);
  }

  #[proptest]
  fn closed_traversal_len(#[strategy(vec(any::<(i64, i64)>(), 1..50))] raw: Vec<(i64, i64)>) {
    let hull: HullSequence = raw.into_iter().map(Point::from).collect();
    let mut iter = hull.closed_traversal();
    prop_assert_eq!(iter.len(), hull.len() + 1);
    iter.next();
    prop_assert_eq!(iter.len(), hull.len());
    prop_assert_eq!(iter.count(), hull.len());
  }

  #[proptest]
  fn closed_traversal_starts_and_ends_on_last_vertex(
    #[strategy(vec(any::<(i64, i64)>(), 1..50))] raw: Vec<(i64, i64)>,
  ) {
    let hull: HullSequence = raw.into_iter().map(Point::from).collect();
    let visited: Vec<&Point> = hull.closed_traversal().map(|(_, pt)| pt).collect();
    prop_assert_eq!(visited.first().copied(), hull.last());
    prop_assert_eq!(visited.last().copied(), hull.last());
    let reversed: Vec<&Point> = hull.iter().rev().collect();
    prop_assert_eq!(&visited[..hull.len()], &reversed[..]);
  }
}
