//! Two-phase playback of a [`Scene`].
//!
//! 1. Every point is stamped in file order with the pen up, and the `points`
//!    counter is bumped after each stamp.
//! 2. The hull is walked backwards and cyclically, visiting indices
//!    `M-1, M-2, ..., 0, M-1`. The first visit only places the pen. Every
//!    later visit draws an edge from the previous vertex, stamps the vertex
//!    and bumps the `vertices` counter, so the counter ends at `M` once the
//!    closing edge is down.
//!
//! A counter update always erases the old label before writing the new one,
//! and always happens after the stamp it reports on.
use crate::data::{ClosedTraversal, Point};
use crate::render::{Canvas, CounterKind, Marker, Pen};
use crate::{Result, Scene};

/// A step counter and the label that displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCounter {
  kind: CounterKind,
  value: usize,
  limit: usize,
}

impl DrawCounter {
  pub fn new(kind: CounterKind, limit: usize) -> DrawCounter {
    DrawCounter {
      kind,
      value: 0,
      limit,
    }
  }

  pub fn kind(&self) -> CounterKind {
    self.kind
  }

  pub fn value(&self) -> usize {
    self.value
  }

  pub fn limit(&self) -> usize {
    self.limit
  }

  /// The label text, e.g. `points 3`.
  pub fn text(&self) -> String {
    format!("{} {}", self.kind.label(), self.value)
  }

  fn show<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
    canvas.write_label(self.kind, &self.text())
  }

  fn set<C: Canvas>(&mut self, value: usize, canvas: &mut C) -> Result<()> {
    debug_assert!(value >= self.value && value <= self.limit);
    self.value = value;
    canvas.erase_label(self.kind)?;
    self.show(canvas)
  }

  fn increment<C: Canvas>(&mut self, canvas: &mut C) -> Result<()> {
    self.set(self.value + 1, canvas)
  }
}

/// Mutable drawing state of one playback: the pen and both counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
  cursor: Option<Point>,
  pen: Pen,
  points: DrawCounter,
  vertices: DrawCounter,
}

impl RenderContext {
  pub fn new(num_points: usize, num_vertices: usize) -> RenderContext {
    RenderContext {
      cursor: None,
      pen: Pen::Up,
      points: DrawCounter::new(CounterKind::Points, num_points),
      vertices: DrawCounter::new(CounterKind::Vertices, num_vertices),
    }
  }

  /// Last position the pen was moved to.
  pub fn cursor(&self) -> Option<Point> {
    self.cursor
  }

  pub fn pen(&self) -> Pen {
    self.pen
  }

  pub fn counter(&self, kind: CounterKind) -> &DrawCounter {
    match kind {
      CounterKind::Points => &self.points,
      CounterKind::Vertices => &self.vertices,
    }
  }

  fn move_pen<C: Canvas>(&mut self, canvas: &mut C, to: Point) -> Result<()> {
    canvas.move_to(to, self.pen)?;
    self.cursor = Some(to);
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  StampPoints,
  ConnectHull,
  Finished,
}

/// Drives the playback of a scene on a canvas, one draw step at a time.
pub struct AnimatedRenderer<'a, C> {
  scene: &'a Scene,
  canvas: C,
  context: RenderContext,
  phase: Phase,
  next_point: usize,
  traversal: ClosedTraversal<'a>,
  hull_visits: usize,
}

impl<'a, C: Canvas> AnimatedRenderer<'a, C> {
  /// Writes the initial `points 0` and `vertices 0` labels.
  pub fn new(scene: &'a Scene, mut canvas: C) -> Result<Self> {
    let context = RenderContext::new(scene.points().len(), scene.hull().len());
    context.points.show(&mut canvas)?;
    context.vertices.show(&mut canvas)?;
    tracing::debug!(
      points = scene.points().len(),
      vertices = scene.hull().len(),
      "starting playback"
    );
    let mut renderer = AnimatedRenderer {
      scene,
      canvas,
      context,
      phase: Phase::StampPoints,
      next_point: 0,
      traversal: scene.hull().closed_traversal(),
      hull_visits: 0,
    };
    renderer.skip_exhausted_phases();
    Ok(renderer)
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn context(&self) -> &RenderContext {
    &self.context
  }

  pub fn canvas(&self) -> &C {
    &self.canvas
  }

  pub fn into_canvas(self) -> C {
    self.canvas
  }

  /// Perform one draw step and return the phase that follows it.
  ///
  /// A step is one stamped point, or one visited hull vertex. Calling this
  /// once finished does nothing.
  pub fn step(&mut self) -> Result<Phase> {
    match self.phase {
      Phase::StampPoints => self.stamp_next_point()?,
      Phase::ConnectHull => self.visit_next_vertex()?,
      Phase::Finished => return Ok(Phase::Finished),
    }
    self.skip_exhausted_phases();
    Ok(self.phase)
  }

  /// Play every remaining step.
  pub fn run(&mut self) -> Result<()> {
    while self.step()? != Phase::Finished {}
    Ok(())
  }

  fn stamp_next_point(&mut self) -> Result<()> {
    let point = self.scene.points()[self.next_point];
    self.context.pen = Pen::Up;
    self.context.move_pen(&mut self.canvas, point)?;
    self.canvas.stamp(point, Marker::Point)?;
    self.next_point += 1;
    self.context.points.set(self.next_point, &mut self.canvas)?;
    tracing::trace!(index = self.next_point - 1, %point, "stamped point");
    Ok(())
  }

  fn visit_next_vertex(&mut self) -> Result<()> {
    let Some((index, &vertex)) = self.traversal.next() else {
      return Ok(());
    };
    if self.hull_visits == 0 {
      // Place the pen on the starting vertex without drawing.
      self.context.pen = Pen::Up;
      self.context.move_pen(&mut self.canvas, vertex)?;
      self.canvas.stamp(vertex, Marker::Vertex)?;
      self.context.vertices.set(0, &mut self.canvas)?;
      self.context.pen = Pen::Down;
    } else {
      self.context.move_pen(&mut self.canvas, vertex)?;
      self.canvas.stamp(vertex, Marker::Vertex)?;
      self.context.vertices.increment(&mut self.canvas)?;
    }
    self.hull_visits += 1;
    tracing::trace!(index, %vertex, "visited hull vertex");
    Ok(())
  }

  fn skip_exhausted_phases(&mut self) {
    if self.phase == Phase::StampPoints && self.next_point == self.scene.points().len() {
      self.enter(Phase::ConnectHull);
    }
    if self.phase == Phase::ConnectHull && self.traversal.len() == 0 {
      self.enter(Phase::Finished);
    }
  }

  fn enter(&mut self, phase: Phase) {
    tracing::debug!(from = ?self.phase, to = ?phase, "phase change");
    self.phase = phase;
  }
}
