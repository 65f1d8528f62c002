use crate::config::Config;
use crate::data::{HullSequence, PointSet};
use crate::reader::read_points;
use crate::Result;
use std::path::Path;

/// Everything a playback needs, fully read before anything is drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
  points: PointSet,
  hull: HullSequence,
}

impl Scene {
  pub fn new(points: PointSet, hull: HullSequence) -> Scene {
    Scene { points, hull }
  }

  /// Read both coordinate files.
  ///
  /// Either file failing to read fails the whole load, so a caller never
  /// starts drawing a scene that is only half valid.
  pub fn load(
    points_file: &Path,
    num_points: usize,
    vertices_file: &Path,
    num_vertices: usize,
  ) -> Result<Scene> {
    let points = PointSet::new(read_points(points_file, num_points)?);
    let hull = HullSequence::new(read_points(vertices_file, num_vertices)?);
    tracing::debug!(
      points = points.len(),
      vertices = hull.len(),
      "scene loaded"
    );
    Ok(Scene { points, hull })
  }

  pub fn from_config(config: &Config) -> Result<Scene> {
    Scene::load(
      &config.points_file,
      config.num_points,
      &config.vertices_file,
      config.num_vertices,
    )
  }

  pub fn points(&self) -> &PointSet {
    &self.points
  }

  pub fn hull(&self) -> &HullSequence {
    &self.hull
  }
}
