use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hulldraw::data::{HullSequence, Point, PointSet};
use hulldraw::reader::parse_coordinates;
use hulldraw::render::{BrailleCanvas, Recorder, Resolution};
use hulldraw::{AnimatedRenderer, Scene};
use rand::Rng;
use std::io::Cursor;
use std::path::Path;

fn gen_points<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Point> {
  (0..n)
    .map(|_| Point::new([rng.gen_range(-500..500), rng.gen_range(-500..500)]))
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::thread_rng();

  for &n in &[1_000, 100_000] {
    let text: String = gen_points(&mut rng, n)
      .iter()
      .map(|pt| format!("{}\n{}\n", pt.x_coord(), pt.y_coord()))
      .collect();
    c.bench_function(&format!("parse_coordinates({})", n), |b| {
      b.iter(|| parse_coordinates(Cursor::new(text.as_bytes()), n, Path::new("bench")))
    });
  }

  let scene = Scene::new(
    PointSet::new(gen_points(&mut rng, 10_000)),
    HullSequence::new(gen_points(&mut rng, 100)),
  );
  c.bench_function("playback(recorder)", |b| {
    b.iter_batched(
      Recorder::new,
      |mut rec| AnimatedRenderer::new(&scene, &mut rec).and_then(|mut r| r.run()),
      BatchSize::LargeInput,
    )
  });
  c.bench_function("playback(braille)", |b| {
    b.iter_batched(
      || BrailleCanvas::new(1000, 1000, Resolution::default()).unwrap(),
      |mut canvas| AnimatedRenderer::new(&scene, &mut canvas).and_then(|mut r| r.run()),
      BatchSize::LargeInput,
    )
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
