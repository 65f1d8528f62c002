//! Coordinate files.
//!
//! A coordinate file is a flat list of integers, one per line, alternating
//! between X and Y: `x0, y0, x1, y1, ...`. Callers say how many pairs they
//! want; exactly that many lines are consumed and anything after them is
//! left unread.
use crate::data::Point;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read `num` coordinate pairs from `path` as two parallel sequences.
///
/// Even lines (0, 2, 4, ...) are X values and odd lines are Y values. The
/// file is closed before this function returns, whether it succeeds or not.
pub fn read_coordinates<P: AsRef<Path>>(path: P, num: usize) -> Result<(Vec<i64>, Vec<i64>)> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  tracing::debug!(path = %path.display(), num, "reading coordinates");
  parse_coordinates(BufReader::new(file), num, path)
}

/// Same as [`read_coordinates`] but zipped into points.
pub fn read_points<P: AsRef<Path>>(path: P, num: usize) -> Result<Vec<Point>> {
  let (xs, ys) = read_coordinates(path, num)?;
  Ok(zip_points(xs, ys))
}

const PREALLOC_LIMIT: usize = 1024;

/// Parse `num` coordinate pairs from any buffered reader.
///
/// `source` only names the input in errors.
pub fn parse_coordinates<R: BufRead>(
  reader: R,
  num: usize,
  source: &Path,
) -> Result<(Vec<i64>, Vec<i64>)> {
  let expected = num.saturating_mul(2);
  // `num` is untrusted until the lines are actually there.
  let mut xs = Vec::with_capacity(num.min(PREALLOC_LIMIT));
  let mut ys = Vec::with_capacity(num.min(PREALLOC_LIMIT));

  let mut found = 0;
  for (idx, line) in reader.lines().take(expected).enumerate() {
    let line = line.map_err(|err| Error::Io {
      path: source.to_path_buf(),
      source: err,
    })?;
    let value = parse_line(&line, idx + 1, source)?;
    if idx % 2 == 0 {
      xs.push(value);
    } else {
      ys.push(value);
    }
    found += 1;
  }

  if found < expected {
    return Err(Error::TruncatedInput {
      path: source.to_path_buf(),
      expected,
      found,
    });
  }
  Ok((xs, ys))
}

pub(crate) fn zip_points(xs: Vec<i64>, ys: Vec<i64>) -> Vec<Point> {
  xs.into_iter()
    .zip(ys)
    .map(|(x, y)| Point::new([x, y]))
    .collect()
}

fn parse_line(line: &str, line_no: usize, source: &Path) -> Result<i64> {
  // Surrounding whitespace (including '\r') is tolerated.
  let trimmed = line.trim();
  trimmed.parse::<i64>().map_err(|err| Error::Parse {
    path: source.to_path_buf(),
    line: line_no,
    content: line.to_string(),
    source: err,
  })
}
