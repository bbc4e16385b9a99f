//! Content bounds: the minimal box enclosing every coordinate a path
//! references.
//!
//! Relative commands are resolved against a running cursor so the
//! accumulated extents are always in absolute document coordinates. Curve
//! control points count as referenced coordinates; arc radii, rotation and
//! flags do not.

use glam::DVec2;

use crate::errors::BoundsError;
use crate::path::{PathCommand, PathData};
use crate::types::Bounds;

#[derive(Debug, Default)]
struct BoundsAccumulator {
    min: DVec2,
    max: DVec2,
    any: bool,
}

impl BoundsAccumulator {
    fn include(&mut self, p: DVec2) {
        if self.any {
            self.min = self.min.min(p);
            self.max = self.max.max(p);
        } else {
            self.min = p;
            self.max = p;
            self.any = true;
        }
    }

    fn finish(&self) -> Option<Bounds> {
        self.any
            .then(|| Bounds::new(self.min.x, self.min.y, self.max.x, self.max.y))
    }
}

/// Compute the bounding box of every coordinate referenced by `paths`.
///
/// Fails with [`BoundsError::EmptyContent`] when no coordinate data exists
/// at all; the caller decides whether that is fatal (the pipeline treats it
/// as a warning and falls back to [`Bounds::ZERO`] semantics).
pub fn compute_bounds(paths: &[String]) -> Result<Bounds, BoundsError> {
    let mut acc = BoundsAccumulator::default();
    for d in paths {
        let data = PathData::parse(d)?;
        trace_path(&data, &mut acc);
    }
    acc.finish().ok_or(BoundsError::EmptyContent)
}

fn resolve(abs: bool, cursor: DVec2, p: DVec2) -> DVec2 {
    if abs { p } else { cursor + p }
}

/// Walk one path, feeding every resolved coordinate pair to the accumulator.
fn trace_path(data: &PathData, acc: &mut BoundsAccumulator) {
    let mut cursor = DVec2::ZERO;
    let mut subpath_start = DVec2::ZERO;

    for command in &data.commands {
        match *command {
            PathCommand::Move { abs, to } => {
                cursor = resolve(abs, cursor, to);
                subpath_start = cursor;
                acc.include(cursor);
            }
            PathCommand::Line { abs, to } | PathCommand::SmoothQuad { abs, to } => {
                cursor = resolve(abs, cursor, to);
                acc.include(cursor);
            }
            PathCommand::HLine { abs, x } => {
                cursor.x = if abs { x } else { cursor.x + x };
                acc.include(cursor);
            }
            PathCommand::VLine { abs, y } => {
                cursor.y = if abs { y } else { cursor.y + y };
                acc.include(cursor);
            }
            PathCommand::Cubic { abs, c1, c2, to } => {
                acc.include(resolve(abs, cursor, c1));
                acc.include(resolve(abs, cursor, c2));
                cursor = resolve(abs, cursor, to);
                acc.include(cursor);
            }
            PathCommand::SmoothCubic { abs, c2, to } => {
                acc.include(resolve(abs, cursor, c2));
                cursor = resolve(abs, cursor, to);
                acc.include(cursor);
            }
            PathCommand::Quad { abs, c, to } => {
                acc.include(resolve(abs, cursor, c));
                cursor = resolve(abs, cursor, to);
                acc.include(cursor);
            }
            // Radii and rotation are not coordinates; only the endpoint
            // lands somewhere.
            PathCommand::Arc { abs, to, .. } => {
                cursor = resolve(abs, cursor, to);
                acc.include(cursor);
            }
            PathCommand::Close => {
                cursor = subpath_start;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_of(paths: &[&str]) -> Bounds {
        let owned: Vec<String> = paths.iter().map(|s| s.to_string()).collect();
        compute_bounds(&owned).unwrap()
    }

    #[test]
    fn single_line_bounds() {
        let b = bounds_of(&["M 10 10 L 90 90"]);
        assert_eq!(b, Bounds::new(10.0, 10.0, 90.0, 90.0));
    }

    #[test]
    fn union_over_multiple_paths() {
        let b = bounds_of(&["M 10 10 L 20 20", "M -5 0 L 0 50"]);
        assert_eq!(b, Bounds::new(-5.0, 0.0, 20.0, 50.0));
    }

    #[test]
    fn relative_commands_resolve_against_cursor() {
        let b = bounds_of(&["M 10 10 l 20 0 v 30"]);
        assert_eq!(b, Bounds::new(10.0, 10.0, 30.0, 40.0));
    }

    #[test]
    fn leading_relative_move_starts_from_origin() {
        let b = bounds_of(&["m 5 5 l 10 10"]);
        assert_eq!(b, Bounds::new(5.0, 5.0, 15.0, 15.0));
    }

    #[test]
    fn control_points_count() {
        let b = bounds_of(&["M 10 10 C 0 0 120 120 50 50"]);
        assert_eq!(b, Bounds::new(0.0, 0.0, 120.0, 120.0));
    }

    #[test]
    fn arc_radii_do_not_count() {
        let b = bounds_of(&["M 10 10 A 500 500 0 0 1 20 20"]);
        assert_eq!(b, Bounds::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn close_returns_to_subpath_start() {
        // The h after Z continues from the subpath start, not from (30, 10).
        let b = bounds_of(&["M 10 10 h 20 Z h -5"]);
        assert_eq!(b, Bounds::new(5.0, 10.0, 30.0, 10.0));
    }

    #[test]
    fn no_paths_is_empty_content() {
        assert!(matches!(
            compute_bounds(&[]),
            Err(BoundsError::EmptyContent)
        ));
        assert!(matches!(
            compute_bounds(&["".to_string()]),
            Err(BoundsError::EmptyContent)
        ));
    }

    #[test]
    fn bad_path_data_propagates() {
        assert!(matches!(
            compute_bounds(&["garbage".to_string()]),
            Err(BoundsError::PathData(_))
        ));
    }
}
