//! Spline to SVG path conversion
//!
//! Converts the control points of one spline into path commands, widening
//! the export's bounding box as points are consumed.

use std::fmt;

use crate::geometry::{BoundingBox, Vec2};
use crate::scene::{BezierPoint, Spline};

/// One SVG path drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo { x: f64, y: f64 },
    /// Cubic Bezier curve
    CurveTo {
        h1x: f64,
        h1y: f64,
        h2x: f64,
        h2y: f64,
        x: f64,
        y: f64,
    },
    /// Close the current subpath
    ClosePath,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo { x, y } => write!(f, "M {},{}", x, y),
            PathCommand::CurveTo {
                h1x,
                h1y,
                h2x,
                h2y,
                x,
                y,
            } => write!(f, "C {},{} {},{} {},{}", h1x, h1y, h2x, h2y, x, y),
            PathCommand::ClosePath => f.write_str("Z"),
        }
    }
}

/// Join commands into an SVG `d` attribute value
pub fn to_path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|cmd| cmd.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the commands for one spline.
///
/// The first point moves to its anchor; every later point draws a cubic
/// curve from the previous point's right handle through its own left handle.
pub struct PathBuilder<'a> {
    origin: Vec2,
    precision: u32,
    bounds: &'a mut BoundingBox,
    commands: Vec<PathCommand>,
    prev_handle: Option<Vec2>,
}

impl<'a> PathBuilder<'a> {
    /// `origin` is the owning object's (already rounded) location; it only
    /// offsets the bounding box, commands stay in object space.
    pub fn new(origin: Vec2, precision: u32, bounds: &'a mut BoundingBox) -> Self {
        Self {
            origin,
            precision,
            bounds,
            commands: vec![],
            prev_handle: None,
        }
    }

    /// Consume the next point of the spline
    pub fn push_point(&mut self, point: &BezierPoint) {
        let co = point.co.rounded(self.precision);
        let left = point.handle_left.rounded(self.precision);
        let right = point.handle_right.rounded(self.precision);

        let cmd = match self.prev_handle {
            None => PathCommand::MoveTo { x: co.x, y: co.y },
            Some(prev) => PathCommand::CurveTo {
                h1x: prev.x,
                h1y: prev.y,
                h2x: left.x,
                h2y: left.y,
                x: co.x,
                y: co.y,
            },
        };
        self.commands.push(cmd);
        self.prev_handle = Some(right);

        // Handles are included so the curve's bulge stays inside the box
        for p in [co, right, left] {
            self.bounds.include(p.offset(self.origin));
        }
    }

    /// Curve back to `first` and close the subpath
    pub fn close(&mut self, first: &BezierPoint) {
        self.push_point(first);
        self.commands.push(PathCommand::ClosePath);
    }

    pub fn finish(self) -> Vec<PathCommand> {
        self.commands
    }
}

/// Build the commands for `spline`, widening `bounds` by every point visited
pub fn build_spline_path(
    spline: &Spline,
    origin: Vec2,
    precision: u32,
    bounds: &mut BoundingBox,
) -> Vec<PathCommand> {
    let mut builder = PathBuilder::new(origin, precision, bounds);
    for point in &spline.points {
        builder.push_point(point);
    }
    if spline.cyclic {
        if let Some(first) = spline.points.first() {
            builder.close(first);
        }
    }
    builder.finish()
}
