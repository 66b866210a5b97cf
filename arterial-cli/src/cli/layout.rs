//! Circular placement of intersections for rendering.

use std::f64::consts::TAU;

use serde::Serialize;

/// Radius used when `--radius` is not given.
pub const DEFAULT_RADIUS: f64 = 200.0;

/// Position of one vertex on the layout circle, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VertexPosition {
    /// Vertex index.
    pub vertex: usize,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Places `vertex_count` vertices evenly on a circle of `radius`, starting
/// at angle zero and proceeding counter-clockwise in index order.
///
/// # Examples
/// ```
/// use arterial_cli::cli::circular_layout;
///
/// let layout = circular_layout(4, 10.0);
/// assert_eq!(layout.len(), 4);
/// assert!((layout[0].x - 10.0).abs() < 1e-9);
/// assert!((layout[1].y - 10.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn circular_layout(vertex_count: usize, radius: f64) -> Vec<VertexPosition> {
    let step = TAU / vertex_count.max(1) as f64;
    (0..vertex_count)
        .map(|vertex| {
            let angle = step * vertex as f64;
            VertexPosition {
                vertex,
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        })
        .collect()
}
