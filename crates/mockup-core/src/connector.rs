// File: crates/mockup-core/src/connector.rs
// Summary: Arrows and polyline connectors for diagrams.

use skia_safe as skia;

use crate::canvas::Canvas;
use crate::geometry::Point;

/// Arrowhead length in pixels.
pub const ARROW_SIZE: i32 = 10;

/// Cardinal direction an arrowhead points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Pick the head direction from the sign of (end - start) on the dominant axis.
/// Ties between axes go vertical; a zero-length segment points left.
pub fn arrow_direction(start: Point, end: Point) -> Direction {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dy != 0 && dy.abs() >= dx.abs() {
        if dy > 0 { Direction::Down } else { Direction::Up }
    } else if dx > 0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Triangle with its tip at `tip`, opening back against `dir`.
pub fn arrowhead(tip: Point, dir: Direction, size: i32) -> [Point; 3] {
    let half = size / 2;
    match dir {
        Direction::Down => [tip, tip.offset(-half, -size), tip.offset(half, -size)],
        Direction::Up => [tip, tip.offset(-half, size), tip.offset(half, size)],
        Direction::Right => [tip, tip.offset(-size, -half), tip.offset(-size, half)],
        Direction::Left => [tip, tip.offset(size, -half), tip.offset(size, half)],
    }
}

/// 2 px segment with a triangular head at `end`.
pub fn arrow(canvas: &mut Canvas, start: Point, end: Point, color: skia::Color) {
    canvas.line(start, end, color, 2.0);
    let head = arrowhead(end, arrow_direction(start, end), ARROW_SIZE);
    canvas.fill_polygon(&head, color);
}

/// Polyline through `points`, with an arrowhead on the last segment when `head` is set.
pub fn connector(canvas: &mut Canvas, points: &[Point], color: skia::Color, head: bool) {
    canvas.polyline(points, color, 2.0);
    if head {
        if let [.., from, to] = points {
            let tri = arrowhead(*to, arrow_direction(*from, *to), ARROW_SIZE - 2);
            canvas.fill_polygon(&tri, color);
        }
    }
}
