// ABOUTME: Distance from a point to an element's bounding box.
// ABOUTME: Zero inside, the edge gap when aligned on one axis, corner distance otherwise.

use serde::Serialize;

use crate::builder::El;
use crate::dom::{Document, NodeId, Point, Rect};

/// A box and the distance from the queried point to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Distance {
    pub rect: Rect,
    pub distance: f64,
}

/// Distance from `point` to `rect`.
///
/// Edges count as inside. When the point lies within the box's horizontal
/// span only the vertical gap counts, and vice versa; otherwise the result is
/// the straight-line distance to the nearest corner.
pub fn distance_to_rect(rect: Rect, point: Point) -> f64 {
    let in_x = rect.spans_x(point.left);
    let in_y = rect.spans_y(point.top);

    let dx = (point.left - rect.left)
        .abs()
        .min((point.left - rect.right).abs());
    let dy = (point.top - rect.top).abs().min((point.top - rect.bottom).abs());

    match (in_x, in_y) {
        (true, true) => 0.0,
        (true, false) => dy,
        (false, true) => dx,
        (false, false) => (dx * dx + dy * dy).sqrt(),
    }
}

impl El {
    /// Measures from `point` to the bounding box of `target`.
    pub fn distance(&self, doc: &Document, target: NodeId, point: Point) -> Distance {
        let rect = doc.bounding_client_rect(target);
        Distance {
            rect,
            distance: distance_to_rect(rect, point),
        }
    }
}
