//! Horizontal / vertical stacking

use crate::types::{Axis, Rect};

/// Place rectangles one after another along `axis`.
///
/// The first rectangle (the first selected shape) stays where it is and
/// provides the shared cross-axis coordinate. The others follow it in their
/// order along `axis`, each starting `gutter` after the end of its
/// predecessor. Fewer than two rectangles are returned unchanged. The result
/// is index-aligned with `rects`.
pub fn stack(rects: &[Rect], axis: Axis, gutter: f64) -> Vec<Rect> {
    let mut result = rects.to_vec();
    if rects.len() < 2 {
        return result;
    }

    let mut order: Vec<usize> = (1..rects.len()).collect();
    order.sort_by(|&a, &b| rects[a].start(axis).total_cmp(&rects[b].start(axis)));

    let anchor = rects[0];
    let cross = anchor.start(axis.cross());
    let mut next = anchor.end(axis) + gutter;
    for idx in order {
        let placed = rects[idx].with_start(axis.cross(), cross).with_start(axis, next);
        next = placed.end(axis) + gutter;
        result[idx] = placed;
    }
    result
}

pub fn stack_horizontal(rects: &[Rect], gutter: f64) -> Vec<Rect> {
    stack(rects, Axis::Horizontal, gutter)
}

pub fn stack_vertical(rects: &[Rect], gutter: f64) -> Vec<Rect> {
    stack(rects, Axis::Vertical, gutter)
}
