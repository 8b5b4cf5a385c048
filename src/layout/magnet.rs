//! Magnet: snap shapes against the edges of a reference shape.
//!
//! Each shape is assigned to one of four 90° sectors around the reference
//! center. Offsets are divided by the reference half size first, so a wide
//! reference widens its left/right sectors and a tall one its top/bottom
//! sectors (the same normalization as compass-point attachment on boxes).

use glam::DVec2;

use crate::types::{Axis, Rect, Side};

use super::Gutters;

/// Shape indices per reference side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagnetBuckets {
    pub right: Vec<usize>,
    pub left: Vec<usize>,
    pub top: Vec<usize>,
    pub bottom: Vec<usize>,
}

impl MagnetBuckets {
    pub fn get(&self, side: Side) -> &[usize] {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    fn push(&mut self, side: Side, idx: usize) {
        match side {
            Side::Right => self.right.push(idx),
            Side::Left => self.left.push(idx),
            Side::Top => self.top.push(idx),
            Side::Bottom => self.bottom.push(idx),
        }
    }
}

/// Offset of `rect`'s center from the reference center, in reference half sizes
pub fn normalized_offset(reference: &Rect, rect: &Rect) -> DVec2 {
    // A zero-sized reference still needs a sign-preserving division
    let half = reference.half_size().max(DVec2::splat(f64::MIN_POSITIVE));
    (rect.center() - reference.center()) / half
}

/// Side of `reference` that `rect` belongs to.
///
/// On the diagonals (`|sy| == |sx|`) the horizontal sides win. A rectangle
/// centered on the reference goes to the right.
pub fn classify(reference: &Rect, rect: &Rect) -> Side {
    let d = normalized_offset(reference, rect);
    if d == DVec2::ZERO {
        return Side::Right;
    }
    let (sx, sy) = (d.x, d.y);
    if sy.abs() <= sx {
        Side::Right
    } else if sy.abs() <= -sx {
        Side::Left
    } else if sy >= 0.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// Partition every rectangle except `reference` into its side bucket
pub fn partition(rects: &[Rect], reference: usize) -> MagnetBuckets {
    let mut buckets = MagnetBuckets::default();
    let Some(anchor) = rects.get(reference) else {
        return buckets;
    };
    for (idx, rect) in rects.iter().enumerate() {
        if idx != reference {
            buckets.push(classify(anchor, rect), idx);
        }
    }
    buckets
}

/// Snap all rectangles against `rects[reference]`.
///
/// Left/right buckets are stacked downwards from the reference top in top
/// order; top/bottom buckets are stacked rightwards from the reference left
/// in left order. The reference itself never moves.
pub fn magnet(rects: &[Rect], reference: usize, gutters: Gutters) -> Vec<Rect> {
    let mut result = rects.to_vec();
    if rects.len() < 2 || reference >= rects.len() {
        return result;
    }
    let anchor = rects[reference];
    let buckets = partition(rects, reference);

    for side in [Side::Right, Side::Bottom, Side::Left, Side::Top] {
        // Stacking runs perpendicular to the side's axis
        let along = side.axis().cross();
        let mut members = buckets.get(side).to_vec();
        members.sort_by(|&a, &b| rects[a].start(along).total_cmp(&rects[b].start(along)));

        let (along_gutter, gap) = match along {
            Axis::Vertical => (gutters.vertical, gutters.horizontal),
            Axis::Horizontal => (gutters.horizontal, gutters.vertical),
        };
        let mut cursor = anchor.start(along);
        for idx in members {
            let r = rects[idx];
            let across = match side {
                Side::Right => anchor.right() + gap,
                Side::Bottom => anchor.bottom() + gap,
                Side::Left => anchor.left - gap - r.width,
                Side::Top => anchor.top - gap - r.height,
            };
            let placed = r.with_start(side.axis(), across).with_start(along, cursor);
            cursor += placed.extent(along) + along_gutter;
            result[idx] = placed;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: Rect = Rect::new(100.0, 100.0, 40.0, 20.0);

    fn at(cx: f64, cy: f64) -> Rect {
        Rect::new(cx - 1.0, cy - 1.0, 2.0, 2.0)
    }

    #[test]
    fn sectors_follow_reference_aspect() {
        // Center is (120, 110), half size (20, 10)
        assert_eq!(classify(&REF, &at(150.0, 115.0)), Side::Right);
        assert_eq!(classify(&REF, &at(90.0, 105.0)), Side::Left);
        assert_eq!(classify(&REF, &at(120.0, 80.0)), Side::Top);
        assert_eq!(classify(&REF, &at(125.0, 140.0)), Side::Bottom);
        // 30 right, 12 down: in raw units it is right, normalized (1.5, 1.2) still right
        assert_eq!(classify(&REF, &at(150.0, 122.0)), Side::Right);
        // 20 right, 15 down normalizes to (1.0, 1.5): bottom
        assert_eq!(classify(&REF, &at(140.0, 125.0)), Side::Bottom);
    }

    #[test]
    fn diagonal_ties_go_to_horizontal_sides() {
        assert_eq!(classify(&REF, &at(140.0, 120.0)), Side::Right);
        assert_eq!(classify(&REF, &at(100.0, 120.0)), Side::Left);
        assert_eq!(classify(&REF, &at(140.0, 100.0)), Side::Right);
        assert_eq!(classify(&REF, &at(100.0, 100.0)), Side::Left);
        assert_eq!(classify(&Rect::new(0.0, 0.0, 20.0, 10.0), &Rect::new(25.0, 10.0, 10.0, 10.0)), Side::Right);
        assert_eq!(classify(&REF, &at(120.0, 110.0)), Side::Right);
    }

    #[test]
    fn partition_skips_reference() {
        let rects = [REF, at(200.0, 110.0), at(120.0, 300.0)];
        let buckets = partition(&rects, 0);
        assert_eq!(buckets.right, vec![1]);
        assert_eq!(buckets.bottom, vec![2]);
        assert!(buckets.left.is_empty() && buckets.top.is_empty());
    }

    #[test]
    fn snaps_to_each_edge() {
        let gutters = Gutters { horizontal: 5.0, vertical: 3.0 };
        let rects = [
            REF,
            Rect::new(300.0, 140.0, 10.0, 10.0), // right, lower
            Rect::new(300.0, 90.0, 10.0, 10.0),  // right, upper
            Rect::new(0.0, 100.0, 10.0, 10.0),   // left
            Rect::new(110.0, 0.0, 10.0, 10.0),   // top
            Rect::new(130.0, 300.0, 8.0, 10.0),  // bottom, right
            Rect::new(90.0, 300.0, 6.0, 10.0),   // bottom, left
        ];
        let out = magnet(&rects, 0, gutters);
        assert_eq!(out[0], REF);
        assert_eq!(out[2], Rect::new(145.0, 100.0, 10.0, 10.0));
        assert_eq!(out[1], Rect::new(145.0, 113.0, 10.0, 10.0));
        assert_eq!(out[3], Rect::new(85.0, 100.0, 10.0, 10.0));
        assert_eq!(out[4], Rect::new(100.0, 87.0, 10.0, 10.0));
        assert_eq!(out[6], Rect::new(100.0, 123.0, 6.0, 10.0));
        assert_eq!(out[5], Rect::new(111.0, 123.0, 8.0, 10.0));
    }

    #[test]
    fn missing_reference_is_noop() {
        let rects = [REF, at(0.0, 0.0)];
        assert_eq!(magnet(&rects, 7, Gutters::default()), rects.to_vec());
    }
}
