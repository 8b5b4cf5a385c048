//! Guide-based alignment and resizing

use crate::types::{Axis, Guide, Orientation, Rect, Side};

/// Positions closer than this count as lying on a guide.
///
/// The value is in document units and is not rescaled for other unit systems.
pub const GUIDE_EPSILON: f64 = 0.1;

/// Sorted guide positions along one axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideSet {
    positions: Vec<f64>,
}

impl GuideSet {
    /// Collect positions, dropping NaN and sorting ascending
    pub fn new(positions: impl IntoIterator<Item = f64>) -> Self {
        let mut positions: Vec<f64> = positions.into_iter().filter(|p| !p.is_nan()).collect();
        positions.sort_by(f64::total_cmp);
        GuideSet { positions }
    }

    /// Positions of the guides with the given orientation
    pub fn from_guides(guides: &[Guide], orientation: Orientation) -> Self {
        Self::new(guides.iter().filter(|g| g.orientation == orientation).map(|g| g.position))
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.positions.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.positions.last().copied()
    }

    /// Highest position `<= query + threshold`
    pub fn floor(&self, query: f64, threshold: f64) -> Option<f64> {
        let idx = self.positions.partition_point(|&p| p <= query + threshold);
        idx.checked_sub(1).map(|i| self.positions[i])
    }

    /// Lowest position `>= query - threshold`
    pub fn ceiling(&self, query: f64, threshold: f64) -> Option<f64> {
        let idx = self.positions.partition_point(|&p| p < query - threshold);
        self.positions.get(idx).copied()
    }
}

fn min_start(rects: &[Rect], axis: Axis) -> f64 {
    rects.iter().map(|r| r.start(axis)).fold(f64::INFINITY, f64::min)
}

fn max_end(rects: &[Rect], axis: Axis) -> f64 {
    rects.iter().map(|r| r.end(axis)).fold(f64::NEG_INFINITY, f64::max)
}

/// Move every rectangle so that its `side` edge lies on the guide nearest to
/// the selection's extent on that side.
///
/// Leading sides (left/top) use the floor guide of the minimum start,
/// trailing sides the ceiling guide of the maximum end; when no guide
/// qualifies the outermost guide on that side is used. Returns `None` when
/// there is nothing to align or nothing to align to.
pub fn align_to_guide(rects: &[Rect], side: Side, guides: &GuideSet, threshold: f64) -> Option<Vec<Rect>> {
    if rects.is_empty() || guides.is_empty() {
        return None;
    }
    let axis = side.axis();
    let out = if side.is_leading() {
        let target = guides.floor(min_start(rects, axis), threshold).or(guides.first())?;
        rects.iter().map(|r| r.with_start(axis, target)).collect()
    } else {
        let target = guides.ceiling(max_end(rects, axis), threshold).or(guides.last())?;
        rects.iter().map(|r| r.with_start(axis, target - r.extent(axis))).collect()
    };
    Some(out)
}

/// The pair of guides enclosing the selection along `axis`.
///
/// Needs at least two guides and a pair that does not collapse to a point.
pub fn guide_span(rects: &[Rect], axis: Axis, guides: &GuideSet, threshold: f64) -> Option<(f64, f64)> {
    if rects.is_empty() || guides.len() < 2 {
        return None;
    }
    let low = guides.floor(min_start(rects, axis), threshold).or(guides.first())?;
    let high = guides.ceiling(max_end(rects, axis), threshold).or(guides.last())?;
    if high <= low {
        return None;
    }
    Some((low, high))
}

/// Stretch every rectangle along `axis` to exactly span [`guide_span`]
pub fn resize_to_guides(rects: &[Rect], axis: Axis, guides: &GuideSet, threshold: f64) -> Option<Vec<Rect>> {
    let (low, high) = guide_span(rects, axis, guides, threshold)?;
    Some(rects.iter().map(|r| r.with_start(axis, low).with_extent(axis, high - low)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guides() -> GuideSet {
        GuideSet::new([100.0, 0.0, 50.0])
    }

    #[test]
    fn floor_and_ceiling() {
        let g = guides();
        assert_eq!(g.floor(60.0, GUIDE_EPSILON), Some(50.0));
        assert_eq!(g.ceiling(60.0, GUIDE_EPSILON), Some(100.0));
        assert_eq!(g.floor(50.05, GUIDE_EPSILON), Some(50.0));
        assert_eq!(g.ceiling(50.05, GUIDE_EPSILON), Some(50.0));
        assert_eq!(g.floor(-1.0, GUIDE_EPSILON), None);
        assert_eq!(g.ceiling(100.5, GUIDE_EPSILON), None);
    }

    #[test]
    fn from_guides_filters_orientation() {
        let list = [
            Guide::new(30.0, Orientation::Vertical),
            Guide::new(10.0, Orientation::Horizontal),
            Guide::new(20.0, Orientation::Vertical),
        ];
        assert_eq!(GuideSet::from_guides(&list, Orientation::Vertical).positions(), &[20.0, 30.0]);
    }

    #[test]
    fn align_left_and_right() {
        let rects = [Rect::new(55.0, 0.0, 10.0, 10.0), Rect::new(70.0, 5.0, 20.0, 10.0)];
        let left = align_to_guide(&rects, Side::Left, &guides(), GUIDE_EPSILON).unwrap();
        assert_eq!(left, vec![Rect::new(50.0, 0.0, 10.0, 10.0), Rect::new(50.0, 5.0, 20.0, 10.0)]);
        let right = align_to_guide(&rects, Side::Right, &guides(), GUIDE_EPSILON).unwrap();
        assert_eq!(right, vec![Rect::new(90.0, 0.0, 10.0, 10.0), Rect::new(80.0, 5.0, 20.0, 10.0)]);
    }

    #[test]
    fn align_falls_back_to_outermost_guide() {
        let rects = [Rect::new(-20.0, 0.0, 5.0, 5.0)];
        let left = align_to_guide(&rects, Side::Left, &guides(), GUIDE_EPSILON).unwrap();
        assert_eq!(left[0].left, 0.0);
        let rects = [Rect::new(0.0, 98.0, 5.0, 5.0)];
        let bottom = align_to_guide(&rects, Side::Bottom, &guides(), GUIDE_EPSILON).unwrap();
        assert_eq!(bottom[0].top, 95.0);
    }

    #[test]
    fn align_without_guides_is_none() {
        let rects = [Rect::new(0.0, 0.0, 1.0, 1.0)];
        assert_eq!(align_to_guide(&rects, Side::Top, &GuideSet::default(), GUIDE_EPSILON), None);
        assert_eq!(align_to_guide(&[], Side::Top, &guides(), GUIDE_EPSILON), None);
    }

    #[test]
    fn resize_spans_enclosing_guides() {
        let rects = [Rect::new(10.0, 60.0, 5.0, 10.0), Rect::new(0.0, 55.0, 5.0, 5.0)];
        let out = resize_to_guides(&rects, Axis::Vertical, &guides(), GUIDE_EPSILON).unwrap();
        assert_eq!(out, vec![Rect::new(10.0, 50.0, 5.0, 50.0), Rect::new(0.0, 50.0, 5.0, 50.0)]);
    }

    #[test]
    fn resize_needs_two_distinct_guides() {
        let rects = [Rect::new(50.0, 0.0, 0.0, 0.0)];
        assert_eq!(guide_span(&rects, Axis::Horizontal, &GuideSet::new([50.0]), GUIDE_EPSILON), None);
        // Both searches land on the guide at 50
        assert_eq!(guide_span(&rects, Axis::Horizontal, &guides(), GUIDE_EPSILON), None);
    }
}
