//! Row/column clustering by scanline sweep.
//!
//! Rectangles are banded by their inner three quarters along the sweep axis:
//! a rectangle joins the current band unless its top eighth starts below the
//! lowest seven-eighths line seen so far. This absorbs small misalignments
//! between shapes that are meant to share a row.

use crate::errors::LayoutError;
use crate::types::{Axis, Rect};

/// A band of rectangle indices, in sweep order
pub type Cluster = Vec<usize>;

const LEAD_FRACTION: f64 = 1.0 / 8.0;
const TRAIL_FRACTION: f64 = 7.0 / 8.0;

#[inline]
fn lead(r: &Rect, axis: Axis) -> f64 {
    r.start(axis) + r.extent(axis) * LEAD_FRACTION
}

#[inline]
fn trail(r: &Rect, axis: Axis) -> f64 {
    r.start(axis) + r.extent(axis) * TRAIL_FRACTION
}

/// Group rectangles into bands along `axis`.
///
/// `Axis::Vertical` sweeps top to bottom and yields rows; `Axis::Horizontal`
/// sweeps left to right and yields columns. Returned clusters hold indices
/// into `rects`.
pub fn make_bands(rects: &[Rect], axis: Axis) -> Result<Vec<Cluster>, LayoutError> {
    if rects.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let mut order: Vec<usize> = (0..rects.len()).collect();
    order.sort_by(|&a, &b| lead(&rects[a], axis).total_cmp(&lead(&rects[b], axis)));

    let mut result = Vec::new();
    let mut current = Vec::new();
    let mut scanline = trail(&rects[order[0]], axis);
    for idx in order {
        let r = &rects[idx];
        if lead(r, axis) > scanline {
            result.push(std::mem::take(&mut current));
        }
        current.push(idx);
        scanline = scanline.max(trail(r, axis));
    }
    if !current.is_empty() {
        result.push(current);
    }
    Ok(result)
}

/// Rows, top to bottom
pub fn make_rows(rects: &[Rect]) -> Result<Vec<Cluster>, LayoutError> {
    make_bands(rects, Axis::Vertical)
}

/// Columns, left to right
pub fn make_columns(rects: &[Rect]) -> Result<Vec<Cluster>, LayoutError> {
    make_bands(rects, Axis::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect::new(left, top, width, height)
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(make_rows(&[]), Err(LayoutError::EmptyInput));
    }

    #[test]
    fn separated_rows() {
        let rects = [
            r(0.0, 0.0, 10.0, 10.0),
            r(12.0, 1.0, 10.0, 10.0),
            r(0.0, 15.0, 10.0, 10.0),
        ];
        assert_eq!(make_rows(&rects).unwrap(), vec![vec![0, 1], vec![2]]);
        assert_eq!(make_columns(&rects).unwrap(), vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn slight_overlap_still_splits() {
        // Second shape overlaps the first by 1 unit: less than an eighth of its height
        let rects = [r(0.0, 0.0, 10.0, 16.0), r(0.0, 15.0, 10.0, 16.0)];
        assert_eq!(make_rows(&rects).unwrap(), vec![vec![0], vec![1]]);
    }

    #[test]
    fn near_miss_alignment_joins() {
        // Top differs by 2 out of 20: inside the one-eighth band
        let rects = [r(50.0, 2.0, 10.0, 20.0), r(0.0, 0.0, 10.0, 20.0)];
        assert_eq!(make_rows(&rects).unwrap(), vec![vec![1, 0]]);
    }

    #[test]
    fn tall_shape_spans_two_rows() {
        let rects = [
            r(0.0, 0.0, 10.0, 50.0),
            r(20.0, 0.0, 10.0, 10.0),
            r(20.0, 30.0, 10.0, 10.0),
        ];
        // The tall shape keeps the scanline low, so all three share a row
        assert_eq!(make_rows(&rects).unwrap(), vec![vec![1, 0, 2]]);
    }

    #[test]
    fn single_rectangle() {
        assert_eq!(make_columns(&[r(3.0, 4.0, 0.0, 0.0)]).unwrap(), vec![vec![0]]);
    }
}
