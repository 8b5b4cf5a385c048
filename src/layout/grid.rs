//! Grid alignment: rows and columns aligned independently

use crate::errors::LayoutError;
use crate::types::{Axis, Rect};

use super::ArrangeParams;
use super::cluster::{Cluster, make_bands};

/// Align rectangles into a grid.
///
/// Rows and columns are both clustered from the input positions, so the row
/// pass (tops, heights) and the column pass (lefts, widths) are independent
/// and their order does not matter.
pub fn grid_align(rects: &[Rect], params: &ArrangeParams) -> Result<Vec<Rect>, LayoutError> {
    if rects.len() < 2 {
        return Ok(rects.to_vec());
    }

    let rows = make_bands(rects, Axis::Vertical)?;
    let columns = make_bands(rects, Axis::Horizontal)?;
    let vertical = align_bands(rects, &rows, Axis::Vertical, params.gutters.vertical, params.uniform_height);
    let horizontal =
        align_bands(rects, &columns, Axis::Horizontal, params.gutters.horizontal, params.uniform_width);

    Ok(vertical
        .into_iter()
        .zip(horizontal)
        .map(|((top, height), (left, width))| Rect::new(left, top, width, height))
        .collect())
}

/// Returns `(start, extent)` along `axis` for every rectangle, index-aligned
fn align_bands(rects: &[Rect], bands: &[Cluster], axis: Axis, gutter: f64, uniform: bool) -> Vec<(f64, f64)> {
    let mut placed: Vec<(f64, f64)> = rects.iter().map(|r| (r.start(axis), r.extent(axis))).collect();

    let mut pos = bands[0]
        .iter()
        .map(|&i| rects[i].start(axis))
        .fold(f64::INFINITY, f64::min);

    for band in bands {
        let band_extent = band.iter().map(|&i| rects[i].extent(axis)).fold(0.0, f64::max);
        let mut next = pos;
        for &i in band {
            let extent = if uniform { band_extent } else { rects[i].extent(axis) };
            placed[i] = (pos, extent);
            next = next.max(pos + extent + gutter);
        }
        pos = next;
    }
    placed
}
