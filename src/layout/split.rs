//! Splitting a rectangle into a grid of cells

use crate::types::Rect;

use super::Gutters;

/// Largest number of cells a split may produce
pub const MAX_CELLS: u32 = 10_000;

fn cell_count(rows: u32, columns: u32) -> Option<u32> {
    rows.checked_mul(columns).filter(|&n| n <= MAX_CELLS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitParams {
    pub rows: u32,
    pub columns: u32,
    pub gutters: Gutters,
}

impl SplitParams {
    /// Parse a `RxC` argument such as `2x3` (rows by columns); grids above
    /// [`MAX_CELLS`] are refused
    pub fn parse_grid(arg: &str) -> Option<(u32, u32)> {
        let (rows, columns) = arg.split_once(['x', 'X'])?;
        let rows: u32 = rows.trim().parse().ok()?;
        let columns: u32 = columns.trim().parse().ok()?;
        (rows >= 1 && columns >= 1 && cell_count(rows, columns).is_some()).then_some((rows, columns))
    }
}

/// Cells of `rect`, row by row, or `None` when the split is a no-op
/// (1×1, zero rows/columns), the grid has more than [`MAX_CELLS`] cells, or a
/// cell would have no area.
pub fn split_cells(rect: &Rect, params: &SplitParams) -> Option<Vec<Rect>> {
    let (rows, columns) = (params.rows, params.columns);
    if rows == 0 || columns == 0 || (rows == 1 && columns == 1) {
        return None;
    }
    let count = cell_count(rows, columns)?;
    let cell_height = (rect.height - f64::from(rows - 1) * params.gutters.vertical) / f64::from(rows);
    let cell_width = (rect.width - f64::from(columns - 1) * params.gutters.horizontal) / f64::from(columns);
    if cell_height <= 0.0 || cell_width <= 0.0 {
        return None;
    }

    let mut cells = Vec::with_capacity(count as usize);
    let mut top = rect.top;
    for _ in 0..rows {
        let mut left = rect.left;
        for _ in 0..columns {
            cells.push(Rect::new(left, top, cell_width, cell_height));
            left += cell_width + params.gutters.horizontal;
        }
        top += cell_height + params.gutters.vertical;
    }
    Some(cells)
}
