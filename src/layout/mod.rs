//! Shape layout algorithms
//!
//! Every algorithm here is a pure function from the current rectangles (and
//! parameters) to the new rectangles, index-aligned with the input. Actions
//! read the rectangles from the host, call one of these, and write back only
//! what changed. The same functions drive the arrange preview dialog.
//!
//! - `cluster`: row/column banding with the one-eighth tolerance
//! - `stack`: horizontal and vertical stacking
//! - `grid`: grid alignment with optional uniform sizes
//! - `magnet`: sector partition around a reference and edge snapping
//! - `guides`: floor/ceiling guide search, align and resize to guides
//! - `split`: splitting a rectangle into cells
//! - `preview`: live preview sessions over host shapes

pub mod cluster;
pub mod grid;
pub mod guides;
pub mod magnet;
pub mod preview;
pub mod split;
pub mod stack;

pub use cluster::{Cluster, make_columns, make_rows};
pub use grid::grid_align;
pub use guides::{GUIDE_EPSILON, GuideSet, align_to_guide, guide_span, resize_to_guides};
pub use magnet::{MagnetBuckets, classify, magnet, partition};
pub use preview::ArrangePreview;
pub use split::{MAX_CELLS, SplitParams, split_cells};
pub use stack::{stack, stack_horizontal, stack_vertical};

use crate::errors::LayoutError;
use crate::settings::LayoutSettings;
use crate::types::{Axis, Rect};

/// Spacing between neighbouring shapes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gutters {
    /// Between shapes placed side by side
    pub horizontal: f64,
    /// Between shapes placed one above the other
    pub vertical: f64,
}

impl Gutters {
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Parameters shared by the arrange commands
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrangeParams {
    pub gutters: Gutters,
    /// Give every shape of a column the widest width in that column
    pub uniform_width: bool,
    /// Give every shape of a row the tallest height in that row
    pub uniform_height: bool,
}

impl From<&LayoutSettings> for ArrangeParams {
    fn from(settings: &LayoutSettings) -> Self {
        ArrangeParams {
            gutters: settings.gutters(),
            uniform_width: settings.horizontal_resize,
            uniform_height: settings.vertical_resize,
        }
    }
}

/// The arrange commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrangeKind {
    Horizontal,
    Vertical,
    Grid,
    /// Snap against the first rectangle
    Magnet,
}

/// Run one arrange algorithm.
///
/// Fewer than two rectangles come back unchanged for every kind.
pub fn arrange(kind: ArrangeKind, rects: &[Rect], params: &ArrangeParams) -> Result<Vec<Rect>, LayoutError> {
    Ok(match kind {
        ArrangeKind::Horizontal => stack_horizontal(rects, params.gutters.horizontal),
        ArrangeKind::Vertical => stack_vertical(rects, params.gutters.vertical),
        ArrangeKind::Grid => grid_align(rects, params)?,
        ArrangeKind::Magnet => magnet(rects, 0, params.gutters),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_from_settings() {
        let settings = LayoutSettings { horizontal_gutter: 3.0, vertical_resize: true, ..Default::default() };
        let params = ArrangeParams::from(&settings);
        assert_eq!(params.gutters.horizontal, 3.0);
        assert_eq!(params.gutters.along(Axis::Vertical), settings.vertical_gutter);
        assert!(params.uniform_height && !params.uniform_width);
    }

    #[test]
    fn every_kind_ignores_singletons() {
        let rects = [Rect::new(1.0, 2.0, 3.0, 4.0)];
        for kind in [ArrangeKind::Horizontal, ArrangeKind::Vertical, ArrangeKind::Grid, ArrangeKind::Magnet] {
            assert_eq!(arrange(kind, &rects, &ArrangeParams::default()).unwrap(), rects.to_vec());
        }
    }
}
