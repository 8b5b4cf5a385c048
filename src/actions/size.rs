//! Giving shapes the size or adjustments of the first selected shape

use crate::errors::{DispatchError, HostError};
use crate::host::{Host, ShapeRef};
use crate::log::debug;
use crate::types::Axis;

use super::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonizeSizeAction {
    dimension: Dimension,
}

impl HarmonizeSizeAction {
    pub const fn new(dimension: Dimension) -> Self {
        HarmonizeSizeAction { dimension }
    }
}

impl Action for HarmonizeSizeAction {
    fn id(&self) -> &'static str {
        match self.dimension {
            Dimension::Width => "harmonize_shape_width",
            Dimension::Height => "harmonize_shape_height",
            Dimension::Both => "harmonize_shape_size",
        }
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(host.selected_shapes()?.len() >= 2)
    }

    fn run(&self, host: &dyn Host, _arg: &str) -> Result<bool, DispatchError> {
        let shapes = host.selected_shapes()?;
        let Some((reference, others)) = shapes.split_first() else {
            return Ok(false);
        };
        debug!("{} from {} onto {} shapes", self.id(), reference.id(), others.len());

        let size = reference.rect()?;
        for shape in others {
            let rect = shape.rect()?;
            let resized = match self.dimension {
                Dimension::Width => rect.with_extent(Axis::Horizontal, size.width),
                Dimension::Height => rect.with_extent(Axis::Vertical, size.height),
                Dimension::Both => rect.with_extent(Axis::Horizontal, size.width).with_extent(Axis::Vertical, size.height),
            };
            if resized != rect {
                shape.set_rect(resized)?;
            }
        }
        Ok(false)
    }
}

/// Copies the adjustment handles of the first autoshape to the others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonizeAdjustmentsAction;

/// Adjustments of the first shape, if it has any and all shapes have the same count
fn shared_layout(shapes: &[ShapeRef]) -> Result<Option<Vec<f64>>, HostError> {
    let Some(reference) = shapes.first() else {
        return Ok(None);
    };
    let values = reference.adjustments()?;
    if values.is_empty() {
        return Ok(None);
    }
    for shape in &shapes[1..] {
        if shape.adjustments()?.len() != values.len() {
            return Ok(None);
        }
    }
    Ok(Some(values))
}

impl Action for HarmonizeAdjustmentsAction {
    fn id(&self) -> &'static str {
        "harmonize_adjustments"
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        let shapes = host.selected_auto_shapes()?;
        Ok(shapes.len() > 1 && shared_layout(&shapes)?.is_some())
    }

    fn run(&self, host: &dyn Host, _arg: &str) -> Result<bool, DispatchError> {
        let shapes = host.selected_auto_shapes()?;
        if shapes.len() < 2 {
            return Ok(false);
        }
        let Some(values) = shared_layout(&shapes)? else {
            return Ok(false);
        };
        debug!("harmonizing {} adjustments over {} shapes", values.len(), shapes.len());

        for shape in &shapes[1..] {
            for (index, value) in values.iter().enumerate() {
                shape.set_adjustment(index, *value)?;
            }
        }
        Ok(false)
    }
}
