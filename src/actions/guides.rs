//! Aligning and resizing shapes to guides

use crate::errors::{DispatchError, HostError};
use crate::host::{Host, read_rects, write_changed};
use crate::layout::{GUIDE_EPSILON, GuideSet, align_to_guide, guide_span, resize_to_guides};
use crate::log::debug;
use crate::types::{Axis, Orientation, Side};

use super::Action;

fn guide_set(host: &dyn Host, axis: Axis) -> Result<GuideSet, HostError> {
    let orientation = Orientation::for_axis(axis);
    Ok(GuideSet::from_guides(&host.guides(orientation)?, orientation))
}

/// `align_guide:<left|right|top|bottom>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignGuideAction;

impl Action for AlignGuideAction {
    fn id(&self) -> &'static str {
        "align_guide"
    }

    fn is_enabled(&self, host: &dyn Host, arg: &str) -> Result<bool, HostError> {
        let Some(side) = Side::from_arg(arg) else {
            return Ok(false);
        };
        Ok(!host.selected_shapes()?.is_empty() && !guide_set(host, side.axis())?.is_empty())
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        let Some(side) = Side::from_arg(arg) else {
            return Ok(false);
        };
        let shapes = host.selected_shapes()?;
        let guides = guide_set(host, side.axis())?;
        debug!("align {} shapes to {} of {} guides", shapes.len(), arg, guides.len());

        let before = read_rects(&shapes)?;
        if let Some(after) = align_to_guide(&before, side, &guides, GUIDE_EPSILON) {
            write_changed(&shapes, &before, &after)?;
        }
        Ok(false)
    }
}

/// `resize_guide:<horizontal|vertical>`: stretch between the enclosing guides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGuideAction;

fn resize_axis(arg: &str) -> Option<Axis> {
    match arg {
        "horizontal" => Some(Axis::Horizontal),
        "vertical" => Some(Axis::Vertical),
        _ => None,
    }
}

impl Action for ResizeGuideAction {
    fn id(&self) -> &'static str {
        "resize_guide"
    }

    fn is_enabled(&self, host: &dyn Host, arg: &str) -> Result<bool, HostError> {
        let Some(axis) = resize_axis(arg) else {
            return Ok(false);
        };
        let rects = read_rects(&host.selected_shapes()?)?;
        Ok(guide_span(&rects, axis, &guide_set(host, axis)?, GUIDE_EPSILON).is_some())
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        let Some(axis) = resize_axis(arg) else {
            return Ok(false);
        };
        let shapes = host.selected_shapes()?;
        debug!("resize {} shapes between guides ({})", shapes.len(), arg);

        let before = read_rects(&shapes)?;
        if let Some(after) = resize_to_guides(&before, axis, &guide_set(host, axis)?, GUIDE_EPSILON) {
            write_changed(&shapes, &before, &after)?;
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AutoShapeType, Shape};
    use crate::memory::MemoryHost;
    use crate::types::Rect;

    fn host_with_guides() -> MemoryHost {
        let host = MemoryHost::new();
        host.add_guide(0.0, Orientation::Vertical);
        host.add_guide(50.0, Orientation::Vertical);
        host.add_guide(100.0, Orientation::Vertical);
        host
    }

    #[test]
    fn align_left_uses_floor_guide() {
        let host = host_with_guides();
        let a = host.slide().add_auto_shape(AutoShapeType::Rectangle, Rect::new(60.0, 0.0, 10.0, 10.0));
        host.select(&[a.clone()]);
        assert!(AlignGuideAction.is_enabled(&host, "left").unwrap());
        assert!(!AlignGuideAction.is_enabled(&host, "top").unwrap());
        assert!(!AlignGuideAction.is_enabled(&host, "middle").unwrap());
        AlignGuideAction.run(&host, "left").unwrap();
        assert_eq!(a.rect().unwrap(), Rect::new(50.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn resize_between_enclosing_guides() {
        let host = host_with_guides();
        let a = host.slide().add_auto_shape(AutoShapeType::Rectangle, Rect::new(60.0, 5.0, 10.0, 10.0));
        host.select(&[a.clone()]);
        assert!(ResizeGuideAction.is_enabled(&host, "horizontal").unwrap());
        assert!(!ResizeGuideAction.is_enabled(&host, "vertical").unwrap());
        ResizeGuideAction.run(&host, "horizontal").unwrap();
        assert_eq!(a.rect().unwrap(), Rect::new(50.0, 5.0, 50.0, 10.0));
    }
}
