//! `duplicate_shape:<left|right|top|bottom>`

use crate::errors::{DispatchError, HostError};
use crate::format;
use crate::host::Host;
use crate::log::debug;
use crate::settings::LayoutSettings;
use crate::types::{Rect, Side};

use super::Action;

/// Adds a copy of a single autoshape next to it, one gutter away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateShapeAction;

/// Where the copy of `rect` goes; an unknown side puts it on top of the original
fn placement(rect: Rect, side: Option<Side>, settings: &LayoutSettings) -> Rect {
    let Some(side) = side else {
        return rect;
    };
    let axis = side.axis();
    let gutter = settings.gutters().along(axis);
    let step = rect.extent(axis) + gutter;
    let start = if side.is_leading() { rect.start(axis) - step } else { rect.start(axis) + step };
    rect.with_start(axis, start)
}

impl Action for DuplicateShapeAction {
    fn id(&self) -> &'static str {
        "duplicate_shape"
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(host.selected_auto_shapes()?.len() == 1)
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        let shapes = host.selected_auto_shapes()?;
        let [shape] = shapes.as_slice() else {
            return Ok(false);
        };
        let Some(slide) = host.active_slide()? else {
            return Ok(false);
        };
        let Some(shape_type) = shape.auto_shape_type()? else {
            return Ok(false);
        };

        let settings = LayoutSettings::load(host.settings());
        let rect = placement(shape.rect()?, Side::from_arg(arg), &settings);
        debug!("duplicating {} to {} at {}, {}", shape.id(), arg, rect.left, rect.top);

        let copy = slide.add_shape(shape_type, rect)?;
        copy.copy_style_from(&**shape)?;
        if let (Some(from), Some(to)) = (shape.text(), copy.text()) {
            format::copy(&*to, &*from)?;
        }
        Ok(false)
    }
}
