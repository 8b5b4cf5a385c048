//! Changing the autoshape type of the selection

use crate::errors::{DispatchError, HostError};
use crate::host::{AutoShapeType, Host};
use crate::log::debug;
use crate::settings::{CHANGE_SHAPE_TYPE, Settings};

use super::{Action, Icon};

/// `change_shape_type:<Name>`, remembering `<Name>` for [`RepeatShapeChangeAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeShapeTypeAction;

impl ChangeShapeTypeAction {
    fn change(host: &dyn Host, shape_type: AutoShapeType) -> Result<usize, HostError> {
        let shapes = host.selected_auto_shapes()?;
        debug!("changing {} shapes to {}", shapes.len(), shape_type);
        for shape in &shapes {
            shape.set_auto_shape_type(shape_type)?;
        }
        Ok(shapes.len())
    }
}

fn shape_icon(control_id: &str, name: &str) -> Icon {
    match AutoShapeType::from_name(name).and_then(AutoShapeType::builtin_image) {
        Some(image) => Icon::Builtin(image),
        None => Icon::resource(control_id),
    }
}

impl Action for ChangeShapeTypeAction {
    fn id(&self) -> &'static str {
        "change_shape_type"
    }

    fn is_enabled(&self, host: &dyn Host, arg: &str) -> Result<bool, HostError> {
        if AutoShapeType::from_name(arg).is_none() {
            return Ok(false);
        }
        Ok(!host.selected_auto_shapes()?.is_empty())
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        if let Some(shape_type) = AutoShapeType::from_name(arg) {
            Self::change(host, shape_type)?;
        }
        host.settings().set(CHANGE_SHAPE_TYPE, arg.into());
        host.settings().save()?;
        Ok(true)
    }

    fn icon(&self, _host: &dyn Host, control_id: &str, arg: &str) -> Result<Icon, HostError> {
        Ok(shape_icon(control_id, arg))
    }
}

/// `repeat_last_shape_change`: the last `change_shape_type` again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatShapeChangeAction;

fn last_change(settings: &dyn Settings) -> String {
    settings.text(CHANGE_SHAPE_TYPE).unwrap_or_default()
}

impl Action for RepeatShapeChangeAction {
    fn id(&self) -> &'static str {
        "repeat_last_shape_change"
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        ChangeShapeTypeAction.is_enabled(host, &last_change(host.settings()))
    }

    fn run(&self, host: &dyn Host, _arg: &str) -> Result<bool, DispatchError> {
        ChangeShapeTypeAction.run(host, &last_change(host.settings()))?;
        Ok(false)
    }

    fn icon(&self, host: &dyn Host, control_id: &str, _arg: &str) -> Result<Icon, HostError> {
        Ok(shape_icon(control_id, &last_change(host.settings())))
    }
}

/// `copy_shape_type`: the first selected autoshape's type goes to the others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyShapeTypeAction;

impl Action for CopyShapeTypeAction {
    fn id(&self) -> &'static str {
        "copy_shape_type"
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(host.selected_auto_shapes()?.len() >= 2)
    }

    fn run(&self, host: &dyn Host, _arg: &str) -> Result<bool, DispatchError> {
        let shapes = host.selected_auto_shapes()?;
        if shapes.len() < 2 {
            return Ok(false);
        }
        let Some(shape_type) = shapes[0].auto_shape_type()? else {
            return Ok(false);
        };
        debug!("copying {} to {} shapes", shape_type, shapes.len() - 1);
        for shape in &shapes[1..] {
            shape.set_auto_shape_type(shape_type)?;
        }
        Ok(true)
    }
}
