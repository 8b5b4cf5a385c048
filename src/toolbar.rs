//! The ribbon callbacks
//!
//! [`Toolbar`] is what the host's ribbon talks to: for every control it
//! resolves the command, finds the action and asks it whether it is enabled,
//! what image to show, or to run. This is the boundary where failures stop:
//! a command that cannot be resolved or fails half-way is logged and reported
//! as "nothing to refresh", never passed on to the host.

use std::collections::HashMap;
use std::sync::Arc;

use crate::actions::{self, Action, Icon, ToolbarAction};
use crate::command::Command;
use crate::errors::{CommandError, DispatchError};
use crate::host::Host;
use crate::log::warn;
use crate::resources::{Bitmap, IconCache, ResourceLoader};

/// What a control displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarImage {
    Bitmap(Arc<Bitmap>),
    /// An image the host application ships, by its name
    Builtin(&'static str),
}

pub struct Toolbar {
    actions: HashMap<&'static str, ToolbarAction>,
    icons: IconCache,
}

impl Toolbar {
    pub fn new(loader: impl ResourceLoader + 'static) -> Self {
        let actions = actions::all().into_iter().map(|action| (action.id(), action)).collect();
        Toolbar { actions, icons: IconCache::new(loader) }
    }

    pub fn action(&self, id: &str) -> Option<&ToolbarAction> {
        self.actions.get(id)
    }

    pub fn icons(&self) -> &IconCache {
        &self.icons
    }

    fn resolve(&self, control_id: &str, tag: Option<&str>) -> Result<(&ToolbarAction, Command), CommandError> {
        let command = Command::resolve(control_id, tag)?;
        match self.actions.get(command.action_id.as_str()) {
            Some(action) => Ok((action, command)),
            None => Err(CommandError::UnknownAction { id: command.action_id }),
        }
    }

    /// Run the control's action; `Ok(true)` means the controls need a refresh
    pub fn try_action(&self, host: &dyn Host, control_id: &str, tag: Option<&str>) -> Result<bool, DispatchError> {
        let (action, command) = self.resolve(control_id, tag)?;
        action.run(host, &command.parameter)
    }

    /// Ribbon `onAction`: run and report whether to invalidate the controls
    pub fn on_action(&self, host: &dyn Host, control_id: &str, tag: Option<&str>) -> bool {
        match self.try_action(host, control_id, tag) {
            Ok(invalidate) => invalidate,
            Err(err) => {
                warn!("{} failed: {}", control_id, err);
                false
            }
        }
    }

    /// Ribbon `getEnabled`
    pub fn is_enabled(&self, host: &dyn Host, control_id: &str, tag: Option<&str>) -> bool {
        let enabled = self
            .resolve(control_id, tag)
            .map_err(DispatchError::from)
            .and_then(|(action, command)| Ok(action.is_enabled(host, &command.parameter)?));
        match enabled {
            Ok(enabled) => enabled,
            Err(err) => {
                warn!("cannot tell whether {} is enabled: {}", control_id, err);
                false
            }
        }
    }

    /// Ribbon `getImage`: the icon of the action, or the fallback icon
    pub fn image(&self, host: &dyn Host, control_id: &str, tag: Option<&str>) -> Option<ToolbarImage> {
        let icon = match self.resolve(control_id, tag) {
            Ok((action, command)) => action.icon(host, control_id, &command.parameter).unwrap_or_else(|err| {
                warn!("no icon for {}: {}", control_id, err);
                Icon::resource(control_id)
            }),
            Err(err) => {
                warn!("no action for {}: {}", control_id, err);
                Icon::resource(control_id)
            }
        };
        match icon {
            Icon::Builtin(name) => Some(ToolbarImage::Builtin(name)),
            Icon::Resource(name) => self.icons.icon(&name).map(ToolbarImage::Bitmap),
            Icon::Tinted { name, color } => self.icons.tinted(&name, color).map(ToolbarImage::Bitmap),
        }
    }
}
