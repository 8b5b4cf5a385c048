//! Toolbar actions
//!
//! Each action is a small value implementing [`Action`]; [`ToolbarAction`]
//! is the closed set of them, dispatched statically. Actions read the
//! selection from the [`Host`], decide whether they apply, and do their work
//! through the layout and format modules.
//!
//! Preconditions that are not met are never errors: `is_enabled` reports
//! `false` and `run` returns `Ok(false)` without touching anything.

pub mod arrange;
pub mod duplicate;
pub mod guides;
pub mod shape_type;
pub mod size;
pub mod split;
pub mod text;
pub mod theme;

pub use arrange::ArrangeAction;
pub use duplicate::DuplicateShapeAction;
pub use guides::{AlignGuideAction, ResizeGuideAction};
pub use shape_type::{ChangeShapeTypeAction, CopyShapeTypeAction, RepeatShapeChangeAction};
pub use size::{Dimension, HarmonizeAdjustmentsAction, HarmonizeSizeAction};
pub use split::SplitRectangleAction;
pub use text::{ChangeLanguageAction, ClearTextAction, SwapTextAction, TextMarginAction};
pub use theme::{ThemeColorAction, ThemeTarget};

use enum_dispatch::enum_dispatch;

use crate::errors::{DispatchError, HostError};
use crate::format::Rgb;
use crate::host::Host;
use crate::layout::ArrangeKind;

/// Where the icon of a control comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Bundled bitmap `icons.<name>.png`
    Resource(String),
    /// Image provided by the host application itself
    Builtin(&'static str),
    /// Bundled bitmap recolored with a theme color
    Tinted { name: String, color: Rgb },
}

impl Icon {
    pub fn resource(name: &str) -> Self {
        Icon::Resource(name.to_string())
    }
}

#[enum_dispatch]
pub trait Action {
    /// Action id matched against command tags
    fn id(&self) -> &'static str;

    fn is_enabled(&self, _host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(true)
    }

    /// Run the action; `Ok(true)` asks the toolbar to refresh its controls
    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError>;

    fn icon(&self, _host: &dyn Host, control_id: &str, _arg: &str) -> Result<Icon, HostError> {
        Ok(Icon::resource(control_id))
    }
}

#[enum_dispatch(Action)]
#[derive(Debug, Clone)]
pub enum ToolbarAction {
    ArrangeAction,
    AlignGuideAction,
    ResizeGuideAction,
    HarmonizeSizeAction,
    HarmonizeAdjustmentsAction,
    ChangeShapeTypeAction,
    RepeatShapeChangeAction,
    CopyShapeTypeAction,
    DuplicateShapeAction,
    SplitRectangleAction,
    SwapTextAction,
    ClearTextAction,
    ChangeLanguageAction,
    TextMarginAction,
    ThemeColorAction,
}

/// Every toolbar action, one entry per action id
pub fn all() -> Vec<ToolbarAction> {
    vec![
        ArrangeAction::new(ArrangeKind::Horizontal).into(),
        ArrangeAction::new(ArrangeKind::Vertical).into(),
        ArrangeAction::new(ArrangeKind::Grid).into(),
        ArrangeAction::new(ArrangeKind::Magnet).into(),
        AlignGuideAction.into(),
        ResizeGuideAction.into(),
        HarmonizeSizeAction::new(Dimension::Width).into(),
        HarmonizeSizeAction::new(Dimension::Height).into(),
        HarmonizeSizeAction::new(Dimension::Both).into(),
        HarmonizeAdjustmentsAction.into(),
        ChangeShapeTypeAction.into(),
        RepeatShapeChangeAction.into(),
        CopyShapeTypeAction.into(),
        DuplicateShapeAction.into(),
        SplitRectangleAction.into(),
        SwapTextAction.into(),
        ClearTextAction.into(),
        ChangeLanguageAction.into(),
        TextMarginAction.into(),
        ThemeColorAction::new(ThemeTarget::Background).into(),
        ThemeColorAction::new(ThemeTarget::Line).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let actions = all();
        let ids: HashSet<_> = actions.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), actions.len());
        assert!(ids.contains("arrange_magnet"));
        assert!(ids.contains("apply_line_theme_color"));
    }
}
