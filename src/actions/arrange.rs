//! Arrange commands: stacking, grid alignment and magnet

use crate::errors::{DispatchError, HostError};
use crate::host::{Host, read_rects, write_changed};
use crate::layout::{ArrangeKind, ArrangeParams, arrange};
use crate::log::debug;
use crate::settings::LayoutSettings;

use super::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangeAction {
    kind: ArrangeKind,
}

impl ArrangeAction {
    pub const fn new(kind: ArrangeKind) -> Self {
        ArrangeAction { kind }
    }

    pub fn kind(&self) -> ArrangeKind {
        self.kind
    }
}

impl Action for ArrangeAction {
    fn id(&self) -> &'static str {
        match self.kind {
            ArrangeKind::Horizontal => "arrange_horizontal",
            ArrangeKind::Vertical => "arrange_vertical",
            ArrangeKind::Grid => "arrange_grid",
            ArrangeKind::Magnet => "arrange_magnet",
        }
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(host.selected_shapes()?.len() >= 2)
    }

    fn run(&self, host: &dyn Host, _arg: &str) -> Result<bool, DispatchError> {
        let shapes = host.selected_shapes()?;
        if shapes.len() < 2 {
            return Ok(false);
        }
        debug!("{} over {} shapes", self.id(), shapes.len());

        let params = ArrangeParams::from(&LayoutSettings::load(host.settings()));
        let before = read_rects(&shapes)?;
        let after = arrange(self.kind, &before, &params)?;
        let changed = write_changed(&shapes, &before, &after)?;
        debug!("{} moved {} shapes", self.id(), changed);
        Ok(false)
    }
}
