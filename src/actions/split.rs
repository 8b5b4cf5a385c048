//! `split_rectangle[:RxC]`

use crate::errors::{DispatchError, HostError};
use crate::host::{AutoShapeType, Host};
use crate::layout::{SplitParams, split_cells};
use crate::log::debug;
use crate::settings::LayoutSettings;

use super::Action;

/// Replaces a single rectangle by a grid of cells separated by the gutters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRectangleAction;

fn split_params(arg: &str, settings: &LayoutSettings) -> SplitParams {
    let (rows, columns) = SplitParams::parse_grid(arg).unwrap_or((settings.split_rows, settings.split_columns));
    SplitParams { rows, columns, gutters: settings.gutters() }
}

impl Action for SplitRectangleAction {
    fn id(&self) -> &'static str {
        "split_rectangle"
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        let shapes = host.selected_shapes()?;
        match shapes.as_slice() {
            [shape] => Ok(shape.auto_shape_type()? == Some(AutoShapeType::Rectangle)),
            _ => Ok(false),
        }
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        if !self.is_enabled(host, arg)? {
            return Ok(false);
        }
        let shapes = host.selected_shapes()?;
        let [shape] = shapes.as_slice() else {
            return Ok(false);
        };
        let Some(slide) = host.active_slide()? else {
            return Ok(false);
        };

        let params = split_params(arg, &LayoutSettings::load(host.settings()));
        let Some(cells) = split_cells(&shape.rect()?, &params) else {
            return Ok(false);
        };
        debug!("splitting {} into {}x{}", shape.id(), params.rows, params.columns);

        for cell in cells {
            let added = slide.add_shape(AutoShapeType::Rectangle, cell)?;
            added.copy_style_from(&**shape)?;
        }
        shape.delete()?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Shape;
    use crate::memory::MemoryHost;
    use crate::settings::{ARRANGE_HORIZONTAL_GUTTER, ARRANGE_VERTICAL_GUTTER, SPLIT_COLUMNS, Settings};
    use crate::types::Rect;

    fn host_with_rectangle(rect: Rect) -> MemoryHost {
        let host = MemoryHost::new();
        host.settings().set(ARRANGE_HORIZONTAL_GUTTER, 4.0.into());
        host.settings().set(ARRANGE_VERTICAL_GUTTER, 2.0.into());
        let shape = host.slide().add_auto_shape(AutoShapeType::Rectangle, rect);
        host.select(&[shape]);
        host
    }

    #[test]
    fn explicit_grid() {
        let host = host_with_rectangle(Rect::new(0.0, 0.0, 98.0, 42.0));
        assert!(SplitRectangleAction.is_enabled(&host, "2x3").unwrap());
        SplitRectangleAction.run(&host, "2x3").unwrap();

        let rects: Vec<Rect> = host.slide().memory_shapes().iter().map(|s| s.rect().unwrap()).collect();
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 30.0, 20.0));
        assert_eq!(rects[2], Rect::new(68.0, 0.0, 30.0, 20.0));
        assert_eq!(rects[5], Rect::new(68.0, 22.0, 30.0, 20.0));
    }

    #[test]
    fn defaults_from_settings() {
        let host = host_with_rectangle(Rect::new(0.0, 0.0, 100.0, 42.0));
        host.settings().set(SPLIT_COLUMNS, 1.0.into());
        SplitRectangleAction.run(&host, "").unwrap();
        assert_eq!(host.slide().memory_shapes().len(), 2);
    }

    #[test]
    fn oversized_grid_argument_uses_the_settings() {
        let host = host_with_rectangle(Rect::new(0.0, 0.0, 100.0, 42.0));
        SplitRectangleAction.run(&host, "70000x70000").unwrap();
        assert_eq!(host.slide().memory_shapes().len(), 4);
    }

    #[test]
    fn single_cell_keeps_the_original() {
        let host = host_with_rectangle(Rect::new(0.0, 0.0, 100.0, 42.0));
        SplitRectangleAction.run(&host, "1x1").unwrap();
        let shapes = host.slide().memory_shapes();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].rect().unwrap(), Rect::new(0.0, 0.0, 100.0, 42.0));
    }

    #[test]
    fn only_rectangles() {
        let host = MemoryHost::new();
        let oval = host.slide().add_auto_shape(AutoShapeType::Oval, Rect::new(0.0, 0.0, 100.0, 42.0));
        host.select(&[oval]);
        assert!(!SplitRectangleAction.is_enabled(&host, "2x2").unwrap());
    }
}
