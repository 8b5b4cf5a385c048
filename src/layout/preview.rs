//! Live preview of an arrange command while its parameters are edited

use crate::errors::DispatchError;
use crate::host::{Host, ShapeRef, read_rects, write_changed};
use crate::log::debug;
use crate::settings::LayoutSettings;
use crate::types::Rect;

use super::{ArrangeKind, ArrangeParams, arrange};

/// A preview session over the current selection.
///
/// Every [`update`](ArrangePreview::update) lays the shapes out again from
/// the positions they had when the session began, and writes the edited
/// parameters to the settings store without committing them.
/// [`confirm`](ArrangePreview::confirm) commits the parameters and keeps the
/// layout; [`cancel`](ArrangePreview::cancel) puts every shape back and
/// discards the edits.
pub struct ArrangePreview<'h> {
    host: &'h dyn Host,
    kind: ArrangeKind,
    shapes: Vec<ShapeRef>,
    original: Vec<Rect>,
    settings: LayoutSettings,
}

impl<'h> ArrangePreview<'h> {
    pub fn begin(host: &'h dyn Host, kind: ArrangeKind) -> Result<Self, DispatchError> {
        let shapes = host.selected_shapes()?;
        let original = read_rects(&shapes)?;
        let settings = LayoutSettings::load(host.settings());
        debug!("arrange preview over {} shapes", shapes.len());
        Ok(ArrangePreview { host, kind, shapes, original, settings })
    }

    /// Parameters currently previewed
    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Rectangles the shapes had when the session began
    pub fn original(&self) -> &[Rect] {
        &self.original
    }

    /// Re-run the layout with `settings`; returns the previewed rectangles
    pub fn update(&mut self, settings: LayoutSettings) -> Result<Vec<Rect>, DispatchError> {
        self.settings = settings;
        settings.store_arrange(self.host.settings());

        let laid_out = arrange(self.kind, &self.original, &ArrangeParams::from(&settings))?;
        let current = read_rects(&self.shapes)?;
        write_changed(&self.shapes, &current, &laid_out)?;
        Ok(laid_out)
    }

    /// Keep the layout and commit the parameters
    pub fn confirm(self) -> Result<(), DispatchError> {
        self.settings.store_arrange(self.host.settings());
        self.host.settings().save()?;
        Ok(())
    }

    /// Restore the original rectangles and drop the edited parameters
    pub fn cancel(self) -> Result<(), DispatchError> {
        let current = read_rects(&self.shapes)?;
        write_changed(&self.shapes, &current, &self.original)?;
        self.host.settings().reload()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::AutoShapeType;
    use crate::memory::MemoryHost;
    use crate::settings::{ARRANGE_HORIZONTAL_GUTTER, Settings};
    use crate::host::Shape;

    fn setup() -> MemoryHost {
        let host = MemoryHost::new();
        let slide = host.slide();
        let shapes = [
            slide.add_auto_shape(AutoShapeType::Rectangle, Rect::new(0.0, 0.0, 20.0, 10.0)),
            slide.add_auto_shape(AutoShapeType::Rectangle, Rect::new(100.0, 0.0, 20.0, 10.0)),
        ];
        host.select(&shapes);
        host
    }

    #[test]
    fn update_recomputes_from_original_positions() {
        let host = setup();
        let mut preview = ArrangePreview::begin(&host, ArrangeKind::Horizontal).unwrap();
        let first = preview.update(LayoutSettings { horizontal_gutter: 5.0, ..Default::default() }).unwrap();
        assert_eq!(first[1], Rect::new(25.0, 0.0, 20.0, 10.0));
        let second = preview.update(LayoutSettings { horizontal_gutter: 1.0, ..Default::default() }).unwrap();
        assert_eq!(second[1], Rect::new(21.0, 0.0, 20.0, 10.0));
        assert_eq!(host.slide().memory_shapes()[1].rect().unwrap(), second[1]);
    }

    #[test]
    fn cancel_restores_shapes_and_settings() {
        let host = setup();
        let mut preview = ArrangePreview::begin(&host, ArrangeKind::Horizontal).unwrap();
        preview.update(LayoutSettings { horizontal_gutter: 5.0, ..Default::default() }).unwrap();
        preview.cancel().unwrap();
        assert_eq!(host.slide().memory_shapes()[1].rect().unwrap(), Rect::new(100.0, 0.0, 20.0, 10.0));
        assert_eq!(host.settings().get(ARRANGE_HORIZONTAL_GUTTER), None);
    }

    #[test]
    fn confirm_commits_settings() {
        let host = setup();
        let mut preview = ArrangePreview::begin(&host, ArrangeKind::Horizontal).unwrap();
        preview.update(LayoutSettings { horizontal_gutter: 5.0, ..Default::default() }).unwrap();
        preview.confirm().unwrap();
        host.settings().reload().unwrap();
        assert_eq!(host.settings().number(ARRANGE_HORIZONTAL_GUTTER, 0.0), 5.0);
    }
}
