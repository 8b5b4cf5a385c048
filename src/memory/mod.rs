//! A headless host
//!
//! Implements every host trait in memory: one slide with shapes, run
//! structured text frames, guides, a theme and a [`MemorySettings`] store.
//! The toolbar runs against it unchanged, which is how the integration tests
//! and the layout previews exercise the actions.

mod shape;
mod text;

pub use shape::{MemoryShape, MemorySlide};
pub use text::{MemoryText, PARAGRAPH_MARK, default_font, default_paragraph};

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::HostError;
use crate::host::{Host, ShapeRef, SlideRef};
use crate::settings::{MemorySettings, Settings};
use crate::types::{Guide, Orientation};

#[derive(Debug)]
pub struct MemoryHost {
    slide: Option<Rc<MemorySlide>>,
    selection: RefCell<Vec<Rc<MemoryShape>>>,
    guides: RefCell<Vec<Guide>>,
    settings: MemorySettings,
}

impl Default for MemoryHost {
    fn default() -> Self {
        MemoryHost::with_settings(MemorySettings::new())
    }
}

impl MemoryHost {
    /// A host with one empty slide
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: MemorySettings) -> Self {
        MemoryHost {
            slide: Some(Rc::new(MemorySlide::new())),
            selection: RefCell::new(Vec::new()),
            guides: RefCell::new(Vec::new()),
            settings,
        }
    }

    /// A host without any open presentation window
    pub fn without_slide() -> Self {
        MemoryHost { slide: None, ..Self::default() }
    }

    /// The slide shapes are added to.
    ///
    /// A host created with [`MemoryHost::without_slide`] hands out a detached
    /// slide that is never active.
    pub fn slide(&self) -> Rc<MemorySlide> {
        self.slide.clone().unwrap_or_default()
    }

    pub fn select(&self, shapes: &[Rc<MemoryShape>]) {
        *self.selection.borrow_mut() = shapes.to_vec();
    }

    pub fn clear_selection(&self) {
        self.selection.borrow_mut().clear();
    }

    pub fn add_guide(&self, position: f64, orientation: Orientation) {
        self.guides.borrow_mut().push(Guide::new(position, orientation));
    }

    pub fn memory_settings(&self) -> &MemorySettings {
        &self.settings
    }
}

impl Host for MemoryHost {
    fn selected_shapes(&self) -> Result<Vec<ShapeRef>, HostError> {
        Ok(self
            .selection
            .borrow()
            .iter()
            .filter(|s| !s.is_deleted())
            .map(|s| s.clone() as ShapeRef)
            .collect())
    }

    fn active_slide(&self) -> Result<Option<SlideRef>, HostError> {
        Ok(self.slide.clone().map(|s| s as SlideRef))
    }

    fn guides(&self, orientation: Orientation) -> Result<Vec<Guide>, HostError> {
        Ok(self.guides.borrow().iter().filter(|g| g.orientation == orientation).copied().collect())
    }

    fn settings(&self) -> &dyn Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AutoShapeType, Shape};
    use crate::types::Rect;

    #[test]
    fn selection_skips_deleted_shapes() {
        let host = MemoryHost::new();
        let a = host.slide().add_auto_shape(AutoShapeType::Rectangle, Rect::new(0.0, 0.0, 1.0, 1.0));
        let b = host.slide().add_picture(Rect::new(2.0, 0.0, 1.0, 1.0));
        host.select(&[a.clone(), b.clone()]);
        assert_eq!(host.selected_shapes().unwrap().len(), 2);
        assert_eq!(host.selected_auto_shapes().unwrap().len(), 1);
        a.delete().unwrap();
        assert_eq!(host.selected_shapes().unwrap().len(), 1);
        assert_eq!(a.rect(), Err(HostError::Disconnected));
    }

    #[test]
    fn guides_are_filtered_by_orientation() {
        let host = MemoryHost::new();
        host.add_guide(10.0, Orientation::Vertical);
        host.add_guide(20.0, Orientation::Horizontal);
        assert_eq!(host.guides(Orientation::Vertical).unwrap(), vec![Guide::new(10.0, Orientation::Vertical)]);
    }

    #[test]
    fn no_window_means_no_slide() {
        assert!(MemoryHost::without_slide().active_slide().unwrap().is_none());
    }
}
