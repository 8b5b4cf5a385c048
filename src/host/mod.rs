//! The host object model the toolbar works against
//!
//! These traits are everything the crate needs from the presentation
//! application: the current selection, the active slide, guides, shapes,
//! text frames and the settings store. [`crate::memory`] implements them
//! in-process.

pub mod autoshape;
pub mod shape;
pub mod text;

pub use autoshape::AutoShapeType;
pub use shape::{Shape, ShapeId, ShapeKind, ShapeRef, Slide, SlideRef, TextRef, read_rects, write_changed};
pub use text::{CharRange, LanguageId, Margins, TextContainer};

use crate::errors::HostError;
use crate::settings::Settings;
use crate::types::{Guide, Orientation};

pub trait Host {
    /// Shapes of the current selection, empty unless shapes are selected
    fn selected_shapes(&self) -> Result<Vec<ShapeRef>, HostError>;

    fn active_slide(&self) -> Result<Option<SlideRef>, HostError>;

    /// Presentation and master guides with the given orientation
    fn guides(&self, orientation: Orientation) -> Result<Vec<Guide>, HostError>;

    fn settings(&self) -> &dyn Settings;

    /// Selected autoshapes, skipping everything else
    fn selected_auto_shapes(&self) -> Result<Vec<ShapeRef>, HostError> {
        let mut result = Vec::new();
        for shape in self.selected_shapes()? {
            if shape.auto_shape_type()?.is_some() {
                result.push(shape);
            }
        }
        Ok(result)
    }

    /// Selected shapes that carry a text frame
    fn selected_text_shapes(&self) -> Result<Vec<ShapeRef>, HostError> {
        Ok(self.selected_shapes()?.into_iter().filter(|s| s.text().is_some()).collect())
    }
}
