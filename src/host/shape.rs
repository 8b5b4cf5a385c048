//! Shapes and slides as exposed by the host

use std::fmt;
use std::rc::Rc;

use crate::errors::HostError;
use crate::format::{ColorFormat, Rgb, ThemeColorIndex};
use crate::types::Rect;

use super::autoshape::AutoShapeType;
use super::text::TextContainer;

pub type ShapeRef = Rc<dyn Shape>;
pub type SlideRef = Rc<dyn Slide>;
pub type TextRef = Rc<dyn TextContainer>;

/// Identity of a shape, stable for the lifetime of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    AutoShape(AutoShapeType),
    /// Pictures, groups, tables, connectors and everything else
    Other,
}

/// A live shape on a slide.
///
/// Handles are only valid for one command invocation.
pub trait Shape {
    fn id(&self) -> ShapeId;

    fn kind(&self) -> Result<ShapeKind, HostError>;

    fn rect(&self) -> Result<Rect, HostError>;

    fn set_rect(&self, rect: Rect) -> Result<(), HostError>;

    fn set_auto_shape_type(&self, shape_type: AutoShapeType) -> Result<(), HostError>;

    /// Adjustment handle values of an autoshape, in handle order
    fn adjustments(&self) -> Result<Vec<f64>, HostError>;

    fn set_adjustment(&self, index: usize, value: f64) -> Result<(), HostError>;

    /// The text frame, for shapes that have one
    fn text(&self) -> Option<TextRef>;

    /// Color of a solid fill, `None` for other fills
    fn fill(&self) -> Result<Option<ColorFormat>, HostError>;

    /// Replace the fill by a solid fill of `color`
    fn set_fill(&self, color: &ColorFormat) -> Result<(), HostError>;

    fn line_color(&self) -> Result<Option<ColorFormat>, HostError>;

    fn set_line_color(&self, color: &ColorFormat) -> Result<(), HostError>;

    /// Take over fill, line and effects of `source`
    fn copy_style_from(&self, source: &dyn Shape) -> Result<(), HostError>;

    fn delete(&self) -> Result<(), HostError>;

    fn auto_shape_type(&self) -> Result<Option<AutoShapeType>, HostError> {
        Ok(match self.kind()? {
            ShapeKind::AutoShape(shape_type) => Some(shape_type),
            ShapeKind::Other => None,
        })
    }
}

pub trait Slide {
    fn shapes(&self) -> Result<Vec<ShapeRef>, HostError>;

    fn add_shape(&self, shape_type: AutoShapeType, rect: Rect) -> Result<ShapeRef, HostError>;

    /// Resolve a theme slot through the slide's color scheme
    fn theme_color(&self, index: ThemeColorIndex) -> Result<Option<Rgb>, HostError>;
}

/// Read the rectangles of all `shapes`, index-aligned
pub fn read_rects(shapes: &[ShapeRef]) -> Result<Vec<Rect>, HostError> {
    shapes.iter().map(|s| s.rect()).collect()
}

/// Write back the rectangles that differ from `before`; returns how many changed
pub fn write_changed(shapes: &[ShapeRef], before: &[Rect], after: &[Rect]) -> Result<usize, HostError> {
    let mut changed = 0;
    for ((shape, old), new) in shapes.iter().zip(before).zip(after) {
        if old != new {
            shape.set_rect(*new)?;
            changed += 1;
        }
    }
    Ok(changed)
}
