//! In-memory shapes and slides

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::errors::HostError;
use crate::format::{ColorFormat, Rgb, ThemeColorIndex};
use crate::host::{AutoShapeType, Shape, ShapeId, ShapeKind, ShapeRef, Slide, TextRef};
use crate::types::Rect;

use super::text::MemoryText;

/// Default adjustment values for the types that have handles
fn default_adjustments(kind: ShapeKind) -> Vec<f64> {
    match kind {
        ShapeKind::AutoShape(AutoShapeType::RoundedRectangle) => vec![0.16667],
        ShapeKind::AutoShape(AutoShapeType::Chevron | AutoShapeType::Pentagon) => vec![0.5],
        ShapeKind::AutoShape(AutoShapeType::RightArrow | AutoShapeType::LeftArrow) => vec![0.5, 0.5],
        _ => Vec::new(),
    }
}

#[derive(Debug)]
struct ShapeState {
    kind: ShapeKind,
    rect: Rect,
    adjustments: Vec<f64>,
    fill: Option<ColorFormat>,
    line: Option<ColorFormat>,
}

#[derive(Debug)]
pub struct MemoryShape {
    id: ShapeId,
    state: RefCell<ShapeState>,
    text: Option<Rc<MemoryText>>,
    deleted: Cell<bool>,
}

impl MemoryShape {
    pub fn new(id: ShapeId, kind: ShapeKind, rect: Rect, text: Option<MemoryText>) -> Self {
        MemoryShape {
            id,
            state: RefCell::new(ShapeState {
                kind,
                rect,
                adjustments: default_adjustments(kind),
                fill: None,
                line: None,
            }),
            text: text.map(Rc::new),
            deleted: Cell::new(false),
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.get()
    }

    /// The concrete text frame, for inspection
    pub fn memory_text(&self) -> Option<Rc<MemoryText>> {
        self.text.clone()
    }

    pub fn set_adjustments(&self, values: Vec<f64>) {
        self.state.borrow_mut().adjustments = values;
    }

    fn live(&self) -> Result<(), HostError> {
        if self.deleted.get() { Err(HostError::Disconnected) } else { Ok(()) }
    }
}

impl Shape for MemoryShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> Result<ShapeKind, HostError> {
        self.live()?;
        Ok(self.state.borrow().kind)
    }

    fn rect(&self) -> Result<Rect, HostError> {
        self.live()?;
        Ok(self.state.borrow().rect)
    }

    fn set_rect(&self, rect: Rect) -> Result<(), HostError> {
        self.live()?;
        let rect = Rect::try_new(rect.left, rect.top, rect.width, rect.height)
            .map_err(|e| HostError::rejected("Shape.Rect", e.to_string()))?;
        self.state.borrow_mut().rect = rect;
        Ok(())
    }

    fn set_auto_shape_type(&self, shape_type: AutoShapeType) -> Result<(), HostError> {
        self.live()?;
        let mut state = self.state.borrow_mut();
        match state.kind {
            ShapeKind::AutoShape(current) if current != shape_type => {
                state.kind = ShapeKind::AutoShape(shape_type);
                state.adjustments = default_adjustments(state.kind);
                Ok(())
            }
            ShapeKind::AutoShape(_) => Ok(()),
            ShapeKind::Other => Err(HostError::rejected("Shape.AutoShapeType", "not an autoshape")),
        }
    }

    fn adjustments(&self) -> Result<Vec<f64>, HostError> {
        self.live()?;
        Ok(self.state.borrow().adjustments.clone())
    }

    fn set_adjustment(&self, index: usize, value: f64) -> Result<(), HostError> {
        self.live()?;
        match self.state.borrow_mut().adjustments.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(HostError::rejected("Shape.Adjustments", format!("no adjustment {index}"))),
        }
    }

    fn text(&self) -> Option<TextRef> {
        if self.deleted.get() {
            return None;
        }
        self.text.clone().map(|t| t as TextRef)
    }

    fn fill(&self) -> Result<Option<ColorFormat>, HostError> {
        self.live()?;
        Ok(self.state.borrow().fill)
    }

    fn set_fill(&self, color: &ColorFormat) -> Result<(), HostError> {
        self.live()?;
        self.state.borrow_mut().fill = Some(*color);
        Ok(())
    }

    fn line_color(&self) -> Result<Option<ColorFormat>, HostError> {
        self.live()?;
        Ok(self.state.borrow().line)
    }

    fn set_line_color(&self, color: &ColorFormat) -> Result<(), HostError> {
        self.live()?;
        self.state.borrow_mut().line = Some(*color);
        Ok(())
    }

    fn copy_style_from(&self, source: &dyn Shape) -> Result<(), HostError> {
        self.live()?;
        let (fill, line) = (source.fill()?, source.line_color()?);
        let mut state = self.state.borrow_mut();
        state.fill = fill;
        state.line = line;
        Ok(())
    }

    fn delete(&self) -> Result<(), HostError> {
        self.live()?;
        self.deleted.set(true);
        Ok(())
    }
}

/// Colors of the default Office theme
const DEFAULT_THEME: [(ThemeColorIndex, Rgb); 10] = [
    (ThemeColorIndex::Dark1, Rgb::new(0x00, 0x00, 0x00)),
    (ThemeColorIndex::Light1, Rgb::new(0xff, 0xff, 0xff)),
    (ThemeColorIndex::Dark2, Rgb::new(0x44, 0x54, 0x6a)),
    (ThemeColorIndex::Light2, Rgb::new(0xe7, 0xe6, 0xe6)),
    (ThemeColorIndex::Accent1, Rgb::new(0x44, 0x72, 0xc4)),
    (ThemeColorIndex::Accent2, Rgb::new(0xed, 0x7d, 0x31)),
    (ThemeColorIndex::Accent3, Rgb::new(0xa5, 0xa5, 0xa5)),
    (ThemeColorIndex::Accent4, Rgb::new(0xff, 0xc0, 0x00)),
    (ThemeColorIndex::Accent5, Rgb::new(0x5b, 0x9b, 0xd5)),
    (ThemeColorIndex::Accent6, Rgb::new(0x70, 0xad, 0x47)),
];

/// A slide owning its shapes.
///
/// Deleted shapes are dropped from the slide the next time it is touched;
/// handles still held elsewhere report [`HostError::Disconnected`].
#[derive(Debug)]
pub struct MemorySlide {
    shapes: RefCell<Vec<Rc<MemoryShape>>>,
    next_id: Cell<u64>,
    theme: RefCell<Vec<(ThemeColorIndex, Rgb)>>,
}

impl Default for MemorySlide {
    fn default() -> Self {
        MemorySlide {
            shapes: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            theme: RefCell::new(DEFAULT_THEME.to_vec()),
        }
    }
}

impl MemorySlide {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, kind: ShapeKind, rect: Rect, text: Option<MemoryText>) -> Rc<MemoryShape> {
        let id = ShapeId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let shape = Rc::new(MemoryShape::new(id, kind, rect, text));
        let mut shapes = self.shapes.borrow_mut();
        shapes.retain(|s| !s.is_deleted());
        shapes.push(shape.clone());
        shape
    }

    /// Add an autoshape with an empty text frame
    pub fn add_auto_shape(&self, shape_type: AutoShapeType, rect: Rect) -> Rc<MemoryShape> {
        self.insert(ShapeKind::AutoShape(shape_type), rect, Some(MemoryText::default()))
    }

    pub fn add_text_shape(&self, shape_type: AutoShapeType, rect: Rect, text: MemoryText) -> Rc<MemoryShape> {
        self.insert(ShapeKind::AutoShape(shape_type), rect, Some(text))
    }

    /// Add a shape that is not an autoshape and has no text, like a picture
    pub fn add_picture(&self, rect: Rect) -> Rc<MemoryShape> {
        self.insert(ShapeKind::Other, rect, None)
    }

    /// Live shapes in z-order
    pub fn memory_shapes(&self) -> Vec<Rc<MemoryShape>> {
        let mut shapes = self.shapes.borrow_mut();
        shapes.retain(|s| !s.is_deleted());
        shapes.clone()
    }

    pub fn set_theme_color(&self, index: ThemeColorIndex, color: Rgb) {
        let mut theme = self.theme.borrow_mut();
        match theme.iter_mut().find(|(i, _)| *i == index) {
            Some(entry) => entry.1 = color,
            None => theme.push((index, color)),
        }
    }
}

impl Slide for MemorySlide {
    fn shapes(&self) -> Result<Vec<ShapeRef>, HostError> {
        Ok(self.memory_shapes().into_iter().map(|s| s as ShapeRef).collect())
    }

    fn add_shape(&self, shape_type: AutoShapeType, rect: Rect) -> Result<ShapeRef, HostError> {
        let rect = Rect::try_new(rect.left, rect.top, rect.width, rect.height)
            .map_err(|e| HostError::rejected("Shapes.AddShape", e.to_string()))?;
        Ok(self.add_auto_shape(shape_type, rect) as ShapeRef)
    }

    fn theme_color(&self, index: ThemeColorIndex) -> Result<Option<Rgb>, HostError> {
        Ok(self.theme.borrow().iter().find(|(i, _)| *i == index).map(|(_, rgb)| *rgb))
    }
}
