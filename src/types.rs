//! Geometry primitives shared by every layout algorithm.
//!
//! All values are document length units as reported by the host (points for
//! PowerPoint), origin at the top-left corner, y growing downwards.

use glam::{DVec2, dvec2};
use std::fmt;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 { Err(NumericError::Negative) } else { Ok(val) }
}

/// Axis-aligned rectangle as read from a live shape.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle (unchecked).
    /// Use `try_new` for values coming from an untrusted source.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    /// Create a rectangle with validation (finite position, non-negative size)
    pub fn try_new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Rect {
            left: check_finite(left)?,
            top: check_finite(top)?,
            width: check_non_negative(width)?,
            height: check_non_negative(height)?,
        })
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Half width (x) and half height (y)
    pub fn half_size(&self) -> DVec2 {
        dvec2(self.width / 2.0, self.height / 2.0)
    }

    /// Leading coordinate along `axis` (left or top)
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Trailing coordinate along `axis` (right or bottom)
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis)
    }

    /// Size along `axis` (width or height)
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy of this rectangle moved so that its leading edge on `axis` is `value`
    pub fn with_start(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => self.left = value,
            Axis::Vertical => self.top = value,
        }
        self
    }

    /// Copy of this rectangle resized on `axis`, keeping the leading edge
    pub fn with_extent(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
        self
    }

    /// Smallest rectangle enclosing all of `rects`, or `None` for an empty slice
    pub fn bounding(rects: &[Rect]) -> Option<Rect> {
        let first = rects.first()?;
        let (mut min, mut max) = (dvec2(first.left, first.top), dvec2(first.right(), first.bottom()));
        for r in &rects[1..] {
            min = min.min(dvec2(r.left, r.top));
            max = max.max(dvec2(r.right(), r.bottom()));
        }
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.width, self.height)
    }
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along x: left / width
    Horizontal,
    /// Along y: top / height
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// One of the four edges of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Parse the argument spelling used by the toolbar commands
    pub fn from_arg(arg: &str) -> Option<Side> {
        match arg {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            "top" => Some(Side::Top),
            "bottom" => Some(Side::Bottom),
            _ => None,
        }
    }

    /// The axis this side moves along
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Top | Side::Bottom => Axis::Vertical,
        }
    }

    /// Whether this is the leading side (left/top) of its axis
    pub fn is_leading(self) -> bool {
        matches!(self, Side::Left | Side::Top)
    }
}

/// Orientation of a guide line.
///
/// A horizontal guide is a horizontal line; its position is a y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Guides of this orientation constrain coordinates along the returned axis
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Vertical,
            Orientation::Vertical => Axis::Horizontal,
        }
    }

    /// Orientation of the guides that constrain `axis`
    pub fn for_axis(axis: Axis) -> Orientation {
        match axis {
            Axis::Horizontal => Orientation::Vertical,
            Axis::Vertical => Orientation::Horizontal,
        }
    }
}

/// A user-placed alignment line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    pub position: f64,
    pub orientation: Orientation,
}

impl Guide {
    pub fn new(position: f64, orientation: Orientation) -> Self {
        Guide { position, orientation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), dvec2(25.0, 40.0));
        assert_eq!(r.end(Axis::Vertical), 60.0);
    }

    #[test]
    fn try_new_rejects_bad_numbers() {
        assert_eq!(Rect::try_new(f64::NAN, 0.0, 1.0, 1.0), Err(NumericError::NaN));
        assert_eq!(Rect::try_new(0.0, f64::INFINITY, 1.0, 1.0), Err(NumericError::Infinite));
        assert_eq!(Rect::try_new(0.0, 0.0, -1.0, 1.0), Err(NumericError::Negative));
        assert!(Rect::try_new(-5.0, -5.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn bounding_box() {
        let rects = [Rect::new(0.0, 5.0, 10.0, 10.0), Rect::new(20.0, 0.0, 5.0, 5.0)];
        assert_eq!(Rect::bounding(&rects), Some(Rect::new(0.0, 0.0, 25.0, 15.0)));
        assert_eq!(Rect::bounding(&[]), None);
    }

    #[test]
    fn guide_orientation_axes() {
        assert_eq!(Orientation::Horizontal.axis(), Axis::Vertical);
        assert_eq!(Orientation::for_axis(Axis::Horizontal), Orientation::Vertical);
    }
}
