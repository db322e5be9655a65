use std::ops::{Add, Neg, Sub};

use crate::{
    codec::json::number,
    foundation::error::{LayoutError, LayoutResult},
};

/// Extent of a canvas or a media element in pixels.
///
/// Both axes are finite and strictly positive; the only way to obtain a value is through
/// [`Dimension::new`] (or decoding), so every `Dimension` in circulation upholds that.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "DimensionFields")]
pub struct Dimension {
    #[serde(serialize_with = "number")]
    width: f64,
    #[serde(serialize_with = "number")]
    height: f64,
}

#[derive(serde::Deserialize)]
struct DimensionFields {
    width: f64,
    height: f64,
}

impl TryFrom<DimensionFields> for Dimension {
    type Error = LayoutError;

    fn try_from(f: DimensionFields) -> LayoutResult<Self> {
        Self::new(f.width, f.height)
    }
}

impl Dimension {
    /// Build a dimension, rejecting non-positive or non-finite extents.
    pub fn new(width: f64, height: f64) -> LayoutResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(LayoutError::validation(format!(
                "dimension width must be finite and > 0 (got {width})"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(LayoutError::validation(format!(
                "dimension height must be finite and > 0 (got {height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Horizontal extent.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Vertical extent.
    pub fn height(self) -> f64 {
        self.height
    }

    /// `width / height`.
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    /// Uniformly scale both axes by `factor`, which must be finite and > 0.
    pub fn scale(self, factor: f64) -> LayoutResult<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(LayoutError::validation(format!(
                "scale factor must be finite and > 0 (got {factor})"
            )));
        }
        Self::new(self.width * factor, self.height * factor)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<Dimension> for kurbo::Size {
    fn from(d: Dimension) -> Self {
        kurbo::Size::new(d.width, d.height)
    }
}

impl TryFrom<kurbo::Size> for Dimension {
    type Error = LayoutError;

    fn try_from(s: kurbo::Size) -> LayoutResult<Self> {
        Self::new(s.width, s.height)
    }
}

/// Pixel displacement. Negative values are valid input; resolved offsets are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Offset {
    /// Horizontal displacement.
    #[serde(serialize_with = "number")]
    pub x: f64,
    /// Vertical displacement.
    #[serde(serialize_with = "number")]
    pub y: f64,
}

impl Offset {
    /// The origin.
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    /// Build an offset.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to `>= 0`.
    pub fn clamp_non_negative(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

impl From<Offset> for kurbo::Vec2 {
    fn from(o: Offset) -> Self {
        kurbo::Vec2::new(o.x, o.y)
    }
}

impl From<Offset> for kurbo::Point {
    fn from(o: Offset) -> Self {
        kurbo::Point::new(o.x, o.y)
    }
}

impl From<kurbo::Vec2> for Offset {
    fn from(v: kurbo::Vec2) -> Self {
        Offset::new(v.x, v.y)
    }
}

/// A point on a rectangle expressed as fractions of its width (`left`) and height (`top`).
///
/// `{0,0}` is the top-left corner and `{1,1}` the bottom-right one. Values outside `[0,1]`
/// are allowed and address points outside the rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    /// Fraction of the width, measured from the left edge.
    #[serde(serialize_with = "number")]
    pub left: f64,
    /// Fraction of the height, measured from the top edge.
    #[serde(serialize_with = "number")]
    pub top: f64,
}

impl Anchor {
    /// `{0, 0}`
    pub const TOP_LEFT: Anchor = Anchor::new(0.0, 0.0);
    /// `{1, 0}`
    pub const TOP_RIGHT: Anchor = Anchor::new(1.0, 0.0);
    /// `{0, 1}`
    pub const BOTTOM_LEFT: Anchor = Anchor::new(0.0, 1.0);
    /// `{1, 1}`
    pub const BOTTOM_RIGHT: Anchor = Anchor::new(1.0, 1.0);
    /// `{0.5, 0.5}`
    pub const CENTER: Anchor = Anchor::new(0.5, 0.5);

    /// Build an anchor.
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Pixel position of this anchor on a rectangle of extent `dim`, from its top-left corner.
    pub fn point_in(self, dim: Dimension) -> Offset {
        Offset::new(self.left * dim.width(), self.top * dim.height())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
