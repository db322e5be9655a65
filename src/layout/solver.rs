use crate::{
    foundation::{
        core::{Dimension, Offset},
        error::LayoutResult,
    },
    layout::{
        anchor::resolve_position,
        spec::{CoverageLayoutSpec, LayoutSpec},
    },
};

/// Resolved placement of one element: its size and the position of its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    /// Size the element is rendered at.
    pub dimension: Dimension,
    /// Top-left corner on the canvas.
    pub offset: Offset,
}

impl Layout {
    /// Build a layout.
    pub const fn new(dimension: Dimension, offset: Offset) -> Self {
        Self { dimension, offset }
    }

    /// The placed rectangle in canvas coordinates.
    pub fn rect(&self) -> kurbo::Rect {
        kurbo::Rect::from_origin_size(
            kurbo::Point::from(self.offset),
            kurbo::Size::from(self.dimension),
        )
    }
}

/// Layouts of several shapes resolved against one canvas, in input order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MultiShapeLayout {
    shapes: Vec<Layout>,
}

impl MultiShapeLayout {
    /// Wrap already resolved layouts.
    pub fn new(shapes: Vec<Layout>) -> Self {
        Self { shapes }
    }

    /// Resolved layouts, one per input shape.
    pub fn shapes(&self) -> &[Layout] {
        &self.shapes
    }

    /// Take ownership of the resolved layouts.
    pub fn into_shapes(self) -> Vec<Layout> {
        self.shapes
    }
}

/// Two shapes on one canvas with named access (picture-in-picture, side-by-side).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TwoShapeLayout {
    /// Canvas both shapes were resolved against.
    pub canvas: Dimension,
    /// First shape.
    pub upper: Layout,
    /// Second shape.
    pub lower: Layout,
}

/// Size of `media` on `canvas` according to `spec`.
///
/// Fails only when the media aspect ratio is so extreme that one axis of the scaled size
/// rounds to zero or overflows.
pub fn resolve_size(
    canvas: Dimension,
    media: Dimension,
    spec: &LayoutSpec,
) -> LayoutResult<Dimension> {
    match spec {
        LayoutSpec::Coverage(c) => coverage_size(canvas, media, c),
        LayoutSpec::Absolute(_) => Ok(media),
    }
}

fn coverage_size(
    canvas: Dimension,
    media: Dimension,
    spec: &CoverageLayoutSpec,
) -> LayoutResult<Dimension> {
    let width = canvas.width() * spec.coverage();
    let height = width * (media.height() / media.width());
    if height > canvas.height() {
        let shrink = canvas.height() / height;
        tracing::debug!(
            canvas = %canvas,
            media = %media,
            coverage = spec.coverage(),
            shrink,
            "coverage overflows canvas height; shrinking"
        );
        return Dimension::new(width * shrink, canvas.height());
    }
    Dimension::new(width, height)
}

/// Size and position `media` on `canvas` according to `spec`.
pub fn resolve(canvas: Dimension, media: Dimension, spec: &LayoutSpec) -> LayoutResult<Layout> {
    let dimension = resolve_size(canvas, media, spec)?;
    let offset = resolve_position(canvas, dimension, spec.anchor_offset());
    Ok(Layout::new(dimension, offset))
}

/// Resolve every `(media, spec)` pair against `canvas`, independently and in order.
///
/// Shapes may overlap; no collision avoidance is performed.
#[tracing::instrument(
    level = "debug",
    skip(shapes),
    fields(canvas = %canvas, shapes = shapes.len())
)]
pub fn resolve_multi<S>(
    canvas: Dimension,
    shapes: &[(Dimension, S)],
) -> LayoutResult<MultiShapeLayout>
where
    S: Into<LayoutSpec> + Copy,
{
    let layouts = shapes
        .iter()
        .map(|&(media, spec)| resolve(canvas, media, &spec.into()))
        .collect::<LayoutResult<Vec<_>>>()?;
    Ok(MultiShapeLayout::new(layouts))
}

/// Two shapes resolved like [`resolve_multi`]: the first spec becomes `upper`, the second `lower`.
pub fn resolve_two_shape(
    canvas: Dimension,
    upper_media: Dimension,
    upper_spec: impl Into<LayoutSpec>,
    lower_media: Dimension,
    lower_spec: impl Into<LayoutSpec>,
) -> LayoutResult<TwoShapeLayout> {
    Ok(TwoShapeLayout {
        canvas,
        upper: resolve(canvas, upper_media, &upper_spec.into())?,
        lower: resolve(canvas, lower_media, &lower_spec.into())?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
