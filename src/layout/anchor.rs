use crate::foundation::{
    core::{Anchor, Dimension, Offset},
    error::{LayoutError, LayoutResult},
};

/// Alignment of an element on a canvas.
///
/// The `referring` anchor (a point on the element) is aligned with the `reference` anchor
/// (a point on the canvas), then the element is moved by `offset`.
///
/// A standalone value is written as `{"anchorOffset": {...}}`; the bare inner object is
/// accepted when reading.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "AnchorOffsetDocument", try_from = "AnchorOffsetInput")]
pub struct AnchorOffset {
    /// Point on the element being placed.
    pub referring: Anchor,
    /// Point on the canvas.
    pub reference: Anchor,
    /// Displacement applied after aligning the two anchors.
    pub offset: Offset,
}

impl AnchorOffset {
    /// Build an anchor offset.
    pub const fn new(referring: Anchor, reference: Anchor, offset: Offset) -> Self {
        Self {
            referring,
            reference,
            offset,
        }
    }

    /// Align the same anchor on element and canvas (corner to corner, center to center).
    pub const fn aligned(anchor: Anchor, offset: Offset) -> Self {
        Self::new(anchor, anchor, offset)
    }
}

/// Inner `{referring, reference, offset}` object, as embedded in layout specs.
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
pub(crate) struct AnchorOffsetFields {
    referring: Anchor,
    reference: Anchor,
    offset: Offset,
}

impl From<AnchorOffset> for AnchorOffsetFields {
    fn from(ao: AnchorOffset) -> Self {
        Self {
            referring: ao.referring,
            reference: ao.reference,
            offset: ao.offset,
        }
    }
}

impl From<AnchorOffsetFields> for AnchorOffset {
    fn from(f: AnchorOffsetFields) -> Self {
        AnchorOffset::new(f.referring, f.reference, f.offset)
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct AnchorOffsetDocument {
    anchor_offset: AnchorOffsetFields,
}

impl From<AnchorOffset> for AnchorOffsetDocument {
    fn from(ao: AnchorOffset) -> Self {
        Self {
            anchor_offset: ao.into(),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnchorOffsetInput {
    anchor_offset: Option<AnchorOffsetFields>,
    referring: Option<Anchor>,
    reference: Option<Anchor>,
    offset: Option<Offset>,
}

impl TryFrom<AnchorOffsetInput> for AnchorOffset {
    type Error = LayoutError;

    fn try_from(input: AnchorOffsetInput) -> LayoutResult<Self> {
        if let Some(fields) = input.anchor_offset {
            return Ok(fields.into());
        }
        match (input.referring, input.reference, input.offset) {
            (Some(referring), Some(reference), Some(offset)) => {
                Ok(AnchorOffset::new(referring, reference, offset))
            }
            _ => Err(LayoutError::validation(
                "anchor offset needs 'anchorOffset' or all of 'referring', 'reference' and 'offset'",
            )),
        }
    }
}

/// Top-left position of an element of extent `element` placed on `canvas` by `ao`.
///
/// The result is clamped to `>= 0` on both axes. The far edge is not clamped, so an element
/// may extend past the right or bottom edge of the canvas.
pub fn resolve_position(canvas: Dimension, element: Dimension, ao: &AnchorOffset) -> Offset {
    let raw = ao.reference.point_in(canvas) - ao.referring.point_in(element) + ao.offset;
    raw.clamp_non_negative()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchor.rs"]
mod tests;
