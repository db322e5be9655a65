use std::{fmt, str::FromStr};

use crate::{
    foundation::{
        core::{Anchor, Offset},
        error::{LayoutError, LayoutResult},
    },
    layout::{anchor::AnchorOffset, spec::AbsoluteLayoutSpec},
};

/// Distance in pixels between a preset watermark and the canvas edges it is anchored to.
pub const WATERMARK_MARGIN_PX: f64 = 20.0;

/// Named watermark positions: a corner of the canvas, inset by [`WATERMARK_MARGIN_PX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WatermarkPosition {
    /// `topLeft`
    TopLeft,
    /// `topRight`
    TopRight,
    /// `bottomLeft`
    BottomLeft,
    /// `bottomRight`
    BottomRight,
}

impl WatermarkPosition {
    /// All presets, in declaration order.
    pub const ALL: [WatermarkPosition; 4] = [
        WatermarkPosition::TopLeft,
        WatermarkPosition::TopRight,
        WatermarkPosition::BottomLeft,
        WatermarkPosition::BottomRight,
    ];

    /// Configuration name of the preset.
    pub fn name(self) -> &'static str {
        match self {
            WatermarkPosition::TopLeft => "topLeft",
            WatermarkPosition::TopRight => "topRight",
            WatermarkPosition::BottomLeft => "bottomLeft",
            WatermarkPosition::BottomRight => "bottomRight",
        }
    }

    /// Corner-to-corner alignment with the margin pulled inward.
    pub fn anchor_offset(self) -> AnchorOffset {
        let m = WATERMARK_MARGIN_PX;
        match self {
            WatermarkPosition::TopLeft => AnchorOffset::aligned(Anchor::TOP_LEFT, Offset::new(m, m)),
            WatermarkPosition::TopRight => {
                AnchorOffset::aligned(Anchor::TOP_RIGHT, Offset::new(-m, m))
            }
            WatermarkPosition::BottomLeft => {
                AnchorOffset::aligned(Anchor::BOTTOM_LEFT, Offset::new(m, -m))
            }
            WatermarkPosition::BottomRight => {
                AnchorOffset::aligned(Anchor::BOTTOM_RIGHT, Offset::new(-m, -m))
            }
        }
    }

    /// The preset as a native-size layout spec.
    pub fn layout_spec(self) -> AbsoluteLayoutSpec {
        AbsoluteLayoutSpec::new(self.anchor_offset())
    }
}

impl FromStr for WatermarkPosition {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        let name = s.trim();
        WatermarkPosition::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| LayoutError::unknown_preset(name))
    }
}

impl fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/watermark.rs"]
mod tests;
