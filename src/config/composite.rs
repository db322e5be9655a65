use crate::{foundation::core::Dimension, layout::solver::Layout};

/// Everything the encoder needs to build one composite frame.
///
/// Absent layers are omitted from the JSON form; `null` reads back as absent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompositeLayout {
    /// Output canvas.
    pub canvas: Dimension,
    /// The lower (background, or only) source.
    pub lower: Layout,
    /// The upper source; `None` when compositing a single source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Layout>,
    /// The watermark image, if one is configured and available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<Layout>,
}

#[cfg(test)]
#[path = "../../tests/unit/config/composite.rs"]
mod tests;
