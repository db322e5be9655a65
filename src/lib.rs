//! Layout resolution for media elements placed on a rectangular canvas.
//!
//! A [`LayoutSpec`] describes where an element goes: either scaled to cover a fraction of the
//! canvas width ([`CoverageLayoutSpec`]) or kept at its own size ([`AbsoluteLayoutSpec`]), and
//! in both cases pinned by an [`AnchorOffset`] that ties a point of the element to a point of
//! the canvas. [`resolve`] turns a spec plus the canvas and media sizes into a concrete
//! [`Layout`].
//!
//! # Pipeline overview
//!
//! 1. **Configure**: `option map -> LayoutOptions` (layout strings, watermark presets, output size)
//! 2. **Resolve**: `canvas + media + LayoutSpec -> Layout` for every element, independently
//! 3. **Emit**: `CompositeLayout` for the compositor, or JSON through [`encode`]
//!
//! Resolution is pure. Every invariant (positive sizes, coverage in `(0, 1]`) is checked when
//! the values are built; [`resolve`] fails only when a degenerate aspect ratio would scale one
//! axis of the result down to zero.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod codec;
mod config;
mod foundation;
mod layout;

pub use codec::json::{decode, encode, from_json_str, to_json_string};
pub use config::composite::CompositeLayout;
pub use config::layout_string::{
    LAYOUT_SEPARATOR, MultipleLayouts, SingleLayout, split_layout_string,
};
pub use config::options::{
    LAYOUT, LAYOUT_MULTIPLE, LAYOUT_PREFIX, LAYOUT_SINGLE, LayoutOptions, OUTPUT_RESOLUTION,
};
pub use config::resolution::OutputResolution;
pub use config::watermark::{WATERMARK_MARGIN_PX, WatermarkPosition};
pub use foundation::core::{Anchor, Dimension, Offset};
pub use foundation::error::{LayoutError, LayoutResult};
pub use layout::anchor::{AnchorOffset, resolve_position};
pub use layout::fit::scale_to_fit;
pub use layout::solver::{
    Layout, MultiShapeLayout, TwoShapeLayout, resolve, resolve_multi, resolve_size,
    resolve_two_shape,
};
pub use layout::spec::{AbsoluteLayoutSpec, CoverageLayoutSpec, LayoutSpec};
