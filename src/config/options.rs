use std::collections::BTreeMap;

use crate::{
    config::{
        composite::CompositeLayout,
        layout_string::{LAYOUT_SEPARATOR, MultipleLayouts, SingleLayout},
        resolution::OutputResolution,
    },
    foundation::{
        core::Dimension,
        error::{LayoutError, LayoutResult},
    },
    layout::{
        solver::{Layout, resolve, resolve_two_shape},
        spec::{AbsoluteLayoutSpec, LayoutSpec},
    },
};

/// Layout string for two sources; takes precedence over [`LAYOUT`].
pub const LAYOUT_MULTIPLE: &str = "layout-multiple";
/// Fallback key for the two-source layout string.
pub const LAYOUT: &str = "layout";
/// Layout string for a single source.
pub const LAYOUT_SINGLE: &str = "layout-single";
/// Prefix of named layouts: `layout = "pip"` reads the layout string from `layout-pip`.
pub const LAYOUT_PREFIX: &str = "layout-";
/// Canvas size selection, see [`OutputResolution`].
pub const OUTPUT_RESOLUTION: &str = "output-resolution";

/// Composite layout configuration read from a string option map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Layouts used when two sources are available.
    pub multiple: Option<MultipleLayouts>,
    /// Layout used when only one source is available.
    pub single: Option<SingleLayout>,
    /// How the canvas size is chosen.
    pub output_resolution: OutputResolution,
}

fn option<'a>(options: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    options
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

impl LayoutOptions {
    /// Read the layout options.
    ///
    /// A two-source layout value without any `;` is taken as the name of a layout stored under
    /// `layout-<name>`.
    pub fn from_options(options: &BTreeMap<String, String>) -> LayoutResult<Self> {
        let multiple = match option(options, LAYOUT_MULTIPLE).or_else(|| option(options, LAYOUT)) {
            None => None,
            Some(value) if value.contains(LAYOUT_SEPARATOR) => Some(MultipleLayouts::parse(value)?),
            Some(name) => {
                let key = format!("{LAYOUT_PREFIX}{name}");
                let value = option(options, &key).ok_or_else(|| {
                    LayoutError::config(format!("layout '{name}' refers to missing option '{key}'"))
                })?;
                tracing::debug!(name = %name, key = %key, "using named layout");
                Some(MultipleLayouts::parse(value)?)
            }
        };

        let single = option(options, LAYOUT_SINGLE)
            .map(SingleLayout::parse)
            .transpose()?;

        let output_resolution: OutputResolution = option(options, OUTPUT_RESOLUTION)
            .ok_or_else(|| LayoutError::config(format!("'{OUTPUT_RESOLUTION}' must be set")))?
            .parse()?;

        Ok(Self {
            multiple,
            single,
            output_resolution,
        })
    }

    /// Lay out two sources and an optional watermark.
    ///
    /// The watermark is placed only if both a watermark layout and `watermark_media` are present.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve_multiple(
        &self,
        lower_media: Dimension,
        upper_media: Dimension,
        watermark_media: Option<Dimension>,
    ) -> LayoutResult<CompositeLayout> {
        let layouts = self.multiple.ok_or_else(|| {
            LayoutError::config(format!(
                "a two-source layout must be set ('{LAYOUT_MULTIPLE}' or '{LAYOUT}')"
            ))
        })?;
        let canvas = self.output_resolution.canvas(lower_media, Some(upper_media))?;

        let two = resolve_two_shape(
            canvas,
            upper_media,
            layouts.upper,
            lower_media,
            layouts.lower,
        )?;

        Ok(CompositeLayout {
            canvas,
            lower: two.lower,
            upper: Some(two.upper),
            watermark: place_watermark(canvas, layouts.watermark, watermark_media)?,
        })
    }

    /// Lay out a single source and an optional watermark.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve_single(
        &self,
        media: Dimension,
        watermark_media: Option<Dimension>,
    ) -> LayoutResult<CompositeLayout> {
        let layout = self.single.ok_or_else(|| {
            LayoutError::config(format!("a single-source layout must be set ('{LAYOUT_SINGLE}')"))
        })?;
        let canvas = self.output_resolution.canvas(media, Some(media))?;

        Ok(CompositeLayout {
            canvas,
            lower: resolve(canvas, media, &layout.video.into())?,
            upper: None,
            watermark: place_watermark(canvas, layout.watermark, watermark_media)?,
        })
    }
}

fn place_watermark(
    canvas: Dimension,
    spec: Option<AbsoluteLayoutSpec>,
    media: Option<Dimension>,
) -> LayoutResult<Option<Layout>> {
    match (spec, media) {
        (Some(spec), Some(media)) => resolve(canvas, media, &LayoutSpec::Absolute(spec)).map(Some),
        (Some(_), None) => {
            tracing::debug!("watermark layout configured but no watermark media given");
            Ok(None)
        }
        (None, _) => Ok(None),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
