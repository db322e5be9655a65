use serde::{Serialize, de::DeserializeOwned};

use crate::{
    codec::json::{from_json_str, to_json_string},
    foundation::error::{LayoutError, LayoutResult},
    layout::spec::{AbsoluteLayoutSpec, CoverageLayoutSpec},
};

/// Separator between per-shape layout blobs.
pub const LAYOUT_SEPARATOR: &str = ";";

/// Split a layout string into its JSON blobs. Blank segments are dropped.
pub fn split_layout_string(s: &str) -> Vec<&str> {
    s.split(LAYOUT_SEPARATOR)
        .map(str::trim)
        .filter(|blob| !blob.is_empty())
        .collect()
}

fn parse_blob<T: DeserializeOwned>(blobs: &[&str], index: usize) -> LayoutResult<T> {
    from_json_str(blobs[index]).map_err(|e| e.within(&format!("layouts[{index}]")))
}

fn join_blobs<T: Serialize>(
    specs: &[&T],
    watermark: Option<&AbsoluteLayoutSpec>,
) -> LayoutResult<String> {
    let mut blobs = specs
        .iter()
        .map(|spec| to_json_string(*spec))
        .collect::<LayoutResult<Vec<_>>>()?;
    if let Some(w) = watermark {
        blobs.push(to_json_string(w)?);
    }
    Ok(blobs.join(LAYOUT_SEPARATOR))
}

/// Layouts for compositing two sources, plus an optional watermark.
///
/// The string form is `lower;upper[;watermark]`: the first blob is the coverage spec of the
/// lower (background) source, the second the one of the upper source, the third an absolute
/// spec for the watermark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultipleLayouts {
    /// Layout of the lower source.
    pub lower: CoverageLayoutSpec,
    /// Layout of the upper source.
    pub upper: CoverageLayoutSpec,
    /// Layout of the watermark image, if any.
    pub watermark: Option<AbsoluteLayoutSpec>,
}

impl MultipleLayouts {
    /// Parse `lower;upper[;watermark]`.
    pub fn parse(s: &str) -> LayoutResult<Self> {
        let blobs = split_layout_string(s);
        if blobs.len() < 2 {
            return Err(LayoutError::config(format!(
                "multiple-source layout needs a lower and an upper layout, found {} layout(s)",
                blobs.len()
            )));
        }
        if blobs.len() > 3 {
            return Err(LayoutError::config(format!(
                "multiple-source layout takes at most three layouts (lower, upper, watermark), found {}",
                blobs.len()
            )));
        }
        Ok(Self {
            lower: parse_blob(&blobs, 0)?,
            upper: parse_blob(&blobs, 1)?,
            watermark: if blobs.len() > 2 {
                Some(parse_blob(&blobs, 2)?)
            } else {
                None
            },
        })
    }

    /// Encode back into the `;`-joined string form.
    pub fn to_layout_string(&self) -> LayoutResult<String> {
        join_blobs(&[&self.lower, &self.upper], self.watermark.as_ref())
    }
}

/// Layout for a single source, plus an optional watermark. String form: `video[;watermark]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleLayout {
    /// Layout of the source.
    pub video: CoverageLayoutSpec,
    /// Layout of the watermark image, if any.
    pub watermark: Option<AbsoluteLayoutSpec>,
}

impl SingleLayout {
    /// Parse `video[;watermark]`.
    pub fn parse(s: &str) -> LayoutResult<Self> {
        let blobs = split_layout_string(s);
        match blobs.len() {
            0 => Err(LayoutError::config("single-source layout is empty")),
            1 | 2 => Ok(Self {
                video: parse_blob(&blobs, 0)?,
                watermark: if blobs.len() > 1 {
                    Some(parse_blob(&blobs, 1)?)
                } else {
                    None
                },
            }),
            n => Err(LayoutError::config(format!(
                "single-source layout takes at most two layouts (video, watermark), found {n}"
            ))),
        }
    }

    /// Encode back into the `;`-joined string form.
    pub fn to_layout_string(&self) -> LayoutResult<String> {
        join_blobs(&[&self.video], self.watermark.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/layout_string.rs"]
mod tests;
