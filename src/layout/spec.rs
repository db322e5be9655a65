use crate::{
    codec::json::optional_number,
    foundation::error::{LayoutError, LayoutResult},
    layout::anchor::{AnchorOffset, AnchorOffsetFields},
};

/// Scale the element to cover a fraction of the canvas width, preserving its aspect ratio.
///
/// If width-first scaling would make the element taller than the canvas it is shrunk
/// uniformly until its height equals the canvas height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "LayoutSpecWire", try_from = "LayoutSpecWire")]
pub struct CoverageLayoutSpec {
    anchor_offset: AnchorOffset,
    coverage: f64,
}

impl CoverageLayoutSpec {
    /// Build a coverage spec; `coverage` must lie in `(0, 1]`.
    pub fn new(anchor_offset: AnchorOffset, coverage: f64) -> LayoutResult<Self> {
        if !(coverage > 0.0 && coverage <= 1.0) {
            return Err(LayoutError::validation(format!(
                "coverage must be in (0, 1] (got {coverage})"
            )));
        }
        Ok(Self {
            anchor_offset,
            coverage,
        })
    }

    /// Placement of the scaled element.
    pub fn anchor_offset(&self) -> &AnchorOffset {
        &self.anchor_offset
    }

    /// Fraction of the canvas width the element should occupy.
    pub fn coverage(&self) -> f64 {
        self.coverage
    }
}

/// Place the element at its native size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "LayoutSpecWire", try_from = "LayoutSpecWire")]
pub struct AbsoluteLayoutSpec {
    /// Placement of the unscaled element.
    pub anchor_offset: AnchorOffset,
}

impl AbsoluteLayoutSpec {
    /// Build an absolute spec.
    pub const fn new(anchor_offset: AnchorOffset) -> Self {
        Self { anchor_offset }
    }

    /// Placement of the unscaled element.
    pub fn anchor_offset(&self) -> &AnchorOffset {
        &self.anchor_offset
    }
}

/// How a single element is sized and positioned on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "LayoutSpecWire", try_from = "LayoutSpecWire")]
pub enum LayoutSpec {
    /// Coverage-driven scaling, see [`CoverageLayoutSpec`].
    Coverage(CoverageLayoutSpec),
    /// Native-size placement, see [`AbsoluteLayoutSpec`].
    Absolute(AbsoluteLayoutSpec),
}

impl LayoutSpec {
    /// Placement shared by both variants.
    pub fn anchor_offset(&self) -> &AnchorOffset {
        match self {
            LayoutSpec::Coverage(c) => c.anchor_offset(),
            LayoutSpec::Absolute(a) => a.anchor_offset(),
        }
    }
}

impl From<CoverageLayoutSpec> for LayoutSpec {
    fn from(spec: CoverageLayoutSpec) -> Self {
        LayoutSpec::Coverage(spec)
    }
}

impl From<AbsoluteLayoutSpec> for LayoutSpec {
    fn from(spec: AbsoluteLayoutSpec) -> Self {
        LayoutSpec::Absolute(spec)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum SpecKind {
    Coverage,
    Absolute,
}

/// Wire form shared by every spec type.
///
/// `type` is always written but may be missing in older layout strings, which also spell the
/// coverage `horizontalCoverage`. Without `type`, a coverage value selects the coverage spec.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutSpecWire {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<SpecKind>,
    anchor_offset: AnchorOffsetFields,
    #[serde(
        default,
        alias = "horizontalCoverage",
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_number"
    )]
    coverage: Option<f64>,
}

impl From<CoverageLayoutSpec> for LayoutSpecWire {
    fn from(spec: CoverageLayoutSpec) -> Self {
        Self {
            kind: Some(SpecKind::Coverage),
            anchor_offset: spec.anchor_offset.into(),
            coverage: Some(spec.coverage),
        }
    }
}

impl From<AbsoluteLayoutSpec> for LayoutSpecWire {
    fn from(spec: AbsoluteLayoutSpec) -> Self {
        Self {
            kind: Some(SpecKind::Absolute),
            anchor_offset: spec.anchor_offset.into(),
            coverage: None,
        }
    }
}

impl From<LayoutSpec> for LayoutSpecWire {
    fn from(spec: LayoutSpec) -> Self {
        match spec {
            LayoutSpec::Coverage(c) => c.into(),
            LayoutSpec::Absolute(a) => a.into(),
        }
    }
}

impl TryFrom<LayoutSpecWire> for CoverageLayoutSpec {
    type Error = LayoutError;

    fn try_from(wire: LayoutSpecWire) -> LayoutResult<Self> {
        if wire.kind == Some(SpecKind::Absolute) {
            return Err(LayoutError::validation(
                "expected a coverage spec, found type 'absolute'",
            ));
        }
        let coverage = wire
            .coverage
            .ok_or_else(|| LayoutError::validation("coverage spec without 'coverage'"))?;
        CoverageLayoutSpec::new(wire.anchor_offset.into(), coverage)
    }
}

/// A coverage value, as carried by legacy watermark blobs, is ignored.
impl TryFrom<LayoutSpecWire> for AbsoluteLayoutSpec {
    type Error = LayoutError;

    fn try_from(wire: LayoutSpecWire) -> LayoutResult<Self> {
        if wire.kind == Some(SpecKind::Coverage) {
            return Err(LayoutError::validation(
                "expected an absolute spec, found type 'coverage'",
            ));
        }
        Ok(AbsoluteLayoutSpec::new(wire.anchor_offset.into()))
    }
}

impl TryFrom<LayoutSpecWire> for LayoutSpec {
    type Error = LayoutError;

    fn try_from(wire: LayoutSpecWire) -> LayoutResult<Self> {
        let kind = match wire.kind {
            Some(kind) => kind,
            None if wire.coverage.is_some() => SpecKind::Coverage,
            None => SpecKind::Absolute,
        };
        if wire.kind.is_none() {
            tracing::debug!(?kind, "layout spec without 'type'; inferred from coverage");
        }
        match kind {
            SpecKind::Coverage => CoverageLayoutSpec::try_from(wire).map(LayoutSpec::Coverage),
            SpecKind::Absolute => AbsoluteLayoutSpec::try_from(wire).map(LayoutSpec::Absolute),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/spec.rs"]
mod tests;
