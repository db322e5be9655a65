use std::{fmt, str::FromStr};

use crate::foundation::{
    core::Dimension,
    error::{LayoutError, LayoutResult},
};

/// Where the output canvas size comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputResolution {
    /// A fixed `WxH` canvas.
    Fixed(Dimension),
    /// The lower (or only) source's dimension.
    Lower,
    /// The upper (or only) source's dimension.
    Upper,
}

impl OutputResolution {
    /// Canvas for the given sources. `upper` is `None` when compositing a single source.
    pub fn canvas(self, lower: Dimension, upper: Option<Dimension>) -> LayoutResult<Dimension> {
        match self {
            OutputResolution::Fixed(d) => Ok(d),
            OutputResolution::Lower => Ok(lower),
            OutputResolution::Upper => upper.ok_or_else(|| {
                LayoutError::config("output resolution 'upper' requires an upper source")
            }),
        }
    }
}

impl FromStr for OutputResolution {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        let s = s.trim();
        match s {
            "lower" => return Ok(OutputResolution::Lower),
            "upper" => return Ok(OutputResolution::Upper),
            _ => {}
        }

        let invalid = || {
            LayoutError::config(format!(
                "invalid output resolution '{s}' (expected WxH, 'lower' or 'upper')"
            ))
        };
        let (w, h) = s.split_once('x').ok_or_else(invalid)?;
        let w: u32 = w.trim().parse().map_err(|_| invalid())?;
        let h: u32 = h.trim().parse().map_err(|_| invalid())?;
        let d = Dimension::new(f64::from(w), f64::from(h)).map_err(|_| invalid())?;
        Ok(OutputResolution::Fixed(d))
    }
}

impl fmt::Display for OutputResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputResolution::Fixed(d) => write!(f, "{d}"),
            OutputResolution::Lower => f.write_str("lower"),
            OutputResolution::Upper => f.write_str("upper"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/resolution.rs"]
mod tests;
