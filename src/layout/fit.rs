use crate::foundation::{core::Dimension, error::LayoutResult};

/// Scale `original` uniformly by the largest factor that keeps it inside `bounds` ("contain").
///
/// Enlarges as well as shrinks. The limiting axis is set to the bound exactly, the other one is
/// never larger than its bound. Aspect ratios so extreme that the other axis rounds to zero
/// are a validation error.
pub fn scale_to_fit(bounds: Dimension, original: Dimension) -> LayoutResult<Dimension> {
    let sx = bounds.width() / original.width();
    let sy = bounds.height() / original.height();
    if sx <= sy {
        Dimension::new(
            bounds.width(),
            (original.height() * sx).min(bounds.height()),
        )
    } else {
        Dimension::new(
            (original.width() * sy).min(bounds.width()),
            bounds.height(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
