/// Field reported by format errors about the document as a whole.
pub(crate) const ROOT_FIELD: &str = "(root)";

/// Convenience result type used across the crate.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Error taxonomy for layout construction, resolution and decoding.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// A value violates its construction invariant (non-positive dimension, coverage out of range).
    #[error("validation error: {0}")]
    Validation(String),

    /// Decoded data is malformed: missing key, wrong type or unknown discriminator.
    #[error("format error at '{field}': {reason}")]
    Format {
        /// Dotted path of the offending field (`anchorOffset.offset.x`).
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A named watermark position is not one of the known presets.
    #[error("unknown watermark preset '{0}'")]
    UnknownPreset(String),

    /// Layout or option strings that cannot be turned into a usable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl LayoutError {
    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Format`] value.
    pub fn format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`LayoutError::UnknownPreset`] value.
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset(name.into())
    }

    /// Build a [`LayoutError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Prefix the field path of a [`LayoutError::Format`] with `parent`.
    ///
    /// Other variants are returned unchanged.
    pub(crate) fn within(self, parent: &str) -> Self {
        match self {
            Self::Format { field, reason } => Self::Format {
                field: if field.is_empty() || field == ROOT_FIELD {
                    parent.to_string()
                } else {
                    format!("{parent}.{field}")
                },
                reason,
            },
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
