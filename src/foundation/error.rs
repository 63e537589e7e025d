/// Convenience result type used across orbline.
pub type OrblineResult<T> = Result<T, OrblineError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The per-frame render path never returns these: a missing element or an unusable color
/// degrades to a skipped frame or a fallback. Errors surface only where callers hand us
/// data (configs, scenes) or ask for pixels back.
#[derive(thiserror::Error, Debug)]
pub enum OrblineError {
    /// Invalid user-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while sizing, painting or reading back a raster surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrblineError {
    /// Build a [`OrblineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OrblineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`OrblineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for OrblineError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
