//! Error taxonomy for the site effects.
//!
//! Nothing here is fatal: every variant means "this feature stays inactive".

/// Reasons a feature could not be brought up.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("rendering surface unavailable")]
    MissingSurface,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("carousel strip has no measurable cards")]
    EmptyStrip,
    #[error("carousel viewport width is not usable: {0}")]
    InvalidViewport(f64),
    #[error("carousel speed must be a positive number of pixels per frame, got {0}")]
    InvalidSpeed(f64),
    #[error("reveal threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),
    #[error("invalid effects config: {0}")]
    Config(#[from] serde_json::Error),
}
