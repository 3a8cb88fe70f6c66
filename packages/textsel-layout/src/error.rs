//! Error handling for layout construction

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Glyph width must be finite and positive, got {0}")]
    InvalidGlyphWidth(f64),

    #[error("Line height must be finite and positive, got {0}")]
    InvalidLineHeight(f64),
}
