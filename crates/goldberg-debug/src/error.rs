use std::path::PathBuf;

/// Errors raised while encoding or writing a debug image.
#[derive(Debug, thiserror::Error)]
pub enum DebugRenderError {
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image with a zero dimension cannot be encoded.
    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}
