/// Errors surfaced by the PC host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// I/O error writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PPM encoding failed.
    #[error("Image encode error: {0}")]
    Image(#[from] image::ImageError),

    /// The register bus rejected a write.
    #[error("Register bus error: {0}")]
    Bus(String),

    /// Command-line value out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
