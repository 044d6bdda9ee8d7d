use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A layout was constructed without one of the host services it needs
    #[error("missing required service: {0}")]
    MissingService(&'static str),

    /// The print preview was asked to recompute without a printer context
    /// to measure against
    #[error("a drawing context is required to lay out pages")]
    MissingDrawingContext,

    #[error(transparent)]
    /// [image] failed to load a bitmap
    Image(#[from] image::ImageError),
}
