//! Writing framebuffers to image files

mod png;
mod ppm;
mod sink;

pub use png::*;
pub use ppm::*;
pub use sink::*;

/// Error type for image output
#[derive(Debug)]
pub enum OutputError {
    IoError(std::io::Error),
    ImageError(image::ImageError),
    /// The framebuffer has no storage to write
    Unallocated,
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::IoError(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::ImageError(e)
    }
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::IoError(e) => write!(f, "IO error: {}", e),
            OutputError::ImageError(e) => write!(f, "Image error: {}", e),
            OutputError::Unallocated => write!(f, "Framebuffer is not allocated"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::IoError(e) => Some(e),
            OutputError::ImageError(e) => Some(e),
            OutputError::Unallocated => None,
        }
    }
}
