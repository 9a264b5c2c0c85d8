//! Errors raised by the rasterizer's value types and buffer access

/// Error type for color validation and flat pixel indexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// A color channel outside 0..=255
    InvalidColorComponent { channel: char, value: i32 },
    /// A flat pixel index outside 0..width*height
    InvalidIndex { index: i64, len: usize },
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterError::InvalidColorComponent { channel, value } => {
                write!(f, "Invalid color component: {} = {} (expected 0-255)", channel, value)
            }
            RasterError::InvalidIndex { index, len } => {
                write!(f, "Invalid pixel index: {} (buffer holds {} pixels)", index, len)
            }
        }
    }
}

impl std::error::Error for RasterError {}
