//! Flat-color software rasterizer
//!
//! Features:
//! - Incremental (DDA) line drawing along the dominant axis
//! - Wireframe and scanline-filled triangles
//! - Coordinate writes clip silently; flat-index access is bounds-checked

mod error;
mod framebuffer;
mod interpolate;
mod math;
mod render;
mod types;

pub use error::*;
pub use framebuffer::*;
pub use interpolate::*;
pub use math::*;
pub use render::*;
pub use types::*;
