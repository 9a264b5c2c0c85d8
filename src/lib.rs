//! TinyRaster: a minimal flat-color software rasterizer
//!
//! Draws lines and triangles from floating-point screen coordinates into an
//! in-memory RGB framebuffer, then writes the result out as PPM or PNG.

pub mod output;
pub mod rasterizer;
pub mod scene;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
