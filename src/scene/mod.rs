//! Demo scene: a cube spinning in front of an orbiting camera
//!
//! - RON-backed configuration
//! - Viewport / orthographic / perspective / look-at transforms
//! - Wireframe or flat-filled rendering per face

mod camera;
mod config;
mod cube;

pub use camera::*;
pub use config::*;
pub use cube::*;
