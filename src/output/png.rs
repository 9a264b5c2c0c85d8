//! PNG export through the `image` crate

use std::path::Path;

use super::OutputError;
use crate::rasterizer::Framebuffer;

/// Copy the framebuffer into an `image` RGB buffer
pub fn to_rgb_image(fb: &Framebuffer) -> Result<image::RgbImage, OutputError> {
    if !fb.is_allocated() {
        return Err(OutputError::Unallocated);
    }
    image::RgbImage::from_raw(fb.width() as u32, fb.height() as u32, fb.to_rgb_bytes())
        .ok_or(OutputError::Unallocated)
}

pub fn save_png<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    to_rgb_image(fb)?.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Framebuffer written to {}", path.display());
    Ok(())
}
