//! Binary PPM (P6) encoding

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::OutputError;
use crate::rasterizer::Framebuffer;

/// Write `fb` as a binary PPM: `P6`, `<width> <height>`, `255`, then raw RGB rows
pub fn write_ppm<W: Write>(fb: &Framebuffer, writer: &mut W) -> Result<(), OutputError> {
    if !fb.is_allocated() {
        return Err(OutputError::Unallocated);
    }

    write!(writer, "P6\n{} {}\n255\n", fb.width(), fb.height())?;
    writer.write_all(&fb.to_rgb_bytes())?;
    Ok(())
}

/// Write `fb` as a binary PPM file, replacing any existing file
pub fn save_ppm<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<(), OutputError> {
    if !fb.is_allocated() {
        return Err(OutputError::Unallocated);
    }
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(fb, &mut writer)?;
    writer.flush()?;
    log::info!("Framebuffer written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Color;

    #[test]
    fn test_ppm_header_and_payload() {
        let mut fb = Framebuffer::with_size(3, 2);
        fb.clear(Color::BLACK);
        fb.set_pixel(0, 0, Color::new(255, 0, 0));
        fb.set_pixel(2, 1, Color::new(1, 2, 3));

        let mut out = Vec::new();
        write_ppm(&fb, &mut out).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        let payload = &out[header.len()..];
        assert_eq!(payload.len(), 3 * 2 * 3);
        assert_eq!(&payload[..3], &[255, 0, 0]);
        assert_eq!(&payload[15..], &[1, 2, 3]);
    }

    #[test]
    fn test_ppm_rejects_unallocated() {
        let mut out = Vec::new();
        assert!(matches!(
            write_ppm(&Framebuffer::new(), &mut out),
            Err(OutputError::Unallocated)
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_save_ppm_missing_directory_is_io_error() {
        let fb = Framebuffer::with_size(1, 1);
        let path = std::env::temp_dir()
            .join("tinyraster-no-such-dir")
            .join("nested")
            .join("frame.ppm");
        assert!(matches!(save_ppm(&fb, &path), Err(OutputError::IoError(_))));
    }

    #[test]
    fn test_save_ppm_roundtrip_bytes() {
        let mut fb = Framebuffer::with_size(2, 2);
        fb.clear(Color::new(9, 8, 7));
        let path = std::env::temp_dir().join(format!("tinyraster-ppm-{}.ppm", std::process::id()));
        save_ppm(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n2 2\n255\n".len() + 12);
    }
}
