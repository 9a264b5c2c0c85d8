//! Sequentially numbered frame output

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{save_png, save_ppm, OutputError};
use crate::rasterizer::Framebuffer;

/// File format for written frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }

    pub fn save<P: AsRef<Path>>(self, fb: &Framebuffer, path: P) -> Result<(), OutputError> {
        match self {
            OutputFormat::Ppm => save_ppm(fb, path),
            OutputFormat::Png => save_png(fb, path),
        }
    }
}

/// Writes one file per frame as `<dir>/<prefix><n>.<ext>`.
///
/// The frame counter belongs to the sink, so independent sinks never share numbering.
#[derive(Debug, Clone)]
pub struct FrameSink {
    dir: PathBuf,
    prefix: String,
    format: OutputFormat,
    next: u32,
}

impl FrameSink {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(dir: P, prefix: S, format: OutputFormat) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            format,
            next: 0,
        }
    }

    /// Start numbering at `index` instead of 0
    pub fn starting_at(mut self, index: u32) -> Self {
        self.next = index;
        self
    }

    pub fn next_index(&self) -> u32 {
        self.next
    }

    pub fn path_for(&self, index: u32) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.prefix, index, self.format.extension()))
    }

    /// Write `fb` under the next frame number and advance the counter.
    /// The counter only advances when the write succeeds.
    pub fn write(&mut self, fb: &Framebuffer) -> Result<PathBuf, OutputError> {
        let path = self.path_for(self.next);
        self.format.save(fb, &path)?;
        self.next += 1;
        Ok(path)
    }
}
