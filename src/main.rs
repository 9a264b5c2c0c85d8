//! TinyRaster demo: renders a spinning cube to a numbered image sequence
//!
//! Usage: `tinyraster [scene.ron]`. Without a config file the built-in defaults
//! are used (1024x1024, 360 wireframe frames written to `frames/`).

use std::process::ExitCode;

use indicatif::{ProgressBar, ProgressStyle};
use tinyraster::output::{FrameSink, OutputError};
use tinyraster::rasterizer::Framebuffer;
use tinyraster::scene::{load_config, render_frame, SceneConfig};
use tinyraster::VERSION;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("TinyRaster v{}", VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => {
                log::info!("Loaded scene config from {}", path);
                config
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SceneConfig::default(),
    };

    match run(&config) {
        Ok(written) => {
            log::info!("Wrote {} frames to {}", written, config.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Rendering failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SceneConfig) -> Result<u32, OutputError> {
    std::fs::create_dir_all(&config.output_dir)?;

    let mut fb = Framebuffer::new();
    fb.allocate(config.width, config.height);

    let mut sink = FrameSink::new(&config.output_dir, config.file_prefix.as_str(), config.format);

    let progress = ProgressBar::new(config.frames as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} frames [{elapsed} < {eta}]") {
        progress.set_style(style);
    }

    for frame in 0..config.frames {
        fb.clear_preset(config.background);
        let drawn = render_frame(&mut fb, config, frame);
        let path = sink.write(&fb)?;
        log::debug!("Frame {}: {} triangles -> {}", frame, drawn, path.display());
        progress.inc(1);
    }

    progress.finish();
    Ok(sink.next_index())
}
