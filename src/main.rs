use anyhow::{Context, Result};

use scanfill::config::{Command, USAGE};
use scanfill::logging::{init_logging, LoggingConfig};
use scanfill::prelude::*;

/// Draws one frame: background, grid, then every scene polygon.
fn draw_frame(
    config: &AppConfig,
    scene: &Scene,
    rasterizer: &ScanlineRasterizer,
    canvas: &mut Canvas,
    outline: bool,
) {
    canvas.clear(config.background);
    canvas.draw_grid(config.grid_spacing, scanfill::colors::GRID);

    let report = scene.render(rasterizer, canvas, outline);
    log::debug!(
        "frame: {} polygons, {} pixels, {} failed",
        report.filled,
        report.stats.pixels,
        report.failed.len()
    );
}

/// Renders once and writes the result to `config.output`.
fn run_headless(config: &AppConfig) -> Result<()> {
    let Some(path) = config.output.as_ref() else {
        anyhow::bail!("no output path given");
    };

    let rasterizer = ScanlineRasterizer::new();
    let scene = Scene::demo(config.width, config.height);
    let mut canvas = Canvas::new(config.width, config.height);

    draw_frame(config, &scene, &rasterizer, &mut canvas, config.outline);
    canvas
        .save_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!(
        "wrote {}x{} image to {}",
        config.width,
        config.height,
        path.display()
    );
    Ok(())
}

#[cfg(feature = "window")]
fn run_windowed(config: &AppConfig) -> Result<()> {
    let mut window = Window::new(config)
        .map_err(anyhow::Error::msg)
        .context("failed to open window")?;
    let mut limiter = FrameLimiter::new(&window, config);

    let rasterizer = ScanlineRasterizer::new();
    let mut scene = Scene::demo(config.width, config.height);
    let mut canvas = Canvas::new(config.width, config.height);
    let mut outline = config.outline;

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(width, height) => {
                window.resize(width, height).map_err(anyhow::Error::msg)?;
                canvas.resize(width, height);
                scene = Scene::demo(width, height);
            }
            WindowEvent::ToggleOutline => outline = !outline,
            WindowEvent::None => {}
        }

        draw_frame(config, &scene, &rasterizer, &mut canvas, outline);
        window.present(&canvas).map_err(anyhow::Error::msg)?;
        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_windowed(_config: &AppConfig) -> Result<()> {
    anyhow::bail!("built without the `window` feature; pass --output PATH to render to a file")
}

fn main() -> Result<()> {
    let config = match AppConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });

    if config.output.is_some() {
        run_headless(&config)
    } else {
        run_windowed(&config)
    }
}
