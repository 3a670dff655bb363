use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use flatshade::config::{Config, ConfigError, USAGE};
use flatshade::prelude::*;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let mesh = Mesh::from_obj(&config.model)
        .with_context(|| format!("could not load model {}", config.model.display()))?;

    let scene = SceneState::new(mesh, config.width, config.height).with_spin(config.spin);
    let mut settings = PipelineSettings::new(config.width, config.height);
    settings.cull_back_faces = config.cull_back_faces;
    let pipeline = Pipeline::new(settings);

    match &config.snapshot {
        Some(path) => snapshot(&scene, &pipeline, path),
        None => run_window(scene, pipeline, config),
    }
}

/// Renders a single frame without opening a window.
fn snapshot(scene: &SceneState, pipeline: &Pipeline, path: &Path) -> Result<()> {
    let settings = pipeline.settings();
    let mut frame = FrameBuffer::new(settings.width, settings.height);
    let drawn = pipeline.draw(scene, &mut frame);

    frame
        .save_png(path)
        .with_context(|| format!("could not write {}", path.display()))?;
    log::info!("wrote {} ({drawn} triangles)", path.display());
    Ok(())
}

fn run_window(mut scene: SceneState, mut pipeline: Pipeline, config: &Config) -> Result<()> {
    let mut window = Window::new("flatshade", config.width, config.height)
        .map_err(anyhow::Error::msg)
        .context("could not open window")?;
    let mut frame = FrameBuffer::new(config.width, config.height);
    let mut limiter = FrameLimiter::new(config.fps);
    let mut frame_time = Duration::ZERO;

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(width, height) => {
                window.resize(width, height).map_err(anyhow::Error::msg)?;
                frame.resize(width, height);
                scene.resize(width, height);
                pipeline.resize(width, height);
            }
            WindowEvent::None => {}
        }

        scene.update(&window.input_state(), frame_time);
        pipeline.draw(&scene, &mut frame);
        window.present(&frame).map_err(anyhow::Error::msg)?;

        let title = format!("Frametime: {:.2} ms", frame_time.as_secs_f64() * 1000.0);
        window.set_title(&title).map_err(anyhow::Error::msg)?;

        frame_time = limiter.wait_and_get_delta();
    }

    Ok(())
}
