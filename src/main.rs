use anyhow::Context;
use log::info;

use flaggen::config::WindowConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WindowConfig::from_env();
    info!("starting {} ({}x{})", config.title, config.width, config.height);
    run(config)
}

#[cfg(windows)]
fn run(config: WindowConfig) -> anyhow::Result<()> {
    let code = flaggen::win32::run(config).context("failed to start the flag window")?;
    match code {
        0 => Ok(()),
        _ => anyhow::bail!("message loop exited with code {}", code),
    }
}

#[cfg(not(windows))]
fn run(config: WindowConfig) -> anyhow::Result<()> {
    use std::io::Write;

    use flaggen::geometry::Rect;
    use flaggen::renderer::draw_flag;
    use flaggen::surface::Recorder;

    let rect = Rect::with_size(config.width as i32, config.height as i32);
    let mut recorder = Recorder::new();
    draw_flag(&mut recorder, &rect);
    info!(
        "no window host on this platform, dumping {} draw calls",
        recorder.calls().len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for call in recorder.calls() {
        writeln!(out, "{}", call).context("failed to write draw list")?;
    }
    Ok(())
}
