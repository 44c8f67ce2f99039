//! asciicam: live webcam as real-time ASCII video in the terminal.

use clap::Parser;

use asciicam::app;
use asciicam::cli::{commands, Args, Command};
use asciicam::config::Config;
use asciicam::settings::RenderSettings;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match args.command {
        Some(Command::ListCameras) => {
            commands::list_cameras();
            return;
        }
        Some(Command::Config { action }) => {
            commands::handle_config_action(action, args.config.as_deref());
            return;
        }
        None => {}
    }

    // Settings layering: built-in defaults <- config file <- CLI flags
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut settings = RenderSettings::default();
    if let Err(e) = config.apply(&mut settings) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Some(resolution) = args.resolution {
        settings.size = resolution.into();
    }
    if let Some(ramp) = args.ramp {
        settings.ramp = ramp.into();
    }
    if let Some(brightness) = args.brightness {
        settings.brightness = brightness;
    }
    if let Some(fps) = args.fps {
        settings.target_fps = fps;
    }
    if args.no_mirror {
        settings.mirror = false;
    }

    let device_index = args.camera.unwrap_or(config.camera.device);
    let status_visible = config.ui.status_bar && !args.no_status;
    let autostart = config.camera.autostart || args.autostart;

    if let Err(e) = app::run(settings, device_index, status_visible, autostart).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
