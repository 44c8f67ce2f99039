//! Subcommand handlers for list-cameras and config actions.

use std::path::Path;

use super::args::ConfigAction;
use crate::camera;
use crate::config::{default_path, Config};
use crate::settings::RenderSettings;

/// List available cameras and print them to stdout.
pub fn list_cameras() {
    match camera::list_devices() {
        Ok(devices) => {
            if devices.is_empty() {
                println!("No cameras found.");
                println!();
                println!("Make sure your camera is connected and permissions are granted.");
                println!(
                    "On macOS, grant access in System Settings > Privacy & Security > Camera."
                );
            } else {
                println!("Available cameras:");
                for device in devices {
                    println!("  {}", device);
                }
                println!();
                println!("Use --camera <index> to select a camera.");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) {
    match action {
        ConfigAction::Show => {
            let config = match Config::load(config_path) {
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

            println!("Current configuration:");
            println!("  Camera: {}", config.camera.device);
            println!("  Resolution: {}", settings.size);
            println!("  Ramp: {}", settings.ramp.name());
            println!("  Brightness: {:.1}", settings.brightness);
            println!("  Target FPS: {}", settings.target_fps);
            println!("  Mirror: {}", if settings.mirror { "yes" } else { "no" });
            println!("  Autostart: {}", if config.camera.autostart { "yes" } else { "no" });
            println!(
                "  Status bar: {}",
                if config.ui.status_bar { "yes" } else { "no" }
            );
            println!();

            let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_path);
            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_path);

            if path.exists() {
                eprintln!("Config file already exists: {}", path.display());
                eprintln!("Use 'asciicam config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", path.display());
        }
    }
}

/// Default config file written by `asciicam config init`.
const DEFAULT_CONFIG: &str = r#"# asciicam configuration

[camera]
# Camera device index (see 'asciicam list-cameras')
device = 0
# Mirror horizontally (facing-the-user effect)
mirror = true
# Start capturing on launch instead of waiting for 's'
autostart = false

[render]
# Output grid resolution: 40x24, 60x36, 80x48, 100x56, 120x60
resolution = "40x24"
# Glyph ramp: classic, simple, detailed
ramp = "classic"
# Brightness multiplier (0.1-3.0)
brightness = 1.0
# Target frame rate (1-60)
fps = 15

[ui]
# Show the status line
status_bar = true
"#;
