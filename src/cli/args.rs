//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{RampArg, ResolutionArg};
use crate::settings;

/// Parse and validate brightness (0.1-3.0)
fn parse_brightness(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    settings::validate_brightness(value).map_err(|e| e.to_string())
}

/// Parse and validate target frame rate (1-60 fps)
fn parse_fps(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid frame rate", s))?;
    settings::validate_target_fps(value).map_err(|e| e.to_string())
}

/// Live webcam as real-time ASCII video in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciicam")]
#[command(version, about = "Live webcam as real-time ASCII video in the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Output grid resolution [default: small]
    #[arg(long, short)]
    pub resolution: Option<ResolutionArg>,

    /// Glyph ramp [default: classic]
    #[arg(long)]
    pub ramp: Option<RampArg>,

    /// Brightness multiplier, 0.1-3.0 [default: 1.0]
    #[arg(long, short, value_parser = parse_brightness)]
    pub brightness: Option<f32>,

    /// Target frame rate, 1-60 fps [default: 15]
    #[arg(long, short, value_parser = parse_fps)]
    pub fps: Option<u32>,

    /// Disable the mirror (facing-the-user) effect
    #[arg(long)]
    pub no_mirror: bool,

    /// Hide the status line
    #[arg(long)]
    pub no_status: bool,

    /// Start capturing immediately instead of waiting for 's'
    #[arg(long)]
    pub autostart: bool,

    /// Config file path
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["asciicam"]);
        assert!(args.command.is_none());
        assert!(args.camera.is_none());
        assert!(args.resolution.is_none());
        assert!(args.ramp.is_none());
        assert!(args.brightness.is_none());
        assert!(args.fps.is_none());
        assert!(!args.no_mirror);
        assert!(!args.no_status);
        assert!(!args.autostart);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_resolution_values() {
        let args = Args::parse_from(["asciicam", "--resolution", "small"]);
        assert_eq!(args.resolution, Some(ResolutionArg::Small));

        let args = Args::parse_from(["asciicam", "-r", "huge"]);
        assert_eq!(args.resolution, Some(ResolutionArg::Huge));
    }

    #[test]
    fn test_args_ramp_values() {
        let args = Args::parse_from(["asciicam", "--ramp", "classic"]);
        assert_eq!(args.ramp, Some(RampArg::Classic));

        let args = Args::parse_from(["asciicam", "--ramp", "simple"]);
        assert_eq!(args.ramp, Some(RampArg::Simple));

        let args = Args::parse_from(["asciicam", "--ramp", "detailed"]);
        assert_eq!(args.ramp, Some(RampArg::Detailed));
    }

    #[test]
    fn test_args_brightness_validation() {
        let args = Args::parse_from(["asciicam", "--brightness", "2.5"]);
        assert_eq!(args.brightness, Some(2.5));

        assert!(Args::try_parse_from(["asciicam", "--brightness", "0"]).is_err());
        assert!(Args::try_parse_from(["asciicam", "--brightness", "3.5"]).is_err());
        assert!(Args::try_parse_from(["asciicam", "--brightness", "dim"]).is_err());
    }

    #[test]
    fn test_args_fps_validation() {
        let args = Args::parse_from(["asciicam", "--fps", "30"]);
        assert_eq!(args.fps, Some(30));

        assert!(Args::try_parse_from(["asciicam", "--fps", "0"]).is_err());
        assert!(Args::try_parse_from(["asciicam", "--fps", "90"]).is_err());
        assert!(Args::try_parse_from(["asciicam", "--fps", "-5"]).is_err());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from(["asciicam", "--no-mirror", "--no-status", "--autostart"]);
        assert!(args.no_mirror);
        assert!(args.no_status);
        assert!(args.autostart);
    }

    #[test]
    fn test_args_camera_index() {
        let args = Args::parse_from(["asciicam", "--camera", "2"]);
        assert_eq!(args.camera, Some(2));
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["asciicam", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["asciicam", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_list_cameras_subcommand() {
        let args = Args::parse_from(["asciicam", "list-cameras"]);
        assert!(matches!(args.command, Some(Command::ListCameras)));
    }

    #[test]
    fn test_args_config_subcommands() {
        let args = Args::parse_from(["asciicam", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }

        let args = Args::parse_from(["asciicam", "config", "init"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Init,
            }) => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "asciicam",
            "--camera",
            "1",
            "--resolution",
            "large",
            "--ramp",
            "detailed",
            "--brightness",
            "1.5",
            "--fps",
            "24",
            "--no-mirror",
        ]);
        assert_eq!(args.camera, Some(1));
        assert_eq!(args.resolution, Some(ResolutionArg::Large));
        assert_eq!(args.ramp, Some(RampArg::Detailed));
        assert_eq!(args.brightness, Some(1.5));
        assert_eq!(args.fps, Some(24));
        assert!(args.no_mirror);
    }
}
