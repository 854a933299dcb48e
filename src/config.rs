//! Application configuration.
//!
//! Everything the harness needs to open a window and draw the scene lives in
//! [`AppConfig`], which `main` builds from the command line and passes down.

use std::fmt;
use std::path::PathBuf;

use crate::colors;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FPS: u64 = 60;
/// Largest accepted canvas side, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

pub const USAGE: &str = "\
usage: scanfill [options]

  --width N        canvas width in pixels, at most 16384 (default 800)
  --height N       canvas height in pixels, at most 16384 (default 600)
  --title TEXT     window title
  --fps N          frame rate cap (default 60)
  --output PATH    render once, save the image to PATH and exit
  --grid N         background grid spacing, 0 disables it (default 50)
  --outline        draw polygon outlines and vertices over the fill
  --log FILTER     log filter, env_logger syntax (overrides RUST_LOG)
  -h, --help       show this message";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u64,
    pub background: u32,
    pub grid_spacing: i32,
    pub outline: bool,
    /// Headless mode: render once into this file instead of opening a window.
    pub output: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "scanfill".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            background: colors::BACKGROUND,
            grid_spacing: 50,
            outline: false,
            output: None,
            log_filter: None,
        }
    }
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(AppConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    UnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => write!(f, "{flag} needs a value"),
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "invalid value for {flag}: {value:?}")
            }
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option {flag:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Frame budget in milliseconds for the configured frame rate.
    pub fn frame_target_ms(&self) -> u64 {
        1000 / self.fps.max(1)
    }

    /// Parses arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = AppConfig::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--outline" => config.outline = true,
                "--width" => config.width = dimension(&flag, args.next())?,
                "--height" => config.height = dimension(&flag, args.next())?,
                "--fps" => config.fps = positive::<u64>(&flag, args.next())?,
                "--grid" => config.grid_spacing = parse(&flag, args.next())?,
                "--title" => config.title = value(&flag, args.next())?,
                "--output" => config.output = Some(PathBuf::from(value(&flag, args.next())?)),
                "--log" => config.log_filter = Some(value(&flag, args.next())?),
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }

        Ok(Command::Run(config))
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, ConfigError> {
    next.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, ConfigError> {
    let raw = value(flag, next)?;
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: raw,
    })
}

fn positive<T>(flag: &str, next: Option<String>) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default + ToString,
{
    let n: T = parse(flag, next)?;
    if n <= T::default() {
        return Err(ConfigError::InvalidValue {
            flag: flag.to_string(),
            value: n.to_string(),
        });
    }
    Ok(n)
}

fn dimension(flag: &str, next: Option<String>) -> Result<u32, ConfigError> {
    let n: u32 = positive(flag, next)?;
    if n > MAX_DIMENSION {
        return Err(ConfigError::InvalidValue {
            flag: flag.to_string(),
            value: n.to_string(),
        });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> AppConfig {
        match AppConfig::from_args(args.iter().copied()).unwrap() {
            Command::Run(config) => config,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.frame_target_ms(), 16);
    }

    #[test]
    fn test_flags() {
        let config = run(&[
            "--width", "320", "--height", "200", "--title", "demo", "--output", "out.png",
            "--outline", "--grid", "0",
        ]);
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.title, "demo");
        assert_eq!(config.output, Some(PathBuf::from("out.png")));
        assert!(config.outline);
        assert_eq!(config.grid_spacing, 0);
    }

    #[test]
    fn test_help() {
        assert_eq!(AppConfig::from_args(["--help"]), Ok(Command::Help));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            AppConfig::from_args(["--width"]),
            Err(ConfigError::MissingValue("--width".into()))
        );
        assert_eq!(
            AppConfig::from_args(["--width", "0"]),
            Err(ConfigError::InvalidValue {
                flag: "--width".into(),
                value: "0".into()
            })
        );
        assert_eq!(
            AppConfig::from_args(["--height", "tall"]),
            Err(ConfigError::InvalidValue {
                flag: "--height".into(),
                value: "tall".into()
            })
        );
        assert_eq!(
            AppConfig::from_args(["--width", "70000", "--height", "70000"]),
            Err(ConfigError::InvalidValue {
                flag: "--width".into(),
                value: "70000".into()
            })
        );
        assert!(matches!(
            AppConfig::from_args(["--width", "16384", "--height", "16384"]),
            Ok(Command::Run(_))
        ));
        assert_eq!(
            AppConfig::from_args(["--bogus"]),
            Err(ConfigError::UnknownFlag("--bogus".into()))
        );
    }
}
