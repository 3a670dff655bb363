//! Command-line configuration.
//!
//! ```text
//! flatshade [MODEL] [--size WxH] [--fps N] [--spin|--no-spin] [--no-cull] [--snapshot OUT.png]
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::window::{DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub const DEFAULT_MODEL: &str = "assets/cube.obj";

/// Largest accepted window side, in pixels.
pub const MAX_DIMENSION: u32 = 16384;

pub const USAGE: &str = "\
usage: flatshade [MODEL] [options]

  MODEL              model file to render (default: assets/cube.obj)
  --size WxH         window size in pixels, up to 16384 a side (default: 1280x720)
  --fps N            frame rate cap, 0 for uncapped (default: 30)
  --spin, --no-spin  rotate the model (default: off)
  --no-cull          draw back faces too
  --snapshot FILE    render one frame to an image file and exit
  -h, --help         print this message";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{}", USAGE)]
    HelpRequested,
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unexpected extra argument `{0}`")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Target frame rate; 0 disables the cap.
    pub fps: u32,
    pub spin: bool,
    pub cull_back_faces: bool,
    /// Render one frame to this file instead of opening a window.
    pub snapshot: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            spin: false,
            cull_back_faces: true,
            snapshot: None,
        }
    }
}

impl Config {
    /// Parses the process arguments, skipping the program name.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut model = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "--size" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--size"))?;
                    let (width, height) =
                        parse_size(&value).ok_or_else(|| ConfigError::InvalidValue {
                            flag: "--size",
                            value: value.clone(),
                        })?;
                    config.width = width;
                    config.height = height;
                }
                "--fps" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--fps"))?;
                    config.fps = value.parse().map_err(|_| ConfigError::InvalidValue {
                        flag: "--fps",
                        value: value.clone(),
                    })?;
                }
                "--spin" => config.spin = true,
                "--no-spin" => config.spin = false,
                "--no-cull" => config.cull_back_faces = false,
                "--snapshot" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--snapshot"))?;
                    config.snapshot = Some(PathBuf::from(value));
                }
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()))
                }
                _ if model.is_none() => model = Some(PathBuf::from(arg)),
                _ => return Err(ConfigError::UnexpectedArgument(arg)),
            }
        }

        if let Some(model) = model {
            config.model = model;
        }
        Ok(config)
    }
}

/// `WxH` with both sides in `1..=MAX_DIMENSION`.
fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (width, height) = value.split_once(['x', 'X'])?;
    let width: u32 = width.parse().ok()?;
    let height: u32 = height.parse().ok()?;
    let valid = 1..=MAX_DIMENSION;
    (valid.contains(&width) && valid.contains(&height)).then_some((width, height))
}
