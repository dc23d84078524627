use std::{
    fs,
    path::{Path, PathBuf},
};

use flowui_layout::{FlowConfig, Size};
use serde::Deserialize;
use thiserror::Error;

/// Problems with user-supplied layout input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid size `{0}`, expected WIDTHxHEIGHT (for example `60x10`)")]
    Size(String),
    #[error("invalid number `{0}`")]
    Number(String),
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parses a `WIDTHxHEIGHT` literal such as `60x10` or `12.5X4`.
pub fn parse_size(raw: &str) -> Result<Size, InputError> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| InputError::Size(raw.to_string()))?;

    let width = width.trim().parse::<f32>();
    let height = height.trim().parse::<f32>();

    match (width, height) {
        (Ok(width), Ok(height)) => Ok(Size::new(width, height)),
        _ => Err(InputError::Size(raw.to_string())),
    }
}

/// Parses a number of points. `inf` means unbounded.
pub fn parse_points(raw: &str) -> Result<f32, InputError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| InputError::Number(raw.to_string()))
}

/// A layout description stored on disk.
///
/// ```toml
/// spacing = 8.0
/// width = 240.0
///
/// [[sizes]]
/// width = 72.0
/// height = 34.0
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutFile {
    #[serde(flatten)]
    pub config: FlowConfig,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub sizes: Vec<Size>,
}

impl LayoutFile {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let contents = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&contents).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            children = file.sizes.len(),
            "loaded layout file"
        );
        Ok(file)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Fully resolved inputs for one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub config: FlowConfig,
    pub width: f32,
    pub sizes: Vec<Size>,
}

impl Request {
    /// Command-line values win over the file; missing width means unbounded.
    pub fn resolve(
        file: Option<LayoutFile>,
        width: Option<f32>,
        spacing: Option<f32>,
        sizes: Vec<Size>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let mut config = file.config;
        if let Some(spacing) = spacing {
            config.spacing = spacing;
        }

        Self {
            config,
            width: width.or(file.width).unwrap_or(f32::INFINITY),
            sizes: if sizes.is_empty() { file.sizes } else { sizes },
        }
    }
}
