use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the glyph rendering step. Never surfaced to the user as a
/// program failure: the renderer turns them into an `Error: ...` line.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("banner text must not be empty")]
    EmptyText,
    #[error("font '{0}' is not available")]
    UnknownFont(String),
    #[error("could not load font '{font}': {reason}")]
    FontLoad { font: String, reason: String },
    #[error("font '{0}' produced no output for the given text")]
    Unrenderable(String),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("no usable typeface found (tried {0} system fonts), pass one with --typeface")]
    NoTypeface(usize),
    #[error("invalid typeface data in {}", .0.display())]
    InvalidTypeface(PathBuf),
    #[error("image dimensions must be positive, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("image of {width}x{height} pixels is larger than the {max_bytes} byte limit")]
    CanvasTooLarge { width: u32, height: u32, max_bytes: u64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Args(#[from] clap::Error),
    #[error("invalid color '{0}': expected one of the named colors or a #RRGGBB hex code")]
    Color(String),
    #[error("invalid alignment '{0}': expected left, center or right")]
    Alignment(String),
    #[error("invalid text effects '{0}': allowed effects are bold, underline, blink, italic, strikethrough")]
    Effects(String),
    #[error("invalid gradient '{0}': expected two colors separated by a comma")]
    Gradient(String),
    #[error("output file '{0}' must end with .txt or .png")]
    Output(String),
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("could not read batch file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("line {line}: {source}")]
    Json { line: usize, source: serde_json::Error },
    #[error("line {line}: {reason}")]
    Entry { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}
