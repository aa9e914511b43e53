use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::error::SaveError;
use crate::prompt::Console;
use crate::raster::{self, Typeface};
use crate::validate::is_positive_integer;

pub const TEXT_EXTENSION: &str = ".txt";
pub const IMAGE_EXTENSION: &str = ".png";
pub const DEFAULT_IMAGE_FILE: &str = "banner.png";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 200;
pub const DEFAULT_FONT_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
}

/// Image settings that come from the command line. Unset fields are asked for
/// interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font_size: Option<u32>,
    pub typeface: Option<PathBuf>,
}

impl ImageOptions {
    pub fn spec_for(&self, path: &Path) -> ImageSpec {
        ImageSpec {
            path: path.to_path_buf(),
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        }
    }
}

/// Writes the banner exactly as rendered, styling sequences included.
pub fn save_text(path: &Path, banner: &str) -> Result<(), SaveError> {
    fs::write(path, banner)?;
    Ok(())
}

pub fn save_image(spec: &ImageSpec, banner: &str, typeface: Option<&Path>) -> Result<(), SaveError> {
    raster::check_canvas(spec.width, spec.height)?;
    let typeface = Typeface::locate(typeface)?;
    raster::save_png(&spec.path, banner, spec.width, spec.height, spec.font_size, &typeface)
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
    result: Result<(), SaveError>,
    what: &str,
) -> io::Result<bool> {
    match result {
        Ok(()) => {
            info!("Banner saved as {}", path.display());
            console.success(&format!("Banner saved as {}", path.display()))?;
            Ok(true)
        }
        Err(e) => {
            error!("Error saving {what} {}: {e}", path.display());
            console.error(&format!("Error saving {what}: {e}"))?;
            Ok(false)
        }
    }
}

/// Saves to a path chosen up front, picking text or image by extension.
pub fn save_to_output<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    banner: &str,
    output: &Path,
    options: &ImageOptions,
) -> io::Result<bool> {
    if output.to_string_lossy().ends_with(IMAGE_EXTENSION) {
        let spec = options.spec_for(output);
        let result = save_image(&spec, banner, options.typeface.as_deref());
        report(console, output, result, "image")
    } else {
        report(console, output, save_text(output, banner), "file")
    }
}

/// Asks whether to save as text and, if so, where. Returns the written path.
pub fn offer_text_save<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    banner: &str,
) -> io::Result<Option<PathBuf>> {
    if !console.confirm("Do you want to save the banner to a file?", false)? {
        return Ok(None);
    }
    let name = console.prompt_valid(
        &format!("Enter the file name (with {TEXT_EXTENSION} extension): "),
        None,
        |name| name.ends_with(TEXT_EXTENSION),
    )?;
    let path = PathBuf::from(name);
    let saved = report(console, &path, save_text(&path, banner), "file")?;
    Ok(saved.then_some(path))
}

fn ask_dimension<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: Option<u32>,
    label: &str,
    default: u32,
) -> io::Result<u32> {
    if let Some(value) = preset {
        return Ok(value);
    }
    let answer = console.prompt_valid(
        &format!("Enter {label} (default {default}): "),
        Some(default.to_string().as_str()),
        is_positive_integer,
    )?;
    answer
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Asks whether to save as an image, then collects the file name and geometry.
pub fn offer_image_save<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    banner: &str,
    options: &ImageOptions,
) -> io::Result<Option<ImageSpec>> {
    if !console.confirm("Do you want to save the banner as an image?", false)? {
        return Ok(None);
    }
    let name = console.prompt_valid(
        &format!("Enter the file name (with {IMAGE_EXTENSION} extension): "),
        Some(DEFAULT_IMAGE_FILE),
        |name| name.ends_with(IMAGE_EXTENSION),
    )?;
    let spec = ImageSpec {
        path: PathBuf::from(name),
        width: ask_dimension(console, options.width, "image width", DEFAULT_WIDTH)?,
        height: ask_dimension(console, options.height, "image height", DEFAULT_HEIGHT)?,
        font_size: ask_dimension(console, options.font_size, "font size", DEFAULT_FONT_SIZE)?,
    };
    let result = save_image(&spec, banner, options.typeface.as_deref());
    let saved = report(console, &spec.path, result, "image")?;
    Ok(saved.then_some(spec))
}
