use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use regex::Regex;

use crate::error::SaveError;

pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const ORIGIN: (f32, f32) = (10.0, 10.0);
/// Upper bound on the RGB buffer of one image (256 MiB).
pub const MAX_CANVAS_BYTES: u64 = 256 * 1024 * 1024;

const TYPEFACE_CANDIDATES: [&str; 9] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    "/usr/share/fonts/gnu-free/FreeMono.otf",
    "/Library/Fonts/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Outline font used to draw banner text onto images.
pub struct Typeface {
    font: FontVec,
    path: PathBuf,
}

impl Typeface {
    pub fn load(path: &Path) -> Result<Self, SaveError> {
        let data = fs::read(path)?;
        let font = FontVec::try_from_vec(data).map_err(|_| SaveError::InvalidTypeface(path.to_path_buf()))?;
        Ok(Typeface {
            font,
            path: path.to_path_buf(),
        })
    }

    /// Uses `explicit` when given, otherwise the first loadable system font.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, SaveError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        TYPEFACE_CANDIDATES
            .iter()
            .find_map(|candidate| Self::load(Path::new(candidate)).ok())
            .ok_or(SaveError::NoTypeface(TYPEFACE_CANDIDATES.len()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Removes ANSI SGR sequences so styled banners rasterize as plain glyphs.
pub fn strip_styling(text: &str) -> Cow<'_, str> {
    static SGR: OnceLock<Regex> = OnceLock::new();
    let sgr = SGR.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static regex"));
    sgr.replace_all(text, "")
}

/// Rejects canvases that are empty or whose pixel buffer would exceed
/// [`MAX_CANVAS_BYTES`].
pub fn check_canvas(width: u32, height: u32) -> Result<(), SaveError> {
    if width == 0 || height == 0 {
        return Err(SaveError::EmptyCanvas { width, height });
    }
    if u64::from(width) * u64::from(height) * 3 > MAX_CANVAS_BYTES {
        return Err(SaveError::CanvasTooLarge {
            width,
            height,
            max_bytes: MAX_CANVAS_BYTES,
        });
    }
    Ok(())
}

/// Draws `text` line by line from [`ORIGIN`] on a fresh canvas. Glyphs that
/// fall outside the canvas are clipped.
pub fn rasterize(
    text: &str,
    width: u32,
    height: u32,
    font_size: u32,
    typeface: &Typeface,
) -> Result<RgbImage, SaveError> {
    check_canvas(width, height)?;
    let mut image = RgbImage::from_pixel(width, height, BACKGROUND);

    let scale = PxScale::from(font_size as f32);
    let scaled = typeface.font.as_scaled(scale);
    let line_height = scaled.height() + scaled.line_gap();

    for (row, line) in strip_styling(text).lines().enumerate() {
        let baseline = ORIGIN.1 + scaled.ascent() + row as f32 * line_height;
        if baseline - scaled.ascent() > height as f32 {
            break;
        }
        let mut x = ORIGIN.0;
        for c in line.chars() {
            let id = typeface.font.glyph_id(c);
            let glyph = id.with_scale_and_position(scale, point(x, baseline));
            x += scaled.h_advance(id);

            if let Some(outlined) = typeface.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let px = bounds.min.x as i64 + gx as i64;
                    let py = bounds.min.y as i64 + gy as i64;
                    if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                        return;
                    }
                    let pixel = image.get_pixel_mut(px as u32, py as u32);
                    *pixel = blend(*pixel, FOREGROUND, coverage);
                });
            }
        }
    }
    Ok(image)
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let coverage = coverage.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - coverage) + b as f32 * coverage).round() as u8;
    Rgb([mix(under[0], over[0]), mix(under[1], over[1]), mix(under[2], over[2])])
}

pub fn save_png(
    path: &Path,
    text: &str,
    width: u32,
    height: u32,
    font_size: u32,
    typeface: &Typeface,
) -> Result<(), SaveError> {
    rasterize(text, width, height, font_size, typeface)?.save(path)?;
    Ok(())
}
