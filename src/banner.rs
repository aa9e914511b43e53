use std::panic::{self, AssertUnwindSafe};

use colored::Colorize;
use figlet_rs::FIGfont;
use log::{error, info};

use crate::error::RenderError;
use crate::fonts::{FontCatalog, MALFORMED_FONT};
use crate::validate::{Alignment, BannerColor, Effect};

/// Width used to justify centered and right-aligned banners.
pub const RENDER_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq)]
pub struct BannerRequest {
    pub text: String,
    pub font: String,
    pub color: BannerColor,
    pub align: Alignment,
    pub effects: Option<Vec<Effect>>,
    pub gradient: Option<(BannerColor, BannerColor)>,
}

impl BannerRequest {
    pub fn new(text: &str, font: &str, color: BannerColor) -> Self {
        BannerRequest {
            text: text.to_string(),
            font: font.to_string(),
            color,
            align: Alignment::Left,
            effects: None,
            gradient: None,
        }
    }

    fn describe(&self) -> String {
        let effects = match &self.effects {
            Some(effects) => effects.iter().map(Effect::to_string).collect::<Vec<_>>().join(","),
            None => "none".to_string(),
        };
        format!(
            "{}, font: {}, color: {}, align: {}, effects: {}",
            self.text, self.font, self.color, self.align, effects
        )
    }
}

/// Pads each line of a rendered block for the requested alignment.
pub fn justify(block: &str, align: Alignment, width: usize) -> String {
    if align == Alignment::Left {
        return block.to_string();
    }
    let mut justified = String::with_capacity(block.len());
    for line in block.lines() {
        let len = line.chars().count();
        let pad = match align {
            Alignment::Right => width.saturating_sub(len + 1),
            _ => width.saturating_sub(len) / 2,
        };
        justified.push_str(&" ".repeat(pad));
        justified.push_str(line);
        justified.push('\n');
    }
    justified
}

/// Expands `text` into ASCII-art glyphs without any styling.
pub fn figure(catalog: &FontCatalog, text: &str, font: &str, align: Alignment) -> Result<String, RenderError> {
    if text.is_empty() {
        return Err(RenderError::EmptyText);
    }
    let figfont = catalog.resolve(font)?;
    let figure = panic::catch_unwind(AssertUnwindSafe(|| figfont.convert(text).map(|f| f.to_string())))
        .map_err(|_| RenderError::FontLoad {
            font: font.to_string(),
            reason: MALFORMED_FONT.to_string(),
        })?
        .ok_or_else(|| RenderError::Unrenderable(font.to_string()))?;
    Ok(justify(&figure, align, RENDER_WIDTH))
}

/// Renders and styles a banner, logging the outcome.
pub fn try_render(catalog: &FontCatalog, request: &BannerRequest) -> Result<String, RenderError> {
    let block = match figure(catalog, &request.text, &request.font, request.align) {
        Ok(block) => block,
        Err(e) => {
            error!("Error generating banner: {e} ({})", request.describe());
            return Err(e);
        }
    };

    let styled = match request.gradient {
        Some(_) => block
            .lines()
            .map(|line| format!("{}\n", line.green()))
            .collect::<String>(),
        None => {
            let mut styled = block.as_str().color(request.color.to_color());
            for effect in request.effects.iter().flatten() {
                styled = effect.apply(styled);
            }
            styled.to_string()
        }
    };
    info!("Banner generated: {}", request.describe());
    Ok(styled)
}

/// Never fails: rendering errors come back as an `Error: ...` line meant to be
/// displayed as-is.
pub fn render_banner(catalog: &FontCatalog, request: &BannerRequest) -> String {
    try_render(catalog, request).unwrap_or_else(|e| format!("Error: {e}"))
}

/// Welcome header shown before the single banner flow.
pub fn title() -> String {
    let figure = match FIGfont::standard() {
        Ok(font) => font.convert("Banner Generator").map(|f| f.to_string()).unwrap_or_default(),
        Err(_) => String::new(),
    };
    format!("{}{}", figure, "Welcome to the Customizable Banner Generator!".green().bold())
}
