use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::banner::{self, render_banner, BannerRequest};
use crate::config::Config;
use crate::fonts::{FontCatalog, DEFAULT_FONT};
use crate::prompt::Console;
use crate::save::{self, ImageOptions};
use crate::select::select_from_list;
use crate::validate::{is_alignment, parse_effects, Alignment, BannerColor, Effect};

pub const PREVIEW_TEXT: &str = "This is a preview of the color.";

pub fn read_text<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
    console.prompt_valid("Enter the text for your banner: ", None, |text| !text.is_empty())
}

pub fn color_preview<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &FontCatalog,
    color: BannerColor,
    font: &str,
) -> io::Result<()> {
    let preview = render_banner(catalog, &BannerRequest::new(PREVIEW_TEXT, font, color));
    console.say(preview)
}

/// Asks for a color until one is valid and the user accepts its preview.
pub fn select_color<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &FontCatalog,
    font: &str,
) -> io::Result<BannerColor> {
    loop {
        let answer = console.prompt(
            "Enter the color name or HEX code (or press Enter for default 'white'): ",
            Some("white"),
        )?;
        let color = match answer.parse::<BannerColor>() {
            Ok(color) => color,
            Err(_) => {
                console.error("Invalid color! Try again.")?;
                continue;
            }
        };
        color_preview(console, catalog, color, font)?;
        if console.confirm("Is this color okay?", true)? {
            return Ok(color);
        }
    }
}

/// `None` means no effects were asked for.
pub fn select_effects<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<Vec<Effect>>> {
    loop {
        let answer = console.prompt(
            "Enter text effects (comma-separated, e.g., bold,underline): ",
            Some(""),
        )?;
        match parse_effects(&answer) {
            Ok(effects) => return Ok(effects),
            Err(_) => console.error("Invalid text effects! Try again.")?,
        }
    }
}

pub fn select_alignment<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Alignment> {
    let answer = console.prompt_valid(
        "Enter alignment (left/center/right, or press Enter for default 'left'): ",
        Some("left"),
        is_alignment,
    )?;
    answer
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("unexpected alignment {e}")))
}

fn offer_saves<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    banner: &str,
    options: &ImageOptions,
) -> io::Result<()> {
    save::offer_text_save(console, banner)?;
    save::offer_image_save(console, banner, options)?;
    Ok(())
}

/// Collects every field not given on the command line, renders, displays and
/// offers to save a single banner. Returns `None` if the font selection was
/// cancelled.
pub fn single_banner<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> io::Result<Option<String>> {
    console.say("\x1B[2J\x1B[1;1H")?;
    console.say(banner::title())?;
    console.say("")?;
    crate::menu::show_help(console)?;

    let text = match &config.text {
        Some(text) => text.clone(),
        None => read_text(console)?,
    };

    let catalog = FontCatalog::load(&config.fonts_dir);
    let font = match &config.font {
        Some(font) => font.clone(),
        None => match select_from_list(console, catalog.names(), "font", Some(DEFAULT_FONT))? {
            Some(font) => font,
            None => {
                console.error("No font selected. Returning to the menu.")?;
                return Ok(None);
            }
        },
    };

    let color = match config.color {
        Some(color) => color,
        None => select_color(console, &catalog, &font)?,
    };
    let effects = match &config.effects {
        Some(effects) => Some(effects.clone()),
        None => select_effects(console)?,
    };
    let align = match config.align {
        Some(align) => align,
        None => select_alignment(console)?,
    };

    let request = BannerRequest {
        text,
        font,
        color,
        align,
        effects,
        gradient: config.gradient,
    };
    let rendered = render_banner(&catalog, &request);
    console.say(format!("\n{}\n", "Here is your banner:".blue().bold()))?;
    console.say(&rendered)?;

    match &config.output {
        Some(output) => {
            save::save_to_output(console, &rendered, output, &config.image)?;
        }
        None => offer_saves(console, &rendered, &config.image)?,
    }
    Ok(Some(rendered))
}

/// Renders `template` once per catalog font, in catalog order, offering to
/// save each result. The template's font is ignored.
pub fn all_fonts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &FontCatalog,
    template: &BannerRequest,
    options: &ImageOptions,
) -> io::Result<usize> {
    let mut rendered = 0;
    for font in catalog.names() {
        let request = BannerRequest {
            font: font.clone(),
            ..template.clone()
        };
        let banner = render_banner(catalog, &request);
        console.say(format!("\n{}\n", format!("Font: {font}").blue().bold()))?;
        console.say(&banner)?;
        rendered += 1;

        if console.confirm("Do you want to save this banner?", false)? {
            offer_saves(console, &banner, options)?;
        }
    }
    Ok(rendered)
}
