use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::banner::BannerRequest;
use crate::config::Config;
use crate::flow;
use crate::fonts::{FontCatalog, DEFAULT_FONT};
use crate::prompt::Console;

pub const MENU_OPTIONS: [&str; 6] = [
    "Generate Banner",
    "Generate Banner for All Fonts",
    "List Available Fonts",
    "Preview Colors",
    "Help",
    "Exit",
];

const HELP: [&str; 8] = [
    "Enter the text for your banner.",
    "Select a font from the list.",
    "Choose a color for your banner.",
    "Optionally, choose text effects (bold, underline, blink, italic, strikethrough).",
    "Set the alignment (left, center, right).",
    "Save the banner to a file or as an image if desired.",
    "Use command-line arguments for quick setup (--text, --font, --color, --align).",
    "Batch process multiple banners from a JSON Lines file using --batch.",
];

pub fn show_help<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("Help Menu:".green().bold())?;
    for (idx, line) in HELP.iter().enumerate() {
        console.say(format!("{}. {}", idx + 1, line))?;
    }
    Ok(())
}

pub fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("Main Menu:".green().bold())?;
    for (idx, option) in MENU_OPTIONS.iter().enumerate() {
        console.say(format!("{}. {}", idx + 1, option))?;
    }
    Ok(())
}

pub fn list_fonts<R: BufRead, W: Write>(console: &mut Console<R, W>, catalog: &FontCatalog) -> io::Result<()> {
    console.say(format!("\nAvailable fonts ({}):", catalog.len()))?;
    for (idx, font) in catalog.names().iter().enumerate() {
        console.say(format!("[{}] {}", idx + 1, font))?;
    }
    Ok(())
}

fn all_fonts<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> io::Result<()> {
    let catalog = FontCatalog::load(&config.fonts_dir);
    let text = flow::read_text(console)?;
    let color = flow::select_color(console, &catalog, DEFAULT_FONT)?;
    let effects = flow::select_effects(console)?;
    let align = flow::select_alignment(console)?;

    let template = BannerRequest {
        text,
        font: DEFAULT_FONT.to_string(),
        color,
        align,
        effects,
        gradient: None,
    };
    flow::all_fonts(console, &catalog, &template, &config.image)?;
    Ok(())
}

fn preview_colors<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> io::Result<()> {
    let catalog = FontCatalog::load(&config.fonts_dir);
    let color = flow::select_color(console, &catalog, DEFAULT_FONT)?;
    flow::color_preview(console, &catalog, color, DEFAULT_FONT)
}

/// Runs the main menu until the user picks Exit or input runs out.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> io::Result<()> {
    match dispatch(console, config) {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        other => other,
    }
}

fn dispatch<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> io::Result<()> {
    loop {
        show_menu(console)?;
        let choice = console.prompt_valid("Enter your choice (1-6): ", None, |choice| {
            matches!(choice, "1" | "2" | "3" | "4" | "5" | "6")
        })?;
        match choice.as_str() {
            "1" => {
                flow::single_banner(console, config)?;
            }
            "2" => all_fonts(console, config)?,
            "3" => list_fonts(console, &FontCatalog::load(&config.fonts_dir))?,
            "4" => preview_colors(console, config)?,
            "5" => show_help(console)?,
            _ => {
                console.success("Exiting...")?;
                return Ok(());
            }
        }
    }
}
