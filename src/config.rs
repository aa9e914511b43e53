use std::ffi::OsString;
use std::path::PathBuf;

use clap::{arg, value_parser, ArgMatches, Command};

use crate::error::ConfigError;
use crate::fonts::DEFAULT_FONTS_DIR;
use crate::save::{ImageOptions, IMAGE_EXTENSION, TEXT_EXTENSION};
use crate::validate::{parse_effects, Alignment, BannerColor, Effect};

pub const DEFAULT_LOG_FILE: &str = "banner_generator.log";

/// Command line settings. Every banner field is optional; the interactive
/// flow prompts for whatever is left unset.
#[derive(Debug, Default)]
pub struct Config {
    pub text: Option<String>,
    pub font: Option<String>,
    pub color: Option<BannerColor>,
    pub align: Option<Alignment>,
    pub effects: Option<Vec<Effect>>,
    pub gradient: Option<(BannerColor, BannerColor)>,
    pub image: ImageOptions,
    pub output: Option<PathBuf>,
    pub batch: Option<PathBuf>,
    pub fonts_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    fn command() -> Command {
        Command::new("rs_banner_generator")
            .about("Generate a customizable banner.")
            .arg(arg!(--text <TEXT> "Text for the banner").required(false))
            .arg(arg!(--font <FONT> "Font for the banner").required(false))
            .arg(arg!(--color <COLOR> "Color for the banner (name or #RRGGBB)").required(false))
            .arg(arg!(--align <ALIGN> "Alignment for the banner")
                .required(false)
                .value_parser(Alignment::known_keys()))
            .arg(arg!(--effects <EFFECTS> "Text effects (comma-separated, e.g., bold,underline)").required(false))
            .arg(arg!(--gradient <COLORS> "Gradient color pair (e.g., #FF0000,#0000FF)").required(false))
            .arg(arg!(--width <PIXELS> "Image width for saving as image")
                .required(false)
                .value_parser(value_parser!(u32).range(1..)))
            .arg(arg!(--height <PIXELS> "Image height for saving as image")
                .required(false)
                .value_parser(value_parser!(u32).range(1..)))
            .arg(arg!(--"font-size" <PIXELS> "Font size for saving as image")
                .required(false)
                .value_parser(value_parser!(u32).range(1..)))
            .arg(arg!(--typeface <FILE> "TrueType/OpenType font used for image output")
                .required(false)
                .value_parser(value_parser!(PathBuf)))
            .arg(arg!(--output <FILE> "Output file name (.txt for text, .png for image)").required(false))
            .arg(arg!(--batch <FILE> "Batch process multiple banners from a JSON Lines file")
                .required(false)
                .value_parser(value_parser!(PathBuf)))
            .arg(arg!(--"fonts-dir" <DIR> "Directory searched for custom .flf fonts")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_FONTS_DIR))
            .arg(arg!(--"log-file" <FILE> "Append-only log file")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_LOG_FILE))
    }

    pub fn build() -> Result<Config, ConfigError> {
        Self::from_matches(&Self::command().get_matches())
    }

    pub fn build_from<I, T>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_matches(&Self::command().try_get_matches_from(args)?)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Config, ConfigError> {
        let string = |id: &str| matches.get_one::<String>(id).cloned();
        let number = |id: &str| matches.get_one::<u32>(id).copied();
        let path = |id: &str| matches.get_one::<PathBuf>(id).cloned();

        let color = string("color")
            .map(|c| c.parse::<BannerColor>().map_err(ConfigError::Color))
            .transpose()?;

        let align = string("align")
            .map(|a| a.parse::<Alignment>().map_err(ConfigError::Alignment))
            .transpose()?;

        let effects = match string("effects") {
            Some(list) => parse_effects(&list).map_err(|_| ConfigError::Effects(list.clone()))?,
            None => None,
        };

        let gradient = string("gradient").map(|g| parse_gradient(&g)).transpose()?;

        let output = string("output")
            .map(|o| {
                if o.ends_with(TEXT_EXTENSION) || o.ends_with(IMAGE_EXTENSION) {
                    Ok(PathBuf::from(o))
                } else {
                    Err(ConfigError::Output(o))
                }
            })
            .transpose()?;

        Ok(Config {
            text: string("text").filter(|t| !t.is_empty()),
            font: string("font"),
            color,
            align,
            effects,
            gradient,
            image: ImageOptions {
                width: number("width"),
                height: number("height"),
                font_size: number("font-size"),
                typeface: path("typeface"),
            },
            output,
            batch: path("batch"),
            fonts_dir: path("fonts-dir").unwrap_or_else(|| PathBuf::from(DEFAULT_FONTS_DIR)),
            log_file: path("log-file").unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}

fn parse_gradient(value: &str) -> Result<(BannerColor, BannerColor), ConfigError> {
    let invalid = || ConfigError::Gradient(value.to_string());
    let (from, to) = value.split_once(',').ok_or_else(invalid)?;
    let from = from.trim().parse().map_err(|_| invalid())?;
    let to = to.trim().parse().map_err(|_| invalid())?;
    Ok((from, to))
}
