use std::fmt;
use std::str::FromStr;

use colored::{Color, ColoredString, Colorize};

pub const COLORS: [&str; 7] = ["red", "green", "yellow", "blue", "magenta", "cyan", "white"];
pub const ALIGNMENTS: [&str; 3] = ["left", "center", "right"];
pub const TEXT_EFFECTS: [&str; 5] = ["bold", "underline", "blink", "italic", "strikethrough"];

/// Checks for a `#` followed by exactly six hex digits, in either case.
///
/// ```
/// use rs_banner_generator::validate::is_valid_hex;
/// assert!(is_valid_hex("#00ffAA"));
/// assert!(!is_valid_hex("#00ffA"));
/// assert!(!is_valid_hex("#00ffAG"));
/// assert!(!is_valid_hex("red"));
/// ```
pub fn is_valid_hex(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Case-sensitive membership in the named palette.
pub fn is_named_color(color: &str) -> bool {
    COLORS.contains(&color)
}

pub fn is_valid_color(color: &str) -> bool {
    is_named_color(color) || is_valid_hex(color)
}

pub fn is_alignment(value: &str) -> bool {
    ALIGNMENTS.contains(&value)
}

pub fn is_effect(value: &str) -> bool {
    TEXT_EFFECTS.contains(&value)
}

pub fn is_yes_no(value: &str) -> bool {
    value == "y" || value == "n"
}

pub fn is_positive_integer(value: &str) -> bool {
    value.parse::<u32>().is_ok_and(|n| n > 0)
}

/// Splits a comma-separated effect list.
///
/// Empty input means "no effects" and yields `Ok(None)`. Otherwise every
/// trimmed token must be a known effect or the whole list is rejected.
///
/// ```
/// use rs_banner_generator::validate::{parse_effects, Effect};
/// assert_eq!(parse_effects(""), Ok(None));
/// assert_eq!(parse_effects("bold, underline"), Ok(Some(vec![Effect::Bold, Effect::Underline])));
/// assert!(parse_effects("bold,flying").is_err());
/// ```
pub fn parse_effects(input: &str) -> Result<Option<Vec<Effect>>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let mut effects = Vec::new();
    for token in input.split(',') {
        let effect = token.trim().parse::<Effect>()?;
        if !effects.contains(&effect) {
            effects.push(effect);
        }
    }
    Ok(Some(effects))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
    Hex(u8, u8, u8),
}

impl BannerColor {
    pub fn to_color(self) -> Color {
        match self {
            BannerColor::Red => Color::Red,
            BannerColor::Green => Color::Green,
            BannerColor::Yellow => Color::Yellow,
            BannerColor::Blue => Color::Blue,
            BannerColor::Magenta => Color::Magenta,
            BannerColor::Cyan => Color::Cyan,
            BannerColor::White => Color::White,
            BannerColor::Hex(r, g, b) => Color::TrueColor { r, g, b },
        }
    }
}

impl FromStr for BannerColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s {
            "red" => BannerColor::Red,
            "green" => BannerColor::Green,
            "yellow" => BannerColor::Yellow,
            "blue" => BannerColor::Blue,
            "magenta" => BannerColor::Magenta,
            "cyan" => BannerColor::Cyan,
            "white" => BannerColor::White,
            hex if is_valid_hex(hex) => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
                BannerColor::Hex(channel(1)?, channel(3)?, channel(5)?)
            }
            other => return Err(other.to_string()),
        };
        Ok(color)
    }
}

impl fmt::Display for BannerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerColor::Red => f.write_str("red"),
            BannerColor::Green => f.write_str("green"),
            BannerColor::Yellow => f.write_str("yellow"),
            BannerColor::Blue => f.write_str("blue"),
            BannerColor::Magenta => f.write_str("magenta"),
            BannerColor::Cyan => f.write_str("cyan"),
            BannerColor::White => f.write_str("white"),
            BannerColor::Hex(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn known_keys() -> [&'static str; 3] {
        ALIGNMENTS
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Bold,
    Underline,
    Blink,
    Italic,
    Strikethrough,
}

impl Effect {
    pub fn apply(self, text: ColoredString) -> ColoredString {
        match self {
            Effect::Bold => text.bold(),
            Effect::Underline => text.underline(),
            Effect::Blink => text.blink(),
            Effect::Italic => text.italic(),
            Effect::Strikethrough => text.strikethrough(),
        }
    }
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(Effect::Bold),
            "underline" => Ok(Effect::Underline),
            "blink" => Ok(Effect::Blink),
            "italic" => Ok(Effect::Italic),
            "strikethrough" => Ok(Effect::Strikethrough),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Effect::Bold => "bold",
            Effect::Underline => "underline",
            Effect::Blink => "blink",
            Effect::Italic => "italic",
            Effect::Strikethrough => "strikethrough",
        };
        f.write_str(name)
    }
}
