use std::fs;
use std::panic;
use std::path::{Path, PathBuf};

use figlet_rs::FIGfont;
use log::warn;

use crate::error::RenderError;

pub const DEFAULT_FONT: &str = "standard";
pub const DEFAULT_FONTS_DIR: &str = "custom_fonts";
pub const FONT_EXTENSION: &str = ".flf";
pub(crate) const MALFORMED_FONT: &str = "malformed font file";

/// Fonts compiled into figlet-rs.
pub const BUILTIN_FONTS: [&str; 1] = [DEFAULT_FONT];

/// Font names available for one invocation: the built-in fonts followed by
/// every `.flf` file found in the custom fonts directory, sorted by name.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    names: Vec<String>,
    custom_dir: PathBuf,
}

impl FontCatalog {
    pub fn load(custom_dir: &Path) -> Self {
        let mut names: Vec<String> = BUILTIN_FONTS.iter().map(|f| f.to_string()).collect();
        names.extend(Self::custom_fonts(custom_dir));
        FontCatalog {
            names,
            custom_dir: custom_dir.to_path_buf(),
        }
    }

    fn custom_fonts(dir: &Path) -> Vec<String> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        let mut fonts: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.file_name().to_string_lossy().to_string()),
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {e}", dir.display());
                    None
                }
            })
            .filter(|name| name.ends_with(FONT_EXTENSION))
            .collect();
        fonts.sort();
        fonts
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry_for(name).is_some()
    }

    /// Custom fonts are listed with their `.flf` suffix but may be requested
    /// without it.
    fn entry_for(&self, name: &str) -> Option<&str> {
        let with_extension = format!("{name}{FONT_EXTENSION}");
        self.names
            .iter()
            .find(|entry| entry.as_str() == name)
            .or_else(|| self.names.iter().find(|entry| **entry == with_extension))
            .map(String::as_str)
    }

    pub fn resolve(&self, name: &str) -> Result<FIGfont, RenderError> {
        let entry = self
            .entry_for(name)
            .ok_or_else(|| RenderError::UnknownFont(name.to_string()))?;

        let loaded = if BUILTIN_FONTS.contains(&entry) {
            FIGfont::standard()
        } else {
            // figlet-rs panics on some malformed .flf files instead of returning Err.
            let path = self.custom_dir.join(entry).to_string_lossy().into_owned();
            panic::catch_unwind(|| FIGfont::from_file(&path))
                .unwrap_or_else(|_| Err(MALFORMED_FONT.to_string()))
        };
        loaded.map_err(|reason| RenderError::FontLoad {
            font: name.to_string(),
            reason,
        })
    }
}
