//! `--batch` support: one JSON object per line, each describing a banner.
//!
//! ```text
//! {"text": "HELLO", "color": "red", "output": "hello.txt"}
//! {"text": "Bye", "font": "mine.flf", "align": "center", "effects": "bold,underline"}
//! ```

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::warn;
use serde::Deserialize;

use crate::banner::{render_banner, BannerRequest};
use crate::error::BatchError;
use crate::fonts::{FontCatalog, DEFAULT_FONT};
use crate::prompt::Console;
use crate::save::{self, ImageOptions, IMAGE_EXTENSION, TEXT_EXTENSION};
use crate::validate::{parse_effects, Alignment, BannerColor};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchEntry {
    pub text: String,
    pub font: Option<String>,
    pub color: Option<String>,
    pub align: Option<String>,
    pub effects: Option<String>,
    pub output: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font_size: Option<u32>,
}

/// One validated batch line.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    pub line: usize,
    pub request: BannerRequest,
    pub output: Option<PathBuf>,
    pub image: ImageOptions,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rendered: usize,
    pub saved: usize,
    pub failed: usize,
}

impl BatchEntry {
    fn into_job(self, line: usize, defaults: &ImageOptions) -> Result<BatchJob, BatchError> {
        let invalid = |reason: String| BatchError::Entry { line, reason };

        if self.text.is_empty() {
            return Err(invalid("text must not be empty".to_string()));
        }
        let color = match self.color {
            Some(color) => color
                .parse::<BannerColor>()
                .map_err(|c| invalid(format!("invalid color '{c}'")))?,
            None => BannerColor::default(),
        };
        let align = match self.align {
            Some(align) => align
                .parse::<Alignment>()
                .map_err(|a| invalid(format!("invalid alignment '{a}'")))?,
            None => Alignment::default(),
        };
        let effects = match self.effects {
            Some(effects) => {
                parse_effects(&effects).map_err(|e| invalid(format!("invalid text effect '{e}'")))?
            }
            None => None,
        };
        if let Some(output) = &self.output {
            let name = output.to_string_lossy();
            if !name.ends_with(TEXT_EXTENSION) && !name.ends_with(IMAGE_EXTENSION) {
                return Err(invalid(format!("output '{name}' must end with .txt or .png")));
            }
        }

        Ok(BatchJob {
            line,
            request: BannerRequest {
                text: self.text,
                font: self.font.unwrap_or_else(|| DEFAULT_FONT.to_string()),
                color,
                align,
                effects,
                gradient: None,
            },
            output: self.output,
            image: ImageOptions {
                width: self.width.or(defaults.width),
                height: self.height.or(defaults.height),
                font_size: self.font_size.or(defaults.font_size),
                typeface: defaults.typeface.clone(),
            },
        })
    }
}

/// Parses every non-blank, non-`#` line. Line numbers are one-based.
pub fn parse(content: &str, defaults: &ImageOptions) -> Vec<Result<BatchJob, BatchError>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, json)| {
            serde_json::from_str::<BatchEntry>(json)
                .map_err(|source| BatchError::Json { line, source })
                .and_then(|entry| entry.into_job(line, defaults))
        })
        .collect()
}

/// Renders every job in `path`, saving those with an output file. Bad lines
/// are reported and skipped.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
    catalog: &FontCatalog,
    defaults: &ImageOptions,
) -> Result<BatchSummary, BatchError> {
    let content = fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut summary = BatchSummary::default();
    for job in parse(&content, defaults) {
        let job = match job {
            Ok(job) => job,
            Err(e) => {
                warn!("Skipping batch entry in {}: {e}", path.display());
                console.error(&format!("Skipping {e}"))?;
                summary.failed += 1;
                continue;
            }
        };

        let banner = render_banner(catalog, &job.request);
        summary.rendered += 1;
        console.say(format!("\n{}\n", format!("Banner {}", job.line).blue().bold()))?;
        console.say(&banner)?;

        if let Some(output) = &job.output {
            if save::save_to_output(console, &banner, output, &job.image)? {
                summary.saved += 1;
            } else {
                summary.failed += 1;
            }
        }
    }

    console.say(format!(
        "\nBatch complete: {} rendered, {} saved, {} failed",
        summary.rendered, summary.saved, summary.failed
    ))?;
    Ok(summary)
}
