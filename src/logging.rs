use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use log::LevelFilter;

/// Sends every log record to `path`, appending one
/// `timestamp - LEVEL - message` line per record. `RUST_LOG` can override
/// the default `info` level. Call once per process.
pub fn init(path: &Path) -> io::Result<()> {
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .map_err(io::Error::other)
}
