use std::error::Error;
use std::process;

use colored::Colorize;

use rs_banner_generator::{batch, logging, menu};
use rs_banner_generator::{Config, Console, FontCatalog};

#[tokio::main]
async fn main() {
    let config = Config::build().unwrap_or_else(|err| {
        println!("Problem parsing arguments: {err}");
        process::exit(1);
    });

    if let Err(e) = logging::init(&config.log_file) {
        println!("Could not open log file {}: {e}", config.log_file.display());
        process::exit(1);
    }

    tokio::spawn(exit_on_interrupt());

    // Prompts block on stdin, so the whole session runs on one blocking thread.
    match tokio::task::spawn_blocking(move || run(config)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            println!("Application error: {e}");
            process::exit(1);
        }
        Err(e) => {
            println!("Application error: {e}");
            process::exit(1);
        }
    }
}

async fn exit_on_interrupt() {
    if tokio::signal::ctrl_c().await.is_ok() {
        println!("\n{}", "Ctrl+C pressed. Exiting...".red().bold());
        process::exit(0);
    }
}

fn run(config: Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut console = Console::stdio();
    match &config.batch {
        Some(path) => {
            let catalog = FontCatalog::load(&config.fonts_dir);
            batch::run(&mut console, path, &catalog, &config.image)?;
        }
        None => menu::run(&mut console, &config)?,
    }
    Ok(())
}
