use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(
    name = "stacklift",
    about = "Translate minified JavaScript crash traces back to original sources",
    version
)]
struct Cli {
    /// Path to the source map (e.g. main.bundle.js.map)
    map: PathBuf,
    /// Path to the crash log containing the stack trace
    trace: PathBuf,
    /// Show full source paths instead of shortening the shared prefix
    #[arg(long)]
    long: bool,
    /// Write the formatted trace to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let map_json = read_input(&cli.map);
    let trace_text = read_input(&cli.trace);

    let formatted = match stacklift::beautify(&map_json, &trace_text, !cli.long) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{formatted}\n")) {
                eprintln!(
                    "{} could not write '{}': {e}",
                    "error:".red().bold(),
                    path.display().yellow()
                );
                process::exit(1);
            }
        }
        None => println!("{formatted}"),
    }
}

fn read_input(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "{} could not read '{}': {e}",
                "error:".red().bold(),
                path.display().yellow()
            );
            process::exit(1);
        }
    }
}
