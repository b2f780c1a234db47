//! CLI entry point for dent

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dent::{Config, Pipeline};

#[derive(Parser, Debug)]
#[command(name = "dent")]
#[command(about = "List a directory, one name per line, sorted case-insensitively")]
#[command(version)]
#[command(override_usage = "dent [-ahnu] [directory_name]")]
struct Args {
    /// Directory to list
    #[arg(value_name = "directory_name", default_value = ".")]
    directory: PathBuf,

    /// Show all entries, including `.` and `..` and other dot-prefixed names
    #[arg(short, long)]
    all: bool,

    /// Exclude every entry whose name starts with `.`
    #[arg(short = 'n', long = "no-dotfiles")]
    no_dotfiles: bool,

    /// Print entries as encountered, skipping buffering and sorting
    #[arg(short = 'u', long)]
    unordered: bool,
}

fn main() {
    let args = Args::parse();

    let config = Config {
        directory: args.directory,
        show_all: args.all,
        no_dotfiles: args.no_dotfiles,
        unordered: args.unordered,
    };

    let mut pipeline = Pipeline::new(config);
    let stdout = io::stdout();
    if let Err(e) = pipeline.run(stdout.lock()) {
        eprintln!("dent: {}", e);
        process::exit(1);
    }
}
