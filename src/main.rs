use std::{fs, path::PathBuf, process};

use clap::Parser;
use pica::run_source;

/// pica is a small C-like scripting language with first-class functions,
/// lexical closures, and `let`/`const` binding discipline.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the .pc script to run.
    script: PathBuf,
}

fn main() {
    let args = Args::parse();

    if args.script.extension().and_then(|ext| ext.to_str()) != Some("pc") {
        eprintln!("'{}' is not a .pc script.", args.script.display());
        process::exit(1);
    }

    let source = fs::read_to_string(&args.script).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.script.display());
        process::exit(1);
    });

    if let Err(e) = run_source(&source) {
        eprintln!("{e}");
        process::exit(1);
    }
}
