//! Command-line interface for the code highlighter
//!
//! Reads a source file, runs the highlighting pipeline, and writes the
//! result to stdout.
//!
//! Usage:
//!   code2html `<path>` [--format `<format>`]

use clap::{Arg, Command};
use code2html::render_format;

fn main() {
    let matches = Command::new("code2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render source code as syntax-highlighted HTML")
        .arg(
            Arg::new("path")
                .help("Path to the source file to highlight")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format ('html' or 'spans')")
                .default_value("html"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let output = render_format(&source, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}
