//! Command-line interface for the markup highlighter
//!
//! Reads an XML file and writes its highlighted HTML rendering to
//! stdout.
//!
//! Usage:
//!   xml2html `<path>`

use clap::{Arg, Command};
use code2html::markup;

fn main() {
    let matches = Command::new("xml2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render XML markup as syntax-highlighted HTML")
        .arg(
            Arg::new("path")
                .help("Path to the XML file to highlight")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    print!("{}", markup::convert(&source));
}
