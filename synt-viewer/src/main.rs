//! Standalone binary for the synt interactive viewer.
//! Usage:
//!   syntv <path> [--format tui|tree]

mod viewer;

use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("syntv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for syntax analyzer output")
        .arg(
            Arg::new("path")
                .help("Path to the analyzer result JSON to open")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output mode: tui (interactive) or tree (plain-text dump)")
                .default_value("tui"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let result = match format.as_str() {
        "tui" => viewer::viewer::run_viewer(PathBuf::from(path)),
        "tree" => viewer::viewer::dump_tree(PathBuf::from(path)),
        other => {
            eprintln!("Unknown format '{}'; expected 'tui' or 'tree'", other);
            std::process::exit(2);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
