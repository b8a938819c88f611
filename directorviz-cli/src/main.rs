use clap::Parser;
use std::io::IsTerminal;

use directorviz::{Config, logging};

fn main() {
    let config = Config::parse();
    logging::init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = directorviz::run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
