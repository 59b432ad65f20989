//! `polyorbit [OPTIONS.toml]`: open the viewer window.
//!
//! With no argument the built-in defaults are used. Set `RUST_LOG=debug`
//! for input and buffer diagnostics.

use std::path::Path;

use polyorbit::{Options, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
