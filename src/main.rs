// main.rs
mod app;
mod buffer;
mod cli;
mod config;
mod glyph;
mod logging;
mod palette;
mod pipe;
mod render;
mod rng;
mod sim;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Launch};

fn main() -> Result<()> {
    // Bare invocation is a "no mode selected" signal, not a default run.
    if std::env::args_os().len() <= 1 {
        println!("No mode selected. Run with -h for help.");
        return Ok(());
    }

    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        logging::init(path)?;
    }

    let launch = args.into_launch();
    for notice in &launch.notices {
        println!("{notice}");
    }

    match launch.mode {
        Launch::Gui => {
            println!("[GUI] 3D mode selected... (to be implemented)");
            Ok(())
        }
        Launch::Cli(cfg) => app::run(cfg),
    }
}
