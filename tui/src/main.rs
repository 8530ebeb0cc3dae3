mod leaderboard;
mod menu;
mod prompts;
mod render;
mod screen;
mod storage;

use std::path::PathBuf;

use clap::Parser;

use snake_engine::log;
use snake_engine::logger;

use storage::Storage;

#[derive(Parser)]
#[command(name = "snake_tui")]
struct Args {
    /// Directory holding the config/, map/ and record/ folders plus the
    /// leaderboard.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let storage = Storage::new(args.data_dir);
    storage.ensure_layout()?;
    logger::init_logger(&storage.log_path())?;
    storage.ensure_defaults()?;

    log!("snake_tui started, data dir {}", storage.root().display());

    menu::run(&storage)?;
    Ok(())
}
