//! ub-board - interactive user board
//!
//! ```bash
//! ub-board                 # prompts before each delete
//! ub-board --yes --json    # no prompts, JSON listings
//! ```

use ub_board::cli::Cli;
use ub_board::{Result as BoardErrorResult, Shell, logger};
use ub_core::UserViewModel;

use std::error::Error;
use std::io;

use clap::Parser;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.config_dir {
        // SAFETY: no other thread exists before the runtime is built.
        unsafe {
            std::env::set_var("UB_CONFIG_DIR", dir);
        }
    }

    tokio::runtime::Runtime::new()?.block_on(run(cli))?;
    Ok(())
}

async fn run(cli: Cli) -> BoardErrorResult<()> {
    let config = ub_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let mut view_model = UserViewModel::new();
    println!("Loading users...");
    view_model.init(config.view.loading_delay()).await;
    info!("Board ready with {} users", view_model.total());

    let stdin = io::stdin();
    let mut shell = Shell::new(view_model, stdin.lock(), io::stdout())
        .auto_confirm(cli.yes)
        .json(cli.json);
    shell.run()?;

    info!("Board closed");
    Ok(())
}
