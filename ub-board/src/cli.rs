use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ub-board")]
#[command(about = "Interactive user board: list, filter, add, edit, toggle and delete users")]
#[command(version)]
pub struct Cli {
    /// Delete without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Config directory (overrides UB_CONFIG_DIR, defaults to ./.ub)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Print listings as JSON
    #[arg(long)]
    pub json: bool,
}
