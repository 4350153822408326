//! tableify library root.
//! Exposes the Table API, cell values, record mapping, and the CLI runner.

pub mod cli;
pub mod config;
pub mod errors;
pub mod format;
pub mod input;
pub mod record;
pub mod table;
pub mod utils;
pub mod value;

pub use errors::{AppError, AppResult};
pub use format::{FormatFn, format_value};
pub use record::{ColumnSpec, Tableify};
pub use table::Table;
pub use value::{Stringify, ToValue, Value};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref())?;
    dispatch(&cli, &cfg)
}
