use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, custom_path: Option<&str>) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        if *init {
            let path = Config::default().save(custom_path)?;
            println!("Config file: {}", path.display());
        }

        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
