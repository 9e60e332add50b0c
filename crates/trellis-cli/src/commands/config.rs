//! `config` subcommand: inspect and edit the settings file

use anyhow::Context;
use clap::{Args, Subcommand};

use crate::config::{config_file_path, Config};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings as TOML
    Show,
    /// Validate and store one setting
    Set {
        /// One of: format, directed, default_weight, seed
        key: String,
        value: String,
    },
    /// Print the config file location
    Path,
}

pub fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    let path = config_file_path();
    match &args.command {
        ConfigCommands::Show => {
            let config = Config::load().context("Failed to load config")?;
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load().context("Failed to load config")?;
            config.set(key, value)?;
            config
                .save()
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Set {} = {}", key, value);
        }
        ConfigCommands::Path => println!("{}", path.display()),
    }
    Ok(())
}
