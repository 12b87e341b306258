use clap::Subcommand;
use foom_core::FoomConfig;
use std::path::Path;

use super::load_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Dot-separated key (e.g. "rewards.tokens_per_hour")
        key: String,
    },
    /// Set a config value
    Set {
        /// Dot-separated key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List {
        /// Print TOML instead of JSON
        #[arg(long = "toml")]
        as_toml: bool,
    },
    /// Reset config to defaults
    Reset,
}

fn save(config: &FoomConfig, path: Option<&Path>) -> foom_core::error::Result<()> {
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}

pub fn run(action: ConfigAction, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config(config_path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = load_config(config_path)?;
            config.set(&key, &value)?;
            save(&config, config_path)?;
            tracing::info!(%key, %value, "config updated");
            println!("ok");
        }
        ConfigAction::List { as_toml } => {
            let config = load_config(config_path)?;
            if as_toml {
                println!("{}", toml::to_string_pretty(&config)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
        ConfigAction::Reset => {
            save(&FoomConfig::default(), config_path)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
