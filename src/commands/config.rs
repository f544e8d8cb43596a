//! `--show-config` handler

use anyhow::{Context, Result};

use cle::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = config.to_toml().context("Failed to render config")?;
    match Config::config_path() {
        Some(path) => println!("# default location: {}", path.display()),
        None => println!("# no default config location on this platform"),
    }
    print!("{}", toml_str);
    Ok(())
}
