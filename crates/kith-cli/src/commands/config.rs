use std::path::Path;

use kith_core::config::KithConfig;

use crate::commands::common::Context;
use crate::error::CliError;

pub fn run_config_show(ctx: &Context) -> Result<(), CliError> {
    println!("# {}", ctx.config_path.display());
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    println!("# database: {}", ctx.db_path.display());
    println!("# contacts: {}", ctx.contacts_path.display());
    Ok(())
}

pub fn run_config_init(force: bool, config_path: &Path) -> Result<(), CliError> {
    if config_path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists; pass --force to overwrite",
            config_path.display()
        )));
    }

    KithConfig::default().save_to_path(config_path)?;
    println!("{}", config_path.display());
    Ok(())
}
