use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        if config_path.exists() && !*force {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            ));
            return Ok(());
        }

        let cfg = Config::default();
        cfg.save_to(config_path)?;

        println!("📄 Config file : {}", config_path.display());
        println!("🗂️  Dataset     : {}", cfg.data_file);
        success("rTimegrid initialization completed!");
    }
    Ok(())
}
