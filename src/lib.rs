//! rTimegrid library root.
//! Calendar model, aggregation engine, disclosure state and color mapping,
//! plus the CLI shell that renders and exports the time matrix.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::{
    AggregateCache, Calendar, Disclosure, HoverEntry, LabelProvider, LocaleLabels, aggregate,
    color_for,
};
pub use errors::AppError;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Calendar { .. } => cli::commands::calendar::handle(cli, cfg),
        Commands::Report { .. } => cli::commands::report::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let (cfg, config_path) = match &cli.config {
        Some(p) => {
            let path = utils::path::expand_tilde(p);
            (Config::load_from(&path)?, path)
        }
        None => (Config::load()?, Config::config_file()),
    };

    dispatch(&cli, &cfg, &config_path)
}
