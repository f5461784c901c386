pub mod types;
pub mod validate;
pub mod xml;

use std::fs;
use std::path::{Path, PathBuf};

use afas_common::Action;
use afas_common::config::Config;
use afas_core::Entity;
use afas_core::document;
use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "afas")]
#[command(about = "Validate and render AFAS UpdateConnector entities.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Action for entities that do not name one
    #[arg(short, long, global = true, default_value = "insert")]
    pub action: Action,

    /// Print less (repeat for even less)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Print more log output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an entity document
    #[command(alias = "v")]
    Validate { file: PathBuf },
    /// Validate an entity document and print its connector XML
    #[command(alias = "x")]
    Xml {
        file: PathBuf,
        /// Print the XML on a single line
        #[arg(long)]
        compact: bool,
    },
    /// List the known entity types and the children they accept
    #[command(alias = "t")]
    Types,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let pretty = !matches!(self.command, Commands::Xml { compact: true, .. });
        Config {
            default_action: self.action,
            quiet: self.quiet,
            pretty,
        }
    }
}

/// Reads and builds the entity tree stored in `path`.
pub fn load_entity(path: &Path, cfg: &Config) -> anyhow::Result<Box<dyn Entity>> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = document::parse(&input)
        .with_context(|| format!("{} is not a valid entity document", path.display()))?;
    let entity = document::load(&doc, cfg.default_action)
        .with_context(|| format!("failed to build entity from {}", path.display()))?;
    Ok(entity)
}
