use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use super::gallery::GalleryCommand;
use super::query::QueryCommand;
use crate::config::Config;
use crate::tui;

/// Sketchscape - find images by drawing them
#[derive(Parser, Debug)]
#[command(
    name = "sketchscape",
    version,
    about = "Sketch-based image retrieval from your terminal",
    long_about = r#"Sketchscape sends a sketch to a remote retrieval model and pages through the
ranked images it returns, next to a browsable reference gallery.

Examples:
  sketchscape                              # Browse interactively
  sketchscape --sketch cat.png             # Browse, with 's' submitting cat.png
  sketchscape gallery --page 12            # Print page 12 of the reference gallery
  sketchscape query cat.png --page 2       # Print the second page of results"#
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Configuration file; defaults to ./.sketchscape.json, ./sketchscape.json
    /// or the user config directory
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Sketch submitted from interactive mode
    #[arg(short = 's', long = "sketch")]
    pub sketch: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a page of the reference gallery
    Gallery(GalleryCommand),

    /// Submit a sketch and print a page of results
    Query(QueryCommand),
}

impl Cli {
    /// Interactive mode draws on the terminal, so logs must not go to stderr
    pub fn is_interactive(&self) -> bool {
        self.command.is_none()
    }

    /// Configuration for this invocation; `--config` replaces the file search
    pub async fn load_config(&self) -> Result<Config> {
        Config::init(self.config.as_deref()).await
    }

    pub async fn execute(self, config: Config) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }
        debug!("Configuration initialized: {:?}", config);

        match &self.command {
            Some(Commands::Gallery(cmd)) => cmd.execute(&config).await,
            Some(Commands::Query(cmd)) => cmd.execute(&config).await,
            None => {
                info!("Starting interactive mode");
                tui::run(config, self.sketch).await?;
                info!("Application finished");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query() {
        let cli = Cli::parse_from([
            "sketchscape",
            "--debug",
            "query",
            "cat.png",
            "--page",
            "3",
            "--json",
        ]);
        assert!(cli.debug);
        assert!(!cli.is_interactive());
        match cli.command {
            Some(Commands::Query(cmd)) => {
                assert_eq!(cmd.sketch, PathBuf::from("cat.png"));
                assert_eq!(cmd.page.as_deref(), Some("3"));
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::parse_from(["sketchscape", "--sketch", "dog.png"]);
        assert!(cli.is_interactive());
        assert_eq!(cli.sketch, Some(PathBuf::from("dog.png")));
    }
}
