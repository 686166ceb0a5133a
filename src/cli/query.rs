use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::gallery::print_report;
use super::output::PageReport;
use crate::config::Config;
use crate::gallery::Galleries;
use crate::inference::{InferenceClient, SketchImage};

/// Submit a sketch and print one page of the retrieved images
#[derive(Args, Debug)]
pub struct QueryCommand {
    /// Sketch image (PNG, JPEG, ...); transparent areas count as blank canvas
    pub sketch: PathBuf,

    /// Page of results to show (1-based)
    #[arg(short = 'p', long = "page", allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Print the page as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl QueryCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        debug!("Executing query command");

        let sketch = SketchImage::load(&self.sketch)
            .with_context(|| format!("Failed to load sketch {}", self.sketch.display()))?;
        if sketch.is_blank() {
            warn!("Sketch {} is blank; submitting anyway", self.sketch.display());
        }

        let client = InferenceClient::new(config)?;
        let mut galleries = Galleries::new(config)?;
        let count = galleries
            .apply_query(client.predict(&sketch).await)
            .context("Failed to retrieve images")?;
        info!("Retrieved {} images", count);

        let results = galleries.active_mut();
        if let Some(page) = &self.page {
            results.jump_to_page(page)?;
        }

        print_report(&PageReport::from_gallery(&*results), self.json)
    }
}
