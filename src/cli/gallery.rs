use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::output::PageReport;
use crate::config::Config;
use crate::gallery::{GalleryView, Galleries};

/// Print one page of the reference catalog
#[derive(Args, Debug)]
pub struct GalleryCommand {
    /// Page to show (1-based)
    #[arg(short = 'p', long = "page", allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Print the page as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl GalleryCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        debug!("Executing gallery command");

        let mut galleries = Galleries::new(config)?;
        let gallery = galleries.reference_mut();
        if let Some(page) = &self.page {
            gallery.jump_to_page(page)?;
        }

        print_report(&PageReport::from_gallery(&*gallery), self.json)
    }
}

pub(super) fn print_report(report: &PageReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
