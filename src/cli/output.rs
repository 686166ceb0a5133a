//! Plain-text and JSON rendering of one gallery page

use anyhow::Result;
use serde::Serialize;

use crate::gallery::{GalleryView, Tile};
use crate::pagination::PageToken;

/// Everything a non-interactive caller needs to show one page
#[derive(Debug, Serialize)]
pub struct PageReport {
    pub gallery: &'static str,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub label: String,
    pub tokens: Vec<PageToken>,
    pub tiles: Vec<Tile>,
}

impl PageReport {
    pub fn from_gallery(gallery: &dyn GalleryView) -> Self {
        let paginator = gallery.paginator();
        Self {
            gallery: gallery.kind().title(),
            page: paginator.current_page(),
            total_pages: paginator.total_pages(),
            total_items: paginator.total_items(),
            label: gallery.range_label(),
            tokens: gallery.navigation_tokens(),
            tiles: gallery.tiles(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Navigation row with the current page bracketed
    pub fn navigation_line(&self) -> String {
        if self.tokens.is_empty() {
            return String::new();
        }

        let previous = if self.page > 1 { "← Previous" } else { "  " };
        let next = if self.page < self.total_pages { "Next →" } else { "" };
        let numbers: Vec<String> = self
            .tokens
            .iter()
            .map(|token| match token {
                PageToken::Page(page) if *page == self.page => format!("[{}]", page),
                other => other.to_string(),
            })
            .collect();

        format!("{}  {}  {}", previous, numbers.join(" "), next)
            .trim_end()
            .to_string()
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![self.gallery.to_string(), self.label.clone()];

        let navigation = self.navigation_line();
        if !navigation.is_empty() {
            lines.push(navigation);
        }

        lines.extend(self.tiles.iter().map(|tile| match tile.rank {
            Some(rank) => format!("{:>5}. #{:<6} {}", rank, tile.id, tile.url),
            None => format!("{:>12}  {}", tile.caption, tile.url),
        }));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gallery::{Galleries, ImageId};

    fn config() -> Config {
        Config {
            cdn_url: "https://cdn.example.com/".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_reference_report() {
        let mut galleries = Galleries::new(&config()).unwrap();
        galleries.active_mut().paginator_mut().go_to_page(5).unwrap();

        let report = PageReport::from_gallery(galleries.active());
        assert_eq!(report.page, 5);
        assert_eq!(report.total_pages, 150);
        assert_eq!(report.navigation_line(), "← Previous  1 … 4 [5] 6 … 150  Next →");

        let text = report.to_text();
        assert!(text.starts_with("Gallery\nShowing 81-100 of 3000 images\n"));
        assert!(text.contains("Image 80  https://cdn.example.com/80.jpg"));
    }

    #[test]
    fn test_results_report_json() {
        let mut galleries = Galleries::new(&config()).unwrap();
        galleries.apply_query(Ok(vec![ImageId(7), ImageId(3)])).unwrap();

        let report = PageReport::from_gallery(galleries.active());
        assert_eq!(report.navigation_line(), "");

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["label"], "Showing 1-2 of 2 results");
        assert_eq!(json["total_items"], 2);
        assert_eq!(json["tiles"][1]["id"], 3);
        assert_eq!(json["tiles"][1]["rank"], 2);
        assert_eq!(json["tokens"], serde_json::json!([]));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let mut galleries = Galleries::new(&config()).unwrap();
        galleries.apply_query(Ok((0..45).map(ImageId).collect())).unwrap();
        galleries.active_mut().paginator_mut().go_to_page(3).unwrap();

        let report = PageReport::from_gallery(galleries.active());
        assert_eq!(report.navigation_line(), "← Previous  1 2 [3]");
    }
}
