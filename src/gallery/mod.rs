//! Paginated image galleries.
//!
//! Two independent instances share the same pagination logic: the fixed
//! reference catalog shown at startup and the ranked results of the latest
//! sketch query. [`Galleries`] owns both and tracks which one is visible.

pub mod source;
pub mod tile;

pub use source::{ImageId, ItemSource, ReferenceCatalog, ResultSet};
pub use tile::Tile;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::inference::InferenceError;
use crate::pagination::label::RESULTS_NOUN;
use crate::pagination::{InvalidPageError, PageChange, PageToken, Paginator};

/// Which gallery a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKind {
    Reference,
    Results,
}

impl GalleryKind {
    /// Noun used in the range label
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Reference => "images",
            Self::Results => RESULTS_NOUN,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Reference => "Gallery",
            Self::Results => "Retrieved Images",
        }
    }
}

/// Read and navigation surface shared by both gallery instances
pub trait GalleryView {
    fn kind(&self) -> GalleryKind;

    fn paginator(&self) -> &Paginator;

    fn paginator_mut(&mut self) -> &mut Paginator;

    /// Tiles on the current page
    fn tiles(&self) -> Vec<Tile>;

    fn range_label(&self) -> String {
        self.paginator().range_label()
    }

    fn navigation_tokens(&self) -> Vec<PageToken> {
        self.paginator().navigation_tokens()
    }

    fn previous_page(&mut self) -> PageChange {
        self.paginator_mut().previous_page()
    }

    fn next_page(&mut self) -> PageChange {
        self.paginator_mut().next_page()
    }

    fn jump_to_page(&mut self, raw_input: &str) -> Result<PageChange, InvalidPageError> {
        self.paginator_mut().jump_to_page(raw_input)
    }
}

/// A paginated view over one item source
#[derive(Debug, Clone)]
pub struct Gallery<S: ItemSource> {
    kind: GalleryKind,
    source: S,
    paginator: Paginator,
    cdn_url: String,
}

impl<S: ItemSource> Gallery<S> {
    pub fn new(
        kind: GalleryKind,
        source: S,
        page_size: usize,
        cdn_url: impl Into<String>,
    ) -> Result<Self> {
        let paginator = Paginator::new(page_size, source.len(), kind.noun())?;
        Ok(Self {
            kind,
            source,
            paginator,
            cdn_url: cdn_url.into(),
        })
    }

    /// Swap in a new item source and rewind to the first page
    pub fn replace_source(&mut self, source: S) {
        self.paginator.set_total_items(source.len());
        self.source = source;
    }
}

impl<S: ItemSource> GalleryView for Gallery<S> {
    fn kind(&self) -> GalleryKind {
        self.kind
    }

    fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    fn paginator_mut(&mut self) -> &mut Paginator {
        &mut self.paginator
    }

    fn tiles(&self) -> Vec<Tile> {
        self.paginator
            .slice_bounds()
            .filter_map(|index| {
                let id = self.source.id_at(index)?;
                Some(match self.kind {
                    GalleryKind::Reference => Tile::reference(id, &self.cdn_url),
                    GalleryKind::Results => Tile::result(id, index + 1, &self.cdn_url),
                })
            })
            .collect()
    }
}

/// Both galleries plus which one is on screen
#[derive(Debug, Clone)]
pub struct Galleries {
    reference: Gallery<ReferenceCatalog>,
    results: Gallery<ResultSet>,

    /// Set once the first query succeeds
    has_results: bool,
    visible: GalleryKind,
}

impl Galleries {
    pub fn new(config: &Config) -> Result<Self> {
        let reference = Gallery::new(
            GalleryKind::Reference,
            ReferenceCatalog::new(config.reference_total),
            config.page_size,
            config.cdn_url.clone(),
        )?;

        let results = Gallery::new(
            GalleryKind::Results,
            ResultSet::default(),
            config.page_size,
            config.cdn_url.clone(),
        )?;

        Ok(Self {
            reference,
            results,
            has_results: false,
            visible: GalleryKind::Reference,
        })
    }

    pub fn reference_mut(&mut self) -> &mut Gallery<ReferenceCatalog> {
        &mut self.reference
    }

    /// Results of the latest successful query, if any arrived yet
    pub fn results(&self) -> Option<&Gallery<ResultSet>> {
        self.has_results.then_some(&self.results)
    }

    pub fn active(&self) -> &dyn GalleryView {
        match self.visible {
            GalleryKind::Results => &self.results,
            GalleryKind::Reference => &self.reference,
        }
    }

    pub fn active_mut(&mut self) -> &mut dyn GalleryView {
        match self.visible {
            GalleryKind::Results => &mut self.results,
            GalleryKind::Reference => &mut self.reference,
        }
    }

    /// Apply the outcome of a query.
    ///
    /// On success the result gallery is replaced, rewound to page 1 and shown.
    /// On failure neither gallery is touched and the error is handed back.
    pub fn apply_query(
        &mut self,
        outcome: Result<Vec<ImageId>, InferenceError>,
    ) -> Result<usize, InferenceError> {
        let ids = match outcome {
            Ok(ids) => ids,
            Err(err) => {
                warn!("Query failed, keeping current galleries: {}", err);
                return Err(err);
            }
        };

        let count = ids.len();
        self.results.replace_source(ResultSet::new(ids));
        self.has_results = true;
        self.visible = GalleryKind::Results;
        info!("Showing {} retrieved images", count);
        Ok(count)
    }

    /// Hide the results and go back to the reference gallery
    pub fn clear_results(&mut self) {
        self.visible = GalleryKind::Reference;
    }

    /// Switch between galleries; stays on the reference gallery until results exist
    pub fn toggle(&mut self) -> GalleryKind {
        self.visible = match self.visible {
            GalleryKind::Reference if self.has_results => GalleryKind::Results,
            _ => GalleryKind::Reference,
        };
        self.visible
    }
}
