//! Item sources behind a gallery.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an image in the retrieval catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ImageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Ordered, indexable list of image identifiers
pub trait ItemSource {
    fn len(&self) -> usize;

    fn id_at(&self, index: usize) -> Option<ImageId>;
}

/// The fixed reference catalog, addressed by sequential index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCatalog {
    total: usize,
}

impl ReferenceCatalog {
    pub fn new(total: usize) -> Self {
        Self { total }
    }
}

impl ItemSource for ReferenceCatalog {
    fn len(&self) -> usize {
        self.total
    }

    fn id_at(&self, index: usize) -> Option<ImageId> {
        (index < self.total).then(|| ImageId(index as u64))
    }
}

/// Ranked identifiers returned by one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    ids: Vec<ImageId>,
}

impl ResultSet {
    pub fn new(ids: Vec<ImageId>) -> Self {
        Self { ids }
    }
}

impl ItemSource for ResultSet {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn id_at(&self, index: usize) -> Option<ImageId> {
        self.ids.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_ids_are_indices() {
        let catalog = ReferenceCatalog::new(3000);
        assert_eq!(catalog.len(), 3000);
        assert_eq!(catalog.id_at(0), Some(ImageId(0)));
        assert_eq!(catalog.id_at(2999), Some(ImageId(2999)));
        assert_eq!(catalog.id_at(3000), None);
    }

    #[test]
    fn test_result_set_keeps_rank_order() {
        let results = ResultSet::new(vec![ImageId(42), ImageId(7), ImageId(1999)]);
        assert_eq!(results.len(), 3);
        assert_eq!(results.id_at(1), Some(ImageId(7)));
        assert_eq!(results.id_at(3), None);
        assert_eq!(ResultSet::default().len(), 0);
    }

    #[test]
    fn test_image_id_deserializes_from_number() {
        let ids: Vec<ImageId> = serde_json::from_str("[3, 14, 15]").unwrap();
        assert_eq!(ids, vec![ImageId(3), ImageId(14), ImageId(15)]);
    }
}
