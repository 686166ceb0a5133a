//! Image tiles shown on a gallery page

use serde::Serialize;

use super::source::ImageId;

/// One image on a gallery page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub id: ImageId,
    pub url: String,
    pub caption: String,

    /// 1-based rank among all query results; reference tiles have none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

impl Tile {
    pub fn reference(id: ImageId, cdn_url: &str) -> Self {
        Self {
            id,
            url: image_url(cdn_url, id),
            caption: format!("Image {}", id),
            rank: None,
        }
    }

    pub fn result(id: ImageId, rank: usize, cdn_url: &str) -> Self {
        Self {
            id,
            url: image_url(cdn_url, id),
            caption: format!("Result {}", rank),
            rank: Some(rank),
        }
    }
}

/// CDN location of an image: `{cdn_url}{id}.jpg`
pub fn image_url(cdn_url: &str, id: ImageId) -> String {
    if cdn_url.is_empty() || cdn_url.ends_with('/') {
        format!("{}{}.jpg", cdn_url, id)
    } else {
        format!("{}/{}.jpg", cdn_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDN: &str = "https://cdn.example.com/images/";

    #[test]
    fn test_image_url() {
        assert_eq!(image_url(CDN, ImageId(12)), "https://cdn.example.com/images/12.jpg");
        assert_eq!(
            image_url("https://cdn.example.com/images", ImageId(12)),
            "https://cdn.example.com/images/12.jpg"
        );
    }

    #[test]
    fn test_tile_captions() {
        let tile = Tile::reference(ImageId(5), CDN);
        assert_eq!(tile.caption, "Image 5");
        assert_eq!(tile.rank, None);

        let tile = Tile::result(ImageId(981), 21, CDN);
        assert_eq!(tile.caption, "Result 21");
        assert_eq!(tile.rank, Some(21));
        assert_eq!(tile.url, "https://cdn.example.com/images/981.jpg");
    }
}
