use crate::config::ThumbnailConfig;
use crate::models::AssetRecord;

/// Decides whether a record carries a real thumbnail or a stock placeholder.
#[derive(Debug, Clone)]
pub struct ThumbnailPolicy {
    placeholder_markers: Vec<String>,
}

impl Default for ThumbnailPolicy {
    fn default() -> Self {
        Self::from_config(&ThumbnailConfig::default())
    }
}

impl ThumbnailPolicy {
    pub fn from_config(config: &ThumbnailConfig) -> Self {
        Self {
            placeholder_markers: config.placeholder_markers.clone(),
        }
    }

    /// True only for a present, non-empty thumbnail not matching any marker.
    pub fn has_real_thumbnail(&self, record: &AssetRecord) -> bool {
        match record.thumbnail.as_deref() {
            None | Some("") => false,
            Some(url) => !self
                .placeholder_markers
                .iter()
                .any(|marker| url.contains(marker.as_str())),
        }
    }
}
