use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── AssetRecord ────────────────────────────────────────────

/// One row of the `audios` table as exported to JSON.
/// Every field is optional on the wire; absent and `null` both mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(
        default,
        rename = "isPublished",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_published: Option<bool>,

    /// Kept as the raw string so a malformed timestamp never fails the load.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AssetRecord {
    /// Create a record with an id and title, everything else unset.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Title as read, with an absent title read as the empty string.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Storage key as read, with an absent key read as the empty string.
    pub fn s3key_or_empty(&self) -> &str {
        self.s3key.as_deref().unwrap_or("")
    }

    /// Parsed `createdAt`, `None` when absent or not RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(e) => {
                tracing::warn!(id = %self.id, created_at = raw, "unparseable createdAt: {e}");
                None
            }
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
