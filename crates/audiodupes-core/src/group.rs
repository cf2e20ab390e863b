use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::AssetRecord;
use crate::normalize::{SpaceCollapse, normalize_title};

/// Field the records are grouped on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    /// Normalized title; every record belongs to exactly one group.
    #[default]
    Title,
    /// Raw storage key; records without a key are left out.
    S3key,
}

/// Records sharing one key, as indexes into the input slice in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub key: String,
    pub members: Vec<usize>,
}

/// Key → member indexes. Iteration order is the key's lexicographic order.
pub type Groups = BTreeMap<String, Vec<usize>>;

pub fn group_records(records: &[AssetRecord], key: GroupKey, mode: SpaceCollapse) -> Groups {
    let mut groups: Groups = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        let group_key = match key {
            GroupKey::Title => normalize_title(record.title_or_empty(), mode),
            GroupKey::S3key => {
                let s3key = record.s3key_or_empty();
                if s3key.trim().is_empty() {
                    continue;
                }
                s3key.to_string()
            }
        };
        groups.entry(group_key).or_default().push(idx);
    }

    tracing::debug!(
        records = records.len(),
        groups = groups.len(),
        ?key,
        "grouped records"
    );
    groups
}

/// Groups with more than one member, sorted by key.
pub fn duplicate_set(groups: Groups) -> Vec<DuplicateGroup> {
    groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(key, members)| DuplicateGroup { key, members })
        .collect()
}
