//! Duplicate report: building it from loaded records and rendering it.
//!
//! The text layout is consumed by people diffing reports between runs, so the
//! field order, the French headings and the `True`/`False` spelling are fixed.

use std::cmp::Ordering;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ReporterConfig;
use crate::group::{DuplicateGroup, GroupKey, duplicate_set, group_records};
use crate::models::AssetRecord;
use crate::normalize::truncate_chars;
use crate::thumbnail::ThumbnailPolicy;

#[derive(Debug, Clone, Serialize)]
pub struct DuplicateReport {
    /// Number of input records.
    pub total: usize,
    /// Number of duplicate groups, not capped by the detail limit.
    pub duplicates_found: usize,
    pub grouped_by: GroupKey,
    /// The first `detail_limit` duplicate groups, sorted by key.
    pub groups: Vec<GroupReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub key: String,
    pub count: usize,
    /// Id of the member that a cleanup would keep.
    pub keep: String,
    /// Members in input order.
    pub members: Vec<MemberReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub has_real_thumbnail: bool,
    pub s3key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub keep: bool,
}

// ─── Reporter ──────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Reporter {
    config: ReporterConfig,
    thumbnails: ThumbnailPolicy,
    group_key: GroupKey,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReporterConfig::default())
    }
}

impl Reporter {
    pub fn new(config: ReporterConfig) -> Self {
        let thumbnails = ThumbnailPolicy::from_config(&config.thumbnail);
        Self {
            config,
            thumbnails,
            group_key: GroupKey::Title,
        }
    }

    pub fn with_group_key(mut self, key: GroupKey) -> Self {
        self.group_key = key;
        self
    }

    pub fn with_detail_limit(mut self, limit: usize) -> Self {
        self.config.report.detail_limit = limit;
        self
    }

    pub fn build(&self, records: &[AssetRecord]) -> DuplicateReport {
        let groups = group_records(
            records,
            self.group_key,
            self.config.normalize.space_collapse,
        );
        let duplicates = duplicate_set(groups);
        let duplicates_found = duplicates.len();

        let groups = duplicates
            .into_iter()
            .take(self.config.report.detail_limit)
            .map(|group| self.group_report(group, records))
            .collect();

        tracing::debug!(
            total = records.len(),
            duplicates_found,
            detail_limit = self.config.report.detail_limit,
            "built duplicate report"
        );

        DuplicateReport {
            total: records.len(),
            duplicates_found,
            grouped_by: self.group_key,
            groups,
        }
    }

    fn group_report(&self, group: DuplicateGroup, records: &[AssetRecord]) -> GroupReport {
        let keep_idx = self.keep_candidate(&group.members, records);
        let members = group
            .members
            .iter()
            .map(|&idx| {
                let record = &records[idx];
                MemberReport {
                    id: record.id.clone(),
                    title: record.title.clone(),
                    has_real_thumbnail: self.thumbnails.has_real_thumbnail(record),
                    s3key: record.s3key_or_empty().to_string(),
                    category: record.category.clone(),
                    is_published: record.is_published,
                    created_at: record.created_at.clone(),
                    keep: idx == keep_idx,
                }
            })
            .collect();

        GroupReport {
            key: group.key,
            count: group.members.len(),
            keep: records[keep_idx].id.clone(),
            members,
        }
    }

    /// Real thumbnail first, then newest `createdAt`; ties go to the earlier record.
    fn keep_candidate(&self, members: &[usize], records: &[AssetRecord]) -> usize {
        let ranked: Vec<(usize, bool, Option<DateTime<Utc>>)> = members
            .iter()
            .map(|&idx| {
                let record = &records[idx];
                (
                    idx,
                    self.thumbnails.has_real_thumbnail(record),
                    record.created_at_utc(),
                )
            })
            .collect();

        let mut best = &ranked[0];
        for candidate in &ranked[1..] {
            if rank(candidate, best) == Ordering::Less {
                best = candidate;
            }
        }
        best.0
    }

    // ─── Rendering ─────────────────────────────────────────

    /// Write the text report. With `suggest_keep`, the keep candidate's line
    /// is suffixed with ` | keep`.
    pub fn render_text<W: Write>(
        &self,
        report: &DuplicateReport,
        out: &mut W,
        suggest_keep: bool,
    ) -> io::Result<()> {
        writeln!(out, "Total audios: {}", report.total)?;
        writeln!(out, "Doublons trouvés: {}", report.duplicates_found)?;
        if report.duplicates_found == 0 {
            return Ok(());
        }
        writeln!(out)?;

        let id_len = self.config.report.id_display_len;
        let key_len = self.config.report.key_display_len;
        for group in &report.groups {
            writeln!(out, "  \"{}\": {} copies", group.key, group.count)?;
            for member in &group.members {
                write!(
                    out,
                    "    - ID: {}... | thumbnail: {} | s3key: {}",
                    truncate_chars(&member.id, id_len),
                    if member.has_real_thumbnail { "True" } else { "False" },
                    truncate_chars(&member.s3key, key_len),
                )?;
                if suggest_keep && member.keep {
                    write!(out, " | keep")?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn render_text_string(&self, report: &DuplicateReport, suggest_keep: bool) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render_text(report, &mut buf, suggest_keep);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn rank(
    (_, a_thumb, a_ts): &(usize, bool, Option<DateTime<Utc>>),
    (_, b_thumb, b_ts): &(usize, bool, Option<DateTime<Utc>>),
) -> Ordering {
    b_thumb.cmp(a_thumb).then_with(|| b_ts.cmp(a_ts))
}
