//! Title normalization and display truncation.
//!
//! The grouping key is the title lowercased and trimmed, with internal space
//! runs partially collapsed. In [`SpaceCollapse::Literal`] mode only runs of
//! exactly two or three spaces become one space; a run of four or more is
//! kept as-is, so `"a    b"` and `"a b"` stay in different groups. That is
//! the behavior existing reports were produced with, so it stays the default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceCollapse {
    /// Runs of exactly two or three spaces become one; others are untouched.
    #[default]
    Literal,
    /// Any run of whitespace becomes a single space.
    Full,
}

/// Compute the grouping key for a title.
pub fn normalize_title(title: &str, mode: SpaceCollapse) -> String {
    let lowered = title.to_lowercase();
    let trimmed = lowered.trim();
    match mode {
        SpaceCollapse::Literal => collapse_short_space_runs(trimmed),
        SpaceCollapse::Full => trimmed.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

fn collapse_short_space_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = 0usize;

    for c in s.chars() {
        if c == ' ' {
            run += 1;
            continue;
        }
        push_space_run(&mut out, run);
        run = 0;
        out.push(c);
    }
    push_space_run(&mut out, run);
    out
}

fn push_space_run(out: &mut String, run: usize) {
    match run {
        0 => {}
        2 | 3 => out.push(' '),
        n => out.extend(std::iter::repeat_n(' ', n)),
    }
}

/// First `max` characters of `s`; shorter strings come back whole.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
