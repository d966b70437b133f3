//! Attraction ranking
//!
//! Turns the raw, unordered points of interest around a place into a short
//! list of well-known attractions with English names.

use std::collections::HashMap;

use tracing::debug;
use unicode_general_category::{GeneralCategory, get_general_category};

use super::tables::{
    DEFAULT_SCORE, ENGLISH_NAME_BONUS, ENGLISH_NAME_TAGS, EXCLUDED_NAME_WORDS,
    FALLBACK_EXCLUDED_NAME_WORDS, HISTORIC_SCORE, MAX_NAME_CHARS, MIN_ASCII_RATIO, WIKI_BONUS,
    leisure_priority, tourism_priority,
};
use crate::models::PoiRecord;

/// Size of the scored shortlist before truncation.
const SHORTLIST_LEN: usize = 10;

/// Below this many strict candidates the relaxed pass tops the list up.
const MIN_STRICT_RESULTS: usize = 3;

/// An attraction name with its relevance score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAttraction {
    pub name: String,
    pub score: u32,
}

/// Scores, deduplicates, and filters points of interest
#[derive(Debug, Clone)]
pub struct AttractionRanker {
    max_results: usize,
}

impl Default for AttractionRanker {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}

impl AttractionRanker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank `records` and return at most five attraction names, best first
    #[must_use]
    pub fn rank(&self, records: &[PoiRecord]) -> Vec<String> {
        let mut names: Vec<String> = self
            .shortlist(records)
            .into_iter()
            .map(|attraction| attraction.name)
            .collect();

        if names.len() < MIN_STRICT_RESULTS {
            debug!(
                "Only {} strict candidates, topping up from all records",
                names.len()
            );
            self.top_up(records, &mut names);
        }

        names.truncate(self.max_results);
        debug!("Ranked attractions: {:?}", names);
        names
    }

    /// Strict pass: the ten best-scoring unique names, ties in first-seen order
    #[must_use]
    pub fn shortlist(&self, records: &[PoiRecord]) -> Vec<ScoredAttraction> {
        let mut scored: Vec<ScoredAttraction> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for record in records {
            let Some(name) = english_name(record) else {
                continue;
            };
            let len = name.chars().count();
            if len == 0 || len > MAX_NAME_CHARS || is_excluded(&name, EXCLUDED_NAME_WORDS) {
                continue;
            }

            let score = score(record);
            match index_by_name.get(&name) {
                Some(&idx) => {
                    if scored[idx].score < score {
                        scored[idx].score = score;
                    }
                }
                None => {
                    index_by_name.insert(name.clone(), scored.len());
                    scored.push(ScoredAttraction { name, score });
                }
            }
        }

        // stable: equal scores keep encounter order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(SHORTLIST_LEN);
        scored
    }

    /// Relaxed pass: append any English-named record not already listed
    fn top_up(&self, records: &[PoiRecord], names: &mut Vec<String>) {
        for record in records {
            let Some(name) = english_name(record) else {
                continue;
            };
            if name.trim().is_empty()
                || names.contains(&name)
                || name.chars().count() >= MAX_NAME_CHARS
                || is_excluded(&name, FALLBACK_EXCLUDED_NAME_WORDS)
            {
                continue;
            }

            names.push(name);
            if names.len() >= self.max_results {
                break;
            }
        }
    }
}

/// Relevance score of a single record
#[must_use]
pub fn score(record: &PoiRecord) -> u32 {
    let base = if let Some(priority) = record.tag("tourism").and_then(tourism_priority) {
        priority
    } else if record.tag("historic").is_some_and(|v| !v.is_empty()) {
        HISTORIC_SCORE
    } else if let Some(priority) = record.tag("leisure").and_then(leisure_priority) {
        priority
    } else {
        DEFAULT_SCORE
    };

    let mut score = base;
    if record.has_tag("wikidata") || record.has_tag("wikipedia") {
        score += WIKI_BONUS;
    }
    if record.has_tag("name:en") {
        score += ENGLISH_NAME_BONUS;
    }
    score
}

/// Best English name of a record: `name:en`, then the other English tags,
/// then `name` if it looks English.
#[must_use]
pub fn english_name(record: &PoiRecord) -> Option<String> {
    let explicit = std::iter::once("name:en")
        .chain(ENGLISH_NAME_TAGS.iter().copied())
        .filter_map(|key| record.tag(key))
        .map(str::trim)
        .find(|name| !name.is_empty());

    if let Some(name) = explicit {
        return Some(name.to_string());
    }

    record
        .tag("name")
        .filter(|name| is_english(name))
        .map(|name| name.trim().to_string())
}

/// At least 70% of the printable characters are ASCII
#[must_use]
pub fn is_english(name: &str) -> bool {
    let (ascii, total) = name
        .chars()
        .filter(|c| is_printable(*c))
        .fold((0usize, 0usize), |(ascii, total), c| {
            (ascii + usize::from(c.is_ascii()), total + 1)
        });

    if total == 0 {
        return false;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = ascii as f64 / total as f64;
    ratio >= MIN_ASCII_RATIO
}

/// Visible characters plus the ASCII space; invisible format marks such as
/// U+200B or a soft hyphen do not count.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}

fn is_excluded(name: &str, words: &[&str]) -> bool {
    let lower = name.to_lowercase();
    words.iter().any(|word| lower.contains(word))
}
