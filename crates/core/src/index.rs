// crates/core/src/index.rs
use std::collections::HashMap;

use char_stats_ports::TextSource;
use char_stats_shared_kernel::{DomainError, DomainResult, OccurrenceCount, Result, SourceName};
use serde::Serialize;

/// One indexed character together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    #[serde(rename = "char")]
    pub character: char,
    pub count: OccurrenceCount,
}

/// Immutable character frequency index over a single text source.
///
/// The index is populated once at construction and never changes
/// afterwards. Space characters (U+0020) are excluded from indexing;
/// every other character, line terminators and tabs included, is
/// counted.
#[derive(Debug, Clone)]
pub struct FrequencyIndex {
    source: SourceName,
    counts: HashMap<char, OccurrenceCount>,
}

impl FrequencyIndex {
    /// Builds an index by reading `name` through `source`.
    ///
    /// The name is validated before the source is consulted, so an
    /// empty name never turns into a lookup.
    pub fn from_source(source: &dyn TextSource, name: &str) -> Result<Self> {
        let name = SourceName::new(name)?;
        let text = source.read_to_string(&name)?;
        Ok(Self::from_text(name, &text))
    }

    /// Builds an index from text already in memory.
    #[must_use]
    pub fn from_text(source: SourceName, text: &str) -> Self {
        let mut counts: HashMap<char, OccurrenceCount> = HashMap::new();
        for ch in text.chars().filter(|&ch| ch != ' ') {
            *counts.entry(ch).or_default() += 1usize;
        }
        Self { source, counts }
    }

    /// Occurrence count for `ch`.
    ///
    /// A character that never appeared is an error, not a zero count.
    pub fn count(&self, ch: char) -> DomainResult<OccurrenceCount> {
        self.counts.get(&ch).copied().ok_or(DomainError::CharacterNotFound { ch })
    }

    /// The character with the highest occurrence count.
    ///
    /// Ties resolve to the lowest code point, keeping the answer
    /// stable across runs.
    pub fn most_frequent(&self) -> DomainResult<char> {
        self.counts
            .iter()
            .max_by(|(a_ch, a_count), (b_ch, b_count)| {
                a_count.cmp(b_count).then_with(|| b_ch.cmp(a_ch))
            })
            .map(|(&ch, _)| ch)
            .ok_or(DomainError::EmptyIndex)
    }

    /// Whether `ch` appears in the index at all.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.counts.contains_key(&ch)
    }

    /// Number of distinct characters indexed.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the source length minus its spaces.
    #[must_use]
    pub fn total(&self) -> OccurrenceCount {
        self.counts.values().sum()
    }

    /// All entries, sorted by code point for stable iteration.
    #[must_use]
    pub fn entries(&self) -> Vec<IndexEntry> {
        let mut entries: Vec<IndexEntry> = self
            .counts
            .iter()
            .map(|(&character, &count)| IndexEntry { character, count })
            .collect();
        entries.sort_unstable_by_key(|entry| entry.character);
        entries
    }

    /// Name of the source this index was built from.
    #[must_use]
    #[inline]
    pub fn source_name(&self) -> &SourceName {
        &self.source
    }
}
