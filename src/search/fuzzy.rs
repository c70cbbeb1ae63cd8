//! Scored subsequence matching over an indexed candidate set.
//!
//! # Algorithm
//!
//! A query matches an entry when its characters appear, case-insensitively
//! and in order, somewhere in the entry text. Among all such placements the
//! engine tries one greedy placement per occurrence of the query's first
//! character and keeps the best-scoring one (earliest start on ties), so the
//! returned positions are deterministic for a given `(text, query)` pair.
//!
//! A placement's score is the entry's base score plus, for every matched
//! character:
//!
//! - [`MATCH_BONUS`];
//! - [`BOUNDARY_BONUS`] if it starts the text or follows a non-alphanumeric
//!   character;
//! - [`CONSECUTIVE_BONUS`] if it directly follows the previous match;
//!
//! minus [`GAP_PENALTY`] per skipped character between matches. A query equal
//! to the whole text scores the maximum bonus a query of that length can
//! reach.
//!
//! # Ordering
//!
//! Results are sorted by score descending, ties by original index ascending.
//! An empty query returns every entry in index order at its base score.
//!
//! # Example
//!
//! ```rust
//! use betters3tui::search::Fuzzy;
//!
//! let fuzzy = Fuzzy::new(vec!["test-file", "another-file", "README.md"]).unwrap();
//! let texts: Vec<&str> = fuzzy
//!     .match_query("file")
//!     .into_iter()
//!     .map(|m| m.entry.text())
//!     .collect();
//! assert_eq!(texts, vec!["test-file", "another-file"]);
//! ```

use std::cmp::Ordering;

use crate::domain::{BetterS3Error, Result};
use crate::search::entry::{fold_case, Entry, Searchable};

/// Awarded for every matched character.
pub const MATCH_BONUS: f64 = 1.0;
/// Awarded when a matched character directly follows the previous match.
pub const CONSECUTIVE_BONUS: f64 = 5.0;
/// Awarded when a matched character starts a word.
pub const BOUNDARY_BONUS: f64 = 10.0;
/// Subtracted per character skipped between two matches.
pub const GAP_PENALTY: f64 = 0.1;

/// One ranked result.
#[derive(Debug, Clone)]
pub struct Match<'a, T> {
    /// The matched entry.
    pub entry: &'a Entry<T>,
    /// Matched character indices into the entry text, ascending.
    pub positions: Vec<usize>,
    /// Final score.
    pub score: f64,
}

/// Immutable index of candidates.
#[derive(Debug, Clone)]
pub struct Fuzzy<T> {
    entries: Vec<Entry<T>>,
}

impl<T: Searchable> Fuzzy<T> {
    /// Indexes `items`, normalizing each through [`Searchable`].
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::MalformedEntry`] for the first item without
    /// usable text or with a non-numeric base score.
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let fields = item
                    .fields()
                    .map_err(|reason| BetterS3Error::MalformedEntry { index, reason })?;
                Ok(Entry::new(item, fields, index))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(entries = entries.len(), "indexed fuzzy candidates");
        Ok(Self { entries })
    }
}

impl<T> Fuzzy<T> {
    /// Indexed entries in input order.
    #[must_use]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepares a ranked match of `query` against the index.
    ///
    /// Nothing is scored until the result is iterated or limited; each call
    /// starts from scratch.
    #[must_use]
    pub fn match_query(&self, query: &str) -> Matches<'_, T> {
        Matches {
            fuzzy: self,
            query: query.chars().map(fold_case).collect(),
        }
    }
}

/// Lazily evaluated result of [`Fuzzy::match_query`].
#[derive(Debug)]
pub struct Matches<'a, T> {
    fuzzy: &'a Fuzzy<T>,
    query: Vec<char>,
}

impl<'a, T> Matches<'a, T> {
    /// Returns only the top `n` results, in the same order as the full result.
    #[must_use]
    pub fn limit(self, n: usize) -> Ranked<'a, T> {
        self.rank(Some(n))
    }

    fn rank(self, limit: Option<usize>) -> Ranked<'a, T> {
        let fuzzy = self.fuzzy;
        let entries: &'a [Entry<T>] = &fuzzy.entries;
        if self.query.is_empty() {
            let end = limit.map_or(entries.len(), |n| n.min(entries.len()));
            return Ranked {
                entries,
                source: Source::Unranked(0..end),
            };
        }

        let _span = tracing::debug_span!("fuzzy_match", query_len = self.query.len()).entered();

        let mut scored: Vec<Scored> = entries
            .iter()
            .filter_map(|entry| {
                let (bonus, positions) = best_placement(entry.lower_chars(), &self.query)?;
                Some(Scored {
                    index: entry.index(),
                    score: entry.base_score() + bonus,
                    positions,
                })
            })
            .collect();
        let total = scored.len();

        match limit {
            Some(n) if n < scored.len() => {
                if n == 0 {
                    scored.clear();
                } else {
                    scored.select_nth_unstable_by(n - 1, Scored::ranking);
                    scored.truncate(n);
                }
            }
            _ => {}
        }
        scored.sort_by(Scored::ranking);

        tracing::debug!(matches = total, returned = scored.len(), "fuzzy match complete");
        Ranked {
            entries,
            source: Source::Ranked(scored.into_iter()),
        }
    }
}

impl<'a, T> IntoIterator for Matches<'a, T> {
    type Item = Match<'a, T>;
    type IntoIter = Ranked<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rank(None)
    }
}

/// Iterator over ranked matches.
#[derive(Debug)]
pub struct Ranked<'a, T> {
    entries: &'a [Entry<T>],
    source: Source,
}

#[derive(Debug)]
enum Source {
    Unranked(std::ops::Range<usize>),
    Ranked(std::vec::IntoIter<Scored>),
}

impl<'a, T> Iterator for Ranked<'a, T> {
    type Item = Match<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        match &mut self.source {
            Source::Unranked(range) => {
                let entry = &entries[range.next()?];
                Some(Match {
                    entry,
                    positions: Vec::new(),
                    score: entry.base_score(),
                })
            }
            Source::Ranked(scored) => {
                let scored = scored.next()?;
                Some(Match {
                    entry: &entries[scored.index],
                    positions: scored.positions,
                    score: scored.score,
                })
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Source::Unranked(range) => range.size_hint(),
            Source::Ranked(scored) => scored.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Ranked<'_, T> {}

#[derive(Debug)]
struct Scored {
    index: usize,
    score: f64,
    positions: Vec<usize>,
}

impl Scored {
    fn ranking(a: &Self, b: &Self) -> Ordering {
        b.score.total_cmp(&a.score).then(a.index.cmp(&b.index))
    }
}

/// Scores `query` against `text` without an index.
///
/// Returns the match bonus (excluding any base score) and the matched char
/// positions, or `None` if `query` is not a subsequence of `text`. Both are
/// compared case-insensitively.
///
/// # Example
///
/// ```rust
/// use betters3tui::search::fuzzy::score;
///
/// let (_, positions) = score("test-file", "tst").unwrap();
/// assert_eq!(positions, vec![0, 2, 3]);
/// assert!(score("test-file", "xyz").is_none());
/// ```
#[must_use]
pub fn score(text: &str, query: &str) -> Option<(f64, Vec<usize>)> {
    let text: Vec<char> = text.chars().map(fold_case).collect();
    let query: Vec<char> = query.chars().map(fold_case).collect();
    if query.is_empty() {
        return Some((0.0, Vec::new()));
    }
    best_placement(&text, &query)
}

/// Highest bonus any query of `len` characters can reach.
fn max_bonus(len: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let len = len as f64;
    len * (MATCH_BONUS + BOUNDARY_BONUS + CONSECUTIVE_BONUS)
}

fn best_placement(text: &[char], query: &[char]) -> Option<(f64, Vec<usize>)> {
    let first = *query.first()?;
    if query.len() > text.len() {
        return None;
    }
    if text == query {
        return Some((max_bonus(query.len()), (0..query.len()).collect()));
    }

    let mut best: Option<(f64, Vec<usize>)> = None;
    for start in (0..=text.len() - query.len()).filter(|&i| text[i] == first) {
        let Some(positions) = greedy_from(text, query, start) else {
            // No later start can succeed either.
            break;
        };
        let bonus = placement_bonus(text, &positions);
        if best.as_ref().map_or(true, |(b, _)| bonus > *b) {
            best = Some((bonus, positions));
        }
    }
    best
}

fn greedy_from(text: &[char], query: &[char], start: usize) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(query.len());
    positions.push(start);
    let mut cursor = start + 1;
    for &qc in &query[1..] {
        let offset = text[cursor..].iter().position(|&c| c == qc)?;
        positions.push(cursor + offset);
        cursor += offset + 1;
    }
    Some(positions)
}

fn placement_bonus(text: &[char], positions: &[usize]) -> f64 {
    let mut bonus = 0.0;
    let mut previous: Option<usize> = None;
    for &pos in positions {
        bonus += MATCH_BONUS;
        if pos == 0 || !text[pos - 1].is_alphanumeric() {
            bonus += BOUNDARY_BONUS;
        }
        if let Some(prev) = previous {
            let gap = pos - prev - 1;
            if gap == 0 {
                bonus += CONSECUTIVE_BONUS;
            } else {
                #[allow(clippy::cast_precision_loss)]
                let gap = gap as f64;
                bonus -= gap * GAP_PENALTY;
            }
        }
        previous = Some(pos);
    }
    bonus
}
