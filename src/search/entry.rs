//! Candidate records and their normalization into indexed entries.
//!
//! Candidates reach the ranking engine in two shapes:
//!
//! - typed records ([`Candidate`], plain strings) whose fields are known at
//!   compile time;
//! - loosely keyed records ([`serde_json::Value`] objects and maps) whose text
//!   and base score live under string keys.
//!
//! [`Searchable`] normalizes both into one [`Fields`] value at index time, so
//! nothing downstream ever looks at key spellings again. Map keys accepted:
//!
//! | field      | keys                        | required            |
//! |------------|-----------------------------|---------------------|
//! | text       | `text`                      | yes                 |
//! | base score | `base_score`, `baseScore`   | no, defaults to 0.0 |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Map key holding the display text.
pub const TEXT_KEY: &str = "text";

/// Map keys accepted for the base score, in lookup order.
pub const BASE_SCORE_KEYS: [&str; 2] = ["base_score", "baseScore"];

/// Canonical fields extracted from a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    /// Text matched against and displayed.
    pub text: String,
    /// Score the candidate starts from before match bonuses.
    pub base_score: f64,
}

/// Anything the fuzzy engine can index.
pub trait Searchable {
    /// Extracts the display text and base score.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the record has no usable text or
    /// an unusable base score.
    fn fields(&self) -> Result<Fields, String>;
}

/// Typed candidate carrying an opaque payload through ranking.
///
/// # Example
///
/// ```rust
/// use betters3tui::search::{Candidate, Fuzzy};
///
/// let fuzzy = Fuzzy::new(vec![
///     Candidate::new("photos/", 2.0, "prefix"),
///     Candidate::new("report.pdf", 1.0, "object"),
/// ])
/// .unwrap();
/// let best = fuzzy.match_query("rep").into_iter().next().unwrap();
/// assert_eq!(best.entry.data().data, "object");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<T> {
    /// Display text.
    pub text: String,
    /// Starting score.
    #[serde(default, alias = "baseScore")]
    pub base_score: f64,
    /// Caller payload, returned unchanged with each match.
    pub data: T,
}

impl<T> Candidate<T> {
    /// Creates a candidate.
    pub fn new(text: impl Into<String>, base_score: f64, data: T) -> Self {
        Self {
            text: text.into(),
            base_score,
            data,
        }
    }
}

impl<T> Searchable for Candidate<T> {
    fn fields(&self) -> Result<Fields, String> {
        Ok(Fields {
            text: self.text.clone(),
            base_score: self.base_score,
        })
    }
}

impl Searchable for String {
    fn fields(&self) -> Result<Fields, String> {
        Ok(Fields {
            text: self.clone(),
            base_score: 0.0,
        })
    }
}

impl Searchable for &str {
    fn fields(&self) -> Result<Fields, String> {
        Ok(Fields {
            text: (*self).to_string(),
            base_score: 0.0,
        })
    }
}

impl Searchable for Map<String, Value> {
    fn fields(&self) -> Result<Fields, String> {
        let text = match self.get(TEXT_KEY) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => return Err(format!("\"{TEXT_KEY}\" must be a string, found {other}")),
            None => return Err(format!("missing \"{TEXT_KEY}\" field")),
        };

        let score = BASE_SCORE_KEYS.iter().find_map(|key| self.get(*key).map(|v| (*key, v)));
        let base_score = match score {
            None | Some((_, Value::Null)) => 0.0,
            Some((key, value)) => value
                .as_f64()
                .ok_or_else(|| format!("\"{key}\" must be a number, found {value}"))?,
        };

        Ok(Fields { text, base_score })
    }
}

impl Searchable for Value {
    fn fields(&self) -> Result<Fields, String> {
        match self {
            Self::Object(map) => map.fields(),
            Self::String(text) => Ok(Fields {
                text: text.clone(),
                base_score: 0.0,
            }),
            other => Err(format!("expected an object, found {other}")),
        }
    }
}

/// One indexed candidate. Immutable once built.
#[derive(Debug, Clone)]
pub struct Entry<T> {
    data: T,
    text: String,
    text_lower: String,
    lower_chars: Vec<char>,
    base_score: f64,
    index: usize,
}

impl<T> Entry<T> {
    /// Builds an entry, lowercasing the text once.
    #[must_use]
    pub fn new(data: T, fields: Fields, index: usize) -> Self {
        let lower_chars: Vec<char> = fields.text.chars().map(fold_case).collect();
        Self {
            data,
            text_lower: lower_chars.iter().collect(),
            lower_chars,
            text: fields.text,
            base_score: fields.base_score,
            index,
        }
    }

    /// The original candidate.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased display text, one char per char of [`Entry::text`].
    pub fn text_lower(&self) -> &str {
        &self.text_lower
    }

    pub(crate) fn lower_chars(&self) -> &[char] {
        &self.lower_chars
    }

    /// Starting score.
    pub const fn base_score(&self) -> f64 {
        self.base_score
    }

    /// Position of the candidate in the indexed input.
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Lowercases a single char, keeping a 1:1 mapping with the original text so
/// match positions index both.
pub(crate) fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
