//! Maps a user-typed name or fragment to exactly one workout or exercise.

use crate::db::models::{Exercise, Workout};
use crate::error::{Error, Result};

const MAX_SUGGESTIONS: usize = 3;
const SUGGESTION_CUTOFF: f64 = 0.4;

pub trait Named {
    const KIND: &'static str;
    fn name(&self) -> &str;
}

impl Named for Workout {
    const KIND: &'static str = "workout";
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Exercise {
    const KIND: &'static str = "exercise";
    fn name(&self) -> &str {
        &self.name
    }
}

/// A unique case-insensitive exact match wins, then a unique substring match.
/// Several substring matches are ambiguous; none yields close-name suggestions.
pub fn resolve<T: Named + Clone>(query: &str, candidates: &[T]) -> Result<T> {
    let q = query.to_lowercase();

    let exact: Vec<&T> = candidates
        .iter()
        .filter(|c| c.name().to_lowercase() == q)
        .collect();
    if let [only] = exact.as_slice() {
        return Ok((*only).clone());
    }

    let partial: Vec<&T> = candidates
        .iter()
        .filter(|c| c.name().to_lowercase().contains(&q))
        .collect();
    match partial.as_slice() {
        [only] => Ok((*only).clone()),
        [] => Err(Error::NoMatch {
            kind: T::KIND,
            query: query.to_string(),
            suggestions: suggestions(query, candidates.iter().map(|c| c.name())),
        }),
        many => Err(Error::Ambiguous {
            kind: T::KIND,
            query: query.to_string(),
            candidates: many.iter().map(|c| c.name().to_string()).collect(),
        }),
    }
}

/// Up to three names similar to `query`, best first.
pub fn suggestions<'a>(query: &str, names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let q = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = names
        .map(|name| (strsim::normalized_levenshtein(&q, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= SUGGESTION_CUTOFF)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_string())
        .collect()
}
