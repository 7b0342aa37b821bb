//! Word family partitioning
//!
//! Given the current candidates, the current pattern and a guessed letter,
//! groups every candidate by the pattern it would produce once the letter is
//! revealed against it.

use crate::core::{Pattern, Word};
use std::collections::{BTreeMap, BTreeSet};

/// Candidates grouped by the pattern they produce for one guessed letter
///
/// Groups iterate in ascending pattern order. Every candidate lands in
/// exactly one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    groups: BTreeMap<Pattern, BTreeSet<Word>>,
}

impl Partition {
    /// Number of distinct resulting patterns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in ascending pattern order
    pub fn groups(&self) -> impl Iterator<Item = (&Pattern, &BTreeSet<Word>)> {
        self.groups.iter()
    }

    /// The group for one resulting pattern
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&BTreeSet<Word>> {
        self.groups.get(pattern)
    }

    /// Total number of words across all groups
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn take(&mut self, pattern: &Pattern) -> Option<BTreeSet<Word>> {
        self.groups.remove(pattern)
    }
}

/// Group `candidates` by the pattern each produces when `letter` is revealed
/// against `pattern`
///
/// Words without the letter keep `pattern` unchanged and share one group.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Pattern, Word};
/// use evil_hangman::game::partition;
/// use std::collections::BTreeSet;
///
/// let candidates: BTreeSet<Word> = ["ally", "cool", "good"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let families = partition(&candidates, &Pattern::hidden(4), b'o');
/// assert_eq!(families.len(), 2);
/// assert_eq!(families.total_words(), 3);
/// ```
#[must_use]
pub fn partition<'a>(
    candidates: impl IntoIterator<Item = &'a Word>,
    pattern: &Pattern,
    letter: u8,
) -> Partition {
    let mut groups: BTreeMap<Pattern, BTreeSet<Word>> = BTreeMap::new();

    for candidate in candidates {
        let key = pattern.reveal(candidate, letter);
        groups.entry(key).or_default().insert(candidate.clone());
    }

    Partition { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> BTreeSet<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn key(text: &str) -> Pattern {
        text.parse().unwrap()
    }

    #[test]
    fn groups_by_resulting_pattern() {
        let candidates = words(&["ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex"]);
        let families = partition(&candidates, &Pattern::hidden(4), b'e');

        assert_eq!(
            families.get(&key("- - - -")),
            Some(&words(&["ally", "cool", "good"]))
        );
        assert_eq!(families.get(&key("- e - -")), Some(&words(&["beta", "deal"])));
        assert_eq!(families.get(&key("e - - e")), Some(&words(&["else"])));
        assert_eq!(families.get(&key("- - e -")), Some(&words(&["flew", "ibex"])));
        assert_eq!(families.get(&key("- - - e")), Some(&words(&["hope"])));
        assert_eq!(families.len(), 5);
        assert_eq!(families.total_words(), candidates.len());
    }

    #[test]
    fn missing_letter_forms_single_group() {
        let candidates = words(&["ally", "cool", "good"]);
        let start = Pattern::hidden(4);
        let families = partition(&candidates, &start, b'z');

        assert_eq!(families.len(), 1);
        assert_eq!(families.get(&start), Some(&candidates));
    }

    #[test]
    fn unchanged_group_is_not_always_largest() {
        let candidates = words(&["cool", "good", "ally"]);
        let families = partition(&candidates, &Pattern::hidden(4), b'o');

        assert_eq!(families.get(&Pattern::hidden(4)).map(BTreeSet::len), Some(1));
        assert_eq!(families.get(&key("- o o -")).map(BTreeSet::len), Some(2));
    }

    #[test]
    fn respects_previous_reveals() {
        let candidates = words(&["cool", "good"]);
        let current = key("- o o -");
        let families = partition(&candidates, &current, b'd');

        assert_eq!(families.get(&key("- o o d")), Some(&words(&["good"])));
        assert_eq!(families.get(&current), Some(&words(&["cool"])));
    }

    #[test]
    fn groups_iterate_in_pattern_order() {
        let candidates = words(&["ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex"]);
        let families = partition(&candidates, &Pattern::hidden(4), b'e');

        let keys: Vec<String> = families.groups().map(|(p, _)| p.to_string()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn empty_candidates_give_empty_partition() {
        let families = partition(&BTreeSet::<Word>::new(), &Pattern::hidden(4), b'a');
        assert!(families.is_empty());
        assert_eq!(families.total_words(), 0);
    }
}
