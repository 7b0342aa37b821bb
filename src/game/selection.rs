//! Adversarial family selection
//!
//! Picks the word family that keeps the most candidates alive. Ties go to the
//! family whose pattern sorts first: groups are scanned in ascending pattern
//! order and the kept family is only replaced by a strictly larger one.

use super::partition::Partition;
use crate::core::{Pattern, Word};
use std::collections::BTreeSet;

/// Pattern of the family the adversary answers with
///
/// Returns `None` only for an empty partition.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Pattern, Word};
/// use evil_hangman::game::{partition, select_group};
/// use std::collections::BTreeSet;
///
/// let candidates: BTreeSet<Word> = ["ally", "cool", "good"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let families = partition(&candidates, &Pattern::hidden(4), b'o');
/// assert_eq!(select_group(&families).unwrap().to_string(), "- o o -");
/// ```
#[must_use]
pub fn select_group(partition: &Partition) -> Option<&Pattern> {
    let mut best: Option<(&Pattern, usize)> = None;

    for (pattern, words) in partition.groups() {
        match best {
            Some((_, size)) if words.len() <= size => {}
            _ => best = Some((pattern, words.len())),
        }
    }

    best.map(|(pattern, _)| pattern)
}

impl Partition {
    /// Consume the partition, keeping only the family `select_group` picks
    #[must_use]
    pub fn into_selected(mut self) -> Option<(Pattern, BTreeSet<Word>)> {
        let chosen = select_group(&self)?.clone();
        let words = self.take(&chosen)?;
        Some((chosen, words))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::partition::partition;

    fn words(texts: &[&str]) -> BTreeSet<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn picks_largest_family() {
        let candidates = words(&["ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex"]);
        let families = partition(&candidates, &Pattern::hidden(4), b'e');

        let (pattern, chosen) = families.into_selected().unwrap();
        assert_eq!(pattern, Pattern::hidden(4));
        assert_eq!(chosen, words(&["ally", "cool", "good"]));
    }

    #[test]
    fn ties_go_to_smallest_pattern() {
        // Families: "- - a" {bba}, "a - -" {abb}; both size 1.
        let candidates = words(&["abb", "bba"]);
        let families = partition(&candidates, &Pattern::hidden(3), b'a');

        let chosen = select_group(&families).unwrap();
        assert_eq!(chosen.to_string(), "- - a");
    }

    #[test]
    fn tie_with_unchanged_pattern_keeps_hidden() {
        // "ab" reveals "a -", "bb" keeps "- -"; hidden sorts first.
        let candidates = words(&["ab", "bb"]);
        let families = partition(&candidates, &Pattern::hidden(2), b'a');

        let (pattern, chosen) = families.into_selected().unwrap();
        assert_eq!(pattern, Pattern::hidden(2));
        assert_eq!(chosen, words(&["bb"]));
    }

    #[test]
    fn later_strictly_larger_family_wins() {
        // "- -" {bb}, "a -" {ab, ac}: the later key is larger.
        let candidates = words(&["ab", "ac", "bb"]);
        let families = partition(&candidates, &Pattern::hidden(2), b'a');

        let chosen = select_group(&families).unwrap();
        assert_eq!(chosen.to_string(), "a -");
    }

    #[test]
    fn empty_partition_selects_nothing() {
        let families = Partition::default();
        assert!(select_group(&families).is_none());
        assert!(families.into_selected().is_none());
    }

    #[test]
    fn selection_is_deterministic() {
        let candidates = words(&["abc", "bca", "cab", "ccc"]);
        let first = partition(&candidates, &Pattern::hidden(3), b'a').into_selected();
        let second = partition(&candidates, &Pattern::hidden(3), b'a').into_selected();
        assert_eq!(first, second);
    }
}
