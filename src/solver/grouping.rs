//! Candidate grouping by constraint key
//!
//! Partitions a corpus into groups of words that look identical before the first
//! guess: same first letter, same last letter, same length.

use crate::core::{ConstraintKey, Word};
use rustc_hash::FxHashMap;

/// Corpus partitioned by `ConstraintKey`
///
/// Each group keeps its words in corpus order.
#[derive(Debug, Clone, Default)]
pub struct CandidateGroups<'a> {
    groups: FxHashMap<ConstraintKey, Vec<&'a Word>>,
}

impl<'a> CandidateGroups<'a> {
    /// Build the groups in a single pass over the words
    ///
    /// # Examples
    /// ```
    /// use hangman_sim::core::{ConstraintKey, Word};
    /// use hangman_sim::solver::CandidateGroups;
    ///
    /// let words: Vec<Word> = ["bat", "bit", "cat"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let groups = CandidateGroups::build(&words);
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups.get(ConstraintKey::new(b'b', b't', 3)).unwrap().len(), 2);
    /// ```
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut groups: FxHashMap<ConstraintKey, Vec<&'a Word>> = FxHashMap::default();
        for word in words {
            groups.entry(word.key()).or_default().push(word);
        }
        Self { groups }
    }

    /// Words sharing `key`
    #[must_use]
    pub fn get(&self, key: ConstraintKey) -> Option<&[&'a Word]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    /// The group a word belongs to
    #[must_use]
    pub fn group_for(&self, word: &Word) -> Option<&[&'a Word]> {
        self.get(word.key())
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All keys in sorted order
    #[must_use]
    pub fn keys(&self) -> Vec<ConstraintKey> {
        let mut keys: Vec<ConstraintKey> = self.groups.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate groups in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintKey, &[&'a Word])> + '_ {
        self.groups.iter().map(|(key, words)| (*key, words.as_slice()))
    }

    /// Size of the largest group
    #[must_use]
    pub fn max_group_size(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::words_from_slice;

    #[test]
    fn every_member_matches_its_key() {
        let words = words_from_slice(crate::corpus::WORDS);
        let groups = CandidateGroups::build(&words);

        for (key, members) in groups.iter() {
            assert!(!members.is_empty());
            for word in members {
                assert_eq!(ConstraintKey::of(word), key);
                assert_eq!(word.first(), key.first);
                assert_eq!(word.last(), key.last);
                assert_eq!(word.length(), key.length);
            }
        }
    }

    #[test]
    fn groups_cover_the_corpus_exactly_once() {
        let words = words_from_slice(crate::corpus::WORDS);
        let groups = CandidateGroups::build(&words);

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, words.len());
    }

    #[test]
    fn group_for_finds_siblings() {
        let words = words_from_slice(&["cat", "car", "can", "cup", "cut"]);
        let groups = CandidateGroups::build(&words);

        let target = Word::new("cat").unwrap();
        let group = groups.group_for(&target).unwrap();
        let texts: Vec<&str> = group.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["cat", "cut"]);
    }

    #[test]
    fn unique_word_forms_its_own_group() {
        let words = words_from_slice(&["cat", "car", "can", "cup"]);
        let groups = CandidateGroups::build(&words);

        assert_eq!(groups.len(), 4);
        assert_eq!(groups.max_group_size(), 1);
    }

    #[test]
    fn missing_key_returns_none() {
        let words = words_from_slice(&["cat", "bat"]);
        let groups = CandidateGroups::build(&words);

        assert!(groups.get(ConstraintKey::new(b'z', b'z', 9)).is_none());
        assert!(groups.group_for(&Word::new("dog").unwrap()).is_none());
    }

    #[test]
    fn keys_are_sorted() {
        let words = words_from_slice(&["zoo", "ant", "art", "bee"]);
        let groups = CandidateGroups::build(&words);

        let keys = groups.keys();
        assert_eq!(keys.len(), 3);
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn empty_corpus_has_no_groups() {
        let words: Vec<Word> = Vec::new();
        let groups = CandidateGroups::build(&words);
        assert!(groups.is_empty());
        assert_eq!(groups.max_group_size(), 0);
    }
}
