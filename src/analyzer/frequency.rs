//! Frequency distributions and top-K keyword extraction

use crate::KeywordCount;
use std::collections::HashMap;

/// Token counts that remember the order in which each token was first seen.
///
/// The first-seen order is the only tie-break used when ranking, so it must
/// survive merges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<KeywordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token in a sequence
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref(), 1);
        }
        table
    }

    /// Sum several ranked lists into one table, visiting lists in order
    pub fn merge<'a, I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [KeywordCount]>,
    {
        let mut table = Self::new();
        for list in lists {
            for entry in list {
                table.add(&entry.keyword, entry.count);
            }
        }
        table
    }

    /// Add `count` occurrences of `token`
    pub fn add(&mut self, token: &str, count: usize) {
        match self.index.get(token) {
            Some(&i) => self.entries[i].count += count,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(KeywordCount::new(token, count));
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &KeywordCount> {
        self.entries.iter()
    }

    /// The `k` most frequent tokens, descending by count, ties in first-seen order
    pub fn top_k(&self, k: usize) -> Vec<KeywordCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable: equal counts keep first-seen order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k);
        ranked
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "omega", "zeta"])
                .prop_map(str::to_string),
            0..60,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn top_k_is_bounded_and_ranked(ref input in tokens(), k in 0usize..10) {
            let table = FrequencyTable::from_tokens(input);
            let top = table.top_k(k);

            prop_assert!(top.len() <= k);
            prop_assert!(top.len() <= table.len());
            prop_assert!(table.total() <= input.len());

            let first_seen = |token: &str| input.iter().position(|t| t == token).unwrap();
            for pair in top.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
                if pair[0].count == pair[1].count {
                    prop_assert!(first_seen(&pair[0].keyword) < first_seen(&pair[1].keyword));
                }
            }
        }
    }
}
