//! Session-wide keyword occurrence counts.

use std::collections::HashMap;

/// Keyword → number of times it appeared in processed input.
///
/// Counts only ever grow; resetting the conversation context leaves them
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct KeywordFrequency {
    counts: HashMap<String, u32>,
}

impl KeywordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every keyword once per occurrence.
    pub fn record<S: AsRef<str>>(&mut self, keywords: &[S]) {
        for keyword in keywords {
            *self.counts.entry(keyword.as_ref().to_string()).or_insert(0) += 1;
        }
    }

    pub fn count(&self, keyword: &str) -> u32 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    /// The keyword among `keywords` with the highest count. Ties go to the
    /// first keyword reaching the maximum; keywords with a zero count never win.
    pub fn most_frequent<'k, S: AsRef<str>>(&self, keywords: &'k [S]) -> Option<(&'k str, u32)> {
        let mut best: Option<(&'k str, u32)> = None;
        for keyword in keywords {
            let keyword = keyword.as_ref();
            let count = self.count(keyword);
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((keyword, count));
            }
        }
        best
    }

    /// Up to `n` entries, highest count first, ties ordered by keyword.
    pub fn top(&self, n: usize) -> Vec<(String, u32)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(k, &c)| (k.clone(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Owned copy of all counts.
    pub fn snapshot(&self) -> HashMap<String, u32> {
        self.counts.clone()
    }

    /// Number of distinct keywords seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
