//! Accumulated producer set
//!
//! A multiset of symbol ids under the hood: `fold` increments, `unfold`
//! decrements, so backtracking is O(|producers|) instead of cloning a set.
//! Equality and `contains` only look at membership, so it behaves as the
//! plain union everywhere outside the search.

use super::graph::SymbolId;

#[derive(Debug, Clone, Default)]
pub struct AccumulatedProducers {
    counts: Vec<u32>,
}

impl AccumulatedProducers {
    pub(crate) fn with_symbol_count(symbol_count: usize) -> Self {
        Self {
            counts: vec![0; symbol_count],
        }
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        self.counts.get(id.index()).is_some_and(|count| *count > 0)
    }

    /// Number of distinct symbols supplied so far
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|count| **count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Supplied symbol ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, _)| SymbolId::from_index(index))
    }

    /// Grows to fit ids beyond the current size (e.g. a `default()` set)
    pub(crate) fn add_all(&mut self, ids: &[SymbolId]) {
        for id in ids {
            if id.index() >= self.counts.len() {
                self.counts.resize(id.index() + 1, 0);
            }
            self.counts[id.index()] += 1;
        }
    }

    pub(crate) fn remove_all(&mut self, ids: &[SymbolId]) {
        for id in ids {
            if let Some(count) = self.counts.get_mut(id.index()) {
                debug_assert!(*count > 0, "unfold without matching fold");
                *count = count.saturating_sub(1);
            }
        }
    }
}

impl PartialEq for AccumulatedProducers {
    fn eq(&self, other: &Self) -> bool {
        // Trailing empty slots do not change membership
        let len = self.counts.len().max(other.counts.len());
        (0..len).all(|index| {
            let id = SymbolId::from_index(index);
            self.contains(id) == other.contains(id)
        })
    }
}

impl Eq for AccumulatedProducers {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<SymbolId> {
        raw.iter().map(|i| SymbolId::from_index(*i)).collect()
    }

    #[test]
    fn test_union_semantics() {
        let mut acc = AccumulatedProducers::with_symbol_count(4);
        acc.add_all(&ids(&[0, 1]));
        acc.add_all(&ids(&[1, 2]));
        assert_eq!(acc.len(), 3);
        assert!(acc.contains(SymbolId::from_index(1)));
        assert!(!acc.contains(SymbolId::from_index(3)));
    }

    #[test]
    fn test_remove_keeps_shared_symbols() {
        let mut acc = AccumulatedProducers::with_symbol_count(3);
        acc.add_all(&ids(&[0, 1]));
        acc.add_all(&ids(&[1]));
        acc.remove_all(&ids(&[1]));
        assert!(acc.contains(SymbolId::from_index(1)));
        acc.remove_all(&ids(&[0, 1]));
        assert!(acc.is_empty());
    }

    #[test]
    fn test_equality_ignores_multiplicity() {
        let mut once = AccumulatedProducers::with_symbol_count(2);
        once.add_all(&ids(&[0]));
        let mut twice = AccumulatedProducers::with_symbol_count(2);
        twice.add_all(&ids(&[0]));
        twice.add_all(&ids(&[0]));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ids_ascending() {
        let mut acc = AccumulatedProducers::with_symbol_count(5);
        acc.add_all(&ids(&[4, 0, 2]));
        assert_eq!(acc.ids().collect::<Vec<_>>(), ids(&[0, 2, 4]));
    }

    #[test]
    fn test_default_grows_on_add() {
        let mut acc = AccumulatedProducers::default();
        acc.add_all(&ids(&[3]));
        assert!(acc.contains(SymbolId::from_index(3)));
        acc.remove_all(&ids(&[3, 7]));
        assert!(acc.is_empty());
        assert_eq!(acc, AccumulatedProducers::default());
    }

    #[test]
    fn test_out_of_range_is_absent() {
        let acc = AccumulatedProducers::with_symbol_count(1);
        assert!(!acc.contains(SymbolId::from_index(10)));
    }
}
