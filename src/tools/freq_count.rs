use rustc_hash::FxHashMap;

/// Symbol counts for one input, kept in order of first occurrence.
///
/// The order matters: it is the tie-break when two leaves carry the same weight.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<(char, usize)>,
    index: FxHashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for `symbol`, registering it if it is new.
    pub fn add(&mut self, symbol: char) {
        match self.index.get(&symbol) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(symbol, self.counts.len());
                self.counts.push((symbol, 1));
            }
        }
    }

    pub fn get(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).map(|&slot| self.counts[slot].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// (symbol, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().copied()
    }
}

/// Returns a frequency count of the characters in `text`. Single pass, no side effects.
pub fn freqs(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    text.chars().for_each(|c| table.add(c));
    table
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn counts_test() {
        let f = freqs("abracadabra");
        assert_eq!(f.get('a'), Some(5));
        assert_eq!(f.get('b'), Some(2));
        assert_eq!(f.get('r'), Some(2));
        assert_eq!(f.get('c'), Some(1));
        assert_eq!(f.get('d'), Some(1));
        assert_eq!(f.get('z'), None);
        assert_eq!(f.len(), 5);
        assert_eq!(f.total(), 11);
    }

    #[test]
    fn first_seen_order_test() {
        let f = freqs("cabbage");
        let order = f.iter().map(|(c, _)| c).collect::<String>();
        assert_eq!(order, "cabge");
    }

    #[test]
    fn code_points_not_bytes_test() {
        // 'é' is two bytes in UTF-8 but one symbol
        let f = freqs("éé€");
        assert_eq!(f.len(), 2);
        assert_eq!(f.get('é'), Some(2));
        assert_eq!(f.get('€'), Some(1));
    }

    #[test]
    fn empty_test() {
        let f = freqs("");
        assert!(f.is_empty());
        assert_eq!(f.total(), 0);
    }
}
