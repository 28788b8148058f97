/// Fixed-size hash table whose buckets are binary search trees.
///
/// A word lives in bucket `hash(salt, word) mod size` for the life of the
/// table; there is no resize, rehash or removal. Buckets stay unallocated
/// until their first insert.
use crate::bst::{Node, Tree};
use crate::error::{Error, Result};
use crate::hash::{self, Salt};
use crate::stats::Stats;

pub struct HashTable {
    salt: Salt,
    buckets: Vec<Option<Tree>>,
}

impl HashTable {
    pub fn new(size: usize) -> Result<Self> {
        Self::with_salt(size, hash::HASH_TABLE)
    }

    pub fn with_salt(size: usize, salt: Salt) -> Result<Self> {
        if size == 0 {
            return Err(Error::ZeroSize("hash table"));
        }
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(size).map_err(|_| Error::Alloc {
            what: "hash table buckets",
            bytes: size.saturating_mul(std::mem::size_of::<Option<Tree>>()),
        })?;
        buckets.resize_with(size, || None);
        Ok(HashTable { salt, buckets })
    }

    /// Bucket count.
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    pub fn salt(&self) -> Salt {
        self.salt
    }

    /// Insert `key` unless some earlier insert already stored it; the first
    /// value given for a key is kept. Returns whether a node was added.
    pub fn insert(&mut self, key: &str, value: Option<&str>, stats: &mut Stats) -> Result<bool> {
        stats.lookups += 1;
        let idx = self.index(key);
        let bucket = &mut self.buckets[idx];
        let tree = bucket.get_or_insert_with(Tree::new);
        let added = tree.insert(key, value, stats);
        // a failed first insert must not leave an occupied-but-empty bucket
        if tree.is_empty() {
            *bucket = None;
        }
        added
    }

    pub fn lookup(&self, key: &str, stats: &mut Stats) -> Option<&Node> {
        stats.lookups += 1;
        self.buckets[self.index(key)].as_ref()?.find(key, stats)
    }

    /// Occupied buckets, not stored entries.
    pub fn count(&self) -> usize {
        self.occupied().count()
    }

    /// Total stored entries across all buckets.
    pub fn len(&self) -> usize {
        self.occupied().map(Tree::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Mean tree size over occupied buckets; 0 for an empty table.
    pub fn avg_bucket_size(&self) -> f64 {
        self.mean_over_occupied(Tree::size)
    }

    /// Mean tree height over occupied buckets; 0 for an empty table.
    pub fn avg_bucket_height(&self) -> f64 {
        self.mean_over_occupied(Tree::height)
    }

    /// Every entry, bucket by bucket, each bucket in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.occupied().flat_map(Tree::iter)
    }

    #[inline]
    fn index(&self, key: &str) -> usize {
        hash::slot(self.salt, key.as_bytes(), self.buckets.len())
    }

    fn occupied(&self) -> impl Iterator<Item = &Tree> {
        self.buckets.iter().flatten()
    }

    fn mean_over_occupied(&self, f: impl Fn(&Tree) -> usize) -> f64 {
        let (n, sum) = self
            .occupied()
            .fold((0usize, 0usize), |(n, sum), t| (n + 1, sum + f(t)));
        if n == 0 {
            return 0.0;
        }
        sum as f64 / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::HashTable;
    use crate::error::Error;
    use crate::stats::Stats;

    #[test]
    fn lookup_finds_replacement() {
        let mut ht = HashTable::new(16).unwrap();
        let mut stats = Stats::default();
        ht.insert("thoughtcrime", Some("crimestop"), &mut stats).unwrap();
        let node = ht.lookup("thoughtcrime", &mut stats).unwrap();
        assert_eq!(node.key(), "thoughtcrime");
        assert_eq!(node.value(), Some("crimestop"));
        assert!(ht.lookup("doublethink", &mut stats).is_none());
        assert_eq!(stats.lookups, 3);
    }

    #[test]
    fn lookup_without_replacement() {
        let mut ht = HashTable::new(16).unwrap();
        let mut stats = Stats::default();
        ht.insert("ounce", None, &mut stats).unwrap();
        let node = ht.lookup("ounce", &mut stats).unwrap();
        assert_eq!(node.value(), None);
    }

    #[test]
    fn first_insert_wins_across_calls() {
        let mut ht = HashTable::new(4).unwrap();
        let mut stats = Stats::default();
        assert!(ht.insert("k", Some("v1"), &mut stats).unwrap());
        assert!(!ht.insert("k", Some("v2"), &mut stats).unwrap());
        assert_eq!(ht.lookup("k", &mut stats).unwrap().value(), Some("v1"));
        assert_eq!(ht.len(), 1);
    }

    #[test]
    fn round_trip_many_keys() {
        let mut ht = HashTable::new(8).unwrap();
        let mut stats = Stats::default();
        let words: Vec<String> = (0..300).map(|i| format!("word{i}")).collect();
        for w in &words {
            ht.insert(w, Some(w), &mut stats).unwrap();
        }
        for w in &words {
            let n = ht.lookup(w, &mut stats).unwrap();
            assert_eq!(n.key(), w);
            assert_eq!(n.value(), Some(w.as_str()));
        }
        assert!(ht.lookup("word300", &mut stats).is_none());
        assert_eq!(ht.len(), 300);
        assert_eq!(ht.iter().count(), 300);
    }

    #[test]
    fn occupancy_bounds() {
        let mut ht = HashTable::new(32).unwrap();
        let mut stats = Stats::default();
        for w in ["a", "b", "c", "a", "b"] {
            ht.insert(w, None, &mut stats).unwrap();
            assert!(ht.count() <= ht.size());
            assert!(ht.count() <= ht.len());
        }
        assert_eq!(ht.len(), 3);
    }

    #[test]
    fn single_bucket_averages() {
        let mut ht = HashTable::new(1).unwrap();
        let mut stats = Stats::default();
        for w in ["a", "b", "c"] {
            ht.insert(w, None, &mut stats).unwrap();
        }
        assert_eq!(ht.count(), 1);
        assert_eq!(ht.avg_bucket_size(), 3.0);
        assert_eq!(ht.avg_bucket_height(), 3.0);
        assert_eq!(stats.branches, 3);
        assert_eq!(stats.lookups, 3);
    }

    #[test]
    fn empty_table_averages_are_zero() {
        let ht = HashTable::new(16).unwrap();
        assert_eq!(ht.count(), 0);
        assert!(ht.is_empty());
        assert_eq!(ht.avg_bucket_size(), 0.0);
        assert_eq!(ht.avg_bucket_height(), 0.0);
    }

    #[test]
    fn huge_bucket_count_fails_to_allocate() {
        assert!(matches!(
            HashTable::new(usize::MAX),
            Err(Error::Alloc { what: "hash table buckets", .. })
        ));
    }

    #[test]
    fn rejects_zero_size() {
        assert!(matches!(HashTable::new(0), Err(Error::ZeroSize(_))));
    }
}
