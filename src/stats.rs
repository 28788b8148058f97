/// Operation counters and the statistics report built from them.
use serde::Serialize;

/// Counters threaded through tree and table operations.
///
/// `branches` grows by one for every left/right descent step taken by a tree
/// insert or find; `lookups` by one for every hash table insert or lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub branches: u64,
    pub lookups: u64,
}

impl Stats {
    pub fn branches_per_lookup(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.branches as f64 / self.lookups as f64
    }

    pub fn merge(&mut self, other: Stats) {
        self.branches += other.branches;
        self.lookups += other.lookups;
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Report {
    pub buckets: usize,
    pub occupied_buckets: usize,
    pub filter_bits: usize,
    pub set_bits: usize,
    /// Averages over occupied buckets; 0 when the table is empty.
    pub avg_bucket_size: f64,
    pub avg_bucket_height: f64,
    pub avg_branches_per_lookup: f64,
    pub table_load_pct: f64,
    pub filter_load_pct: f64,
}

impl Report {
    pub fn render(&self) -> String {
        format!(
            "Average BST size: {:.6}\n\
             Average BST height: {:.6}\n\
             Average branches traversed: {:.6}\n\
             Hash table load: {:.6}%\n\
             Bloom filter load: {:.6}%\n",
            self.avg_bucket_size,
            self.avg_bucket_height,
            self.avg_branches_per_lookup,
            self.table_load_pct,
            self.filter_load_pct,
        )
    }

    pub fn to_json(&self) -> String {
        // Report holds only numbers; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}
