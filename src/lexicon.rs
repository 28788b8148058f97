/// The flagged-word vocabulary: a Bloom filter in front of a hash table.
///
/// Every vocabulary word goes into both structures. Queries probe the
/// filter first and only consult the table on a positive, which tells a
/// forbidden word from a translatable one or exposes a false positive.
use crate::bloom::BloomFilter;
use crate::error::{Error, Result};
use crate::hash::{BloomSalts, Salt, HASH_TABLE};
use crate::stats::{percent, Report, Stats};
use crate::table::HashTable;

pub const DEFAULT_TABLE_SIZE: usize = 1 << 16;
pub const DEFAULT_FILTER_SIZE: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// Filter negative.
    Clean,
    /// Filter positive, but the word is not in the table.
    FalsePositive,
    /// Flagged, no replacement.
    Forbidden { word: &'a str },
    /// Flagged, with a replacement.
    Translatable { word: &'a str, replacement: &'a str },
}

pub struct Lexicon {
    filter: BloomFilter,
    table: HashTable,
    stats: Stats,
}

impl Lexicon {
    pub fn new(table_size: usize, filter_size: usize) -> Result<Self> {
        Self::with_salts(table_size, filter_size, HASH_TABLE, BloomSalts::default())
    }

    pub fn with_salts(
        table_size: usize,
        filter_size: usize,
        table_salt: Salt,
        filter_salts: BloomSalts,
    ) -> Result<Self> {
        let filter = BloomFilter::with_salts(filter_size, filter_salts)?;
        let table = HashTable::with_salt(table_size, table_salt)?;
        if filter.salts().contains(table.salt()) {
            return Err(Error::SaltReuse("hash table salt matches a bloom filter salt"));
        }
        Ok(Lexicon {
            filter,
            table,
            stats: Stats::default(),
        })
    }

    /// Flag `word` with no replacement.
    pub fn forbid(&mut self, word: &str) -> Result<()> {
        self.add(word, None)
    }

    /// Flag `old`, suggesting `new` in its place.
    pub fn translate(&mut self, old: &str, new: &str) -> Result<()> {
        self.add(old, Some(new))
    }

    fn add(&mut self, word: &str, replacement: Option<&str>) -> Result<()> {
        self.filter.insert(word);
        if !self.table.insert(word, replacement, &mut self.stats)? {
            tracing::debug!(word = %word, "duplicate vocabulary entry ignored");
        }
        Ok(())
    }

    pub fn classify(&mut self, word: &str) -> Verdict<'_> {
        if !self.filter.probe(word) {
            return Verdict::Clean;
        }
        match self.table.lookup(word, &mut self.stats) {
            None => Verdict::FalsePositive,
            Some(node) => match node.value() {
                None => Verdict::Forbidden { word: node.key() },
                Some(replacement) => Verdict::Translatable {
                    word: node.key(),
                    replacement,
                },
            },
        }
    }

    pub fn table(&self) -> &HashTable {
        &self.table
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Fold branch counts from trees built outside the lexicon into the
    /// running totals.
    pub fn record(&mut self, extra: Stats) {
        self.stats.merge(extra);
    }

    pub fn report(&self) -> Report {
        let occupied = self.table.count();
        let set_bits = self.filter.count();
        Report {
            buckets: self.table.size(),
            occupied_buckets: occupied,
            filter_bits: self.filter.size(),
            set_bits,
            avg_bucket_size: self.table.avg_bucket_size(),
            avg_bucket_height: self.table.avg_bucket_height(),
            avg_branches_per_lookup: self.stats.branches_per_lookup(),
            table_load_pct: percent(occupied, self.table.size()),
            filter_load_pct: percent(set_bits, self.filter.size()),
        }
    }
}
