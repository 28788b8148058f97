//! Flag forbidden words in a text stream.
//!
//! A [`Lexicon`] keeps the vocabulary in two layers: a three-probe
//! [`BloomFilter`] that rejects most clean words cheaply, and a fixed-size
//! [`HashTable`] whose buckets are unbalanced binary search trees, consulted
//! only when the filter says a word might be flagged.

pub mod bitvec;
pub mod bloom;
pub mod bst;
pub mod error;
pub mod hash;
pub mod lexicon;
pub mod report;
pub mod stats;
pub mod table;
pub mod vocab;
pub mod words;

pub use bitvec::BitVector;
pub use bloom::BloomFilter;
pub use bst::{Node, Tree};
pub use error::{Error, Result};
pub use hash::{BloomSalts, Salt};
pub use lexicon::{Lexicon, Verdict, DEFAULT_FILTER_SIZE, DEFAULT_TABLE_SIZE};
pub use report::Offenses;
pub use stats::{Report, Stats};
pub use table::HashTable;
pub use words::WordSplitter;
