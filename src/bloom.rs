/// Three-probe Bloom filter over a [`BitVector`].
///
/// Each word sets the bits at `hash(salt, word) mod size` for the primary,
/// secondary and tertiary salts. A probe is positive only when all three
/// bits are set, so inserted words never probe negative; unrelated words
/// may probe positive once enough bits collide. Bits are never cleared.
use crate::bitvec::BitVector;
use crate::error::{Error, Result};
use crate::hash::{self, BloomSalts};

pub struct BloomFilter {
    salts: BloomSalts,
    filter: BitVector,
}

impl BloomFilter {
    pub fn new(size: usize) -> Result<Self> {
        Self::with_salts(size, BloomSalts::default())
    }

    pub fn with_salts(size: usize, salts: BloomSalts) -> Result<Self> {
        if size == 0 {
            return Err(Error::ZeroSize("bloom filter"));
        }
        if !salts.distinct() {
            return Err(Error::SaltReuse("bloom filter probe salts must differ"));
        }
        let filter = BitVector::new(size)?;
        Ok(BloomFilter { salts, filter })
    }

    pub fn size(&self) -> usize {
        self.filter.len()
    }

    pub fn salts(&self) -> &BloomSalts {
        &self.salts
    }

    pub fn insert(&mut self, word: &str) {
        for i in self.positions(word) {
            self.filter.set_in_range(i);
        }
    }

    pub fn probe(&self, word: &str) -> bool {
        self.positions(word).iter().all(|&i| self.filter.get_bit(i))
    }

    /// Set bits, not inserted words.
    pub fn count(&self) -> usize {
        self.filter.count_ones()
    }

    #[inline]
    fn positions(&self, word: &str) -> [usize; 3] {
        let size = self.filter.len();
        self.salts
            .as_array()
            .map(|salt| hash::slot(salt, word.as_bytes(), size))
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use crate::error::Error;
    use crate::hash::{BloomSalts, Salt, PRIMARY};

    #[test]
    fn inserted_word_probes_true() {
        let mut bf = BloomFilter::new(1024).unwrap();
        bf.insert("war");
        assert!(bf.probe("war"));
        assert!(bf.count() >= 1 && bf.count() <= 3);
    }

    #[test]
    fn empty_filter_probes_false() {
        let bf = BloomFilter::new(1024).unwrap();
        assert!(!bf.probe("peace"));
        assert_eq!(bf.count(), 0);
    }

    #[test]
    fn no_false_negatives() {
        let mut bf = BloomFilter::new(512).unwrap();
        let words: Vec<String> = (0..400).map(|i| format!("w{i}")).collect();
        for w in &words {
            bf.insert(w);
        }
        assert!(words.iter().all(|w| bf.probe(w)));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut bf = BloomFilter::new(4096).unwrap();
        bf.insert("ignorance");
        let once = bf.count();
        bf.insert("ignorance");
        bf.insert("ignorance");
        assert_eq!(bf.count(), once);
        assert!(bf.probe("ignorance"));
    }

    #[test]
    fn size_one_filter_saturates() {
        let mut bf = BloomFilter::new(1).unwrap();
        assert!(!bf.probe("anything"));
        bf.insert("x");
        assert!(bf.probe("anything"));
        assert_eq!(bf.count(), 1);
    }

    #[test]
    fn failed_bit_vector_fails_filter() {
        assert!(matches!(
            BloomFilter::new(usize::MAX),
            Err(Error::Alloc { what: "bit vector", .. })
        ));
    }

    #[test]
    fn rejects_zero_size_and_shared_salts() {
        assert!(matches!(BloomFilter::new(0), Err(Error::ZeroSize(_))));
        let salts = BloomSalts {
            primary: PRIMARY,
            secondary: PRIMARY,
            tertiary: Salt::new(1, 2),
        };
        assert!(matches!(
            BloomFilter::with_salts(64, salts),
            Err(Error::SaltReuse(_))
        ));
    }
}
