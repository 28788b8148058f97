/// Keyed 64-bit hashing shared by the Bloom filter and the hash table.
///
/// Every logical purpose gets its own 128-bit salt. The hash itself is
/// SipHash-2-4 keyed with the two salt halves, so unrelated salts give
/// uncorrelated bit and bucket positions for the same word.
use siphasher::sip::SipHasher24;
use std::hash::Hasher;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Salt {
    pub lo: u64,
    pub hi: u64,
}

impl Salt {
    pub const fn new(lo: u64, hi: u64) -> Self {
        Salt { lo, hi }
    }
}

pub const PRIMARY: Salt = Salt::new(0x02d2_3259_3fbe_42ff, 0x3775_cfbf_0794_f152);
pub const SECONDARY: Salt = Salt::new(0xc170_6bc1_7ece_cc04, 0xe982_0aa4_d2b8_261a);
pub const TERTIARY: Salt = Salt::new(0xd37b_01df_0ae8_f8d0, 0x911d_4548_86ca_7cf7);
pub const HASH_TABLE: Salt = Salt::new(0x9846_e4f1_57fe_8840, 0xc5f3_18d7_e055_afb8);

/// The three probe salts of a Bloom filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BloomSalts {
    pub primary: Salt,
    pub secondary: Salt,
    pub tertiary: Salt,
}

impl BloomSalts {
    pub fn as_array(&self) -> [Salt; 3] {
        [self.primary, self.secondary, self.tertiary]
    }

    pub fn distinct(&self) -> bool {
        self.primary != self.secondary
            && self.primary != self.tertiary
            && self.secondary != self.tertiary
    }

    pub fn contains(&self, salt: Salt) -> bool {
        self.as_array().contains(&salt)
    }
}

impl Default for BloomSalts {
    fn default() -> Self {
        BloomSalts {
            primary: PRIMARY,
            secondary: SECONDARY,
            tertiary: TERTIARY,
        }
    }
}

#[inline]
pub fn keyed_hash(salt: Salt, data: &[u8]) -> u64 {
    let mut h = SipHasher24::new_with_keys(salt.lo, salt.hi);
    h.write(data);
    h.finish()
}

/// Reduce a keyed hash onto `[0, modulus)`. `modulus` must be non-zero.
#[inline(always)]
pub fn slot(salt: Salt, data: &[u8], modulus: usize) -> usize {
    (keyed_hash(salt, data) % modulus as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_per_salt() {
        assert_eq!(keyed_hash(PRIMARY, b"war"), keyed_hash(PRIMARY, b"war"));
        assert_ne!(keyed_hash(PRIMARY, b"war"), keyed_hash(SECONDARY, b"war"));
        assert_ne!(keyed_hash(PRIMARY, b"war"), keyed_hash(PRIMARY, b"peace"));
    }

    #[test]
    fn default_salts_are_distinct() {
        let salts = BloomSalts::default();
        assert!(salts.distinct());
        assert!(!salts.contains(HASH_TABLE));
    }

    #[test]
    fn slot_stays_in_range() {
        for word in ["a", "ab", "thoughtcrime", "", "doublethink"] {
            assert!(slot(TERTIARY, word.as_bytes(), 7) < 7);
        }
    }
}
