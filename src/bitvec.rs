/// Fixed-length packed bit array, eight bits per byte, LSB first.
use crate::error::{Error, Result};

pub struct BitVector {
    len: usize,
    bytes: Vec<u8>,
}

impl BitVector {
    pub fn new(len: usize) -> Result<Self> {
        let n = len.div_ceil(8);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(n)
            .map_err(|_| Error::Alloc { what: "bit vector", bytes: n })?;
        bytes.resize(n, 0);
        Ok(BitVector { len, bytes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn set_bit(&mut self, i: usize) -> Result<()> {
        self.check(i)?;
        self.set_in_range(i);
        Ok(())
    }

    /// Set bit `i`, which the caller has already reduced into `[0, len)`.
    #[inline(always)]
    pub(crate) fn set_in_range(&mut self, i: usize) {
        debug_assert!(i < self.len);
        self.bytes[i / 8] |= 1 << (i % 8);
    }

    #[inline]
    pub fn clear_bit(&mut self, i: usize) -> Result<()> {
        self.check(i)?;
        self.bytes[i / 8] &= !(1 << (i % 8));
        Ok(())
    }

    /// Out-of-range reads are `false`, never an error.
    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }
        (self.bytes[i / 8] >> (i % 8)) & 1 == 1
    }

    /// Number of set bits. Padding bits in the last byte are never set.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline(always)]
    fn check(&self, i: usize) -> Result<()> {
        if i >= self.len {
            return Err(Error::OutOfRange { index: i, len: self.len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BitVector;
    use crate::error::Error;

    #[test]
    fn starts_clear() {
        let bv = BitVector::new(20).unwrap();
        assert_eq!(bv.len(), 20);
        assert!((0..20).all(|i| !bv.get_bit(i)));
        assert_eq!(bv.count_ones(), 0);
    }

    #[test]
    fn set_get_clear() {
        let mut bv = BitVector::new(17).unwrap();
        bv.set_bit(0).unwrap();
        bv.set_bit(9).unwrap();
        bv.set_bit(16).unwrap();
        assert!(bv.get_bit(0) && bv.get_bit(9) && bv.get_bit(16));
        assert!(!bv.get_bit(8));
        assert_eq!(bv.count_ones(), 3);

        bv.clear_bit(9).unwrap();
        assert!(!bv.get_bit(9));
        assert_eq!(bv.count_ones(), 2);
    }

    #[test]
    fn writes_at_len_are_rejected() {
        let mut bv = BitVector::new(8).unwrap();
        assert!(matches!(
            bv.set_bit(8),
            Err(Error::OutOfRange { index: 8, len: 8 })
        ));
        assert!(bv.clear_bit(100).is_err());
        assert_eq!(bv.count_ones(), 0);
    }

    #[test]
    fn reads_out_of_range_are_false() {
        let mut bv = BitVector::new(8).unwrap();
        for i in 0..8 {
            bv.set_bit(i).unwrap();
        }
        assert!(!bv.get_bit(8));
        assert!(!bv.get_bit(usize::MAX));
    }

    #[test]
    fn huge_length_fails_to_allocate() {
        assert!(matches!(
            BitVector::new(usize::MAX),
            Err(Error::Alloc { what: "bit vector", .. })
        ));
    }

    #[test]
    fn zero_length() {
        let bv = BitVector::new(0).unwrap();
        assert!(bv.is_empty());
        assert!(!bv.get_bit(0));
    }
}
