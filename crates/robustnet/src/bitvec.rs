//! Fixed-size bit vector over 64-bit words.
//!
//! Visited sets are the hottest scratch state of the engine: clearing is
//! word-wise (O(len/64) rather than O(len)) and single-bit operations are
//! branch-free. The word width is private to this module.

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-size bit vector. The length is set at construction and never grows.
#[derive(Clone, Debug)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    /// All-zero bit vector with `len` addressable bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set bit `i`.
    ///
    /// Panics if `i >= len`: an out-of-range bit means the caller enumerated
    /// a node that does not exist, which must not be papered over.
    #[inline]
    pub fn set(&mut self, i: usize) {
        assert!(i < self.len, "bit {i} out of range ({} bits)", self.len);
        self.words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
    }

    /// Clear bit `i`. Panics if `i >= len`.
    #[inline]
    pub fn clear(&mut self, i: usize) {
        assert!(i < self.len, "bit {i} out of range ({} bits)", self.len);
        self.words[i / WORD_BITS] &= !(1u64 << (i % WORD_BITS));
    }

    /// Is bit `i` set? Panics if `i >= len`.
    #[inline]
    pub fn test(&self, i: usize) -> bool {
        assert!(i < self.len, "bit {i} out of range ({} bits)", self.len);
        self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0
    }

    /// Clear every bit, one word at a time.
    #[inline]
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// In-place XOR with another vector of the same length.
    pub fn xor_with(&mut self, other: &BitVec) {
        assert_eq!(self.len, other.len, "length mismatch in BitVec::xor_with");
        for (w, o) in self.words.iter_mut().zip(&other.words) {
            *w ^= o;
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
