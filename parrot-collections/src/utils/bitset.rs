use num_traits::PrimInt;

/// A fixed-length set of bits packed into primitive-integer words. The length is chosen at
/// construction; positions at or past it panic.
pub struct Bitset<StorageType>
where
    StorageType: PrimInt,
{
    bitset: Vec<StorageType>,
    len: usize,
}

impl<StorageType> Bitset<StorageType>
where
    StorageType: PrimInt,
{
    const BIT_WIDTH: usize = std::mem::size_of::<StorageType>() * 8;

    pub fn new(len: usize) -> Self {
        Self {
            bitset: vec![StorageType::zero(); len.div_ceil(Self::BIT_WIDTH)],
            len,
        }
    }

    #[inline]
    pub fn set(&mut self, pos: usize) {
        assert!(pos < self.len);
        let shift = StorageType::one() << (pos % Self::BIT_WIDTH);
        let word = &mut self.bitset[pos / Self::BIT_WIDTH];
        *word = *word | shift;
    }

    /// The first unset position at or after `from`.
    pub fn first_empty_from(&self, from: usize) -> Option<usize> {
        let mut word_index = from / Self::BIT_WIDTH;
        // Mask off the bits below `from` in the first word by treating them as occupied.
        let mut word = *self.bitset.get(word_index)? | Self::low_mask(from % Self::BIT_WIDTH);
        loop {
            if word != StorageType::max_value() {
                let pos = word_index * Self::BIT_WIDTH + word.trailing_ones() as usize;
                return (pos < self.len).then_some(pos);
            }
            word_index += 1;
            word = *self.bitset.get(word_index)?;
        }
    }

    #[inline]
    fn low_mask(bits: usize) -> StorageType {
        if bits == 0 {
            StorageType::zero()
        } else {
            StorageType::max_value() >> (Self::BIT_WIDTH - bits)
        }
    }
}

pub type Bitset64 = Bitset<u64>;
