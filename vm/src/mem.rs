//! Tape memory
//!
//! Fixed-capacity byte array addressed by a signed cursor. The cursor itself
//! lives in the [`Vm`](crate::Vm); the tape only checks bounds.

use derive_more::Display;

/// Number of cells of the classic tape
pub const TAPE_CAPACITY: usize = 30000;

// Data pointer is an `isize`, every valid index has to be representable
static_assertions::const_assert!(TAPE_CAPACITY <= isize::MAX as usize);

/// Tape access outside of `0..CAPACITY`
#[derive(Clone, Copy, Display, Debug, PartialEq, Eq)]
#[display(fmt = "Tape index {_0} out of range")]
pub struct OutOfRange(pub isize);

impl std::error::Error for OutOfRange {}

/// Zero-initialised byte tape of `CAPACITY` cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tape<const CAPACITY: usize = TAPE_CAPACITY> {
    data: Box<[u8]>,
}

impl<const CAPACITY: usize> Default for Tape<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> Tape<CAPACITY> {
    /// Allocate a zeroed tape
    pub fn new() -> Self {
        Self { data: vec![0; CAPACITY].into_boxed_slice() }
    }

    /// Read cell at `index`
    #[inline]
    pub fn read(&self, index: isize) -> Result<u8, OutOfRange> {
        Ok(self.data[Self::check_range(index)?])
    }

    /// Overwrite cell at `index`
    #[inline]
    pub fn write(&mut self, index: isize, value: u8) -> Result<(), OutOfRange> {
        self.data[Self::check_range(index)?] = value;
        Ok(())
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Whole tape contents
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline(always)]
    fn check_range(index: isize) -> Result<usize, OutOfRange> {
        usize::try_from(index).ok().filter(|&i| i < CAPACITY).ok_or(OutOfRange(index))
    }
}
