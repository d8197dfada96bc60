//!
//! Slot buffer backing `DoubleArraySeq`
//!
//! `Slots` is a wrapper of `std::Vec<f64>` whose length is always the
//! capacity of the sequence. Slots beyond the logical size hold `0.0`.
//!
use crate::error::{Result, SeqError};
use log::debug;
use std::ops::{Index, IndexMut};

/// Fixed size buffer of f64, reallocated explicitly on resize.
#[derive(Debug, Clone)]
pub struct Slots(Vec<f64>);

impl Slots {
    ///
    /// Create `size` zero-filled slots.
    ///
    pub fn new(size: usize) -> Slots {
        Slots(vec![0.0; size])
    }
    ///
    /// Create `size` zero-filled slots, reporting allocation failure
    /// as `ResourceExhausted` instead of aborting.
    ///
    pub fn try_new(size: usize) -> Result<Slots> {
        let mut v: Vec<f64> = Vec::new();
        v.try_reserve_exact(size)
            .map_err(|_| SeqError::ResourceExhausted { requested: size })?;
        v.resize(size, 0.0);
        Ok(Slots(v))
    }
    #[inline]
    pub fn size(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }
    ///
    /// Allocate a new buffer of `size` slots and copy the first `keep` values into it.
    /// Values that do not fit in `size` are dropped.
    ///
    pub fn reallocated(&self, size: usize, keep: usize) -> Result<Slots> {
        let mut b = Slots::try_new(size)?;
        let n = keep.min(size).min(self.size());
        b.0[..n].copy_from_slice(&self.0[..n]);
        debug!("slots reallocated: {} -> {} (kept {})", self.size(), size, n);
        Ok(b)
    }
    ///
    /// Move `a[at..end]` one slot to the right, leaving `a[at]` free.
    ///
    /// `end < self.size()` is required.
    pub fn shift_right(&mut self, at: usize, end: usize) {
        self.0.copy_within(at..end, at + 1);
    }
    ///
    /// Move `a[at+1..end]` one slot to the left, overwriting `a[at]`,
    /// and clear the slot `a[end-1]` that became unused.
    ///
    /// `at < end <= self.size()` is required.
    pub fn shift_left(&mut self, at: usize, end: usize) {
        self.0.copy_within(at + 1..end, at);
        self.0[end - 1] = 0.0;
    }
}

impl From<Vec<f64>> for Slots {
    fn from(v: Vec<f64>) -> Slots {
        Slots(v)
    }
}

impl Index<usize> for Slots {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Slots {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}
