//!
//! Capacity management of `DoubleArraySeq`
//!
//! Insertions grow the storage by `SeqParams::growth` so that it holds at
//! least the required number of elements. The explicit operations here
//! (`ensure_capacity`, `trim_to_size`, `add_capacity`, `resize`) set the
//! capacity directly and ignore the policy.
//!
use super::DoubleArraySeq;
use crate::error::{Result, SeqError};
use log::{debug, warn};

///
/// `a + b`, or `ResourceExhausted` if it does not fit in usize
///
pub(crate) fn required_size(a: usize, b: usize) -> Result<usize> {
    a.checked_add(b).ok_or(SeqError::ResourceExhausted {
        requested: usize::MAX,
    })
}

impl DoubleArraySeq {
    ///
    /// Number of allocated slots
    ///
    pub fn capacity(&self) -> usize {
        self.slots.size()
    }
    ///
    /// Grow the storage to `min` slots if it is smaller. Elements are kept in order.
    ///
    pub fn ensure_capacity(&mut self, min: usize) -> Result<()> {
        if self.capacity() < min {
            self.reallocate(min)?;
        }
        Ok(())
    }
    ///
    /// Shrink the storage to exactly `size()` slots.
    ///
    pub fn trim_to_size(&mut self) -> Result<()> {
        if self.count < self.capacity() {
            self.reallocate(self.count)?;
        }
        Ok(())
    }
    ///
    /// Grow the storage by one slot.
    ///
    pub fn add_capacity(&mut self) -> Result<()> {
        let size = required_size(self.capacity(), 1)?;
        self.reallocate(size)
    }
    ///
    /// Reallocate the storage to exactly `new_capacity` slots.
    ///
    /// If the sequence holds more elements than that, the tail is dropped,
    /// and the cursor is cleared if it was on a dropped element.
    /// Returns the number of dropped elements.
    ///
    pub fn resize(&mut self, new_capacity: usize) -> Result<usize> {
        self.reallocate(new_capacity)?;
        let dropped = self.count.saturating_sub(new_capacity);
        if dropped > 0 {
            warn!(
                "resize to {} dropped {} of {} elements",
                new_capacity, dropped, self.count
            );
            self.count = new_capacity;
            let count = self.count;
            self.cursor = self.cursor.filter(|&i| i < count);
        }
        Ok(dropped)
    }
    ///
    /// Make room for `required` elements following the growth policy.
    ///
    pub(super) fn grow_for(&mut self, required: usize) -> Result<()> {
        let capacity = self.capacity();
        let next = self.params.growth.next_capacity(capacity, required);
        if next > capacity {
            debug!(
                "growing {} -> {} ({}) for {} elements",
                capacity, next, self.params.growth, required
            );
            self.reallocate(next)?;
        }
        Ok(())
    }
    fn reallocate(&mut self, size: usize) -> Result<()> {
        self.slots = self.slots.reallocated(size, self.count)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{GrowthPolicy, SeqParams};

    fn seq_of(values: &[f64]) -> DoubleArraySeq {
        let mut s = DoubleArraySeq::new();
        for &v in values {
            s.add_after(v).unwrap();
        }
        s
    }

    #[test]
    fn required_size_overflow() {
        assert_eq!(required_size(3, 4), Ok(7));
        assert_eq!(
            required_size(usize::MAX, 1),
            Err(SeqError::ResourceExhausted {
                requested: usize::MAX
            })
        );
    }
    #[test]
    fn ensure_capacity_grows_only() {
        let mut s = seq_of(&[1.0, 2.0, 3.0]);
        s.ensure_capacity(20).unwrap();
        assert_eq!(s.capacity(), 20);
        assert_eq!(s.to_vec(), vec![1.0, 2.0, 3.0]);
        s.ensure_capacity(5).unwrap();
        assert_eq!(s.capacity(), 20);
    }
    #[test]
    fn ensure_capacity_unallocatable() {
        let mut s = seq_of(&[1.0]);
        assert_eq!(
            s.ensure_capacity(usize::MAX),
            Err(SeqError::ResourceExhausted {
                requested: usize::MAX
            })
        );
        // unchanged on failure
        assert_eq!(s.capacity(), 10);
        assert_eq!(s.to_vec(), vec![1.0]);
    }
    #[test]
    fn trim_and_add_capacity() {
        let mut s = seq_of(&[1.0, 2.0]);
        s.trim_to_size().unwrap();
        assert_eq!(s.capacity(), 2);
        s.add_capacity().unwrap();
        assert_eq!(s.capacity(), 3);
        assert_eq!(s.to_vec(), vec![1.0, 2.0]);
        assert_eq!(s.current().unwrap(), 2.0);
    }
    #[test]
    fn resize_truncates() {
        let mut s = seq_of(&[1.0, 2.0, 3.0, 4.0]);
        // cursor on 4.0 (index 3) is dropped
        assert_eq!(s.resize(2).unwrap(), 2);
        assert_eq!(s.capacity(), 2);
        assert_eq!(s.size(), 2);
        assert_eq!(s.to_vec(), vec![1.0, 2.0]);
        assert!(!s.has_current());

        let mut s = seq_of(&[1.0, 2.0, 3.0]);
        s.start();
        assert_eq!(s.resize(1).unwrap(), 2);
        assert_eq!(s.current().unwrap(), 1.0);

        let mut s = seq_of(&[1.0, 2.0]);
        assert_eq!(s.resize(0).unwrap(), 2);
        assert!(s.is_empty());
        assert!(!s.has_current());
    }
    #[test]
    fn resize_grow_keeps_elements() {
        let mut s = seq_of(&[5.0, 6.0]);
        assert_eq!(s.resize(4).unwrap(), 0);
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.to_vec(), vec![5.0, 6.0]);
        assert_eq!(s.current().unwrap(), 6.0);
    }
    #[test]
    fn growth_on_insert() {
        let mut exact =
            DoubleArraySeq::with_params(SeqParams::new(2, GrowthPolicy::Exact)).unwrap();
        let mut doubling =
            DoubleArraySeq::with_params(SeqParams::new(2, GrowthPolicy::Doubling)).unwrap();
        for i in 0..5 {
            exact.add_after(i as f64).unwrap();
            doubling.add_after(i as f64).unwrap();
        }
        assert_eq!(exact.capacity(), 5);
        assert_eq!(doubling.capacity(), 8);
        assert_eq!(exact, doubling);
    }
    #[test]
    fn growth_from_zero_capacity() {
        let mut s = DoubleArraySeq::with_capacity(0).unwrap();
        assert_eq!(s.capacity(), 0);
        s.add_before(1.5).unwrap();
        assert_eq!(s.capacity(), 1);
        assert_eq!(s.current().unwrap(), 1.5);
    }
}
