//!
//! `DoubleArraySeq` growable sequence of f64 with a single cursor
//!
//! ## Cursor
//! The sequence has at most one *current element*. Insertions are anchored
//! to it (`add_after`, `add_before`), and the inserted value becomes current.
//! `start`/`advance` move it, `remove_current` deletes it.
//!
//! Cursor validity is tracked separately from the stored values, so any
//! f64 including `0.0` can be the current element.
//!
//! ## Storage
//! Values live in `Slots` whose length is the capacity. Only `a[0..size]`
//! is meaningful. See `capacity.rs` for the growth rules.
//!
use crate::error::{Result, SeqError};
use crate::params::{SeqParams, DEFAULT_CAPACITY};
use crate::storage::Slots;
use std::convert::TryInto;
use std::iter::FromIterator;
pub mod capacity;
pub mod cursor;
pub mod display;

///
/// Sequence of f64 with a cursor on the current element
///
/// * `0 <= count <= slots.size()`
/// * `cursor` is `Some(i)` with `i < count`, or `None`
///
#[derive(Debug, Clone)]
pub struct DoubleArraySeq {
    /// backing buffer, its size is the capacity
    slots: Slots,
    /// number of elements in use
    count: usize,
    /// index of the current element
    cursor: Option<usize>,
    params: SeqParams,
}

impl DoubleArraySeq {
    ///
    /// Empty sequence with `DEFAULT_CAPACITY` slots and no current element.
    ///
    pub fn new() -> DoubleArraySeq {
        DoubleArraySeq {
            slots: Slots::new(DEFAULT_CAPACITY),
            count: 0,
            cursor: None,
            params: SeqParams::default(),
        }
    }
    ///
    /// Empty sequence with `capacity` slots.
    ///
    /// Accepts any integer type; a negative (or otherwise unrepresentable)
    /// capacity is rejected with `InvalidArgument`.
    ///
    pub fn with_capacity<C>(capacity: C) -> Result<DoubleArraySeq>
    where
        C: TryInto<usize> + Copy + std::fmt::Display,
    {
        let initial_capacity: usize = capacity.try_into().map_err(|_| {
            SeqError::InvalidArgument(format!(
                "initial capacity {} is not a non-negative size",
                capacity
            ))
        })?;
        DoubleArraySeq::with_params(SeqParams {
            initial_capacity,
            ..SeqParams::default()
        })
    }
    ///
    /// Empty sequence configured by `params`.
    ///
    pub fn with_params(params: SeqParams) -> Result<DoubleArraySeq> {
        Ok(DoubleArraySeq {
            slots: Slots::try_new(params.initial_capacity)?,
            count: 0,
            cursor: None,
            params,
        })
    }
    ///
    /// Number of elements
    ///
    pub fn size(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    pub fn params(&self) -> &SeqParams {
        &self.params
    }
    ///
    /// Copy of the elements `a[0..size]`
    ///
    pub fn to_vec(&self) -> Vec<f64> {
        self.elements().to_vec()
    }
    fn elements(&self) -> &[f64] {
        &self.slots.as_slice()[..self.count]
    }
    ///
    /// Insert `value` right after the current element.
    /// Appends at the end if there is no current element or the current is the last one.
    /// The new element becomes current.
    ///
    pub fn add_after(&mut self, value: f64) -> Result<()> {
        let index = match self.cursor {
            Some(i) if i + 1 < self.count => i + 1,
            _ => self.count,
        };
        self.insert_at(index, value)
    }
    ///
    /// Insert `value` right before the current element.
    /// Inserts at the front if there is no current element.
    /// The new element becomes current.
    ///
    pub fn add_before(&mut self, value: f64) -> Result<()> {
        let index = self.cursor.unwrap_or(0);
        self.insert_at(index, value)
    }
    fn insert_at(&mut self, index: usize, value: f64) -> Result<()> {
        let required = capacity::required_size(self.count, 1)?;
        self.grow_for(required)?;
        self.slots.shift_right(index, self.count);
        self.slots[index] = value;
        self.count = required;
        self.cursor = Some(index);
        Ok(())
    }
    ///
    /// Remove the current element.
    ///
    /// The element that followed it becomes current.
    /// If the removed element was the last one, there is no current element afterwards.
    ///
    pub fn remove_current(&mut self) -> Result<()> {
        let i = self.cursor.ok_or(SeqError::InvalidState("remove_current"))?;
        self.slots.shift_left(i, self.count);
        self.count -= 1;
        self.cursor = if i < self.count { Some(i) } else { None };
        Ok(())
    }
    ///
    /// Append a copy of the elements of `other` to the end.
    ///
    /// The cursor of `self` is not moved and `other` is unchanged.
    /// Passing `None` fails with `NullReference`.
    ///
    pub fn add_all<'a, S>(&mut self, other: S) -> Result<()>
    where
        S: Into<Option<&'a DoubleArraySeq>>,
    {
        let other = other.into().ok_or(SeqError::NullReference("add_all"))?;
        let required = capacity::required_size(self.count, other.count)?;
        self.grow_for(required)?;
        self.slots.as_mut_slice()[self.count..required].copy_from_slice(other.elements());
        self.count = required;
        Ok(())
    }
    ///
    /// New sequence with the elements of `first` followed by those of `second`.
    ///
    /// Its capacity equals its size, it has no current element and it takes
    /// the growth policy of `first`. `None` in either argument fails with `NullReference`.
    ///
    pub fn concatenation<'a, 'b, S1, S2>(first: S1, second: S2) -> Result<DoubleArraySeq>
    where
        S1: Into<Option<&'a DoubleArraySeq>>,
        S2: Into<Option<&'b DoubleArraySeq>>,
    {
        let first = first
            .into()
            .ok_or(SeqError::NullReference("concatenation"))?;
        let second = second
            .into()
            .ok_or(SeqError::NullReference("concatenation"))?;
        let count = capacity::required_size(first.count, second.count)?;
        let mut slots = Slots::try_new(count)?;
        slots.as_mut_slice()[..first.count].copy_from_slice(first.elements());
        slots.as_mut_slice()[first.count..].copy_from_slice(second.elements());
        Ok(DoubleArraySeq {
            slots,
            count,
            cursor: None,
            params: first.params,
        })
    }
}

impl Default for DoubleArraySeq {
    fn default() -> DoubleArraySeq {
        DoubleArraySeq::new()
    }
}

///
/// Same size, same elements and same current position.
/// Capacity and params are ignored, and all empty sequences are equal.
///
impl PartialEq for DoubleArraySeq {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.count == other.count
            && self.cursor == other.cursor
            && self.elements() == other.elements()
    }
}

///
/// Collect into a sequence whose capacity is the number of items, with no current element
///
impl FromIterator<f64> for DoubleArraySeq {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let v: Vec<f64> = iter.into_iter().collect();
        DoubleArraySeq {
            count: v.len(),
            slots: Slots::from(v),
            cursor: None,
            params: SeqParams::default(),
        }
    }
}
