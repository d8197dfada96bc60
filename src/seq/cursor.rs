//!
//! Cursor movement on `DoubleArraySeq`
//!
use super::DoubleArraySeq;
use crate::error::{Result, SeqError};

impl DoubleArraySeq {
    ///
    /// Is there a current element?
    ///
    pub fn has_current(&self) -> bool {
        self.cursor.is_some()
    }
    ///
    /// Value of the current element
    ///
    pub fn current(&self) -> Result<f64> {
        self.cursor
            .map(|i| self.slots[i])
            .ok_or(SeqError::InvalidState("current"))
    }
    ///
    /// Move the cursor to the first element.
    /// On an empty sequence there is no current element.
    ///
    pub fn start(&mut self) {
        self.cursor = if self.count > 0 { Some(0) } else { None };
    }
    ///
    /// Move the cursor to the next element.
    /// Advancing from the last element leaves no current element.
    ///
    pub fn advance(&mut self) -> Result<()> {
        let i = self.cursor.ok_or(SeqError::InvalidState("advance"))?;
        self.cursor = if i + 1 < self.count { Some(i + 1) } else { None };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_on_empty() {
        let mut s = DoubleArraySeq::new();
        assert!(!s.has_current());
        s.start();
        assert!(!s.has_current());
        assert_eq!(s.current(), Err(SeqError::InvalidState("current")));
        assert_eq!(s.advance(), Err(SeqError::InvalidState("advance")));
    }
    #[test]
    fn cursor_walk() {
        let mut s: DoubleArraySeq = vec![1.0, 2.0, 3.0].into_iter().collect();
        assert!(!s.has_current());
        s.start();
        let mut visited = vec![];
        while s.has_current() {
            visited.push(s.current().unwrap());
            s.advance().unwrap();
        }
        assert_eq!(visited, vec![1.0, 2.0, 3.0]);
        assert!(s.advance().is_err());
    }
    #[test]
    fn zero_can_be_current() {
        let mut s = DoubleArraySeq::new();
        s.add_after(0.0).unwrap();
        assert!(s.has_current());
        assert_eq!(s.current().unwrap(), 0.0);
        s.add_after(-0.0).unwrap();
        s.start();
        s.advance().unwrap();
        assert!(s.has_current());
    }
}
