//!
//! Display and approximate comparison of `DoubleArraySeq`
//!
use super::DoubleArraySeq;
use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;

///
/// `<1.0, [2.0], 3.0>` where the current element is in brackets
///
impl std::fmt::Display for DoubleArraySeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "<{}>",
            self.elements()
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    if self.cursor == Some(i) {
                        format!("[{:?}]", v)
                    } else {
                        format!("{:?}", v)
                    }
                })
                .join(", ")
        )
    }
}

impl DoubleArraySeq {
    /// same size and cursor, ignoring cursor on empty sequences
    fn same_shape(&self, other: &Self) -> bool {
        self.count == other.count && (self.count == 0 || self.cursor == other.cursor)
    }
}

impl AbsDiffEq for DoubleArraySeq {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.same_shape(other)
            && self
                .elements()
                .iter()
                .zip(other.elements())
                .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for DoubleArraySeq {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.same_shape(other)
            && self
                .elements()
                .iter()
                .zip(other.elements())
                .all(|(a, b)| f64::relative_eq(a, b, epsilon, max_relative))
    }
}
