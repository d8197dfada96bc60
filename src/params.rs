//!
//! SeqParams: configuration of initial capacity and growth of `DoubleArraySeq`
//!

/// Number of slots allocated by `DoubleArraySeq::new()`
pub const DEFAULT_CAPACITY: usize = 10;

///
/// How the storage grows when an insertion does not fit.
///
/// Both policies grow to at least the required number of slots.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// allocate exactly the required number of slots
    Exact,
    /// allocate `max(required, 2 * capacity)` slots
    Doubling,
}

impl GrowthPolicy {
    ///
    /// Capacity to allocate when `required` slots are needed and `capacity` are present.
    /// Returns `capacity` itself if it is already large enough.
    ///
    pub fn next_capacity(self, capacity: usize, required: usize) -> usize {
        if required <= capacity {
            return capacity;
        }
        match self {
            GrowthPolicy::Exact => required,
            GrowthPolicy::Doubling => std::cmp::max(required, capacity.saturating_mul(2)),
        }
    }
}

impl std::fmt::Display for GrowthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GrowthPolicy::Exact => write!(f, "exact"),
            GrowthPolicy::Doubling => write!(f, "doubling"),
        }
    }
}

///
/// Parameters of `DoubleArraySeq`
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqParams {
    ///
    /// number of slots allocated on construction
    pub initial_capacity: usize,
    ///
    /// growth rule used by insertions
    pub growth: GrowthPolicy,
}

impl SeqParams {
    pub fn new(initial_capacity: usize, growth: GrowthPolicy) -> SeqParams {
        SeqParams {
            initial_capacity,
            growth,
        }
    }
    /// grow one insertion at a time, never over-allocating
    pub fn exact_fit() -> SeqParams {
        SeqParams::new(DEFAULT_CAPACITY, GrowthPolicy::Exact)
    }
    /// amortized growth for long runs of insertions
    pub fn doubling() -> SeqParams {
        SeqParams::new(DEFAULT_CAPACITY, GrowthPolicy::Doubling)
    }
}

impl Default for SeqParams {
    fn default() -> SeqParams {
        SeqParams::doubling()
    }
}

impl std::fmt::Display for SeqParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "initial_capacity: {}, growth: {}",
            self.initial_capacity, self.growth
        )
    }
}
