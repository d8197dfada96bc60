//!
//! globally-available parts
//!
pub use crate::error::{Result, SeqError};
pub use crate::params::{GrowthPolicy, SeqParams, DEFAULT_CAPACITY};
pub use crate::seq::DoubleArraySeq;
