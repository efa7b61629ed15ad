//! Comparison of assembled documents: a structured change list over the
//! serialized form plus unified text diffs for review.

pub mod comparer;
pub mod error;
pub mod report;
pub mod structured;

pub use comparer::{Comparer, ComparerBuilder, ComparisonResult};
pub use error::DiffError;
pub use structured::{Change, ChangeType, ValueRepr};
