//! Mutable alignment models owned by the caller.
//!
//! Alignments are edited here and recomputed wholesale through the engines
//! in [`crate::operations`].

mod alignment;
mod store;

pub use alignment::{Alignment, AlignmentSummary};
pub use store::{AlignmentId, AlignmentStore};
