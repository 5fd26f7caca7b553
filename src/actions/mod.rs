//! Operator actions over computed duplicate pairings.
//!
//! The delete module turns a pairing list plus an operator selection into
//! filesystem deletions:
//! - Batch deletion of every duplicate, or of a 1-based index selection
//! - Per-item success/failure reporting; a failed item never aborts the batch
//! - Originals are never touched
//!
//! ```no_run
//! use imagekeep::actions::delete_all;
//! use imagekeep::duplicates::DuplicatePairing;
//!
//! let pairings: Vec<DuplicatePairing> = vec![];
//! let outcome = delete_all(&pairings);
//! println!("{}", outcome.summary());
//! ```

pub mod delete;

pub use delete::{
    apply_selection, delete_all, delete_selected, BatchOutcome, DeleteError, DeleteResult,
    Selection, SelectionError,
};
