//! `warehouse-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the item identifier, the error model and the recorder capability
//! the ledger reports notifications through.

pub mod error;
pub mod id;
pub mod recorder;

pub use error::{LedgerError, LedgerResult};
pub use id::ItemId;
pub use recorder::{MemoryRecorder, NullRecorder, Recorder};
