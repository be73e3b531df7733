//! Inventory domain module.
//!
//! This crate contains the in-memory inventory ledger: the item record, the
//! id-keyed store with its mutations and queries, the notices it reports, and
//! the JSON codec for its state. No IO beyond the injected recorder.

pub mod codec;
pub mod item;
pub mod ledger;
pub mod notice;

pub use codec::{decode_items, encode_items, encode_items_compact};
pub use item::Item;
pub use ledger::InventoryLedger;
pub use notice::InventoryNotice;
