//! JSON codec for ledger state.
//!
//! Wire shape of a store: an object keyed by the decimal text of each item id,
//! each value an `Item` object (`id`, `name`, `price`, `quantity` in that order).
//!
//! ```text
//! {
//!     "1": {
//!         "id": 1,
//!         "name": "Twix",
//!         "price": 40.0,
//!         "quantity": 50
//!     }
//! }
//! ```
//!
//! Encoding goes through a `BTreeMap` so output is stable regardless of the
//! store's iteration order. Decoding accepts pretty and compact input alike and
//! always builds a fresh map; callers swap it in only on success.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use warehouse_core::{ItemId, LedgerError, LedgerResult};

use crate::item::Item;

const INDENT: &[u8] = b"    ";

/// Encode items as an indented id-keyed JSON object.
///
/// Fails with `Encode` if any price is NaN or infinite; JSON has no spelling
/// for those.
pub fn encode_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> LedgerResult<String> {
    to_pretty(&keyed(items)?)
}

/// Encode items as a single-line id-keyed JSON object.
pub fn encode_items_compact<'a>(items: impl IntoIterator<Item = &'a Item>) -> LedgerResult<String> {
    serde_json::to_string(&keyed(items)?).map_err(|e| LedgerError::encode(e.to_string()))
}

/// Decode an id-keyed JSON object into a fresh id → item map.
///
/// Fails with `Parse` on malformed JSON, on a wrong shape, and on any entry
/// whose key disagrees with its embedded `id`.
pub fn decode_items(text: &str) -> LedgerResult<HashMap<ItemId, Item>> {
    let items: HashMap<ItemId, Item> = serde_json::from_str(text)?;
    ensure_keys_match(&items)?;
    Ok(items)
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    items: BTreeMap<ItemId, &'a Item>,
    recorder: &'a str,
}

// `recorder` is informational only and skipped on decode; a restored ledger
// keeps its own recorder.
#[derive(Deserialize)]
struct Snapshot {
    items: HashMap<ItemId, Item>,
}

pub(crate) fn encode_snapshot<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    recorder: &'a str,
    pretty: bool,
) -> LedgerResult<String> {
    let snapshot = SnapshotRef {
        items: keyed(items)?,
        recorder,
    };
    if pretty {
        to_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot).map_err(|e| LedgerError::encode(e.to_string()))
    }
}

pub(crate) fn decode_snapshot(text: &str) -> LedgerResult<HashMap<ItemId, Item>> {
    let snapshot: Snapshot = serde_json::from_str(text)?;
    ensure_keys_match(&snapshot.items)?;
    Ok(snapshot.items)
}

// serde_json writes non-finite floats as `null`, which the decoder rejects.
fn keyed<'a>(
    items: impl IntoIterator<Item = &'a Item>,
) -> LedgerResult<BTreeMap<ItemId, &'a Item>> {
    items
        .into_iter()
        .map(|item| {
            if item.price.is_finite() {
                Ok((item.id, item))
            } else {
                Err(LedgerError::encode(format!("item {}: non-finite price", item.id)))
            }
        })
        .collect()
}

fn to_pretty<T: Serialize>(value: &T) -> LedgerResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut ser)
        .map_err(|e| LedgerError::encode(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| LedgerError::encode(e.to_string()))
}

fn ensure_keys_match(items: &HashMap<ItemId, Item>) -> LedgerResult<()> {
    match items.iter().find(|(key, item)| **key != item.id) {
        Some((key, item)) => Err(LedgerError::parse(format!(
            "entry keyed {key} carries id {}",
            item.id
        ))),
        None => Ok(()),
    }
}
