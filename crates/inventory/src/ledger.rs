use std::collections::HashMap;
use std::sync::Arc;

use warehouse_core::{ItemId, LedgerError, LedgerResult, Recorder};

use crate::codec;
use crate::item::Item;
use crate::notice::InventoryNotice;

/// In-memory inventory ledger: the id-keyed item store plus its operations.
///
/// Invariant: every key equals the `id` of the item stored under it. Items
/// enter only through `add` (or a whole-store `restore_json`), change only
/// through `update_quantity` and leave only through `remove_item`.
///
/// Iteration order of every enumerating method is unspecified.
pub struct InventoryLedger {
    items: HashMap<ItemId, Item>,
    recorder: Arc<dyn Recorder>,
}

impl InventoryLedger {
    /// Empty ledger reporting to `recorder`.
    pub fn new(recorder: Arc<dyn Recorder>) -> Self {
        Self {
            items: HashMap::new(),
            recorder,
        }
    }

    /// Insert `item`, replacing any entry with the same id.
    pub fn add(&mut self, item: Item) {
        let notice = InventoryNotice::ItemAdded {
            id: item.id,
            name: item.name.clone(),
        };
        let replaced = self.items.insert(item.id, item).is_some();
        tracing::debug!(item_id = %notice.item_id(), replaced, "item added");
        self.notify(notice);
    }

    /// Sum of `price × quantity` over all items; 0 for an empty ledger.
    pub fn total_value(&self) -> f64 {
        self.items.values().map(Item::value).sum()
    }

    /// Items whose quantity is strictly below `limit`, in no particular order.
    pub fn find_low_stock(&self, limit: i64) -> Vec<Item> {
        self.items
            .values()
            .filter(|item| item.quantity < limit)
            .cloned()
            .collect()
    }

    /// Overwrite the quantity of the item stored under `id`.
    ///
    /// Fails with `NotFound` (store untouched) when `id` is absent.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> LedgerResult<()> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| LedgerError::not_found(id))?;
        item.quantity = new_quantity;

        self.notify(InventoryNotice::QuantityUpdated {
            id,
            quantity: new_quantity,
        });
        Ok(())
    }

    /// Remove the item stored under `id`.
    ///
    /// Removing an absent id is a no-op and still succeeds, unlike
    /// `update_quantity`.
    pub fn remove_item(&mut self, id: ItemId) -> LedgerResult<()> {
        let removed = self.items.remove(&id).is_some();
        tracing::debug!(item_id = %id, removed, "item removed");
        Ok(())
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Detached copy of the store.
    pub fn snapshot(&self) -> HashMap<ItemId, Item> {
        self.items.clone()
    }

    /// Encode the ledger (store + recorder name) as indented JSON.
    ///
    /// Fails with `Encode` when an item's price is NaN or infinite.
    pub fn to_json(&self) -> LedgerResult<String> {
        codec::encode_snapshot(self.items.values(), self.recorder.name(), true)
    }

    /// Encode the ledger (store + recorder name) as single-line JSON.
    pub fn to_json_compact(&self) -> LedgerResult<String> {
        codec::encode_snapshot(self.items.values(), self.recorder.name(), false)
    }

    /// Replace the whole store with the one encoded in `text`.
    ///
    /// The store is swapped only after `text` decodes completely; on error the
    /// ledger is left as it was. No notices are emitted.
    pub fn restore_json(&mut self, text: &str) -> LedgerResult<()> {
        let items = codec::decode_snapshot(text)?;
        tracing::debug!(items = items.len(), "ledger restored");
        self.items = items;
        Ok(())
    }

    fn notify(&self, notice: InventoryNotice) {
        tracing::debug!(event_type = notice.event_type(), "ledger notice");
        self.recorder.record(&notice.to_string());
    }
}

impl core::fmt::Debug for InventoryLedger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryLedger")
            .field("items", &self.items)
            .field("recorder", &self.recorder.name())
            .finish()
    }
}
