//! Notices the ledger hands to its recorder.

use warehouse_core::ItemId;

/// Something observable happened to the ledger.
///
/// `Display` renders the text line the recorder receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryNotice {
    ItemAdded { id: ItemId, name: String },
    QuantityUpdated { id: ItemId, quantity: i64 },
}

impl InventoryNotice {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryNotice::ItemAdded { .. } => "inventory.item.added",
            InventoryNotice::QuantityUpdated { .. } => "inventory.item.quantity_updated",
        }
    }

    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryNotice::ItemAdded { id, .. } => *id,
            InventoryNotice::QuantityUpdated { id, .. } => *id,
        }
    }
}

impl core::fmt::Display for InventoryNotice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryNotice::ItemAdded { name, .. } => write!(f, "Added item: {name}"),
            InventoryNotice::QuantityUpdated { id, quantity } => {
                write!(f, "Updated quantity for item {id}: {quantity}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_notice_renders_name() {
        let notice = InventoryNotice::ItemAdded {
            id: ItemId::new(1),
            name: "Lays".to_string(),
        };
        assert_eq!(notice.to_string(), "Added item: Lays");
        assert_eq!(notice.event_type(), "inventory.item.added");
    }

    #[test]
    fn quantity_notice_renders_id_and_quantity() {
        let notice = InventoryNotice::QuantityUpdated {
            id: ItemId::new(3),
            quantity: 24,
        };
        assert_eq!(notice.to_string(), "Updated quantity for item 3: 24");
        assert_eq!(notice.item_id(), ItemId::new(3));
    }
}
