use serde::{Deserialize, Serialize};

use warehouse_core::ItemId;

/// A single stock-keeping record.
///
/// Price and quantity are unconstrained: zero and negative values are accepted
/// as-is. A NaN or infinite price is storable but cannot be encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Stock value of this record (`price × quantity`).
    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
