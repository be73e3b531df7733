//! Fixed demo sequence over a fresh ledger.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use warehouse_core::{ItemId, Recorder};
use warehouse_inventory::{InventoryLedger, Item, decode_items};

use crate::config::DemoConfig;

/// Store previously saved by an earlier run; decoded alongside the demo.
pub const SAVED_STORE: &str = r#"{"1": {"id": 1, "name": "Twix", "price": 40, "quantity": 50}}"#;

const LOW_STOCK_LIMIT: i64 = 5;

/// Run the demo, writing the report to `out` and notices to `recorder`.
///
/// Aborts on the first ledger error.
pub fn run_demo(
    recorder: Arc<dyn Recorder>,
    config: &DemoConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    // A bad saved store is reported but does not stop the run.
    let saved = match decode_items(SAVED_STORE) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "saved store could not be decoded");
            writeln!(out, "{err}")?;
            Default::default()
        }
    };

    let mut ledger = InventoryLedger::new(recorder);
    ledger.add(Item::new(1, "Lays", 50.0, 10));
    ledger.add(Item::new(2, "Milka", 120.0, 24));
    ledger.add(Item::new(3, "Stom", 60.0, 12));

    writeln!(out, "Total warehouse value: {:.2}", ledger.total_value())?;

    let mut low = ledger.find_low_stock(LOW_STOCK_LIMIT);
    low.sort_by_key(|item| item.id);
    for item in &low {
        writeln!(out, "{}", item.name)?;
    }

    ledger
        .update_quantity(ItemId::new(3), 24)
        .context("updating quantity of item 3")?;
    writeln!(out, "Total warehouse value: {:.2}", ledger.total_value())?;

    ledger
        .remove_item(ItemId::new(2))
        .context("removing item 2")?;

    let mut remaining: Vec<&Item> = ledger.items().collect();
    remaining.sort_by_key(|item| item.id);
    for item in remaining {
        writeln!(
            out,
            "{}: {} (price {:.2}, quantity {})",
            item.id, item.name, item.price, item.quantity
        )?;
    }

    let encoded = if config.compact {
        ledger.to_json_compact()
    } else {
        ledger.to_json()
    };
    let snapshot = encoded.context("encoding ledger snapshot")?;
    writeln!(out, "{snapshot}")?;

    let mut loaded: Vec<&Item> = saved.values().collect();
    loaded.sort_by_key(|item| item.id);
    for item in loaded {
        writeln!(out, "Loaded from JSON: {}: {} x{}", item.id, item.name, item.quantity)?;
    }

    writeln!(out, "Warehouse demo finished")?;
    Ok(())
}
