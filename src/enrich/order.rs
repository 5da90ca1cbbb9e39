use crate::models::item::ItemRecord;

/// Puts records back into inventory order. Stable, so equal slots keep arrival order.
pub fn finalize_order(records: &mut [ItemRecord]) {
    records.sort_by_key(|record| record.slot);
}
