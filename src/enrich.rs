pub mod assemble;
pub mod correlate;
pub mod fetcher;
pub mod order;

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use crate::{
    browser::net::Fetch,
    error::InventoryError,
    models::{
        config::EnrichConfig,
        inventory::{InventoryPayload, MatchedPair},
        item::ItemRecord,
    },
    parsing::{catalog::join_catalog, inspect_link::build_inspect_link, inventory_payload::parse_inventory},
};

use self::{assemble::assemble_record, correlate::Correlator, fetcher::spawn_inspections, order::finalize_order};

/// Turns a raw inventory response into slot ordered item records, inspecting what can be inspected.
pub struct Enricher {
    fetch: Arc<dyn Fetch>,
    config: EnrichConfig,
}

impl Enricher {
    pub fn new(fetch: Arc<dyn Fetch>, config: EnrichConfig) -> Result<Self, InventoryError> {
        config.validate()?;
        Ok(Enricher { fetch, config })
    }

    /// Fails only when `raw` itself is unusable. Failed or unreadable inspections
    /// still produce a record, just without the extended fields.
    ///
    /// Returns after every inspection request has finished.
    pub async fn enrich(&self, raw: &[u8]) -> Result<Vec<ItemRecord>, InventoryError> {
        let InventoryPayload { assets, descriptions, total_inventory_count } = parse_inventory(raw)?;
        let asset_count = assets.len();

        let pairs: Vec<MatchedPair> = join_catalog(assets, &descriptions);
        let matched = pairs.len();

        let mut records: Vec<ItemRecord> = Vec::with_capacity(matched);
        let mut pending: IndexMap<String, Vec<MatchedPair>> = IndexMap::new();

        for pair in pairs {
            let link = build_inspect_link(&pair, self.config.owner_steamid);

            if link.inspectable {
                pending.entry(link.url).or_default().push(pair);
            } else {
                records.push(assemble_record(&self.config, &pair, None, None));
            }
        }

        let mut correlator = Correlator::new(pending, &self.config);

        info!(
            total = ?total_inventory_count,
            assets = asset_count,
            matched,
            inspectable = correlator.outstanding(),
            links = correlator.link_count(),
            "Enriching inventory"
        );

        if !correlator.is_empty() {
            let mut results = spawn_inspections(Arc::clone(&self.fetch), &self.config, correlator.links());

            while let Some(result) = results.recv().await {
                records.extend(correlator.apply(result));
            }
        }

        records.extend(correlator.drain_unresolved());
        finalize_order(&mut records);

        info!(
            records = records.len(),
            inspected = records.iter().filter(|r| r.has_iteminfo()).count(),
            "Inventory enriched"
        );

        Ok(records)
    }
}
