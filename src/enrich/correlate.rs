use indexmap::IndexMap;
use tracing::debug;

use crate::{
    enrich::assemble::assemble_record,
    models::{
        config::EnrichConfig,
        inventory::{InspectionResult, MatchedPair},
        item::ItemRecord,
    },
};

/// Outstanding inspectable pairs grouped by inspect link, the correlation key.
pub struct Correlator<'a> {
    pending: IndexMap<String, Vec<MatchedPair<'a>>>,
    config: &'a EnrichConfig,
}

impl<'a> Correlator<'a> {
    pub fn new(pending: IndexMap<String, Vec<MatchedPair<'a>>>, config: &'a EnrichConfig) -> Self {
        Correlator { pending, config }
    }

    /// Distinct links still waiting for a result, in first seen order.
    pub fn links(&self) -> Vec<String> {
        self.pending.keys().cloned().collect()
    }

    pub fn link_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn outstanding(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    /// Applies one result to every pair waiting on its link. A result nobody waits for is dropped.
    pub fn apply(&mut self, result: InspectionResult) -> Vec<ItemRecord> {
        let Some(pairs) = self.pending.swap_remove(&result.request_url) else {
            debug!(request_url = %result.request_url, "Discarding inspection result with no matching item");
            return Vec::new();
        };

        let payload = if result.success { result.payload.as_ref() } else { None };

        pairs.iter()
            .map(|pair| assemble_record(self.config, pair, Some(result.request_url.as_str()), payload))
            .collect()
    }

    /// Base records for links that never reported back.
    pub fn drain_unresolved(self) -> Vec<ItemRecord> {
        let config = self.config;

        self.pending.into_iter()
            .flat_map(|(link, pairs)| {
                pairs.into_iter()
                    .map(|pair| assemble_record(config, &pair, Some(link.as_str()), None))
                    .collect::<Vec<ItemRecord>>()
            })
            .collect()
    }
}
