use serde_json::Value;
use tracing::warn;

use crate::{
    models::{config::EnrichConfig, inventory::MatchedPair, item::ItemRecord},
    parsing::{item_csfloat::parse_iteminfo, name_tag::parse_name_tag},
};

/// Builds the output record. Extended fields are only filled from a readable payload,
/// anything else leaves the record with its base fields.
pub fn assemble_record(
    config: &EnrichConfig,
    pair: &MatchedPair,
    inspect_link: Option<&str>,
    payload: Option<&Value>,
) -> ItemRecord {
    let asset = &pair.asset;
    let desc = pair.description;

    let image_large = desc.icon_url_large.as_ref().map(|icon| format!("{}{}", config.image_base_url, icon));
    let image_large_mirror = desc.icon_url_large.as_ref().map(|icon| format!("{}{}", config.image_mirror_url, icon));

    let name_tag = desc.fraud_warnings.as_deref()
        .and_then(|warnings| warnings.first())
        .and_then(|w| parse_name_tag(w));

    let iteminfo = payload.and_then(|p| match parse_iteminfo(p) {
        Ok(info) => Some(info),
        Err(e) => {
            warn!(asset_id = %asset.asset_id, error = %e, "Unreadable inspection payload, keeping base fields");
            None
        }
    });

    ItemRecord {
        asset_id: asset.asset_id.clone(),
        class_id: asset.class_id.clone(),
        instance_id: asset.instance_id.clone(),
        amount: asset.amount,
        slot: asset.slot,

        name: desc.market_hash_name.clone(),
        name_color: desc.name_color.clone(),
        item_type: desc.item_type.clone(),
        image: format!("{}{}", config.image_base_url, desc.icon_url),
        image_large,
        image_mirror: format!("{}{}", config.image_mirror_url, desc.icon_url),
        image_large_mirror,
        withdrawable_at: desc.market_tradable_restriction.clone(),
        marketable: desc.marketable,
        tradable: desc.tradable,
        commodity: desc.commodity,
        inspect_link: inspect_link.map(str::to_owned),
        name_tag,

        iteminfo,
    }
}
