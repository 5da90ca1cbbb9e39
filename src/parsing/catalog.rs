use ahash::{HashMap, HashMapExt};
use tracing::warn;

use crate::models::inventory::{Asset, Description, MatchedPair};

/// Binds every asset to its description by `(classid, instanceid)` and hands out
/// slots 1..=K in asset order as matches happen.
///
/// When several descriptions share a key the first one in description order wins.
/// Assets without a description are dropped and do not consume a slot.
pub fn join_catalog<'a>(assets: Vec<Asset>, descriptions: &'a [Description]) -> Vec<MatchedPair<'a>> {
    // classid key, instance ids kept in description order
    let mut desc_map: HashMap<&'a str, Vec<(&'a str, &'a Description)>> = HashMap::with_capacity(descriptions.len());

    for desc in descriptions {
        desc_map
            .entry(desc.class_id.as_str())
            .or_default()
            .push((desc.instance_id.as_str(), desc));
    }

    let mut pairs: Vec<MatchedPair<'a>> = Vec::with_capacity(assets.len());
    let mut slot: u32 = 0;

    for mut asset in assets {
        let description: Option<&'a Description> = desc_map
            .get(asset.class_id.as_str())
            .and_then(|candidates| candidates.iter().find(|(instance_id, _)| *instance_id == asset.instance_id))
            .map(|(_, desc)| *desc);

        let Some(description) = description else {
            warn!(
                asset_id = %asset.asset_id,
                class_id = %asset.class_id,
                instance_id = %asset.instance_id,
                "No description for asset, dropping it"
            );
            continue;
        };

        slot += 1;
        asset.slot = slot;
        pairs.push(MatchedPair { asset, description });
    }

    pairs
}
