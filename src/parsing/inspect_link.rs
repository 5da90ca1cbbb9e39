use crate::models::{
    inventory::{InspectLink, MatchedPair},
    web::{INSPECT_ASSET_PLACEHOLDER, INSPECT_OWNER_PLACEHOLDER},
};

/// Fills the description's inspect action template for this asset.
///
/// Not inspectable when the description has no action carrying `%assetid%`, or when
/// the template wants `%owner_steamid%` and no owner is known.
pub fn build_inspect_link(pair: &MatchedPair, owner_steamid: Option<u64>) -> InspectLink {
    let template: Option<&str> = pair.description.actions
        .as_deref()
        .and_then(|actions| actions.iter().find(|a| a.link.contains(INSPECT_ASSET_PLACEHOLDER)))
        .map(|a| a.link.as_str());

    let Some(template) = template else { return InspectLink::not_inspectable() };
    if pair.asset.asset_id.is_empty() { return InspectLink::not_inspectable() }

    let mut url = template.replace(INSPECT_ASSET_PLACEHOLDER, &pair.asset.asset_id);

    if url.contains(INSPECT_OWNER_PLACEHOLDER) {
        match owner_steamid {
            Some(owner) => url = url.replace(INSPECT_OWNER_PLACEHOLDER, &owner.to_string()),
            None => return InspectLink::not_inspectable(),
        }
    }

    InspectLink { url, inspectable: true }
}
