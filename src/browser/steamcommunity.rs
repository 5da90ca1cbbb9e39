use bytes::Bytes;
use tracing::debug;

use crate::{
    browser::net::Fetch,
    error::InventoryError,
    models::web::STEAM_INVENTORY_URL,
};

pub const CS2_APPID: u32 = 730;
pub const CS2_CONTEXTID: u32 = 2;

pub struct SteamInventory;

impl SteamInventory {
    pub fn url(steamid: u64, appid: u32, contextid: u32) -> String {
        format!("{}/{}/{}/{}", STEAM_INVENTORY_URL, steamid, appid, contextid)
    }

    /// Raw inventory response, ready for `Enricher::enrich`.
    pub async fn fetch(fetch: &dyn Fetch, steamid: u64, appid: u32, contextid: u32) -> Result<Bytes, InventoryError> {
        let url = Self::url(steamid, appid, contextid);
        debug!(%url, "Fetching steam inventory");

        let raw = fetch.get_bytes(&url, &[("l", "english"), ("count", "2000")]).await?;
        Ok(raw)
    }
}
