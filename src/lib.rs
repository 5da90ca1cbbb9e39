pub mod browser;
pub mod enrich;
pub mod error;
pub mod models;
pub mod parsing;

pub use browser::{net::{Fetch, HttpFetcher}, steamcommunity::SteamInventory};
pub use enrich::Enricher;
pub use error::{InventoryError, NetError, PayloadError};
pub use models::{config::EnrichConfig, item::{ItemInfo, ItemRecord, Sticker}};
