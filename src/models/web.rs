use std::sync::LazyLock;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

pub const STEAM_INVENTORY_URL: &str = "https://steamcommunity.com/inventory";
pub const STEAM_MARKET_SEARCH_URL: &str = "https://steamcommunity.com/market/search/render";
pub const CSFLOAT_API_URL: &str = "https://api.csfloat.com/";

pub const STEAM_IMAGE_URL: &str = "https://steamcommunity-a.akamaihd.net/economy/image/";
pub const CLOUDFLARE_IMAGE_URL: &str = "https://community.cloudflare.steamstatic.com/economy/image/";

pub const INSPECT_OWNER_PLACEHOLDER: &str = "%owner_steamid%";
pub const INSPECT_ASSET_PLACEHOLDER: &str = "%assetid%";

pub static HEADERS_DEFAULT: LazyLock<HeaderMap> = LazyLock::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:137.0) Gecko/20100101 Firefox/137.0"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB,en;q=0.5"));
    headers
});
