use bytes::Bytes;
use tracing::debug;

use crate::{browser::net::Fetch, error::NetResult, models::web::STEAM_MARKET_SEARCH_URL};

pub const DEFAULT_SEARCH_COUNT: u32 = 100;

/// Community market search, `norender=1` so Steam answers with JSON instead of HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchItems {
    appid: u32,
    start: u32,
    count: u32,
    query: String,
}

impl SearchItems {
    pub fn new(appid: u32) -> Self {
        SearchItems { appid, start: 0, count: DEFAULT_SEARCH_COUNT, query: String::new() }
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    // Spaces go out as %20, not '+'
    pub fn url(&self) -> String {
        format!(
            "{}?appid={}&start={}&count={}&query={}&norender=1",
            STEAM_MARKET_SEARCH_URL,
            self.appid,
            self.start,
            self.count,
            urlencoding::encode(&self.query)
        )
    }

    /// Raw search response body.
    pub async fn fetch(&self, fetch: &dyn Fetch) -> NetResult<Bytes> {
        let url = self.url();
        debug!(%url, "Searching steam market");

        fetch.get_bytes(&url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_steam_paging() {
        assert_eq!(
            SearchItems::new(730).url(),
            "https://steamcommunity.com/market/search/render?appid=730&start=0&count=100&query=&norender=1"
        );
    }

    #[test]
    fn query_is_percent_encoded() {
        let url = SearchItems::new(730).start(200).count(50).query("AK-47 | Redline (FT)").url();
        assert_eq!(
            url,
            "https://steamcommunity.com/market/search/render?appid=730&start=200&count=50&query=AK-47%20%7C%20Redline%20%28FT%29&norender=1"
        );
    }
}
