#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use bytes::Bytes;
use cs2inventory::{error::NetResult, Fetch, NetError};
use serde_json::{json, Value};

pub const OWNER: u64 = 76561198389123475;
pub const TEMPLATE: &str = "steam://rungame/730/76561202255233023/+csgo_econ_action_preview%20S%owner_steamid%A%assetid%D9279926981479153949";

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Raw(&'static str),
}

pub fn iteminfo(float: f64) -> Reply {
    Reply::Json(json!({ "iteminfo": {
        "wear_name": "Field-Tested",
        "floatvalue": float,
        "paintseed": 661,
        "paintindex": 44,
        "stickers": [{ "slot": 0, "stickerId": 5029, "name": "Titan (Holo) | Katowice 2014" }]
    }}))
}

/// In-memory inspection service keyed by the `url` query parameter.
pub struct ScriptedFetch {
    replies: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    fail_first: Mutex<HashMap<String, usize>>,
    fallback: Reply,
    default_delay: Duration,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<String>>,
}

impl ScriptedFetch {
    pub fn new() -> Self {
        ScriptedFetch {
            replies: HashMap::new(),
            delays: HashMap::new(),
            fail_first: Mutex::new(HashMap::new()),
            fallback: iteminfo(0.25),
            default_delay: Duration::from_millis(1),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, link: &str, reply: Reply) -> Self {
        self.replies.insert(link.to_string(), reply);
        self
    }

    pub fn delay(mut self, link: &str, delay: Duration) -> Self {
        self.delays.insert(link.to_string(), delay);
        self
    }

    pub fn default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    /// First `times` requests for `link` answer 503.
    pub fn fail_first(self, link: &str, times: usize) -> Self {
        self.fail_first.lock().unwrap().insert(link.to_string(), times);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for ScriptedFetch {
    async fn get_bytes(&self, url: &str, query: &[(&str, &str)]) -> NetResult<Bytes> {
        let link = query.iter()
            .find(|(k, _)| *k == "url")
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| url.to_string());

        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(link.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.get(&link).copied().unwrap_or(self.default_delay);
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        {
            let mut fail_first = self.fail_first.lock().unwrap();
            if let Some(left) = fail_first.get_mut(&link) && *left > 0 {
                *left -= 1;
                return Err(NetError::http_status(503, url.to_string()));
            }
        }

        match self.replies.get(&link).unwrap_or(&self.fallback) {
            Reply::Json(value) => Ok(Bytes::from(serde_json::to_vec(value).unwrap())),
            Reply::Raw(text) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            Reply::Status(status) => Err(NetError::http_status(*status, url.to_string())),
        }
    }
}

/// One inventory entry for `inventory()`.
pub struct Item {
    pub asset_id: String,
    pub class_id: String,
    pub inspectable: bool,
}

pub fn item(asset_id: &str, class_id: &str, inspectable: bool) -> Item {
    Item { asset_id: asset_id.to_string(), class_id: class_id.to_string(), inspectable }
}

/// Steam shaped inventory response, one description per distinct class id.
pub fn inventory(items: &[Item]) -> Vec<u8> {
    let assets: Vec<Value> = items.iter()
        .map(|i| json!({ "appid": 730, "contextid": "2", "assetid": i.asset_id, "classid": i.class_id, "instanceid": "0", "amount": "1" }))
        .collect();

    let mut descriptions: Vec<Value> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for i in items {
        if seen.contains(&i.class_id.as_str()) { continue }
        seen.push(&i.class_id);

        let mut desc = json!({
            "classid": i.class_id,
            "instanceid": "0",
            "market_hash_name": format!("Item {}", i.class_id),
            "name_color": "D2D2D2",
            "type": "Rifle",
            "icon_url": format!("icon-{}", i.class_id),
            "marketable": 1,
            "tradable": 1,
            "commodity": 0,
            "market_tradable_restriction": 7
        });
        if i.inspectable {
            desc["actions"] = json!([{ "link": TEMPLATE, "name": "Inspect in Game..." }]);
        }
        descriptions.push(desc);
    }

    serde_json::to_vec(&json!({ "assets": assets, "descriptions": descriptions, "total_inventory_count": items.len() })).unwrap()
}

pub fn link_for(asset_id: &str) -> String {
    TEMPLATE
        .replace("%owner_steamid%", &OWNER.to_string())
        .replace("%assetid%", asset_id)
}
