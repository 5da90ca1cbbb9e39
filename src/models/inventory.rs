use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsing::lenient;

/// The `assets` + `descriptions` halves of a Steam inventory response.
#[derive(Debug, Default)]
pub struct InventoryPayload {
    pub assets: Vec<Asset>,
    pub descriptions: Vec<Description>,
    pub total_inventory_count: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Asset {
    #[serde(rename = "assetid")]
    pub asset_id: String,
    #[serde(rename = "classid")]
    pub class_id: String,
    #[serde(rename = "instanceid")]
    pub instance_id: String,
    #[serde(default = "lenient::one", deserialize_with = "lenient::u32_from_any")]
    pub amount: u32,
    /// 1-based position among matched assets, 0 until the joiner assigns it.
    #[serde(skip)]
    pub slot: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Description {
    #[serde(rename = "classid")]
    pub class_id: String,
    #[serde(rename = "instanceid")]
    pub instance_id: String,
    #[serde(default)]
    pub market_hash_name: String,
    #[serde(default)]
    pub name_color: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub icon_url_large: Option<String>,
    #[serde(default)]
    pub market_tradable_restriction: Option<Value>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub marketable: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub tradable: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub commodity: bool,
    #[serde(rename = "fraudwarnings", default)]
    pub fraud_warnings: Option<Vec<String>>,
    #[serde(default)]
    pub actions: Option<Vec<Action>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Action {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub name: String,
}

/// An asset bound to the description sharing its `(classid, instanceid)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair<'a> {
    pub asset: Asset,
    pub description: &'a Description,
}

/// `url` must never be requested when `inspectable` is false.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InspectLink {
    pub url: String,
    pub inspectable: bool,
}

impl InspectLink {
    pub fn not_inspectable() -> Self {
        InspectLink { url: String::new(), inspectable: false }
    }
}

/// Outcome of one inspection request, keyed by the inspect link that was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionResult {
    pub request_url: String,
    pub success: bool,
    pub payload: Option<Value>,
}

impl InspectionResult {
    pub fn success(request_url: String, payload: Value) -> Self {
        InspectionResult { request_url, success: true, payload: Some(payload) }
    }

    pub fn failure(request_url: String) -> Self {
        InspectionResult { request_url, success: false, payload: None }
    }
}
