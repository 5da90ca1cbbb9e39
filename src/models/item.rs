use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flattened, display ready inventory item.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ItemRecord {
    #[serde(rename = "assetid")]
    pub asset_id: String,
    #[serde(rename = "classid")]
    pub class_id: String,
    #[serde(rename = "instanceid")]
    pub instance_id: String,
    pub amount: u32,
    pub slot: u32,

    pub name: String,
    #[serde(rename = "nameColor")]
    pub name_color: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub image: String,
    #[serde(rename = "imageLarge")]
    pub image_large: Option<String>,
    #[serde(rename = "image_cf")]
    pub image_mirror: String,
    #[serde(rename = "imageLarge_cf")]
    pub image_large_mirror: Option<String>,
    #[serde(rename = "withdrawable_at")]
    pub withdrawable_at: Option<Value>,
    pub marketable: bool,
    pub tradable: bool,
    pub commodity: bool,
    #[serde(rename = "inspectLink")]
    pub inspect_link: Option<String>,
    #[serde(rename = "nameTag", skip_serializing_if = "Option::is_none")]
    pub name_tag: Option<String>,

    /// Only present when an inspection payload was correlated and readable.
    #[serde(flatten)]
    pub iteminfo: Option<ItemInfo>,
}

impl ItemRecord {
    pub fn has_iteminfo(&self) -> bool {
        self.iteminfo.is_some()
    }
}

/// Extended fields from the inspection service.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ItemInfo {
    pub condition: Option<String>,
    pub float: f64,
    pub paintseed: u32,
    pub paintindex: u32,
    pub stickers: Vec<Sticker>,
}

/// One applied sticker exactly as the inspection service sent it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Sticker(pub Map<String, Value>);

impl Sticker {
    pub fn slot(&self) -> Option<u64> {
        self.0.get("slot").and_then(Value::as_u64)
    }

    /// `stickerId`, also accepted as a numeric string.
    pub fn sticker_id(&self) -> Option<u64> {
        match self.0.get("stickerId").or_else(|| self.0.get("sticker_id"))? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse::<u64>().ok(),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn wear(&self) -> Option<f64> {
        self.0.get("wear").and_then(Value::as_f64)
    }
}
