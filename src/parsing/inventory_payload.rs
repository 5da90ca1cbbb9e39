use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{from_value, Value};
use tracing::warn;

use crate::{
    error::InventoryError,
    models::inventory::{Asset, Description, InventoryPayload},
};

#[derive(Deserialize)]
struct RawInventory {
    #[serde(default)]
    assets: Vec<Value>,
    #[serde(default)]
    descriptions: Vec<Value>,
    #[serde(default)]
    total_inventory_count: Option<Value>,
}

/// Decodes a raw Steam inventory response. Anything that is not a usable
/// inventory object fails the whole call, there is no partial catalog.
///
/// Single assets or descriptions with a broken shape are dropped with a warning.
pub fn parse_inventory(raw: &[u8]) -> Result<InventoryPayload, InventoryError> {
    let value: Value = serde_json::from_slice(raw)?;

    if value.is_null() {
        return Err(InventoryError::EmptyPayload);
    }

    let Some(object) = value.as_object() else {
        return Err(InventoryError::NotAnObject);
    };

    if let Some(marker) = object.get("error") {
        let message = match marker {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(InventoryError::ErrorMarker(message));
    }

    let raw = from_value::<RawInventory>(value)?;

    Ok(InventoryPayload {
        assets: decode_entries::<Asset>(raw.assets, "asset"),
        descriptions: decode_entries::<Description>(raw.descriptions, "description"),
        total_inventory_count: raw.total_inventory_count
            .as_ref()
            .and_then(|c| c.as_u64())
            .and_then(|c| u32::try_from(c).ok()),
    })
}

fn decode_entries<T: DeserializeOwned>(entries: Vec<Value>, kind: &'static str) -> Vec<T> {
    entries.into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match from_value::<T>(entry) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(kind, index, error = %e, "Dropping unreadable inventory entry");
                None
            }
        })
        .collect()
}
