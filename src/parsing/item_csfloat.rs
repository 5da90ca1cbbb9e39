use serde_json::{from_value, Value};

use crate::{
    error::PayloadError,
    models::item::{ItemInfo, Sticker},
};

/// Reads the `iteminfo` object of an inspection response.
pub fn parse_iteminfo(response: &Value) -> Result<ItemInfo, PayloadError> {
    let data = response.get("iteminfo")
        .filter(|v| v.is_object())
        .ok_or(PayloadError::MissingItemInfo)?;

    let condition = data.get("wear_name")
        .and_then(|w| w.as_str())
        .map(str::to_owned);

    let float = data.get("floatvalue")
        .and_then(|f| f.as_f64())
        .ok_or(PayloadError::MissingField("floatvalue"))?;

    let paintseed = data.get("paintseed")
        .and_then(|p| p.as_f64())
        .map(|p| p as u32)
        .ok_or(PayloadError::MissingField("paintseed"))?;

    let paintindex = data.get("paintindex")
        .and_then(|p| p.as_f64())
        .map(|p| p as u32)
        .ok_or(PayloadError::MissingField("paintindex"))?;

    let stickers: Vec<Sticker> = match data.get("stickers") {
        None | Some(Value::Null) => Vec::new(),
        Some(stickers) => from_value(stickers.clone()).map_err(|e| PayloadError::Stickers(e.to_string()))?,
    };

    Ok(ItemInfo { condition, float, paintseed, paintindex, stickers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_full_iteminfo() {
        let response = json!({ "iteminfo": {
            "wear_name": "Field-Tested",
            "floatvalue": 0.2512,
            "paintseed": 661,
            "paintindex": 44,
            "stickers": [{ "slot": 0, "stickerId": 5029, "name": "Titan (Holo) | Katowice 2014", "wear": 0.1 }]
        }});

        let info = parse_iteminfo(&response).unwrap();
        assert_eq!(info.condition.as_deref(), Some("Field-Tested"));
        assert_eq!((info.paintseed, info.paintindex), (661, 44));
        assert_eq!(info.stickers[0].sticker_id(), Some(5029));
        assert_eq!(info.stickers[0].slot(), Some(0));
        assert_eq!(info.stickers[0].name(), Some("Titan (Holo) | Katowice 2014"));
    }

    #[test]
    fn stickers_pass_through_untouched() {
        let sticker = json!({
            "slot": 2, "stickerId": "5029", "codename": "kat2014_titan_holo", "material": "emskatowice2014/titan_holo",
            "name": "Titan (Holo) | Katowice 2014", "scale": 1.0, "rotation": 15.5, "offset_x": 0.12
        });
        let response = json!({ "iteminfo": { "floatvalue": 0.2, "paintseed": 1, "paintindex": 2, "stickers": [sticker.clone()] } });

        let info = parse_iteminfo(&response).unwrap();
        assert_eq!(info.stickers[0].sticker_id(), Some(5029));
        assert_eq!(serde_json::to_value(&info.stickers).unwrap(), json!([sticker]));
    }

    #[test]
    fn vanilla_items_have_no_wear_or_stickers() {
        let response = json!({ "iteminfo": { "floatvalue": 0.0, "paintseed": 0, "paintindex": 0 } });
        let info = parse_iteminfo(&response).unwrap();
        assert_eq!(info.condition, None);
        assert!(info.stickers.is_empty());
    }

    #[test]
    fn malformed_payloads_are_reported() {
        assert_eq!(parse_iteminfo(&json!({ "error": "bad link" })), Err(PayloadError::MissingItemInfo));
        assert_eq!(parse_iteminfo(&json!({ "iteminfo": "nope" })), Err(PayloadError::MissingItemInfo));
        assert_eq!(
            parse_iteminfo(&json!({ "iteminfo": { "paintseed": 1, "paintindex": 2 } })),
            Err(PayloadError::MissingField("floatvalue"))
        );
        assert!(matches!(
            parse_iteminfo(&json!({ "iteminfo": { "floatvalue": 0.1, "paintseed": 1, "paintindex": 2, "stickers": "x" } })),
            Err(PayloadError::Stickers(_))
        ));
    }
}
