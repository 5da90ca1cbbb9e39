//! Steam is loose with scalar types: ids and amounts come as strings, flags as `0`/`1`.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

pub fn one() -> u32 {
    1
}

pub fn u32_from_any<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| de::Error::custom(format!("{} is not a valid amount", n))),
        Value::String(s) => s.trim().parse::<u32>().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected a number or string, got {}", other))),
    }
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
        _ => false,
    };
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::u32_from_any")]
        amount: u32,
        #[serde(default, deserialize_with = "super::flag")]
        tradable: bool,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let a: Probe = serde_json::from_str(r#"{"amount": "3", "tradable": 1}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"amount": 3, "tradable": "0"}"#).unwrap();
        assert_eq!((a.amount, a.tradable), (3, true));
        assert_eq!((b.amount, b.tradable), (3, false));
    }

    #[test]
    fn missing_flag_is_false() {
        let p: Probe = serde_json::from_str(r#"{"amount": "1"}"#).unwrap();
        assert!(!p.tradable);
    }

    #[test]
    fn rejects_garbage_amount() {
        assert!(serde_json::from_str::<Probe>(r#"{"amount": "lots"}"#).is_err());
    }
}
