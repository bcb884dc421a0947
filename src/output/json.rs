//! JSON output of result items.

use super::items::ResultItem;
use std::error::Error;

/// Serialize items as a pretty-printed JSON array.
pub fn to_json(items: &[ResultItem]) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(items)
        .map_err(|e| format!("Error serializing result items: {e}"))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_shape() {
        let items = vec![ResultItem::advisory("clamped".to_string())];
        let json = to_json(&items).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "advisory");
        assert_eq!(value[0]["text"], "clamped");
        assert!(value[0]["facts"].as_array().unwrap().is_empty());
    }
}
