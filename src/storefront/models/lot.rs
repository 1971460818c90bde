//! Lot model
//!
//! One auction item as delivered by the auction API. Lots are replaced
//! wholesale on every fetch and are read-only to the views that render them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Auction status of a lot; selects how `datetime` and `price` are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    /// Auction not open yet, `datetime` is the opening instant
    #[default]
    Wait,
    /// Bidding in progress, `datetime` is the closing instant
    Active,
    /// Auction ended, `price` is the sale price
    Closed,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: LotStatus,
    #[serde(default, deserialize_with = "deserialize_lenient_datetime")]
    pub datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub min_price: u64,
    /// Past bid amounts, oldest first. `None` when the payload carried no
    /// history at all, which is different from an empty history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<u64>>,
}

impl Lot {
    pub fn is_closed(&self) -> bool {
        self.status == LotStatus::Closed
    }

    /// Long description for the detail view, falling back to the short one
    pub fn long_description(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.about
        } else {
            &self.description
        }
    }
}

/// Parse a date the way the storefront accepts them: RFC 3339, a naive ISO
/// date-time or date (read as UTC), or epoch milliseconds. Anything else is
/// treated as "no date".
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::String(text)) => parse_datetime(&text),
        Some(serde_json::Value::Number(number)) => number
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lot_should_deserialize_api_payload() {
        let lot: Lot = serde_json::from_value(json!({
            "id": "54df7dcb-1213-4b3c-ab61-92ed5f845535",
            "title": "Бриллиант",
            "about": "Самый большой бриллиант",
            "description": "Первая строка\nВторая строка",
            "image": "/diamond.png",
            "status": "active",
            "datetime": "2026-10-20T12:00:00.000Z",
            "price": 5000,
            "minPrice": 4000,
            "history": [4000, 4500, 5000]
        }))
        .unwrap();

        assert_eq!(lot.status, LotStatus::Active);
        assert_eq!(lot.min_price, 4000);
        assert_eq!(lot.history, Some(vec![4000, 4500, 5000]));
        assert_eq!(
            lot.datetime,
            Some(Utc.with_ymd_and_hms(2026, 10, 20, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn missing_history_should_differ_from_empty_history() {
        let without: Lot = serde_json::from_value(json!({"id": "a", "status": "wait"})).unwrap();
        let empty: Lot =
            serde_json::from_value(json!({"id": "b", "status": "active", "history": []})).unwrap();

        assert_eq!(without.history, None);
        assert_eq!(empty.history, Some(vec![]));
    }

    #[test]
    fn invalid_or_null_dates_should_become_none() {
        for raw in [json!(null), json!(""), json!("   "), json!("not a date"), json!(true)] {
            let lot: Lot =
                serde_json::from_value(json!({"id": "x", "status": "closed", "datetime": raw}))
                    .unwrap();
            assert_eq!(lot.datetime, None);
        }
    }

    #[test]
    fn parse_datetime_should_accept_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 15, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-03-15T14:30:00"), Some(expected));
        assert_eq!(parse_datetime("2026-03-15 14:30:00"), Some(expected));
        assert_eq!(parse_datetime("2026-03-15T14:30"), Some(expected));
        assert_eq!(
            parse_datetime("2026-03-15"),
            Some(Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn long_description_should_fall_back_to_about() {
        let lot = Lot {
            about: "short".to_string(),
            ..Lot::default()
        };
        assert_eq!(lot.long_description(), "short");
    }
}
