//! Records returned by the blockchain indexer's REST API.
//!
//! The indexer serves both endpoints in descending server order; rows are
//! kept in the order received. Parsing is lenient per row: a malformed row
//! is dropped from the list instead of failing the whole fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use alloy_primitives::U256;

use crate::utils::format_eth;

/// One holder row from the owners endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnerRecord {
    pub owner_address: String,
    /// The indexer emits this as either a JSON number or a numeric string.
    #[serde(deserialize_with = "lenient_f64")]
    pub percentage_relative_to_total_supply: f64,
}

/// One transfer row from the transfers endpoint. `value` is a decimal wei
/// string as served.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from_address: String,
    pub to_address: String,
    pub value: String,
    pub transaction_hash: String,
    #[serde(default)]
    pub block_timestamp: Option<DateTime<Utc>>,
}

impl TransferRecord {
    /// Transfer value converted to a decimal ETH string for the table.
    /// Unparseable values render as zero rather than breaking the row.
    pub fn value_eth(&self) -> String {
        self.value
            .parse::<U256>()
            .map(format_eth)
            .unwrap_or_else(|_| "0.0".to_string())
    }
}

#[derive(Deserialize)]
struct RowsEnvelope {
    #[serde(default)]
    result: Vec<Value>,
}

/// Parse the owners response body. Rows that fail to decode are dropped.
pub fn parse_owners(body: &str) -> Result<Vec<OwnerRecord>, serde_json::Error> {
    let envelope: RowsEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .result
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect())
}

/// Parse the transfers response body. Rows that fail to decode are dropped.
pub fn parse_transfers(body: &str) -> Result<Vec<TransferRecord>, serde_json::Error> {
    let envelope: RowsEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .result
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrText {
        Num(f64),
        Text(String),
    }

    match NumOrText::deserialize(deserializer)? {
        NumOrText::Num(n) => Ok(n),
        NumOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom("not a numeric string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owners_accept_number_and_string_percentages() {
        let body = r#"{
            "result": [
                {"owner_address": "0xaaa", "percentage_relative_to_total_supply": 62.5},
                {"owner_address": "0xbbb", "percentage_relative_to_total_supply": "37.5"}
            ]
        }"#;
        let owners = parse_owners(body).unwrap();
        assert_eq!(owners.len(), 2);
        assert_eq!(owners[0].percentage_relative_to_total_supply, 62.5);
        assert_eq!(owners[1].percentage_relative_to_total_supply, 37.5);
        // Server order is preserved, never re-sorted.
        assert_eq!(owners[0].owner_address, "0xaaa");
    }

    #[test]
    fn malformed_owner_rows_are_dropped_not_fatal() {
        let body = r#"{
            "result": [
                {"owner_address": "0xaaa", "percentage_relative_to_total_supply": 90.0},
                {"percentage_relative_to_total_supply": 5.0},
                {"owner_address": "0xccc", "percentage_relative_to_total_supply": "not a number"},
                {"owner_address": "0xddd", "percentage_relative_to_total_supply": 5.0}
            ]
        }"#;
        let owners = parse_owners(body).unwrap();
        assert_eq!(owners.len(), 2);
        assert_eq!(owners[0].owner_address, "0xaaa");
        assert_eq!(owners[1].owner_address, "0xddd");
    }

    #[test]
    fn missing_result_array_parses_as_empty() {
        assert!(parse_owners("{}").unwrap().is_empty());
        assert!(parse_transfers(r#"{"page": 0}"#).unwrap().is_empty());
    }

    #[test]
    fn invalid_body_is_an_error_for_the_call_site() {
        assert!(parse_owners("<html>rate limited</html>").is_err());
    }

    #[test]
    fn transfer_value_converts_to_eth_for_display() {
        let body = r#"{
            "result": [
                {
                    "from_address": "0xaaa",
                    "to_address": "0xbbb",
                    "value": "1500000000000000000",
                    "transaction_hash": "0xdeadbeef",
                    "block_timestamp": "2025-11-03T10:07:54.000Z"
                },
                {
                    "from_address": "0xccc",
                    "to_address": "0xddd",
                    "value": "garbage",
                    "transaction_hash": "0xfeed"
                }
            ]
        }"#;
        let transfers = parse_transfers(body).unwrap();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].value_eth(), "1.5");
        assert!(transfers[0].block_timestamp.is_some());
        // A bad value string degrades the cell, not the row.
        assert_eq!(transfers[1].value_eth(), "0.0");
        assert!(transfers[1].block_timestamp.is_none());
    }
}
