//! Indexer REST client: holder and transfer history for one token.
//!
//! Both endpoints are keyed by token address and chain, authenticated
//! with an API key, and served in descending order. The rows are kept
//! exactly as ordered; malformed rows are dropped during parsing.

use gloo_net::http::Request;

use shared::dto::indexer::{parse_owners, parse_transfers, OwnerRecord, TransferRecord};

use super::error::ServiceError;
use crate::utils::constants::{INDEXER_API_BASE, INDEXER_API_KEY, INDEXER_CHAIN};

async fn fetch_rows(endpoint: &str, token: &str) -> Result<String, ServiceError> {
    let url = format!(
        "{INDEXER_API_BASE}/erc20/{token}/{endpoint}?chain={INDEXER_CHAIN}&order=DESC"
    );

    let response = Request::get(&url)
        .header("accept", "application/json")
        .header("X-API-Key", INDEXER_API_KEY)
        .send()
        .await?;

    if !response.ok() {
        return Err(ServiceError::Indexer(format!(
            "{endpoint} request returned HTTP {}",
            response.status()
        )));
    }
    Ok(response.text().await?)
}

/// Holder list for a token, in the order the indexer ranks them.
pub async fn fetch_owners(token: &str) -> Result<Vec<OwnerRecord>, ServiceError> {
    let body = fetch_rows("owners", token).await?;
    parse_owners(&body).map_err(|e| ServiceError::Indexer(e.to_string()))
}

/// Transfer history for a token, newest first.
pub async fn fetch_transfers(token: &str) -> Result<Vec<TransferRecord>, ServiceError> {
    let body = fetch_rows("transfers", token).await?;
    parse_transfers(&body).map_err(|e| ServiceError::Indexer(e.to_string()))
}
