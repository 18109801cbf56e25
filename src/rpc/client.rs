//! Solana JSON-RPC client
//!
//! A thin reqwest wrapper: every call goes through [`RpcClient::execute_raw`],
//! and the `parse_*` functions turn the `result` value into typed data so they
//! can be tested without a node.

use super::types::{ParsedTransaction, RpcError, RpcResult, SignatureInfo};
use crate::logger::{self, LogTag};
use crate::utils::lamports_to_sol;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const COMMITMENT: &str = "confirmed";

pub struct RpcClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            url: url.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Send one JSON-RPC request and return its `result` value
    pub async fn execute_raw(&self, method: &str, params: Value) -> RpcResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let start = Instant::now();
        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            logger::warning(
                LogTag::Rpc,
                &format!("{} failed with HTTP {}", method, status.as_u16()),
            );
            return Err(RpcError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Value = response.json().await?;

        logger::debug(
            LogTag::Rpc,
            &format!("{} (id={}) answered in {}ms", method, id, start.elapsed().as_millis()),
        );

        extract_result(envelope)
    }

    pub async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>> {
        let params = json!([address, { "limit": limit, "commitment": COMMITMENT }]);
        let result = self.execute_raw("getSignaturesForAddress", params).await?;
        parse_signature_list(result)
    }

    pub async fn get_transaction(&self, signature: &str) -> RpcResult<Option<ParsedTransaction>> {
        let params = json!([
            signature,
            {
                "encoding": "jsonParsed",
                "commitment": COMMITMENT,
                "maxSupportedTransactionVersion": 0
            }
        ]);
        let result = self.execute_raw("getTransaction", params).await?;
        parse_transaction(result)
    }

    /// Native balance in SOL
    pub async fn get_sol_balance(&self, address: &str) -> RpcResult<f64> {
        let params = json!([address, { "commitment": COMMITMENT }]);
        let result = self.execute_raw("getBalance", params).await?;
        parse_balance(&result)
    }

    /// UI amount held in the owner's first token account for `mint`, 0 if none
    pub async fn get_token_balance(&self, owner: &str, mint: &str) -> RpcResult<f64> {
        let params = json!([
            owner,
            { "mint": mint },
            { "encoding": "jsonParsed", "commitment": COMMITMENT }
        ]);
        let result = self.execute_raw("getTokenAccountsByOwner", params).await?;
        parse_token_accounts_ui_amount(&result)
    }
}

/// Pull `result` out of a JSON-RPC response envelope
pub fn extract_result(mut envelope: Value) -> RpcResult<Value> {
    if let Some(error) = envelope.get("error").filter(|e| !e.is_null()) {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(RpcError::Rpc { code, message });
    }

    match envelope.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(RpcError::InvalidResponse(
            "response has neither result nor error".to_string(),
        )),
    }
}

pub fn parse_signature_list(result: Value) -> RpcResult<Vec<SignatureInfo>> {
    if !result.is_array() {
        return Err(RpcError::InvalidResponse("expected array of signatures".to_string()));
    }
    serde_json::from_value(result).map_err(|e| RpcError::InvalidResponse(e.to_string()))
}

/// `null` means the node does not know the transaction
pub fn parse_transaction(result: Value) -> RpcResult<Option<ParsedTransaction>> {
    if result.is_null() {
        return Ok(None);
    }
    serde_json::from_value(result)
        .map(Some)
        .map_err(|e| RpcError::InvalidResponse(format!("Failed to parse transaction: {}", e)))
}

pub fn parse_balance(result: &Value) -> RpcResult<f64> {
    result
        .get("value")
        .and_then(Value::as_u64)
        .map(lamports_to_sol)
        .ok_or_else(|| RpcError::InvalidResponse("Invalid balance response".to_string()))
}

pub fn parse_token_accounts_ui_amount(result: &Value) -> RpcResult<f64> {
    let accounts = result
        .get("value")
        .and_then(Value::as_array)
        .ok_or_else(|| RpcError::InvalidResponse("Invalid token accounts response".to_string()))?;

    let ui_amount = accounts
        .first()
        .and_then(|account| account.pointer("/account/data/parsed/info/tokenAmount/uiAmount"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    Ok(ui_amount)
}
