// Copyright (C) 2025 The Ballot CLI Contributors.
//
// rpc_client.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{RpcRequest, RpcResponse, RpcTransactionReceipt};
use crate::rpc_exception::RpcException;
use ethers_core::types::{Address, Bytes, H256, U256, U64};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};
use url::Url;

const LATEST_BLOCK: &str = "latest";
const PENDING_BLOCK: &str = "pending";

/// The RPC client used for every query and submission.
///
/// Read-only callers and the transaction manager share one instance behind
/// an `Arc`, so both halves of the client pair target the same endpoint.
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new RPC client for `endpoint`
    pub fn new(endpoint: &str) -> Result<Self, RpcException> {
        let url = Url::parse(endpoint)
            .map_err(|err| RpcException::internal(format!("invalid endpoint URL: {err}")))?;
        let http_client = Client::builder()
            .build()
            .map_err(|err| RpcException::internal(format!("failed to build HTTP client: {err}")))?;
        Ok(Self::with_client(http_client, url))
    }

    /// Creates a new RPC client with an existing HTTP client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
            next_id: AtomicU64::new(1),
        }
    }

    /// Endpoint with the path stripped, safe to log without leaking the API key.
    pub fn endpoint_origin(&self) -> String {
        self.base_address.origin().ascii_serialization()
    }

    fn as_rpc_request(&self, method: &str, params: Vec<Value>) -> RpcRequest {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        RpcRequest::new(id, method, params)
    }

    fn as_rpc_response(content: &str, throw_on_error: bool) -> Result<RpcResponse, RpcException> {
        let mut response: RpcResponse = serde_json::from_str(content)
            .map_err(|err| RpcException::parse(format!("Invalid response: {err}")))?;
        response.raw_response = Some(content.to_string());

        if let Some(ref error) = response.error {
            if throw_on_error {
                return Err(RpcException::new(error.code, error.message.clone()));
            }
        }

        Ok(response)
    }

    /// Sends an RPC request
    pub async fn send_async(
        &self,
        request: RpcRequest,
        throw_on_error: bool,
    ) -> Result<RpcResponse, RpcException> {
        trace!(target: "ballot::rpc", method = %request.method, id = request.id, "sending request");

        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(&request)
            .send()
            .await
            .map_err(|err| RpcException::internal(format!("HTTP error: {}", err.without_url())))?;

        let status = response.status();
        let content = response
            .text()
            .await
            .map_err(|err| RpcException::internal(format!("Failed to read response: {err}")))?;

        if !status.is_success() && content.trim().is_empty() {
            return Err(RpcException::internal(format!("HTTP status {status}")));
        }

        Self::as_rpc_response(&content, throw_on_error)
    }

    /// Sends an RPC request and returns its `result`
    pub async fn rpc_send_async(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, RpcException> {
        let request = self.as_rpc_request(method, params);
        let response = self.send_async(request, true).await?;
        Ok(response.result)
    }

    async fn rpc_send_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RpcException> {
        let result = self.rpc_send_async(method, params).await?;
        if result.is_null() {
            return Err(RpcException::internal(format!("{method}: no result returned")));
        }
        decode(result, method)
    }

    /// Returns the chain id the endpoint serves
    pub async fn chain_id(&self) -> Result<u64, RpcException> {
        let id: U64 = self.rpc_send_typed("eth_chainId", vec![]).await?;
        Ok(id.as_u64())
    }

    /// Returns the number of the most recent block
    pub async fn block_number(&self) -> Result<u64, RpcException> {
        let number: U64 = self.rpc_send_typed("eth_blockNumber", vec![]).await?;
        Ok(number.as_u64())
    }

    /// Returns the balance of `address` in wei
    pub async fn get_balance(&self, address: Address) -> Result<U256, RpcException> {
        self.rpc_send_typed("eth_getBalance", vec![json!(address), json!(LATEST_BLOCK)])
            .await
    }

    /// Returns the next nonce for `address`, counting pending transactions
    pub async fn get_transaction_count(&self, address: Address) -> Result<U256, RpcException> {
        self.rpc_send_typed(
            "eth_getTransactionCount",
            vec![json!(address), json!(PENDING_BLOCK)],
        )
        .await
    }

    pub async fn gas_price(&self) -> Result<U256, RpcException> {
        self.rpc_send_typed("eth_gasPrice", vec![]).await
    }

    /// Estimates gas for a call; reverting calls surface here as node errors.
    pub async fn estimate_gas(
        &self,
        from: Address,
        to: Option<Address>,
        data: &Bytes,
    ) -> Result<U256, RpcException> {
        let mut call = json!({ "from": from, "data": data });
        if let Some(to) = to {
            call["to"] = json!(to);
        }
        self.rpc_send_typed("eth_estimateGas", vec![call]).await
    }

    /// Executes a read-only call against the latest block
    pub async fn call(&self, to: Address, data: &Bytes) -> Result<Bytes, RpcException> {
        let call = json!({ "to": to, "data": data });
        self.rpc_send_typed("eth_call", vec![call, json!(LATEST_BLOCK)])
            .await
    }

    /// Broadcasts a signed transaction and returns its hash
    pub async fn send_raw_transaction(&self, raw: &Bytes) -> Result<H256, RpcException> {
        let hash: H256 = self
            .rpc_send_typed("eth_sendRawTransaction", vec![json!(raw)])
            .await?;
        debug!(target: "ballot::rpc", hash = ?hash, "transaction accepted by node");
        Ok(hash)
    }

    /// Returns the receipt, or `None` while the transaction is not mined
    pub async fn get_transaction_receipt(
        &self,
        hash: H256,
    ) -> Result<Option<RpcTransactionReceipt>, RpcException> {
        let result = self
            .rpc_send_async("eth_getTransactionReceipt", vec![json!(hash)])
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        decode(result, "eth_getTransactionReceipt").map(Some)
    }
}

fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, RpcException> {
    serde_json::from_value(value)
        .map_err(|err| RpcException::parse(format!("{context}: unexpected result: {err}")))
}
