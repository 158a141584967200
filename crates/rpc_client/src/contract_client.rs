// Copyright (C) 2025 The Ballot CLI Contributors.
//
// contract_client.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::contract_error::ContractError;
use crate::RpcClient;
use ethers_core::abi::{Abi, Token};
use ethers_core::types::{Address, Bytes, U256};
use std::sync::Arc;
use tracing::debug;

/// Read-only contract operations through the RPC API
pub struct ContractClient {
    rpc_client: Arc<RpcClient>,
}

impl ContractClient {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    pub fn rpc_client(&self) -> &Arc<RpcClient> {
        &self.rpc_client
    }

    /// Native currency balance of `address`, in wei
    pub async fn native_balance(&self, address: Address) -> Result<U256, ContractError> {
        Ok(self.rpc_client.get_balance(address).await?)
    }

    /// Calls a view function and decodes its return values
    pub async fn test_invoke(
        &self,
        contract: Address,
        abi: &Abi,
        operation: &str,
        args: &[Token],
    ) -> Result<Vec<Token>, ContractError> {
        let function = abi.function(operation).map_err(ContractError::abi)?;
        let data = function.encode_input(args).map_err(ContractError::abi)?;

        debug!(target: "ballot", contract = ?contract, function = operation, "eth_call");
        let output = self.rpc_client.call(contract, &Bytes::from(data)).await?;

        if output.as_ref().is_empty() && !function.outputs.is_empty() {
            return Err(ContractError::EmptyResult {
                contract,
                function: operation.to_string(),
            });
        }
        function
            .decode_output(output.as_ref())
            .map_err(ContractError::abi)
    }

    /// Calls a view function expected to return a single `uint`
    pub async fn test_invoke_uint(
        &self,
        contract: Address,
        abi: &Abi,
        operation: &str,
        args: &[Token],
    ) -> Result<U256, ContractError> {
        let tokens = self.test_invoke(contract, abi, operation, args).await?;
        match tokens.into_iter().next() {
            Some(Token::Uint(value)) => Ok(value),
            other => Err(ContractError::Abi(format!(
                "{operation} returned {other:?}, expected an unsigned integer"
            ))),
        }
    }
}
