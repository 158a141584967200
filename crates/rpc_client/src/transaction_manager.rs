// Copyright (C) 2025 The Ballot CLI Contributors.
//
// transaction_manager.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::contract_artifact::ContractArtifact;
use crate::contract_error::ContractError;
use crate::models::RpcTransactionReceipt;
use crate::RpcClient;
use ethers_core::abi::{Abi, Token};
use ethers_core::types::transaction::eip2718::TypedTransaction;
use ethers_core::types::{Address, Bytes, TransactionRequest, H256, U256};
use ethers_signers::{LocalWallet, Signer};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Signing half of the client pair.
///
/// Builds, signs and broadcasts exactly one transaction per call, then
/// waits for its receipt. Nothing is retried.
pub struct TransactionManager {
    rpc_client: Arc<RpcClient>,
    wallet: LocalWallet,
    confirmations: u64,
    poll_interval: Duration,
}

impl TransactionManager {
    pub fn new(
        rpc_client: Arc<RpcClient>,
        wallet: LocalWallet,
        confirmations: u64,
        poll_interval: Duration,
    ) -> Self {
        Self {
            rpc_client,
            wallet,
            confirmations: confirmations.max(1),
            poll_interval,
        }
    }

    /// Address of the signing account
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.wallet.chain_id()
    }

    /// Submits a state-changing call to `contract`
    pub async fn invoke(
        &self,
        contract: Address,
        abi: &Abi,
        operation: &str,
        args: &[Token],
    ) -> Result<H256, ContractError> {
        let function = abi.function(operation).map_err(ContractError::abi)?;
        let data = function.encode_input(args).map_err(ContractError::abi)?;
        info!(target: "ballot", contract = ?contract, function = operation, "submitting contract call");
        self.send(Some(contract), Bytes::from(data)).await
    }

    /// Submits a contract creation with ABI-encoded constructor arguments
    pub async fn deploy(
        &self,
        artifact: &ContractArtifact,
        args: &[Token],
    ) -> Result<H256, ContractError> {
        let data = Self::creation_data(artifact, args)?;
        info!(target: "ballot", contract = %artifact.contract_name, "submitting deployment");
        self.send(None, data).await
    }

    fn creation_data(artifact: &ContractArtifact, args: &[Token]) -> Result<Bytes, ContractError> {
        let code = artifact.creation_code()?.to_vec();
        match artifact.abi.constructor() {
            Some(constructor) => constructor
                .encode_input(code, args)
                .map(Bytes::from)
                .map_err(ContractError::abi),
            None if args.is_empty() => Ok(Bytes::from(code)),
            None => Err(ContractError::Abi(format!(
                "{} has no constructor but {} arguments were given",
                artifact.contract_name,
                args.len()
            ))),
        }
    }

    /// Signs and broadcasts a transaction carrying `data`
    pub async fn send(&self, to: Option<Address>, data: Bytes) -> Result<H256, ContractError> {
        let from = self.address();
        let nonce = self.rpc_client.get_transaction_count(from).await?;
        let gas_price = self.rpc_client.gas_price().await?;
        let gas = self.rpc_client.estimate_gas(from, to, &data).await?;
        debug!(
            target: "ballot",
            nonce = %nonce,
            gas = %gas,
            gas_price = %gas_price,
            "transaction parameters resolved"
        );

        let raw = self.sign(to, data, nonce, gas, gas_price)?;
        Ok(self.rpc_client.send_raw_transaction(&raw).await?)
    }

    /// Produces the signed EIP-155 legacy encoding of a transaction
    pub fn sign(
        &self,
        to: Option<Address>,
        data: Bytes,
        nonce: U256,
        gas: U256,
        gas_price: U256,
    ) -> Result<Bytes, ContractError> {
        let mut tx: TypedTransaction = TransactionRequest::new()
            .from(self.address())
            .data(data)
            .nonce(nonce)
            .gas(gas)
            .gas_price(gas_price)
            .chain_id(self.chain_id())
            .into();
        if let Some(to) = to {
            tx.set_to(to);
        }

        let signature = self
            .wallet
            .sign_transaction_sync(&tx)
            .map_err(|err| ContractError::Signing(err.to_string()))?;
        Ok(tx.rlp_signed(&signature))
    }

    /// Blocks until the transaction is mined and buried under the configured
    /// number of confirmations. There is no timeout.
    pub async fn wait_for_receipt(&self, hash: H256) -> Result<RpcTransactionReceipt, ContractError> {
        let receipt = loop {
            if let Some(receipt) = self.rpc_client.get_transaction_receipt(hash).await? {
                break receipt;
            }
            sleep(self.poll_interval).await;
        };

        if !receipt.is_success() {
            return Err(ContractError::Reverted { hash });
        }

        if self.confirmations > 1 {
            loop {
                let latest = self.rpc_client.block_number().await?;
                let depth = receipt.confirmations(latest);
                debug!(target: "ballot", hash = ?hash, depth, wanted = self.confirmations, "waiting for confirmations");
                if depth >= self.confirmations {
                    break;
                }
                sleep(self.poll_interval).await;
            }
        }

        info!(target: "ballot", hash = ?hash, block = ?receipt.block_number, "transaction confirmed");
        Ok(receipt)
    }
}
