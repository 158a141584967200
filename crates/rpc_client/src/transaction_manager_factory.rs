// Copyright (C) 2025 The Ballot CLI Contributors.
//
// transaction_manager_factory.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::contract_error::ContractError;
use crate::{RpcClient, TransactionManager};
use ballot_config::{Credentials, Settings};
use ethers_signers::{LocalWallet, Signer};
use std::sync::Arc;
use std::time::Duration;

/// Builds [`TransactionManager`]s that share one RPC client and the waiting
/// parameters of a [`Settings`].
pub struct TransactionManagerFactory {
    rpc_client: Arc<RpcClient>,
    chain_id: u64,
    confirmations: u64,
    poll_interval: Duration,
}

impl TransactionManagerFactory {
    pub fn new(rpc_client: Arc<RpcClient>, settings: &Settings) -> Self {
        Self {
            rpc_client,
            chain_id: settings.network.chain_id,
            confirmations: settings.confirmations,
            poll_interval: settings.poll_interval,
        }
    }

    /// Binds a manager to the signing key held by `credentials`
    pub fn make_manager(&self, credentials: &Credentials) -> Result<TransactionManager, ContractError> {
        let key = credentials.signing_key()?;
        let wallet = key
            .parse::<LocalWallet>()
            .map_err(|err| ContractError::Signing(format!("invalid private key: {err}")))?
            .with_chain_id(self.chain_id);
        Ok(TransactionManager::new(
            Arc::clone(&self.rpc_client),
            wallet,
            self.confirmations,
            self.poll_interval,
        ))
    }
}
