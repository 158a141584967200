// Copyright (C) 2025 The Ballot CLI Contributors.
//
// contract_error.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_exception::RpcException;
use ballot_config::ConfigError;
use ethers_core::types::{Address, H256};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing, submitting or confirming a contract call
#[derive(Error, Debug)]
pub enum ContractError {
    #[error(transparent)]
    Rpc(#[from] RpcException),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("failed to read artifact {}: {source}", path.display())]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid artifact {}: {message}", path.display())]
    InvalidArtifact { path: PathBuf, message: String },

    #[error("artifact for {0} carries no bytecode; compile the contracts before deploying")]
    MissingBytecode(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("{function} on {contract:?} returned no data; is a contract deployed there?")]
    EmptyResult { contract: Address, function: String },

    #[error("transaction {hash:?} reverted")]
    Reverted { hash: H256 },

    #[error("transaction {0:?} did not create a contract")]
    NoContractAddress(H256),
}

impl ContractError {
    pub(crate) fn abi(err: impl std::fmt::Display) -> Self {
        ContractError::Abi(err.to_string())
    }
}
