// Copyright (C) 2025 The Ballot CLI Contributors.
//
// lib.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Ballot RPC Client Library
//!
//! Thin JSON-RPC plumbing for talking to an EVM node: read-only contract
//! calls, signed contract invocations and deployments, and the
//! submit-then-wait-for-receipt flow shared by every command.

pub mod models;
mod contract_artifact;
mod contract_client;
mod contract_error;
mod rpc_client;
mod rpc_exception;
mod transaction_manager;
mod transaction_manager_factory;
mod utility;

pub use contract_artifact::{ContractArtifact, MY_TOKEN_ABI, TOKENIZED_BALLOT_ABI};
pub use contract_client::ContractClient;
pub use contract_error::ContractError;
pub use rpc_client::RpcClient;
pub use rpc_exception::RpcException;
pub use transaction_manager::TransactionManager;
pub use transaction_manager_factory::TransactionManagerFactory;
pub use utility::{Utility, PROPOSAL_NAME_SIZE};

// Re-export commonly used types
pub use models::{RpcRequest, RpcResponse, RpcResponseError, RpcTransactionReceipt};

pub use ethers_core::abi::{Abi, Token};
pub use ethers_core::types::{Address, Bytes, H256, U256, U64};
