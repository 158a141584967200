// Copyright (C) 2025 The Ballot CLI Contributors.
//
// rpc_transaction_receipt.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use ethers_core::types::{Address, H256, U256, U64};
use serde::{Deserialize, Serialize};

/// The subset of `eth_getTransactionReceipt` the tool relies on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionReceipt {
    pub transaction_hash: H256,

    #[serde(default)]
    pub block_number: Option<U64>,

    #[serde(default)]
    pub from: Option<Address>,

    #[serde(default)]
    pub to: Option<Address>,

    /// Set when the transaction created a contract
    #[serde(default)]
    pub contract_address: Option<Address>,

    #[serde(default)]
    pub gas_used: Option<U256>,

    /// 1 on success, 0 when execution reverted. Pre-Byzantium receipts omit it.
    #[serde(default)]
    pub status: Option<U64>,
}

impl RpcTransactionReceipt {
    pub fn is_success(&self) -> bool {
        self.status.map_or(true, |status| !status.is_zero())
    }

    /// Number of blocks including the one that mined the transaction.
    pub fn confirmations(&self, latest_block: u64) -> u64 {
        match self.block_number {
            Some(mined) if latest_block >= mined.as_u64() => latest_block - mined.as_u64() + 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn receipt(status: &str) -> RpcTransactionReceipt {
        serde_json::from_value(json!({
            "transactionHash": format!("0x{}", "ab".repeat(32)),
            "blockNumber": "0x10",
            "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "to": null,
            "contractAddress": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
            "gasUsed": "0x5208",
            "status": status,
            "logs": [],
            "logsBloom": "0x00"
        }))
        .unwrap()
    }

    #[test]
    fn parses_node_receipt() {
        let receipt = receipt("0x1");
        assert!(receipt.is_success());
        assert_eq!(receipt.block_number, Some(U64::from(16)));
        assert!(receipt.to.is_none());
        assert!(receipt.contract_address.is_some());
        assert_eq!(receipt.gas_used, Some(U256::from(21_000)));
    }

    #[test]
    fn zero_status_is_failure() {
        assert!(!receipt("0x0").is_success());
    }

    #[test]
    fn confirmations_count_the_mining_block() {
        let receipt = receipt("0x1");
        assert_eq!(receipt.confirmations(15), 0);
        assert_eq!(receipt.confirmations(16), 1);
        assert_eq!(receipt.confirmations(18), 3);
    }
}
