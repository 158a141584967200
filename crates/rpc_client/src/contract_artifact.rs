// Copyright (C) 2025 The Ballot CLI Contributors.
//
// contract_artifact.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::contract_error::ContractError;
use ethers_core::abi::{parse_abi, Abi};
use ethers_core::types::Bytes;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Interface of the voting token, used when no compiled artifact is around
pub const MY_TOKEN_ABI: &[&str] = &[
    "function mint(address to, uint256 amount)",
    "function delegate(address delegatee)",
    "function getVotes(address account) view returns (uint256)",
    "function balanceOf(address account) view returns (uint256)",
    "function name() view returns (string)",
    "function symbol() view returns (string)",
    "function decimals() view returns (uint8)",
    "function totalSupply() view returns (uint256)",
];

/// Interface of the ballot contract, used when no compiled artifact is around
pub const TOKENIZED_BALLOT_ABI: &[&str] = &[
    "function vote(uint256 proposal, uint256 amount)",
    "function proposals(uint256 index) view returns (bytes32 name, uint256 voteCount)",
    "function winningProposal() view returns (uint256 winningProposal_)",
    "function winnerName() view returns (bytes32 winnerName_)",
    "function targetBlockNumber() view returns (uint256)",
];

/// A compiled contract: its ABI and, for deployable artifacts, its creation code
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Option<Bytes>,
}

/// Layout of a Hardhat artifact file
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    abi: Abi,
    #[serde(default)]
    bytecode: Option<String>,
}

impl ContractArtifact {
    /// Hardhat's location for `name` below the artifacts directory.
    pub fn default_path(artifacts_dir: &Path, contract_name: &str) -> PathBuf {
        artifacts_dir
            .join(format!("{contract_name}.sol"))
            .join(format!("{contract_name}.json"))
    }

    /// Loads a Hardhat artifact file
    pub fn load(path: &Path) -> Result<Self, ContractError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContractError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        let fallback_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_json(&fallback_name, &content).map_err(|message| ContractError::InvalidArtifact {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses the content of a Hardhat artifact
    pub fn from_json(fallback_name: &str, content: &str) -> Result<Self, String> {
        let artifact: HardhatArtifact =
            serde_json::from_str(content).map_err(|err| err.to_string())?;
        let bytecode = match artifact.bytecode.as_deref().map(str::trim) {
            None | Some("") | Some("0x") => None,
            Some(code) => {
                let raw = hex::decode(code.trim_start_matches("0x"))
                    .map_err(|err| format!("bytecode is not hex: {err}"))?;
                Some(Bytes::from(raw))
            }
        };
        Ok(Self {
            contract_name: artifact
                .contract_name
                .unwrap_or_else(|| fallback_name.to_string()),
            abi: artifact.abi,
            bytecode,
        })
    }

    /// Builds an interface-only artifact from human-readable signatures
    pub fn from_signatures(contract_name: &str, signatures: &[&str]) -> Result<Self, ContractError> {
        let abi = parse_abi(signatures).map_err(ContractError::abi)?;
        Ok(Self {
            contract_name: contract_name.to_string(),
            abi,
            bytecode: None,
        })
    }

    /// Loads the artifact from its Hardhat location, or falls back to the
    /// built-in interface when the file does not exist.
    pub fn load_or_builtin(
        artifacts_dir: &Path,
        contract_name: &str,
        signatures: &[&str],
    ) -> Result<Self, ContractError> {
        let path = Self::default_path(artifacts_dir, contract_name);
        if path.exists() {
            debug!(target: "ballot", path = %path.display(), "loading contract artifact");
            Self::load(&path)
        } else {
            debug!(target: "ballot", contract = contract_name, "artifact not found, using built-in interface");
            Self::from_signatures(contract_name, signatures)
        }
    }

    /// Creation code, required for deployment
    pub fn creation_code(&self) -> Result<&Bytes, ContractError> {
        self.bytecode
            .as_ref()
            .ok_or_else(|| ContractError::MissingBytecode(self.contract_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "MyToken",
        "sourceName": "contracts/MyToken.sol",
        "abi": [
            {"inputs": [], "stateMutability": "nonpayable", "type": "constructor"},
            {"inputs": [{"internalType": "address", "name": "to", "type": "address"},
                        {"internalType": "uint256", "name": "amount", "type": "uint256"}],
             "name": "mint", "outputs": [], "stateMutability": "nonpayable", "type": "function"}
        ],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080"
    }"#;

    #[test]
    fn parses_hardhat_artifact() {
        let artifact = ContractArtifact::from_json("fallback", ARTIFACT).unwrap();
        assert_eq!(artifact.contract_name, "MyToken");
        assert!(artifact.abi.function("mint").is_ok());
        assert!(artifact.abi.constructor().is_some());
        assert_eq!(
            artifact.creation_code().unwrap().as_ref(),
            &[0x60, 0x80, 0x60, 0x40, 0x52]
        );
    }

    #[test]
    fn interface_artifact_cannot_deploy() {
        let artifact = ContractArtifact::from_signatures("MyToken", MY_TOKEN_ABI).unwrap();
        assert!(artifact.abi.function("delegate").is_ok());
        assert!(artifact.abi.function("getVotes").is_ok());
        assert!(matches!(
            artifact.creation_code(),
            Err(ContractError::MissingBytecode(name)) if name == "MyToken"
        ));
    }

    #[test]
    fn builtin_ballot_interface_parses() {
        let artifact =
            ContractArtifact::from_signatures("TokenizedBallot", TOKENIZED_BALLOT_ABI).unwrap();
        let proposals = artifact.abi.function("proposals").unwrap();
        assert_eq!(proposals.outputs.len(), 2);
        assert!(artifact.abi.function("winnerName").is_ok());
    }

    #[test]
    fn empty_bytecode_is_none() {
        let json = r#"{"abi": [], "bytecode": "0x"}"#;
        let artifact = ContractArtifact::from_json("IVotes", json).unwrap();
        assert_eq!(artifact.contract_name, "IVotes");
        assert!(artifact.bytecode.is_none());
    }

    #[test]
    fn load_or_builtin_prefers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = ContractArtifact::default_path(dir.path(), "MyToken");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, ARTIFACT).unwrap();

        let artifact =
            ContractArtifact::load_or_builtin(dir.path(), "MyToken", MY_TOKEN_ABI).unwrap();
        assert!(artifact.bytecode.is_some());

        let artifact =
            ContractArtifact::load_or_builtin(dir.path(), "TokenizedBallot", TOKENIZED_BALLOT_ABI)
                .unwrap();
        assert!(artifact.bytecode.is_none());
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ContractArtifact::load(&path).unwrap_err();
        assert!(matches!(err, ContractError::InvalidArtifact { .. }));
        assert!(err.to_string().contains("Broken.json"));
    }
}
