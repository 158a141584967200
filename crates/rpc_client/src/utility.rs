// Copyright (C) 2025 The Ballot CLI Contributors.
//
// utility.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use ballot_config::ETHER_DECIMALS;
use ethers_core::types::{Address, U256};
use regex::Regex;
use std::sync::OnceLock;

static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();
static AMOUNT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Width of the on-chain proposal name field
pub const PROPOSAL_NAME_SIZE: usize = 32;

/// Conversions between user input and on-chain values
pub struct Utility;

impl Utility {
    /// Returns true when `input` is `0x` followed by exactly 40 hex digits.
    pub fn is_valid_address(input: &str) -> bool {
        let regex = ADDRESS_REGEX
            .get_or_init(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("static regex"));
        regex.is_match(input)
    }

    /// Parses an address, accepting any letter case.
    pub fn parse_address(input: &str) -> Result<Address, String> {
        if input.is_empty() {
            return Err("address not provided".to_string());
        }
        if !Self::is_valid_address(input) {
            return Err(format!("invalid address '{input}': expected 0x followed by 40 hex digits"));
        }
        let bytes = hex::decode(&input[2..]).map_err(|err| format!("invalid address '{input}': {err}"))?;
        Ok(Address::from_slice(&bytes))
    }

    /// Converts a decimal string to an integer count of 18-decimal units.
    ///
    /// `"1"` becomes 10^18 and `"0.5"` becomes 5×10^17. Either side of the
    /// point may be empty (`".5"`, `"1."`) but not both. Negative numbers,
    /// exponents and more than 18 fractional digits are rejected.
    pub fn parse_amount(input: &str) -> Result<U256, String> {
        let regex = AMOUNT_REGEX
            .get_or_init(|| Regex::new(r"^([0-9]*)(?:\.([0-9]*))?$").expect("static regex"));
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("amount not provided".to_string());
        }
        let malformed = || format!("invalid amount '{input}': expected a non-negative decimal number");
        let captures = regex.captures(trimmed).ok_or_else(malformed)?;

        let decimals = ETHER_DECIMALS as usize;
        let whole = &captures[1];
        let fraction = captures.get(2).map_or("", |m| m.as_str());
        if whole.is_empty() && fraction.is_empty() {
            return Err(malformed());
        }
        if fraction.len() > decimals {
            return Err(format!(
                "invalid amount '{input}': at most {decimals} fractional digits are supported"
            ));
        }

        let overflow = || format!("invalid amount '{input}': value too large");
        let scale = U256::exp10(decimals);
        let whole_units = if whole.is_empty() {
            U256::zero()
        } else {
            U256::from_dec_str(whole)
                .map_err(|_| overflow())?
                .checked_mul(scale)
                .ok_or_else(overflow)?
        };
        let fraction_units = if fraction.is_empty() {
            U256::zero()
        } else {
            let padded = format!("{fraction:0<width$}", width = decimals);
            U256::from_dec_str(&padded).map_err(|_| overflow())?
        };
        whole_units.checked_add(fraction_units).ok_or_else(overflow)
    }

    /// Formats 18-decimal units as a decimal string without trailing zeros.
    pub fn format_amount(units: U256) -> String {
        let decimals = ETHER_DECIMALS as usize;
        let (whole, fraction) = units.div_mod(U256::exp10(decimals));
        if fraction.is_zero() {
            return whole.to_string();
        }
        let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals);
        format!("{}.{}", whole, fraction.trim_end_matches('0'))
    }

    /// Encodes a proposal label into the fixed 32-byte on-chain field.
    pub fn encode_proposal(label: &str) -> Result<[u8; PROPOSAL_NAME_SIZE], String> {
        let bytes = label.as_bytes();
        if bytes.len() > PROPOSAL_NAME_SIZE {
            return Err(format!(
                "proposal '{label}' is {} bytes long; at most {PROPOSAL_NAME_SIZE} bytes fit on chain",
                bytes.len()
            ));
        }
        let mut field = [0u8; PROPOSAL_NAME_SIZE];
        field[..bytes.len()].copy_from_slice(bytes);
        Ok(field)
    }

    /// Decodes a proposal field, dropping the zero padding.
    pub fn decode_proposal(field: &[u8]) -> String {
        let end = field
            .iter()
            .rposition(|byte| *byte != 0)
            .map_or(0, |index| index + 1);
        String::from_utf8_lossy(&field[..end]).into_owned()
    }
}
