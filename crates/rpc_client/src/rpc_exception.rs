// Copyright (C) 2025 The Ballot CLI Contributors.
//
// rpc_exception.rs file belongs to the ballot-cli project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

/// JSON-RPC parse error code
pub const PARSE_ERROR: i64 = -32700;
/// JSON-RPC internal error code, also used for transport failures
pub const INTERNAL_ERROR: i64 = -32603;

/// Error raised by the node or by the transport carrying the request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (code {code})")]
pub struct RpcException {
    /// JSON-RPC error code
    pub code: i64,

    /// Error message
    pub message: String,
}

impl RpcException {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code() {
        let err = RpcException::new(-32000, "insufficient funds for gas * price + value");
        assert_eq!(
            err.to_string(),
            "insufficient funds for gas * price + value (code -32000)"
        );
        assert_eq!(RpcException::parse("bad").code, PARSE_ERROR);
        assert_eq!(RpcException::internal("bad").code, INTERNAL_ERROR);
    }
}
