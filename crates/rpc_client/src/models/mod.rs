//! RPC Models
//!
//! Wire types for JSON-RPC requests, responses and transaction receipts.

mod rpc_request;
mod rpc_response;
mod rpc_transaction_receipt;

pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use rpc_transaction_receipt::RpcTransactionReceipt;
