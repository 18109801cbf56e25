//! Solana ledger access
//!
//! - `client`: JSON-RPC over HTTP
//! - `ledger`: the [`LedgerService`] capability the resolvers consume
//! - `types`: wire types and [`RpcError`]
pub mod client;
pub mod ledger;
pub mod types;

pub use client::RpcClient;
pub use ledger::LedgerService;
pub use types::{
    AccountKey, ParsedTransaction, RpcError, RpcResult, SignatureInfo, TokenBalance,
    TransactionMeta, UiTokenAmount,
};

#[cfg(test)]
pub mod testing;
