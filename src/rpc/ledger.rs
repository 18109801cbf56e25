/// Ledger query capability used by the resolvers
///
/// The resolvers only depend on this trait; [`RpcClient`] is the production
/// implementation and tests substitute in-memory fakes.
use super::client::RpcClient;
use super::types::{ParsedTransaction, RpcResult, SignatureInfo};
use async_trait::async_trait;

#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Most recent signatures for `address`, newest first
    async fn list_recent_signatures(
        &self,
        address: &str,
        limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>>;

    /// Parsed transaction, `None` if the node does not have it
    async fn get_parsed_transaction(&self, signature: &str) -> RpcResult<Option<ParsedTransaction>>;

    /// Native balance in SOL
    async fn get_sol_balance(&self, address: &str) -> RpcResult<f64>;

    /// Token UI balance of `owner` for `mint`
    async fn get_token_balance(&self, owner: &str, mint: &str) -> RpcResult<f64>;
}

#[async_trait]
impl LedgerService for RpcClient {
    async fn list_recent_signatures(
        &self,
        address: &str,
        limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>> {
        self.get_signatures_for_address(address, limit).await
    }

    async fn get_parsed_transaction(&self, signature: &str) -> RpcResult<Option<ParsedTransaction>> {
        self.get_transaction(signature).await
    }

    async fn get_sol_balance(&self, address: &str) -> RpcResult<f64> {
        RpcClient::get_sol_balance(self, address).await
    }

    async fn get_token_balance(&self, owner: &str, mint: &str) -> RpcResult<f64> {
        RpcClient::get_token_balance(self, owner, mint).await
    }
}
