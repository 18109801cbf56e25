//! In-memory ledger for tests
//!
//! `FakeLedger` answers from fixtures and counts every call, so tests can
//! assert both on results and on how many upstream queries were made.

use super::ledger::LedgerService;
use super::types::{
    AccountKey, ParsedTransaction, RpcError, RpcResult, SignatureInfo, TokenBalance,
    TransactionEnvelope, TransactionMessage, TransactionMeta, UiTokenAmount,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakeLedger {
    signatures: Mutex<Vec<SignatureInfo>>,
    transactions: Mutex<HashMap<String, RpcResult<Option<ParsedTransaction>>>>,
    fail_signature_list: Mutex<Option<RpcError>>,
    sol_balance: Mutex<Option<RpcResult<f64>>>,
    token_balance: Mutex<Option<RpcResult<f64>>>,
    pub list_calls: AtomicUsize,
    pub transaction_calls: AtomicUsize,
    pub balance_calls: AtomicUsize,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transaction; signatures are listed in insertion order
    pub fn with_transaction(self, signature: &str, tx: ParsedTransaction) -> Self {
        self.push(signature, Ok(Some(tx)));
        self
    }

    /// Register a signature whose fetch fails
    pub fn with_failing_transaction(self, signature: &str, error: RpcError) -> Self {
        self.push(signature, Err(error));
        self
    }

    /// Register a signature the node does not know
    pub fn with_missing_transaction(self, signature: &str) -> Self {
        self.push(signature, Ok(None));
        self
    }

    pub fn with_signature_list_error(self, error: RpcError) -> Self {
        *self.fail_signature_list.lock() = Some(error);
        self
    }

    pub fn with_balances(self, sol: RpcResult<f64>, token: RpcResult<f64>) -> Self {
        *self.sol_balance.lock() = Some(sol);
        *self.token_balance.lock() = Some(token);
        self
    }

    fn push(&self, signature: &str, outcome: RpcResult<Option<ParsedTransaction>>) {
        self.signatures.lock().push(SignatureInfo {
            signature: signature.to_string(),
            slot: 0,
            err: None,
            block_time: None,
            confirmation_status: None,
        });
        self.transactions.lock().insert(signature.to_string(), outcome);
    }

    pub fn total_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
            + self.transaction_calls.load(Ordering::SeqCst)
            + self.balance_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerService for FakeLedger {
    async fn list_recent_signatures(
        &self,
        _address: &str,
        limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.fail_signature_list.lock().clone() {
            return Err(error);
        }
        Ok(self.signatures.lock().iter().take(limit).cloned().collect())
    }

    async fn get_parsed_transaction(&self, signature: &str) -> RpcResult<Option<ParsedTransaction>> {
        self.transaction_calls.fetch_add(1, Ordering::SeqCst);
        self.transactions
            .lock()
            .get(signature)
            .cloned()
            .unwrap_or(Ok(None))
    }

    async fn get_sol_balance(&self, _address: &str) -> RpcResult<f64> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.sol_balance.lock().clone().unwrap_or(Ok(0.0))
    }

    async fn get_token_balance(&self, _owner: &str, _mint: &str) -> RpcResult<f64> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.token_balance.lock().clone().unwrap_or(Ok(0.0))
    }
}

/// Build a parsed transaction from plain account keys and lamport balances
pub fn transaction(
    block_time: Option<i64>,
    keys: &[&str],
    pre_balances: &[u64],
    post_balances: &[u64],
) -> ParsedTransaction {
    ParsedTransaction {
        slot: 1,
        block_time,
        transaction: TransactionEnvelope {
            signatures: vec![],
            message: TransactionMessage {
                account_keys: keys.iter().map(|k| AccountKey::Plain(k.to_string())).collect(),
            },
        },
        meta: Some(TransactionMeta {
            err: None,
            fee: 5000,
            pre_balances: pre_balances.to_vec(),
            post_balances: post_balances.to_vec(),
            pre_token_balances: Some(vec![]),
            post_token_balances: Some(vec![]),
        }),
    }
}

/// Add token balance snapshots to a transaction built with [`transaction`]
pub fn with_token_balances(
    mut tx: ParsedTransaction,
    pre: Vec<TokenBalance>,
    post: Vec<TokenBalance>,
) -> ParsedTransaction {
    if let Some(meta) = tx.meta.as_mut() {
        meta.pre_token_balances = Some(pre);
        meta.post_token_balances = Some(post);
    }
    tx
}

pub fn token_balance(account_index: u32, owner: &str, mint: &str, ui_amount: Option<f64>) -> TokenBalance {
    TokenBalance {
        account_index,
        mint: mint.to_string(),
        owner: Some(owner.to_string()),
        program_id: None,
        ui_token_amount: Some(UiTokenAmount {
            ui_amount,
            decimals: 6,
            amount: String::new(),
            ui_amount_string: None,
        }),
    }
}
