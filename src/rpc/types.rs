/// RPC wire types and errors
///
/// Only the fields the resolvers read are modelled; everything else in the
/// node's `jsonParsed` output is ignored by serde.
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RpcError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status} from RPC: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RpcError::Timeout
        } else if e.is_decode() {
            RpcError::InvalidResponse(e.to_string())
        } else {
            RpcError::ConnectionFailed(e.to_string())
        }
    }
}

pub type RpcResult<T> = Result<T, RpcError>;

/// Entry of a `getSignaturesForAddress` result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
    pub signature: String,
    #[serde(default)]
    pub slot: u64,
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

/// `getTransaction` result in `jsonParsed` encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransaction {
    #[serde(default)]
    pub slot: u64,
    #[serde(default)]
    pub block_time: Option<i64>,
    pub transaction: TransactionEnvelope,
    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

impl ParsedTransaction {
    /// Account addresses in message order, normalized to plain strings
    pub fn account_addresses(&self) -> Vec<&str> {
        self.transaction
            .message
            .account_keys
            .iter()
            .map(AccountKey::address)
            .collect()
    }

    /// Block time in seconds, 0 when the node did not report one
    pub fn block_time_or_zero(&self) -> i64 {
        self.block_time.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEnvelope {
    #[serde(default)]
    pub signatures: Vec<String>,
    #[serde(default)]
    pub message: TransactionMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMessage {
    #[serde(default)]
    pub account_keys: Vec<AccountKey>,
}

/// One entry of `message.accountKeys`
///
/// Nodes return either a bare base58 string (`json` encoding) or an object
/// with a `pubkey` field (`jsonParsed` encoding). Both carry the same address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountKey {
    Plain(String),
    Parsed {
        pubkey: String,
        #[serde(default)]
        signer: bool,
        #[serde(default)]
        writable: bool,
        #[serde(default)]
        source: Option<String>,
    },
}

impl AccountKey {
    /// The base58 address, whichever representation the node used
    pub fn address(&self) -> &str {
        match self {
            AccountKey::Plain(address) => address,
            AccountKey::Parsed { pubkey, .. } => pubkey,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub pre_balances: Vec<u64>,
    #[serde(default)]
    pub post_balances: Vec<u64>,
    // Older transactions report null here
    #[serde(default)]
    pub pre_token_balances: Option<Vec<TokenBalance>>,
    #[serde(default)]
    pub post_token_balances: Option<Vec<TokenBalance>>,
}

impl TransactionMeta {
    pub fn pre_token_balances(&self) -> &[TokenBalance] {
        self.pre_token_balances.as_deref().unwrap_or(&[])
    }

    pub fn post_token_balances(&self) -> &[TokenBalance] {
        self.post_token_balances.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    #[serde(default)]
    pub account_index: u32,
    #[serde(default)]
    pub mint: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub program_id: Option<String>,
    /// Absent or null on malformed entries; read as a zero balance
    #[serde(default)]
    pub ui_token_amount: Option<UiTokenAmount>,
}

impl TokenBalance {
    pub fn ui_amount(&self) -> Option<f64> {
        self.ui_token_amount.as_ref().and_then(|a| a.ui_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    #[serde(default)]
    pub ui_amount: Option<f64>,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub ui_amount_string: Option<String>,
}
