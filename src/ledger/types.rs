//! Ledger-facing types and error definitions.

use solana_transaction_status::TransactionConfirmationStatus;
use thiserror::Error;

/// Errors from the ledger RPC collaborator.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// RPC transport or server failure.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The request did not complete within the client-side timeout.
    #[error("rpc timeout after {0} seconds")]
    Timeout(u64),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-reported finality level of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationLevel {
    Processed,
    Confirmed,
    Finalized,
}

impl ConfirmationLevel {
    /// Whether the transaction has reached at least "confirmed" finality.
    ///
    /// Finality only moves forward, so a signature first observed as
    /// finalized counts as confirmed too.
    pub fn is_confirmed(self) -> bool {
        matches!(self, ConfirmationLevel::Confirmed | ConfirmationLevel::Finalized)
    }
}

impl From<TransactionConfirmationStatus> for ConfirmationLevel {
    fn from(status: TransactionConfirmationStatus) -> Self {
        match status {
            TransactionConfirmationStatus::Processed => ConfirmationLevel::Processed,
            TransactionConfirmationStatus::Confirmed => ConfirmationLevel::Confirmed,
            TransactionConfirmationStatus::Finalized => ConfirmationLevel::Finalized,
        }
    }
}

/// Status snapshot for a submitted signature.
#[derive(Debug, Clone)]
pub struct SignatureStatus {
    /// Slot the transaction was processed in.
    pub slot: u64,

    /// Finality level reached so far.
    pub level: ConfirmationLevel,

    /// Error reported by the ledger, if the transaction failed on chain.
    pub err: Option<String>,
}
