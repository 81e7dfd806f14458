//! Ledger RPC collaborator.
//!
//! The node's wire protocol is its own business; this module exposes the two
//! calls the airdrop flow needs behind a trait so tests can script the
//! ledger's answers.

pub mod client;
pub mod types;

pub use client::{LedgerRpc, SolanaRpc};
pub use types::{ConfirmationLevel, LedgerError, LedgerResult, SignatureStatus};
