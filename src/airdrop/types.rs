//! Airdrop request and result types.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signature::Signature;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::limiter::StoreError;

/// Test network the airdrop is requested on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Devnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Devnet => f.write_str("devnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Airdrop size; the faucet offers exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirdropAmount {
    One,
    Two,
}

impl AirdropAmount {
    /// Amount in lamports, the smallest native unit.
    pub fn lamports(self) -> u64 {
        match self {
            AirdropAmount::One => LAMPORTS_PER_SOL,
            AirdropAmount::Two => 2 * LAMPORTS_PER_SOL,
        }
    }
}

impl fmt::Display for AirdropAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirdropAmount::One => f.write_str("1 SOL"),
            AirdropAmount::Two => f.write_str("2 SOL"),
        }
    }
}

impl FromStr for AirdropAmount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(AirdropAmount::One),
            "2" => Ok(AirdropAmount::Two),
            other => Err(format!("unsupported amount '{other}', expected 1 or 2")),
        }
    }
}

/// A single airdrop request as entered by the user. Never persisted.
#[derive(Debug, Clone)]
pub struct AirdropRequest {
    pub address: String,
    pub network: Network,
    pub amount: AirdropAmount,
}

/// Outcome of a confirmed airdrop.
#[derive(Debug, Clone)]
pub struct AirdropReceipt {
    pub signature: Signature,
    pub network: Network,
    pub amount: AirdropAmount,
    /// Slot the transaction was confirmed in.
    pub slot: u64,
}

impl AirdropReceipt {
    /// User-facing success line.
    pub fn summary(&self) -> String {
        format!("Airdrop of {} on {} successful", self.amount, self.network)
    }

    /// Explorer link for the confirmed transaction.
    pub fn explorer_url(&self) -> String {
        format!(
            "https://explorer.solana.com/tx/{}?cluster={}",
            self.signature, self.network
        )
    }
}

/// Failures the airdrop flow reports to the user.
///
/// None of these are fatal; the tool always returns to an idle,
/// resubmittable state.
#[derive(Debug, Error)]
pub enum AirdropError {
    /// Empty wallet address input.
    #[error("wallet address is required")]
    InvalidInput,

    /// Address does not parse as a public key.
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    /// Fixed-window limit reached; no request was made.
    #[error("airdrop limit of {max} requests reached, try again later")]
    RateLimited { max: usize },

    /// The faucet rejected the request or the transaction failed on chain.
    #[error("airdrop request failed: {0}")]
    SubmissionFailed(String),

    /// Confirmation did not arrive before the deadline.
    #[error("transaction confirmation timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),

    /// Another request is already in flight on this service.
    #[error("an airdrop request is already in flight")]
    Busy,

    /// Ledger RPC failure during status polling.
    #[error(transparent)]
    Rpc(#[from] LedgerError),

    /// Request log could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_lamports() {
        assert_eq!(AirdropAmount::One.lamports(), 1_000_000_000);
        assert_eq!(AirdropAmount::Two.lamports(), 2_000_000_000);
    }

    #[test]
    fn amount_parses_from_sol_count() {
        assert_eq!("1".parse::<AirdropAmount>().unwrap(), AirdropAmount::One);
        assert_eq!(" 2 ".parse::<AirdropAmount>().unwrap(), AirdropAmount::Two);
        assert!("3".parse::<AirdropAmount>().is_err());
    }

    #[test]
    fn receipt_summary_names_amount_and_network() {
        let receipt = AirdropReceipt {
            signature: Signature::default(),
            network: Network::Testnet,
            amount: AirdropAmount::Two,
            slot: 42,
        };
        let summary = receipt.summary();
        assert!(summary.contains("2 SOL"));
        assert!(summary.contains("testnet"));
    }

    #[test]
    fn explorer_url_carries_cluster() {
        let receipt = AirdropReceipt {
            signature: Signature::default(),
            network: Network::Devnet,
            amount: AirdropAmount::One,
            slot: 1,
        };
        assert!(receipt.explorer_url().ends_with("?cluster=devnet"));
    }

    #[test]
    fn timed_out_display_names_the_deadline() {
        let err = AirdropError::TimedOut(Duration::from_millis(60_000));
        assert_eq!(
            err.to_string(),
            "transaction confirmation timed out after 60000ms"
        );
    }
}
