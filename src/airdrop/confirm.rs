//! Confirmation polling with a hard deadline.
//!
//! # Design Decisions
//! - Fixed poll interval, no backoff; the deadline is the only bound
//! - Uses tokio time throughout so tests run under a paused virtual clock
//! - A status carrying a transaction error ends the wait immediately

use std::time::Duration;

use solana_sdk::signature::Signature;
use tokio::time::{sleep, Instant};

use crate::airdrop::types::AirdropError;
use crate::ledger::LedgerRpc;

/// Polls the ledger for a signature until it confirms or the deadline lapses.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationPoller {
    poll_interval: Duration,
    deadline: Duration,
}

impl ConfirmationPoller {
    pub fn new(poll_interval: Duration, deadline: Duration) -> Self {
        Self {
            poll_interval,
            deadline,
        }
    }

    /// Wait for `signature` to reach confirmed finality.
    ///
    /// Returns the slot the transaction confirmed in, or `TimedOut` once the
    /// deadline elapses without a confirmation.
    pub async fn wait(
        &self,
        rpc: &dyn LedgerRpc,
        signature: &Signature,
    ) -> Result<u64, AirdropError> {
        let start = Instant::now();
        let mut polls = 0u32;

        while start.elapsed() < self.deadline {
            polls += 1;
            match rpc.signature_status(signature).await? {
                Some(status) => {
                    if let Some(err) = status.err {
                        tracing::warn!(%signature, error = %err, "Transaction failed on chain");
                        return Err(AirdropError::SubmissionFailed(err));
                    }
                    if status.level.is_confirmed() {
                        tracing::debug!(
                            %signature,
                            slot = status.slot,
                            polls,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "Transaction confirmed"
                        );
                        return Ok(status.slot);
                    }
                    tracing::debug!(%signature, level = ?status.level, "Not yet confirmed");
                }
                None => {
                    tracing::debug!(%signature, "Signature not yet known to the ledger");
                }
            }

            sleep(self.poll_interval).await;
        }

        tracing::warn!(%signature, polls, "Confirmation deadline elapsed");
        Err(AirdropError::TimedOut(self.deadline))
    }
}
