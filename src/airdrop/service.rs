//! End-to-end airdrop orchestration.
//!
//! One user action flows: validate input → rate-limit check → parse address
//! → submit airdrop → poll for confirmation → record the request. Every step
//! short-circuits to a user-visible error, and nothing is recorded unless
//! the transaction confirmed.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;

use crate::airdrop::confirm::ConfirmationPoller;
use crate::airdrop::types::{AirdropError, AirdropReceipt, AirdropRequest};
use crate::ledger::LedgerRpc;
use crate::limiter::{Clock, FixedWindowLimiter, RequestLogStore};

/// Coordinates one airdrop request end to end.
pub struct AirdropService<S, C> {
    rpc: Arc<dyn LedgerRpc>,
    limiter: FixedWindowLimiter<S, C>,
    poller: ConfirmationPoller,
    in_flight: AtomicBool,
}

impl<S: RequestLogStore, C: Clock> AirdropService<S, C> {
    pub fn new(
        rpc: Arc<dyn LedgerRpc>,
        limiter: FixedWindowLimiter<S, C>,
        poller: ConfirmationPoller,
    ) -> Self {
        Self {
            rpc,
            limiter,
            poller,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run the full request sequence.
    pub async fn request_airdrop(
        &self,
        request: &AirdropRequest,
    ) -> Result<AirdropReceipt, AirdropError> {
        // Advisory only: refuses a second call on this service while one is
        // outstanding, nothing stronger.
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AirdropError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let address = request.address.trim();
        if address.is_empty() {
            return Err(AirdropError::InvalidInput);
        }

        if !self.limiter.check()? {
            tracing::warn!(network = %request.network, "Rate limit reached, refusing request");
            return Err(AirdropError::RateLimited {
                max: self.limiter.max_requests(),
            });
        }

        let pubkey = Pubkey::from_str(address)
            .map_err(|e| AirdropError::InvalidAddress(e.to_string()))?;

        tracing::info!(
            address = %pubkey,
            amount = %request.amount,
            network = %request.network,
            "Requesting airdrop"
        );
        let signature = self
            .rpc
            .request_airdrop(&pubkey, request.amount.lamports())
            .await
            .map_err(|e| AirdropError::SubmissionFailed(e.to_string()))?;

        tracing::info!(%signature, "Airdrop submitted, waiting for confirmation");
        let slot = self.poller.wait(self.rpc.as_ref(), &signature).await?;

        self.limiter.record()?;

        Ok(AirdropReceipt {
            signature,
            network: request.network,
            amount: request.amount,
            slot,
        })
    }

}

/// Clears the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
