//! Shared fakes for integration tests.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use sol_airdrop::ledger::{ConfirmationLevel, LedgerError, LedgerRpc, LedgerResult, SignatureStatus};
use sol_airdrop::limiter::Clock;

/// Manually advanced clock for limiter-facing assertions.
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self(AtomicU64::new(now_ms))
    }

    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Scripted ledger: a fixed submission outcome plus a sequence of status
/// answers (the last one repeats).
pub struct FakeLedger {
    submit_error: Option<String>,
    statuses: Vec<Option<SignatureStatus>>,
    airdrop_calls: AtomicUsize,
    status_cursor: AtomicUsize,
}

impl FakeLedger {
    /// Confirms after `pending_polls` polls that report processed status.
    pub fn confirming_after(pending_polls: usize) -> Self {
        let mut statuses = vec![pending_status(); pending_polls];
        statuses.push(confirmed_status(42));
        Self::with_statuses(statuses)
    }

    /// Reports processed status on every poll, forever.
    pub fn never_confirming() -> Self {
        Self::with_statuses(vec![pending_status()])
    }

    /// Rejects the airdrop submission itself.
    pub fn rejecting(message: &str) -> Self {
        Self {
            submit_error: Some(message.to_string()),
            statuses: Vec::new(),
            airdrop_calls: AtomicUsize::new(0),
            status_cursor: AtomicUsize::new(0),
        }
    }

    fn with_statuses(statuses: Vec<Option<SignatureStatus>>) -> Self {
        Self {
            submit_error: None,
            statuses,
            airdrop_calls: AtomicUsize::new(0),
            status_cursor: AtomicUsize::new(0),
        }
    }

    /// How many airdrop submissions the ledger saw.
    pub fn airdrop_calls(&self) -> usize {
        self.airdrop_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerRpc for FakeLedger {
    async fn request_airdrop(&self, _address: &Pubkey, _lamports: u64) -> LedgerResult<Signature> {
        self.airdrop_calls.fetch_add(1, Ordering::SeqCst);
        match &self.submit_error {
            Some(message) => Err(LedgerError::Rpc(message.clone())),
            None => Ok(Signature::default()),
        }
    }

    async fn signature_status(&self, _: &Signature) -> LedgerResult<Option<SignatureStatus>> {
        if self.statuses.is_empty() {
            return Ok(None);
        }
        let i = self.status_cursor.fetch_add(1, Ordering::SeqCst);
        Ok(self.statuses[i.min(self.statuses.len() - 1)].clone())
    }
}

pub fn pending_status() -> Option<SignatureStatus> {
    Some(SignatureStatus {
        slot: 0,
        level: ConfirmationLevel::Processed,
        err: None,
    })
}

pub fn confirmed_status(slot: u64) -> Option<SignatureStatus> {
    Some(SignatureStatus {
        slot,
        level: ConfirmationLevel::Confirmed,
        err: None,
    })
}
