//! Solana RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the selected network's JSON-RPC endpoint
//! - Submit airdrop requests and look up signature statuses
//! - Enforce a per-request timeout on every call

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use tokio::time::timeout;

use crate::ledger::types::{ConfirmationLevel, LedgerError, LedgerResult, SignatureStatus};

/// The external ledger collaborator.
///
/// Production code talks to a Solana RPC node; tests substitute a scripted
/// fake.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Ask the faucet to credit `lamports` to `address`.
    ///
    /// Returns the signature of the submitted airdrop transaction.
    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> LedgerResult<Signature>;

    /// Look up the current status of a submitted signature.
    ///
    /// `None` means the ledger does not know the signature yet.
    async fn signature_status(&self, signature: &Signature)
        -> LedgerResult<Option<SignatureStatus>>;
}

/// Production implementation over the Solana JSON-RPC API.
pub struct SolanaRpc {
    client: RpcClient,
    url: String,
    timeout_duration: Duration,
}

impl SolanaRpc {
    /// Create a client for the given endpoint.
    pub fn new(url: impl Into<String>, request_timeout: Duration) -> Self {
        let url = url.into();
        let client = RpcClient::new_with_commitment(url.clone(), CommitmentConfig::confirmed());
        Self {
            client,
            url,
            timeout_duration: request_timeout,
        }
    }

    /// Endpoint this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LedgerRpc for SolanaRpc {
    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> LedgerResult<Signature> {
        let fut = self.client.request_airdrop(address, lamports);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(signature)) => Ok(signature),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Airdrop request rejected by RPC");
                Err(LedgerError::Rpc(e.to_string()))
            }
            Err(_) => Err(LedgerError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> LedgerResult<Option<SignatureStatus>> {
        let fut = self.client.get_signature_statuses(std::slice::from_ref(signature));
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(response)) => {
                let status = response.value.into_iter().next().flatten();
                Ok(status.map(|s| SignatureStatus {
                    slot: s.slot,
                    level: s
                        .confirmation_status
                        .map(ConfirmationLevel::from)
                        .unwrap_or(ConfirmationLevel::Processed),
                    err: s.err.map(|e| e.to_string()),
                }))
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Signature status lookup failed");
                Err(LedgerError::Rpc(e.to_string()))
            }
            Err(_) => Err(LedgerError::Timeout(self.timeout_duration.as_secs())),
        }
    }
}

impl fmt::Debug for SolanaRpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolanaRpc")
            .field("url", &self.url)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_endpoint_url() {
        let rpc = SolanaRpc::new("https://api.devnet.solana.com", Duration::from_secs(30));
        assert_eq!(rpc.url(), "https://api.devnet.solana.com");
        assert!(format!("{rpc:?}").contains("api.devnet.solana.com"));
    }
}
