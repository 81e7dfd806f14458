//! Solana test-network airdrop client.
//!
//! Requests a devnet or testnet SOL airdrop to a wallet address, throttled by
//! a client-local fixed-window rate limit and confirmed by polling the ledger
//! under a hard deadline.
//!
//! # Architecture Overview
//!
//! ```text
//! user action (CLI)
//!     → limiter   fixed window over the persisted request log
//!     → ledger    requestAirdrop / getSignatureStatuses RPC
//!     → airdrop   bounded confirmation polling + orchestration
//!     → limiter   record() once the airdrop confirmed
//! ```
//!
//! The rate limit lives entirely on the client: clearing the request log file
//! (or moving the local clock) resets it, and concurrent processes can race
//! on the file. Both are documented weaknesses, not bugs to fix here.

pub mod airdrop;
pub mod config;
pub mod ledger;
pub mod limiter;
