//! Airdrop request flow.
//!
//! # Data Flow
//! ```text
//! AirdropRequest (address, network, amount)
//!     → service.rs (validation, rate limit, submission)
//!     → confirm.rs (bounded status polling)
//!     → AirdropReceipt or AirdropError
//! ```

pub mod confirm;
pub mod service;
pub mod types;

pub use confirm::ConfirmationPoller;
pub use service::AirdropService;
pub use types::{AirdropAmount, AirdropError, AirdropReceipt, AirdropRequest, Network};
