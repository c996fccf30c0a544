pub mod aggregator;
pub mod cli;
pub mod core;
pub mod utils;
pub mod wallet;

// Re-export commonly used types
pub use aggregator::{ParaSwapClient, SwapAggregator};
pub use core::{Config, PriceRoute, SwapError, SwapRequest, SwapResult, TransactionParams};
pub use wallet::WalletSigner;
