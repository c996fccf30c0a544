use alloy::primitives::{address, Address};

// ParaSwap REST API
pub const PARASWAP_API_URL: &str = "https://apiv5.paraswap.io";
pub const PRICES_PATH: &str = "prices";
pub const TRANSACTIONS_PATH: &str = "transactions";

// Arbitrum One
pub const DEFAULT_CHAIN_ID: u64 = 42161;

// HTTP Configuration
pub const DEFAULT_HTTP_TIMEOUT: u64 = 30;
pub const MAX_HTTP_RETRIES: u32 = 2;
pub const RETRY_BASE_DELAY_MS: u64 = 500;
pub const RETRY_MAX_DELAY_MS: u64 = 5000;
pub const RETRY_BACKOFF_MULTIPLIER: f64 = 2.0;

// Default swap used when no arguments are supplied
pub const DEFAULT_FROM_TOKEN: Address = address!("221A0f68770658C15B525d0F89F5da2baAB5f321");
pub const DEFAULT_FROM_DECIMALS: u8 = 18;
pub const DEFAULT_TO_TOKEN: Address = address!("EC70Dcb4A1EFa46b8F2D97C310C9c4790ba5ffA8");
pub const DEFAULT_TO_DECIMALS: u8 = 18;
pub const DEFAULT_SELL_AMOUNT: &str = "995173078713564046713";
pub const DEFAULT_CALLER: Address = address!("37c5B029f9c3691B3d47cb024f84E5E257aEb0BB");

// Batch quote sizes (label, amount in smallest units)
pub const BATCH_SELL_AMOUNTS: [(&str, &str); 5] = [
    ("1", "18154557608573679626873"),
    ("2", "36309115217147359253746"),
    ("3", "45386394021434199067186"),
    ("4", "54463672825721038880622"),
    ("5", "72618230434294718507496"),
];
