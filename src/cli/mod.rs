use crate::core::{constants::*, SwapError, SwapRequest, SwapResult, SwapSide};
use crate::utils::{parse_amount, parse_token_identifier};
use alloy::primitives::{Address, U256};
use clap::{Args, Parser, Subcommand};
use std::str::FromStr;

pub mod commands;
pub mod display;

#[derive(Parser)]
#[command(name = "swap-route")]
#[command(about = "Quote and build ParaSwap swap transactions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the quoted destination amount (falls back to a preset swap with no arguments)
    Quote(QuoteArgs),

    /// Print the calldata of a swap transaction built for the caller
    Calldata(CalldataArgs),

    /// Print the destination amount ABI-encoded as (uint256)
    DstAmount(DstAmountArgs),

    /// Quote the preset sizes and report USD values in and out
    Batch(BatchArgs),
}

/// Positional swap parameters shared by the single-quote commands
#[derive(Args, Debug, Clone, Default)]
pub struct SwapArgs {
    /// Token to sell (address or symbol)
    #[arg(value_parser = parse_token)]
    pub from_token: Option<Address>,

    /// Decimals of the token sold
    pub from_decimals: Option<u8>,

    /// Token to buy (address or symbol)
    #[arg(value_parser = parse_token)]
    pub to_token: Option<Address>,

    /// Decimals of the token bought
    pub to_decimals: Option<u8>,

    /// Amount to sell, in the token's smallest unit
    #[arg(value_parser = parse_sell_amount)]
    pub sell_amount: Option<U256>,

    /// Address the swap is quoted for
    #[arg(value_parser = parse_address)]
    pub caller: Option<Address>,
}

impl SwapArgs {
    fn is_empty(&self) -> bool {
        self.from_token.is_none()
            && self.from_decimals.is_none()
            && self.to_token.is_none()
            && self.to_decimals.is_none()
            && self.sell_amount.is_none()
            && self.caller.is_none()
    }

    /// Build the request, or use `defaults` when no argument was given at all.
    pub fn resolve(&self, defaults: Option<SwapRequest>) -> SwapResult<SwapRequest> {
        if self.is_empty() {
            if let Some(defaults) = defaults {
                return Ok(defaults);
            }
        }

        Ok(SwapRequest {
            src_token: required(self.from_token, "fromToken")?,
            src_decimals: required(self.from_decimals, "fromDecimals")?,
            dest_token: required(self.to_token, "toToken")?,
            dest_decimals: required(self.to_decimals, "toDecimals")?,
            amount: required(self.sell_amount, "sellAmount")?,
            side: SwapSide::Sell,
            user_address: self.caller,
        })
    }
}

#[derive(Parser, Debug)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub swap: SwapArgs,
}

#[derive(Parser, Debug)]
pub struct CalldataArgs {
    #[command(flatten)]
    pub swap: SwapArgs,

    /// Use the address of the PRIVATE_KEY wallet as caller
    #[arg(long, conflicts_with = "caller")]
    pub wallet: bool,

    /// Let the aggregator check balances and allowances before building
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct DstAmountArgs {
    #[command(flatten)]
    pub swap: SwapArgs,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Token to sell (address or symbol)
    #[arg(value_parser = parse_token)]
    pub from_token: Option<Address>,

    /// Decimals of the token sold
    pub from_decimals: Option<u8>,

    /// Token to buy (address or symbol)
    #[arg(value_parser = parse_token)]
    pub to_token: Option<Address>,

    /// Decimals of the token bought
    pub to_decimals: Option<u8>,

    /// Address the swaps are quoted for
    #[arg(value_parser = parse_address)]
    pub caller: Option<Address>,
}

impl BatchArgs {
    /// Pair to quote; each preset size replaces the amount.
    pub fn resolve(&self) -> SwapResult<SwapRequest> {
        let swap = SwapArgs {
            from_token: self.from_token,
            from_decimals: self.from_decimals,
            to_token: self.to_token,
            to_decimals: self.to_decimals,
            sell_amount: self.from_token.map(|_| U256::from(1u8)),
            caller: self.caller,
        };
        let mut request = swap.resolve(Some(default_request()?))?;
        if request.user_address.is_none() {
            request.user_address = Some(DEFAULT_CALLER);
        }
        Ok(request)
    }
}

/// Swap quoted when `quote` or `batch` run without arguments.
pub fn default_request() -> SwapResult<SwapRequest> {
    Ok(SwapRequest {
        src_token: DEFAULT_FROM_TOKEN,
        src_decimals: DEFAULT_FROM_DECIMALS,
        dest_token: DEFAULT_TO_TOKEN,
        dest_decimals: DEFAULT_TO_DECIMALS,
        amount: parse_amount(DEFAULT_SELL_AMOUNT)?,
        side: SwapSide::Sell,
        user_address: Some(DEFAULT_CALLER),
    })
}

fn required<T>(value: Option<T>, name: &str) -> SwapResult<T> {
    value.ok_or_else(|| SwapError::ConfigError(format!("missing required argument <{}>", name)))
}

fn parse_token(s: &str) -> Result<Address, String> {
    parse_token_identifier(s).ok_or_else(|| format!("Invalid token: {}", s))
}

fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|e| format!("Invalid address: {}", e))
}

fn parse_sell_amount(s: &str) -> Result<U256, String> {
    parse_amount(s).map_err(|e| e.to_string())
}
