use crate::aggregator::{ParaSwapClient, SwapAggregator};
use crate::cli::{display::emit, DstAmountArgs};
use crate::core::{Config, PriceRoute, SwapError, SwapRequest, SwapResult};
use alloy::primitives::{hex, U256};
use alloy::sol_types::SolValue;
use std::io;

/// `destAmount` encoded as the ABI tuple `(uint256)`, 0x-prefixed hex.
pub fn encode_dest_amount(route: &PriceRoute) -> SwapResult<String> {
    let dest_amount = route.dest_amount()?;
    let amount = U256::from_str_radix(dest_amount, 10).map_err(|e| {
        SwapError::UpstreamQuoteError(format!("destAmount {} is not an integer: {}", dest_amount, e))
    })?;

    Ok(hex::encode_prefixed((amount,).abi_encode()))
}

pub async fn run(aggregator: &dyn SwapAggregator, request: &SwapRequest) -> SwapResult<String> {
    let route = aggregator.get_price_route(request).await?;
    encode_dest_amount(&route)
}

pub async fn execute(args: DstAmountArgs, config: &Config) -> SwapResult<()> {
    let request = args.swap.resolve(None)?;
    let client = ParaSwapClient::new(config)?;
    let encoded = run(&client, &request).await?;

    emit(&mut io::stdout().lock(), &encoded)
}
