use crate::aggregator::{ParaSwapClient, SwapAggregator};
use crate::cli::{display::emit, CalldataArgs};
use crate::core::{Config, SwapError, SwapRequest, SwapResult};
use crate::wallet::WalletSigner;
use alloy::primitives::Address;
use log::info;
use std::io;

/// Price the swap, then have the aggregator build calldata for `caller`.
pub async fn run(
    aggregator: &dyn SwapAggregator,
    request: &SwapRequest,
    caller: Address,
    ignore_checks: bool,
) -> SwapResult<String> {
    let route = aggregator.get_price_route(request).await?;
    let transaction = aggregator
        .build_transaction(&route, caller, ignore_checks)
        .await?;
    Ok(transaction.data()?.to_string())
}

pub async fn execute(args: CalldataArgs, config: &Config) -> SwapResult<()> {
    let mut request = args.swap.resolve(None)?;

    let caller = if args.wallet {
        let wallet = WalletSigner::from_private_key(config.require_private_key()?)?;
        if let Some(rpc_url) = config.rpc_url.as_deref() {
            wallet.verify_chain(rpc_url, config.chain_id).await?;
        }
        wallet.address()
    } else {
        request.user_address.ok_or_else(|| {
            SwapError::ConfigError(
                "missing required argument <caller> (or pass --wallet)".to_string(),
            )
        })?
    };
    request.user_address = Some(caller);

    info!(
        "Building swap {} -> {} (amount: {}) for {}",
        request.src_token, request.dest_token, request.amount, caller
    );

    let client = ParaSwapClient::new(config)?;
    let calldata = run(&client, &request, caller, !args.strict).await?;

    emit(&mut io::stdout().lock(), &calldata)
}
