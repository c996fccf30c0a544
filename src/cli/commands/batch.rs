use crate::aggregator::{ParaSwapClient, SwapAggregator};
use crate::cli::display::{BatchReport, QuoteDisplay};
use crate::cli::BatchArgs;
use crate::core::{constants::BATCH_SELL_AMOUNTS, BatchQuote, Config, SwapRequest, SwapResult};
use crate::utils::parse_amount;
use futures::future::join_all;
use log::{debug, info};
use std::io;

/// Quote every size concurrently. Results keep the order of `sizes`, and
/// any failed quote fails the whole batch.
pub async fn run(
    aggregator: &dyn SwapAggregator,
    base: &SwapRequest,
    sizes: &[(&str, &str)],
) -> SwapResult<Vec<BatchQuote>> {
    let requests = sizes
        .iter()
        .map(|(label, amount)| Ok((label.to_string(), base.with_amount(parse_amount(amount)?))))
        .collect::<SwapResult<Vec<_>>>()?;

    debug!("Requesting {} quotes in parallel", requests.len());
    let routes = join_all(
        requests
            .iter()
            .map(|(_, request)| aggregator.get_price_route(request)),
    )
    .await;

    requests
        .into_iter()
        .zip(routes)
        .map(|((label, request), route)| {
            Ok(BatchQuote {
                label,
                amount: request.amount,
                route: route?,
            })
        })
        .collect()
}

pub async fn execute(args: BatchArgs, config: &Config) -> SwapResult<()> {
    let base = args.resolve()?;

    info!(
        "Batch quoting {} -> {} at {} sizes",
        base.src_token,
        base.dest_token,
        BATCH_SELL_AMOUNTS.len()
    );

    let pb = QuoteDisplay::create_progress_bar("Fetching quotes...");
    let client = ParaSwapClient::new(config)?;
    let quotes = run(&client, &base, &BATCH_SELL_AMOUNTS).await;
    pb.finish_and_clear();

    let reports = quotes?
        .iter()
        .map(BatchReport::from_quote)
        .collect::<SwapResult<Vec<_>>>()?;

    QuoteDisplay::display_batch(&mut io::stdout().lock(), &reports)?;
    QuoteDisplay::display_summary(&reports);
    Ok(())
}
