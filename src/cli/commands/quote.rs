use crate::aggregator::{ParaSwapClient, SwapAggregator};
use crate::cli::{default_request, display::emit, QuoteArgs};
use crate::core::{Config, SwapRequest, SwapResult};
use log::info;
use std::io;

/// Quoted destination amount, as the aggregator reported it.
pub async fn run(aggregator: &dyn SwapAggregator, request: &SwapRequest) -> SwapResult<String> {
    let route = aggregator.get_price_route(request).await?;
    Ok(route.dest_amount()?.to_string())
}

pub async fn execute(args: QuoteArgs, config: &Config) -> SwapResult<()> {
    let request = args.swap.resolve(Some(default_request()?))?;

    info!(
        "Quoting {} -> {} (amount: {})",
        request.src_token, request.dest_token, request.amount
    );

    let client = ParaSwapClient::new(config)?;
    let dest_amount = run(&client, &request).await?;

    emit(&mut io::stdout().lock(), &dest_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::*;
    use crate::core::SwapError;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_quote_prints_dest_amount_only() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/prices")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("amount".into(), "1000000000000000000".into()),
                Matcher::UrlEncoded("side".into(), "SELL".into()),
            ]))
            .with_status(200)
            .with_body(price_response("1000000000000000000", "999000000000000000").to_string())
            .create_async()
            .await;

        let client = client_for(&server.url());
        let value = run(&client, &one_token_request()).await.unwrap();

        let mut out = Vec::new();
        emit(&mut out, &value).unwrap();

        mock.assert_async().await;
        assert_eq!(String::from_utf8(out).unwrap(), "999000000000000000");
    }

    #[tokio::test]
    async fn test_quote_failure_produces_no_output() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/prices")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"error":"Internal error"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        let result = match run(&client, &one_token_request()).await {
            Ok(value) => emit(&mut out, &value),
            Err(e) => Err(e),
        };

        assert!(matches!(result, Err(SwapError::UpstreamQuoteError(_))));
        assert!(out.is_empty());
    }
}
