//! ParaSwap REST client.
//!
//! Two calls are used: `GET /prices` to price a swap and
//! `POST /transactions/{network}` to turn the returned route into calldata.

use crate::aggregator::{RetryPolicy, SwapAggregator};
use crate::core::{
    constants::*, BuildTxRequest, Config, PriceRoute, SwapError, SwapRequest, SwapResult,
    TransactionParams,
};
use alloy::primitives::Address;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

pub struct ParaSwapClient {
    http: Client,
    base_url: String,
    chain_id: u64,
    retry: RetryPolicy,
}

impl ParaSwapClient {
    pub fn new(config: &Config) -> SwapResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            chain_id: config.chain_id,
            retry: RetryPolicy::with_max_retries(config.max_retries),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn fetch_price_route(&self, request: &SwapRequest) -> SwapResult<PriceRoute> {
        let url = format!("{}/{}", self.base_url, PRICES_PATH);
        let response = self
            .http
            .get(&url)
            .query(&request.to_query(self.chain_id))
            .send()
            .await?;

        let mut body = read_json(response, SwapError::UpstreamQuoteError).await?;
        let route = body
            .get_mut("priceRoute")
            .map(Value::take)
            .ok_or_else(|| {
                SwapError::UpstreamQuoteError("response has no priceRoute".to_string())
            })?;

        PriceRoute::new(route)
    }

    async fn post_transaction(
        &self,
        route: &PriceRoute,
        user_address: Address,
        ignore_checks: bool,
    ) -> SwapResult<TransactionParams> {
        let url = format!("{}/{}/{}", self.base_url, TRANSACTIONS_PATH, self.chain_id);
        let payload = BuildTxRequest::from_route(route, user_address)?;

        let response = self
            .http
            .post(&url)
            .query(&[("ignoreChecks", ignore_checks)])
            .json(&payload)
            .send()
            .await?;

        let body = read_json(response, SwapError::UpstreamBuildError).await?;
        TransactionParams::new(body)
    }
}

#[async_trait::async_trait]
impl SwapAggregator for ParaSwapClient {
    async fn get_price_route(&self, request: &SwapRequest) -> SwapResult<PriceRoute> {
        debug!(
            "Requesting price route {} -> {} (amount: {}, network: {})",
            request.src_token, request.dest_token, request.amount, self.chain_id
        );

        let route = self
            .retry
            .run("get price route", || self.fetch_price_route(request))
            .await?;

        info!(
            "Price route received: srcAmount={}, destAmount={}",
            route.src_amount()?,
            route.dest_amount()?
        );
        Ok(route)
    }

    async fn build_transaction(
        &self,
        route: &PriceRoute,
        user_address: Address,
        ignore_checks: bool,
    ) -> SwapResult<TransactionParams> {
        debug!(
            "Requesting transaction for {} (ignoreChecks: {})",
            user_address, ignore_checks
        );

        let params = self
            .retry
            .run("build transaction", || {
                self.post_transaction(route, user_address, ignore_checks)
            })
            .await?;

        info!("Transaction built: calldata length={}", params.data()?.len());
        Ok(params)
    }
}

/// Decode an aggregator response. Gateway failures count as network errors;
/// any other non-success status or an `error` field becomes `rejected`.
async fn read_json(
    response: reqwest::Response,
    rejected: fn(String) -> SwapError,
) -> SwapResult<Value> {
    let status = response.status();
    let text = response.text().await?;

    if matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    ) {
        return Err(SwapError::NetworkError(format!("aggregator returned {}", status)));
    }

    let body: Value = match serde_json::from_str(&text) {
        Ok(body) => body,
        Err(e) if status.is_success() => {
            return Err(rejected(format!("malformed response: {}", e)));
        }
        Err(_) => return Err(rejected(format!("HTTP {}", status))),
    };

    if let Some(message) = body.get("error") {
        let message = message
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| message.to_string());
        return Err(rejected(message));
    }

    if !status.is_success() {
        return Err(rejected(format!("HTTP {}", status)));
    }

    Ok(body)
}
