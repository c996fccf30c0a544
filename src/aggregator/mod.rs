pub mod paraswap;
pub mod retry;

use crate::core::{PriceRoute, SwapRequest, SwapResult, TransactionParams};
use alloy::primitives::Address;

pub use paraswap::ParaSwapClient;
pub use retry::RetryPolicy;

/// A swap-aggregation service that can price a swap and build its calldata.
#[async_trait::async_trait]
pub trait SwapAggregator: Send + Sync {
    async fn get_price_route(&self, request: &SwapRequest) -> SwapResult<PriceRoute>;

    async fn build_transaction(
        &self,
        route: &PriceRoute,
        user_address: Address,
        ignore_checks: bool,
    ) -> SwapResult<TransactionParams>;
}
