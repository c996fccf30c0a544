use crate::core::{SwapError, SwapResult};
use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Side of the swap sent as `side`. Only exact-input sells are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSide {
    Sell,
}

impl fmt::Display for SwapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Parameters of a single quote, fixed for the lifetime of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub src_token: Address,
    pub src_decimals: u8,
    pub dest_token: Address,
    pub dest_decimals: u8,
    pub amount: U256,
    pub side: SwapSide,
    pub user_address: Option<Address>,
}

impl SwapRequest {
    /// Same pair and caller, different sell size.
    pub fn with_amount(&self, amount: U256) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// Query string for the aggregator's price endpoint.
    pub fn to_query(&self, chain_id: u64) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("srcToken", self.src_token.to_checksum(None)),
            ("srcDecimals", self.src_decimals.to_string()),
            ("destToken", self.dest_token.to_checksum(None)),
            ("destDecimals", self.dest_decimals.to_string()),
            ("amount", self.amount.to_string()),
            ("side", self.side.to_string()),
            ("network", chain_id.to_string()),
        ];
        if let Some(user) = self.user_address {
            query.push(("userAddress", user.to_checksum(None)));
        }
        query
    }
}

/// Route chosen by the aggregator. Its shape belongs to the service, so the
/// raw JSON is kept and handed back unchanged when building a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceRoute(Value);

impl PriceRoute {
    const REQUIRED_FIELDS: [&'static str; 4] = ["srcToken", "destToken", "srcAmount", "destAmount"];

    pub fn new(value: Value) -> SwapResult<Self> {
        if !value.is_object() {
            return Err(SwapError::UpstreamQuoteError(
                "price route is not a JSON object".to_string(),
            ));
        }
        let route = Self(value);
        for field in Self::REQUIRED_FIELDS {
            route.str_field(field)?;
        }
        Ok(route)
    }

    pub fn src_token(&self) -> SwapResult<&str> {
        self.str_field("srcToken")
    }

    pub fn dest_token(&self) -> SwapResult<&str> {
        self.str_field("destToken")
    }

    pub fn src_amount(&self) -> SwapResult<&str> {
        self.str_field("srcAmount")
    }

    pub fn dest_amount(&self) -> SwapResult<&str> {
        self.str_field("destAmount")
    }

    pub fn src_usd(&self) -> SwapResult<Decimal> {
        self.usd_field("srcUSD")
    }

    pub fn dest_usd(&self) -> SwapResult<Decimal> {
        self.usd_field("destUSD")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn str_field(&self, name: &str) -> SwapResult<&str> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SwapError::UpstreamQuoteError(format!("price route is missing {}", name))
            })
    }

    // The API reports USD values as strings, older versions as numbers.
    fn usd_field(&self, name: &str) -> SwapResult<Decimal> {
        let parsed = match self.0.get(name) {
            Some(Value::String(s)) => Decimal::from_str(s).ok(),
            Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
                .or_else(|_| Decimal::from_scientific(&n.to_string()))
                .ok(),
            _ => None,
        };
        parsed.ok_or_else(|| {
            SwapError::UpstreamQuoteError(format!("price route has no usable {}", name))
        })
    }
}

/// Body of the build-transaction call: the four route fields copied verbatim
/// plus the whole route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTxRequest<'a> {
    pub src_token: &'a str,
    pub dest_token: &'a str,
    pub src_amount: &'a str,
    pub dest_amount: &'a str,
    pub price_route: &'a PriceRoute,
    pub user_address: String,
}

impl<'a> BuildTxRequest<'a> {
    pub fn from_route(route: &'a PriceRoute, user_address: Address) -> SwapResult<Self> {
        Ok(Self {
            src_token: route.src_token()?,
            dest_token: route.dest_token()?,
            src_amount: route.src_amount()?,
            dest_amount: route.dest_amount()?,
            price_route: route,
            user_address: user_address.to_checksum(None),
        })
    }
}

/// Transaction the aggregator built for a route, ready to be signed elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransactionParams(Value);

impl TransactionParams {
    pub fn new(value: Value) -> SwapResult<Self> {
        let params = Self(value);
        params.data()?;
        Ok(params)
    }

    pub fn data(&self) -> SwapResult<&str> {
        self.str_field("data")
    }

    pub fn to(&self) -> SwapResult<&str> {
        self.str_field("to")
    }

    pub fn value(&self) -> SwapResult<&str> {
        self.str_field("value")
    }

    fn str_field(&self, name: &str) -> SwapResult<&str> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SwapError::UpstreamBuildError(format!("transaction is missing {}", name))
            })
    }
}

#[derive(Debug, Clone)]
pub struct BatchQuote {
    pub label: String,
    pub amount: U256,
    pub route: PriceRoute,
}
