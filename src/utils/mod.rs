use crate::core::{SwapError, SwapResult};
use alloy::primitives::{address, Address, U256};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse token symbol or address to Address (symbols resolve on Arbitrum One)
pub fn parse_token_identifier(input: &str) -> Option<Address> {
    // First try to parse as an address
    if let Ok(address) = Address::from_str(input) {
        return Some(address);
    }

    // Common token mappings
    match input.to_uppercase().as_str() {
        "ETH" => Some(address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE")),
        "WETH" => Some(address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1")),
        "USDC" => Some(address!("af88d065e77c8cC2239327C5EDb3A432268e5831")),
        "USDT" => Some(address!("Fd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9")),
        "ARB" => Some(address!("912CE59144191C1204E64559FE8253a0e49E6548")),
        _ => None,
    }
}

/// Parse a sell amount given in the token's smallest unit
pub fn parse_amount(input: &str) -> SwapResult<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SwapError::InvalidAmount(format!(
            "{} is not an integer amount in smallest units",
            input
        )));
    }

    let amount = U256::from_str_radix(trimmed, 10)
        .map_err(|e| SwapError::InvalidAmount(format!("{}: {}", input, e)))?;

    if amount.is_zero() {
        return Err(SwapError::InvalidAmount("amount must be greater than 0".to_string()));
    }

    Ok(amount)
}

/// USD value lost between source and destination, rounded to cents
pub fn usd_difference(src_usd: Decimal, dest_usd: Decimal) -> Decimal {
    (src_usd - dest_usd).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_parse_token_identifier() {
        // Test known tokens
        assert!(parse_token_identifier("WETH").is_some());
        assert!(parse_token_identifier("usdc").is_some()); // Case insensitive

        // Test address parsing
        assert_eq!(
            parse_token_identifier("0x221A0f68770658C15B525d0F89F5da2baAB5f321"),
            Some(address!("221A0f68770658C15B525d0F89F5da2baAB5f321"))
        );

        // Test unknown token
        assert!(parse_token_identifier("UNKNOWN").is_none());
        assert!(parse_token_identifier("0x1234").is_none());
    }

    #[test_case("1000000000000000000", 1_000_000_000_000_000_000u128 ; "one ether")]
    #[test_case(" 42 ", 42 ; "surrounding whitespace")]
    #[test_case("1", 1 ; "smallest unit")]
    fn test_parse_amount(input: &str, expected: u128) {
        assert_eq!(parse_amount(input).unwrap(), U256::from(expected));
    }

    #[test]
    fn test_parse_amount_beyond_u64() {
        let amount = parse_amount("995173078713564046713").unwrap();
        assert_eq!(amount.to_string(), "995173078713564046713");
    }

    #[test_case("" ; "empty")]
    #[test_case("1.5" ; "fractional")]
    #[test_case("-10" ; "negative")]
    #[test_case("1e18" ; "scientific")]
    #[test_case("0" ; "zero")]
    fn test_parse_amount_rejects(input: &str) {
        assert!(matches!(parse_amount(input), Err(SwapError::InvalidAmount(_))));
    }

    #[test]
    fn test_usd_difference() {
        assert_eq!(
            usd_difference(Decimal::new(181025, 2), Decimal::new(180550, 2)),
            Decimal::new(475, 2)
        );
        assert_eq!(
            usd_difference(Decimal::new(100005, 3), Decimal::ZERO),
            Decimal::new(10001, 2)
        );
        assert_eq!(
            usd_difference(Decimal::new(99, 0), Decimal::new(100, 0)),
            Decimal::new(-1, 0)
        );
    }
}
