use crate::core::{SwapError, SwapResult};
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use log::{debug, info};

/// Local signer used to derive the caller address for a swap.
///
/// The key stays inside the signer; only the address is ever exposed.
pub struct WalletSigner {
    signer: PrivateKeySigner,
}

impl WalletSigner {
    pub fn from_private_key(private_key: &str) -> SwapResult<Self> {
        let trimmed = private_key.trim();
        let key = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        // The parse error may echo input, so it is not forwarded.
        let signer = key.parse::<PrivateKeySigner>().map_err(|_| {
            SwapError::ConfigError("PRIVATE_KEY is not a valid secp256k1 key".to_string())
        })?;

        Ok(Self { signer })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Confirm the RPC endpoint serves the chain the swap is priced on.
    pub async fn verify_chain(&self, rpc_url: &str, expected_chain_id: u64) -> SwapResult<()> {
        let url: Url = rpc_url
            .parse()
            .map_err(|_| SwapError::ConfigError("RPC_URL is not a valid URL".to_string()))?;
        let provider = ProviderBuilder::new().connect_http(url);

        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| SwapError::NetworkError(format!("RPC chain id request failed: {}", e)))?;
        debug!("RPC reports chain id {}", chain_id);

        if chain_id != expected_chain_id {
            return Err(SwapError::ConfigError(format!(
                "RPC_URL serves chain {} but swaps are priced on chain {}",
                chain_id, expected_chain_id
            )));
        }

        info!("Using wallet {} on chain {}", self.address(), chain_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use mockito::{Matcher, Server};
    use serde_json::json;

    // Well-known first development account of hardhat/anvil.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn test_address_from_key_with_and_without_prefix() {
        let with_prefix = WalletSigner::from_private_key(DEV_KEY).unwrap();
        assert_eq!(with_prefix.address(), DEV_ADDRESS);

        let without_prefix = WalletSigner::from_private_key(&DEV_KEY[2..]).unwrap();
        assert_eq!(without_prefix.address(), DEV_ADDRESS);
    }

    #[test]
    fn test_invalid_key_does_not_leak() {
        let bad_key = "0xnot-a-key-but-still-secret";
        let err = match WalletSigner::from_private_key(bad_key) {
            Err(e) => e,
            Ok(_) => panic!("invalid key accepted"),
        };
        assert!(matches!(err, SwapError::ConfigError(_)));
        assert!(!err.to_string().contains("still-secret"));
    }

    async fn rpc_returning_chain(server: &mut Server, chain_hex: &str) -> mockito::Mock {
        server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({"method": "eth_chainId"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"jsonrpc": "2.0", "id": 0, "result": chain_hex}).to_string())
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_verify_chain_accepts_matching_rpc() {
        let mut server = Server::new_async().await;
        let mock = rpc_returning_chain(&mut server, "0xa4b1").await;

        let wallet = WalletSigner::from_private_key(DEV_KEY).unwrap();
        wallet.verify_chain(&server.url(), 42161).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_verify_chain_rejects_other_chain() {
        let mut server = Server::new_async().await;
        let _mock = rpc_returning_chain(&mut server, "0x1").await;

        let wallet = WalletSigner::from_private_key(DEV_KEY).unwrap();
        let err = wallet.verify_chain(&server.url(), 42161).await.unwrap_err();
        assert!(matches!(err, SwapError::ConfigError(_)));
    }
}
