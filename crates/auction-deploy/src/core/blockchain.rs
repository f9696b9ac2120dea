//! Blockchain connectivity and contract deployment
//!
//! [`ChainClient`] is the seam between the deployment runner and the
//! network. [`AlloyChainClient`] implements it over JSON-RPC with a local
//! private-key wallet; the provider fills nonce, gas, fees, and chain id.

use crate::types::error::{Error, Result};
use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes, B256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Result of a confirmed contract-creation transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
	pub address: Address,
	pub tx_hash: B256,
	pub block_number: Option<u64>,
	pub deployer: Address,
}

/// Network operations needed to deploy a contract
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ChainClient: Send + Sync {
	/// Chain id reported by the connected node
	async fn chain_id(&self) -> Result<u64>;

	/// Submits `init_code` as a contract-creation transaction and waits for
	/// it to be mined
	///
	/// Fails if the transaction reverts or the receipt carries no contract
	/// address.
	async fn deploy(&self, init_code: Bytes) -> Result<DeployedContract>;
}

/// Alloy-backed chain client signing with a local private key
#[derive(Clone)]
pub struct AlloyChainClient {
	inner: DynProvider,
	deployer: Address,
	receipt_timeout: Option<Duration>,
	poll_interval: Duration,
}

impl std::fmt::Debug for AlloyChainClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AlloyChainClient")
			.field("deployer", &self.deployer)
			.field("receipt_timeout", &self.receipt_timeout)
			.field("inner", &"<dyn Provider>")
			.finish()
	}
}

impl AlloyChainClient {
	/// Connect to an RPC endpoint with a signing wallet
	///
	/// Validates connectivity by retrieving the chain id.
	///
	/// # Arguments
	/// * `rpc_url` - HTTP JSON-RPC endpoint
	/// * `signer` - Key that signs and pays for the deployment
	/// * `receipt_timeout` - Upper bound on the receipt wait; `None` polls until mined
	///
	/// # Returns
	/// A connected client
	///
	/// # Errors
	/// Returns Error::RpcError if the URL is invalid or the node is unreachable
	pub async fn connect(
		rpc_url: &str,
		signer: PrivateKeySigner,
		receipt_timeout: Option<Duration>,
	) -> Result<Self> {
		let url = rpc_url
			.parse()
			.map_err(|e| Error::RpcError(format!("Invalid RPC URL: {}", e)))?;

		let deployer = signer.address();
		let wallet = EthereumWallet::from(signer);
		let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

		// Test connection
		let chain_id = provider
			.get_chain_id()
			.await
			.map_err(|e| Error::RpcError(format!("Failed to connect to {}: {}", rpc_url, e)))?;
		debug!(rpc_url, chain_id, deployer = %deployer, "Connected to RPC endpoint");

		Ok(Self {
			inner: provider.erased(),
			deployer,
			receipt_timeout,
			poll_interval: Duration::from_secs(1),
		})
	}

	/// Override the receipt polling interval
	pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
		self.poll_interval = poll_interval;
		self
	}

	/// Address of the signing account paying for the deployment
	pub fn deployer(&self) -> Address {
		self.deployer
	}

	/// Poll for the transaction receipt
	///
	/// Without a receipt timeout this keeps polling until the transaction is
	/// mined.
	async fn wait(&self, hash: B256) -> Result<TransactionReceipt> {
		let deadline = self.receipt_timeout.map(|timeout| Instant::now() + timeout);

		loop {
			if let Some(receipt) = self
				.inner
				.get_transaction_receipt(hash)
				.await
				.map_err(|e| Error::RpcError(format!("Failed to get receipt: {}", e)))?
			{
				return Ok(receipt);
			}

			if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
				warn!(tx_hash = %hash, "Receipt timeout elapsed; transaction may still be mined");
				return Err(Error::TxNotFound(hash));
			}

			debug!(tx_hash = %hash, "Waiting for receipt");
			tokio::time::sleep(self.poll_interval).await;
		}
	}
}

#[async_trait]
impl ChainClient for AlloyChainClient {
	async fn chain_id(&self) -> Result<u64> {
		self.inner
			.get_chain_id()
			.await
			.map_err(|e| Error::RpcError(format!("Failed to get chain id: {}", e)))
	}

	async fn deploy(&self, init_code: Bytes) -> Result<DeployedContract> {
		let tx = TransactionRequest::default()
			.with_from(self.deployer)
			.with_deploy_code(init_code);

		let pending = self
			.inner
			.send_transaction(tx)
			.await
			.map_err(|e| Error::DeploymentFailed(format!("Failed to send transaction: {}", e)))?;
		let tx_hash = *pending.tx_hash();
		info!(tx_hash = %tx_hash, "Deployment transaction submitted");

		let receipt = self.wait(tx_hash).await?;
		if !receipt.status() {
			return Err(Error::DeploymentReverted(tx_hash));
		}

		let address = receipt
			.contract_address
			.ok_or_else(|| Error::DeploymentFailed("No contract address in receipt".to_string()))?;

		Ok(DeployedContract {
			address,
			tx_hash,
			block_number: receipt.block_number,
			deployer: self.deployer,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Hex;
	use serde_json::{json, Value};
	use wiremock::matchers::{body_partial_json, method};
	use wiremock::{Mock, MockServer, Request, ResponseTemplate};

	const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

	fn rpc_result(result: Value) -> impl Fn(&Request) -> ResponseTemplate {
		move |request: &Request| {
			let body: Value = serde_json::from_slice(&request.body).unwrap_or_default();
			ResponseTemplate::new(200).set_body_json(json!({
				"jsonrpc": "2.0",
				"id": body["id"],
				"result": result,
			}))
		}
	}

	async fn node_with_chain_id(chain_id: &str) -> MockServer {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(body_partial_json(json!({ "method": "eth_chainId" })))
			.respond_with(rpc_result(json!(chain_id)))
			.mount(&server)
			.await;
		server
	}

	#[tokio::test]
	async fn connect_reports_chain_id_and_deployer() {
		let server = node_with_chain_id("0x279f").await;
		let signer = Hex::to_private_key(DEV_KEY).unwrap();

		let client = AlloyChainClient::connect(&server.uri(), signer, Some(Duration::from_secs(5)))
			.await
			.expect("connect");

		assert_eq!(client.chain_id().await.unwrap(), 10143);
		assert_eq!(
			client.deployer().to_checksum(None),
			"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
		);
	}

	#[tokio::test]
	async fn connect_rejects_invalid_url() {
		let signer = Hex::to_private_key(DEV_KEY).unwrap();
		let err = AlloyChainClient::connect("not a url", signer, Some(Duration::from_secs(5)))
			.await
			.unwrap_err();
		assert!(err.to_string().contains("Invalid RPC URL"));
	}

	#[tokio::test]
	async fn connect_fails_when_node_errors() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(500))
			.mount(&server)
			.await;
		let signer = Hex::to_private_key(DEV_KEY).unwrap();

		let err = AlloyChainClient::connect(&server.uri(), signer, Some(Duration::from_secs(5)))
			.await
			.unwrap_err();
		assert!(matches!(err, Error::RpcError(_)));
	}

	const TX_HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";
	const AUCTION: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";

	fn receipt(status: &str, contract_address: Option<&str>) -> Value {
		json!({
			"transactionHash": TX_HASH,
			"transactionIndex": "0x0",
			"blockHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
			"blockNumber": "0x2a",
			"from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
			"to": null,
			"cumulativeGasUsed": "0x30d40",
			"gasUsed": "0x30d40",
			"effectiveGasPrice": "0x3b9aca00",
			"contractAddress": contract_address,
			"logs": [],
			"logsBloom": format!("0x{}", "00".repeat(256)),
			"type": "0x2",
			"status": status,
		})
	}

	/// Answers the calls a wallet provider makes to fill, send, and confirm a
	/// contract creation
	fn deploying_node(receipt: Value) -> impl Fn(&Request) -> ResponseTemplate {
		move |request: &Request| {
			let body: Value = serde_json::from_slice(&request.body).unwrap_or_default();
			let result = match body["method"].as_str().unwrap_or_default() {
				"eth_chainId" => json!("0x279f"),
				"eth_getTransactionCount" => json!("0x0"),
				"eth_estimateGas" => json!("0x30d40"),
				"eth_gasPrice" | "eth_maxPriorityFeePerGas" => json!("0x3b9aca00"),
				"eth_feeHistory" => json!({
					"oldestBlock": "0x29",
					"baseFeePerGas": ["0x3b9aca00", "0x3b9aca00"],
					"gasUsedRatio": [0.5],
					"reward": [["0x3b9aca00"]],
				}),
				"eth_sendRawTransaction" => json!(TX_HASH),
				"eth_getTransactionReceipt" => receipt.clone(),
				other => {
					return ResponseTemplate::new(200).set_body_json(json!({
						"jsonrpc": "2.0",
						"id": body["id"],
						"error": { "code": -32601, "message": format!("method {other} not found") },
					}))
				},
			};
			ResponseTemplate::new(200).set_body_json(json!({
				"jsonrpc": "2.0",
				"id": body["id"],
				"result": result,
			}))
		}
	}

	async fn client_for(
		receipt: Value,
		receipt_timeout: Option<Duration>,
	) -> (MockServer, AlloyChainClient) {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(deploying_node(receipt))
			.mount(&server)
			.await;

		let signer = Hex::to_private_key(DEV_KEY).unwrap();
		let client = AlloyChainClient::connect(&server.uri(), signer, receipt_timeout)
			.await
			.unwrap()
			.with_poll_interval(Duration::from_millis(20));
		(server, client)
	}

	fn init_code() -> Bytes {
		Bytes::from_static(&[0x60, 0x80, 0x60, 0x40, 0x52])
	}

	#[tokio::test]
	async fn deploy_returns_contract_from_receipt() {
		let (_server, client) = client_for(receipt("0x1", Some(AUCTION)), None).await;

		let deployed = client.deploy(init_code()).await.unwrap();

		assert_eq!(deployed.address, AUCTION.parse::<Address>().unwrap());
		assert_eq!(deployed.tx_hash, TX_HASH.parse::<B256>().unwrap());
		assert_eq!(deployed.block_number, Some(42));
		assert_eq!(deployed.deployer, client.deployer());
	}

	#[tokio::test]
	async fn deploy_reports_reverted_transaction() {
		let (_server, client) = client_for(receipt("0x0", Some(AUCTION)), None).await;

		let err = client.deploy(init_code()).await.unwrap_err();
		let expected: B256 = TX_HASH.parse().unwrap();
		assert!(matches!(err, Error::DeploymentReverted(hash) if hash == expected));
	}

	#[tokio::test]
	async fn deploy_requires_contract_address_in_receipt() {
		let (_server, client) = client_for(receipt("0x1", None), None).await;

		let err = client.deploy(init_code()).await.unwrap_err();
		assert!(matches!(err, Error::DeploymentFailed(msg) if msg.contains("No contract address")));
	}

	#[tokio::test]
	async fn receipt_wait_gives_up_after_configured_timeout() {
		let (_server, client) =
			client_for(Value::Null, Some(Duration::from_millis(100))).await;

		let err = client.deploy(init_code()).await.unwrap_err();
		let expected: B256 = TX_HASH.parse().unwrap();
		assert!(matches!(err, Error::TxNotFound(hash) if hash == expected));
	}

	#[tokio::test]
	async fn receipt_wait_without_timeout_keeps_polling() {
		let (_server, client) = client_for(Value::Null, None).await;

		let outcome =
			tokio::time::timeout(Duration::from_millis(300), client.deploy(init_code())).await;
		assert!(outcome.is_err(), "deploy should still be waiting for the receipt");
	}
}
