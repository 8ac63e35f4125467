//! Blocking JSON-RPC client of a zcashd-compatible node.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use jsonrpc_core::{self, MethodCall, Params, Id, Version};
use hex::ToHex;
use reqwest;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{self, Value};
use chain::{DecodedTransaction, TransactionDecoder};
use primitives::bytes::Bytes as GlobalBytes;
use types::{
	Bytes, H256, Transaction, GetRawTransactionResponse, WalletTransaction, TransactionInput,
	TransactionOutputs, Unspent, ScriptInfo, Recipient, OperationStatus, OperationState,
};
use {poll, Error};

/// Interval between two polls of the node.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Upper bound of confirmations passed to `listunspent`.
pub const MAX_CONFIRMATIONS: u32 = 9_999_999;

/// Node endpoint and credentials.
#[derive(Debug, PartialEq, Clone)]
pub struct RpcConfig {
	pub url: String,
	pub user: Option<String>,
	pub password: Option<String>,
	/// Timeout of a single request.
	pub timeout: Duration,
}

/// Carries one serialized request to the node and returns the response body.
pub trait Transport {
	fn send(&self, request: &str) -> Result<String, Error>;
}

/// HTTP transport with optional basic auth.
pub struct HttpTransport {
	url: String,
	auth: Option<(String, Option<String>)>,
	client: reqwest::blocking::Client,
}

impl HttpTransport {
	pub fn new(config: &RpcConfig) -> Result<Self, Error> {
		let client = reqwest::blocking::Client::builder()
			.timeout(config.timeout)
			.build()?;

		Ok(HttpTransport {
			url: config.url.clone(),
			auth: config.user.clone().map(|user| (user, config.password.clone())),
			client: client,
		})
	}
}

impl Transport for HttpTransport {
	fn send(&self, request: &str) -> Result<String, Error> {
		let mut builder = self.client.post(&self.url)
			.header(CONTENT_TYPE, "application/json")
			.body(request.to_owned());

		if let Some((ref user, ref password)) = self.auth {
			builder = builder.basic_auth(user, password.as_ref());
		}

		let response = builder.send()?;
		let status = response.status();
		// zcashd reports RPC errors with a 500 status and a regular envelope
		let body = response.text()?;
		if body.trim().is_empty() && !status.is_success() {
			return Err(Error::Transport(format!("HTTP {}", status)));
		}

		Ok(body)
	}
}

#[derive(Deserialize)]
struct Response {
	#[serde(default)]
	result: Option<Value>,
	#[serde(default)]
	error: Option<jsonrpc_core::Error>,
}

pub struct RpcClient<T = HttpTransport> {
	transport: T,
	next_id: AtomicUsize,
	poll_interval: Duration,
}

impl RpcClient<HttpTransport> {
	pub fn http(config: &RpcConfig) -> Result<Self, Error> {
		HttpTransport::new(config).map(RpcClient::new)
	}
}

impl<T> RpcClient<T> where T: Transport {
	pub fn new(transport: T) -> Self {
		RpcClient {
			transport: transport,
			next_id: AtomicUsize::new(1),
			poll_interval: DEFAULT_POLL_INTERVAL,
		}
	}

	pub fn with_poll_interval(mut self, interval: Duration) -> Self {
		self.poll_interval = interval;
		self
	}

	/// Sends a single request and unwraps the response envelope.
	///
	/// A missing or `null` result is handed to `R` as JSON `null`.
	pub fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R, Error> where R: DeserializeOwned {
		let id = self.next_id.fetch_add(1, Ordering::SeqCst);
		let request = MethodCall {
			jsonrpc: Some(Version::V2),
			method: method.to_owned(),
			params: Params::Array(params),
			id: Id::Num(id as u64),
		};

		let request = serde_json::to_string(&request)?;
		trace!(target: "rpc", "Request #{}: {}", id, request);

		let body = self.transport.send(&request)?;
		trace!(target: "rpc", "Response #{}: {}", id, body);

		let response: Response = serde_json::from_str(&body)?;
		if let Some(error) = response.error {
			return Err(Error::Rpc {
				code: error.code.code(),
				message: error.message,
			});
		}

		serde_json::from_value(response.result.unwrap_or(Value::Null))
			.map_err(|err| Error::InvalidResponse(format!("{}: {}", method, err)))
	}

	pub fn decode_raw_transaction(&self, raw: &[u8]) -> Result<Transaction, Error> {
		self.call("decoderawtransaction", vec![raw.to_hex::<String>().into()])
	}

	pub fn get_raw_transaction(&self, txid: &H256, verbose: bool) -> Result<GetRawTransactionResponse, Error> {
		self.call("getrawtransaction", vec![param(txid)?, (verbose as u8).into()])
	}

	/// Broadcasts a signed transaction. Never retried.
	pub fn send_raw_transaction(&self, raw: &[u8]) -> Result<H256, Error> {
		let txid: H256 = self.call("sendrawtransaction", vec![raw.to_hex::<String>().into()])?;
		info!(target: "rpc", "Broadcast transaction {}", txid);
		Ok(txid)
	}

	pub fn create_raw_transaction(
		&self,
		inputs: &[TransactionInput],
		outputs: &TransactionOutputs,
		lock_time: Option<u32>,
		expiry_height: Option<u32>,
	) -> Result<GlobalBytes, Error> {
		let mut params = vec![param(&inputs)?, param(outputs)?];
		match (lock_time, expiry_height) {
			(lock_time, Some(expiry_height)) => {
				params.push(lock_time.unwrap_or_default().into());
				params.push(expiry_height.into());
			},
			(Some(lock_time), None) => params.push(lock_time.into()),
			(None, None) => (),
		}

		let raw: Bytes = self.call("createrawtransaction", params)?;
		Ok(raw.into())
	}

	pub fn list_unspent(&self, min_conf: u32, max_conf: u32, addresses: &[String]) -> Result<Vec<Unspent>, Error> {
		self.call("listunspent", vec![min_conf.into(), max_conf.into(), param(&addresses)?])
	}

	/// Sum of the unspent outputs of `address`, in zatoshis.
	pub fn get_balance(&self, address: &str, min_conf: u32) -> Result<u64, Error> {
		let unspent = self.list_unspent(min_conf, MAX_CONFIRMATIONS, &[address.to_owned()])?;
		unspent.iter().try_fold(0u64, |acc, output| acc.checked_add(output.amount))
			.ok_or_else(|| Error::InvalidResponse(format!("balance of {} overflows", address)))
	}

	pub fn get_transaction(&self, txid: &H256) -> Result<WalletTransaction, Error> {
		self.call("gettransaction", vec![param(txid)?])
	}

	pub fn get_block_count(&self) -> Result<u32, Error> {
		self.call("getblockcount", vec![])
	}

	pub fn decode_script(&self, script: &[u8]) -> Result<ScriptInfo, Error> {
		self.call("decodescript", vec![script.to_hex::<String>().into()])
	}

	/// New transparent address of the node wallet.
	pub fn get_new_address(&self) -> Result<String, Error> {
		self.call("getnewaddress", vec![])
	}

	/// Starts an asynchronous send and returns its operation id.
	pub fn z_send_many(&self, from: &str, recipients: &[Recipient], min_conf: u32) -> Result<String, Error> {
		self.call("z_sendmany", vec![from.into(), param(&recipients)?, min_conf.into()])
	}

	/// Results of finished operations. Unfinished ones are left out by the node.
	pub fn z_get_operation_result(&self, ids: &[String]) -> Result<Vec<OperationStatus>, Error> {
		self.call("z_getoperationresult", vec![param(&ids)?])
	}

	/// Waits until the wallet sees `txid` with at least `confirmations` confirmations.
	pub fn wait_for_confirmation(&self, txid: &H256, confirmations: u32, timeout: Duration) -> Result<u32, Error> {
		let what = format!("Transaction {}", txid);
		poll(&what, self.poll_interval, timeout, || {
			let transaction = self.get_transaction(txid)?;
			if transaction.confirmations >= confirmations as i64 {
				Ok(Some(transaction.confirmations as u32))
			} else {
				debug!(target: "rpc", "{} has {} of {} confirmations", what, transaction.confirmations, confirmations);
				Ok(None)
			}
		})
	}

	/// Waits for a `z_sendmany` operation to finish successfully.
	pub fn wait_for_operation(&self, id: &str, timeout: Duration) -> Result<OperationStatus, Error> {
		let what = format!("Operation {}", id);
		let ids = [id.to_owned()];
		poll(&what, self.poll_interval, timeout, || {
			let status = match self.z_get_operation_result(&ids)?.into_iter().next() {
				Some(status) => status,
				None => return Ok(None),
			};

			let state = status.status;
			match state {
				OperationState::Success => Ok(Some(status)),
				OperationState::Failed | OperationState::Cancelled => {
					let reason = status.error
						.map(|error| format!("{} ({})", error.message, error.code))
						.unwrap_or_else(|| format!("{:?}", state));
					Err(Error::OperationFailed(format!("{}: {}", id, reason)))
				},
				OperationState::Queued | OperationState::Executing => Ok(None),
			}
		})
	}
}

impl<T> TransactionDecoder for RpcClient<T> where T: Transport {
	fn decode_raw_transaction(&self, raw: &[u8]) -> Result<DecodedTransaction, String> {
		RpcClient::decode_raw_transaction(self, raw)
			.map_err(|err| err.to_string())?
			.to_decoded()
	}
}

fn param<S>(value: &S) -> Result<Value, Error> where S: Serialize {
	serde_json::to_value(value).map_err(|err| Error::InvalidResponse(err.to_string()))
}
