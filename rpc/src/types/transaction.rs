use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde_json::{self, Value};
use chain::{DecodedTransaction, DecodedInput, DecodedOutput, OutPoint};
use super::amount;
use super::bytes::Bytes;
use super::hash::H256;
use super::script::ScriptType;

/// Input of `createrawtransaction`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
	pub txid: H256,
	pub vout: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sequence: Option<u32>,
}

/// Output of `createrawtransaction`, paying to a transparent address.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionOutputWithAddress {
	pub address: String,
	/// Value in zatoshis.
	pub amount: u64,
}

/// Outputs of `createrawtransaction`, written as an `address: amount` object.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TransactionOutputs {
	pub outputs: Vec<TransactionOutputWithAddress>,
}

impl Serialize for TransactionOutputs {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
		struct Amount(u64);

		impl Serialize for Amount {
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
				amount::serialize(&self.0, serializer)
			}
		}

		let mut map = serializer.serialize_map(Some(self.outputs.len()))?;
		for output in &self.outputs {
			map.serialize_entry(&output.address, &Amount(output.amount))?;
		}
		map.end()
	}
}

/// Input script as printed by the node.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct TransactionInputScript {
	pub asm: String,
	pub hex: Bytes,
}

/// Output script as printed by the node.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TransactionOutputScript {
	pub asm: String,
	pub hex: Bytes,
	#[serde(rename = "reqSigs", default)]
	pub req_sigs: u32,
	#[serde(rename = "type")]
	pub script_type: ScriptType,
	#[serde(default)]
	pub addresses: Vec<String>,
}

/// Input of a decoded transaction. Coinbase inputs carry `coinbase` instead
/// of a previous output and a script.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SignedTransactionInput {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub txid: Option<H256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vout: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub coinbase: Option<Bytes>,
	#[serde(rename = "scriptSig", default, skip_serializing_if = "Option::is_none")]
	pub script_sig: Option<TransactionInputScript>,
	pub sequence: u32,
}

/// Output of a decoded transaction.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SignedTransactionOutput {
	/// Value in zatoshis.
	#[serde(with = "amount")]
	pub value: u64,
	#[serde(rename = "valueZat", default, skip_serializing_if = "Option::is_none")]
	pub value_zat: Option<u64>,
	pub n: u32,
	#[serde(rename = "scriptPubKey")]
	pub script: TransactionOutputScript,
}

/// Transaction as returned by `decoderawtransaction` and verbose `getrawtransaction`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Transaction {
	pub txid: H256,
	#[serde(default)]
	pub overwintered: bool,
	pub version: u32,
	/// Hex-encoded version group id, overwintered transactions only.
	#[serde(rename = "versiongroupid", default, skip_serializing_if = "Option::is_none")]
	pub version_group_id: Option<String>,
	#[serde(rename = "locktime")]
	pub lock_time: u32,
	#[serde(rename = "expiryheight", default, skip_serializing_if = "Option::is_none")]
	pub expiry_height: Option<u32>,
	pub vin: Vec<SignedTransactionInput>,
	pub vout: Vec<SignedTransactionOutput>,
	/// Raw transaction, verbose `getrawtransaction` only.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hex: Option<Bytes>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub blockhash: Option<H256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub confirmations: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub height: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub blocktime: Option<u64>,
}

impl Transaction {
	/// Converts the node's view into the decoded view used for patching and signing.
	pub fn to_decoded(&self) -> Result<DecodedTransaction, String> {
		let version_group_id = match self.version_group_id {
			Some(ref id) => u32::from_str_radix(id, 16)
				.map_err(|err| format!("invalid version group id {}: {}", id, err))?,
			None => 0,
		};

		let inputs = self.vin.iter()
			.map(|input| match (input.txid, input.vout, &input.coinbase) {
				(Some(txid), Some(vout), _) => Ok(DecodedInput {
					previous_output: OutPoint::new(txid.into(), vout),
					script_sig: input.script_sig.as_ref()
						.map(|script| script.hex.clone().into())
						.unwrap_or_default(),
					sequence: input.sequence,
				}),
				(_, _, &Some(ref coinbase)) => Ok(DecodedInput {
					previous_output: OutPoint::new(Default::default(), u32::max_value()),
					script_sig: coinbase.clone().into(),
					sequence: input.sequence,
				}),
				_ => Err("input without previous output".to_owned()),
			})
			.collect::<Result<Vec<_>, _>>()?;

		let outputs = self.vout.iter()
			.map(|output| DecodedOutput {
				value: output.value_zat.unwrap_or(output.value),
				script_pubkey: output.script.hex.clone().into(),
			})
			.collect();

		Ok(DecodedTransaction {
			version: self.version,
			overwintered: self.overwintered,
			version_group_id: version_group_id,
			inputs: inputs,
			outputs: outputs,
			lock_time: self.lock_time,
			expiry_height: self.expiry_height.unwrap_or_default(),
		})
	}
}

/// getrawtransaction response
#[derive(Debug, PartialEq, Clone)]
pub enum GetRawTransactionResponse {
	/// Return transaction as raw bytes
	Raw(Bytes),
	/// Return transaction as verbose structure
	Verbose(Transaction),
}

impl Serialize for GetRawTransactionResponse {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
		match *self {
			GetRawTransactionResponse::Raw(ref raw_transaction) => raw_transaction.serialize(serializer),
			GetRawTransactionResponse::Verbose(ref verbose_transaction) => verbose_transaction.serialize(serializer),
		}
	}
}

impl<'a> Deserialize<'a> for GetRawTransactionResponse {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'a> {
		match Value::deserialize(deserializer)? {
			Value::String(raw) => serde_json::from_value(Value::String(raw))
				.map(GetRawTransactionResponse::Raw)
				.map_err(D::Error::custom),
			verbose @ Value::Object(_) => serde_json::from_value(verbose)
				.map(GetRawTransactionResponse::Verbose)
				.map_err(D::Error::custom),
			other => Err(D::Error::custom(format!("unexpected getrawtransaction result {}", other))),
		}
	}
}

/// gettransaction response, for transactions known to the node wallet
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WalletTransaction {
	pub txid: H256,
	/// Negative when the transaction conflicts with the best chain.
	pub confirmations: i64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub blockhash: Option<H256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time: Option<u64>,
	pub hex: Bytes,
}

/// Recipient of `z_sendmany`.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Recipient {
	pub address: String,
	#[serde(with = "amount")]
	pub amount: u64,
	/// Hex-encoded memo, shielded recipients only.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub memo: Option<String>,
}
