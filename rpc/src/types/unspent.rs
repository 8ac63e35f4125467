use super::amount;
use super::bytes::Bytes;
use super::hash::H256;

/// Entry of the listunspent response
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Unspent {
	pub txid: H256,
	pub vout: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
	#[serde(rename = "scriptPubKey", default, skip_serializing_if = "Option::is_none")]
	pub script_pubkey: Option<Bytes>,
	#[serde(rename = "redeemScript", default, skip_serializing_if = "Option::is_none")]
	pub redeem_script: Option<Bytes>,
	/// Value in zatoshis.
	#[serde(with = "amount")]
	pub amount: u64,
	pub confirmations: u32,
	#[serde(default)]
	pub spendable: bool,
}

#[cfg(test)]
mod tests {
	use serde_json;
	use super::Unspent;

	#[test]
	fn test_unspent_deserialize() {
		let unspent: Vec<Unspent> = serde_json::from_str(r#"[{
			"txid": "0000000000000000000000000000000000000000000000000000000000000077",
			"vout": 1,
			"generated": false,
			"address": "tmYXBYJj1K7vhejSec5osXK2QsGa5MTisUQ",
			"scriptPubKey": "76a914000000000000000000000000000000000000000088ac",
			"amount": 0.29000000,
			"amountZat": 29000000,
			"confirmations": 6,
			"spendable": true
		}]"#).unwrap();

		assert_eq!(unspent.len(), 1);
		assert_eq!(unspent[0].vout, 1);
		assert_eq!(unspent[0].amount, 29_000_000);
		assert_eq!(unspent[0].redeem_script, None);
		assert!(unspent[0].spendable);
	}
}
