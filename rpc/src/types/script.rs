use super::bytes::Bytes;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ScriptType {
	#[serde(rename = "nonstandard")]
	NonStandard,
	#[serde(rename = "pubkey")]
	PubKey,
	#[serde(rename = "pubkeyhash")]
	PubKeyHash,
	#[serde(rename = "scripthash")]
	ScriptHash,
	#[serde(rename = "multisig")]
	Multisig,
	#[serde(rename = "nulldata")]
	NullData,
}

/// decodescript response
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ScriptInfo {
	pub asm: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hex: Option<Bytes>,
	#[serde(rename = "type")]
	pub script_type: ScriptType,
	#[serde(rename = "reqSigs", default, skip_serializing_if = "Option::is_none")]
	pub req_sigs: Option<u32>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub addresses: Vec<String>,
	/// Address of the script wrapped in P2SH.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub p2sh: Option<String>,
}
