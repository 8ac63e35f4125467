//! Decoded view of a raw transaction.
//!
//! Holds only the transparent part of a transaction: what is needed to find
//! an input inside the raw bytes and to build its signature hash.

use std::fmt;
use bytes::Bytes;
use hash::H256;
use ser::{Serializable, Deserializable, Stream, Reader, Error as ReaderError};

#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct OutPoint {
	/// Previous transaction hash, in internal byte order.
	pub hash: H256,
	pub index: u32,
}

impl OutPoint {
	pub fn new(hash: H256, index: u32) -> Self {
		OutPoint {
			hash: hash,
			index: index,
		}
	}
}

impl fmt::Display for OutPoint {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.hash.to_reversed_str(), self.index)
	}
}

impl Serializable for OutPoint {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.hash)
			.append(&self.index);
	}

	fn serialized_size(&self) -> usize {
		36
	}
}

impl Deserializable for OutPoint {
	fn deserialize(reader: &mut Reader) -> Result<Self, ReaderError> where Self: Sized {
		Ok(OutPoint {
			hash: reader.read()?,
			index: reader.read()?,
		})
	}
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct DecodedInput {
	pub previous_output: OutPoint,
	pub script_sig: Bytes,
	pub sequence: u32,
}

impl Serializable for DecodedInput {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.previous_output)
			.append(&self.script_sig)
			.append(&self.sequence);
	}
}

impl Deserializable for DecodedInput {
	fn deserialize(reader: &mut Reader) -> Result<Self, ReaderError> where Self: Sized {
		Ok(DecodedInput {
			previous_output: reader.read()?,
			script_sig: reader.read()?,
			sequence: reader.read()?,
		})
	}
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct DecodedOutput {
	/// Value in zatoshis.
	pub value: u64,
	pub script_pubkey: Bytes,
}

impl Serializable for DecodedOutput {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.value)
			.append(&self.script_pubkey);
	}
}

impl Deserializable for DecodedOutput {
	fn deserialize(reader: &mut Reader) -> Result<Self, ReaderError> where Self: Sized {
		Ok(DecodedOutput {
			value: reader.read()?,
			script_pubkey: reader.read()?,
		})
	}
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct DecodedTransaction {
	/// Version without the overwintered flag.
	pub version: u32,
	pub overwintered: bool,
	pub version_group_id: u32,
	pub inputs: Vec<DecodedInput>,
	pub outputs: Vec<DecodedOutput>,
	pub lock_time: u32,
	pub expiry_height: u32,
}

impl DecodedTransaction {
	pub fn inputs(&self) -> &[DecodedInput] {
		&self.inputs
	}

	pub fn outputs(&self) -> &[DecodedOutput] {
		&self.outputs
	}
}

/// Turns raw transaction bytes into a decoded view.
///
/// Implemented locally by `LocalDecoder` and remotely by the node RPC client.
pub trait TransactionDecoder {
	fn decode_raw_transaction(&self, raw: &[u8]) -> Result<DecodedTransaction, String>;
}

impl<'a, T> TransactionDecoder for &'a T where T: TransactionDecoder + ?Sized {
	fn decode_raw_transaction(&self, raw: &[u8]) -> Result<DecodedTransaction, String> {
		(**self).decode_raw_transaction(raw)
	}
}

impl<T> TransactionDecoder for Box<T> where T: TransactionDecoder + ?Sized {
	fn decode_raw_transaction(&self, raw: &[u8]) -> Result<DecodedTransaction, String> {
		(**self).decode_raw_transaction(raw)
	}
}
