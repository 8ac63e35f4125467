//! Structural walk over the transparent part of a raw transaction.
//!
//! Every known transaction format is read field by field, recording the
//! offset of each input's scriptSig. Fields after the transparent outputs
//! (JoinSplits, Sapling and Orchard bundles) are never interpreted.
//!
//! ```text
//! v1, v2      version | vin | vout | lock_time
//! v3, v4      header | version_group_id | vin | vout | lock_time | expiry_height
//! v5          header | version_group_id | consensus_branch_id | lock_time | expiry_height | vin | vout
//! ```

use std::ops::Range;
use bytes::Bytes;
use ser::{Reader, CompactInteger};
use constants::{
	OVERWINTERED_FLAG, BTC_TX_VERSION, SPROUT_TX_VERSION, OVERWINTER_TX_VERSION, SAPLING_TX_VERSION,
	NU5_TX_VERSION, OVERWINTER_TX_VERSION_GROUP_ID, SAPLING_TX_VERSION_GROUP_ID, NU5_TX_VERSION_GROUP_ID,
};
use decoded::{OutPoint, DecodedOutput};
use Error;

/// Location of one input inside the raw bytes.
#[derive(Debug, PartialEq, Clone)]
pub struct InputLayout {
	pub previous_output: OutPoint,
	/// Offset of the previous output hash.
	pub offset: usize,
	/// Offset of the scriptSig length prefix.
	pub script_offset: usize,
	/// Size of the scriptSig length prefix.
	pub script_len_size: usize,
	pub script_len: usize,
	pub sequence: u32,
}

impl InputLayout {
	/// Bytes covered by the length prefix and the script itself.
	pub fn script_field(&self) -> Range<usize> {
		self.script_offset..self.script_offset + self.script_len_size + self.script_len
	}

	/// Bytes of the script alone.
	pub fn script_range(&self) -> Range<usize> {
		self.script_offset + self.script_len_size..self.script_offset + self.script_len_size + self.script_len
	}
}

#[derive(Debug, PartialEq, Clone)]
pub struct TransactionLayout {
	/// Serialized header, with the overwintered flag.
	pub header: u32,
	pub version_group_id: u32,
	pub consensus_branch_id: Option<u32>,
	pub inputs: Vec<InputLayout>,
	pub outputs: Vec<DecodedOutput>,
	pub lock_time: u32,
	pub expiry_height: u32,
	/// Offset of the first byte after the transparent part.
	pub transparent_end: usize,
}

impl TransactionLayout {
	pub fn version(&self) -> u32 {
		self.header & !OVERWINTERED_FLAG
	}

	pub fn overwintered(&self) -> bool {
		self.header & OVERWINTERED_FLAG != 0
	}

	pub fn parse(raw: &[u8]) -> Result<Self, Error> {
		let mut reader = Reader::new(raw);
		let header: u32 = reader.read()?;
		let overwintered = header & OVERWINTERED_FLAG != 0;
		let version = header & !OVERWINTERED_FLAG;

		let version_group_id = if overwintered {
			reader.read()?
		} else {
			0
		};

		match (overwintered, version, version_group_id) {
			(false, BTC_TX_VERSION, _) |
			(false, SPROUT_TX_VERSION, _) |
			(true, OVERWINTER_TX_VERSION, OVERWINTER_TX_VERSION_GROUP_ID) |
			(true, SAPLING_TX_VERSION, SAPLING_TX_VERSION_GROUP_ID) |
			(true, NU5_TX_VERSION, NU5_TX_VERSION_GROUP_ID) => (),
			_ => return Err(Error::UnsupportedVersion(header)),
		}

		let is_nu5 = version == NU5_TX_VERSION;
		let (consensus_branch_id, mut lock_time, mut expiry_height) = if is_nu5 {
			(Some(reader.read()?), reader.read()?, reader.read()?)
		} else {
			(None, 0, 0)
		};

		let inputs = read_inputs(&mut reader)?;
		let outputs: Vec<DecodedOutput> = reader.read_list()?;

		if !is_nu5 {
			lock_time = reader.read()?;
			if overwintered {
				expiry_height = reader.read()?;
			}
		}

		let layout = TransactionLayout {
			header: header,
			version_group_id: version_group_id,
			consensus_branch_id: consensus_branch_id,
			inputs: inputs,
			outputs: outputs,
			lock_time: lock_time,
			expiry_height: expiry_height,
			transparent_end: reader.position(),
		};

		Ok(layout)
	}

	/// Script bytes of input `index` as found in `raw`.
	pub fn script_sig(&self, raw: &[u8], index: usize) -> Option<Bytes> {
		self.inputs.get(index)
			.and_then(|input| raw.get(input.script_range()))
			.map(Into::into)
	}
}

fn read_inputs(reader: &mut Reader) -> Result<Vec<InputLayout>, Error> {
	let count: usize = reader.read::<CompactInteger>()?.into();
	let mut inputs = Vec::with_capacity(::std::cmp::min(count, reader.remaining().len() / 41));

	for _ in 0..count {
		let offset = reader.position();
		let previous_output: OutPoint = reader.read()?;
		let script_offset = reader.position();
		let script_len: usize = reader.read::<CompactInteger>()?.into();
		let script_len_size = reader.position() - script_offset;
		reader.skip(script_len)?;
		let sequence = reader.read()?;

		inputs.push(InputLayout {
			previous_output: previous_output,
			offset: offset,
			script_offset: script_offset,
			script_len_size: script_len_size,
			script_len: script_len,
			sequence: sequence,
		});
	}

	Ok(inputs)
}

#[cfg(test)]
mod tests {
	use hash::H256;
	use ser::Error as ReaderError;
	use decoded::{OutPoint, DecodedInput, DecodedOutput};
	use unsigned::UnsignedTransaction;
	use Error;
	use super::TransactionLayout;

	fn sample(version: u32) -> UnsignedTransaction {
		let mut tx = UnsignedTransaction::with_version(version);
		tx.inputs = vec![
			DecodedInput {
				previous_output: OutPoint::new(H256::from(0x11), 0),
				script_sig: Default::default(),
				sequence: 0xffffffff,
			},
			DecodedInput {
				previous_output: OutPoint::new(H256::from(0x22), 7),
				script_sig: vec![0x51; 300].into(),
				sequence: 0xfffffffe,
			},
		];
		tx.outputs = vec![DecodedOutput {
			value: 50_000,
			script_pubkey: "76a914000000000000000000000000000000000000000088ac".into(),
		}];
		tx.lock_time = 10;
		tx.expiry_height = 40;
		tx
	}

	#[test]
	fn test_walk_every_version() {
		for version in 1..6 {
			let tx = sample(version);
			let raw = tx.serialize();
			let layout = TransactionLayout::parse(&raw).unwrap();

			assert_eq!(layout.version(), version);
			assert_eq!(layout.overwintered(), version >= 3);
			assert_eq!(layout.inputs.len(), 2);
			assert_eq!(layout.outputs, tx.outputs);
			assert_eq!(layout.lock_time, 10);
			assert_eq!(layout.expiry_height, if version >= 3 { 40 } else { 0 });

			let first = &layout.inputs[0];
			assert_eq!(first.previous_output, tx.inputs[0].previous_output);
			assert_eq!(first.script_len, 0);
			assert_eq!(first.script_len_size, 1);

			let second = &layout.inputs[1];
			assert_eq!(second.script_len, 300);
			assert_eq!(second.script_len_size, 3);
			assert_eq!(second.sequence, 0xfffffffe);
			assert_eq!(second.offset, first.script_offset + 1 + 4);
			assert_eq!(layout.script_sig(&raw, 1), Some(tx.inputs[1].script_sig.clone()));
		}
	}

	#[test]
	fn test_nu5_header_offsets() {
		let raw = sample(5).serialize();
		let layout = TransactionLayout::parse(&raw).unwrap();
		// header, version group, branch id, lock time, expiry, input count
		assert_eq!(layout.inputs[0].offset, 21);
		assert!(layout.consensus_branch_id.is_some());
	}

	#[test]
	fn test_unknown_header_is_unsupported() {
		let raw = [0x06u8, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00];
		assert_eq!(TransactionLayout::parse(&raw), Err(Error::UnsupportedVersion(0x80000006)));

		// sapling header with the overwinter version group
		let raw = [0x04u8, 0x00, 0x00, 0x80, 0x70, 0x82, 0xc4, 0x03];
		assert_eq!(TransactionLayout::parse(&raw), Err(Error::UnsupportedVersion(0x80000004)));
	}

	#[test]
	fn test_truncated_transaction() {
		let raw = sample(4).serialize();
		for len in &[3usize, 9, 40, raw.len() / 2] {
			assert_eq!(TransactionLayout::parse(&raw[..*len]), Err(Error::Malformed(ReaderError::OutOfBounds)));
		}
	}
}
