//! Transparent-only transaction serializer, for building fixtures.

use bytes::Bytes;
use ser::{Serializable, Stream, CompactInteger};
use constants::{
	OVERWINTERED_FLAG, OVERWINTER_TX_VERSION, SAPLING_TX_VERSION, NU5_TX_VERSION, SPROUT_TX_VERSION,
	OVERWINTER_TX_VERSION_GROUP_ID, SAPLING_TX_VERSION_GROUP_ID, NU5_TX_VERSION_GROUP_ID,
};
use decoded::{DecodedInput, DecodedOutput, DecodedTransaction};

/// NU5 consensus branch id.
pub const NU5_BRANCH_ID: u32 = 0xC2D6D0B4;

/// Transaction without any shielded components.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct UnsignedTransaction {
	pub version: u32,
	pub overwintered: bool,
	pub version_group_id: u32,
	pub consensus_branch_id: u32,
	pub inputs: Vec<DecodedInput>,
	pub outputs: Vec<DecodedOutput>,
	pub lock_time: u32,
	pub expiry_height: u32,
}

impl UnsignedTransaction {
	pub fn with_version(version: u32) -> Self {
		let version_group_id = match version {
			OVERWINTER_TX_VERSION => OVERWINTER_TX_VERSION_GROUP_ID,
			SAPLING_TX_VERSION => SAPLING_TX_VERSION_GROUP_ID,
			NU5_TX_VERSION => NU5_TX_VERSION_GROUP_ID,
			_ => 0,
		};

		UnsignedTransaction {
			version: version,
			overwintered: version >= OVERWINTER_TX_VERSION,
			version_group_id: version_group_id,
			consensus_branch_id: if version == NU5_TX_VERSION { NU5_BRANCH_ID } else { 0 },
			..Default::default()
		}
	}

	pub fn serialize(&self) -> Bytes {
		let mut stream = Stream::default();
		self.serialize_to(&mut stream);
		stream.out()
	}

	fn serialize_to(&self, stream: &mut Stream) {
		let header = if self.overwintered {
			self.version | OVERWINTERED_FLAG
		} else {
			self.version
		};

		stream.append(&header);
		if self.overwintered {
			stream.append(&self.version_group_id);
		}

		if self.version == NU5_TX_VERSION {
			stream
				.append(&self.consensus_branch_id)
				.append(&self.lock_time)
				.append(&self.expiry_height)
				.append_list(&self.inputs)
				.append_list(&self.outputs);
			// no sapling spends, sapling outputs, orchard actions
			stream
				.append(&CompactInteger::from(0u8))
				.append(&CompactInteger::from(0u8))
				.append(&CompactInteger::from(0u8));
			return;
		}

		stream
			.append_list(&self.inputs)
			.append_list(&self.outputs)
			.append(&self.lock_time);

		if self.overwintered {
			stream.append(&self.expiry_height);
		}

		if self.version == SAPLING_TX_VERSION {
			// value balance, no spends, no outputs
			stream
				.append(&0i64)
				.append(&CompactInteger::from(0u8))
				.append(&CompactInteger::from(0u8));
		}

		if self.version >= SPROUT_TX_VERSION {
			// no joinsplits
			stream.append(&CompactInteger::from(0u8));
		}
	}
}

impl From<UnsignedTransaction> for DecodedTransaction {
	fn from(tx: UnsignedTransaction) -> Self {
		DecodedTransaction {
			version: tx.version,
			overwintered: tx.overwintered,
			version_group_id: tx.version_group_id,
			inputs: tx.inputs,
			outputs: tx.outputs,
			lock_time: tx.lock_time,
			expiry_height: tx.expiry_height,
		}
	}
}
