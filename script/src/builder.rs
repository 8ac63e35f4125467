//! Script builder

use bytes::Bytes;
use keys::AddressHash;
use {Opcode, Script, Num};

/// Script builder
#[derive(Default)]
pub struct Builder {
	data: Bytes,
}

impl Builder {
	/// Builds p2pkh script pubkey
	pub fn build_p2pkh(address: &AddressHash) -> Script {
		Builder::default()
			.push_opcode(Opcode::OP_DUP)
			.push_opcode(Opcode::OP_HASH160)
			.push_bytes(&**address)
			.push_opcode(Opcode::OP_EQUALVERIFY)
			.push_opcode(Opcode::OP_CHECKSIG)
			.into_script()
	}

	/// Builds p2sh script pubkey
	pub fn build_p2sh(address: &AddressHash) -> Script {
		Builder::default()
			.push_opcode(Opcode::OP_HASH160)
			.push_bytes(&**address)
			.push_opcode(Opcode::OP_EQUAL)
			.into_script()
	}

	/// Pushes opcode to the end of script
	pub fn push_opcode(mut self, opcode: Opcode) -> Self {
		self.data.push(opcode as u8);
		self
	}

	/// Appends num push operation to the end of script
	pub fn push_num(self, num: Num) -> Self {
		self.push_data(&num.to_bytes())
	}

	/// Appends `data` with the shortest push operation.
	///
	/// Empty data and single bytes 1..16 and 0x81 become
	/// `OP_0`, `OP_1`..`OP_16` and `OP_1NEGATE`.
	pub fn push_data(self, data: &[u8]) -> Self {
		match data.len() {
			0 => self.push_opcode(Opcode::OP_0),
			1 if data[0] >= 1 && data[0] <= 16 => self.append_bytes(&[Opcode::OP_1 as u8 + data[0] - 1]),
			1 if data[0] == 0x81 => self.push_opcode(Opcode::OP_1NEGATE),
			_ => self.push_bytes(data),
		}
	}

	/// Appends `data` with an explicit push operation, never as a small-integer opcode.
	pub fn push_bytes(mut self, data: &[u8]) -> Self {
		let len = data.len();
		if len < Opcode::OP_PUSHDATA1 as usize {
			self.data.push(len as u8);
		} else if len < 0x100 {
			self.data.push(Opcode::OP_PUSHDATA1 as u8);
			self.data.push(len as u8);
		} else if len < 0x10000 {
			self.data.push(Opcode::OP_PUSHDATA2 as u8);
			self.data.push(len as u8);
			self.data.push((len >> 8) as u8);
		} else {
			self.data.push(Opcode::OP_PUSHDATA4 as u8);
			self.data.push(len as u8);
			self.data.push((len >> 8) as u8);
			self.data.push((len >> 16) as u8);
			self.data.push((len >> 24) as u8);
		}

		self.data.extend_from_slice(data);
		self
	}

	/// Appends raw bytes, no push opcode.
	pub fn append_bytes(mut self, data: &[u8]) -> Self {
		self.data.extend_from_slice(data);
		self
	}

	/// Builds final script
	pub fn into_script(self) -> Script {
		Script::new(self.data)
	}

	/// Builds final script bytes
	pub fn into_bytes(self) -> Bytes {
		self.data
	}
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use super::Builder;

	#[test]
	fn test_push_data_is_minimal() {
		assert_eq!(Builder::default().push_data(&[]).into_bytes(), "00".into());
		assert_eq!(Builder::default().push_data(&[10]).into_bytes(), "5a".into());
		assert_eq!(Builder::default().push_data(&[16]).into_bytes(), "60".into());
		assert_eq!(Builder::default().push_data(&[17]).into_bytes(), "0111".into());
		assert_eq!(Builder::default().push_data(&[0x81]).into_bytes(), "4f".into());
		assert_eq!(Builder::default().push_data(&[0]).into_bytes(), "0100".into());
	}

	#[test]
	fn test_push_bytes_size_classes() {
		let bytes = Builder::default().push_bytes(&[0xaa; 75]).into_bytes();
		assert_eq!(bytes[0], 75);
		let bytes = Builder::default().push_bytes(&[0xaa; 76]).into_bytes();
		assert_eq!(&bytes[..2], &[0x4c, 76]);
		let bytes = Builder::default().push_bytes(&[0xaa; 300]).into_bytes();
		assert_eq!(&bytes[..3], &[0x4d, 0x2c, 0x01]);
		assert_eq!(bytes.len(), 303);
	}

	#[test]
	fn test_push_num() {
		assert_eq!(Builder::default().push_num(0u8.into()).into_bytes(), "00".into());
		assert_eq!(Builder::default().push_num(100u8.into()).into_bytes(), "0164".into());
		assert_eq!(Builder::default().push_num(500_000_000u32.into()).into_bytes(), "040065cd1d".into());
	}

	#[test]
	fn test_build_p2sh() {
		let expected: Bytes = "a9143b80842f4ea32806ce5e723a255ddd6490cfd28d87".into();
		let script = Builder::build_p2sh(&"3b80842f4ea32806ce5e723a255ddd6490cfd28d".into());
		assert_eq!(script.to_bytes(), expected);
	}
}
