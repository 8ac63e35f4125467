//! Serialized script, used inside transaction inputs and outputs.

use std::{fmt, ops};
use hex::ToHex;
use bytes::Bytes;
use {Opcode, Error};

/// Maximum number of bytes pushable to the stack
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

/// Maximum script length in bytes
pub const MAX_SCRIPT_SIZE: usize = 10000;

/// Serialized script, used inside transaction inputs and outputs.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Script {
	data: Bytes,
}

impl From<&'static str> for Script {
	fn from(s: &'static str) -> Self {
		Script::new(s.into())
	}
}

impl From<Bytes> for Script {
	fn from(s: Bytes) -> Self {
		Script::new(s)
	}
}

impl From<Vec<u8>> for Script {
	fn from(v: Vec<u8>) -> Self {
		Script::new(v.into())
	}
}

impl From<Script> for Bytes {
	fn from(script: Script) -> Self {
		script.data
	}
}

impl Script {
	/// Script constructor.
	pub fn new(data: Bytes) -> Self {
		Script {
			data: data,
		}
	}

	pub fn to_bytes(&self) -> Bytes {
		self.data.clone()
	}

	/// Extra-fast test for pay-to-script-hash scripts.
	pub fn is_pay_to_script_hash(&self) -> bool {
		self.data.len() == 23 &&
			self.data[0] == Opcode::OP_HASH160 as u8 &&
			self.data[1] == Opcode::OP_PUSHBYTES_20 as u8 &&
			self.data[22] == Opcode::OP_EQUAL as u8
	}

	pub fn is_pay_to_public_key_hash(&self) -> bool {
		self.data.len() == 25 &&
			self.data[0] == Opcode::OP_DUP as u8 &&
			self.data[1] == Opcode::OP_HASH160 as u8 &&
			self.data[2] == Opcode::OP_PUSHBYTES_20 as u8 &&
			self.data[23] == Opcode::OP_EQUALVERIFY as u8 &&
			self.data[24] == Opcode::OP_CHECKSIG as u8
	}

	/// Returns true if the script contains push opcodes only.
	pub fn is_push_only(&self) -> bool {
		self.iter().all(|instruction| match instruction {
			Ok(instruction) => instruction.opcode.is_push_value(),
			Err(_) => false,
		})
	}

	pub fn iter(&self) -> Instructions {
		Instructions { position: 0, script: self }
	}

	pub fn get_opcode(&self, position: usize) -> Result<Opcode, Error> {
		Opcode::from_u8(self.data[position]).ok_or(Error::BadOpcode)
	}

	pub fn get_instruction(&self, position: usize) -> Result<Instruction, Error> {
		let opcode = self.get_opcode(position)?;
		let instruction = match opcode {
			Opcode::OP_PUSHDATA1 |
			Opcode::OP_PUSHDATA2 |
			Opcode::OP_PUSHDATA4 => {
				let len = match opcode {
					Opcode::OP_PUSHDATA1 => 1,
					Opcode::OP_PUSHDATA2 => 2,
					_ => 4,
				};

				let slice = self.take(position + 1, len)?;
				let n = read_usize(slice, len)?;
				let bytes = self.take(position + 1 + len, n)?;
				Instruction {
					opcode: opcode,
					step: len + n + 1,
					data: Some(bytes),
				}
			},
			o if (o as u8) <= Opcode::OP_PUSHBYTES_75 as u8 => {
				let bytes = self.take(position + 1, opcode as usize)?;
				Instruction {
					opcode: o,
					step: opcode as usize + 1,
					data: Some(bytes),
				}
			},
			_ => Instruction {
				opcode: opcode,
				step: 1,
				data: None,
			}
		};

		Ok(instruction)
	}

	#[inline]
	pub fn take(&self, offset: usize, len: usize) -> Result<&[u8], Error> {
		if offset + len > self.data.len() {
			Err(Error::BadOpcode)
		} else {
			Ok(&self.data[offset..offset + len])
		}
	}
}

impl ops::Deref for Script {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

pub struct Instructions<'a> {
	position: usize,
	script: &'a Script,
}

#[derive(Debug, PartialEq)]
pub struct Instruction<'a> {
	pub opcode: Opcode,
	pub step: usize,
	pub data: Option<&'a [u8]>,
}

impl<'a> Iterator for Instructions<'a> {
	type Item = Result<Instruction<'a>, Error>;

	fn next(&mut self) -> Option<Result<Instruction<'a>, Error>> {
		if self.script.len() <= self.position {
			return None;
		}

		let instruction = match self.script.get_instruction(self.position) {
			Ok(x) => x,
			Err(e) => {
				// stop after the first malformed instruction
				self.position = self.script.len();
				return Some(Err(e));
			},
		};

		self.position += instruction.step;

		Some(Ok(instruction))
	}
}

fn read_usize(data: &[u8], size: usize) -> Result<usize, Error> {
	if data.len() < size {
		return Err(Error::BadOpcode);
	}

	let result = data
		.iter()
		.take(size)
		.enumerate()
		.fold(0, |acc, (i, x)| acc + ((*x as usize) << (i * 8)));
	Ok(result)
}

impl fmt::Display for Script {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut first = true;
		for instruction in self.iter() {
			if !first {
				f.write_str(" ")?;
			}
			first = false;

			match instruction {
				Ok(Instruction { opcode, data: Some(data), .. }) if opcode != Opcode::OP_0 => {
					f.write_str(&data.to_hex::<String>())?;
				},
				Ok(instruction) => write!(f, "{}", instruction.opcode)?,
				Err(_) => f.write_str("[error]")?,
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use {Builder, Opcode};
	use super::Script;

	#[test]
	fn test_is_pay_to_script_hash() {
		let script: Script = "a9143b80842f4ea32806ce5e723a255ddd6490cfd28d87".into();
		let script2: Script = "a9143b80842f4ea32806ce5e723a255ddd6490cfd28d88".into();
		assert!(script.is_pay_to_script_hash());
		assert!(!script2.is_pay_to_script_hash());
	}

	#[test]
	fn test_is_pay_to_public_key_hash() {
		let script: Script = "76a914df3bd30160e6c6145baaf2c88a8844c13a00d1d588ac".into();
		assert!(script.is_pay_to_public_key_hash());
		assert!(!script.is_pay_to_script_hash());
	}

	#[test]
	fn test_script_debug() {
		let script = Builder::default()
			.push_num(3u8.into())
			.push_num(2u8.into())
			.push_opcode(Opcode::OP_ADD)
			.into_script();
		assert_eq!(script.to_string(), "OP_3 OP_2 OP_ADD");
	}

	#[test]
	fn test_push_only() {
		let script: Script = "0051020a0b4c0100".into();
		assert!(script.is_push_only());
		let script: Script = "0075".into();
		assert!(!script.is_push_only());
	}

	#[test]
	fn test_pushdata_instructions() {
		let mut data = vec![0x4d, 0x2c, 0x01];
		data.extend(vec![0xaa; 300]);
		data.push(0x75);
		let script = Script::new(Bytes::from(data));
		let instructions: Vec<_> = script.iter().map(Result::unwrap).collect();
		assert_eq!(instructions.len(), 2);
		assert_eq!(instructions[0].opcode, Opcode::OP_PUSHDATA2);
		assert_eq!(instructions[0].data.unwrap().len(), 300);
		assert_eq!(instructions[1].opcode, Opcode::OP_DROP);
	}

	#[test]
	fn test_truncated_push_is_an_error() {
		let script: Script = "0501020304".into();
		assert!(script.iter().next().unwrap().is_err());
		assert!(!script.is_push_only());
	}
}
