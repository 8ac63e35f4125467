//! Variable-length integer used for every list length and script length
//! of the transaction encoding.
//!
//! | first byte | value                  | encoded size |
//! |------------|------------------------|--------------|
//! | `< 0xfd`   | the byte itself        | 1            |
//! | `0xfd`     | next 2 bytes, LE       | 3            |
//! | `0xfe`     | next 4 bytes, LE       | 5            |
//! | `0xff`     | next 8 bytes, LE       | 9            |

use std::fmt;
use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;
use {Serializable, Stream, Deserializable, Reader, Error};

/// A type of variable-length integer commonly used in the Bitcoin P2P protocol and Bitcoin serialized data structures.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct CompactInteger(u64);

impl fmt::Display for CompactInteger {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<CompactInteger> for usize {
	fn from(i: CompactInteger) -> Self {
		i.0 as usize
	}
}

impl From<CompactInteger> for u64 {
	fn from(i: CompactInteger) -> Self {
		i.0
	}
}

impl From<u8> for CompactInteger {
	fn from(i: u8) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u16> for CompactInteger {
	fn from(i: u16) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u32> for CompactInteger {
	fn from(i: u32) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<usize> for CompactInteger {
	fn from(i: usize) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u64> for CompactInteger {
	fn from(i: u64) -> Self {
		CompactInteger(i)
	}
}

impl CompactInteger {
	/// Number of bytes the minimal encoding of this value occupies.
	pub fn encoded_size(&self) -> usize {
		match self.0 {
			0..=0xfc => 1,
			0xfd..=0xffff => 3,
			0x10000..=0xffff_ffff => 5,
			_ => 9,
		}
	}
}

impl Serializable for CompactInteger {
	fn serialize(&self, stream: &mut Stream) {
		match self.0 {
			0..=0xfc => {
				stream.append(&(self.0 as u8));
			},
			0xfd..=0xffff => {
				stream.append(&0xfdu8).append(&(self.0 as u16));
			},
			0x10000..=0xffff_ffff => {
				stream.append(&0xfeu8).append(&(self.0 as u32));
			},
			_ => {
				stream.append(&0xffu8).append(&self.0);
			},
		}
	}

	fn serialized_size(&self) -> usize {
		self.encoded_size()
	}
}

impl Deserializable for CompactInteger {
	fn deserialize(reader: &mut Reader) -> Result<Self, Error> {
		let (value, consumed) = decode_compact_integer(reader.remaining(), 0)?;
		reader.skip(consumed)?;
		Ok(CompactInteger(value))
	}
}

/// Decodes the compact integer starting at `offset`.
///
/// Returns the value together with the number of bytes it occupied. Every size
/// class is accepted, including non-minimal ones.
pub fn decode_compact_integer(bytes: &[u8], offset: usize) -> Result<(u64, usize), Error> {
	let first = match bytes.get(offset) {
		Some(first) => *first,
		None => return Err(Error::OutOfBounds),
	};

	let size = match first {
		0xfd => 3,
		0xfe => 5,
		0xff => 9,
		_ => return Ok((first as u64, 1)),
	};

	if bytes.len() - offset < size {
		return Err(Error::OutOfBounds);
	}

	let body = &bytes[offset + 1..offset + size];
	let value = match size {
		3 => LittleEndian::read_u16(body) as u64,
		5 => LittleEndian::read_u32(body) as u64,
		_ => LittleEndian::read_u64(body),
	};

	Ok((value, size))
}

/// Minimal encoding of `value`.
pub fn encode_compact_integer(value: u64) -> Bytes {
	let mut stream = Stream::default();
	stream.append(&CompactInteger::from(value));
	stream.out()
}
