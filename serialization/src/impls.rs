use byteorder::{LittleEndian, ByteOrder};
use bytes::Bytes;
use hash::{H32, H160, H256};
use compact_integer::CompactInteger;
use {Serializable, Stream, Deserializable, Reader, Error};

macro_rules! impl_ser_for_int {
	($int: ty, $size: expr, $write: ident, $read: ident) => {
		impl Serializable for $int {
			fn serialize(&self, stream: &mut Stream) {
				let mut buffer = [0u8; $size];
				LittleEndian::$write(&mut buffer, *self);
				stream.append_slice(&buffer);
			}

			#[inline]
			fn serialized_size(&self) -> usize {
				$size
			}
		}

		impl Deserializable for $int {
			#[inline]
			fn deserialize(reader: &mut Reader) -> Result<Self, Error> where Self: Sized {
				let slice = reader.read_slice($size)?;
				Ok(LittleEndian::$read(slice))
			}
		}
	}
}

impl_ser_for_int!(u16, 2, write_u16, read_u16);
impl_ser_for_int!(u32, 4, write_u32, read_u32);
impl_ser_for_int!(u64, 8, write_u64, read_u64);
impl_ser_for_int!(i32, 4, write_i32, read_i32);
impl_ser_for_int!(i64, 8, write_i64, read_i64);

impl Serializable for u8 {
	#[inline]
	fn serialize(&self, stream: &mut Stream) {
		stream.append_slice(&[*self]);
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		1
	}
}

impl Deserializable for u8 {
	#[inline]
	fn deserialize(reader: &mut Reader) -> Result<Self, Error> where Self: Sized {
		Ok(reader.read_slice(1)?[0])
	}
}

impl Serializable for bool {
	#[inline]
	fn serialize(&self, stream: &mut Stream) {
		stream.append_slice(&[*self as u8]);
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		1
	}
}

impl Deserializable for bool {
	#[inline]
	fn deserialize(reader: &mut Reader) -> Result<Self, Error> where Self: Sized {
		match reader.read_slice(1)?[0] {
			0 => Ok(false),
			1 => Ok(true),
			_ => Err(Error::MalformedData),
		}
	}
}

macro_rules! impl_ser_for_hash {
	($name: ident, $size: expr) => {
		impl Serializable for $name {
			fn serialize(&self, stream: &mut Stream) {
				stream.append_slice(&**self);
			}

			#[inline]
			fn serialized_size(&self) -> usize {
				$size
			}
		}

		impl Deserializable for $name {
			fn deserialize(reader: &mut Reader) -> Result<Self, Error> where Self: Sized {
				let slice = reader.read_slice($size)?;
				$name::from_slice(slice).ok_or(Error::MalformedData)
			}
		}
	}
}

impl_ser_for_hash!(H32, 4);
impl_ser_for_hash!(H160, 20);
impl_ser_for_hash!(H256, 32);

impl Serializable for Bytes {
	fn serialize(&self, stream: &mut Stream) {
		stream.append_bytes_with_len(self);
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		CompactInteger::from(self.len()).serialized_size() + self.len()
	}
}

impl Deserializable for Bytes {
	fn deserialize(reader: &mut Reader) -> Result<Self, Error> where Self: Sized {
		let len: usize = reader.read::<CompactInteger>()?.into();
		let slice = reader.read_slice(len)?;
		Ok(slice.into())
	}
}
