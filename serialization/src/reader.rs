use std::cmp;
use compact_integer::CompactInteger;
use bytes::Bytes;

/// Deserializes `T` from `buffer`, failing if any byte is left unread.
pub fn deserialize<T>(buffer: &[u8]) -> Result<T, Error> where T: Deserializable {
	let mut reader = Reader::new(buffer);
	let result = reader.read()?;

	if reader.is_finished() {
		Ok(result)
	} else {
		Err(Error::UnreadData)
	}
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Error {
	/// Fewer bytes remain than the field being read requires.
	OutOfBounds,
	MalformedData,
	UnreadData,
}

impl ::std::fmt::Display for Error {
	fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
		match *self {
			Error::OutOfBounds => f.write_str("unexpected end of data"),
			Error::MalformedData => f.write_str("malformed data"),
			Error::UnreadData => f.write_str("unread data left in buffer"),
		}
	}
}

pub trait Deserializable {
	fn deserialize(reader: &mut Reader) -> Result<Self, Error> where Self: Sized;
}

/// Transaction structures reader.
///
/// Reads from a borrowed slice and keeps track of its position, so callers
/// can record the exact offsets of the fields they walk over.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
	buffer: &'a [u8],
	position: usize,
}

impl<'a> Reader<'a> {
	pub fn new(buffer: &'a [u8]) -> Self {
		Reader {
			buffer: buffer,
			position: 0,
		}
	}

	/// Offset of the next unread byte.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Unread part of the buffer.
	pub fn remaining(&self) -> &'a [u8] {
		&self.buffer[self.position..]
	}

	pub fn read<T>(&mut self) -> Result<T, Error> where T: Deserializable {
		T::deserialize(self)
	}

	pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], Error> {
		if self.buffer.len() - self.position < len {
			return Err(Error::OutOfBounds);
		}

		let slice = &self.buffer[self.position..self.position + len];
		self.position += len;
		Ok(slice)
	}

	/// Reads `len` raw bytes without a length prefix.
	pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, Error> {
		self.read_slice(len).map(Into::into)
	}

	pub fn skip(&mut self, len: usize) -> Result<(), Error> {
		self.read_slice(len).map(|_| ())
	}

	pub fn read_list<T>(&mut self) -> Result<Vec<T>, Error> where T: Deserializable {
		let len: usize = self.read::<CompactInteger>()?.into();
		// never trust the declared length for the allocation
		let mut result = Vec::with_capacity(cmp::min(len, self.remaining().len()));

		for _ in 0..len {
			result.push(self.read()?);
		}

		Ok(result)
	}

	pub fn is_finished(&self) -> bool {
		self.position == self.buffer.len()
	}
}

#[cfg(test)]
mod tests {
	use super::{Reader, Error, deserialize};

	#[test]
	fn test_reader_read() {
		let buffer = vec![
			1,
			2, 0,
			3, 0, 0, 0,
			4, 0, 0, 0, 0, 0, 0, 0
		];

		let mut reader = Reader::new(&buffer);
		assert!(!reader.is_finished());
		assert_eq!(1u8, reader.read().unwrap());
		assert_eq!(2u16, reader.read().unwrap());
		assert_eq!(3u32, reader.read().unwrap());
		assert_eq!(reader.position(), 7);
		assert_eq!(4u64, reader.read().unwrap());
		assert!(reader.is_finished());
		assert_eq!(Error::OutOfBounds, reader.read::<u8>().unwrap_err());
	}

	#[test]
	fn test_reader_slices_track_position() {
		let buffer = [1u8, 2, 3, 4, 5];
		let mut reader = Reader::new(&buffer);
		assert_eq!(reader.read_slice(2).unwrap(), &[1u8, 2][..]);
		reader.skip(1).unwrap();
		assert_eq!(reader.remaining(), &[4u8, 5][..]);
		assert_eq!(reader.read_slice(3).unwrap_err(), Error::OutOfBounds);
		assert_eq!(reader.position(), 3);
	}

	#[test]
	fn test_read_list_with_lying_length() {
		let buffer = [0xfdu8, 0xff, 0xff, 1];
		let mut reader = Reader::new(&buffer);
		assert_eq!(reader.read_list::<u8>().unwrap_err(), Error::OutOfBounds);
	}

	#[test]
	fn test_deserialize_rejects_unread_data() {
		assert_eq!(deserialize::<u8>(&[1, 2]).unwrap_err(), Error::UnreadData);
		assert_eq!(deserialize::<u16>(&[1, 2]).unwrap(), 0x0201);
	}
}
