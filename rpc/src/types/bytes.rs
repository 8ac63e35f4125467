//! Hex-encoded bytes, as the node writes scripts and raw transactions.

use std::{fmt, ops};
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::{Error as DeError, Visitor};
use hex::{ToHex, FromHex};
use primitives::bytes::Bytes as GlobalBytes;

#[derive(Debug, PartialEq, Eq, Default, Hash, Clone)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
	pub fn new(bytes: Vec<u8>) -> Self {
		Bytes(bytes)
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}
}

impl<T> From<T> for Bytes where GlobalBytes: From<T> {
	fn from(other: T) -> Self {
		Bytes(GlobalBytes::from(other).take())
	}
}

impl Into<GlobalBytes> for Bytes {
	fn into(self) -> GlobalBytes {
		self.0.into()
	}
}

impl ops::Deref for Bytes {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Serialize for Bytes {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
		serializer.serialize_str(&self.0.to_hex::<String>())
	}
}

impl<'a> Deserialize<'a> for Bytes {
	fn deserialize<D>(deserializer: D) -> Result<Bytes, D::Error> where D: Deserializer<'a> {
		deserializer.deserialize_str(BytesVisitor)
	}
}

struct BytesVisitor;

impl<'a> Visitor<'a> for BytesVisitor {
	type Value = Bytes;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a hex-encoded byte string")
	}

	fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: DeError {
		if value.len() % 2 != 0 {
			return Err(E::custom(format!("odd hex length {}", value.len())));
		}

		value.from_hex::<Vec<u8>>()
			.map(Bytes)
			.map_err(|err| E::custom(format!("invalid hex: {}", err)))
	}

	fn visit_string<E>(self, value: String) -> Result<Self::Value, E> where E: DeError {
		self.visit_str(&value)
	}
}
