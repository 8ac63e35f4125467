use std::{fmt, str};
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::{Error as DeError, Visitor};
use primitives::hash::H256 as GlobalH256;

/// Transaction or block hash, written in display (reversed) byte order.
#[derive(Debug, PartialEq, Eq, Default, Hash, Clone, Copy)]
pub struct H256(GlobalH256);

impl H256 {
	/// Hash in internal byte order.
	pub fn internal(&self) -> GlobalH256 {
		self.0
	}
}

impl From<GlobalH256> for H256 {
	fn from(h: GlobalH256) -> Self {
		H256(h)
	}
}

impl Into<GlobalH256> for H256 {
	fn into(self) -> GlobalH256 {
		self.0
	}
}

impl str::FromStr for H256 {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		GlobalH256::from_reversed_str(s)
			.map(H256)
			.map_err(|err| format!("invalid hash {}: {}", s, err))
	}
}

impl From<&'static str> for H256 {
	fn from(s: &'static str) -> Self {
		s.parse().unwrap()
	}
}

impl fmt::Display for H256 {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.0.to_reversed_str())
	}
}

impl Serialize for H256 {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
		serializer.serialize_str(&self.0.to_reversed_str())
	}
}

impl<'a> Deserialize<'a> for H256 {
	fn deserialize<D>(deserializer: D) -> Result<H256, D::Error> where D: Deserializer<'a> {
		deserializer.deserialize_str(HashVisitor)
	}
}

struct HashVisitor;

impl<'a> Visitor<'a> for HashVisitor {
	type Value = H256;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a 32-byte hex-encoded hash")
	}

	fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: DeError {
		value.parse().map_err(E::custom)
	}

	fn visit_string<E>(self, value: String) -> Result<Self::Value, E> where E: DeError {
		self.visit_str(&value)
	}
}
