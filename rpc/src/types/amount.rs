//! Serde helpers for decimal ZEC amounts held as integer zatoshis.
//!
//! The node prints amounts as JSON numbers with eight decimals. They are read
//! from their textual form so no value goes through a float.

use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde_json::Number;
use chain::{parse_amount, format_amount};

pub fn serialize<S>(zatoshis: &u64, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
	let number: Number = format_amount(*zatoshis).parse().map_err(S::Error::custom)?;
	number.serialize(serializer)
}

pub fn deserialize<'a, D>(deserializer: D) -> Result<u64, D::Error> where D: Deserializer<'a> {
	let number = Number::deserialize(deserializer)?;
	parse_amount(&number.to_string()).map_err(D::Error::custom)
}
