//! Little-endian serialization of transaction structures.

extern crate byteorder;
extern crate primitives;

mod compact_integer;
mod impls;
mod reader;
mod stream;

pub use primitives::{hash, bytes};

pub use compact_integer::{CompactInteger, decode_compact_integer, encode_compact_integer};
pub use reader::{Reader, Deserializable, deserialize, Error};
pub use stream::{Stream, Serializable, serialize, serialize_list, serialized_list_size};
