use std::ops::Deref;
use Error;

/// Fixed byte layout a key or address is base58-encoded from.
pub trait DisplayLayout {
	type Target: Deref<Target = [u8]>;

	fn layout(&self) -> Self::Target;

	fn from_layout(data: &[u8]) -> Result<Self, Error> where Self: Sized;
}
