extern crate sha2;
extern crate ripemd;
extern crate primitives;

pub use sha2::Digest;

use sha2::Sha256;
use ripemd::Ripemd160;
use primitives::hash::{H32, H160, H256};

/// Double SHA-256 computed incrementally.
#[derive(Default)]
pub struct DHash256 {
	hasher: Sha256,
}

impl DHash256 {
	pub fn new() -> Self {
		DHash256::default()
	}

	pub fn input(&mut self, data: &[u8]) {
		self.hasher.update(data);
	}

	pub fn finish(self) -> H256 {
		let first = self.hasher.finalize();
		let mut result = H256::default();
		result.copy_from_slice(&Sha256::digest(&first));
		result
	}
}

/// RIPEMD160
#[inline]
pub fn ripemd160(input: &[u8]) -> H160 {
	let mut result = H160::default();
	result.copy_from_slice(&Ripemd160::digest(input));
	result
}

/// SHA-256
#[inline]
pub fn sha256(input: &[u8]) -> H256 {
	let mut result = H256::default();
	result.copy_from_slice(&Sha256::digest(input));
	result
}

/// SHA-256 and RIPEMD160
#[inline]
pub fn dhash160(input: &[u8]) -> H160 {
	ripemd160(&*sha256(input))
}

/// Double SHA-256
#[inline]
pub fn dhash256(input: &[u8]) -> H256 {
	let mut hasher = DHash256::new();
	hasher.input(input);
	hasher.finish()
}

/// Data checksum
#[inline]
pub fn checksum(data: &[u8]) -> H32 {
	let mut result = H32::default();
	result.copy_from_slice(&dhash256(data)[0..4]);
	result
}
