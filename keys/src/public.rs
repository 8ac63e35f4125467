use std::{fmt, ops};
use hex::ToHex;
use secp256k1::{Message as SecpMessage, PublicKey};
use secp256k1::ecdsa::Signature as SecpSignature;
use crypto::dhash160;
use hash::{H264, H520};
use {AddressHash, Error, Signature, Message, SECP256K1};

/// Secret public key
#[derive(Copy, Clone)]
pub enum Public {
	/// Normal version of public key
	Normal(H520),
	/// Compressed version of public key
	Compressed(H264),
}

impl Public {
	pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
		match data.len() {
			33 => {
				let mut public = H264::default();
				public.copy_from_slice(data);
				Ok(Public::Compressed(public))
			},
			65 => {
				let mut public = H520::default();
				public.copy_from_slice(data);
				Ok(Public::Normal(public))
			},
			_ => Err(Error::InvalidPublic)
		}
	}

	pub fn address_hash(&self) -> AddressHash {
		dhash160(self)
	}

	/// Verifies a DER signature over `message`.
	///
	/// High-s signatures are normalized before verification, as the node does.
	pub fn verify(&self, message: &Message, signature: &Signature) -> Result<bool, Error> {
		let public = PublicKey::from_slice(&**self)?;
		let mut signature = SecpSignature::from_der_lax(&**signature)?;
		let message = SecpMessage::from_digest_slice(&**message)?;
		signature.normalize_s();
		Ok(SECP256K1.verify_ecdsa(&message, &signature, &public).is_ok())
	}

	/// Returns `true` if the point lies on the curve.
	pub fn is_valid(&self) -> bool {
		PublicKey::from_slice(&**self).is_ok()
	}
}

impl ops::Deref for Public {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		match *self {
			Public::Normal(ref hash) => &**hash,
			Public::Compressed(ref hash) => &**hash,
		}
	}
}

impl PartialEq for Public {
	fn eq(&self, other: &Self) -> bool {
		let s_slice: &[u8] = self;
		let o_slice: &[u8] = other;
		s_slice == o_slice
	}
}

impl fmt::Debug for Public {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Public::Normal(ref hash) => writeln!(f, "normal: {}", hash.to_hex::<String>()),
			Public::Compressed(ref hash) => writeln!(f, "compressed: {}", hash.to_hex::<String>()),
		}
	}
}

impl fmt::Display for Public {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.to_hex::<String>())
	}
}
