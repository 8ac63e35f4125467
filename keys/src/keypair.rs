//! Bitcoin key pair.

use std::fmt;
use secp256k1::{PublicKey, SecretKey};
use hash::{H264, H520};
use network::Network;
use address::Type;
use {Public, Error, Private, Address, SECP256K1};

pub struct KeyPair {
	private: Private,
	public: Public,
}

impl fmt::Debug for KeyPair {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?}", self.private)?;
		writeln!(f, "public: {:?}", self.public)
	}
}

impl fmt::Display for KeyPair {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "private: {}", self.private)?;
		writeln!(f, "public: {}", self.public)
	}
}

impl KeyPair {
	pub fn private(&self) -> &Private {
		&self.private
	}

	pub fn public(&self) -> &Public {
		&self.public
	}

	pub fn from_private(private: Private) -> Result<KeyPair, Error> {
		let s = SecretKey::from_slice(&*private.secret)?;
		let p = PublicKey::from_secret_key(&*SECP256K1, &s);
		let public = if private.compressed {
			Public::Compressed(H264::from(p.serialize()))
		} else {
			Public::Normal(H520::from(p.serialize_uncompressed()))
		};

		let keypair = KeyPair {
			private: private,
			public: public,
		};

		Ok(keypair)
	}

	/// P2PKH address of the key pair on `network`.
	pub fn address(&self, network: Network) -> Address {
		Address {
			kind: Type::P2PKH,
			network: network,
			hash: self.public.address_hash(),
		}
	}
}

#[cfg(test)]
mod tests {
	use crypto::dhash256;
	use hash::H256;
	use network::Network;
	use super::KeyPair;
	use Private;

	const SECRET_0: &'static str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";

	fn compressed_private() -> Private {
		Private {
			network: Network::Testnet,
			secret: H256::from(0x11),
			compressed: true,
		}
	}

	#[test]
	fn test_keypair_from_private_is_compressed_as_requested() {
		let kp = KeyPair::from_private(SECRET_0.into()).unwrap();
		assert_eq!(kp.public().len(), 65);
		assert_eq!(kp.public()[0], 4);

		let kp = KeyPair::from_private(compressed_private()).unwrap();
		assert_eq!(kp.public().len(), 33);
		assert!(kp.public()[0] == 2 || kp.public()[0] == 3);
	}

	#[test]
	fn test_sign_and_verify() {
		let message = dhash256(b"zcash htlc");
		let other = dhash256(b"other message");
		for private in vec![SECRET_0.into(), compressed_private()] {
			let kp = KeyPair::from_private(private).unwrap();
			let signature = kp.private().sign(&message).unwrap();
			assert!(kp.public().verify(&message, &signature).unwrap());
			assert!(!kp.public().verify(&other, &signature).unwrap());
		}
	}

	#[test]
	fn test_keypair_address() {
		let kp = KeyPair::from_private(compressed_private()).unwrap();
		let address = kp.address(Network::Testnet);
		assert_eq!(address.hash, kp.public().address_hash());
		assert_eq!(address.network, Network::Testnet);
	}
}
