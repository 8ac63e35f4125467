//! Secret with additional network identifier and format type

use std::fmt;
use std::str::FromStr;
use hex::ToHex;
use base58::{ToBase58, FromBase58};
use secp256k1::{Message as SecpMessage, SecretKey};
use crypto::checksum;
use network::Network;
use {Secret, DisplayLayout, Error, Message, Signature, SECP256K1};

/// Secret with additional network identifier and format type
#[derive(PartialEq, Clone)]
pub struct Private {
	/// The network on which this key should be used.
	pub network: Network,
	/// ECDSA key.
	pub secret: Secret,
	/// True if this private key represents a compressed address.
	pub compressed: bool,
}

impl Private {
	/// Signs `message` and returns the low-s DER encoding of the signature.
	pub fn sign(&self, message: &Message) -> Result<Signature, Error> {
		let secret = SecretKey::from_slice(&*self.secret)?;
		let message = SecpMessage::from_digest_slice(&**message)?;
		let signature = SECP256K1.sign_ecdsa(&message, &secret);
		let data = signature.serialize_der();
		Ok(data.to_vec().into())
	}
}

impl DisplayLayout for Private {
	type Target = Vec<u8>;

	fn layout(&self) -> Self::Target {
		let mut result = vec![];
		result.push(self.network.wif_prefix());
		result.extend(&*self.secret);
		if self.compressed {
			result.push(1);
		}
		let cs = checksum(&result);
		result.extend_from_slice(&*cs);
		result
	}

	fn from_layout(data: &[u8]) -> Result<Self, Error> where Self: Sized {
		let compressed = match data.len() {
			37 => false,
			38 => true,
			_ => return Err(Error::InvalidPrivate),
		};

		if compressed && data[data.len() - 5] != 1 {
			return Err(Error::InvalidPrivate);
		}

		let cs = checksum(&data[0..data.len() - 4]);
		if cs[..] != data[data.len() - 4..] {
			return Err(Error::InvalidChecksum);
		}

		// regtest keys carry the testnet prefix
		let network = match data[0] {
			0x80 => Network::Mainnet,
			0xef => Network::Testnet,
			_ => return Err(Error::InvalidPrivate),
		};

		let mut secret = Secret::default();
		secret.copy_from_slice(&data[1..33]);

		let private = Private {
			network: network,
			secret: secret,
			compressed: compressed,
		};

		Ok(private)
	}
}

impl fmt::Debug for Private {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "network: {:?}", self.network)?;
		writeln!(f, "secret: {}", self.secret.to_hex::<String>())?;
		writeln!(f, "compressed: {}", self.compressed)
	}
}

impl fmt::Display for Private {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.layout().to_base58())
	}
}

impl FromStr for Private {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> where Self: Sized {
		let hex = s.from_base58().map_err(|_| Error::InvalidPrivate)?;
		Private::from_layout(&hex)
	}
}

impl From<&'static str> for Private {
	fn from(s: &'static str) -> Self {
		s.parse().unwrap()
	}
}
