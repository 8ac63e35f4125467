//! `AddressHash` with network identifier and format type
//!
//! A transparent Zcash address is a base58check string of a two byte
//! prefix, the 20 byte hash and a 4 byte checksum. HTLC deposits are
//! made to P2SH addresses (`t3...` on mainnet, `t2...` on testnet).

use std::fmt;
use std::str::FromStr;
use std::ops::Deref;
use base58::{ToBase58, FromBase58};
use crypto::checksum;
use network::Network;
use {DisplayLayout, Error, AddressHash};

/// There are two transparent address formats currently in use.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Type {
	/// Pay to PubKey Hash, eg: t1h8SqgtM3QM5e2M8EzhhT1yL2PXXtA6oqe.
	P2PKH,
	/// Pay to Script Hash, `t3...` on mainnet.
	P2SH,
}

/// `AddressHash` with network identifier and format type
#[derive(Debug, PartialEq, Clone)]
pub struct Address {
	/// The type of the address.
	pub kind: Type,
	/// The network of the address.
	pub network: Network,
	/// Public key hash.
	pub hash: AddressHash,
}

pub struct AddressDisplayLayout([u8; 26]);

impl Deref for AddressDisplayLayout {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DisplayLayout for Address {
	type Target = AddressDisplayLayout;

	fn layout(&self) -> Self::Target {
		let mut result = [0u8; 26];

		let prefixes = self.network.address_prefixes();
		result[..2].copy_from_slice(&match self.kind {
			Type::P2PKH => prefixes.p2pkh,
			Type::P2SH => prefixes.p2sh,
		});

		result[2..22].copy_from_slice(&*self.hash);
		let cs = checksum(&result[0..22]);
		result[22..].copy_from_slice(&*cs);
		AddressDisplayLayout(result)
	}

	fn from_layout(data: &[u8]) -> Result<Self, Error> where Self: Sized {
		if data.len() != 26 {
			return Err(Error::InvalidAddress);
		}

		let cs = checksum(&data[..22]);
		if &data[22..] != &*cs {
			return Err(Error::InvalidChecksum);
		}

		let (network, kind) = match Network::from_address_prefix([data[0], data[1]]) {
			Some((network, true)) => (network, Type::P2SH),
			Some((network, false)) => (network, Type::P2PKH),
			None => return Err(Error::InvalidAddress),
		};

		let mut hash = AddressHash::default();
		hash.copy_from_slice(&data[2..22]);

		let address = Address {
			kind: kind,
			network: network,
			hash: hash,
		};

		Ok(address)
	}
}

impl Address {
	/// Pay to script hash address of `hash`, the `hash160` of a redeem script.
	pub fn p2sh(hash: AddressHash, network: Network) -> Self {
		Address {
			kind: Type::P2SH,
			network: network,
			hash: hash,
		}
	}

	pub fn p2pkh(hash: AddressHash, network: Network) -> Self {
		Address {
			kind: Type::P2PKH,
			network: network,
			hash: hash,
		}
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.layout().to_base58())
	}
}

impl FromStr for Address {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> where Self: Sized {
		let hex = s.from_base58().map_err(|_| Error::InvalidAddress)?;
		Address::from_layout(&hex)
	}
}

impl From<&'static str> for Address {
	fn from(s: &'static str) -> Self {
		s.parse().unwrap()
	}
}
