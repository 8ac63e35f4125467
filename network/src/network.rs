//! Zcash network parameters relevant to transparent addresses and keys.

use std::{fmt, str};

/// Base58 version prefixes of transparent addresses.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct AddressPrefixes {
	/// Pay to public key hash (`t1...` / `tm...`).
	pub p2pkh: [u8; 2],
	/// Pay to script hash (`t3...` / `t2...`).
	pub p2sh: [u8; 2],
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Network {
	/// The original and main network for Zcash transactions.
	Mainnet,
	/// The main Zcash testnet.
	Testnet,
	/// Local test network. Shares prefixes with testnet.
	Regtest,
}

impl Network {
	pub fn address_prefixes(&self) -> AddressPrefixes {
		match *self {
			Network::Mainnet => AddressPrefixes {
				p2pkh: [0x1C, 0xB8],
				p2sh: [0x1C, 0xBD],
			},
			Network::Testnet | Network::Regtest => AddressPrefixes {
				p2pkh: [0x1D, 0x25],
				p2sh: [0x1C, 0xBA],
			},
		}
	}

	/// First byte of WIF-encoded private keys.
	pub fn wif_prefix(&self) -> u8 {
		match *self {
			Network::Mainnet => 0x80,
			Network::Testnet | Network::Regtest => 0xEF,
		}
	}

	pub fn default_rpc_port(&self) -> u16 {
		match *self {
			Network::Mainnet => 8232,
			Network::Testnet | Network::Regtest => 18232,
		}
	}

	/// Network a transparent address prefix belongs to. Regtest is reported as testnet.
	pub fn from_address_prefix(prefix: [u8; 2]) -> Option<(Network, bool)> {
		[Network::Mainnet, Network::Testnet].iter()
			.filter_map(|network| {
				let prefixes = network.address_prefixes();
				if prefixes.p2pkh == prefix {
					Some((*network, false))
				} else if prefixes.p2sh == prefix {
					Some((*network, true))
				} else {
					None
				}
			})
			.next()
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Network::Mainnet => f.write_str("mainnet"),
			Network::Testnet => f.write_str("testnet"),
			Network::Regtest => f.write_str("regtest"),
		}
	}
}

impl str::FromStr for Network {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"mainnet" | "main" => Ok(Network::Mainnet),
			"testnet" | "test" => Ok(Network::Testnet),
			"regtest" => Ok(Network::Regtest),
			other => Err(format!("unknown network: {}", other)),
		}
	}
}
