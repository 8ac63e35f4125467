//! Transaction signer
//!
//! Legacy signature hash over the transparent part of a transaction:
//!
//! ```text
//! version & 0x7fffffff
//! varint(inputs) [prev hash | prev index | script or empty | sequence]
//! varint(outputs) [value | script pubkey]
//! lock time
//! hash type
//! ```
//!
//! Only the target input carries a script, every other input is hashed
//! with an empty one. The preimage is double SHA-256 hashed.

use bytes::Bytes;
use crypto::dhash256;
use hash::H256;
use keys::Private;
use ser::Stream;
use chain::{DecodedTransaction, DecodedOutput, DecodedInput, OutPoint};
use {Script, Error};

#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum SighashBase {
	All = 1,
}

impl From<SighashBase> for u32 {
	fn from(s: SighashBase) -> Self {
		s as u32
	}
}

#[derive(Debug, PartialEq, Clone)]
pub struct UnsignedTransactionInput {
	pub previous_output: OutPoint,
	pub sequence: u32,
}

impl<'a> From<&'a DecodedInput> for UnsignedTransactionInput {
	fn from(i: &'a DecodedInput) -> Self {
		UnsignedTransactionInput {
			previous_output: i.previous_output.clone(),
			sequence: i.sequence,
		}
	}
}

#[derive(Debug, PartialEq, Clone)]
pub struct TransactionInputSigner {
	/// Version with the overwintered flag masked off.
	pub version: u32,
	pub inputs: Vec<UnsignedTransactionInput>,
	pub outputs: Vec<DecodedOutput>,
	pub lock_time: u32,
}

impl<'a> From<&'a DecodedTransaction> for TransactionInputSigner {
	fn from(t: &'a DecodedTransaction) -> Self {
		TransactionInputSigner {
			version: t.version,
			inputs: t.inputs.iter().map(Into::into).collect(),
			outputs: t.outputs.clone(),
			lock_time: t.lock_time,
		}
	}
}

impl From<DecodedTransaction> for TransactionInputSigner {
	fn from(t: DecodedTransaction) -> Self {
		TransactionInputSigner::from(&t)
	}
}

impl TransactionInputSigner {
	/// Digest signed by the key spending input `input_index` locked by `script_pubkey`.
	pub fn signature_hash(&self, input_index: usize, script_pubkey: &Script, sighashtype: u32) -> Result<H256, Error> {
		let preimage = self.preimage(input_index, script_pubkey, sighashtype)?;
		Ok(dhash256(&preimage))
	}

	/// Bytes hashed by `signature_hash`.
	pub fn preimage(&self, input_index: usize, script_pubkey: &Script, sighashtype: u32) -> Result<Bytes, Error> {
		if sighashtype != SighashBase::All.into() {
			return Err(Error::UnsupportedHashType(sighashtype));
		}

		if input_index >= self.inputs.len() {
			return Err(Error::IndexOutOfRange {
				index: input_index,
				count: self.inputs.len(),
			});
		}

		let inputs: Vec<DecodedInput> = self.inputs.iter()
			.enumerate()
			.map(|(n, input)| DecodedInput {
				previous_output: input.previous_output.clone(),
				script_sig: if n == input_index {
					script_pubkey.to_bytes()
				} else {
					Bytes::default()
				},
				sequence: input.sequence,
			})
			.collect();

		let mut stream = Stream::default();
		stream
			.append(&(self.version & 0x7fff_ffff))
			.append_list(&inputs)
			.append_list(&self.outputs)
			.append(&self.lock_time)
			.append(&sighashtype);
		Ok(stream.out())
	}
}

/// Signature hash of input `input_index` of a decoded transaction.
pub fn build_sighash(view: &DecodedTransaction, input_index: usize, script: &Script, hash_type: u32) -> Result<H256, Error> {
	TransactionInputSigner::from(view).signature_hash(input_index, script, hash_type)
}

/// DER signature of `digest` followed by the hash type byte, as pushed in a scriptSig.
pub fn signature_with_hash_type(private: &Private, digest: &H256, hash_type: u32) -> Result<Bytes, Error> {
	let signature = private.sign(digest)?;
	let mut result: Vec<u8> = signature.into();
	result.push(hash_type as u8);
	Ok(result.into())
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use hash::H256;
	use keys::{KeyPair, Private, Address};
	use network::Network;
	use chain::{OutPoint, DecodedInput, DecodedOutput, DecodedTransaction};
	use script::Script;
	use Error;
	use super::{TransactionInputSigner, UnsignedTransactionInput, SighashBase, build_sighash, signature_with_hash_type};

	fn three_input_view() -> DecodedTransaction {
		DecodedTransaction {
			version: 4,
			overwintered: true,
			version_group_id: 0x892F2085,
			inputs: (0..3u8).map(|i| DecodedInput {
				previous_output: OutPoint::new(H256::from(i + 1), i as u32),
				script_sig: Bytes::default(),
				sequence: 0xfffffffe,
			}).collect(),
			outputs: vec![DecodedOutput {
				value: 12_345,
				script_pubkey: "76a9149a823b698f778ece90b094dc3f12a81f5e3c334588ac".into(),
			}],
			lock_time: 10,
			expiry_height: 0,
		}
	}

	// http://www.righto.com/2014/02/bitcoins-hard-way-using-raw-bitcoin.html
	// https://blockchain.info/rawtx/81b4c832d70cb56ff957589752eb4125a4cab78a25a8fc52d6a09e5bd4404d48
	// https://blockchain.info/rawtx/3f285f083de7c0acabd9f106a43ec42687ab0bebe2e6f0d529db696794540fea
	#[test]
	fn test_signature_hash_simple() {
		let private: Private = "5HxWvvfubhXpYYpS3tJkw6fq9jE9j18THftkZjHHfmFiWtmAbrj".into();
		let previous_tx_hash = H256::from_reversed_str("81b4c832d70cb56ff957589752eb4125a4cab78a25a8fc52d6a09e5bd4404d48").unwrap();
		let previous_output_index = 0;
		let from: Address = "t1h8SqgtM3QM5e2M8EzhhT1yL2PXXtA6oqe".into();
		let to: Address = "t1Xxa5ZVPKvs9bGMn7aWTiHjyHvR31XkUst".into();
		let previous_output: Script = "76a914df3bd30160e6c6145baaf2c88a8844c13a00d1d588ac".into();
		let current_output: Bytes = "76a9149a823b698f778ece90b094dc3f12a81f5e3c334588ac".into();
		let value = 91234;
		let expected_signature_hash: H256 = "f6d326b3b48fd8f6d6e29b590d76507aebe647043b1588a35605e9405234e391".into();

		// this is irrelevant
		let kp = KeyPair::from_private(private).unwrap();
		assert_eq!(kp.address(Network::Mainnet), from);
		assert_eq!(&current_output[3..23], &*to.hash);

		let unsigned_input = UnsignedTransactionInput {
			sequence: 0xffff_ffff,
			previous_output: OutPoint {
				index: previous_output_index,
				hash: previous_tx_hash,
			},
		};

		let output = DecodedOutput {
			value: value,
			script_pubkey: current_output,
		};

		let input_signer = TransactionInputSigner {
			version: 1,
			lock_time: 0,
			inputs: vec![unsigned_input],
			outputs: vec![output],
		};

		let hash = input_signer.signature_hash(0, &previous_output, SighashBase::All.into()).unwrap();
		assert_eq!(hash, expected_signature_hash);
	}

	#[test]
	fn test_preimage_layout() {
		let view = three_input_view();
		let script: Script = "51".into();
		let preimage = TransactionInputSigner::from(&view).preimage(1, &script, 1).unwrap();

		// overwintered flag is never part of the version
		assert_eq!(&preimage[..5], &[4u8, 0, 0, 0, 3][..]);
		// input 0 carries an empty script
		assert_eq!(preimage[5 + 36], 0);
		// input 1 carries the substituted script
		let second = 5 + 41;
		assert_eq!(&preimage[second + 36..second + 38], &[1u8, 0x51][..]);
		// lock time and hash type close the preimage
		assert_eq!(&preimage[preimage.len() - 8..], &[10u8, 0, 0, 0, 1, 0, 0, 0][..]);
		assert_eq!(preimage.len(), 4 + 1 + 41 * 3 + 1 + 1 + 8 + 1 + 25 + 4 + 4);
	}

	#[test]
	fn test_sighash_ignores_other_script_sigs() {
		let view = three_input_view();
		let script: Script = "a914e2b3f1b1e11a1b71aa2d4d5dd1bbd8f5a8b1a3ce87".into();
		let digest = build_sighash(&view, 0, &script, 1).unwrap();
		assert_eq!(digest, build_sighash(&view, 0, &script, 1).unwrap());

		let mut signed_elsewhere = view.clone();
		signed_elsewhere.inputs[2].script_sig = "4830450221".into();
		signed_elsewhere.inputs[0].script_sig = "00".into();
		assert_eq!(digest, build_sighash(&signed_elsewhere, 0, &script, 1).unwrap());

		let other_script: Script = "a914e2b3f1b1e11a1b71aa2d4d5dd1bbd8f5a8b1a3ce88".into();
		assert!(digest != build_sighash(&view, 0, &other_script, 1).unwrap());
		assert!(digest != build_sighash(&view, 1, &script, 1).unwrap());
	}

	#[test]
	fn test_sighash_errors() {
		let view = three_input_view();
		let script = Script::default();
		assert_eq!(build_sighash(&view, 0, &script, 2), Err(Error::UnsupportedHashType(2)));
		assert_eq!(build_sighash(&view, 0, &script, 0x81), Err(Error::UnsupportedHashType(0x81)));
		assert_eq!(build_sighash(&view, 3, &script, 1), Err(Error::IndexOutOfRange { index: 3, count: 3 }));
	}

	#[test]
	fn test_signature_with_hash_type() {
		let private: Private = "5HxWvvfubhXpYYpS3tJkw6fq9jE9j18THftkZjHHfmFiWtmAbrj".into();
		let kp = KeyPair::from_private(private.clone()).unwrap();
		let digest = build_sighash(&three_input_view(), 0, &Script::default(), 1).unwrap();

		let signature = signature_with_hash_type(&private, &digest, 1).unwrap();
		assert_eq!(signature[signature.len() - 1], 1);
		assert_eq!(signature[0], 0x30);
		let der = signature[..signature.len() - 1].to_vec().into();
		assert!(kp.public().verify(&digest, &der).unwrap());
	}
}
