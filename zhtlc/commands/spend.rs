use clap::ArgMatches;
use chain::{TransactionDecoder, splice_script_sig};
use crypto::dhash160;
use keys::Private;
use primitives::bytes::Bytes;
use script::{
	Script, Builder, SighashBase, TransactionInputSigner, TransactionSignatureChecker, VerificationFlags,
	build_sighash, signature_with_hash_type, claim_script_sig, refund_script_sig, verify_script,
};
use config::Config;
use util::{self, parse_arg, hex_arg};

enum Branch {
	Claim { secret: Bytes },
	Refund,
}

pub fn claim(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let secret = hex_arg(matches, "secret")?;
	spend(cfg, matches, Branch::Claim { secret: secret })
}

pub fn refund(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	spend(cfg, matches, Branch::Refund)
}

fn spend(cfg: &Config, matches: &ArgMatches, branch: Branch) -> Result<(), String> {
	let decoder = util::decoder(cfg)?;
	let patched = sign_input(cfg, &*decoder, matches, &branch)?;

	println!("{}", patched);

	if matches.is_present("broadcast") {
		let client = util::rpc_client(cfg)?;
		let txid = client.send_raw_transaction(&patched).map_err(|err| err.to_string())?;
		println!("{}", txid);
	}

	Ok(())
}

/// Signs the HTLC input, splices the unlocking script in and returns the patched transaction.
fn sign_input(cfg: &Config, decoder: &dyn TransactionDecoder, matches: &ArgMatches, branch: &Branch) -> Result<Bytes, String> {
	let raw = hex_arg(matches, "tx")?;
	let input: usize = parse_arg(matches, "input")?;
	let redeem_script: Script = hex_arg(matches, "redeem-script")?.into();
	let private: Private = parse_arg(matches, "key")?;
	if private.network.wif_prefix() != cfg.network.wif_prefix() {
		return Err(format!("Key belongs to {}, expected a {} key", private.network, cfg.network));
	}

	let view = decoder.decode_raw_transaction(&raw)?;

	let hash_type = SighashBase::All as u32;
	let digest = build_sighash(&view, input, &redeem_script, hash_type).map_err(|err| err.to_string())?;
	let signature = signature_with_hash_type(&private, &digest, hash_type).map_err(|err| err.to_string())?;

	let script_sig = match *branch {
		Branch::Claim { ref secret } => claim_script_sig(&signature, secret, &redeem_script),
		Branch::Refund => refund_script_sig(&signature, &redeem_script),
	};

	let patched = splice_script_sig(&raw, &view, input, &script_sig).map_err(|err| err.to_string())?;
	info!(target: "zhtlc", "Signed input {} with a {} byte unlocking script", input, script_sig.len());

	if !matches.is_present("skip-verify") {
		verify_spend(decoder, &patched, input, &redeem_script)?;
	}

	Ok(patched)
}

/// Runs the patched input through the local interpreter against the P2SH output it spends.
fn verify_spend(decoder: &dyn TransactionDecoder, raw: &[u8], input: usize, redeem_script: &Script) -> Result<(), String> {
	let view = decoder.decode_raw_transaction(raw)?;
	let script_sig: Script = match view.inputs.get(input) {
		Some(input) => input.script_sig.clone().into(),
		None => return Err(format!("Patched transaction has no input {}", input)),
	};

	let script_pubkey = Builder::build_p2sh(&dhash160(redeem_script));
	let checker = TransactionSignatureChecker {
		signer: TransactionInputSigner::from(&view),
		input_index: input,
	};

	verify_script(&script_sig, &script_pubkey, &VerificationFlags::htlc(), &checker)
		.map_err(|err| format!("Signed input {} does not satisfy the redeem script: {}", input, err))
}

#[cfg(test)]
mod tests {
	use clap::{self, ArgMatches};
	use chain::{LocalDecoder, OutPoint, DecodedInput, DecodedOutput, UnsignedTransaction};
	use crypto::sha256;
	use keys::{KeyPair, Private};
	use network::Network;
	use primitives::bytes::Bytes;
	use primitives::hash::H256;
	use script::{HtlcLeg, HtlcParams, HtlcScript, build_destination_script};
	use config::{self, Config};
	use super::{Branch, sign_input};

	const SECRET: &'static [u8] = b"zcash htlc secret of 32 bytes..!";

	fn private(seed: u8, network: Network) -> Private {
		Private {
			network: network,
			secret: H256::from(seed),
			compressed: true,
		}
	}

	fn public(seed: u8) -> Bytes {
		KeyPair::from_private(private(seed, Network::Testnet)).unwrap().public().to_vec().into()
	}

	// user key 1 claims on the destination chain
	fn htlc() -> HtlcScript {
		let params = HtlcParams::for_leg(
			HtlcLeg::Destination, H256::from([0xaa; 32]), sha256(SECRET).to_vec().into(), public(1), public(2), 10, 100,
		);
		build_destination_script(&params).unwrap()
	}

	fn funding_spend(htlc: &HtlcScript) -> Bytes {
		let mut tx = UnsignedTransaction::with_version(4);
		tx.inputs = vec![DecodedInput {
			previous_output: OutPoint::new(H256::from(0x77), 0),
			script_sig: Bytes::default(),
			sequence: 0xfffffffe,
		}];
		tx.outputs = vec![DecodedOutput {
			value: 99_000,
			script_pubkey: htlc.p2sh_script_pubkey().to_bytes(),
		}];
		tx.lock_time = 10;
		tx.expiry_height = 1000;
		tx.serialize()
	}

	fn run_claim(secret: &[u8], key: &Private) -> Result<Bytes, String> {
		let htlc = htlc();
		let args = vec![
			"zhtlc".to_owned(), "--testnet".to_owned(), "claim".to_owned(),
			"--tx".to_owned(), funding_spend(&htlc).to_string(),
			"--input".to_owned(), "0".to_owned(),
			"--redeem-script".to_owned(), htlc.to_bytes().to_string(),
			"--secret".to_owned(), Bytes::from(secret.to_vec()).to_string(),
			"--key".to_owned(), key.to_string(),
		];

		let yaml = load_yaml!("../cli.yml");
		let matches = clap::App::from_yaml(yaml).get_matches_from_safe(args).map_err(|err| err.to_string())?;
		let cfg: Config = config::parse(&matches)?;
		let claim_matches: &ArgMatches = matches.subcommand_matches("claim").unwrap();
		let branch = Branch::Claim { secret: Bytes::from(secret.to_vec()) };
		sign_input(&cfg, &LocalDecoder, claim_matches, &branch)
	}

	#[test]
	fn test_claim_signs_and_verifies_locally() {
		let htlc = htlc();
		let raw = funding_spend(&htlc);
		let patched = run_claim(SECRET, &private(1, Network::Testnet)).unwrap();
		assert!(patched.len() > raw.len());
		// header and version group id are untouched
		assert_eq!(&patched[..8], &raw[..8]);
	}

	#[test]
	fn test_claim_with_wrong_secret_fails_verification() {
		let err = run_claim(b"wrong secret", &private(1, Network::Testnet)).unwrap_err();
		assert!(err.starts_with("Signed input 0 does not satisfy the redeem script"), "{}", err);
	}

	#[test]
	fn test_claim_rejects_key_of_other_network() {
		let err = run_claim(SECRET, &private(1, Network::Mainnet)).unwrap_err();
		assert_eq!(err, "Key belongs to mainnet, expected a testnet key");
	}
}
