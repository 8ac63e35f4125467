//! Hash time locked contract scripts.
//!
//! ```text
//! <order hash> OP_DROP
//! [<withdrawal> OP_CHECKSEQUENCEVERIFY|OP_CHECKLOCKTIMEVERIFY OP_DROP]
//! OP_IF
//!     OP_SHA256 <hashlock> OP_EQUALVERIFY <claim pubkey> OP_CHECKSIG
//! OP_ELSE
//!     <cancellation> OP_CHECKSEQUENCEVERIFY|OP_CHECKLOCKTIMEVERIFY OP_DROP <refund pubkey> OP_CHECKSIG
//! OP_ENDIF
//! ```
//!
//! The source leg locks relative to the funding output (CSV), the destination
//! leg locks at absolute heights or times (CLTV).

use bytes::Bytes;
use chain::constants::SEQUENCE_LOCKTIME_MASK;
use crypto::dhash160;
use hash::H256;
use keys::{Address, AddressHash};
use network::Network;
use {Builder, Opcode, Script, Num, Error};

/// Size of a SHA-256 hashlock.
pub const HASHLOCK_SIZE: usize = 32;

/// Which side of the swap the contract lives on.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HtlcLeg {
	/// Chain the swapped funds leave from. Relative lock times.
	Source,
	/// Chain the swapped funds arrive on. Absolute lock times.
	Destination,
}

impl HtlcLeg {
	pub fn timelock_opcode(&self) -> Opcode {
		match *self {
			HtlcLeg::Source => Opcode::OP_CHECKSEQUENCEVERIFY,
			HtlcLeg::Destination => Opcode::OP_CHECKLOCKTIMEVERIFY,
		}
	}

	/// Orders the `(claim, refund)` keys of this leg.
	///
	/// The resolver claims on the source chain and the user refunds. On the
	/// destination chain the user claims and the resolver refunds.
	pub fn assign_keys<T>(&self, user: T, resolver: T) -> (T, T) {
		match *self {
			HtlcLeg::Source => (resolver, user),
			HtlcLeg::Destination => (user, resolver),
		}
	}
}

/// Parameters of one HTLC instance.
#[derive(Debug, PartialEq, Clone)]
pub struct HtlcParams {
	pub order_hash: H256,
	/// SHA-256 of the secret.
	pub hashlock: Bytes,
	pub claim_pubkey: Bytes,
	pub refund_pubkey: Bytes,
	/// Delay (source) or lock time (destination) before the claim branch opens.
	///
	/// Source delays are counted in blocks and may not exceed `0xffff`.
	pub withdrawal: i64,
	/// Delay (source) or lock time (destination) before the refund branch opens.
	pub cancellation: i64,
	/// Adds the withdrawal time lock in front of both branches.
	pub lock_till_withdrawal: bool,
}

impl HtlcParams {
	/// Parameters of `leg`, with the swap parties' keys assigned to the claim
	/// and refund branches the way `HtlcLeg::assign_keys` does.
	pub fn for_leg(
		leg: HtlcLeg,
		order_hash: H256,
		hashlock: Bytes,
		user_pubkey: Bytes,
		resolver_pubkey: Bytes,
		withdrawal: i64,
		cancellation: i64,
	) -> Self {
		let (claim_pubkey, refund_pubkey) = leg.assign_keys(user_pubkey, resolver_pubkey);
		HtlcParams {
			order_hash: order_hash,
			hashlock: hashlock,
			claim_pubkey: claim_pubkey,
			refund_pubkey: refund_pubkey,
			withdrawal: withdrawal,
			cancellation: cancellation,
			lock_till_withdrawal: true,
		}
	}

	pub fn validate(&self, leg: HtlcLeg) -> Result<(), Error> {
		if self.hashlock.len() != HASHLOCK_SIZE {
			return Err(Error::InvalidParams(format!("hashlock must be {} bytes, got {}", HASHLOCK_SIZE, self.hashlock.len())));
		}

		for &(name, key) in &[("claim", &self.claim_pubkey), ("refund", &self.refund_pubkey)] {
			if key.len() != 33 && key.len() != 65 {
				return Err(Error::InvalidParams(format!("{} public key must be 33 or 65 bytes, got {}", name, key.len())));
			}
		}

		for &(name, value) in &[("withdrawal", self.withdrawal), ("cancellation", self.cancellation)] {
			if value < 0 || value > u32::max_value() as i64 {
				return Err(Error::InvalidParams(format!("{} lock {} is out of range", name, value)));
			}

			// anything above the mask would be read back as flags by OP_CHECKSEQUENCEVERIFY
			if leg == HtlcLeg::Source && value > SEQUENCE_LOCKTIME_MASK as i64 {
				return Err(Error::InvalidParams(format!("{} delay {} exceeds {} blocks", name, value, SEQUENCE_LOCKTIME_MASK)));
			}
		}

		Ok(())
	}
}

/// Compiled HTLC redeem script.
#[derive(Debug, PartialEq, Clone)]
pub struct HtlcScript {
	leg: HtlcLeg,
	script: Script,
}

impl HtlcScript {
	pub fn leg(&self) -> HtlcLeg {
		self.leg
	}

	pub fn script(&self) -> &Script {
		&self.script
	}

	pub fn to_bytes(&self) -> Bytes {
		self.script.to_bytes()
	}

	/// `hash160` of the redeem script.
	pub fn script_hash(&self) -> AddressHash {
		dhash160(&self.script)
	}

	/// Output script paying to this contract.
	pub fn p2sh_script_pubkey(&self) -> Script {
		Builder::build_p2sh(&self.script_hash())
	}

	/// Transparent P2SH address funds are deposited to.
	pub fn address(&self, network: Network) -> Address {
		Address::p2sh(self.script_hash(), network)
	}

	pub fn claim_script_sig(&self, signature: &[u8], secret: &[u8]) -> Script {
		claim_script_sig(signature, secret, &self.script)
	}

	pub fn refund_script_sig(&self, signature: &[u8]) -> Script {
		refund_script_sig(signature, &self.script)
	}
}

impl From<HtlcScript> for Script {
	fn from(htlc: HtlcScript) -> Self {
		htlc.script
	}
}

/// HTLC with relative lock times, locking funds on the source chain.
pub fn build_source_script(params: &HtlcParams) -> Result<HtlcScript, Error> {
	build_htlc_script(HtlcLeg::Source, params)
}

/// HTLC with absolute lock times, locking funds on the destination chain.
pub fn build_destination_script(params: &HtlcParams) -> Result<HtlcScript, Error> {
	build_htlc_script(HtlcLeg::Destination, params)
}

pub fn build_htlc_script(leg: HtlcLeg, params: &HtlcParams) -> Result<HtlcScript, Error> {
	params.validate(leg)?;
	let timelock = leg.timelock_opcode();

	let mut builder = Builder::default()
		.push_bytes(&*params.order_hash)
		.push_opcode(Opcode::OP_DROP);

	if params.lock_till_withdrawal {
		builder = builder
			.push_num(Num::from(params.withdrawal))
			.push_opcode(timelock)
			.push_opcode(Opcode::OP_DROP);
	}

	let script = builder
		.push_opcode(Opcode::OP_IF)
		.push_opcode(Opcode::OP_SHA256)
		.push_bytes(&params.hashlock)
		.push_opcode(Opcode::OP_EQUALVERIFY)
		.push_bytes(&params.claim_pubkey)
		.push_opcode(Opcode::OP_CHECKSIG)
		.push_opcode(Opcode::OP_ELSE)
		.push_num(Num::from(params.cancellation))
		.push_opcode(timelock)
		.push_opcode(Opcode::OP_DROP)
		.push_bytes(&params.refund_pubkey)
		.push_opcode(Opcode::OP_CHECKSIG)
		.push_opcode(Opcode::OP_ENDIF)
		.into_script();

	debug!(target: "script", "Built {:?} HTLC for order {}: {} bytes", leg, params.order_hash, script.len());

	Ok(HtlcScript {
		leg: leg,
		script: script,
	})
}

/// `<signature> <secret> OP_TRUE <redeem script>`, spending the claim branch.
pub fn claim_script_sig(signature: &[u8], secret: &[u8], redeem_script: &Script) -> Script {
	Builder::default()
		.push_bytes(signature)
		.push_data(secret)
		.push_opcode(Opcode::OP_1)
		.push_bytes(redeem_script)
		.into_script()
}

/// `<signature> OP_FALSE <redeem script>`, spending the refund branch.
pub fn refund_script_sig(signature: &[u8], redeem_script: &Script) -> Script {
	Builder::default()
		.push_bytes(signature)
		.push_opcode(Opcode::OP_0)
		.push_bytes(redeem_script)
		.into_script()
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use crypto::sha256;
	use hash::H256;
	use keys::{KeyPair, Private, Type};
	use network::Network;
	use chain::{OutPoint, DecodedInput, DecodedOutput, DecodedTransaction, UnsignedTransaction,
		decode_transaction, splice_script_sig};
	use sign::{build_sighash, signature_with_hash_type, TransactionInputSigner};
	use {Opcode, Script, Error, VerificationFlags, TransactionSignatureChecker, verify_script};
	use super::{HtlcLeg, HtlcParams, HtlcScript, build_source_script, build_destination_script};

	const SECRET: &'static [u8] = b"zcash htlc secret of 32 bytes..!";

	fn private(seed: u8) -> Private {
		Private {
			network: Network::Testnet,
			secret: H256::from(seed),
			compressed: true,
		}
	}

	fn public(seed: u8) -> Bytes {
		KeyPair::from_private(private(seed)).unwrap().public().to_vec().into()
	}

	// key 1 belongs to the user, key 2 to the resolver
	fn params(leg: HtlcLeg) -> HtlcParams {
		HtlcParams::for_leg(leg, H256::from([0xaa; 32]), sha256(SECRET).to_vec().into(), public(1), public(2), 10, 100)
	}

	fn opcodes(script: &Script) -> Vec<(Opcode, usize)> {
		script.iter()
			.map(|instruction| instruction.unwrap())
			.map(|instruction| (instruction.opcode, instruction.data.map_or(0, |data| data.len())))
			.collect()
	}

	fn expected_shape(timelock: Opcode, key_len: usize) -> Vec<(Opcode, usize)> {
		vec![
			(Opcode::OP_PUSHBYTES_32, 32),
			(Opcode::OP_DROP, 0),
			(Opcode::OP_10, 0),
			(timelock, 0),
			(Opcode::OP_DROP, 0),
			(Opcode::OP_IF, 0),
			(Opcode::OP_SHA256, 0),
			(Opcode::OP_PUSHBYTES_32, 32),
			(Opcode::OP_EQUALVERIFY, 0),
			(Opcode::OP_PUSHBYTES_33, key_len),
			(Opcode::OP_CHECKSIG, 0),
			(Opcode::OP_ELSE, 0),
			(Opcode::OP_PUSHBYTES_1, 1),
			(timelock, 0),
			(Opcode::OP_DROP, 0),
			(Opcode::OP_PUSHBYTES_33, key_len),
			(Opcode::OP_CHECKSIG, 0),
			(Opcode::OP_ENDIF, 0),
		]
	}

	#[test]
	fn test_source_script_shape() {
		let htlc = build_source_script(&params(HtlcLeg::Source)).unwrap();
		assert_eq!(htlc.leg(), HtlcLeg::Source);
		assert_eq!(opcodes(htlc.script()), expected_shape(Opcode::OP_CHECKSEQUENCEVERIFY, 33));
		assert_eq!(&htlc.script()[1..33], &[0xaa; 32][..]);
		// resolver claims on the source chain
		assert_eq!(&htlc.script()[74..107], &public(2)[..]);
	}

	#[test]
	fn test_destination_script_shape() {
		let htlc = build_destination_script(&params(HtlcLeg::Destination)).unwrap();
		assert_eq!(opcodes(htlc.script()), expected_shape(Opcode::OP_CHECKLOCKTIMEVERIFY, 33));
		// user claims on the destination chain
		assert_eq!(&htlc.script()[74..107], &public(1)[..]);
		assert_eq!(htlc.script().to_string(), format!(
			"{} OP_DROP OP_10 OP_CHECKLOCKTIMEVERIFY OP_DROP OP_IF OP_SHA256 {} OP_EQUALVERIFY {} OP_CHECKSIG \
			OP_ELSE 64 OP_CHECKLOCKTIMEVERIFY OP_DROP {} OP_CHECKSIG OP_ENDIF",
			"aa".repeat(32), sha256(SECRET), public(1), public(2)));
	}

	#[test]
	fn test_legs_differ_only_by_timelock_opcode() {
		let params = params(HtlcLeg::Source);
		let source = build_source_script(&params).unwrap().to_bytes();
		let destination = build_destination_script(&params).unwrap().to_bytes();
		assert_eq!(source.len(), destination.len());

		let differences: Vec<usize> = (0..source.len()).filter(|i| source[*i] != destination[*i]).collect();
		assert_eq!(differences.len(), 2);
		for i in differences {
			assert_eq!(source[i], Opcode::OP_CHECKSEQUENCEVERIFY as u8);
			assert_eq!(destination[i], Opcode::OP_CHECKLOCKTIMEVERIFY as u8);
		}
	}

	#[test]
	fn test_key_assignment_per_leg() {
		let source = params(HtlcLeg::Source);
		assert_eq!((source.claim_pubkey, source.refund_pubkey), (public(2), public(1)));
		let destination = params(HtlcLeg::Destination);
		assert_eq!((destination.claim_pubkey, destination.refund_pubkey), (public(1), public(2)));
		assert!(destination.lock_till_withdrawal);
	}

	#[test]
	fn test_without_withdrawal_lock() {
		let mut params = params(HtlcLeg::Destination);
		params.lock_till_withdrawal = false;
		let htlc = build_destination_script(&params).unwrap();
		let shape = opcodes(htlc.script());
		assert_eq!(shape.len(), 15);
		assert_eq!(shape[2], (Opcode::OP_IF, 0));
	}

	#[test]
	fn test_number_pushes_are_minimal() {
		let mut params = params(HtlcLeg::Destination);
		params.withdrawal = 0;
		params.cancellation = 500_000_000;
		let htlc = build_destination_script(&params).unwrap();
		let shape = opcodes(htlc.script());
		assert_eq!(shape[2], (Opcode::OP_0, 0));
		assert_eq!(shape[12], (Opcode::OP_PUSHBYTES_4, 4));
	}

	#[test]
	fn test_invalid_params() {
		let valid = params(HtlcLeg::Source);

		let mut params = valid.clone();
		params.hashlock = vec![0u8; 31].into();
		assert!(match build_source_script(&params) { Err(Error::InvalidParams(_)) => true, _ => false });

		let mut params = valid.clone();
		params.claim_pubkey = vec![2u8; 32].into();
		assert!(match build_source_script(&params) { Err(Error::InvalidParams(_)) => true, _ => false });

		let mut params = valid.clone();
		params.refund_pubkey = vec![4u8; 64].into();
		assert!(match build_destination_script(&params) { Err(Error::InvalidParams(_)) => true, _ => false });

		let mut params = valid.clone();
		params.cancellation = -1;
		assert!(match build_destination_script(&params) { Err(Error::InvalidParams(_)) => true, _ => false });

		let mut params = valid.clone();
		params.claim_pubkey = vec![4u8; 65].into();
		assert!(build_source_script(&params).is_ok());
	}

	#[test]
	fn test_source_delay_fits_sequence_mask() {
		let mut params = params(HtlcLeg::Source);
		params.cancellation = 0xffff;
		assert!(build_source_script(&params).is_ok());

		// 70000 would be masked down to 4464 blocks
		params.cancellation = 70_000;
		assert!(match build_source_script(&params) { Err(Error::InvalidParams(_)) => true, _ => false });

		params.cancellation = 100;
		params.withdrawal = (1 << 22) | 10;
		assert!(match build_source_script(&params) { Err(Error::InvalidParams(_)) => true, _ => false });

		// absolute lock times use the whole range
		assert!(build_destination_script(&params).is_ok());
	}

	#[test]
	fn test_p2sh_address() {
		let htlc = build_destination_script(&params(HtlcLeg::Destination)).unwrap();
		let address = htlc.address(Network::Testnet);
		assert_eq!(address.kind, Type::P2SH);
		assert!(address.to_string().starts_with("t2"));
		assert!(htlc.address(Network::Mainnet).to_string().starts_with("t3"));
		assert!(htlc.p2sh_script_pubkey().is_pay_to_script_hash());
		assert_eq!(&htlc.p2sh_script_pubkey()[2..22], &*htlc.script_hash());
	}

	/// Unsigned transaction spending the HTLC output at input 0.
	fn spend(htlc: &HtlcScript, lock_time: u32, sequence: u32) -> (Bytes, DecodedTransaction) {
		let mut tx = UnsignedTransaction::with_version(4);
		tx.inputs = vec![
			DecodedInput {
				previous_output: OutPoint::new(H256::from(0x77), 0),
				script_sig: Bytes::default(),
				sequence: sequence,
			},
			DecodedInput {
				previous_output: OutPoint::new(H256::from(0x78), 1),
				script_sig: Bytes::default(),
				sequence: sequence,
			},
		];
		tx.outputs = vec![DecodedOutput {
			value: 99_000,
			script_pubkey: htlc.p2sh_script_pubkey().to_bytes(),
		}];
		tx.lock_time = lock_time;
		tx.expiry_height = 1000;

		let raw = tx.serialize();
		let view = decode_transaction(&raw).unwrap();
		(raw, view)
	}

	/// Signs input 0, splices the unlocking script in and runs the interpreter on the result.
	fn redeem(htlc: &HtlcScript, raw: &[u8], view: &DecodedTransaction, key: u8, secret: Option<&[u8]>) -> Result<(), Error> {
		let digest = build_sighash(view, 0, htlc.script(), 1).unwrap();
		let signature = signature_with_hash_type(&private(key), &digest, 1).unwrap();
		let script_sig = match secret {
			Some(secret) => htlc.claim_script_sig(&signature, secret),
			None => htlc.refund_script_sig(&signature),
		};

		let patched = splice_script_sig(raw, view, 0, &script_sig).unwrap();
		let decoded = decode_transaction(&patched).unwrap();
		assert_eq!(decoded.inputs[0].script_sig, script_sig.to_bytes());
		assert_eq!(decoded.inputs[1], view.inputs[1]);

		let checker = TransactionSignatureChecker {
			signer: TransactionInputSigner::from(&decoded),
			input_index: 0,
		};
		let script_sig: Script = decoded.inputs[0].script_sig.clone().into();
		verify_script(&script_sig, &htlc.p2sh_script_pubkey(), &VerificationFlags::htlc(), &checker)
	}

	#[test]
	fn test_destination_claim_end_to_end() {
		let htlc = build_destination_script(&params(HtlcLeg::Destination)).unwrap();
		let (raw, view) = spend(&htlc, 10, 0xfffffffe);

		assert_eq!(redeem(&htlc, &raw, &view, 1, Some(SECRET)), Ok(()));
		assert_eq!(redeem(&htlc, &raw, &view, 1, Some(b"wrong secret")), Err(Error::EqualVerify));
		assert_eq!(redeem(&htlc, &raw, &view, 2, Some(SECRET)), Err(Error::EvalFalse));
	}

	#[test]
	fn test_destination_claim_before_withdrawal() {
		let htlc = build_destination_script(&params(HtlcLeg::Destination)).unwrap();
		let (raw, view) = spend(&htlc, 9, 0xfffffffe);
		assert_eq!(redeem(&htlc, &raw, &view, 1, Some(SECRET)), Err(Error::UnsatisfiedLocktime));

		// a final sequence disables the lock time
		let (raw, view) = spend(&htlc, 10, 0xffffffff);
		assert_eq!(redeem(&htlc, &raw, &view, 1, Some(SECRET)), Err(Error::UnsatisfiedLocktime));
	}

	#[test]
	fn test_destination_refund_after_cancellation() {
		let htlc = build_destination_script(&params(HtlcLeg::Destination)).unwrap();

		let (raw, view) = spend(&htlc, 99, 0xfffffffe);
		assert_eq!(redeem(&htlc, &raw, &view, 2, None), Err(Error::UnsatisfiedLocktime));

		let (raw, view) = spend(&htlc, 100, 0xfffffffe);
		assert_eq!(redeem(&htlc, &raw, &view, 2, None), Ok(()));
		assert_eq!(redeem(&htlc, &raw, &view, 1, None), Err(Error::EvalFalse));
	}

	#[test]
	fn test_source_claim_and_refund() {
		let htlc = build_source_script(&params(HtlcLeg::Source)).unwrap();

		// resolver claims once the funding output is 10 blocks deep
		let (raw, view) = spend(&htlc, 0, 10);
		assert_eq!(redeem(&htlc, &raw, &view, 2, Some(SECRET)), Ok(()));
		let (raw, view) = spend(&htlc, 0, 9);
		assert_eq!(redeem(&htlc, &raw, &view, 2, Some(SECRET)), Err(Error::UnsatisfiedLocktime));

		// user refunds after 100 blocks
		let (raw, view) = spend(&htlc, 0, 99);
		assert_eq!(redeem(&htlc, &raw, &view, 1, None), Err(Error::UnsatisfiedLocktime));
		let (raw, view) = spend(&htlc, 0, 100);
		assert_eq!(redeem(&htlc, &raw, &view, 1, None), Ok(()));
	}
}
