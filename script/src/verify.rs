use keys::{Public, Signature};
use chain::constants::{
	SEQUENCE_FINAL, SEQUENCE_LOCKTIME_DISABLE_FLAG, SEQUENCE_LOCKTIME_MASK, SEQUENCE_LOCKTIME_TYPE_FLAG,
	LOCKTIME_THRESHOLD,
};
use sign::TransactionInputSigner;
use {Script, Num};

/// Checks transaction signature
pub trait SignatureChecker {
	/// `signature` ends with the hash type byte.
	fn check_signature(&self, signature: &[u8], public: &[u8], script_code: &Script) -> bool;

	fn check_lock_time(&self, lock_time: Num) -> bool;

	fn check_sequence(&self, sequence: Num) -> bool;
}

/// Accepts every signature and time condition.
pub struct NoopSignatureChecker;

impl SignatureChecker for NoopSignatureChecker {
	fn check_signature(&self, _signature: &[u8], _public: &[u8], _script_code: &Script) -> bool {
		true
	}

	fn check_lock_time(&self, _lock_time: Num) -> bool {
		true
	}

	fn check_sequence(&self, _sequence: Num) -> bool {
		true
	}
}

#[derive(Debug)]
pub struct TransactionSignatureChecker {
	pub signer: TransactionInputSigner,
	pub input_index: usize,
}

impl SignatureChecker for TransactionSignatureChecker {
	fn check_signature(&self, signature: &[u8], public: &[u8], script_code: &Script) -> bool {
		let (hash_type, der) = match signature.split_last() {
			Some((hash_type, der)) => (*hash_type as u32, der),
			None => return false,
		};

		let public = match Public::from_slice(public) {
			Ok(public) => public,
			Err(_) => return false,
		};

		let hash = match self.signer.signature_hash(self.input_index, script_code, hash_type) {
			Ok(hash) => hash,
			Err(err) => {
				trace!(target: "script", "Signature hash failed: {}", err);
				return false;
			},
		};

		let signature: Signature = der.into();
		public.verify(&hash, &signature).unwrap_or(false)
	}

	fn check_lock_time(&self, lock_time: Num) -> bool {
		let lock_time: i64 = lock_time.into();
		let tx_lock_time = self.signer.lock_time as i64;
		let threshold = LOCKTIME_THRESHOLD as i64;

		// There are two kinds of nLockTime: lock-by-blockheight
		// and lock-by-blocktime, distinguished by whether
		// nLockTime < LOCKTIME_THRESHOLD.
		//
		// We want to compare apples to apples, so fail the script
		// unless the type of nLockTime being tested is the same as
		// the nLockTime in the transaction.
		if !((tx_lock_time < threshold && lock_time < threshold) ||
			(tx_lock_time >= threshold && lock_time >= threshold)) {
			return false;
		}

		if lock_time > tx_lock_time {
			return false;
		}

		// A final input would let the transaction be mined regardless of its lock time.
		self.signer.inputs[self.input_index].sequence != SEQUENCE_FINAL
	}

	fn check_sequence(&self, sequence: Num) -> bool {
		let sequence: i64 = sequence.into();

		// Relative lock times are supported by comparing the passed
		// in operand to the sequence number of the input.
		let to_sequence = self.signer.inputs[self.input_index].sequence as i64;

		// Fail if the transaction's version number is not set high
		// enough to trigger BIP 68 rules.
		if self.signer.version < 2 {
			return false;
		}

		// Sequence numbers with their most significant bit set are not
		// consensus constrained. Testing that the transaction's sequence
		// number do not have this bit set prevents using this property
		// to get around a CHECKSEQUENCEVERIFY check.
		if to_sequence & SEQUENCE_LOCKTIME_DISABLE_FLAG as i64 != 0 {
			return false;
		}

		// Mask off any bits that do not have consensus-enforced meaning
		// before doing the integer comparisons
		let locktime_mask = (SEQUENCE_LOCKTIME_TYPE_FLAG | SEQUENCE_LOCKTIME_MASK) as i64;
		let to_sequence_masked = to_sequence & locktime_mask;
		let sequence_masked = sequence & locktime_mask;

		// There are two kinds of nSequence: lock-by-blockheight
		// and lock-by-blocktime, distinguished by whether
		// sequence_masked < SEQUENCE_LOCKTIME_TYPE_FLAG.
		let type_flag = SEQUENCE_LOCKTIME_TYPE_FLAG as i64;
		if !((to_sequence_masked < type_flag && sequence_masked < type_flag) ||
			(to_sequence_masked >= type_flag && sequence_masked >= type_flag)) {
			return false;
		}

		sequence_masked <= to_sequence_masked
	}
}
