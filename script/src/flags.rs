/// Script verification flags.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct VerificationFlags {
	/// Evaluate P2SH subscripts (BIP16).
	pub verify_p2sh: bool,

	/// Require numbers and locktimes to be minimally encoded.
	pub verify_minimaldata: bool,

	/// Verify CHECKLOCKTIMEVERIFY
	///
	/// See BIP65 for details.
	pub verify_locktime: bool,

	/// Support CHECKSEQUENCEVERIFY opcode
	///
	/// See BIP112 for details
	pub verify_checksequence: bool,
}

impl VerificationFlags {
	pub fn verify_p2sh(mut self, value: bool) -> Self {
		self.verify_p2sh = value;
		self
	}

	pub fn verify_minimaldata(mut self, value: bool) -> Self {
		self.verify_minimaldata = value;
		self
	}

	pub fn verify_locktime(mut self, value: bool) -> Self {
		self.verify_locktime = value;
		self
	}

	pub fn verify_checksequence(mut self, value: bool) -> Self {
		self.verify_checksequence = value;
		self
	}

	/// Everything HTLC spends rely on.
	pub fn htlc() -> Self {
		VerificationFlags::default()
			.verify_p2sh(true)
			.verify_minimaldata(true)
			.verify_locktime(true)
			.verify_checksequence(true)
	}
}
