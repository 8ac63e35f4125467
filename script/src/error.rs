use std::fmt;
use keys::Error as KeysError;
use Opcode;

/// Script builder, signer and interpreter errors.
#[derive(Debug, PartialEq)]
pub enum Error {
	/// HTLC parameters rejected before any script is emitted.
	InvalidParams(String),
	UnsupportedHashType(u32),
	IndexOutOfRange {
		index: usize,
		count: usize,
	},
	Keys(KeysError),

	// Max sizes.
	ScriptSize,
	PushSize,

	// Logical/Format/Canonical errors.
	BadOpcode,
	DisabledOpcode(Opcode),
	UnsupportedOpcode(Opcode),
	InvalidStackOperation,
	UnbalancedConditional,
	NumberOverflow,
	NumberNotMinimallyEncoded,

	// Failed verify operations
	Verify,
	EqualVerify,
	CheckSigVerify,

	// BIP65 and BIP112
	NegativeLocktime,
	UnsatisfiedLocktime,

	// P2SH
	SignaturePushOnly,

	ReturnOpcode,
	EvalFalse,
}

impl From<KeysError> for Error {
	fn from(e: KeysError) -> Self {
		Error::Keys(e)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::InvalidParams(ref reason) => write!(f, "Invalid HTLC parameters: {}", reason),
			Error::UnsupportedHashType(hash_type) => write!(f, "Unsupported signature hash type {:#x}", hash_type),
			Error::IndexOutOfRange { index, count } =>
				write!(f, "Input index {} is out of range, transaction has {} inputs", index, count),
			Error::Keys(ref e) => write!(f, "Key error: {}", e),

			Error::ScriptSize => f.write_str("Script is too long"),
			Error::PushSize => f.write_str("Pushing too many bytes"),

			Error::BadOpcode => f.write_str("Bad Opcode"),
			Error::DisabledOpcode(ref opcode) => write!(f, "Disabled Opcode: {}", opcode),
			Error::UnsupportedOpcode(ref opcode) => write!(f, "Unsupported Opcode: {}", opcode),
			Error::InvalidStackOperation => f.write_str("Invalid stack operation"),
			Error::UnbalancedConditional => f.write_str("Unbalanced conditional"),
			Error::NumberOverflow => f.write_str("Number overflow"),
			Error::NumberNotMinimallyEncoded => f.write_str("Number not minimally encoded"),

			Error::Verify => f.write_str("Failed verify operation"),
			Error::EqualVerify => f.write_str("Failed equal verify operation"),
			Error::CheckSigVerify => f.write_str("Failed signature check"),

			Error::NegativeLocktime => f.write_str("Negative locktime"),
			Error::UnsatisfiedLocktime => f.write_str("UnsatisfiedLocktime"),

			Error::SignaturePushOnly => f.write_str("Only push opcodes are allowed in this signature"),

			Error::ReturnOpcode => f.write_str("Used return opcode"),
			Error::EvalFalse => f.write_str("Script evaluated to false"),
		}
	}
}

impl ::std::error::Error for Error {}
