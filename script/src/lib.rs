extern crate rustc_hex as hex;
#[macro_use]
extern crate log;
extern crate bitcrypto as crypto;
extern crate chain;
extern crate keys;
extern crate network;
extern crate primitives;
extern crate serialization as ser;

mod builder;
mod error;
mod flags;
mod htlc;
mod interpreter;
mod num;
mod opcode;
mod script;
mod sign;
mod stack;
mod verify;

pub use primitives::{hash, bytes};

pub use self::builder::Builder;
pub use self::error::Error;
pub use self::flags::VerificationFlags;
pub use self::htlc::{
	HASHLOCK_SIZE, HtlcLeg, HtlcParams, HtlcScript, build_source_script, build_destination_script,
	build_htlc_script, claim_script_sig, refund_script_sig,
};
pub use self::interpreter::{eval_script, verify_script, cast_to_bool};
pub use self::num::Num;
pub use self::opcode::Opcode;
pub use self::script::{Script, Instruction, Instructions, MAX_SCRIPT_SIZE, MAX_SCRIPT_ELEMENT_SIZE};
pub use self::sign::{
	SighashBase, UnsignedTransactionInput, TransactionInputSigner, build_sighash, signature_with_hash_type,
};
pub use self::stack::Stack;
pub use self::verify::{SignatureChecker, NoopSignatureChecker, TransactionSignatureChecker};
