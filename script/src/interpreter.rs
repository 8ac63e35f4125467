//! Script interpreter.
//!
//! Evaluates the opcodes transparent HTLC, P2SH and P2PKH spends are built
//! from. Anything else is rejected with `Error::UnsupportedOpcode`.

use bytes::Bytes;
use crypto::{sha256, dhash160, dhash256};
use chain::constants::SEQUENCE_LOCKTIME_DISABLE_FLAG;
use script::{MAX_SCRIPT_SIZE, MAX_SCRIPT_ELEMENT_SIZE};
use {Script, Opcode, Num, Error, Stack, VerificationFlags, SignatureChecker};

/// Numbers pushed as lock times may be 5 bytes long.
const LOCKTIME_NUM_SIZE: usize = 5;

/// Verifies that `script_sig` unlocks `script_pubkey`.
pub fn verify_script(
	script_sig: &Script,
	script_pubkey: &Script,
	flags: &VerificationFlags,
	checker: &dyn SignatureChecker,
) -> Result<(), Error> {
	let is_p2sh = flags.verify_p2sh && script_pubkey.is_pay_to_script_hash();
	if is_p2sh && !script_sig.is_push_only() {
		return Err(Error::SignaturePushOnly);
	}

	let mut stack = Stack::new();
	eval_script(&mut stack, script_sig, flags, checker)?;
	let mut stack_copy = stack.clone();

	eval_script(&mut stack, script_pubkey, flags, checker)?;
	if !top_is_true(&stack)? {
		return Err(Error::EvalFalse);
	}

	if is_p2sh {
		// the last push of the signature is the serialized redeem script
		let redeem_script: Script = stack_copy.pop()?.into();
		trace!(target: "script", "Evaluating redeem script {}", redeem_script);
		eval_script(&mut stack_copy, &redeem_script, flags, checker)?;
		if !top_is_true(&stack_copy)? {
			return Err(Error::EvalFalse);
		}
	}

	Ok(())
}

fn top_is_true(stack: &Stack<Bytes>) -> Result<bool, Error> {
	if stack.is_empty() {
		return Ok(false);
	}

	Ok(cast_to_bool(stack.last()?))
}

/// Evaluates `script` on top of `stack`.
pub fn eval_script(
	stack: &mut Stack<Bytes>,
	script: &Script,
	flags: &VerificationFlags,
	checker: &dyn SignatureChecker,
) -> Result<(), Error> {
	if script.len() > MAX_SCRIPT_SIZE {
		return Err(Error::ScriptSize);
	}

	let mut exec_stack: Vec<bool> = Vec::new();

	for instruction in script.iter() {
		let instruction = instruction?;
		let opcode = instruction.opcode;
		let executing = exec_stack.iter().all(|x| *x);

		if let Some(data) = instruction.data {
			if data.len() > MAX_SCRIPT_ELEMENT_SIZE {
				return Err(Error::PushSize);
			}
		}

		if opcode.is_disabled() {
			return Err(Error::DisabledOpcode(opcode));
		}

		let is_conditional = match opcode {
			Opcode::OP_IF | Opcode::OP_NOTIF | Opcode::OP_ELSE | Opcode::OP_ENDIF => true,
			_ => false,
		};

		if !executing && !is_conditional {
			continue;
		}

		match opcode {
			_ if instruction.data.is_some() => {
				let data = instruction.data.unwrap_or(&[]);
				stack.push(data.to_vec().into());
			},
			Opcode::OP_1NEGATE | Opcode::OP_1 | Opcode::OP_2 | Opcode::OP_3 | Opcode::OP_4 |
			Opcode::OP_5 | Opcode::OP_6 | Opcode::OP_7 | Opcode::OP_8 | Opcode::OP_9 |
			Opcode::OP_10 | Opcode::OP_11 | Opcode::OP_12 | Opcode::OP_13 | Opcode::OP_14 |
			Opcode::OP_15 | Opcode::OP_16 => {
				let value = Num::from(opcode.decode_op_n());
				stack.push(value.to_bytes());
			},
			Opcode::OP_NOP | Opcode::OP_NOP1 | Opcode::OP_NOP4 | Opcode::OP_NOP5 |
			Opcode::OP_NOP6 | Opcode::OP_NOP7 | Opcode::OP_NOP8 | Opcode::OP_NOP9 |
			Opcode::OP_NOP10 => {},
			Opcode::OP_CHECKLOCKTIMEVERIFY => {
				if flags.verify_locktime {
					// Note that elsewhere numeric opcodes are limited to
					// operands in the range -2**31+1 to 2**31-1, however it is
					// legal for opcodes to produce results exceeding that
					// range. This limitation is implemented by CScriptNum's
					// default 4-byte limit.
					//
					// Thus as a special case we tell CScriptNum to accept up
					// to 5-byte bignums, which are good until 2**39-1, well
					// beyond the 2**32-1 limit of the nLockTime field itself.
					let lock_time = Num::from_slice(stack.last()?, flags.verify_minimaldata, LOCKTIME_NUM_SIZE)?;

					// In the rare event that the argument may be < 0 due to
					// some arithmetic being done first, you can always use
					// 0 MAX CHECKLOCKTIMEVERIFY.
					if lock_time.is_negative() {
						return Err(Error::NegativeLocktime);
					}

					if !checker.check_lock_time(lock_time) {
						return Err(Error::UnsatisfiedLocktime);
					}
				}
			},
			Opcode::OP_CHECKSEQUENCEVERIFY => {
				if flags.verify_checksequence {
					let sequence = Num::from_slice(stack.last()?, flags.verify_minimaldata, LOCKTIME_NUM_SIZE)?;

					if sequence.is_negative() {
						return Err(Error::NegativeLocktime);
					}

					// Sequences with the disable flag set behave as a NOP.
					let value: i64 = sequence.into();
					if value & SEQUENCE_LOCKTIME_DISABLE_FLAG as i64 == 0 && !checker.check_sequence(sequence) {
						return Err(Error::UnsatisfiedLocktime);
					}
				}
			},
			Opcode::OP_IF | Opcode::OP_NOTIF => {
				let mut exec_value = false;
				if executing {
					exec_value = cast_to_bool(&stack.pop().map_err(|_| Error::UnbalancedConditional)?);
					if opcode == Opcode::OP_NOTIF {
						exec_value = !exec_value;
					}
				}
				exec_stack.push(exec_value);
			},
			Opcode::OP_ELSE => {
				match exec_stack.last_mut() {
					Some(last) => *last = !*last,
					None => return Err(Error::UnbalancedConditional),
				}
			},
			Opcode::OP_ENDIF => {
				if exec_stack.pop().is_none() {
					return Err(Error::UnbalancedConditional);
				}
			},
			Opcode::OP_VERIFY => {
				let exec_value = cast_to_bool(&stack.pop()?);
				if !exec_value {
					return Err(Error::Verify);
				}
			},
			Opcode::OP_RETURN => {
				return Err(Error::ReturnOpcode);
			},
			Opcode::OP_DROP => {
				stack.pop()?;
			},
			Opcode::OP_DUP => {
				stack.dup(1)?;
			},
			Opcode::OP_SIZE => {
				let n = Num::from(stack.last()?.len() as i64);
				stack.push(n.to_bytes());
			},
			Opcode::OP_EQUAL | Opcode::OP_EQUALVERIFY => {
				let v1 = stack.pop()?;
				let v2 = stack.pop()?;
				let equal = v1 == v2;
				if opcode == Opcode::OP_EQUALVERIFY {
					if !equal {
						return Err(Error::EqualVerify);
					}
				} else {
					stack.push(bool_to_bytes(equal));
				}
			},
			Opcode::OP_SHA256 => {
				let v = stack.pop()?;
				stack.push(sha256(&v).to_vec().into());
			},
			Opcode::OP_HASH160 => {
				let v = stack.pop()?;
				stack.push(dhash160(&v).to_vec().into());
			},
			Opcode::OP_HASH256 => {
				let v = stack.pop()?;
				stack.push(dhash256(&v).to_vec().into());
			},
			Opcode::OP_CHECKSIG | Opcode::OP_CHECKSIGVERIFY => {
				let pubkey = stack.pop()?;
				let signature = stack.pop()?;
				let success = checker.check_signature(&signature, &pubkey, script);

				if opcode == Opcode::OP_CHECKSIGVERIFY {
					if !success {
						return Err(Error::CheckSigVerify);
					}
				} else {
					stack.push(bool_to_bytes(success));
				}
			},
			_ => return Err(Error::UnsupportedOpcode(opcode)),
		}
	}

	if !exec_stack.is_empty() {
		return Err(Error::UnbalancedConditional);
	}

	Ok(())
}

fn bool_to_bytes(value: bool) -> Bytes {
	if value {
		vec![1].into()
	} else {
		Bytes::default()
	}
}

/// Any non-zero value is true, except negative zero.
pub fn cast_to_bool(data: &[u8]) -> bool {
	if data.is_empty() {
		return false;
	}

	if data[..data.len() - 1].iter().any(|x| x != &0) {
		return true;
	}

	let last = data[data.len() - 1];
	!(last == 0 || last == 0x80)
}
