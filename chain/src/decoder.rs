#[cfg(any(test, feature = "test-helpers"))]
use hex::FromHex;
use decoded::{DecodedInput, DecodedTransaction, TransactionDecoder};
use layout::TransactionLayout;
use Error;

/// Decodes the transparent part of a raw transaction.
pub fn decode_transaction(raw: &[u8]) -> Result<DecodedTransaction, Error> {
	let layout = TransactionLayout::parse(raw)?;

	let inputs = layout.inputs.iter()
		.map(|input| DecodedInput {
			previous_output: input.previous_output.clone(),
			script_sig: raw[input.script_range()].into(),
			sequence: input.sequence,
		})
		.collect();

	let transaction = DecodedTransaction {
		version: layout.version(),
		overwintered: layout.overwintered(),
		version_group_id: layout.version_group_id,
		inputs: inputs,
		outputs: layout.outputs,
		lock_time: layout.lock_time,
		expiry_height: layout.expiry_height,
	};

	Ok(transaction)
}

/// In-process transaction decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalDecoder;

impl TransactionDecoder for LocalDecoder {
	fn decode_raw_transaction(&self, raw: &[u8]) -> Result<DecodedTransaction, String> {
		decode_transaction(raw).map_err(|e| e.to_string())
	}
}

#[cfg(any(test, feature = "test-helpers"))]
impl From<&'static str> for DecodedTransaction {
	fn from(s: &'static str) -> Self {
		decode_transaction(&s.from_hex::<Vec<u8>>().unwrap()).unwrap()
	}
}
