//! Replaces the scriptSig of one input inside a raw transaction.
//!
//! Only the length prefix and the bytes of the targeted scriptSig change.
//! Every other byte, including fields after the transparent outputs, is
//! copied verbatim, so the result is exactly what the node would produce.

use bytes::Bytes;
use ser::{Stream, Serializable, decode_compact_integer};
use decoded::{DecodedTransaction, DecodedInput};
use layout::TransactionLayout;
use Error;

/// How the scriptSig of the target input is located.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Strategy {
	/// Walk the transaction field by field.
	Structural,
	/// Search for `prevout || script length || script` in the raw bytes.
	PatternSearch,
}

impl Default for Strategy {
	fn default() -> Self {
		Strategy::Structural
	}
}

/// Splices `new_script` into input `index` of `raw`.
///
/// Walks the transaction structurally and falls back to a pattern search
/// when the header is not one the walker knows.
pub fn splice_script_sig(raw: &[u8], view: &DecodedTransaction, index: usize, new_script: &[u8]) -> Result<Bytes, Error> {
	splice_script_sig_with(Strategy::Structural, raw, view, index, new_script)
}

pub fn splice_script_sig_with(
	strategy: Strategy,
	raw: &[u8],
	view: &DecodedTransaction,
	index: usize,
	new_script: &[u8],
) -> Result<Bytes, Error> {
	let expected = view.inputs.get(index).ok_or(Error::IndexOutOfRange {
		index: index,
		count: view.inputs.len(),
	})?;

	let (field_start, field_len) = match strategy {
		Strategy::Structural => match locate_structural(raw, view, index) {
			Err(Error::UnsupportedVersion(header)) => {
				warn!(target: "chain", "Unknown transaction header {:#010x}, falling back to pattern search", header);
				locate_by_pattern(raw, expected)?
			},
			other => other?,
		},
		Strategy::PatternSearch => locate_by_pattern(raw, expected)?,
	};

	trace!(target: "chain", "Splicing {} byte script into input {} at offset {}", new_script.len(), index, field_start);

	let mut stream = Stream::default();
	stream
		.append_slice(&raw[..field_start])
		.append_bytes_with_len(new_script)
		.append_slice(&raw[field_start + field_len..]);
	Ok(stream.out())
}

/// Offset and size of the scriptSig field (length prefix included) of input `index`.
fn locate_structural(raw: &[u8], view: &DecodedTransaction, index: usize) -> Result<(usize, usize), Error> {
	let layout = TransactionLayout::parse(raw)?;
	if layout.inputs.len() != view.inputs.len() {
		return Err(Error::InputCountMismatch {
			expected: view.inputs.len(),
			actual: layout.inputs.len(),
		});
	}

	let expected = &view.inputs[index];
	let input = &layout.inputs[index];

	if input.previous_output != expected.previous_output {
		return Err(Error::PatternNotFound);
	}

	if input.script_len != expected.script_sig.len() {
		return Err(Error::LengthMismatch {
			expected: expected.script_sig.len(),
			actual: input.script_len,
		});
	}

	if &raw[input.script_range()] != &expected.script_sig[..] {
		return Err(Error::PatternNotFound);
	}

	let same_prevout = layout.inputs.iter()
		.filter(|other| other.previous_output == input.previous_output)
		.count();
	if same_prevout > 1 {
		return Err(Error::AmbiguousPattern(same_prevout));
	}

	let field = input.script_field();
	Ok((field.start, field.end - field.start))
}

fn locate_by_pattern(raw: &[u8], expected: &DecodedInput) -> Result<(usize, usize), Error> {
	let mut stream = Stream::default();
	stream
		.append(&expected.previous_output)
		.append(&expected.script_sig);
	let pattern = stream.out();

	let matches = find_all(raw, &pattern);
	let offset = match matches.len() {
		0 => return Err(Error::PatternNotFound),
		1 => matches[0],
		n => return Err(Error::AmbiguousPattern(n)),
	};

	let field_start = offset + expected.previous_output.serialized_size();
	let (script_len, len_size) = decode_compact_integer(raw, field_start)?;
	if script_len != expected.script_sig.len() as u64 {
		return Err(Error::LengthMismatch {
			expected: expected.script_sig.len(),
			actual: script_len as usize,
		});
	}

	Ok((field_start, len_size + expected.script_sig.len()))
}

/// Offsets of every, possibly overlapping, occurrence of `needle`.
fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
	if needle.is_empty() || needle.len() > haystack.len() {
		return Vec::new();
	}

	haystack.windows(needle.len())
		.enumerate()
		.filter(|&(_, window)| window == needle)
		.map(|(offset, _)| offset)
		.collect()
}
