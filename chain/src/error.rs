use std::fmt;
use ser;

#[derive(Debug, PartialEq)]
pub enum Error {
	/// Input index is not below the number of inputs.
	IndexOutOfRange {
		index: usize,
		count: usize,
	},
	/// The decoded view does not describe the raw bytes.
	PatternNotFound,
	/// The target input can be matched at more than one place.
	AmbiguousPattern(usize),
	/// Script length on the wire differs from the decoded view.
	LengthMismatch {
		expected: usize,
		actual: usize,
	},
	InputCountMismatch {
		expected: usize,
		actual: usize,
	},
	/// Serialized header the layout walker does not know.
	UnsupportedVersion(u32),
	Malformed(ser::Error),
	InvalidAmount(String),
}

impl From<ser::Error> for Error {
	fn from(e: ser::Error) -> Self {
		Error::Malformed(e)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::IndexOutOfRange { index, count } =>
				write!(f, "Input index {} is out of range, transaction has {} inputs", index, count),
			Error::PatternNotFound => f.write_str("Input not found in raw transaction"),
			Error::AmbiguousPattern(n) => write!(f, "Input matches {} places in raw transaction", n),
			Error::LengthMismatch { expected, actual } =>
				write!(f, "Script length mismatch, expected {}, found {}", expected, actual),
			Error::InputCountMismatch { expected, actual } =>
				write!(f, "Input count mismatch, expected {}, found {}", expected, actual),
			Error::UnsupportedVersion(header) => write!(f, "Unsupported transaction header {:#010x}", header),
			Error::Malformed(ref e) => write!(f, "Malformed transaction: {}", e),
			Error::InvalidAmount(ref amount) => write!(f, "Invalid amount: {}", amount),
		}
	}
}

impl ::std::error::Error for Error {}
