use std::{fmt, error};
use std::time::Duration;
use reqwest;
use serde_json;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
	/// The node answered with a JSON-RPC error envelope.
	Rpc {
		code: i64,
		message: String,
	},
	/// The request never got an answer.
	Transport(String),
	/// The answer could not be decoded.
	InvalidResponse(String),
	/// A polled condition did not hold in time.
	Timeout {
		what: String,
		waited: Duration,
	},
	/// An asynchronous wallet operation finished unsuccessfully.
	OperationFailed(String),
}

impl Error {
	/// Errors a polling loop retries instead of giving up on.
	pub fn is_transient(&self) -> bool {
		match *self {
			Error::Rpc { .. } | Error::Transport(_) | Error::InvalidResponse(_) => true,
			Error::Timeout { .. } | Error::OperationFailed(_) => false,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::Rpc { code, ref message } => write!(f, "RPC error {}: {}", code, message),
			Error::Transport(ref err) => write!(f, "RPC transport error: {}", err),
			Error::InvalidResponse(ref err) => write!(f, "Invalid RPC response: {}", err),
			Error::Timeout { ref what, waited } => write!(f, "{} not completed within {}s", what, waited.as_secs()),
			Error::OperationFailed(ref err) => write!(f, "Operation failed: {}", err),
		}
	}
}

impl error::Error for Error {}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		Error::Transport(err.to_string())
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::InvalidResponse(err.to_string())
	}
}
