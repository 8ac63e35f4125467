extern crate rustc_hex as hex;
#[macro_use]
extern crate log;
extern crate primitives;
extern crate serialization as ser;

pub mod constants;

mod amount;
mod decoded;
mod decoder;
mod error;
mod layout;
mod splice;
#[cfg(any(test, feature = "test-helpers"))]
mod unsigned;

pub use primitives::{hash, bytes};

pub use amount::{parse_amount, format_amount};
pub use decoded::{OutPoint, DecodedInput, DecodedOutput, DecodedTransaction, TransactionDecoder};
pub use decoder::{LocalDecoder, decode_transaction};
pub use error::Error;
pub use layout::{TransactionLayout, InputLayout};
pub use splice::{Strategy, splice_script_sig, splice_script_sig_with};
#[cfg(any(test, feature = "test-helpers"))]
pub use unsigned::{UnsignedTransaction, NU5_BRANCH_ID};
