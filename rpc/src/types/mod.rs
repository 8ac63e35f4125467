pub mod amount;
mod bytes;
mod hash;
mod operation;
mod script;
mod transaction;
mod unspent;

pub use self::bytes::Bytes;
pub use self::hash::H256;
pub use self::operation::{OperationState, OperationStatus, OperationResult, OperationError};
pub use self::script::{ScriptType, ScriptInfo};
pub use self::transaction::{
	TransactionInput, TransactionOutputWithAddress, TransactionOutputs, TransactionInputScript,
	TransactionOutputScript, SignedTransactionInput, SignedTransactionOutput, Transaction,
	GetRawTransactionResponse, WalletTransaction, Recipient,
};
pub use self::unspent::Unspent;
