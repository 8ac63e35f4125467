use super::hash::H256;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum OperationState {
	#[serde(rename = "queued")]
	Queued,
	#[serde(rename = "executing")]
	Executing,
	#[serde(rename = "success")]
	Success,
	#[serde(rename = "failed", alias = "error")]
	Failed,
	#[serde(rename = "cancelled")]
	Cancelled,
}

impl OperationState {
	pub fn is_finished(&self) -> bool {
		match *self {
			OperationState::Queued | OperationState::Executing => false,
			OperationState::Success | OperationState::Failed | OperationState::Cancelled => true,
		}
	}
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OperationResult {
	pub txid: H256,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OperationError {
	pub code: i64,
	pub message: String,
}

/// Entry of the z_getoperationresult and z_getoperationstatus responses
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OperationStatus {
	pub id: String,
	pub status: OperationState,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub method: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub creation_time: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<OperationResult>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<OperationError>,
}

#[cfg(test)]
mod tests {
	use serde_json;
	use super::{OperationStatus, OperationState};

	#[test]
	fn test_successful_operation() {
		let status: OperationStatus = serde_json::from_str(r#"{
			"id": "opid-f8d3c8f4-6b5a-4d4b-9c6f-2c2a6d9b2c11",
			"status": "success",
			"creation_time": 1700000000,
			"result": {"txid": "0000000000000000000000000000000000000000000000000000000000000077"},
			"execution_secs": 0.42,
			"method": "z_sendmany",
			"params": {}
		}"#).unwrap();
		assert_eq!(status.status, OperationState::Success);
		assert!(status.status.is_finished());
		assert_eq!(status.result.unwrap().txid.internal()[0], 0x77);
	}

	#[test]
	fn test_failed_operation() {
		let status: OperationStatus = serde_json::from_str(r#"{
			"id": "opid-1",
			"status": "failed",
			"error": {"code": -6, "message": "Insufficient funds"}
		}"#).unwrap();
		assert_eq!(status.status, OperationState::Failed);
		assert_eq!(status.error.unwrap().code, -6);

		let status: OperationStatus = serde_json::from_str(r#"{"id":"opid-2","status":"error"}"#).unwrap();
		assert_eq!(status.status, OperationState::Failed);
		assert!(!OperationState::Executing.is_finished());
	}
}
