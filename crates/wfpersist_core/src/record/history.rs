//! History tree bookkeeping.

use serde::{Deserialize, Serialize};

use crate::record::Timestamp;

/// One ancestor branch segment of a history tree branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryBranchRange {
	/// Ancestor branch id.
	pub branch_id: String,
	/// First node id inherited from the ancestor, inclusive.
	pub begin_node_id: i64,
	/// Last node id inherited from the ancestor, exclusive.
	pub end_node_id: i64,
}

impl HistoryBranchRange {
	/// Range covering `[begin_node_id, end_node_id)` of `branch_id`.
	pub fn new(branch_id: impl Into<String>, begin_node_id: i64, end_node_id: i64) -> Self {
		Self {
			branch_id: branch_id.into(),
			begin_node_id,
			end_node_id,
		}
	}
}

records! {
	/// History branch metadata.
	HistoryTreeInfo {
		created_timestamp: Timestamp,
		ancestors: Vec<HistoryBranchRange>,
		info: String,
	}
}
