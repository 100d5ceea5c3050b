//! Queue task and task-list records.

use std::collections::BTreeMap;

use crate::record::Timestamp;

records! {
	/// Durable timer queue task.
	TimerTaskInfo {
		domain_id: Vec<u8>,
		workflow_id: String,
		run_id: Vec<u8>,
		task_type: i16,
		timeout_type: i16,
		version: i64,
		schedule_attempt: i64,
		event_id: i64,
	}

	/// Durable transfer queue task.
	TransferTaskInfo {
		domain_id: Vec<u8>,
		workflow_id: String,
		run_id: Vec<u8>,
		task_type: i16,
		target_domain_id: Vec<u8>,
		target_domain_ids: Vec<Vec<u8>>,
		target_workflow_id: String,
		target_run_id: Vec<u8>,
		task_list: String,
		target_child_workflow_only: bool,
		schedule_id: i64,
		version: i64,
		visibility_timestamp: Timestamp,
	}

	/// Durable replication queue task.
	ReplicationTaskInfo {
		domain_id: Vec<u8>,
		workflow_id: String,
		run_id: Vec<u8>,
		task_type: i16,
		version: i64,
		first_event_id: i64,
		next_event_id: i64,
		scheduled_id: i64,
		event_store_version: i32,
		new_run_event_store_version: i32,
		branch_token: Vec<u8>,
		new_run_branch_token: Vec<u8>,
		creation_timestamp: Timestamp,
	}

	/// Matching task-list ack bookkeeping.
	TaskListInfo {
		kind: i16,
		ack_level: i64,
		expiry_timestamp: Timestamp,
		last_updated: Timestamp,
	}

	/// Matching task pointing at a scheduled decision or activity.
	TaskInfo {
		workflow_id: String,
		run_id: Vec<u8>,
		schedule_id: i64,
		expiry_timestamp: Timestamp,
		created_timestamp: Timestamp,
		partition_config: BTreeMap<String, String>,
	}
}
