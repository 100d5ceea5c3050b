//! Mutable-state records of a single workflow execution.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::record::Timestamp;

records! {
	/// Execution-level metadata of one workflow run.
	WorkflowExecutionInfo {
		parent_domain_id: Vec<u8>,
		parent_workflow_id: String,
		parent_run_id: Vec<u8>,
		first_execution_run_id: Vec<u8>,
		initiated_id: i64,
		completion_event_batch_id: i64 [nullable],
		/// Encoded completion event blob.
		completion_event: Vec<u8>,
		completion_event_encoding: String,
		task_list: String,
		workflow_type_name: String,
		workflow_timeout: Duration,
		decision_task_timeout: Duration,
		execution_context: Vec<u8>,
		state: i32,
		close_status: i32,
		start_version: i64,
		last_write_event_id: i64 [nullable],
		last_event_task_id: i64,
		last_first_event_id: i64,
		last_processed_event: i64,
		start_timestamp: Timestamp,
		last_updated_timestamp: Timestamp,
		create_request_id: String,
		decision_version: i64,
		decision_schedule_id: i64,
		decision_started_id: i64,
		decision_request_id: String,
		decision_timeout: Duration,
		decision_attempt: i64,
		decision_started_timestamp: Timestamp,
		decision_scheduled_timestamp: Timestamp,
		decision_original_scheduled_timestamp: Timestamp,
		cancel_requested: bool,
		cancel_request_id: String,
		sticky_task_list: String,
		sticky_schedule_to_start_timeout: Duration,
		client_library_version: String,
		client_feature_version: String,
		client_impl: String,
		auto_reset_points: Vec<u8>,
		auto_reset_points_encoding: String,
		retry_attempt: i64,
		retry_initial_interval: Duration,
		retry_maximum_interval: Duration,
		retry_maximum_attempts: i32,
		retry_expiration: Duration,
		retry_backoff_coefficient: f64,
		retry_expiration_timestamp: Timestamp,
		retry_non_retryable_errors: Vec<String>,
		has_retry_policy: bool,
		cron_schedule: String,
		is_cron: bool,
		event_store_version: i32,
		event_branch_token: Vec<u8>,
		signal_count: i64,
		history_size: i64,
		memo: BTreeMap<String, Vec<u8>>,
		search_attributes: BTreeMap<String, Vec<u8>>,
		/// Encoded version histories blob.
		version_histories: Vec<u8>,
		version_histories_encoding: String,
		partition_config: BTreeMap<String, String>,
	}

	/// Pending activity state.
	ActivityInfo {
		version: i64,
		scheduled_event_batch_id: i64,
		scheduled_event: Vec<u8>,
		scheduled_event_encoding: String,
		scheduled_timestamp: Timestamp,
		started_id: i64,
		started_event: Vec<u8>,
		started_event_encoding: String,
		started_timestamp: Timestamp,
		activity_id: String,
		request_id: String,
		schedule_to_start_timeout: Duration,
		schedule_to_close_timeout: Duration,
		start_to_close_timeout: Duration,
		heartbeat_timeout: Duration,
		cancel_requested: bool,
		/// Event id of the cancel request, not a request token.
		cancel_request_id: i64,
		timer_task_status: i32,
		attempt: i32,
		task_list: String,
		started_identity: String,
		has_retry_policy: bool,
		retry_initial_interval: Duration,
		retry_maximum_interval: Duration,
		retry_maximum_attempts: i32,
		retry_expiration_timestamp: Timestamp,
		retry_backoff_coefficient: f64,
		retry_non_retryable_errors: Vec<String>,
		retry_last_failure_reason: String,
		retry_last_worker_identity: String,
		retry_last_failure_details: Vec<u8>,
	}

	/// Pending child workflow state.
	ChildExecutionInfo {
		version: i64,
		initiated_event_batch_id: i64,
		started_id: i64,
		initiated_event: Vec<u8>,
		initiated_event_encoding: String,
		started_workflow_id: String,
		started_run_id: Vec<u8>,
		started_event: Vec<u8>,
		started_event_encoding: String,
		create_request_id: String,
		/// Target domain id in string form.
		domain_id: String,
		domain_name_deprecated: String,
		workflow_type_name: String,
		parent_close_policy: i32,
	}

	/// Pending outgoing signal.
	SignalInfo {
		version: i64,
		initiated_event_batch_id: i64,
		request_id: String,
		name: String,
		input: Vec<u8>,
		control: Vec<u8>,
	}

	/// Pending outgoing cancellation request.
	RequestCancelInfo {
		version: i64,
		initiated_event_batch_id: i64,
		cancel_request_id: String,
	}

	/// User timer state.
	TimerInfo {
		version: i64,
		started_id: i64,
		expiry_timestamp: Timestamp,
		task_id: i64,
	}
}
