#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::time::Duration;

use wfpersist::record::{
	ActivityInfo, ActivityInfoGetters, ChildExecutionInfo, ChildExecutionInfoGetters, DomainInfo, DomainInfoGetters,
	HistoryBranchRange, HistoryTreeInfo, HistoryTreeInfoGetters, ReplicationTaskInfo, ReplicationTaskInfoGetters, RequestCancelInfo,
	RequestCancelInfoGetters, ShardInfo, ShardInfoGetters, SignalInfo, SignalInfoGetters, TaskInfo, TaskInfoGetters, TaskListInfo,
	TaskListInfoGetters, TimerInfo, TimerInfoGetters, TimerTaskInfo, TimerTaskInfoGetters, Timestamp, TransferTaskInfo,
	TransferTaskInfoGetters, WorkflowExecutionInfo, WorkflowExecutionInfoGetters,
};

macro_rules! assert_getters {
	($record:ident, { $($field:ident => $expected:expr),* $(,)? }) => {
		$(assert_eq!($record.$field(), $expected, "{}", stringify!($field));)*
	};
}

#[test]
fn workflow_execution_info_empty() {
	let stored = WorkflowExecutionInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		parent_domain_id => Vec::<u8>::new(),
		parent_workflow_id => "",
		parent_run_id => Vec::<u8>::new(),
		first_execution_run_id => Vec::<u8>::new(),
		initiated_id => 0,
		completion_event_batch_id => 0,
		completion_event => Vec::<u8>::new(),
		completion_event_encoding => "",
		task_list => "",
		workflow_type_name => "",
		workflow_timeout => Duration::ZERO,
		decision_task_timeout => Duration::ZERO,
		execution_context => Vec::<u8>::new(),
		state => 0,
		close_status => 0,
		start_version => 0,
		last_write_event_id => 0,
		last_event_task_id => 0,
		last_first_event_id => 0,
		last_processed_event => 0,
		start_timestamp => Timestamp::zero(),
		last_updated_timestamp => Timestamp::zero(),
		create_request_id => "",
		decision_version => 0,
		decision_schedule_id => 0,
		decision_started_id => 0,
		decision_request_id => "",
		decision_timeout => Duration::ZERO,
		decision_attempt => 0,
		decision_started_timestamp => Timestamp::zero(),
		decision_scheduled_timestamp => Timestamp::zero(),
		decision_original_scheduled_timestamp => Timestamp::zero(),
		cancel_requested => false,
		cancel_request_id => "",
		sticky_task_list => "",
		sticky_schedule_to_start_timeout => Duration::ZERO,
		client_library_version => "",
		client_feature_version => "",
		client_impl => "",
		auto_reset_points => Vec::<u8>::new(),
		auto_reset_points_encoding => "",
		retry_attempt => 0,
		retry_initial_interval => Duration::ZERO,
		retry_maximum_interval => Duration::ZERO,
		retry_maximum_attempts => 0,
		retry_expiration => Duration::ZERO,
		retry_backoff_coefficient => 0.0,
		retry_expiration_timestamp => Timestamp::zero(),
		retry_non_retryable_errors => Vec::<String>::new(),
		has_retry_policy => false,
		cron_schedule => "",
		is_cron => false,
		event_store_version => 0,
		event_branch_token => Vec::<u8>::new(),
		signal_count => 0,
		history_size => 0,
		memo => BTreeMap::new(),
		search_attributes => BTreeMap::new(),
		version_histories => Vec::<u8>::new(),
		version_histories_encoding => "",
		partition_config => BTreeMap::new(),
	});
}

#[test]
fn activity_info_empty() {
	let stored = ActivityInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		version => 0,
		scheduled_event_batch_id => 0,
		scheduled_event => Vec::<u8>::new(),
		scheduled_event_encoding => "",
		scheduled_timestamp => Timestamp::zero(),
		started_id => 0,
		started_event => Vec::<u8>::new(),
		started_event_encoding => "",
		started_timestamp => Timestamp::zero(),
		activity_id => "",
		request_id => "",
		schedule_to_start_timeout => Duration::ZERO,
		schedule_to_close_timeout => Duration::ZERO,
		start_to_close_timeout => Duration::ZERO,
		heartbeat_timeout => Duration::ZERO,
		cancel_requested => false,
		cancel_request_id => 0,
		timer_task_status => 0,
		attempt => 0,
		task_list => "",
		started_identity => "",
		has_retry_policy => false,
		retry_initial_interval => Duration::ZERO,
		retry_maximum_interval => Duration::ZERO,
		retry_maximum_attempts => 0,
		retry_expiration_timestamp => Timestamp::zero(),
		retry_backoff_coefficient => 0.0,
		retry_non_retryable_errors => Vec::<String>::new(),
		retry_last_failure_reason => "",
		retry_last_worker_identity => "",
		retry_last_failure_details => Vec::<u8>::new(),
	});
}

#[test]
fn child_execution_info_empty() {
	let stored = ChildExecutionInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		version => 0,
		initiated_event_batch_id => 0,
		started_id => 0,
		initiated_event => Vec::<u8>::new(),
		initiated_event_encoding => "",
		started_workflow_id => "",
		started_run_id => Vec::<u8>::new(),
		started_event => Vec::<u8>::new(),
		started_event_encoding => "",
		create_request_id => "",
		domain_id => "",
		domain_name_deprecated => "",
		workflow_type_name => "",
		parent_close_policy => 0,
	});
}

#[test]
fn signal_info_empty() {
	let stored = SignalInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		version => 0,
		initiated_event_batch_id => 0,
		request_id => "",
		name => "",
		input => Vec::<u8>::new(),
		control => Vec::<u8>::new(),
	});
}

#[test]
fn request_cancel_info_empty() {
	let stored = RequestCancelInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		version => 0,
		initiated_event_batch_id => 0,
		cancel_request_id => "",
	});
}

#[test]
fn timer_info_empty() {
	let stored = TimerInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		version => 0,
		started_id => 0,
		expiry_timestamp => Timestamp::zero(),
		task_id => 0,
	});
}

#[test]
fn timer_task_info_empty() {
	let stored = TimerTaskInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		domain_id => Vec::<u8>::new(),
		workflow_id => "",
		run_id => Vec::<u8>::new(),
		task_type => 0,
		timeout_type => 0,
		version => 0,
		schedule_attempt => 0,
		event_id => 0,
	});
}

#[test]
fn transfer_task_info_empty() {
	let stored = TransferTaskInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		domain_id => Vec::<u8>::new(),
		workflow_id => "",
		run_id => Vec::<u8>::new(),
		task_type => 0,
		target_domain_id => Vec::<u8>::new(),
		target_domain_ids => Vec::<Vec<u8>>::new(),
		target_workflow_id => "",
		target_run_id => Vec::<u8>::new(),
		task_list => "",
		target_child_workflow_only => false,
		schedule_id => 0,
		version => 0,
		visibility_timestamp => Timestamp::zero(),
	});
}

#[test]
fn replication_task_info_empty() {
	let stored = ReplicationTaskInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		domain_id => Vec::<u8>::new(),
		workflow_id => "",
		run_id => Vec::<u8>::new(),
		task_type => 0,
		version => 0,
		first_event_id => 0,
		next_event_id => 0,
		scheduled_id => 0,
		event_store_version => 0,
		new_run_event_store_version => 0,
		branch_token => Vec::<u8>::new(),
		new_run_branch_token => Vec::<u8>::new(),
		creation_timestamp => Timestamp::zero(),
	});
}

#[test]
fn task_list_info_empty() {
	let stored = TaskListInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		kind => 0,
		ack_level => 0,
		expiry_timestamp => Timestamp::zero(),
		last_updated => Timestamp::zero(),
	});
}

#[test]
fn task_info_empty() {
	let stored = TaskInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		workflow_id => "",
		run_id => Vec::<u8>::new(),
		schedule_id => 0,
		expiry_timestamp => Timestamp::zero(),
		created_timestamp => Timestamp::zero(),
		partition_config => BTreeMap::new(),
	});
}

#[test]
fn history_tree_info_empty() {
	let stored = HistoryTreeInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		created_timestamp => Timestamp::zero(),
		ancestors => Vec::<HistoryBranchRange>::new(),
		info => "",
	});
}

#[test]
fn domain_info_empty() {
	let stored = DomainInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		name => "",
		description => "",
		owner => "",
		status => 0,
		retention => Duration::ZERO,
		emit_metric => false,
		archival_bucket => "",
		archival_status => 0,
		config_version => 0,
		notification_version => 0,
		failover_notification_version => 0,
		failover_version => 0,
		active_cluster_name => "",
		clusters => Vec::<String>::new(),
		data => BTreeMap::new(),
		bad_binaries => Vec::<u8>::new(),
		bad_binaries_encoding => "",
		history_archival_status => 0,
		history_archival_uri => "",
		visibility_archival_status => 0,
		visibility_archival_uri => "",
		failover_end_timestamp => Timestamp::unix_epoch(),
		previous_failover_version => 0,
		last_updated_timestamp => Timestamp::zero(),
	});
}

#[test]
fn shard_info_empty() {
	let stored = ShardInfo::default();
	let record = Some(&stored);
	assert_getters!(record, {
		stolen_since_renew => 0,
		updated_at => Timestamp::zero(),
		replication_ack_level => 0,
		transfer_ack_level => 0,
		timer_ack_level => Timestamp::zero(),
		domain_notification_version => 0,
		cluster_transfer_ack_level => BTreeMap::new(),
		cluster_timer_ack_level => BTreeMap::new(),
		owner => "",
		cluster_replication_level => BTreeMap::new(),
		pending_failover_markers => Vec::<u8>::new(),
		pending_failover_markers_encoding => "",
		replication_dlq_ack_level => BTreeMap::new(),
		transfer_processing_queue_states => Vec::<u8>::new(),
		transfer_processing_queue_states_encoding => "",
		timer_processing_queue_states => Vec::<u8>::new(),
		timer_processing_queue_states_encoding => "",
		cross_cluster_processing_queue_states => Vec::<u8>::new(),
		cross_cluster_processing_queue_states_encoding => "",
	});
}
