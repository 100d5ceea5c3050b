use std::collections::BTreeMap;

use crate::record::Timestamp;

records! {
	/// Shard ownership and queue ack-level bookkeeping.
	ShardInfo {
		stolen_since_renew: i32,
		updated_at: Timestamp,
		replication_ack_level: i64,
		transfer_ack_level: i64,
		timer_ack_level: Timestamp,
		domain_notification_version: i64,
		cluster_transfer_ack_level: BTreeMap<String, i64>,
		cluster_timer_ack_level: BTreeMap<String, Timestamp>,
		owner: String,
		cluster_replication_level: BTreeMap<String, i64>,
		pending_failover_markers: Vec<u8>,
		pending_failover_markers_encoding: String,
		replication_dlq_ack_level: BTreeMap<String, i64>,
		transfer_processing_queue_states: Vec<u8>,
		transfer_processing_queue_states_encoding: String,
		timer_processing_queue_states: Vec<u8>,
		timer_processing_queue_states_encoding: String,
		cross_cluster_processing_queue_states: Vec<u8>,
		cross_cluster_processing_queue_states_encoding: String,
	}
}
