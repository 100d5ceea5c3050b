use std::collections::BTreeMap;
use std::time::Duration;

use crate::record::Timestamp;

records! {
	/// Domain registration, replication, and archival settings.
	DomainInfo {
		name: String,
		description: String,
		owner: String,
		status: i32,
		retention: Duration,
		emit_metric: bool,
		archival_bucket: String,
		archival_status: i16,
		config_version: i64,
		notification_version: i64,
		failover_notification_version: i64,
		failover_version: i64,
		active_cluster_name: String,
		clusters: Vec<String>,
		data: BTreeMap<String, String>,
		bad_binaries: Vec<u8>,
		bad_binaries_encoding: String,
		history_archival_status: i16,
		history_archival_uri: String,
		visibility_archival_status: i16,
		visibility_archival_uri: String,
		/// End of a graceful failover; only persisted while one is in progress.
		failover_end_timestamp: Timestamp [nullable],
		previous_failover_version: i64,
		last_updated_timestamp: Timestamp,
	}
}
