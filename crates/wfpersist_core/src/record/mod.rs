mod accessor;
mod catalog;
mod compression;
mod domain;
mod error;
mod field;
mod history;
mod shard;
mod snapshot;
mod task;
mod timestamp;
mod value;
mod workflow;

/// Generic total field accessor.
pub use accessor::Accessor;
/// Record catalog: kinds, field lookup, and kind-tagged records.
pub use catalog::{AnyRecord, Record, RecordKind, fields};
/// Compression detection result.
pub use compression::Compression;
/// Domain records.
pub use domain::{DomainInfo, DomainInfoGetters};
/// Error and result aliases.
pub use error::{RecordError, Result};
/// Semantic type universe and default-value strategies.
pub use field::{Fallback, FieldSpec, FieldType, Scalar, Semantic, Slot};
/// History tree records.
pub use history::{HistoryBranchRange, HistoryTreeInfo, HistoryTreeInfoGetters};
/// Shard records.
pub use shard::{ShardInfo, ShardInfoGetters};
/// Snapshot loading entry points and options.
pub use snapshot::{LoadOptions, RecordSnapshot, check_fields};
/// Queue task and task-list records.
pub use task::{
	ReplicationTaskInfo, ReplicationTaskInfoGetters, TaskInfo, TaskInfoGetters, TaskListInfo, TaskListInfoGetters, TimerTaskInfo,
	TimerTaskInfoGetters, TransferTaskInfo, TransferTaskInfoGetters,
};
/// Persisted instant type.
pub use timestamp::Timestamp;
/// Dynamic accessor output types.
pub use value::{FieldValue, StructValue, Value};
/// Workflow mutable-state records.
pub use workflow::{
	ActivityInfo, ActivityInfoGetters, ChildExecutionInfo, ChildExecutionInfoGetters, RequestCancelInfo, RequestCancelInfoGetters,
	SignalInfo, SignalInfoGetters, TimerInfo, TimerInfoGetters, WorkflowExecutionInfo, WorkflowExecutionInfoGetters,
};
