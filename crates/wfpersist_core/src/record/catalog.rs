use std::fmt;
use std::str::FromStr;

use crate::record::{
	ActivityInfo, ChildExecutionInfo, DomainInfo, FieldSpec, HistoryTreeInfo, RecordError, ReplicationTaskInfo, RequestCancelInfo,
	Result, ShardInfo, SignalInfo, StructValue, TaskInfo, TaskListInfo, TimerInfo, TimerTaskInfo, TransferTaskInfo, WorkflowExecutionInfo,
};

/// A persistence record type with a fixed, ordered field catalog.
pub trait Record: Sized {
	/// Catalog kind of this record type.
	const RECORD_KIND: RecordKind;
	/// Fields in declaration order.
	const FIELDS: &'static [FieldSpec];

	/// Full accessor output vector for a possibly absent record.
	fn values(record: Option<&Self>) -> StructValue;
}

macro_rules! catalog {
	($($name:ident => $label:literal),* $(,)?) => {
		/// Closed set of persistence record kinds.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum RecordKind {
			$(
				#[doc = concat!("`", stringify!($name), "` records.")]
				$name,
			)*
		}

		impl RecordKind {
			/// Every kind, in catalog order.
			pub const ALL: &'static [RecordKind] = &[$(Self::$name),*];

			/// Record type name, e.g. `ShardInfo`.
			pub fn name(self) -> &'static str {
				match self {
					$(Self::$name => stringify!($name),)*
				}
			}

			/// Snake-case label, e.g. `shard_info`.
			pub fn label(self) -> &'static str {
				match self {
					$(Self::$name => $label,)*
				}
			}

			/// Ordered field catalog for this kind.
			pub fn fields(self) -> &'static [FieldSpec] {
				match self {
					$(Self::$name => <$name as Record>::FIELDS,)*
				}
			}

			/// Accessor output vector of an absent record of this kind.
			pub fn absent_values(self) -> StructValue {
				match self {
					$(Self::$name => <$name as Record>::values(None),)*
				}
			}
		}

		impl FromStr for RecordKind {
			type Err = RecordError;

			fn from_str(input: &str) -> Result<Self> {
				match input {
					$(stringify!($name) | $label => Ok(Self::$name),)*
					_ => Err(RecordError::UnknownRecordKind { name: input.to_owned() }),
				}
			}
		}

		/// Kind-tagged record that may be absent.
		#[derive(Debug, Clone, PartialEq)]
		pub enum AnyRecord {
			$(
				#[doc = concat!("A possibly absent `", stringify!($name), "`.")]
				$name(Option<$name>),
			)*
		}

		impl AnyRecord {
			/// Absent record of the given kind.
			pub fn absent(kind: RecordKind) -> Self {
				match kind {
					$(RecordKind::$name => Self::$name(None),)*
				}
			}

			/// Decode a JSON record object as the given kind.
			///
			/// `null` decodes to the absent record.
			pub fn from_json(kind: RecordKind, json: serde_json::Value) -> Result<Self> {
				match kind {
					$(RecordKind::$name => Ok(Self::$name(serde_json::from_value(json)?)),)*
				}
			}

			/// Kind of the record.
			pub fn kind(&self) -> RecordKind {
				match self {
					$(Self::$name(_) => RecordKind::$name,)*
				}
			}

			/// Whether the record itself is absent.
			pub fn is_absent(&self) -> bool {
				match self {
					$(Self::$name(record) => record.is_none(),)*
				}
			}

			/// Full accessor output vector.
			pub fn values(&self) -> StructValue {
				match self {
					$(Self::$name(record) => <$name as Record>::values(record.as_ref()),)*
				}
			}
		}

		$(
			impl From<$name> for AnyRecord {
				fn from(value: $name) -> Self {
					Self::$name(Some(value))
				}
			}
		)*
	};
}

catalog! {
	WorkflowExecutionInfo => "workflow_execution_info",
	ActivityInfo => "activity_info",
	ChildExecutionInfo => "child_execution_info",
	SignalInfo => "signal_info",
	RequestCancelInfo => "request_cancel_info",
	TimerInfo => "timer_info",
	TimerTaskInfo => "timer_task_info",
	TransferTaskInfo => "transfer_task_info",
	ReplicationTaskInfo => "replication_task_info",
	TaskListInfo => "task_list_info",
	TaskInfo => "task_info",
	HistoryTreeInfo => "history_tree_info",
	DomainInfo => "domain_info",
	ShardInfo => "shard_info",
}

/// Ordered field catalog of a record kind.
pub fn fields(kind: RecordKind) -> &'static [FieldSpec] {
	kind.fields()
}

impl fmt::Display for RecordKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
