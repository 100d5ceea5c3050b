//! Record declaration macros.
//!
//! `records!` expands one catalog declaration into:
//!
//! - a `#[serde(default)]` struct whose fields are all `Option<T>`,
//! - one `Accessor` constant per field (`ShardInfo::TIMER_ACK_LEVEL`),
//! - one inherent getter per field on the present record,
//! - a `<Name>Getters` trait implementing the same getters on
//!   `Option<&Name>` for the possibly-absent record,
//! - the `Record` impl carrying the ordered `FieldSpec` catalog.
//!
//! ```ignore
//! records! {
//!     /// Shard ownership bookkeeping.
//!     ShardInfo {
//!         owner: String,
//!         updated_at: Timestamp,
//!         failover_end: Timestamp [nullable],
//!     }
//! }
//! ```

/// Map an optional slot marker to a `Slot`.
macro_rules! slot_kind {
	() => {
		$crate::record::Slot::Stored
	};
	(nullable) => {
		$crate::record::Slot::Nullable
	};
}

/// Declare record kinds and generate their accessor layer.
macro_rules! records {
	($(
		$(#[$meta:meta])*
		$name:ident {
			$(
				$(#[$field_meta:meta])*
				$field:ident : $ty:ty $([$slot:ident])?
			),* $(,)?
		}
	)*) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
			#[serde(default)]
			pub struct $name {
				$(
					#[doc = concat!("Stored `", stringify!($field), "`; `None` when unset.")]
					$(#[$field_meta])*
					#[serde(skip_serializing_if = "Option::is_none")]
					pub $field: Option<$ty>,
				)*
			}

			::paste::paste! {
				impl $name {
					$(
						#[doc = concat!("Accessor for `", stringify!($name), ".", stringify!($field), "`.")]
						pub const [<$field:upper>]: $crate::record::Accessor<Self, $ty> =
							$crate::record::Accessor::new(stringify!($field), slot_kind!($($slot)?), |record| record.$field.as_ref());
					)*

					$(
						#[doc = concat!("Value of `", stringify!($field), "`, or its unset default.")]
						pub fn $field(&self) -> $ty {
							Self::[<$field:upper>].get(Some(self))
						}
					)*
				}

				#[doc = concat!("Nil-safe getters for a possibly absent `", stringify!($name), "`.")]
				pub trait [<$name Getters>] {
					$(
						#[doc = concat!("Value of `", stringify!($field), "`, or its absent/unset default.")]
						fn $field(&self) -> $ty;
					)*
				}

				impl [<$name Getters>] for Option<&$name> {
					$(
						fn $field(&self) -> $ty {
							$name::[<$field:upper>].get(*self)
						}
					)*
				}

				impl $crate::record::Record for $name {
					const RECORD_KIND: $crate::record::RecordKind = $crate::record::RecordKind::$name;
					const FIELDS: &'static [$crate::record::FieldSpec] = &[
						$( Self::[<$field:upper>].spec(), )*
					];

					fn values(record: Option<&Self>) -> $crate::record::StructValue {
						$crate::record::StructValue {
							type_name: stringify!($name).into(),
							fields: vec![
								$(
									$crate::record::FieldValue {
										name: stringify!($field).into(),
										value: $crate::record::Semantic::to_value(&Self::[<$field:upper>].get(record)),
									},
								)*
							],
						}
					}
				}
			}
		)*
	};
}
