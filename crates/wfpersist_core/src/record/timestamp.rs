use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Seconds between `0001-01-01T00:00:00Z` and the Unix epoch.
const ZERO_INSTANT_UNIX_SECS: i64 = -62_135_596_800;

/// Instant stored in a persistence record.
///
/// Two distinct "zero" instants exist and both are observable through
/// accessors:
///
/// - [`Timestamp::unix_epoch`] is returned for timestamp fields of an
///   absent record (and for unset nullable timestamp slots).
/// - [`Timestamp::zero`] is the storage representation's own zero value,
///   returned for an unset stored timestamp on a present record.
///
/// Whether the asymmetry is intended upstream is unresolved. The two values
/// must stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
	/// `1970-01-01T00:00:00Z`.
	pub fn unix_epoch() -> Self {
		Self(DateTime::<Utc>::default())
	}

	/// `0001-01-01T00:00:00Z`, the intrinsic zero instant of stored timestamps.
	pub fn zero() -> Self {
		Self(DateTime::from_timestamp(ZERO_INSTANT_UNIX_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC))
	}

	/// Build from whole seconds and nanoseconds since the Unix epoch.
	///
	/// Returns `None` when the instant is outside the representable range.
	pub fn from_unix(secs: i64, nanos: u32) -> Option<Self> {
		DateTime::from_timestamp(secs, nanos).map(Self)
	}

	/// Parse an RFC 3339 instant such as `2024-03-01T10:00:00Z`.
	pub fn parse_rfc3339(input: &str) -> Option<Self> {
		DateTime::parse_from_rfc3339(input).ok().map(|value| Self(value.with_timezone(&Utc)))
	}

	/// Whether this is the Unix epoch instant.
	pub fn is_unix_epoch(&self) -> bool {
		*self == Self::unix_epoch()
	}

	/// Whether this is the intrinsic zero instant.
	pub fn is_zero(&self) -> bool {
		*self == Self::zero()
	}

	/// Borrow the underlying UTC datetime.
	pub fn as_datetime(&self) -> &DateTime<Utc> {
		&self.0
	}
}

impl From<DateTime<Utc>> for Timestamp {
	fn from(value: DateTime<Utc>) -> Self {
		Self(value)
	}
}

impl From<Timestamp> for DateTime<Utc> {
	fn from(value: Timestamp) -> Self {
		value.0
	}
}

impl fmt::Display for Timestamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
	}
}
